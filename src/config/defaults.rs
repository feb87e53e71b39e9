// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for the widget configuration.
//!
//! This module is the single source of truth for the stock editor profile
//! and asset URLs used when the host application supplies none.

use crate::editor_config::EditorConfig;

/// Default URL of the TinyMCE JavaScript bundle, relative to the host's
/// static file root.
pub const DEFAULT_JS_URL: &str = "/static/tinymce/tinymce.min.js";

/// Base CSS selector the editor attaches to. Each render appends the field
/// id, e.g. `textarea.tinymce#id_body`.
pub const DEFAULT_SELECTOR: &str = "textarea.tinymce";

/// JavaScript function name used for the `file_browser_callback` slot when
/// the file browser is enabled and the caller supplied no callback. The
/// function is defined by the script served under the `tinymce-filebrowser`
/// route.
pub const DEFAULT_FILEBROWSER_CALLBACK: &str = "tinyMCEFileBrowser";

/// The stock editor profile used when neither the settings file nor the
/// widget constructor provides one.
pub fn default_editor_config() -> EditorConfig {
    let mut config = EditorConfig::new();
    config.insert("selector", DEFAULT_SELECTOR);
    config.insert("theme", "modern");
    config.insert(
        "plugins",
        "link image preview codesample contextmenu table code lists",
    );
    config.insert(
        "toolbar1",
        "formatselect | bold italic underline | alignleft aligncenter alignright alignjustify \
         | bullist numlist | outdent indent | table | link image | codesample | preview code",
    );
    config.insert("contextmenu", "formats | link image");
    config.insert("menubar", false);
    config.insert("inline", false);
    config.insert("statusbar", true);
    config.insert("width", "auto");
    config.insert("height", 360);
    config
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn default_profile_targets_the_base_selector() {
        let config = default_editor_config();
        assert_eq!(config.get("selector"), Some(&json!(DEFAULT_SELECTOR)));
    }

    #[test]
    fn default_profile_is_not_inline() {
        let config = default_editor_config();
        assert!(!config.is_inline());
    }

    #[test]
    fn default_profile_keeps_declaration_order() {
        let config = default_editor_config();
        let keys: Vec<&str> = config.iter().map(|(key, _)| key.as_str()).take(2).collect();
        assert_eq!(keys, vec!["selector", "theme"]);
    }
}
