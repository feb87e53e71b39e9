// SPDX-License-Identifier: MPL-2.0
use tinymce_widget::config::{self, Settings};
use tinymce_widget::editor_config::EditorConfig;
use tinymce_widget::html::AttrMap;
use tinymce_widget::i18n::spelling::DictionaryIndex;
use tinymce_widget::i18n::{language_config, LanguageEntry, LocaleInfo};
use tinymce_widget::urls::{StaticRoutes, CSS_ROUTE, FILEBROWSER_ROUTE};
use tinymce_widget::widget::{FormWidget, TinyMce};

use serde_json::json;
use tempfile::tempdir;

fn spellchecking_settings() -> Settings {
    Settings {
        use_spellchecker: true,
        use_filebrowser: true,
        css_url: Some("/static/tinymce/widget.css".to_string()),
        ..Settings::default()
    }
}

#[test]
fn full_render_pipeline_produces_localized_editor_markup() {
    let locale = LocaleInfo::new("en-us", false);
    let languages = vec![
        LanguageEntry::new("en-us", "English"),
        LanguageEntry::new("fr-fr", "French"),
    ];
    let dictionaries: DictionaryIndex = ["en_US", "fr"].into_iter().collect();
    let fragment = language_config(&locale, true, &languages, &dictionaries);

    let widget = TinyMce::new(spellchecking_settings(), fragment);
    let html = widget
        .render("body", Some("Tom & Jerry's <b>draft</b>"), None)
        .expect("render failed")
        .into_string();

    // Host element with the value escaped exactly once.
    assert!(html.starts_with("<textarea id=\"id_body\" name=\"body\">"));
    assert_eq!(
        html.matches("Tom &amp; Jerry&#x27;s &lt;b&gt;draft&lt;/b&gt;")
            .count(),
        1
    );

    // Locale fragment survives the merge into the script block.
    assert!(html.contains("\"language\": \"en\""));
    assert!(html.contains("\"directionality\": \"ltr\""));
    assert!(html.contains("\"spellchecker_language\": \"en_US\""));
    assert!(html.contains("\"spellchecker_languages\": \"English=en_US,French=fr\""));

    // Selector scoped to the rendered field.
    assert!(html.contains("\"selector\": \"textarea.tinymce#id_body\""));

    // Feature-gated default callbacks, rendered unquoted.
    assert!(html.contains("file_browser_callback: tinyMCEFileBrowser,"));
    assert!(html.contains("spellchecker_callback: function(method, text, success, failure)"));
    assert!(html.contains("<script type=\"text/javascript\">tinyMCE.init({"));
}

#[test]
fn per_field_overrides_win_and_widget_state_survives_renders() {
    let locale = LocaleInfo::new("he", true);
    let fragment = language_config(&locale, false, &[], &DictionaryIndex::default());
    let overrides: EditorConfig = [("height", json!(500)), ("menubar", json!(true))]
        .into_iter()
        .collect();

    let widget = TinyMce::new(Settings::default(), fragment).with_mce_attrs(overrides);
    let attrs = AttrMap::new().with("id", "id_story");

    let first = widget
        .render("story", None, Some(&attrs))
        .expect("render failed");
    let second = widget
        .render("story", None, Some(&attrs))
        .expect("render failed");

    assert_eq!(first, second);
    assert!(first.as_str().contains("\"directionality\": \"rtl\""));
    assert!(first.as_str().contains("\"height\": 500"));
    assert!(first
        .as_str()
        .contains("\"selector\": \"textarea.tinymce#id_story\""));
}

#[test]
fn media_resolves_named_routes() {
    let locale = LocaleInfo::new("en-us", false);
    let fragment = language_config(&locale, false, &[], &DictionaryIndex::default());
    let settings = Settings {
        use_filebrowser: true,
        ..Settings::default()
    };
    let widget = TinyMce::new(settings, fragment);
    let routes = StaticRoutes::new()
        .route(FILEBROWSER_ROUTE, "/tinymce/filebrowser.js")
        .route(CSS_ROUTE, "/tinymce/widget.css");

    let media = widget.media(&routes).expect("media failed");
    assert_eq!(media.js.len(), 2);
    assert_eq!(media.js[1], "/tinymce/filebrowser.js");
    assert_eq!(
        media.css.get("all"),
        Some(&vec!["/tinymce/widget.css".to_string()])
    );
}

#[test]
fn settings_file_drives_widget_rendering() {
    let dir = tempdir().expect("failed to create temporary directory");
    let path = dir.path().join("tinymce.toml");

    let mut stored = Settings::default();
    stored.use_filebrowser = true;
    stored.callbacks.set("file_browser_callback", "myBrowser");
    config::save_to_path(&stored, &path).expect("failed to save settings");

    let loaded = config::load_from_path(&path).expect("failed to load settings");
    let locale = LocaleInfo::new("en-us", false);
    let fragment = language_config(&locale, false, &[], &DictionaryIndex::default());

    let html = TinyMce::new(loaded, fragment)
        .render("body", None, None)
        .expect("render failed")
        .into_string();

    // The caller-supplied callback from the settings file is kept as-is.
    assert!(html.contains("file_browser_callback: myBrowser,"));
    assert!(!html.contains("tinyMCEFileBrowser"));
}
