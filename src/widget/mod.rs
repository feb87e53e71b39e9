// SPDX-License-Identifier: MPL-2.0
//! The TinyMCE form widget.
//!
//! [`TinyMce`] composes three configuration layers at render time — the
//! locale fragment, the default profile, and per-field overrides — scopes
//! the CSS selector to the rendered field, and emits the host element plus
//! the `tinyMCE.init` script block. [`AdminTinyMce`] composes the same
//! widget with the admin-textarea capability.
//!
//! Rendering never mutates the widget, so one widget instance may serve
//! concurrent render calls.

use crate::config::{defaults, Settings};
use crate::editor_config::{CallbackRegistry, EditorConfig};
use crate::error::{Error, Result};
use crate::html::{escape, AttrMap, SafeHtml};
use crate::templates::{self, INIT_TEMPLATE, SPELLCHECKER_TEMPLATE};
use crate::urls::{UrlResolver, CSS_ROUTE, FILEBROWSER_ROUTE};
use minijinja::context;
use serde::Serialize;
use std::collections::BTreeMap;

/// Well-known callback slot for the file browser.
pub const FILE_BROWSER_CALLBACK: &str = "file_browser_callback";

/// Well-known callback slot for the spellchecker.
pub const SPELLCHECKER_CALLBACK: &str = "spellchecker_callback";

/// Static assets a form needs when it contains this widget.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Media {
    pub js: Vec<String>,
    /// Stylesheets keyed by media type (`"all"` for the widget stylesheet).
    pub css: BTreeMap<String, Vec<String>>,
}

/// Capability of rendering as a form field: the seam a host form layer
/// consumes.
pub trait FormWidget {
    /// Renders the widget markup for one form field. The returned markup is
    /// pre-escaped; the caller's template layer must not escape it again.
    fn render(&self, name: &str, value: Option<&str>, extra_attrs: Option<&AttrMap>)
        -> Result<SafeHtml>;

    /// The JS/CSS assets this widget requires.
    fn media(&self, router: &dyn UrlResolver) -> Result<Media>;
}

/// Capability of rendering inside an admin change form.
pub trait AdminField {
    /// Attribute overrides the admin form applies to the base widget.
    fn admin_attrs(&self) -> AttrMap;
}

/// The TinyMCE editor widget.
pub struct TinyMce {
    settings: Settings,
    locale_config: EditorConfig,
    attrs: AttrMap,
    mce_attrs: EditorConfig,
    profile: Option<EditorConfig>,
}

impl TinyMce {
    /// Creates a widget from immutable settings and the locale fragment
    /// produced by [`crate::i18n::language_config`].
    pub fn new(settings: Settings, locale_config: EditorConfig) -> Self {
        Self {
            settings,
            locale_config,
            attrs: AttrMap::new(),
            mce_attrs: EditorConfig::new(),
            profile: None,
        }
    }

    /// HTML attributes applied to every render of this widget.
    pub fn with_attrs(mut self, attrs: AttrMap) -> Self {
        self.attrs = attrs;
        self
    }

    /// Per-instance editor overrides, merged last (they win per key).
    pub fn with_mce_attrs(mut self, mce_attrs: EditorConfig) -> Self {
        self.mce_attrs = mce_attrs;
        self
    }

    /// Replaces the default profile layer from [`Settings`].
    pub fn with_profile(mut self, profile: EditorConfig) -> Self {
        self.profile = Some(profile);
        self
    }

    /// Locale fragment with the profile layer merged on top.
    fn base_config(&self) -> EditorConfig {
        let mut config = self.locale_config.clone();
        config.merge_from(self.profile.as_ref().unwrap_or(&self.settings.default_config));
        config
    }

    /// The callback registry for one render: caller-registered callbacks
    /// plus feature-gated defaults for empty well-known slots.
    fn render_callbacks(&self) -> Result<CallbackRegistry> {
        let mut callbacks = self.settings.callbacks.clone();
        if self.settings.use_filebrowser {
            callbacks.set_default(FILE_BROWSER_CALLBACK, defaults::DEFAULT_FILEBROWSER_CALLBACK);
        }
        if self.settings.use_spellchecker && !callbacks.contains(SPELLCHECKER_CALLBACK) {
            callbacks.set(
                SPELLCHECKER_CALLBACK,
                templates::render_to_string(SPELLCHECKER_TEMPLATE, context! {})?.trim_end(),
            );
        }
        Ok(callbacks)
    }
}

impl FormWidget for TinyMce {
    fn render(
        &self,
        name: &str,
        value: Option<&str>,
        extra_attrs: Option<&AttrMap>,
    ) -> Result<SafeHtml> {
        let mut final_attrs = self.attrs.clone();
        if let Some(extra) = extra_attrs {
            final_attrs.extend_from(extra);
        }
        final_attrs.set("name", name);
        if !final_attrs.contains("id") {
            final_attrs.set("id", format!("id_{}", name));
        }
        let field_id = final_attrs
            .get("id")
            .unwrap_or_default()
            .to_string();

        let mut config = self.base_config();
        config.merge_from(&self.mce_attrs);
        config.scope_selector(&field_id);

        let escaped_value = escape(value.unwrap_or(""));
        let mut markup = if config.is_inline() {
            format!("<div{}>{}</div>\n", final_attrs.flatatt(), escaped_value)
        } else {
            format!(
                "<textarea{}>{}</textarea>\n",
                final_attrs.flatatt(),
                escaped_value
            )
        };

        let script = templates::render_to_string(
            INIT_TEMPLATE,
            context! {
                callbacks => self.render_callbacks()?,
                tinymce_config => config.script_body()?,
            },
        )?;
        markup.push_str("<script type=\"text/javascript\">");
        markup.push_str(&script);
        markup.push_str("</script>");
        Ok(SafeHtml::from_trusted(markup))
    }

    fn media(&self, router: &dyn UrlResolver) -> Result<Media> {
        let mut js = vec![self.settings.js_url.clone()];
        if self.settings.use_filebrowser {
            let url = router
                .reverse(FILEBROWSER_ROUTE)
                .ok_or_else(|| Error::NoReverseMatch(FILEBROWSER_ROUTE.to_string()))?;
            js.push(url);
        }
        let css_url = match &self.settings.css_url {
            Some(url) => url.clone(),
            None => router
                .reverse(CSS_ROUTE)
                .ok_or_else(|| Error::NoReverseMatch(CSS_ROUTE.to_string()))?,
        };
        let mut css = BTreeMap::new();
        css.insert("all".to_string(), vec![css_url]);
        Ok(Media { js, css })
    }
}

/// TinyMCE widget for admin change forms.
///
/// Composes the editor capability with the admin-field capability; there is
/// no extra rendering logic, only the admin attribute overlay.
pub struct AdminTinyMce {
    inner: TinyMce,
}

impl AdminTinyMce {
    pub fn new(widget: TinyMce) -> Self {
        Self { inner: widget }
    }
}

impl AdminField for AdminTinyMce {
    fn admin_attrs(&self) -> AttrMap {
        AttrMap::new().with("class", "vLargeTextField")
    }
}

impl FormWidget for AdminTinyMce {
    fn render(
        &self,
        name: &str,
        value: Option<&str>,
        extra_attrs: Option<&AttrMap>,
    ) -> Result<SafeHtml> {
        let mut attrs = self.admin_attrs();
        if let Some(extra) = extra_attrs {
            attrs.extend_from(extra);
        }
        self.inner.render(name, value, Some(&attrs))
    }

    fn media(&self, router: &dyn UrlResolver) -> Result<Media> {
        self.inner.media(router)
    }
}
