// SPDX-License-Identifier: MPL-2.0
//! Named-route reverse lookup.
//!
//! The widget needs two routes from the host application: the file-browser
//! script and the widget stylesheet. Hosts adapt their router behind
//! [`UrlResolver`]; [`StaticRoutes`] covers tests and simple deployments.

use std::collections::BTreeMap;

/// Route serving the file-browser integration script.
pub const FILEBROWSER_ROUTE: &str = "tinymce-filebrowser";

/// Route serving the widget stylesheet when no `css_url` is configured.
pub const CSS_ROUTE: &str = "tinymce-css";

/// Reverse lookup from a route name to a URL, implemented by the host's
/// URL router.
pub trait UrlResolver {
    fn reverse(&self, name: &str) -> Option<String>;
}

/// Fixed name-to-URL table.
#[derive(Debug, Clone, Default)]
pub struct StaticRoutes(BTreeMap<String, String>);

impl StaticRoutes {
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    pub fn route(mut self, name: impl Into<String>, url: impl Into<String>) -> Self {
        self.0.insert(name.into(), url.into());
        self
    }
}

impl UrlResolver for StaticRoutes {
    fn reverse(&self, name: &str) -> Option<String> {
        self.0.get(name).cloned()
    }
}
