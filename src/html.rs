// SPDX-License-Identifier: MPL-2.0
//! HTML safety utilities: entity escaping, attribute flattening, and the
//! [`SafeHtml`] marker for pre-escaped markup.

use std::collections::BTreeMap;
use std::fmt;

/// Escapes a value for embedding in HTML text or attribute content.
///
/// Replaces `&`, `<`, `>`, `"` and `'` with their entity forms in a single
/// pass, so already-present entities in the input are escaped exactly once
/// and never re-expanded.
pub fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(ch),
        }
    }
    out
}

/// HTML attributes for a rendered form element.
///
/// Backed by a sorted map so [`AttrMap::flatatt`] produces the attribute
/// list in a deterministic order regardless of insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttrMap(BTreeMap<String, String>);

impl AttrMap {
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }

    /// Builder-style variant of [`AttrMap::set`].
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Copies every attribute of `other` over `self` (later source wins).
    pub fn extend_from(&mut self, other: &AttrMap) {
        for (name, value) in &other.0 {
            self.0.insert(name.clone(), value.clone());
        }
    }

    /// Flattens the attributes into ` name="value"` pairs with escaped
    /// values, ready to splice after a tag name.
    pub fn flatatt(&self) -> String {
        let mut out = String::new();
        for (name, value) in &self.0 {
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            out.push_str(&escape(value));
            out.push('"');
        }
        out
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &String)> {
        self.0.iter()
    }
}

/// Markup that has already been escaped and must not be escaped again by the
/// caller's template layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SafeHtml(String);

impl SafeHtml {
    /// Marks `markup` as safe. The caller is responsible for having escaped
    /// any untrusted content inside it.
    pub fn from_trusted(markup: String) -> Self {
        Self(markup)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for SafeHtml {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<SafeHtml> for String {
    fn from(html: SafeHtml) -> Self {
        html.0
    }
}
