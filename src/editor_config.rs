// SPDX-License-Identifier: MPL-2.0
//! The ordered key-value structure serialized into TinyMCE's `init` call.
//!
//! An [`EditorConfig`] is built from three layers — the locale fragment, the
//! static default profile, and per-field overrides — merged shallowly with
//! last-write-wins semantics. Key order is insertion order and survives
//! serialization, so the emitted script is deterministic.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Ordered mapping of TinyMCE configuration keys to JSON values.
///
/// Key names are part of the wire contract with the TinyMCE client
/// (`language`, `directionality`, `spellchecker_language`,
/// `spellchecker_languages`, `selector`, plus caller-supplied keys) and are
/// emitted verbatim.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EditorConfig(Map<String, Value>);

impl EditorConfig {
    pub fn new() -> Self {
        Self(Map::new())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Shallow merge: every key of `other` is copied over `self`, replacing
    /// any existing value. Nested objects are not merged recursively.
    pub fn merge_from(&mut self, other: &EditorConfig) {
        for (key, value) in &other.0 {
            self.0.insert(key.clone(), value.clone());
        }
    }

    /// Appends `#<field_id>` to the `selector` key, scoping the editor to a
    /// single form field. A missing selector degrades to just the fragment.
    pub fn scope_selector(&mut self, field_id: &str) {
        let selector = self
            .0
            .entry("selector".to_string())
            .or_insert_with(|| Value::String(String::new()));
        if let Value::String(base) = selector {
            base.push('#');
            base.push_str(field_id);
        }
    }

    /// Whether the merged configuration asks for inline editing mode
    /// (`<div>` host element instead of `<textarea>`).
    pub fn is_inline(&self) -> bool {
        matches!(self.0.get("inline"), Some(Value::Bool(true)))
    }

    /// Serializes to a pretty-printed JSON object (two-space indent).
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.0)?)
    }

    /// The JSON object body with the outer braces stripped, ready to be
    /// spliced after the callback entries inside `tinyMCE.init({ ... })`.
    pub fn script_body(&self) -> Result<String> {
        let json = self.to_json_pretty()?;
        let body = json
            .strip_prefix('{')
            .and_then(|rest| rest.strip_suffix('}'))
            .unwrap_or(&json);
        Ok(body.to_string())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }
}

impl From<Map<String, Value>> for EditorConfig {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for EditorConfig {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}

/// Registry of client-side callbacks injected next to the JSON config.
///
/// Values are JavaScript expressions (a function name or an inline function)
/// and are written into the script block unquoted. Keys render in sorted
/// order so the emitted markup is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CallbackRegistry(BTreeMap<String, String>);

impl CallbackRegistry {
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn set(&mut self, name: impl Into<String>, source: impl Into<String>) {
        self.0.insert(name.into(), source.into());
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    /// Fills a well-known callback slot only when the caller has not already
    /// supplied one. Caller-provided callbacks are never overwritten.
    pub fn set_default(&mut self, name: &str, source: impl Into<String>) {
        if !self.0.contains_key(name) {
            self.0.insert(name.to_string(), source.into());
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &String)> {
        self.0.iter()
    }
}
