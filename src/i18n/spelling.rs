// SPDX-License-Identifier: MPL-2.0
//! The dictionary index supplied by an external spellchecking engine.

use std::collections::BTreeSet;

/// Read-only snapshot of the dictionary codes a spellchecking engine has
/// installed, in the `ll` or `ll_CC` form.
///
/// The index is queried fresh per call and never cached by this crate; a
/// host may cache it if dictionary listing is expensive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DictionaryIndex(BTreeSet<String>);

impl DictionaryIndex {
    pub fn new() -> Self {
        Self(BTreeSet::new())
    }

    pub fn contains(&self, code: &str) -> bool {
        self.0.contains(code)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for DictionaryIndex {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

/// Seam to the external spellchecking engine: anything that can list its
/// installed dictionaries.
pub trait DictionaryProvider {
    fn list_dictionaries(&self) -> DictionaryIndex;
}

impl DictionaryProvider for DictionaryIndex {
    fn list_dictionaries(&self) -> DictionaryIndex {
        self.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_iterator_collects_codes() {
        let index: DictionaryIndex = ["en_US", "fr", "de_DE"].into_iter().collect();
        assert_eq!(index.len(), 3);
        assert!(index.contains("en_US"));
        assert!(index.contains("fr"));
        assert!(!index.contains("en"));
    }

    #[test]
    fn empty_index_contains_nothing() {
        let index = DictionaryIndex::new();
        assert!(index.is_empty());
        assert!(!index.contains("en"));
    }
}
