// SPDX-License-Identifier: MPL-2.0
//! Locale handling for the widget.
//!
//! This module derives the locale-dependent fragment of the editor
//! configuration (`language`, `directionality` and the spellchecker keys)
//! from host locale data, and converts host language codes (`ll-cc`) into
//! the ISO form (`ll_CC`) used by spellchecker dictionaries.

pub mod spelling;

use crate::editor_config::EditorConfig;
use spelling::DictionaryIndex;

/// Primary language subtags written right-to-left.
const RTL_LANGUAGES: &[&str] = &[
    "ar", "ckb", "dv", "fa", "he", "ps", "sd", "ug", "ur", "yi",
];

/// Text flow direction of the current locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextDirection {
    Ltr,
    Rtl,
}

impl TextDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            TextDirection::Ltr => "ltr",
            TextDirection::Rtl => "rtl",
        }
    }
}

/// Snapshot of the host environment's current locale, derived once per
/// render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleInfo {
    code: String,
    bidi: bool,
}

impl LocaleInfo {
    /// Wraps a host-supplied locale code and bidi flag.
    pub fn new(code: impl Into<String>, bidi: bool) -> Self {
        Self {
            code: code.into(),
            bidi,
        }
    }

    /// Detects the locale from the operating system, falling back to
    /// `en-us`. The bidi flag is inferred from the primary language subtag.
    pub fn detect() -> Self {
        let code = sys_locale::get_locale()
            .unwrap_or_else(|| "en-us".to_string())
            .to_lowercase();
        let bidi = RTL_LANGUAGES.iter().any(|lang| {
            code == *lang || code.starts_with(&format!("{}-", lang))
        });
        Self { code, bidi }
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    /// The two-letter primary language code handed to TinyMCE.
    pub fn language(&self) -> String {
        self.code.chars().take(2).collect()
    }

    pub fn direction(&self) -> TextDirection {
        if self.bidi {
            TextDirection::Rtl
        } else {
            TextDirection::Ltr
        }
    }
}

/// One locale configured in the host application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageEntry {
    /// Host language code, `ll` or `ll-cc`.
    pub code: String,
    /// Human-readable language name shown in the spellchecker menu.
    pub display_name: String,
}

impl LanguageEntry {
    pub fn new(code: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            display_name: display_name.into(),
        }
    }
}

/// Converts a host language code `ll-cc` into the ISO form `ll_CC`, or
/// returns the bare `ll` when no country subtag is present.
///
/// Extra subtags are ignored and malformed input degrades to a best-effort
/// partial conversion; this function never fails.
pub fn convert_language_code(code: &str) -> String {
    let mut parts = code.split('-');
    let language = parts.next().unwrap_or("");
    match parts.next() {
        Some(country) => format!("{}_{}", language, country.to_uppercase()),
        None => language.to_string(),
    }
}

/// Builds the locale-dependent fragment of the editor configuration.
///
/// Always produces `language` and `directionality`. When `use_spellchecker`
/// is set, each configured language is matched against the dictionary index:
/// the exact `ll_CC` form is tried first, then the two-letter prefix.
/// Languages with no installed dictionary are skipped with a logged error;
/// the first language that resolves becomes `spellchecker_language`, and all
/// resolved languages are joined into `spellchecker_languages` in input
/// order.
pub fn language_config(
    locale: &LocaleInfo,
    use_spellchecker: bool,
    languages: &[LanguageEntry],
    dictionaries: &DictionaryIndex,
) -> EditorConfig {
    let mut config = EditorConfig::new();
    config.insert("language", locale.language());
    config.insert("directionality", locale.direction().as_str());
    if use_spellchecker {
        tracing::debug!(available = ?dictionaries, "spellchecker dictionaries");
        let mut resolved = Vec::new();
        for entry in languages {
            let mut code = convert_language_code(&entry.code);
            if !dictionaries.contains(&code) {
                code = code.chars().take(2).collect();
            }
            if !dictionaries.contains(&code) {
                tracing::error!(code = %code, "missing spellchecker dictionary");
                continue;
            }
            if config.get("spellchecker_language").is_none() {
                config.insert("spellchecker_language", code.clone());
            }
            resolved.push(format!("{}={}", entry.display_name, code));
        }
        config.insert("spellchecker_languages", resolved.join(","));
    }
    config
}
