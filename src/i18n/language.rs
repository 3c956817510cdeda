//! Language type: validated language representation.
//!
//! A `Language` can only be constructed from a code present in the registry,
//! so holding one is proof the code is supported.

use crate::i18n::{LanguageEntry, LanguageRegistry};
use anyhow::{bail, Result};

/// A validated language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    code: &'static str,
}

impl Language {
    /// Create a Language from a code string, validating it against the
    /// registry.
    pub fn from_code(code: &str) -> Result<Language> {
        match LanguageRegistry::get().get_by_code(code) {
            // Use the static str from the registry
            Some(entry) => Ok(Language { code: entry.code }),
            None => bail!("Unknown language code: '{}'", code),
        }
    }

    /// The ISO 639-1 style language code (e.g., "en", "zh-CN").
    pub fn code(&self) -> &'static str {
        self.code
    }

    /// The full registry entry for this language.
    pub fn entry(&self) -> &'static LanguageEntry {
        LanguageRegistry::get()
            .get_by_code(self.code)
            .expect("Language code should always be valid")
    }

    /// The English name of the language.
    pub fn name(&self) -> &'static str {
        self.entry().name
    }
}
