//! Language registry: Single source of truth for all supported languages.
//!
//! The registry is a fixed table established at startup and never modified
//! afterwards. It uses a singleton pattern with `OnceLock` to ensure
//! thread-safe initialization and access.

use serde::Serialize;
use std::sync::OnceLock;

/// A supported language: ISO-like code plus its English display name.
///
/// Entries are immutable and defined once at process start. Codes are unique
/// within the registry.
#[derive(Debug, Clone, Serialize)]
pub struct LanguageEntry {
    /// ISO 639-1 style language code (e.g., "en", "fr", "zh-CN")
    pub code: &'static str,

    /// English name of the language (e.g., "English", "French")
    pub name: &'static str,
}

/// Global language registry singleton.
///
/// Initialized once on first access and immutable thereafter. Listing order
/// is the declaration order of the table below.
pub struct LanguageRegistry {
    languages: Vec<LanguageEntry>,
}

/// Global registry instance (initialized lazily)
static REGISTRY: OnceLock<LanguageRegistry> = OnceLock::new();

impl LanguageRegistry {
    /// Get the global language registry instance.
    pub fn get() -> &'static LanguageRegistry {
        REGISTRY.get_or_init(|| LanguageRegistry {
            languages: supported_languages(),
        })
    }

    /// Get a language entry by its code.
    pub fn get_by_code(&self, code: &str) -> Option<&LanguageEntry> {
        self.languages.iter().find(|lang| lang.code == code)
    }

    /// All supported languages, in declaration order.
    pub fn list(&self) -> &[LanguageEntry] {
        &self.languages
    }

    /// Check whether a language code is supported.
    pub fn is_supported(&self, code: &str) -> bool {
        self.get_by_code(code).is_some()
    }
}

/// The supported-language table (ISO code -> readable name).
///
/// Codes match what the downstream translation service accepts, including
/// the cased Chinese variants.
const LANGUAGES: &[(&str, &str)] = &[
    ("af", "Afrikaans"),
    ("ar", "Arabic"),
    ("bn", "Bengali"),
    ("bg", "Bulgarian"),
    ("ca", "Catalan"),
    ("zh-CN", "Chinese (Simplified)"),
    ("zh-TW", "Chinese (Traditional)"),
    ("hr", "Croatian"),
    ("cs", "Czech"),
    ("da", "Danish"),
    ("nl", "Dutch"),
    ("en", "English"),
    ("et", "Estonian"),
    ("fi", "Finnish"),
    ("fr", "French"),
    ("de", "German"),
    ("el", "Greek"),
    ("gu", "Gujarati"),
    ("he", "Hebrew"),
    ("hi", "Hindi"),
    ("hu", "Hungarian"),
    ("id", "Indonesian"),
    ("it", "Italian"),
    ("ja", "Japanese"),
    ("kn", "Kannada"),
    ("ko", "Korean"),
    ("lv", "Latvian"),
    ("lt", "Lithuanian"),
    ("ms", "Malay"),
    ("ml", "Malayalam"),
    ("mr", "Marathi"),
    ("ne", "Nepali"),
    ("no", "Norwegian"),
    ("fa", "Persian"),
    ("pl", "Polish"),
    ("pt", "Portuguese"),
    ("pa", "Punjabi"),
    ("ro", "Romanian"),
    ("ru", "Russian"),
    ("sr", "Serbian"),
    ("sk", "Slovak"),
    ("sl", "Slovenian"),
    ("es", "Spanish"),
    ("sv", "Swedish"),
    ("ta", "Tamil"),
    ("te", "Telugu"),
    ("th", "Thai"),
    ("tr", "Turkish"),
    ("uk", "Ukrainian"),
    ("ur", "Urdu"),
    ("vi", "Vietnamese"),
];

fn supported_languages() -> Vec<LanguageEntry> {
    LANGUAGES
        .iter()
        .map(|&(code, name)| LanguageEntry { code, name })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_registry_get_returns_singleton() {
        let registry1 = LanguageRegistry::get();
        let registry2 = LanguageRegistry::get();

        // Should return the same instance (same memory address)
        assert!(std::ptr::eq(registry1, registry2));
    }

    #[test]
    fn test_codes_are_unique() {
        let registry = LanguageRegistry::get();
        let codes: HashSet<&str> = registry.list().iter().map(|lang| lang.code).collect();

        assert_eq!(codes.len(), registry.list().len());
    }

    #[test]
    fn test_list_preserves_declaration_order() {
        let registry = LanguageRegistry::get();
        let list = registry.list();

        assert_eq!(list.first().map(|lang| lang.code), Some("af"));
        assert_eq!(list.last().map(|lang| lang.code), Some("vi"));
    }

    #[test]
    fn test_get_by_code_english() {
        let registry = LanguageRegistry::get();
        let entry = registry.get_by_code("en").expect("English is supported");

        assert_eq!(entry.code, "en");
        assert_eq!(entry.name, "English");
    }

    #[test]
    fn test_get_by_code_chinese_variants() {
        let registry = LanguageRegistry::get();

        let simplified = registry.get_by_code("zh-CN").expect("zh-CN is supported");
        assert_eq!(simplified.name, "Chinese (Simplified)");

        let traditional = registry.get_by_code("zh-TW").expect("zh-TW is supported");
        assert_eq!(traditional.name, "Chinese (Traditional)");

        // The lowercase detector variants are not registry codes
        assert!(registry.get_by_code("zh-cn").is_none());
        assert!(registry.get_by_code("zh-tw").is_none());
    }

    #[test]
    fn test_get_by_code_nonexistent() {
        let registry = LanguageRegistry::get();
        assert!(registry.get_by_code("xx").is_none());
        assert!(registry.get_by_code("").is_none());
    }

    #[test]
    fn test_is_supported() {
        let registry = LanguageRegistry::get();

        assert!(registry.is_supported("en"));
        assert!(registry.is_supported("es"));
        assert!(registry.is_supported("zh-TW"));
        assert!(!registry.is_supported("auto"));
        assert!(!registry.is_supported("xx"));
    }

    #[test]
    fn test_registry_size() {
        let registry = LanguageRegistry::get();
        assert_eq!(registry.list().len(), 51);
    }

    #[test]
    fn test_entry_serializes_to_wire_shape() {
        let entry = LanguageEntry {
            code: "en",
            name: "English",
        };

        let json = serde_json::to_value(&entry).expect("Should serialize");
        assert_eq!(json, serde_json::json!({"code": "en", "name": "English"}));
    }
}
