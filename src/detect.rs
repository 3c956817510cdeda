//! Language detection adapter.
//!
//! Wraps an external detector behind the [`Detector`] capability so tests
//! can substitute deterministic fakes. The production implementation uses
//! the `whatlang` crate, a pure trigram classifier: repeated calls on
//! identical input always return identical results.
//!
//! Detection failure is never an error here. An undetectable text, or a
//! detected language the registry does not carry, yields `None` and the
//! caller falls back to the translator's own auto mode.

use crate::i18n::Language;
use whatlang::Lang;

/// Capability: raw language detection.
///
/// Implementations report the code the underlying library produced (which
/// may use casing or variants the registry does not), or `None` when the
/// text cannot be classified.
pub trait Detector: Send + Sync {
    fn detect(&self, text: &str) -> Option<String>;
}

/// Trigram-based detector backed by `whatlang`.
#[derive(Debug, Default)]
pub struct WhatlangDetector;

impl WhatlangDetector {
    pub fn new() -> Self {
        Self
    }
}

impl Detector for WhatlangDetector {
    fn detect(&self, text: &str) -> Option<String> {
        let info = whatlang::detect(text)?;
        Some(iso_code(info.lang()).to_string())
    }
}

/// Map whatlang's language enum onto the registry's ISO 639-1 style codes.
///
/// whatlang reports ISO 639-3 codes ("eng", "fra"); the registry and the
/// downstream translation service speak 639-1. Languages outside the
/// supported table fall through to their 639-3 code, which the registry
/// check downstream treats as unsupported.
fn iso_code(lang: Lang) -> &'static str {
    match lang {
        Lang::Afr => "af",
        Lang::Ara => "ar",
        Lang::Ben => "bn",
        Lang::Bul => "bg",
        Lang::Cat => "ca",
        Lang::Cmn => "zh-CN", // whatlang reports Mandarin without a script
        Lang::Hrv => "hr",
        Lang::Ces => "cs",
        Lang::Dan => "da",
        Lang::Nld => "nl",
        Lang::Eng => "en",
        Lang::Est => "et",
        Lang::Fin => "fi",
        Lang::Fra => "fr",
        Lang::Deu => "de",
        Lang::Ell => "el",
        Lang::Guj => "gu",
        Lang::Heb => "he",
        Lang::Hin => "hi",
        Lang::Hun => "hu",
        Lang::Ind => "id",
        Lang::Ita => "it",
        Lang::Jpn => "ja",
        Lang::Kan => "kn",
        Lang::Kor => "ko",
        Lang::Lav => "lv",
        Lang::Lit => "lt",
        Lang::Mal => "ml",
        Lang::Mar => "mr",
        Lang::Nep => "ne",
        Lang::Nob => "no",
        Lang::Pes => "fa",
        Lang::Pol => "pl",
        Lang::Por => "pt",
        Lang::Pan => "pa",
        Lang::Ron => "ro",
        Lang::Rus => "ru",
        Lang::Srp => "sr",
        Lang::Slk => "sk",
        Lang::Slv => "sl",
        Lang::Spa => "es",
        Lang::Swe => "sv",
        Lang::Tam => "ta",
        Lang::Tel => "te",
        Lang::Tha => "th",
        Lang::Tur => "tr",
        Lang::Ukr => "uk",
        Lang::Urd => "ur",
        Lang::Vie => "vi",
        l => l.code(),
    }
}

/// Normalize regional variants some detectors report in lowercase to the
/// registry's casing convention. Any other casing irregularity passes
/// through unchanged and fails the registry check.
pub fn normalize_variant(code: &str) -> &str {
    match code {
        "zh-cn" => "zh-CN",
        "zh-tw" => "zh-TW",
        _ => code,
    }
}

/// Run detection and resolve the result against the language registry.
///
/// Returns `None` when the detector gives up or reports a language the
/// registry does not carry.
pub fn detect_supported(detector: &dyn Detector, text: &str) -> Option<Language> {
    let raw = detector.detect(text)?;
    Language::from_code(normalize_variant(&raw)).ok()
}
