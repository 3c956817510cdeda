//! Internationalization (i18n) module for multi-language support.
//!
//! This module is the single source of truth for which languages the API
//! accepts, both as translation targets and as detection results.
//!
//! # Architecture
//!
//! - `registry`: fixed table of supported languages and their display names
//! - `language`: type-safe `Language` value validated against the registry
//!
//! # Example
//!
//! ```rust,ignore
//! use crate::i18n::{Language, LanguageRegistry};
//!
//! // Validate a caller-supplied code
//! let spanish = Language::from_code("es")?;
//!
//! // List every supported language
//! let languages = LanguageRegistry::get().list();
//! ```

mod language;
mod registry;

pub use language::Language;
pub use registry::{LanguageEntry, LanguageRegistry};
