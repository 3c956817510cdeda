//! Translation API: a thin HTTP layer over external language detection and
//! translation services.
//!
//! The crate is organized around three pieces:
//! - `i18n`: the static registry of supported languages
//! - `detect`: the language-detection adapter
//! - `routes` + `translator`: the HTTP surface and the outbound translation
//!   capability it calls

pub mod config;
pub mod detect;
pub mod error;
pub mod i18n;
pub mod routes;
pub mod translator;
