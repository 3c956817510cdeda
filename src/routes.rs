//! HTTP surface: router, shared state, and the translation request flow.
//!
//! The translate handler is a linear pipeline: validate input, resolve the
//! effective source language, call the translation capability, shape the
//! response. Detection runs only when the caller asked for auto mode or
//! supplied a code the registry does not carry.

use crate::config::Config;
use crate::detect::{detect_supported, Detector};
use crate::error::ApiError;
use crate::i18n::{Language, LanguageEntry, LanguageRegistry};
use crate::translator::Translator;
use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use tracing::{debug, warn};

/// Shared handler state: the two outward I/O capabilities.
///
/// The language registry is not carried here; it is a process-wide static.
#[derive(Clone)]
pub struct AppState {
    pub detector: Arc<dyn Detector>,
    pub translator: Arc<dyn Translator>,
}

/// Build the application router.
pub fn create_router(config: &Config, state: AppState) -> Router {
    let index = ServeFile::new(format!("{}/index.html", config.static_dir));

    Router::new()
        .route("/api/health", get(health_check))
        .route("/api/languages", get(list_languages))
        .route("/api/translate", post(translate))
        .route_service("/", index)
        .nest_service("/static", ServeDir::new(&config.static_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}

#[derive(Debug, Serialize)]
struct LanguagesResponse {
    languages: &'static [LanguageEntry],
}

/// GET /api/languages
async fn list_languages() -> Json<LanguagesResponse> {
    Json(LanguagesResponse {
        languages: LanguageRegistry::get().list(),
    })
}

fn default_source() -> String {
    "auto".to_string()
}

fn default_target() -> String {
    "en".to_string()
}

/// POST /api/translate request body. Missing fields fall back to the same
/// defaults the UI sends.
#[derive(Debug, Deserialize)]
pub struct TranslateRequest {
    #[serde(default)]
    pub text: String,
    #[serde(default = "default_source")]
    pub source: String,
    #[serde(default = "default_target")]
    pub target: String,
}

#[derive(Debug, Serialize)]
pub struct TranslateResponse {
    pub ok: bool,
    pub text: String,
    pub translated: String,
    pub source: String,
    pub detected_source: Option<&'static str>,
    pub target: String,
}

/// Ordered source resolution: a detected language wins, then an explicitly
/// valid caller code, then the translator's own auto mode.
pub fn effective_source<'a>(requested: &'a str, detected: Option<Language>) -> &'a str {
    if let Some(language) = detected {
        return language.code();
    }
    if LanguageRegistry::get().is_supported(requested) {
        return requested;
    }
    "auto"
}

/// POST /api/translate
async fn translate(
    State(state): State<AppState>,
    Json(req): Json<TranslateRequest>,
) -> Result<Json<TranslateResponse>, ApiError> {
    let registry = LanguageRegistry::get();

    let text = req.text.trim().to_string();
    if text.is_empty() {
        return Err(ApiError::InvalidInput("Text is required."));
    }

    let target = req.target.trim().to_string();
    if !registry.is_supported(&target) {
        return Err(ApiError::InvalidInput("Unsupported target language."));
    }

    let source = {
        let trimmed = req.source.trim();
        if trimmed.is_empty() {
            default_source()
        } else {
            trimmed.to_string()
        }
    };

    // Auto-detect if requested, or if the caller sent a code we don't know.
    // Detection failure is not fatal: the translator can self-detect.
    let detected = if source == "auto" || !registry.is_supported(&source) {
        detect_supported(state.detector.as_ref(), &text)
    } else {
        None
    };

    let effective = effective_source(&source, detected);
    debug!(
        "Translating {} -> {} ({} bytes)",
        effective,
        target,
        text.len()
    );

    let translated = state
        .translator
        .translate(effective, &target, &text)
        .await
        .map_err(|err| {
            warn!("Translation request failed: {:#}", err);
            ApiError::TranslationFailed(format!("{err:#}"))
        })?;

    Ok(Json(TranslateResponse {
        ok: true,
        text,
        translated,
        source,
        detected_source: detected.map(|language| language.code()),
        target,
    }))
}
