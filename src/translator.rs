//! Outbound translation capability.
//!
//! The [`Translator`] trait is the only other point of outward I/O besides
//! detection; handlers depend on it so tests can swap in fakes. The
//! production implementation proxies the public Google Translate `gtx`
//! endpoint over `reqwest`.

use crate::config::Config;
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, warn};

/// Capability: translate text via an external service.
#[async_trait]
pub trait Translator: Send + Sync {
    /// Translate `text` from `source` to `target`. `source` may be the
    /// literal `"auto"` to let the service detect the language itself.
    async fn translate(&self, source: &str, target: &str, text: &str) -> Result<String>;
}

/// Translator backed by the Google Translate `gtx` endpoint.
pub struct GoogleTranslator {
    client: reqwest::Client,
    endpoint: String,
}

impl GoogleTranslator {
    pub fn new(config: &Config) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            endpoint: config.translate_endpoint.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl Translator for GoogleTranslator {
    async fn translate(&self, source: &str, target: &str, text: &str) -> Result<String> {
        let url = format!(
            "{}/translate_a/single?client=gtx&sl={}&tl={}&dt=t&q={}",
            self.endpoint,
            source,
            target,
            urlencoding::encode(text)
        );

        debug!("Requesting translation {} -> {}", source, target);

        let response = self
            .client
            .get(&url)
            .header(
                "User-Agent",
                "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36",
            )
            .send()
            .await
            .context("Failed to reach translation service")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            warn!("Translation service error: {} - {}", status, body);
            anyhow::bail!("translation service returned {}", status);
        }

        let payload: serde_json::Value = response
            .json()
            .await
            .context("Failed to parse translation response")?;

        // The gtx response is a nested array; translated segments live at
        // [0][*][0] and must be concatenated.
        let segments = payload
            .get(0)
            .and_then(|v| v.as_array())
            .context("Malformed translation response: missing segment array")?;

        let mut translated = String::new();
        for segment in segments {
            if let Some(part) = segment.get(0).and_then(|v| v.as_str()) {
                translated.push_str(part);
            }
        }

        if translated.is_empty() {
            anyhow::bail!("translation service returned an empty result");
        }

        Ok(translated)
    }
}
