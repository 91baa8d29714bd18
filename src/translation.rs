// WHY: Translation collaborator turning finished English text into another language
// Every failure means no translation was performed; implementations return an error and never retry

use std::future::Future;
use std::time::Duration;

use anyhow::{anyhow, bail, Context, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Default endpoint (Google Cloud Translation, v2 REST API)
pub const DEFAULT_ENDPOINT: &str = "https://translation.googleapis.com/language/translate/v2";

/// Shown to the user whenever a translation fails
pub const LANGUAGE_CODE_HINT: &str = "Perhaps the target language was not given in its 2 letter form? \
(ex. french -> fr, spanish -> es). See https://cloud.google.com/translate/docs/languages for a list of languages";

/// Anything that can translate English text into a target language
pub trait Translator {
    fn translate(&self, language: &str, text: &str) -> impl Future<Output = Result<String>> + Send;
}

/// Configuration for the HTTP translator
#[derive(Debug, Clone)]
pub struct TranslatorConfig {
    /// Endpoint receiving the POST request
    pub endpoint: String,
    /// API key sent as the `key` query parameter, if any
    pub api_key: Option<String>,
    /// Language of the text being sent
    pub source_language: String,
    /// Whole-request timeout
    pub timeout: Duration,
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            api_key: None,
            source_language: "en".to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

/// Request body for the translation endpoint
#[derive(Debug, Serialize)]
struct TranslateRequest<'a> {
    q: [&'a str; 1],
    source: &'a str,
    target: &'a str,
    format: &'a str,
}

#[derive(Debug, Deserialize)]
struct TranslateResponse {
    data: TranslateData,
}

#[derive(Debug, Deserialize)]
struct TranslateData {
    translations: Vec<Translation>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Translation {
    translated_text: String,
}

/// Extract the single translated string from a response body
pub fn parse_translation_response(body: &str) -> Result<String> {
    let response: TranslateResponse = serde_json::from_str(body)
        .with_context(|| format!("Malformed translation response: {body}"))?;

    response
        .data
        .translations
        .into_iter()
        .next()
        .map(|t| t.translated_text)
        .ok_or_else(|| anyhow!("Translation response contained no translations"))
}

/// Translator backed by a JSON-over-HTTP translation service
#[derive(Debug, Clone)]
pub struct HttpTranslator {
    client: Client,
    config: TranslatorConfig,
}

impl HttpTranslator {
    pub fn new(config: TranslatorConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self { client, config })
    }

    async fn post(&self, language: &str, text: &str) -> Result<String> {
        let language = language.trim();
        if language.is_empty() {
            bail!("No target language given");
        }

        let request = TranslateRequest {
            q: [text],
            source: &self.config.source_language,
            target: language,
            format: "text",
        };

        let mut builder = self.client.post(&self.config.endpoint).json(&request);
        if let Some(key) = &self.config.api_key {
            builder = builder.query(&[("key", key)]);
        }

        debug!(target_language = language, chars = text.len(), "Sending translation request");

        let response = builder
            .send()
            .await
            .with_context(|| format!("Translation request to {} failed", self.config.endpoint))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .context("Failed to read translation response body")?;

        if !status.is_success() {
            bail!("Translation service returned {status}: {body}");
        }

        let translated = parse_translation_response(&body)?;
        info!(target_language = language, chars = translated.len(), "Translation complete");
        Ok(translated)
    }
}

impl Translator for HttpTranslator {
    fn translate(&self, language: &str, text: &str) -> impl Future<Output = Result<String>> + Send {
        self.post(language, text)
    }
}
