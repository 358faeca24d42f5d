use std::time::Duration;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::debug;

use crate::config::TranslateConfig;
use crate::error::{Result, SubtranError};
use super::TranslationBackend;

/// Translation backend using the free Google Translate web endpoint.
///
/// The `translate_a/single` endpoint takes the text as a query parameter and
/// answers with an untyped nested JSON array; the translated text is the
/// first element of each segment under the first top-level element.
pub struct GoogleTranslator {
    client: Client,
    endpoint: String,
}

impl GoogleTranslator {
    pub fn new(config: &TranslateConfig) -> Self {
        let mut builder = Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder
            .build()
            .expect("HTTP client creation should not fail");

        Self {
            client,
            endpoint: config.endpoint.clone(),
        }
    }

    fn extract_translation(body: &Value) -> Result<String> {
        let segments = body
            .get(0)
            .and_then(|v| v.as_array())
            .ok_or_else(|| {
                SubtranError::Translation("No translation segments in response".to_string())
            })?;

        let mut translated = String::new();
        for segment in segments {
            if let Some(text) = segment.get(0).and_then(|v| v.as_str()) {
                translated.push_str(text);
            }
        }

        if translated.is_empty() {
            return Err(SubtranError::Translation(
                "Empty translation received".to_string(),
            ));
        }

        Ok(translated)
    }
}

#[async_trait]
impl TranslationBackend for GoogleTranslator {
    async fn translate(&self, text: &str, dest_lang: &str, src_lang: &str) -> Result<String> {
        let url = format!("{}/translate_a/single", self.endpoint);

        debug!("Sending translation request to: {}", url);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("client", "gtx"),
                ("sl", src_lang),
                ("tl", dest_lang),
                ("dt", "t"),
                ("q", text),
            ])
            .send()
            .await
            .map_err(|e| SubtranError::Translation(format!("HTTP request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(SubtranError::Translation(format!(
                "Translation API error {}: {}",
                status, error_text
            )));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| SubtranError::Translation(format!("Failed to parse response: {}", e)))?;

        Self::extract_translation(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extract_translation_joins_segments() {
        let body = json!([
            [
                ["Bonjour le monde\n", "Hello world\n", null],
                ["Deuxième ligne", "Second line", null]
            ],
            null,
            "en"
        ]);
        let text = GoogleTranslator::extract_translation(&body).unwrap();
        assert_eq!(text, "Bonjour le monde\nDeuxième ligne");
    }

    #[test]
    fn test_extract_translation_rejects_malformed_body() {
        let body = json!({"unexpected": "shape"});
        assert!(GoogleTranslator::extract_translation(&body).is_err());
    }

    #[test]
    fn test_extract_translation_rejects_empty_segments() {
        let body = json!([[], null, "en"]);
        assert!(GoogleTranslator::extract_translation(&body).is_err());
    }
}
