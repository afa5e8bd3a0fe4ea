use async_trait::async_trait;
use kotoba_translator::{LanguageCode, ProviderMetadata, TranslateError, Translation, Translator};

/// Keyless web translation client.
///
/// Talks to the public translate endpoint the original client used; no
/// API key, best-effort only. Callers must treat every error as a cue to
/// stay on the offline dictionary path.
#[derive(Clone)]
pub struct WebTranslator {
    client: reqwest::Client,
    api_url: String,
}

impl WebTranslator {
    pub fn new(api_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url,
        }
    }
}

#[async_trait]
impl Translator for WebTranslator {
    async fn translate(
        &self,
        text: &str,
        from: LanguageCode,
        to: LanguageCode,
    ) -> Result<Translation, TranslateError> {
        let response = self
            .client
            .get(&self.api_url)
            .query(&[
                ("client", "gtx"),
                ("dt", "t"),
                ("sl", from.as_str()),
                ("tl", to.as_str()),
                ("q", text),
            ])
            .send()
            .await?;

        if response.status() == 429 {
            return Err(TranslateError::RateLimitExceeded);
        }

        if !response.status().is_success() {
            return Err(TranslateError::ApiError(format!(
                "HTTP {}",
                response.status()
            )));
        }

        let json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| TranslateError::ApiError(format!("Failed to parse response: {}", e)))?;

        // Response shape: [[["<translated>", "<source>", ...], ...], ...]
        let translated = json
            .get(0)
            .and_then(|sentences| sentences.get(0))
            .and_then(|sentence| sentence.get(0))
            .and_then(|t| t.as_str())
            .ok_or(TranslateError::EmptyResponse)?;

        if translated.is_empty() {
            return Err(TranslateError::EmptyResponse);
        }

        Ok(Translation {
            text: translated.to_string(),
            from,
            to,
            provider: "web".to_string(),
        })
    }

    fn supported_languages(&self) -> Vec<(LanguageCode, LanguageCode)> {
        vec![("en".to_string(), "ja".to_string())]
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "Web".to_string(),
            requires_api_key: false,
            free_tier_available: true,
        }
    }
}
