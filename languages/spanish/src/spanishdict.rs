use async_trait::async_trait;
use verbo_config::source::SourceConfig;
use verbo_core::{DefaultPreprocessor, Preprocessor};
use verbo_source::{SourceError, SourceMetadata, VerbSource};

use crate::extract;

/// Fetches conjugation pages from SpanishDict
#[derive(Clone)]
pub struct SpanishDict {
    client: reqwest::Client,
    config: SourceConfig,
}

impl SpanishDict {
    pub fn new(config: SourceConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    async fn fetch_page(&self, verb: &str) -> Result<String, SourceError> {
        let url = self.config.conjugate_url(verb);
        tracing::info!("Fetching conjugations from {}", url);

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(SourceError::Status {
                status: response.status().as_u16(),
                url,
            });
        }

        let page = response.text().await?;
        tracing::debug!("Received {} bytes", page.len());
        Ok(page)
    }
}

#[async_trait]
impl VerbSource for SpanishDict {
    async fn fetch_verb(&self, infinitive: &str) -> Result<serde_json::Value, SourceError> {
        let verb = DefaultPreprocessor.process(infinitive);
        if verb.is_empty() {
            return Err(SourceError::EmptyQuery);
        }

        let page = self.fetch_page(&verb).await?;
        let data = extract::component_data(&page)?;
        extract::verb_payload(data)
    }

    fn metadata(&self) -> SourceMetadata {
        SourceMetadata {
            name: "SpanishDict".to_string(),
            base_url: self.config.base_url.clone(),
        }
    }
}
