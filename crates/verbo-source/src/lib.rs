/// Conjugation data provider interface
#[async_trait::async_trait]
pub trait VerbSource: Send + Sync {
    /// Fetch the raw verb payload for an infinitive
    async fn fetch_verb(&self, infinitive: &str) -> Result<serde_json::Value, SourceError>;

    /// Provider metadata
    fn metadata(&self) -> SourceMetadata;
}

#[derive(Debug, Clone)]
pub struct SourceMetadata {
    pub name: String,
    pub base_url: String,
}

#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("HTTP {status} from {url}")]
    Status { status: u16, url: String },

    #[error("Empty verb query")]
    EmptyQuery,

    #[error("Conjugation data marker not found in page")]
    MarkerNotFound,

    #[error("Embedded conjugation data is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("Conjugation data has no `verb` entry")]
    MissingVerb,
}
