use serde::{Deserialize, Serialize};

fn default_base_url() -> String {
    "https://www.spanishdict.com".to_string()
}

fn default_conjugate_path() -> String {
    "conjugate".to_string()
}

/// Where conjugation pages are fetched from
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct SourceConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_conjugate_path")]
    pub conjugate_path: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            conjugate_path: default_conjugate_path(),
        }
    }
}

impl SourceConfig {
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    pub fn conjugate_url(&self, verb: &str) -> String {
        format!(
            "{}/{}/{}",
            self.base_url.trim_end_matches('/'),
            self.conjugate_path.trim_matches('/'),
            verb
        )
    }
}
