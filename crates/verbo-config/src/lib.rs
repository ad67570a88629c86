use serde::{Deserialize, Serialize};

use self::render::RenderConfig;
use self::source::SourceConfig;

pub mod render;
pub mod source;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub source: SourceConfig,
    pub render: RenderConfig,
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config: Config =
            serde_json::from_str(r#"{ "render": { "show_translations": true } }"#).unwrap();

        assert!(config.render.show_translations);
        assert!(!config.render.highlight_irregular);
        assert_eq!(config.source.base_url, "https://www.spanishdict.com");
    }
}
