use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct RenderConfig {
    /// Print `word (translation)` in cells plus an infinitive summary line
    #[serde(default)]
    pub show_translations: bool,
    /// Colour irregular forms, opt-in; only applied when stdout is a terminal
    #[serde(default)]
    pub highlight_irregular: bool,
}
