use clap::Parser;
use verbo_config::Config;

#[derive(Debug, Parser)]
#[command(name = "verbo")]
#[command(about = "Spanish verb conjugation tables from SpanishDict", long_about = None)]
pub struct Cli {
    /// Infinitive to conjugate, e.g. "hablar"
    #[arg(value_name = "VERB", num_args = 0..)]
    pub verbs: Vec<String>,

    /// Origin to fetch conjugation pages from
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Show English translations next to each form
    #[arg(short = 't', long)]
    pub translations: bool,

    /// Colour irregular forms red
    #[arg(long)]
    pub highlight_irregular: bool,
}

impl Cli {
    /// The verb to look up, only when exactly one was given
    pub fn verb(&self) -> Option<&str> {
        match self.verbs.as_slice() {
            [verb] => Some(verb.as_str()),
            _ => None,
        }
    }

    /// Defaults with command line overrides applied
    pub fn config(&self) -> Config {
        let mut config = Config::new();

        if let Some(base_url) = &self.base_url {
            config.source.base_url = base_url.clone();
        }
        config.render.show_translations = self.translations;
        config.render.highlight_irregular = self.highlight_irregular;

        config
    }
}

pub fn usage(program: &str) -> String {
    format!("Usage: {program} VERB")
}
