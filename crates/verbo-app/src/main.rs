use std::io;

use clap::Parser;
use tracing_subscriber::EnvFilter;
use verbo_lang_spanish::SpanishDict;
use verbo_source::VerbSource;

pub mod cli;
pub mod conjugate;


use self::cli::Cli;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Tables go to stdout, logs to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let program = std::env::args_os()
        .next()
        .map(|arg| arg.to_string_lossy().into_owned())
        .unwrap_or_else(|| "verbo".to_string());
    let cli = Cli::parse();

    let config = cli.config();
    tracing::debug!("Effective config: {}", serde_json::to_string(&config)?);

    let source = SpanishDict::new(config.source.clone());
    tracing::debug!("Using source {}", source.metadata().name);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    conjugate::run(&cli, &program, &source, &mut out).await
}
