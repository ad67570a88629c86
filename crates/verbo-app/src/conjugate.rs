use std::io::Write;

use anyhow::Context;
use verbo_config::render::RenderConfig;
use verbo_lang_spanish::Verb;
use verbo_source::VerbSource;

use crate::cli::{Cli, usage};

/// Fetch, parse and render one verb into `out`
pub async fn conjugate<S>(
    source: &S,
    infinitive: &str,
    config: &RenderConfig,
    out: &mut impl Write,
) -> anyhow::Result<Verb>
where
    S: VerbSource + ?Sized,
{
    let payload = source
        .fetch_verb(infinitive)
        .await
        .with_context(|| format!("Failed to fetch conjugations for {infinitive:?}"))?;

    let verb = Verb::from_value(&payload)
        .with_context(|| format!("Failed to parse conjugations for {infinitive:?}"))?;

    out.write_all(verbo_render::render_verb(&verb, config).as_bytes())?;
    Ok(verb)
}

/// Entry point behind `main`: print usage unless exactly one verb was given
pub async fn run<S>(
    cli: &Cli,
    program: &str,
    source: &S,
    out: &mut impl Write,
) -> anyhow::Result<()>
where
    S: VerbSource + ?Sized,
{
    let Some(verb) = cli.verb() else {
        writeln!(out, "{}", usage(program))?;
        return Ok(());
    };

    let config = cli.config();
    conjugate(source, verb, &config.render, out).await?;
    Ok(())
}
