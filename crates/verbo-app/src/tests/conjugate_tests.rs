//! Pipeline tests against an in-memory verb source

use std::sync::atomic::{AtomicUsize, Ordering};

use clap::Parser;
use serde_json::Value;
use verbo_config::render::RenderConfig;
use verbo_lang_spanish::fixtures;
use verbo_source::{SourceError, SourceMetadata, VerbSource};

use crate::cli::Cli;
use crate::conjugate::{conjugate, run};

/// Serves a fixed payload and counts requests
struct StaticSource {
    payload: Option<Value>,
    calls: AtomicUsize,
}

impl StaticSource {
    fn new(payload: Option<Value>) -> Self {
        Self {
            payload,
            calls: AtomicUsize::new(0),
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl VerbSource for StaticSource {
    async fn fetch_verb(&self, _infinitive: &str) -> Result<Value, SourceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.payload.clone().ok_or(SourceError::MarkerNotFound)
    }

    fn metadata(&self) -> SourceMetadata {
        SourceMetadata {
            name: "static".to_string(),
            base_url: String::new(),
        }
    }
}

fn plain() -> RenderConfig {
    RenderConfig {
        show_translations: false,
        highlight_irregular: false,
    }
}

#[tokio::test]
async fn test_hablar_end_to_end() {
    let source = StaticSource::new(Some(fixtures::hablar()));
    let mut out = Vec::new();

    let verb = conjugate(&source, "hablar", &plain(), &mut out).await.unwrap();

    assert_eq!(verbo_render::participle_row(&verb), ["hablado", "hablando"]);
    assert_eq!(
        verbo_render::tense_rows(&verb.paradigms.present_indicative)[0],
        ["hablo", "hablamos"]
    );

    let output = String::from_utf8(out).unwrap();
    assert!(output.contains("Participles"));
    assert!(output.contains("hablando"));
    assert!(output.contains("hablaríais"));
}

#[tokio::test]
async fn test_fetch_failure_propagates() {
    let source = StaticSource::new(None);
    let mut out = Vec::new();

    let err = conjugate(&source, "hablar", &plain(), &mut out)
        .await
        .unwrap_err();

    assert!(matches!(
        err.downcast_ref::<SourceError>(),
        Some(SourceError::MarkerNotFound)
    ));
    assert!(out.is_empty());
}

#[tokio::test]
async fn test_parse_failure_propagates() {
    let mut payload = fixtures::hablar();
    payload.as_object_mut().unwrap().remove("paradigms");
    let source = StaticSource::new(Some(payload));
    let mut out = Vec::new();

    let err = conjugate(&source, "hablar", &plain(), &mut out)
        .await
        .unwrap_err();

    assert!(format!("{err:#}").contains("paradigms"));
    assert!(out.is_empty());
}

#[tokio::test]
async fn test_no_verb_prints_usage_without_fetching() {
    let source = StaticSource::new(Some(fixtures::hablar()));
    let cli = Cli::try_parse_from(["verbo"]).unwrap();
    let mut out = Vec::new();

    run(&cli, "verbo", &source, &mut out).await.unwrap();

    assert_eq!(String::from_utf8(out).unwrap(), "Usage: verbo VERB\n");
    assert_eq!(source.calls(), 0);
}

#[tokio::test]
async fn test_two_verbs_print_usage_without_fetching() {
    let source = StaticSource::new(Some(fixtures::hablar()));
    let cli = Cli::try_parse_from(["verbo", "hablar", "comer"]).unwrap();
    let mut out = Vec::new();

    run(&cli, "verbo", &source, &mut out).await.unwrap();

    assert_eq!(String::from_utf8(out).unwrap(), "Usage: verbo VERB\n");
    assert_eq!(source.calls(), 0);
}

#[tokio::test]
async fn test_run_with_verb_fetches_once() {
    let source = StaticSource::new(Some(fixtures::hablar()));
    let cli = Cli::try_parse_from(["verbo", "hablar"]).unwrap();
    let mut out = Vec::new();

    run(&cli, "verbo", &source, &mut out).await.unwrap();

    assert_eq!(source.calls(), 1);
    assert!(String::from_utf8(out).unwrap().contains("Present Indicative"));
}
