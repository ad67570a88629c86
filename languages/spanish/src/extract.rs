use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;
use verbo_source::SourceError;

/// Assignment of the page's component data. `.` stops at line breaks and the
/// capture runs to the last `;` on that line.
static COMPONENT_DATA: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"window.SD_COMPONENT_DATA?.=.?(.*);").expect("component data pattern is valid")
});

/// Decode the JSON blob a conjugation page assigns to `SD_COMPONENT_DATA`
pub fn component_data(page: &str) -> Result<Value, SourceError> {
    let captured = COMPONENT_DATA
        .captures(page)
        .and_then(|c| c.get(1))
        .ok_or(SourceError::MarkerNotFound)?;

    Ok(serde_json::from_str(captured.as_str())?)
}

/// Take the `verb` entry out of decoded component data
pub fn verb_payload(mut data: Value) -> Result<Value, SourceError> {
    match data.get_mut("verb").map(Value::take) {
        None | Some(Value::Null) => Err(SourceError::MissingVerb),
        Some(verb) => Ok(verb),
    }
}
