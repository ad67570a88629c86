/// Structural failures while turning a verb payload into the data model.
///
/// Missing leaf scalars never end up here, they degrade to placeholders
/// through [`crate::field::lenient_str`] instead.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("missing required field `{0}`")]
    MissingField(String),

    #[error("field `{field}` must be {expected}")]
    InvalidType {
        field: String,
        expected: &'static str,
    },

    #[error("no conjugation for pronoun `{label}`")]
    MissingPronoun { label: &'static str },

    #[error("paradigm `{tense}` has no conjugation for pronoun `{label}`")]
    IncompleteParadigm {
        tense: &'static str,
        label: &'static str,
    },
}
