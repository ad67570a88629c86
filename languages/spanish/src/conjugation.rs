use serde_json::Value;
use verbo_core::ParseError;
use verbo_core::field::{as_object, lenient_bool, lenient_str};

use crate::pronouns::PronounSlot;

/// A word paired with its English gloss. Used for both participles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gerund {
    pub word: String,
    pub translation: String,
}

impl Gerund {
    pub fn from_value(value: &Value) -> Result<Self, ParseError> {
        let obj = as_object(value, "gerund")?;

        Ok(Self {
            word: lenient_str(obj, "word"),
            translation: lenient_str(obj, "translation"),
        })
    }
}

/// One inflected form of a verb
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conjugation {
    pub word: String,
    pub translation: String,
    /// Pronoun label exactly as the source spells it
    pub pronoun: String,
    pub is_irregular: bool,
}

impl Conjugation {
    pub fn from_value(value: &Value) -> Result<Self, ParseError> {
        let obj = as_object(value, "conjugation")?;

        Ok(Self {
            word: lenient_str(obj, "word"),
            translation: lenient_str(obj, "translation"),
            pronoun: lenient_str(obj, "pronoun"),
            is_irregular: lenient_bool(obj, "isIrregular"),
        })
    }

    /// Canonical slot for this entry's label, if it has one
    pub fn slot(&self) -> Option<PronounSlot> {
        PronounSlot::from_label(&self.pronoun)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use verbo_core::field::PLACEHOLDER;

    #[test]
    fn test_conjugation_keeps_all_fields() {
        let conjugation = Conjugation::from_value(&json!({
            "word": "fui",
            "translation": "I went",
            "pronoun": "yo",
            "isIrregular": true
        }))
        .unwrap();

        assert_eq!(
            conjugation,
            Conjugation {
                word: "fui".to_string(),
                translation: "I went".to_string(),
                pronoun: "yo".to_string(),
                is_irregular: true,
            }
        );
        assert_eq!(conjugation.slot(), Some(PronounSlot::Yo));
    }

    #[test]
    fn test_irregular_defaults_to_false() {
        let conjugation = Conjugation::from_value(&json!({
            "word": "hablo",
            "translation": "I speak",
            "pronoun": "yo"
        }))
        .unwrap();

        assert!(!conjugation.is_irregular);
    }

    #[test]
    fn test_missing_fields_become_placeholders() {
        let conjugation = Conjugation::from_value(&json!({})).unwrap();

        assert_eq!(conjugation.word, PLACEHOLDER);
        assert_eq!(conjugation.translation, PLACEHOLDER);
        assert_eq!(conjugation.pronoun, PLACEHOLDER);
        assert_eq!(conjugation.slot(), None);
    }

    #[test]
    fn test_non_object_is_rejected() {
        assert!(Conjugation::from_value(&json!("hablo")).is_err());
        assert!(Gerund::from_value(&json!(null)).is_err());
    }

    #[test]
    fn test_gerund() {
        let gerund =
            Gerund::from_value(&json!({ "word": "hablando", "translation": "speaking" })).unwrap();
        assert_eq!(gerund.word, "hablando");
        assert_eq!(gerund.translation, "speaking");
    }
}
