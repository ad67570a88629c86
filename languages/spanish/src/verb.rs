use serde_json::Value;
use verbo_core::ParseError;
use verbo_core::field::{as_object, lenient_bool, lenient_str, required, required_int};

use crate::conjugation::Gerund;
use crate::paradigms::Paradigms;

/// Conjugation data for one infinitive
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verb {
    pub infinitive: String,
    pub is_reflexive: i64,
    pub is_reflexive_variation: bool,
    pub infinitive_translation: String,
    pub past_participle: Gerund,
    pub gerund: Gerund,
    pub paradigms: Paradigms,
}

impl Verb {
    /// Parse the `verb` object embedded in a conjugation page.
    ///
    /// Missing leaf strings degrade to placeholders; missing participles,
    /// paradigms or reflexive marker fail.
    pub fn from_value(value: &Value) -> Result<Self, ParseError> {
        let obj = as_object(value, "verb")?;

        let verb = Self {
            infinitive: lenient_str(obj, "infinitive"),
            is_reflexive: required_int(obj, "isReflexive")?,
            is_reflexive_variation: lenient_bool(obj, "isReflexiveVariation"),
            infinitive_translation: lenient_str(obj, "infinitiveTranslation"),
            past_participle: Gerund::from_value(required(obj, "pastParticiple")?)?,
            gerund: Gerund::from_value(required(obj, "gerund")?)?,
            paradigms: Paradigms::from_value(required(obj, "paradigms")?)?,
        };

        tracing::debug!("Parsed verb {} ({})", verb.infinitive, verb.infinitive_translation);
        Ok(verb)
    }

    pub fn is_reflexive(&self) -> bool {
        self.is_reflexive != 0
    }
}
