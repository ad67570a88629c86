use serde_json::Value;
use verbo_core::ParseError;
use verbo_core::field::{as_object, required_array};

use crate::conjugation::Conjugation;
use crate::pronouns::Pronouns;

/// Tense/mood groupings carried by a verb payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tense {
    PresentIndicative,
    PreteriteIndicative,
    ImperfectIndicative,
    ConditionalIndicative,
}

impl Tense {
    pub const ALL: [Tense; 4] = [
        Tense::PresentIndicative,
        Tense::PreteriteIndicative,
        Tense::ImperfectIndicative,
        Tense::ConditionalIndicative,
    ];

    /// Key under `paradigms` in the payload
    pub fn key(&self) -> &'static str {
        match self {
            Tense::PresentIndicative => "presentIndicative",
            // Upstream spelling
            Tense::PreteriteIndicative => "preteritIndicative",
            Tense::ImperfectIndicative => "imperfectIndicative",
            Tense::ConditionalIndicative => "conditionalIndicative",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Tense::PresentIndicative => "Present Indicative",
            Tense::PreteriteIndicative => "Preterite Indicative",
            Tense::ImperfectIndicative => "Imperfect Indicative",
            Tense::ConditionalIndicative => "Conditional Indicative",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paradigms {
    pub present_indicative: Pronouns,
    pub preterite_indicative: Pronouns,
    pub imperfect_indicative: Pronouns,
    pub conditional_indicative: Pronouns,
}

impl Paradigms {
    pub fn from_value(value: &Value) -> Result<Self, ParseError> {
        let obj = as_object(value, "paradigms")?;

        let parse = |tense: Tense| -> Result<Pronouns, ParseError> {
            let conjugations = required_array(obj, tense.key())?
                .iter()
                .map(Conjugation::from_value)
                .collect::<Result<Vec<_>, _>>()?;

            Pronouns::from_conjugations(conjugations).map_err(|e| match e {
                ParseError::MissingPronoun { label } => ParseError::IncompleteParadigm {
                    tense: tense.key(),
                    label,
                },
                other => other,
            })
        };

        Ok(Self {
            present_indicative: parse(Tense::PresentIndicative)?,
            preterite_indicative: parse(Tense::PreteriteIndicative)?,
            imperfect_indicative: parse(Tense::ImperfectIndicative)?,
            conditional_indicative: parse(Tense::ConditionalIndicative)?,
        })
    }

    pub fn get(&self, tense: Tense) -> &Pronouns {
        match tense {
            Tense::PresentIndicative => &self.present_indicative,
            Tense::PreteriteIndicative => &self.preterite_indicative,
            Tense::ImperfectIndicative => &self.imperfect_indicative,
            Tense::ConditionalIndicative => &self.conditional_indicative,
        }
    }

    /// Tenses in display order
    pub fn iter(&self) -> impl Iterator<Item = (Tense, &Pronouns)> {
        Tense::ALL.into_iter().map(move |tense| (tense, self.get(tense)))
    }
}
