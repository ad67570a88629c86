use verbo_core::ParseError;

use crate::conjugation::Conjugation;

/// Grammatical person used by conjugation tables, including regional "vos"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PronounSlot {
    Yo,
    Tu,
    ElEllaUsted,
    Nosotros,
    Vosotros,
    EllosEllasUstedes,
    Vos,
}

impl PronounSlot {
    pub const ALL: [PronounSlot; 7] = [
        PronounSlot::Yo,
        PronounSlot::Tu,
        PronounSlot::ElEllaUsted,
        PronounSlot::Nosotros,
        PronounSlot::Vosotros,
        PronounSlot::EllosEllasUstedes,
        PronounSlot::Vos,
    ];

    /// Label as it appears in the conjugation payload
    pub fn label(&self) -> &'static str {
        match self {
            PronounSlot::Yo => "yo",
            PronounSlot::Tu => "tú",
            PronounSlot::ElEllaUsted => "él/ella/Ud.",
            PronounSlot::Nosotros => "nosotros",
            PronounSlot::Vosotros => "vosotros",
            PronounSlot::EllosEllasUstedes => "ellos/ellas/Uds.",
            PronounSlot::Vos => "vos",
        }
    }

    /// Exact match only; "tu" or "Yo" are not canonical labels
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|slot| slot.label() == label)
    }
}

/// One conjugation per pronoun slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pronouns {
    pub yo: Conjugation,
    pub tu: Conjugation,
    pub el_ella_usted: Conjugation,
    pub nosotros: Conjugation,
    pub vosotros: Conjugation,
    pub ellos_ellas_ustedes: Conjugation,
    pub vos: Conjugation,
}

impl Pronouns {
    /// Sort an unordered list into slots.
    ///
    /// Entries with unknown labels are dropped. When a label repeats, the
    /// last entry wins. Every slot must end up filled.
    pub fn from_conjugations(
        conjugations: impl IntoIterator<Item = Conjugation>,
    ) -> Result<Self, ParseError> {
        let mut builder = PronounsBuilder::default();

        for conjugation in conjugations {
            match conjugation.slot() {
                Some(slot) => builder.set(slot, conjugation),
                None => tracing::trace!(
                    "Dropping conjugation with unknown pronoun {:?}",
                    conjugation.pronoun
                ),
            }
        }

        builder.build()
    }

    pub fn get(&self, slot: PronounSlot) -> &Conjugation {
        match slot {
            PronounSlot::Yo => &self.yo,
            PronounSlot::Tu => &self.tu,
            PronounSlot::ElEllaUsted => &self.el_ella_usted,
            PronounSlot::Nosotros => &self.nosotros,
            PronounSlot::Vosotros => &self.vosotros,
            PronounSlot::EllosEllasUstedes => &self.ellos_ellas_ustedes,
            PronounSlot::Vos => &self.vos,
        }
    }

    /// Singular/plural pairs for first, second (familiar) and third person
    pub fn rows(&self) -> [(&Conjugation, &Conjugation); 3] {
        [
            (&self.yo, &self.nosotros),
            (&self.tu, &self.vosotros),
            (&self.el_ella_usted, &self.ellos_ellas_ustedes),
        ]
    }
}

#[derive(Default)]
struct PronounsBuilder {
    yo: Option<Conjugation>,
    tu: Option<Conjugation>,
    el_ella_usted: Option<Conjugation>,
    nosotros: Option<Conjugation>,
    vosotros: Option<Conjugation>,
    ellos_ellas_ustedes: Option<Conjugation>,
    vos: Option<Conjugation>,
}

impl PronounsBuilder {
    fn set(&mut self, slot: PronounSlot, conjugation: Conjugation) {
        let target = match slot {
            PronounSlot::Yo => &mut self.yo,
            PronounSlot::Tu => &mut self.tu,
            PronounSlot::ElEllaUsted => &mut self.el_ella_usted,
            PronounSlot::Nosotros => &mut self.nosotros,
            PronounSlot::Vosotros => &mut self.vosotros,
            PronounSlot::EllosEllasUstedes => &mut self.ellos_ellas_ustedes,
            PronounSlot::Vos => &mut self.vos,
        };

        if let Some(previous) = target.replace(conjugation) {
            tracing::debug!(
                "Duplicate conjugation for {}, replacing {:?}",
                slot.label(),
                previous.word
            );
        }
    }

    fn build(self) -> Result<Pronouns, ParseError> {
        fn take(slot: Option<Conjugation>, pronoun: PronounSlot) -> Result<Conjugation, ParseError> {
            slot.ok_or(ParseError::MissingPronoun {
                label: pronoun.label(),
            })
        }

        Ok(Pronouns {
            yo: take(self.yo, PronounSlot::Yo)?,
            tu: take(self.tu, PronounSlot::Tu)?,
            el_ella_usted: take(self.el_ella_usted, PronounSlot::ElEllaUsted)?,
            nosotros: take(self.nosotros, PronounSlot::Nosotros)?,
            vosotros: take(self.vosotros, PronounSlot::Vosotros)?,
            ellos_ellas_ustedes: take(self.ellos_ellas_ustedes, PronounSlot::EllosEllasUstedes)?,
            vos: take(self.vos, PronounSlot::Vos)?,
        })
    }
}
