pub mod conjugation;
pub mod extract;
pub mod paradigms;
pub mod pronouns;
pub mod spanishdict;
pub mod verb;

#[cfg(any(test, feature = "test-fixtures"))]
pub mod fixtures;

pub use conjugation::{Conjugation, Gerund};
pub use paradigms::{Paradigms, Tense};
pub use pronouns::{PronounSlot, Pronouns};
pub use spanishdict::SpanishDict;
pub use verb::Verb;
