pub mod error;
pub mod field;
pub mod preprocess;

pub use error::ParseError;
pub use preprocess::{DefaultPreprocessor, Preprocessor};
