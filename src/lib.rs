#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/README.md"))]
#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::module_name_repetitions,
    clippy::similar_names,
    clippy::wildcard_imports,
    clippy::enum_glob_use
)]

/// Sequence types, constant tables, and translation functions.
pub mod data;

/// Generate sequences and other data.
#[cfg(feature = "rand")]
pub(crate) mod generate;

/// Common structures and traits re-exported
pub mod prelude {
    pub use crate::data::GeneticCode;
    pub use crate::data::err::{EncodingError, TranslationError};
    pub use crate::data::types::{amino_acids::AminoAcids, nucleotides::Nucleotides};
    #[cfg(feature = "rand")]
    pub use crate::generate::rand_sequence;
}
