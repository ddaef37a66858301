//! ## Sequence types and translation functions.
//!
//! ## IUPAC Standards
//!
//! For nucleotides, *Codetta* implements the [IUPAC
//! definitions](https://www.bioinformatics.org/sms/iupac.html) that include
//! ambiguous base calls. Gap characters and `U` are not part of the accepted
//! alphabet.
//!
//! Codon translation can produce the following ambiguous amino acids in
//! addition to the 20 standard letters and the `*` stop:
//! - `B`, which can be either `D` or `N` (Aspartic acid or Asparagine
//!   respectively)
//! - `Z`, which can be either `E` or `Q` (Glutamic acid or Glutamine
//!   respectively)
//! - `J`, which can be either `I` or `L` (Isoleucine or Leucine respectively)
//! - `X`, which represents an unknown position
//!
//! ## Errors in *Codetta*
//!
//! As a library, *Codetta* aims to avoid making assumptions on the style of
//! error handling chosen by users, in particular by not adopting any error
//! handling crate as a dependency. Fallible operations return enum-style
//! error types such as [`TranslationError`], which the user can match on or
//! display.
//!
//! [`TranslationError`]: crate::data::err::TranslationError

#[cfg(feature = "fuzzing")]
pub mod arbitrary;
/// A module with error types for translation and sequence construction.
pub mod err;
/// A module for storing more fundamental types, like
/// [`Nucleotides`](self::types::nucleotides::Nucleotides) and
/// [`AminoAcids`][self::types::amino_acids::AminoAcids].
pub mod types;

/// A private module for helper alphabets and maps that can be used within
/// public methods.
pub(crate) mod constants;

pub use constants::mappings::GeneticCode;

pub(crate) use constants::{alphas, mappings};
