use std::fmt::Display;

/// Errors produced while translating or complementing nucleotide data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TranslationError {
    /// The requested identifier is not a supported NCBI translation table.
    /// This is always detected before any codon content is inspected.
    UnknownTable(u8),
    /// A byte outside the 15-letter IUPAC nucleotide alphabet was found.
    InvalidNucleotide(u8),
    /// Strict mode was requested and a byte other than `ACGT` (either case)
    /// was found. Ambiguity codes are valid IUPAC but disallowed here.
    InvalidStrictInput(u8),
}

impl Display for TranslationError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            TranslationError::UnknownTable(id) => {
                write!(f, "not a supported NCBI translation table: {id}")
            }
            TranslationError::InvalidNucleotide(b) => {
                write!(f, "invalid IUPAC nucleotide: {:?}", char::from(*b))
            }
            TranslationError::InvalidStrictInput(b) => {
                write!(f, "invalid unambiguous nucleotide: {:?}", char::from(*b))
            }
        }
    }
}

impl std::error::Error for TranslationError {}

/// Errors produced when constructing a sequence from text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodingError {
    /// The input text contained a non-ASCII byte.
    NonAscii(u8),
}

impl Display for EncodingError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            EncodingError::NonAscii(b) => write!(f, "non-ascii byte in sequence: {b:#04x}"),
        }
    }
}

impl std::error::Error for EncodingError {}
