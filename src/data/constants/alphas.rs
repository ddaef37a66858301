#![allow(dead_code)]
/// IUPAC nucleotide codes, including lower and upper case and ambiguity
/// codes. Gaps, missing characters, and `U` are excluded.
pub(crate) const DNA_IUPAC_NO_GAPS: &[u8; 30] = b"acgtmrwsykvhdbnACGTMRWSYKVHDBN";
/// Uppercase IUPAC nucleotide codes, including ambiguity codes.
pub(crate) const DNA_IUPAC_NO_GAPS_UC: &[u8; 15] = b"ACGTMRWSYKVHDBN";
/// Unambiguous nucleotide bases.
pub(crate) const DNA_UNAMBIG: &[u8; 8] = b"acgtACGT";
/// Uppercase unambiguous nucleotide bases.
pub(crate) const DNA_UNAMBIG_UC: &[u8; 4] = b"ACGT";

/// Amino acid letters a codon can translate to: the 20 IUPAC letters, the
/// stop `*`, and the ambiguous outcomes `B`, `Z`, `J`, and `X`.
pub(crate) const AA_TRANSLATION_UC: &[u8; 25] = b"ACDEFGHIKLMNPQRSTVWY*BZJX";
