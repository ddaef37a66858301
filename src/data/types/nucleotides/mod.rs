use crate::data::{
    err::TranslationError,
    mappings::{GeneticCode, IS_DNA_IUPAC_NO_GAPS, IS_DNA_UNAMBIG, TO_REVERSE_COMPLEMENT_UC},
    types::amino_acids::AminoAcids,
};

/// [`Nucleotides`] is a transparent, new-type wrapper around [`Vec<u8>`]
/// that provides DNA-specific functionality and semantics. It may contain
/// any ASCII bytes; the translation and complement operations validate the
/// stored sequence against the IUPAC alphabet on use.
#[derive(Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Nucleotides(pub(crate) Vec<u8>);

impl Nucleotides {
    // std

    /// Creates a new `Nucleotides` empty object.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Nucleotides(Vec::new())
    }

    /// The length of the stored sequence.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Is the sequence empty?
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Obtains the bytes as a slice.
    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_slice()
    }

    /// Consumes the wrapper and returns the underlying [`Vec<u8>`].
    #[inline]
    #[must_use]
    pub fn into_vec(self) -> Vec<u8> {
        self.0
    }

    /// Creates an iterator over the nucleotides as `&u8`.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, u8> {
        self.0.iter()
    }

    /// Gets the base or subsequence at the zero-based index, returning an
    /// `Option`.
    #[inline]
    pub fn get<I>(&self, index: I) -> Option<&I::Output>
    where
        I: std::slice::SliceIndex<[u8]>, {
        self.0.get(index)
    }

    /// Extends the sequence by the given slice.
    #[inline]
    pub fn extend_from_slice(&mut self, slice: impl AsRef<[u8]>) {
        self.0.extend_from_slice(slice.as_ref());
    }

    /// Creates a new sequence consisting of this one repeated `count` times.
    #[inline]
    #[must_use]
    pub fn repeat(&self, count: usize) -> Self {
        Nucleotides(self.0.repeat(count))
    }

    // Domain functions

    /// Computes the reverse complement of the stored sequence, honoring the
    /// IUPAC ambiguity complements. The output is uppercase regardless of
    /// input case. When `strict` is true, only the four unambiguous bases
    /// are accepted.
    ///
    /// # Errors
    ///
    /// Returns [`TranslationError::InvalidNucleotide`] or
    /// [`TranslationError::InvalidStrictInput`] on the first disallowed
    /// byte.
    #[inline]
    pub fn reverse_complement(&self, strict: bool) -> Result<Self, TranslationError> {
        Ok(Nucleotides(reverse_complement(&self.0, strict)?))
    }

    /// Translates the stored sequence to [`AminoAcids`] under the NCBI table
    /// `table_id`, reading consecutive codons from offset 0. Trailing bytes
    /// that do not complete a codon are dropped.
    ///
    /// # Errors
    ///
    /// Returns [`TranslationError::UnknownTable`] before any codon content
    /// is inspected, and otherwise the first per-codon error.
    ///
    /// # Examples
    ///
    /// ```
    /// use codetta::prelude::*;
    ///
    /// let dna: Nucleotides = b"AAAGGGAAA".into();
    /// assert_eq!(dna.translate(1, false)?, AminoAcids::from(b"KGK"));
    /// # Ok::<(), TranslationError>(())
    /// ```
    #[inline]
    pub fn translate(&self, table_id: u8, strict: bool) -> Result<AminoAcids, TranslationError> {
        let code = GeneticCode::new(table_id)?;
        Ok(AminoAcids(translate_sequence(&code, &self.0, strict)?))
    }

    /// Translates the forward reading frames at offsets 0, 1, and 2. A frame
    /// is included only if at least one complete codon fits, so sequences
    /// shorter than 3 yield no frames, length 3 yields one, length 4 two,
    /// and length 5 or more all three.
    ///
    /// # Errors
    ///
    /// Same contract as [`translate`](Nucleotides::translate); the first
    /// error aborts the whole call.
    pub fn translate_self_frames(&self, table_id: u8, strict: bool) -> Result<Vec<AminoAcids>, TranslationError> {
        let code = GeneticCode::new(table_id)?;
        let mut frames = Vec::with_capacity(3);
        for offset in 0..3 {
            if self.0.len() >= offset + 3 {
                frames.push(AminoAcids(translate_sequence(&code, &self.0[offset..], strict)?));
            }
        }
        Ok(frames)
    }

    /// Translates all six reading frames: the forward frames of
    /// [`translate_self_frames`](Nucleotides::translate_self_frames)
    /// followed by those of the reverse complement, each side truncated by
    /// length independently.
    ///
    /// # Errors
    ///
    /// Same contract as [`translate`](Nucleotides::translate); the first
    /// error aborts the whole call.
    ///
    /// # Examples
    ///
    /// ```
    /// use codetta::prelude::*;
    ///
    /// let dna: Nucleotides = b"AAAGGGAAA".into();
    /// let frames = dna.translate_all_frames(1, false)?;
    /// let expected = ["KGK", "KG", "RE", "FPF", "FP", "SL"];
    /// assert!(frames.iter().map(AminoAcids::as_bytes).eq(expected.iter().map(|f| f.as_bytes())));
    /// # Ok::<(), TranslationError>(())
    /// ```
    pub fn translate_all_frames(&self, table_id: u8, strict: bool) -> Result<Vec<AminoAcids>, TranslationError> {
        let mut frames = self.translate_self_frames(table_id, strict)?;
        frames.extend(self.reverse_complement(strict)?.translate_self_frames(table_id, strict)?);
        Ok(frames)
    }

    // Associated functions

    /// Generate a random DNA sequence of given `length` and using a random
    /// `seed`. Unambiguous DNA only contains A, C, G, or T.
    #[cfg(feature = "rand")]
    #[must_use]
    pub fn generate_random_dna(length: usize, seed: u64) -> Self {
        Nucleotides(crate::generate::rand_sequence(b"ACGT", length, seed))
    }
}

/// Translates a byte slice into an amino acid byte vector under `code`,
/// reading consecutive codons from offset 0 and dropping any trailing bytes
/// that do not complete a codon.
///
/// # Errors
///
/// Propagates the first per-codon error from
/// [`GeneticCode::translate_codon`]; no partial output is returned.
#[inline]
pub fn translate_sequence(code: &GeneticCode, s: &[u8], strict: bool) -> Result<Vec<u8>, TranslationError> {
    let mut aa_sequence = Vec::with_capacity(s.len() / 3);

    for codon in s.chunks_exact(3) {
        aa_sequence.push(code.translate_codon(&[codon[0], codon[1], codon[2]], strict)?);
    }

    Ok(aa_sequence)
}

/// Performs the DNA reverse complement of the byte slice into a new,
/// uppercase vector. When `strict` is true, only the four unambiguous bases
/// are accepted; otherwise the full IUPAC alphabet is.
///
/// # Errors
///
/// Returns [`TranslationError::InvalidNucleotide`] or
/// [`TranslationError::InvalidStrictInput`] on the first disallowed byte.
#[inline]
pub fn reverse_complement(bases: &[u8], strict: bool) -> Result<Vec<u8>, TranslationError> {
    validate_sequence(bases, strict)?;
    Ok(bases.iter().rev().map(|&b| TO_REVERSE_COMPLEMENT_UC[b as usize]).collect())
}

/// Checks every byte against the nucleotide alphabet in effect.
fn validate_sequence(bases: &[u8], strict: bool) -> Result<(), TranslationError> {
    if strict {
        match bases.iter().find(|&&b| !IS_DNA_UNAMBIG[b as usize]) {
            Some(&b) => Err(TranslationError::InvalidStrictInput(b)),
            None => Ok(()),
        }
    } else {
        match bases.iter().find(|&&b| !IS_DNA_IUPAC_NO_GAPS[b as usize]) {
            Some(&b) => Err(TranslationError::InvalidNucleotide(b)),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod test;

mod std_traits;

#[allow(unused_imports)]
pub use std_traits::*;
