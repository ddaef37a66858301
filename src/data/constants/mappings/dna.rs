use super::*;
use crate::data::alphas::*;

//
// For if: u8 -> bool
//

/// A boolean mapping of valid IUPAC nucleotide codes, ambiguity codes
/// included.
pub(crate) const IS_DNA_IUPAC_NO_GAPS: [bool; 256] = make_is_alpha_mapping(DNA_IUPAC_NO_GAPS);

/// A boolean mapping of the four unambiguous bases.
pub(crate) const IS_DNA_UNAMBIG: [bool; 256] = make_is_alpha_mapping(DNA_UNAMBIG);

//
// For recode: u8 -> u8 else 0
//

/// Maps valid IUPAC nucleotides (either case) to their uppercase IUPAC
/// complement. The 0-byte marks bytes outside the alphabet; callers validate
/// before mapping.
pub(crate) const TO_REVERSE_COMPLEMENT_UC: [u8; 256] = make_mapping_with_default(
    b"acgtmrwsykvhdbnACGTMRWSYKVHDBN",
    b"TGCAKYWSRMBDHVNTGCAKYWSRMBDHVN",
    0,
);

//
// For codon indexing: u8 -> base index
//

/// The value assigned by [`TO_BASE_INDEX`] to bytes outside `ACGT`.
pub(crate) const INVALID_BASE_INDEX: u8 = 0xFF;

/// Maps the four unambiguous bases (either case) to 2-bit indices
/// {A: 0, C: 1, G: 2, T: 3}. A codon indexes its table entry as
/// `16 * i0 + 4 * i1 + i2`.
pub(crate) const TO_BASE_INDEX: [u8; 256] = make_mapping_with_default(
    b"acgtACGT",
    &[0, 1, 2, 3, 0, 1, 2, 3],
    INVALID_BASE_INDEX,
);

/// Expands each IUPAC code (either case) to the uppercase unambiguous bases
/// it denotes. Bytes outside the alphabet expand to the empty slice.
pub(crate) const TO_BASE_EXPANSION: [&[u8]; 256] = {
    const EMPTY: &[u8] = b"";
    let mut map: [&'static [u8]; 256] = [EMPTY; 256];

    macro_rules! expand {
        ($chr:literal, $bases:literal) => {
            map[$chr.to_ascii_lowercase() as usize] = $bases;
            map[$chr.to_ascii_uppercase() as usize] = $bases;
        };
    }

    expand!(b'a', b"A");
    expand!(b'c', b"C");
    expand!(b'g', b"G");
    expand!(b't', b"T");

    // ambiguity codes
    expand!(b'm', b"AC");
    expand!(b'r', b"AG");
    expand!(b'w', b"AT");
    expand!(b's', b"CG");
    expand!(b'y', b"CT");
    expand!(b'k', b"GT");
    expand!(b'v', b"ACG");
    expand!(b'h', b"ACT");
    expand!(b'd', b"AGT");
    expand!(b'b', b"CGT");
    expand!(b'n', b"ACGT");

    map
};
