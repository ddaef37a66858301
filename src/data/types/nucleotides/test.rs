use super::*;
use crate::data::err::{EncodingError, TranslationError};

#[test]
fn test_translate() {
    let s: Nucleotides = b"AAAGGGAAA".into();
    assert_eq!(s.translate(1, false).unwrap().as_bytes(), b"KGK");

    // case-insensitive, trailing bytes dropped
    let s: Nucleotides = b"atgTCAgatCCCagaGAAtgagg".into();
    assert_eq!(s.translate(1, false).unwrap().as_bytes(), b"MSDPRE*");
}

#[test]
fn test_translate_truncates() {
    let complete: Nucleotides = b"AAA".into();
    for tail in [&b"AAAG"[..], b"AAAGG"] {
        let s = Nucleotides::from(tail);
        assert_eq!(s.translate(1, false).unwrap(), complete.translate(1, false).unwrap());
    }

    let empty = Nucleotides::new();
    assert!(empty.translate(1, false).unwrap().is_empty());

    let short: Nucleotides = b"AT".into();
    assert!(short.translate(1, false).unwrap().is_empty());
}

#[test]
fn test_translate_strict() {
    let s: Nucleotides = b"ATGAAA".into();
    assert_eq!(s.translate(1, true).unwrap().as_bytes(), b"MK");

    let ambig: Nucleotides = b"ATGAAN".into();
    assert_eq!(ambig.translate(1, true), Err(TranslationError::InvalidStrictInput(b'N')));
    assert_eq!(ambig.translate(1, false).unwrap().as_bytes(), b"MX");
}

#[test]
fn test_translate_unknown_table() {
    let s: Nucleotides = b"AAA".into();
    for table_id in [0u8, 7, 8, 17, 20, 32, 33, 255] {
        assert_eq!(s.translate(table_id, false), Err(TranslationError::UnknownTable(table_id)));
    }

    // the table is checked before codon content
    let junk: Nucleotides = b"!!!".into();
    assert_eq!(junk.translate(7, false), Err(TranslationError::UnknownTable(7)));
    assert_eq!(junk.translate(1, false), Err(TranslationError::InvalidNucleotide(b'!')));
}

#[test]
fn test_reverse_complement() {
    let s: Nucleotides = b"AAAGGGAAA".into();
    assert_eq!(s.reverse_complement(false).unwrap().as_bytes(), b"TTTCCCTTT");

    // ambiguity codes complement to their complementary subset codes
    let s: Nucleotides = b"ACGTMRWSYKVHDBN".into();
    assert_eq!(s.reverse_complement(false).unwrap().as_bytes(), b"NVHDBMRSWYKACGT");

    // lowercase input, uppercase output
    let s: Nucleotides = b"acgtn".into();
    assert_eq!(s.reverse_complement(false).unwrap().as_bytes(), b"NACGT");

    let empty = Nucleotides::new();
    assert!(empty.reverse_complement(false).unwrap().is_empty());
}

#[test]
fn test_reverse_complement_validation() {
    let gap: Nucleotides = b"ACG-T".into();
    assert_eq!(gap.reverse_complement(false), Err(TranslationError::InvalidNucleotide(b'-')));

    let ambig: Nucleotides = b"ACGTN".into();
    assert_eq!(ambig.reverse_complement(true), Err(TranslationError::InvalidStrictInput(b'N')));
    assert!(ambig.reverse_complement(false).is_ok());
}

#[test]
fn test_self_frames() {
    let s: Nucleotides = b"AAAGGGAAA".into();
    let frames = s.translate_self_frames(1, false).unwrap();
    assert_eq!(frames, vec![b"KGK".into(), b"KG".into(), b"RE".into()]);

    // frame count by sequence length
    for (len, count) in [(0usize, 0usize), (1, 0), (2, 0), (3, 1), (4, 2), (5, 3), (6, 3), (9, 3)] {
        let s = Nucleotides(vec![b'A'; len]);
        assert_eq!(s.translate_self_frames(1, false).unwrap().len(), count, "length {len}");
    }
}

#[test]
fn test_all_frames() {
    let s: Nucleotides = b"AAAGGGAAA".into();
    let frames = s.translate_all_frames(1, false).unwrap();
    let expected: Vec<AminoAcids> = ["KGK", "KG", "RE", "FPF", "FP", "SL"]
        .iter()
        .map(|f| AminoAcids::from(f.as_bytes()))
        .collect();
    assert_eq!(frames, expected);

    // both sides truncate independently; the reverse complement is CTTT
    let s: Nucleotides = b"AAAG".into();
    let frames = s.translate_all_frames(1, false).unwrap();
    assert_eq!(frames, vec![b"K".into(), b"K".into(), b"L".into(), b"F".into()]);

    let short: Nucleotides = b"AA".into();
    assert!(short.translate_all_frames(1, false).unwrap().is_empty());
}

#[test]
fn test_frames_propagate_errors() {
    let s: Nucleotides = b"AAAGG-AAA".into();
    assert_eq!(
        s.translate_all_frames(1, false),
        Err(TranslationError::InvalidNucleotide(b'-'))
    );
    assert_eq!(s.translate_self_frames(99, false), Err(TranslationError::UnknownTable(99)));
}

#[test]
fn test_from_str_rejects_non_ascii() {
    let err = "AAAGGGÄ".parse::<Nucleotides>();
    assert!(matches!(err, Err(EncodingError::NonAscii(_))));

    let ok: Nucleotides = "AAAGGGAAA".parse().unwrap();
    assert_eq!(ok.as_bytes(), b"AAAGGGAAA");
}

#[test]
fn test_wrapper_semantics() {
    let mut s: Nucleotides = b"ACG".into();
    s.extend_from_slice(b"TT");
    assert_eq!(s.as_bytes(), b"ACGTT");
    assert_eq!(s.repeat(2).as_bytes(), b"ACGTTACGTT");
    assert_eq!(s[0], b'A');
    assert_eq!(&s[1..3], b"CG");
    assert_eq!(s.get(10), None);
    assert_eq!(s.to_string(), "ACGTT");
    assert_eq!(s.len(), 5);
}

#[cfg(feature = "rand")]
#[test]
fn test_random_revcomp_involution() {
    for seed in 0..8 {
        let s = Nucleotides(crate::generate::rand_sequence(
            crate::data::alphas::DNA_IUPAC_NO_GAPS_UC,
            300,
            seed,
        ));
        let twice = s.reverse_complement(false).unwrap().reverse_complement(false).unwrap();
        assert_eq!(twice, s);
    }
}

#[cfg(feature = "rand")]
#[test]
fn test_random_strict_matches_lenient() {
    for seed in 0..8 {
        let s = Nucleotides::generate_random_dna(300, seed);
        assert_eq!(s.translate(1, true).unwrap(), s.translate(1, false).unwrap());
        assert_eq!(s.reverse_complement(true).unwrap(), s.reverse_complement(false).unwrap());
    }
}
