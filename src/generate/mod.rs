use rand_xoshiro::{
    Xoshiro256PlusPlus,
    rand_core::{RngCore, SeedableRng},
};

/// Generates a random sequence of `length` bytes drawn uniformly from
/// `alpha`, reproducible from the given `seed`.
#[must_use]
pub fn rand_sequence(alpha: &[u8], length: usize, seed: u64) -> Vec<u8> {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
    let mut sequence = Vec::with_capacity(length);

    while sequence.len() < length {
        sequence.push(alpha[rng.next_u32() as usize % alpha.len()]);
    }

    sequence
}
