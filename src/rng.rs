use rand::SeedableRng;
use rand::rngs::StdRng;

/// Build the generator used for all draws.
///
/// A fixed seed reproduces the same batch; without one the generator is
/// seeded from OS entropy. Cryptographic strength is not a goal here.
#[must_use]
pub fn create_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    }
}
