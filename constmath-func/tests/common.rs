use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

// Shared helpers for the integration tests; not every binary uses all of them.

#[allow(dead_code)]
pub fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(0xF00D_CAFE)
}

/// `n` values uniformly spread over `[min, max)`.
#[allow(dead_code)]
pub fn uniform(rng: &mut StdRng, n: usize, min: f64, max: f64) -> Vec<f64> {
    (0..n).map(|_| rng.gen_range(min..max)).collect()
}
