use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

// Shared helpers for the integration tests. Each test binary uses a different subset,
// hence the allow(dead_code).

/// Reproducible generator for sampled property tests.
#[allow(dead_code)]
pub fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(0x5EED_C0DE)
}

/// `n` values log-uniformly spread over `[10^min_exp, 10^max_exp)`.
#[allow(dead_code)]
pub fn log_uniform(rng: &mut StdRng, n: usize, min_exp: f64, max_exp: f64) -> Vec<f64> {
    (0..n)
        .map(|_| 10f64.powf(rng.gen_range(min_exp..max_exp)))
        .collect()
}

/// Subnormal, near-zero, near-one, moderate and very large magnitudes.
#[allow(dead_code)]
pub fn representative_f64() -> Vec<f64> {
    vec![
        f64::MIN_POSITIVE / 1024.0,
        f64::MIN_POSITIVE,
        1e-300,
        1e-20,
        1e-8,
        0.001999,
        0.25,
        0.5,
        1.0 - 4.0 * f64::EPSILON,
        1.0,
        1.0 + 4.0 * f64::EPSILON,
        1.5,
        2.0,
        41.5,
        123456789.5,
        6.02214076e23,
        1e300,
        f64::MAX,
    ]
}

#[allow(dead_code)]
pub fn representative_f32() -> Vec<f32> {
    vec![
        f32::MIN_POSITIVE / 64.0,
        f32::MIN_POSITIVE,
        1e-30,
        1e-8,
        0.25,
        0.5,
        1.0 - 4.0 * f32::EPSILON,
        1.0,
        1.0 + 4.0 * f32::EPSILON,
        2.0,
        41.5,
        123456789.5,
        1e30,
        f32::MAX,
    ]
}
