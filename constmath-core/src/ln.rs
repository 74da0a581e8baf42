//! Natural logarithm.
//!
//! Same pipeline as [`sqrt`](crate::sqrt):
//!
//! - guard: NaN and negative inputs give NaN, values below the smallest positive normal
//!   give `-inf`, `+inf` gives `+inf`, values indistinguishable from 1 give `0`;
//! - reducer: divides or multiplies by powers of ten, then by two, until the argument lies
//!   in `[1/2, 2]`, counting decades and octaves;
//! - kernel: \\( \ln x = 2 \sum_{n \ge 0} \frac{z^{2n+1}}{2n+1} \\) with
//!   \\( z = \frac{x - 1}{x + 1} \\), so \\( |z| \le 1/3 \\) after reduction;
//! - composer: `decades * ln 10 + octaves * ln 2 + 2 * series`.

use crate::real::Real;

macro_rules! ln_impl {
    ($m:ident, $t:ident) => {
        pub mod $m {
            use crate::classify::$m as c;
            use crate::classify::Guard;
            use crate::config::LOG_MAX_ITER;
            use crate::limits::$m as lim;

            // --- Guard ---

            pub const fn check(x: $t) -> Guard<$t> {
                if c::is_nan(x) {
                    Guard::Exit(lim::NAN)
                } else if x < 0.0 {
                    Guard::Exit(lim::NAN)
                } else if lim::MIN > x {
                    Guard::Exit(lim::NEG_INF)
                } else if c::is_posinf(x) {
                    Guard::Exit(x)
                } else if lim::MIN > c::abs(1.0 - x) {
                    Guard::Exit(0.0)
                } else {
                    Guard::Pass(x)
                }
            }

            // --- Reducer ---

            /// One rung of the ladder on `(x, decades, octaves)`; `None` once `x` is in `[1/2, 2]`.
            pub const fn step(x: $t, decades: i32, octaves: i32) -> Option<($t, i32, i32)> {
                if x > 1e8 {
                    Some((x / 1e8, decades + 8, octaves))
                } else if x > 1e6 {
                    Some((x / 1e6, decades + 6, octaves))
                } else if x > 1e4 {
                    Some((x / 1e4, decades + 4, octaves))
                } else if x > 100.0 {
                    Some((x / 100.0, decades + 2, octaves))
                } else if x > 2.0 {
                    Some((x / 2.0, decades, octaves + 1))
                } else if x < 1e-8 {
                    Some((x * 1e8, decades - 8, octaves))
                } else if x < 1e-6 {
                    Some((x * 1e6, decades - 6, octaves))
                } else if x < 1e-4 {
                    Some((x * 1e4, decades - 4, octaves))
                } else if x < 1e-2 {
                    Some((x * 100.0, decades - 2, octaves))
                } else if x < 0.5 {
                    Some((x * 2.0, decades, octaves - 1))
                } else {
                    None
                }
            }

            pub const fn reduce(x: $t, decades: i32, octaves: i32) -> ($t, i32, i32) {
                match step(x, decades, octaves) {
                    Some((x, decades, octaves)) => reduce(x, decades, octaves),
                    None => (x, decades, octaves),
                }
            }

            pub fn reduce_iter(x: $t) -> ($t, i32, i32) {
                let mut state = (x, 0, 0);
                while let Some(next) = step(state.0, state.1, state.2) {
                    state = next;
                }
                state
            }

            // --- Kernel ---

            /// Maps the reduced argument to `(z, z^2)`.
            #[inline]
            pub const fn series_arg(x: $t) -> ($t, $t) {
                let z = (x - 1.0) / (x + 1.0);
                (z, z * z)
            }

            /// Adds term `n + 1` of the series; the flag reports convergence.
            #[inline]
            pub const fn term(z2: $t, power: $t, sum: $t, n: u32) -> ($t, $t, bool) {
                let power = power * z2;
                let added = power / (2 * n + 3) as $t;
                let sum = sum + added;
                (power, sum, c::abs(added) <= lim::EPSILON * c::abs(sum))
            }

            /// Recursive driver; call with `power = sum = z` and `n = 0`.
            pub const fn series(z2: $t, power: $t, sum: $t, n: u32) -> $t {
                let (power, sum, done) = term(z2, power, sum, n);
                if done || n + 1 >= LOG_MAX_ITER {
                    sum
                } else {
                    series(z2, power, sum, n + 1)
                }
            }

            pub fn series_iter(z: $t, z2: $t) -> $t {
                let mut power = z;
                let mut sum = z;
                let mut n = 0;
                loop {
                    let (next_power, next_sum, done) = term(z2, power, sum, n);
                    power = next_power;
                    sum = next_sum;
                    n += 1;
                    if done {
                        break;
                    }
                    if n >= LOG_MAX_ITER {
                        log::trace!("ln series hit the iteration cap for z = {:?}", z);
                        break;
                    }
                }
                sum
            }

            /// Compile-time \\( \operatorname{atanh} z \\), the bare kernel series. Meant for
            /// `|z| <= 1/2`; no `1 ± z` is ever formed.
            pub const fn atanh_series(z: $t) -> $t {
                series(z * z, z, z, 0)
            }

            /// Run-time counterpart of [`atanh_series`].
            pub fn atanh_series_iter(z: $t) -> $t {
                series_iter(z, z * z)
            }

            // --- Composer ---

            #[inline]
            pub const fn compose(decades: i32, octaves: i32, sum: $t) -> $t {
                decades as $t * lim::LN_10 + octaves as $t * lim::LN_2 + 2.0 * sum
            }

            /// Compile-time natural logarithm.
            pub const fn eval(x: $t) -> $t {
                match check(x) {
                    Guard::Exit(value) => value,
                    Guard::Pass(x) => {
                        let (x_reduced, decades, octaves) = reduce(x, 0, 0);
                        let (z, z2) = series_arg(x_reduced);
                        compose(decades, octaves, series(z2, z, z, 0))
                    }
                }
            }

            /// Run-time natural logarithm.
            pub fn eval_iter(x: $t) -> $t {
                match check(x) {
                    Guard::Exit(value) => value,
                    Guard::Pass(x) => {
                        let (x_reduced, decades, octaves) = reduce_iter(x);
                        let (z, z2) = series_arg(x_reduced);
                        compose(decades, octaves, series_iter(z, z2))
                    }
                }
            }
        }
    };
}

for_each_precision!(ln_impl);

/// Computes the natural logarithm \\( \ln x \\).
pub fn ln<T: Real>(x: T) -> T {
    T::ln(x)
}

#[cfg(test)]
#[path = "ln_test.rs"]
mod tests;
