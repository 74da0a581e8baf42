//! Exponential function.
//!
//! - guard: NaN gives NaN, `+inf` gives `+inf`, `-inf` gives `0`, arguments past the
//!   overflow (underflow) threshold give `+inf` (`0`), values indistinguishable from zero
//!   give `1`;
//! - reducer: peels off 64, 16, 4 and 1 until `|x| <= 1`, multiplying the matching power
//!   of e into a running multiplier;
//! - kernel: Taylor series \\( \sum x^n / n! \\);
//! - composer: `multiplier * series`.

use crate::real::Real;

macro_rules! exp_impl {
    ($m:ident, $t:ident) => {
        pub mod $m {
            use crate::classify::$m as c;
            use crate::classify::Guard;
            use crate::config::EXP_MAX_ITER;
            use crate::limits::$m as lim;

            const E_1: $t = 2.7182818284590452353602874713526624977572470937000;
            const E_4: $t = 54.598150033144239078110261202860878402790737038614;
            const E_16: $t = 8886110.5205078726367630237407814503508027198218566;
            const E_64: $t = 6235149080811616882909238708.9284697448313918462358;

            /// Above this, `e^x` is not representable.
            pub const OVERFLOW_ARG: $t = lim::LN_MAX;
            /// Below this, `e^x` rounds to zero even as a subnormal.
            pub const UNDERFLOW_ARG: $t =
                (<$t>::MIN_EXP - <$t>::MANTISSA_DIGITS as i32 - 1) as $t * lim::LN_2;

            // --- Guard ---

            pub const fn check(x: $t) -> Guard<$t> {
                if c::is_nan(x) {
                    Guard::Exit(lim::NAN)
                } else if x > OVERFLOW_ARG {
                    Guard::Exit(lim::INF)
                } else if x < UNDERFLOW_ARG {
                    Guard::Exit(0.0)
                } else if lim::MIN > c::abs(x) {
                    Guard::Exit(1.0)
                } else {
                    Guard::Pass(x)
                }
            }

            // --- Reducer ---

            /// One rung on `(x, multiplier)`; `None` once `|x| <= 1`.
            pub const fn step(x: $t, multiplier: $t) -> Option<($t, $t)> {
                if x > 64.0 {
                    Some((x - 64.0, multiplier * E_64))
                } else if x > 16.0 {
                    Some((x - 16.0, multiplier * E_16))
                } else if x > 4.0 {
                    Some((x - 4.0, multiplier * E_4))
                } else if x > 1.0 {
                    Some((x - 1.0, multiplier * E_1))
                } else if x < -64.0 {
                    Some((x + 64.0, multiplier / E_64))
                } else if x < -16.0 {
                    Some((x + 16.0, multiplier / E_16))
                } else if x < -4.0 {
                    Some((x + 4.0, multiplier / E_4))
                } else if x < -1.0 {
                    Some((x + 1.0, multiplier / E_1))
                } else {
                    None
                }
            }

            pub const fn reduce(x: $t, multiplier: $t) -> ($t, $t) {
                match step(x, multiplier) {
                    Some((x, multiplier)) => reduce(x, multiplier),
                    None => (x, multiplier),
                }
            }

            pub fn reduce_iter(x: $t) -> ($t, $t) {
                let mut x_val = x;
                let mut m_val = 1.0;
                while let Some((next_x, next_m)) = step(x_val, m_val) {
                    x_val = next_x;
                    m_val = next_m;
                }
                (x_val, m_val)
            }

            // --- Kernel ---

            /// Adds the term of order `n + 1`; the flag reports convergence.
            #[inline]
            pub const fn term(x: $t, power: $t, sum: $t, n: u32) -> ($t, $t, bool) {
                let power = power * x / (n + 1) as $t;
                let sum = sum + power;
                (power, sum, c::abs(power) <= lim::EPSILON * c::abs(sum))
            }

            /// Recursive driver; call with `power = sum = 1` and `n = 0`.
            pub const fn series(x: $t, power: $t, sum: $t, n: u32) -> $t {
                let (power, sum, done) = term(x, power, sum, n);
                if done || n + 1 >= EXP_MAX_ITER {
                    sum
                } else {
                    series(x, power, sum, n + 1)
                }
            }

            pub fn series_iter(x: $t) -> $t {
                let mut power = 1.0;
                let mut sum = 1.0;
                let mut n = 0;
                loop {
                    let (next_power, next_sum, done) = term(x, power, sum, n);
                    power = next_power;
                    sum = next_sum;
                    n += 1;
                    if done {
                        break;
                    }
                    if n >= EXP_MAX_ITER {
                        log::trace!("exp series hit the iteration cap for x = {:?}", x);
                        break;
                    }
                }
                sum
            }

            // --- Odd series (sinh) ---

            /// Adds the term of order `2n + 3` of \\( \sum x^{2k+1} / (2k+1)! \\).
            #[inline]
            pub const fn odd_term(x2: $t, power: $t, sum: $t, n: u32) -> ($t, $t, bool) {
                let power = power * x2 / ((2 * n + 2) * (2 * n + 3)) as $t;
                let sum = sum + power;
                (power, sum, c::abs(power) <= lim::EPSILON * c::abs(sum))
            }

            /// Recursive driver; call with `power = sum = x` and `n = 0`.
            pub const fn odd_series(x2: $t, power: $t, sum: $t, n: u32) -> $t {
                let (power, sum, done) = odd_term(x2, power, sum, n);
                if done || n + 1 >= EXP_MAX_ITER {
                    sum
                } else {
                    odd_series(x2, power, sum, n + 1)
                }
            }

            pub fn odd_series_iter(x: $t) -> $t {
                let x2 = x * x;
                let mut power = x;
                let mut sum = x;
                let mut n = 0;
                loop {
                    let (next_power, next_sum, done) = odd_term(x2, power, sum, n);
                    power = next_power;
                    sum = next_sum;
                    n += 1;
                    if done {
                        break;
                    }
                    if n >= EXP_MAX_ITER {
                        log::trace!("sinh series hit the iteration cap for x = {:?}", x);
                        break;
                    }
                }
                sum
            }

            /// Compile-time hyperbolic sine by its Taylor series. Meant for `|x| <= 1/2`,
            /// where the exponential form cancels.
            pub const fn sinh_series(x: $t) -> $t {
                odd_series(x * x, x, x, 0)
            }

            /// Run-time counterpart of [`sinh_series`].
            pub fn sinh_series_iter(x: $t) -> $t {
                odd_series_iter(x)
            }

            // --- Composer ---

            /// Compile-time exponential.
            pub const fn eval(x: $t) -> $t {
                match check(x) {
                    Guard::Exit(value) => value,
                    Guard::Pass(x) => {
                        let (x_reduced, multiplier) = reduce(x, 1.0);
                        multiplier * series(x_reduced, 1.0, 1.0, 0)
                    }
                }
            }

            /// Run-time exponential.
            pub fn eval_iter(x: $t) -> $t {
                match check(x) {
                    Guard::Exit(value) => value,
                    Guard::Pass(x) => {
                        let (x_reduced, multiplier) = reduce_iter(x);
                        multiplier * series_iter(x_reduced)
                    }
                }
            }
        }
    };
}

for_each_precision!(exp_impl);

/// Computes \\( e^x \\).
pub fn exp<T: Real>(x: T) -> T {
    T::exp(x)
}

#[cfg(test)]
#[path = "exp_test.rs"]
mod tests;
