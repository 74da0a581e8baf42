//! Tangent.
//!
//! - guard: NaN and infinities give NaN, values indistinguishable from zero are returned
//!   unchanged, and arguments so large that consecutive multiples of π are no longer
//!   resolvable (`|x| / π >= 1 / ε`) give NaN;
//! - reducer: `r = x - k π` with `k = round(x / π)`, then folds `|r| > π/4` onto
//!   `π/2 - |r|` and remembers to take the reciprocal;
//! - kernel: Lambert's continued fraction
//!   \\( \tan r = \cfrac{r}{1 - \cfrac{r^2}{3 - \cfrac{r^2}{5 - \dots}}} \\)
//!   cut at [`TAN_CF_DEPTH`](crate::config::TAN_CF_DEPTH) levels and evaluated bottom-up.

use crate::real::Real;

macro_rules! tan_impl {
    ($m:ident, $t:ident) => {
        pub mod $m {
            use crate::classify::$m as c;
            use crate::classify::Guard;
            use crate::config::TAN_CF_DEPTH;
            use crate::limits::$m as lim;

            const MAX_PERIODS: $t = 1.0 / lim::EPSILON;

            // --- Guard ---

            pub const fn check(x: $t) -> Guard<$t> {
                if c::is_nan(x) || c::is_inf(x) {
                    Guard::Exit(lim::NAN)
                } else if lim::MIN > c::abs(x) {
                    Guard::Exit(x)
                } else if c::abs(x) / lim::PI >= MAX_PERIODS {
                    Guard::Exit(lim::NAN)
                } else {
                    Guard::Pass(x)
                }
            }

            // --- Reducer ---

            /// Reduced argument of the tangent.
            #[derive(Debug, Clone, Copy, PartialEq)]
            pub struct Reduced {
                /// Argument in `[0, π/4]`.
                pub r: $t,
                /// Whether the kernel's result must be inverted (`tan r = 1 / tan(π/2 - r)`).
                pub reciprocal: bool,
                /// Sign carried over from the argument after removing whole periods.
                pub sign: $t,
            }

            pub const fn reduce(x: $t) -> Reduced {
                let periods = x / lim::PI;
                // round half away from zero; the guard keeps `periods` inside i128
                let k = if periods < 0.0 {
                    (periods - 0.5) as i128
                } else {
                    (periods + 0.5) as i128
                };
                let r = x - k as $t * lim::PI;
                let a = c::abs(r);
                if a > lim::FRAC_PI_4 {
                    Reduced { r: lim::FRAC_PI_2 - a, reciprocal: true, sign: c::sgn(r) }
                } else {
                    Reduced { r: a, reciprocal: false, sign: c::sgn(r) }
                }
            }

            // --- Kernel ---

            /// Innermost level of the fraction.
            #[inline]
            pub const fn bottom() -> $t {
                (2 * TAN_CF_DEPTH - 1) as $t
            }

            /// Level `k` of the fraction given the value of level `k + 1`.
            #[inline]
            pub const fn level(r2: $t, k: u32, inner: $t) -> $t {
                (2 * k - 1) as $t - r2 / inner
            }

            /// Recursive driver, top-down from level `k` (call with `k = 1`).
            pub const fn fraction(r2: $t, k: u32) -> $t {
                if k >= TAN_CF_DEPTH {
                    bottom()
                } else {
                    level(r2, k, fraction(r2, k + 1))
                }
            }

            /// Loop driver, bottom-up. Agrees bit-for-bit with [`fraction`]`(r2, 1)`.
            pub fn fraction_iter(r2: $t) -> $t {
                let mut value = bottom();
                let mut k = TAN_CF_DEPTH - 1;
                while k >= 1 {
                    value = level(r2, k, value);
                    k -= 1;
                }
                value
            }

            // --- Composer ---

            #[inline]
            pub const fn compose(reduced: Reduced, denominator: $t) -> $t {
                let t = reduced.r / denominator;
                if reduced.reciprocal {
                    reduced.sign / t
                } else {
                    reduced.sign * t
                }
            }

            /// Compile-time tangent.
            pub const fn eval(x: $t) -> $t {
                match check(x) {
                    Guard::Exit(value) => value,
                    Guard::Pass(x) => {
                        let reduced = reduce(x);
                        compose(reduced, fraction(reduced.r * reduced.r, 1))
                    }
                }
            }

            /// Run-time tangent.
            pub fn eval_iter(x: $t) -> $t {
                match check(x) {
                    Guard::Exit(value) => value,
                    Guard::Pass(x) => {
                        let reduced = reduce(x);
                        compose(reduced, fraction_iter(reduced.r * reduced.r))
                    }
                }
            }
        }
    };
}

for_each_precision!(tan_impl);

/// Computes \\( \tan x \\) (radians).
pub fn tan<T: Real>(x: T) -> T {
    T::tan(x)
}

#[cfg(test)]
#[path = "tan_test.rs"]
mod tests;
