//! # Square-root engine
//!
//! Guard → Reducer → Newton–Raphson kernel → rescale by the multiplier.
//!
//! ## Structure:
//!
//! - [`guard`]: answers NaN, negative, infinite and near-0/near-1 inputs directly.
//! - [`reduce`]: scales the argument into `[1/4, 4]` and records the compensating multiplier.
//! - [`kernel`]: Newton–Raphson on the reduced argument.
//!
//! The per-precision modules below (`single`, `double`, `quad`) compose the stages twice:
//! `eval` is a recursive `const fn` for the constant evaluator, `eval_iter` uses loops and
//! is what the run-time entry points call. Both call the same step functions, so they
//! return identical bits for identical inputs.

pub mod guard;
pub mod kernel;
pub mod reduce;

use crate::real::Real;

macro_rules! sqrt_impl {
    ($m:ident, $t:ident) => {
        pub mod $m {
            use super::{guard, kernel, reduce};
            use crate::classify::Guard;

            /// Compile-time square root.
            pub const fn eval(x: $t) -> $t {
                match guard::$m::check(x) {
                    Guard::Exit(value) => value,
                    Guard::Pass(x) => {
                        let (x_reduced, multiplier) = reduce::$m::reduce(x, 1.0);
                        multiplier * kernel::$m::newton(x_reduced, kernel::$m::seed(x_reduced), 0)
                    }
                }
            }

            /// Run-time square root.
            pub fn eval_iter(x: $t) -> $t {
                match guard::$m::check(x) {
                    Guard::Exit(value) => value,
                    Guard::Pass(x) => {
                        let (x_reduced, multiplier) = reduce::$m::reduce_iter(x);
                        multiplier * kernel::$m::newton_iter(x_reduced)
                    }
                }
            }
        }
    };
}

for_each_precision!(sqrt_impl);

/// Computes \\( \sqrt{x} \\) using a Newton–Raphson approach.
///
/// Total over its input type: NaN and negative inputs give NaN, `+inf` gives `+inf`,
/// inputs smaller than the smallest positive normal value give `0`.
///
/// For a value computed by the constant evaluator use [`ct`](crate::ct), e.g.
/// `const ROOT_2: f64 = constmath_core::ct::f64::sqrt(2.0);`.
pub fn sqrt<T: Real>(x: T) -> T {
    T::sqrt(x)
}

#[cfg(test)]
#[path = "sqrt_test.rs"]
mod tests;
