//! Hyperbolic functions from the exponential.

use crate::elementary::Elementary;

/// Expands `sinh`, `cosh` and `tanh` for one precision. Same contract as `trig_fns!`.
///
/// Up to `|x| = 1/2` the exponential forms cancel, so `sinh` sums its odd Taylor series
/// and `tanh` divides that by `sqrt(1 + sinh²)`. Within one of the exponential's overflow
/// threshold, `e^|x|` is formed as `e^(|x|/2)` squared so the halving happens first.
macro_rules! hyperbolic_fns {
    ([$($qual:tt)*] $t:ident) => {
        /// Hyperbolic sine. Returns `x` itself below the square root of epsilon, where the
        /// cubic term no longer registers.
        pub $($qual)* fn sinh(x: $t) -> $t {
            if c::is_nan(x) {
                lim::NAN
            } else if lim::SQRT_EPSILON > c::abs(x) {
                x
            } else if c::abs(x) <= 0.5 {
                prim::sinh_series(x)
            } else if c::abs(x) > lim::LN_MAX - 1.0 {
                let e = prim::exp(c::abs(x) / 2.0);
                c::sgn(x) * (e / 2.0) * e
            } else {
                let e = prim::exp(x);
                (e - 1.0 / e) / 2.0
            }
        }

        /// Hyperbolic cosine.
        pub $($qual)* fn cosh(x: $t) -> $t {
            if c::is_nan(x) {
                lim::NAN
            } else if lim::MIN > c::abs(x) {
                1.0
            } else if c::abs(x) > lim::LN_MAX - 1.0 {
                let e = prim::exp(c::abs(x) / 2.0);
                (e / 2.0) * e
            } else {
                let e = prim::exp(x);
                (e + 1.0 / e) / 2.0
            }
        }

        /// Hyperbolic tangent; saturates to `±1` once `e^(2x)` overflows or vanishes.
        pub $($qual)* fn tanh(x: $t) -> $t {
            if c::is_nan(x) {
                lim::NAN
            } else if lim::SQRT_EPSILON > c::abs(x) {
                x
            } else if c::abs(x) <= 0.5 {
                let s = prim::sinh_series(x);
                s / prim::sqrt(1.0 + s * s)
            } else {
                let e2 = prim::exp(2.0 * x);
                if c::is_posinf(e2) {
                    1.0
                } else {
                    (e2 - 1.0) / (e2 + 1.0)
                }
            }
        }
    };
}

pub fn sinh<T: Elementary>(x: T) -> T {
    T::sinh(x)
}

pub fn cosh<T: Elementary>(x: T) -> T {
    T::cosh(x)
}

pub fn tanh<T: Elementary>(x: T) -> T {
    T::tanh(x)
}

#[cfg(test)]
#[path = "hyperbolic_test.rs"]
mod tests;
