//! Sine and cosine from the tangent of the half angle.
//!
//! With \\( t = \tan(x/2) \\):
//! \\[ \sin x = \frac{2t}{1 + t^2}, \qquad \cos x = \frac{1 - t^2}{1 + t^2} \\]
//!
//! Guards: NaN and infinities give NaN; values indistinguishable from zero give `x` (sine)
//! or `1` (cosine). When \\( t^2 \\) overflows, `x/2` sits on a pole of the tangent and the
//! limits `sin = 0`, `cos = -1` are returned.

use crate::elementary::Elementary;

/// Expands `sin` and `cos` for one precision.
///
/// Expects `c` (classification), `lim` (limits) and `prim` (core primitives) in scope;
/// the bracketed qualifier is `const` on the compile-time path and empty otherwise.
macro_rules! trig_fns {
    ([$($qual:tt)*] $t:ident) => {
        /// Sine of `x` (radians).
        pub $($qual)* fn sin(x: $t) -> $t {
            if c::is_nan(x) || c::is_inf(x) {
                lim::NAN
            } else if lim::MIN > c::abs(x) {
                x
            } else {
                let t = prim::tan(x / 2.0);
                let t2 = t * t;
                if c::is_inf(t2) {
                    0.0
                } else {
                    2.0 * t / (1.0 + t2)
                }
            }
        }

        /// Cosine of `x` (radians).
        pub $($qual)* fn cos(x: $t) -> $t {
            if c::is_nan(x) || c::is_inf(x) {
                lim::NAN
            } else if lim::MIN > c::abs(x) {
                1.0
            } else {
                let t = prim::tan(x / 2.0);
                let t2 = t * t;
                if c::is_inf(t2) {
                    -1.0
                } else {
                    (1.0 - t2) / (1.0 + t2)
                }
            }
        }
    };
}

/// Computes \\( \sin x \\).
pub fn sin<T: Elementary>(x: T) -> T {
    T::sin(x)
}

/// Computes \\( \cos x \\).
pub fn cos<T: Elementary>(x: T) -> T {
    T::cos(x)
}

#[cfg(test)]
#[path = "trig_test.rs"]
mod tests;
