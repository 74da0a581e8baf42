//! Classification provider.
//!
//! `const fn` predicates over raw floats. Comparisons against NaN are always false, so the
//! guards call [`is_nan`](double::is_nan) before any ordering test.

/// Outcome of an edge-case guard.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Guard<T> {
    /// The input was degenerate; this is the final answer.
    Exit(T),
    /// The input needs the full reduce-and-iterate pipeline.
    Pass(T),
}

macro_rules! classify_impl {
    ($m:ident, $t:ident) => {
        #[doc = concat!("Classification predicates for `", stringify!($t), "`.")]
        pub mod $m {
            use crate::limits::$m as lim;

            #[inline]
            #[allow(clippy::eq_op)]
            pub const fn is_nan(x: $t) -> bool {
                x != x
            }

            #[inline]
            pub const fn is_posinf(x: $t) -> bool {
                x == lim::INF
            }

            #[inline]
            pub const fn is_neginf(x: $t) -> bool {
                x == lim::NEG_INF
            }

            #[inline]
            pub const fn is_inf(x: $t) -> bool {
                is_posinf(x) || is_neginf(x)
            }

            /// Absolute value. NaN is returned unchanged.
            #[inline]
            pub const fn abs(x: $t) -> $t {
                if x < 0.0 {
                    -x
                } else {
                    x
                }
            }

            /// `-1` for negative inputs, `1` otherwise (including `-0.0` and NaN).
            #[inline]
            pub const fn sgn(x: $t) -> $t {
                if x < 0.0 {
                    -1.0
                } else {
                    1.0
                }
            }
        }
    };
}

for_each_precision!(classify_impl);

#[cfg(test)]
#[path = "classify_test.rs"]
mod tests;
