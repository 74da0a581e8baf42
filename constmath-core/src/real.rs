use num_traits::{NumAssignOps, NumOps};
use std::fmt::Debug;

/// A trait representing the floating-point types constmath evaluates.
///
/// This is the generic boundary of the crate: the algorithms themselves are instantiated
/// per concrete precision (so that they can be `const fn`), and `Real` maps each
/// precision onto its run-time drivers. Generic code written against `Real` therefore runs
/// the same kernels as the compile-time path in [`ct`](crate::ct).
///
/// Implemented for `f32`, `f64` and, with the `f128` feature, `f128`.
pub trait Real:
    NumOps // Add, Sub, Mul, Div, Rem
    + NumAssignOps // AddAssign, SubAssign, ...
    + PartialOrd
    + Debug
    + Copy
    + Send
    + Sync
    + 'static
{
    const ZERO: Self;
    const ONE: Self;
    /// Smallest positive normal value.
    const MIN_POSITIVE: Self;
    const EPSILON: Self;
    const NAN: Self;
    const INFINITY: Self;
    const NEG_INFINITY: Self;

    fn is_nan(self) -> bool;
    fn is_infinite(self) -> bool;

    fn sqrt(self) -> Self;
    fn ln(self) -> Self;
    fn exp(self) -> Self;
    fn tan(self) -> Self;
}

macro_rules! real_impl {
    ($m:ident, $t:ident) => {
        impl Real for $t {
            const ZERO: Self = 0.0;
            const ONE: Self = 1.0;
            const MIN_POSITIVE: Self = crate::limits::$m::MIN;
            const EPSILON: Self = crate::limits::$m::EPSILON;
            const NAN: Self = crate::limits::$m::NAN;
            const INFINITY: Self = crate::limits::$m::INF;
            const NEG_INFINITY: Self = crate::limits::$m::NEG_INF;

            #[inline]
            fn is_nan(self) -> bool {
                crate::classify::$m::is_nan(self)
            }

            #[inline]
            fn is_infinite(self) -> bool {
                crate::classify::$m::is_inf(self)
            }

            #[inline]
            fn sqrt(self) -> Self {
                crate::rt::$t::sqrt(self)
            }

            #[inline]
            fn ln(self) -> Self {
                crate::rt::$t::ln(self)
            }

            #[inline]
            fn exp(self) -> Self {
                crate::rt::$t::exp(self)
            }

            #[inline]
            fn tan(self) -> Self {
                crate::rt::$t::tan(self)
            }
        }
    };
}

for_each_precision!(real_impl);
