use constmath_core::Real;

/// Floating-point types with the full set of elementary functions.
///
/// Extends [`Real`] (square root, logarithm, exponential, tangent) with the functions
/// composed from them. Implementations forward to [`rt`](crate::rt).
pub trait Elementary: Real {
    fn sin(self) -> Self;
    fn cos(self) -> Self;
    fn sinh(self) -> Self;
    fn cosh(self) -> Self;
    fn tanh(self) -> Self;
    fn asinh(self) -> Self;
    fn acosh(self) -> Self;
    fn atanh(self) -> Self;
}

macro_rules! elementary_impl {
    ($m:ident, $t:ident) => {
        impl Elementary for $t {
            #[inline]
            fn sin(self) -> Self {
                crate::rt::$t::sin(self)
            }

            #[inline]
            fn cos(self) -> Self {
                crate::rt::$t::cos(self)
            }

            #[inline]
            fn sinh(self) -> Self {
                crate::rt::$t::sinh(self)
            }

            #[inline]
            fn cosh(self) -> Self {
                crate::rt::$t::cosh(self)
            }

            #[inline]
            fn tanh(self) -> Self {
                crate::rt::$t::tanh(self)
            }

            #[inline]
            fn asinh(self) -> Self {
                crate::rt::$t::asinh(self)
            }

            #[inline]
            fn acosh(self) -> Self {
                crate::rt::$t::acosh(self)
            }

            #[inline]
            fn atanh(self) -> Self {
                crate::rt::$t::atanh(self)
            }
        }
    };
}

constmath_core::for_each_precision!(elementary_impl);
