//! Numeric limits provider.
//!
//! One module per precision (`single`, `double`, `quad`) exposing the constants the guards
//! and kernels compare against. Everything here is a plain `const`, so it is usable from
//! both evaluation paths.

macro_rules! limits_impl {
    ($m:ident, $t:ident) => {
        #[doc = concat!("Limits and constants for `", stringify!($t), "`.")]
        pub mod $m {
            /// Smallest positive normal value. Anything smaller in magnitude is treated as
            /// indistinguishable from zero by the guards.
            pub const MIN: $t = <$t>::MIN_POSITIVE;
            /// Difference between 1 and the next representable value.
            pub const EPSILON: $t = <$t>::EPSILON;
            /// Power of two at or just above the square root of [`EPSILON`]; below it the odd
            /// functions are linear to working precision.
            pub const SQRT_EPSILON: $t = pow2_neg((<$t>::MANTISSA_DIGITS - 1) / 2);
            pub const NAN: $t = <$t>::NAN;
            pub const INF: $t = <$t>::INFINITY;
            pub const NEG_INF: $t = <$t>::NEG_INFINITY;

            pub const PI: $t = core::$t::consts::PI;
            pub const FRAC_PI_2: $t = core::$t::consts::FRAC_PI_2;
            pub const FRAC_PI_4: $t = core::$t::consts::FRAC_PI_4;
            pub const LN_2: $t = core::$t::consts::LN_2;
            pub const LN_10: $t = core::$t::consts::LN_10;
            /// Largest argument whose exponential is finite, to within rounding.
            pub const LN_MAX: $t = <$t>::MAX_EXP as $t * LN_2;

            // 2^-n, exact for every precision.
            const fn pow2_neg(n: u32) -> $t {
                if n == 0 {
                    1.0
                } else {
                    0.5 * pow2_neg(n - 1)
                }
            }
        }
    };
}

for_each_precision!(limits_impl);
