//! Run-time entry points.
//!
//! Same formulas as [`ct`](crate::ct), evaluated through the loop-based primitives of
//! [`constmath_core::rt`]. The two paths agree bit for bit.

macro_rules! rt_impl {
    ($m:ident, $t:ident) => {
        #[doc = concat!("Run-time functions over `", stringify!($t), "`.")]
        pub mod $t {
            use constmath_core::classify::$m as c;
            use constmath_core::limits::$m as lim;
            use constmath_core::rt::$t as prim;

            trig_fns!([] $t);
            hyperbolic_fns!([] $t);
            inverse_hyperbolic_fns!([] $t);
        }
    };
}

constmath_core::for_each_precision!(rt_impl);
