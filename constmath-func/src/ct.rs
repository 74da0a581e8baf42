//! Compile-time entry points.
//!
//! `const fn` versions of every function in this crate, built on
//! [`constmath_core::ct`]:
//!
//! ```
//! use constmath_func::ct;
//!
//! const ACOSH_2: f64 = ct::f64::acosh(2.0);
//! const COS_0: f32 = ct::f32::cos(0.0);
//!
//! assert!((ACOSH_2 - 1.3169578969248166).abs() < 1e-14);
//! assert_eq!(COS_0, 1.0);
//! ```

macro_rules! ct_impl {
    ($m:ident, $t:ident) => {
        #[doc = concat!("Compile-time functions over `", stringify!($t), "`.")]
        pub mod $t {
            use constmath_core::classify::$m as c;
            use constmath_core::ct::$t as prim;
            use constmath_core::limits::$m as lim;

            trig_fns!([const] $t);
            hyperbolic_fns!([const] $t);
            inverse_hyperbolic_fns!([const] $t);
        }
    };
}

constmath_core::for_each_precision!(ct_impl);
