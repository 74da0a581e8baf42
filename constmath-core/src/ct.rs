//! Compile-time entry points.
//!
//! Every function here is a `const fn` built only from recursion and immutable bindings,
//! so it can initialise `const` and `static` items:
//!
//! ```
//! use constmath_core::ct;
//!
//! const ROOT_2: f64 = ct::f64::sqrt(2.0);
//! const LN_3: f32 = ct::f32::ln(3.0);
//!
//! assert!((ROOT_2 - 1.4142135623730951).abs() < 1e-15);
//! assert!((LN_3 - 1.0986123).abs() < 1e-6);
//! ```
//!
//! The results match [`rt`](crate::rt) bit for bit.

macro_rules! ct_impl {
    ($m:ident, $t:ident) => {
        #[doc = concat!("Compile-time functions over `", stringify!($t), "`.")]
        pub mod $t {
            pub use crate::exp::$m::eval as exp;
            pub use crate::ln::$m::eval as ln;
            pub use crate::sqrt::$m::eval as sqrt;
            pub use crate::tan::$m::eval as tan;
            pub use crate::exp::$m::sinh_series;
            pub use crate::ln::$m::atanh_series;
        }
    };
}

for_each_precision!(ct_impl);
