//! Run-time entry points.
//!
//! Loop-based drivers over the same step functions as [`ct`](crate::ct). The generic
//! functions at the crate root ([`sqrt`](crate::sqrt()), [`ln`](crate::ln()), ...) land
//! here through [`Real`](crate::Real).

macro_rules! rt_impl {
    ($m:ident, $t:ident) => {
        #[doc = concat!("Run-time functions over `", stringify!($t), "`.")]
        pub mod $t {
            pub use crate::exp::$m::eval_iter as exp;
            pub use crate::ln::$m::eval_iter as ln;
            pub use crate::sqrt::$m::eval_iter as sqrt;
            pub use crate::tan::$m::eval_iter as tan;
            pub use crate::exp::$m::sinh_series_iter as sinh_series;
            pub use crate::ln::$m::atanh_series_iter as atanh_series;
        }
    };
}

for_each_precision!(rt_impl);
