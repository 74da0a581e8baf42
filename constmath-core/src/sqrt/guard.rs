//! Edge-case guard for the square root.
//!
//! Order matters: the NaN and sign tests run before the "close to zero/one" tests, since
//! every ordering comparison against NaN is false and would fall through silently.

macro_rules! sqrt_guard_impl {
    ($m:ident, $t:ident) => {
        pub mod $m {
            use crate::classify::$m as c;
            use crate::classify::Guard;
            use crate::limits::$m as lim;

            pub const fn check(x: $t) -> Guard<$t> {
                if c::is_nan(x) {
                    Guard::Exit(lim::NAN)
                } else if x < 0.0 {
                    Guard::Exit(lim::NAN)
                } else if c::is_posinf(x) {
                    Guard::Exit(x)
                } else if lim::MIN > c::abs(x) {
                    // indistinguishable from zero
                    Guard::Exit(0.0)
                } else if lim::MIN > c::abs(1.0 - x) {
                    Guard::Exit(x)
                } else {
                    Guard::Pass(x)
                }
            }
        }
    };
}

for_each_precision!(sqrt_guard_impl);
