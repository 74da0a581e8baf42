//! Newton–Raphson kernel for the square root.
//!
//! Iterates \\( x_{n+1} = \tfrac{1}{2}\left(x_n + \tfrac{x}{x_n}\right) \\) from
//! \\( x_0 = x/2 \\). Stops once
//! \\( |x_n - x/x_n| / (1 + x_n) < \varepsilon \\) or after
//! [`SQRT_MAX_ITER`](crate::config::SQRT_MAX_ITER) steps, returning the last estimate in
//! both cases. The reduced argument is strictly positive, so every estimate is too.

macro_rules! sqrt_kernel_impl {
    ($m:ident, $t:ident) => {
        pub mod $m {
            use crate::classify::$m as c;
            use crate::config::SQRT_MAX_ITER;
            use crate::limits::$m as lim;

            #[inline]
            pub const fn seed(x: $t) -> $t {
                x / 2.0
            }

            #[inline]
            pub const fn step(x: $t, xn: $t) -> $t {
                0.5 * (xn + x / xn)
            }

            #[inline]
            pub const fn converged(x: $t, xn: $t) -> bool {
                c::abs(xn - x / xn) / (1.0 + xn) < lim::EPSILON
            }

            /// Recursive driver; call with `xn = seed(x)` and `count = 0`.
            pub const fn newton(x: $t, xn: $t, count: u32) -> $t {
                if converged(x, xn) || count >= SQRT_MAX_ITER {
                    xn
                } else {
                    newton(x, step(x, xn), count + 1)
                }
            }

            /// Loop driver. Agrees bit-for-bit with [`newton`]`(x, seed(x), 0)`.
            pub fn newton_iter(x: $t) -> $t {
                newton_iter_from(x, seed(x), 0)
            }

            /// Loop driver resumed from estimate `xn` after `count` steps.
            pub(crate) fn newton_iter_from(x: $t, xn: $t, count: u32) -> $t {
                let mut xn = xn;
                let mut count = count;
                while !converged(x, xn) {
                    if count >= SQRT_MAX_ITER {
                        log::trace!(
                            "sqrt kernel hit the iteration cap for reduced argument {:?}",
                            x
                        );
                        break;
                    }
                    xn = step(x, xn);
                    count += 1;
                }
                xn
            }
        }
    };
}

for_each_precision!(sqrt_kernel_impl);
