//! Range reducer for the square root.
//!
//! Uses \\( \sqrt{a b} = \sqrt{a}\,\sqrt{b} \\): the argument is divided (or multiplied)
//! by a perfect square and its root is folded into a running multiplier, so
//! `multiplier * sqrt(x_reduced) == sqrt(x)` holds throughout. Rungs are tried from the
//! largest down and reapplied until the argument lies in `[1/4, 4]`.
//!
//! The ladder thresholds (1e8, 1e6, 1e4, 100, 4 and their reciprocals) trade reduction
//! steps against kernel iterations; they are policy, not derived constants.

macro_rules! sqrt_reduce_impl {
    ($m:ident, $t:ident) => {
        pub mod $m {
            /// Applies one rung of the ladder to `(x, multiplier)`.
            ///
            /// Returns `None` once `x` is inside `[1/4, 4]`.
            pub const fn step(x: $t, multiplier: $t) -> Option<($t, $t)> {
                if x > 1e8 {
                    Some((x / 1e8, multiplier * 1e4))
                } else if x > 1e6 {
                    Some((x / 1e6, multiplier * 1e3))
                } else if x > 1e4 {
                    Some((x / 1e4, multiplier * 1e2))
                } else if x > 100.0 {
                    Some((x / 100.0, multiplier * 10.0))
                } else if x > 4.0 {
                    Some((x / 4.0, multiplier * 2.0))
                } else if x < 1e-8 {
                    Some((x * 1e8, multiplier / 1e4))
                } else if x < 1e-6 {
                    Some((x * 1e6, multiplier / 1e3))
                } else if x < 1e-4 {
                    Some((x * 1e4, multiplier / 1e2))
                } else if x < 1e-2 {
                    Some((x * 100.0, multiplier / 10.0))
                } else if x < 0.25 {
                    Some((x * 4.0, multiplier / 2.0))
                } else {
                    None
                }
            }

            /// Recursive driver, usable by the constant evaluator.
            pub const fn reduce(x: $t, multiplier: $t) -> ($t, $t) {
                match step(x, multiplier) {
                    Some((x, multiplier)) => reduce(x, multiplier),
                    None => (x, multiplier),
                }
            }

            /// Loop driver. Produces the same pair as [`reduce`]`(x, 1.0)`.
            pub fn reduce_iter(x: $t) -> ($t, $t) {
                let mut x_val = x;
                let mut m_val = 1.0;
                while let Some((next_x, next_m)) = step(x_val, m_val) {
                    x_val = next_x;
                    m_val = next_m;
                }
                (x_val, m_val)
            }
        }
    };
}

for_each_precision!(sqrt_reduce_impl);
