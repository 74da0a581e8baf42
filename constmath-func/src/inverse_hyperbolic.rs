//! Inverse (area) hyperbolic functions from the logarithm and square root.
//!
//! - \\( \operatorname{acosh} x = \ln\left(x + \sqrt{(x-1)(x+1)}\right) \\), `x >= 1`
//! - \\( \operatorname{asinh} x = \operatorname{sgn}(x) \ln\left(|x| + \sqrt{x^2+1}\right) \\)
//! - \\( \operatorname{atanh} x = \tfrac12 \ln\frac{1+x}{1-x} \\), `|x| < 1`
//!
//! Past `1/ε` the square root equals its argument to working precision, so `acosh` and
//! `asinh` switch to `ln|x| + ln 2` there; this also keeps `x²` from overflowing.
//!
//! Up to `|x| = 1/2` the logarithmic forms of `asinh` and `atanh` cancel. There `atanh`
//! is the logarithm kernel's series taken directly, and `asinh x = atanh(x / sqrt(1 + x²))`.

use crate::elementary::Elementary;

/// Expands `acosh`, `asinh` and `atanh` for one precision. Same contract as `trig_fns!`.
macro_rules! inverse_hyperbolic_fns {
    ([$($qual:tt)*] $t:ident) => {
        pub $($qual)* fn acosh(x: $t) -> $t {
            if c::is_nan(x) {
                lim::NAN
            } else if x < 1.0 {
                lim::NAN
            } else if lim::MIN > c::abs(x - 1.0) {
                0.0
            } else if c::is_posinf(x) {
                x
            } else if x > 1.0 / lim::EPSILON {
                prim::ln(x) + lim::LN_2
            } else {
                prim::ln(x + prim::sqrt((x - 1.0) * (x + 1.0)))
            }
        }

        pub $($qual)* fn asinh(x: $t) -> $t {
            if c::is_nan(x) || c::is_inf(x) {
                x
            } else if lim::SQRT_EPSILON > c::abs(x) {
                x
            } else {
                let a = c::abs(x);
                let magnitude = if a <= 0.5 {
                    prim::atanh_series(a / prim::sqrt(1.0 + a * a))
                } else if a > 1.0 / lim::EPSILON {
                    prim::ln(a) + lim::LN_2
                } else {
                    prim::ln(a + prim::sqrt(a * a + 1.0))
                };
                c::sgn(x) * magnitude
            }
        }

        pub $($qual)* fn atanh(x: $t) -> $t {
            if c::is_nan(x) {
                lim::NAN
            } else if c::abs(x) > 1.0 {
                lim::NAN
            } else if c::abs(x) == 1.0 {
                c::sgn(x) * lim::INF
            } else if lim::SQRT_EPSILON > c::abs(x) {
                x
            } else if c::abs(x) <= 0.5 {
                prim::atanh_series(x)
            } else {
                0.5 * prim::ln((1.0 + x) / (1.0 - x))
            }
        }
    };
}

pub fn acosh<T: Elementary>(x: T) -> T {
    T::acosh(x)
}

pub fn asinh<T: Elementary>(x: T) -> T {
    T::asinh(x)
}

pub fn atanh<T: Elementary>(x: T) -> T {
    T::atanh(x)
}

#[cfg(test)]
#[path = "inverse_hyperbolic_test.rs"]
mod tests;
