//! Checked variants: arguments whose plain result would be a NaN or infinity sentinel
//! become a [`DomainError`].

use crate::elementary::Elementary;
use constmath_core::checked::{out_of_domain, pole, reject_nan};
use constmath_core::DomainError;

fn reject_infinite<T: Elementary>(function: &'static str, x: T) -> Result<(), DomainError> {
    if x.is_infinite() {
        return Err(out_of_domain(function, x));
    }
    Ok(())
}

/// Sine; infinite arguments, and arguments too large to reduce modulo π, are an error.
pub fn sin<T: Elementary>(x: T) -> Result<T, DomainError> {
    reject_nan("sin", x)?;
    reject_infinite("sin", x)?;
    let value = T::sin(x);
    if value.is_nan() {
        return Err(out_of_domain("sin", x));
    }
    Ok(value)
}

/// Cosine; same domain as [`sin`].
pub fn cos<T: Elementary>(x: T) -> Result<T, DomainError> {
    reject_nan("cos", x)?;
    reject_infinite("cos", x)?;
    let value = T::cos(x);
    if value.is_nan() {
        return Err(out_of_domain("cos", x));
    }
    Ok(value)
}

/// Inverse hyperbolic cosine; arguments below 1 are an error.
pub fn acosh<T: Elementary>(x: T) -> Result<T, DomainError> {
    reject_nan("acosh", x)?;
    if x < T::ONE {
        return Err(out_of_domain("acosh", x));
    }
    Ok(T::acosh(x))
}

/// Inverse hyperbolic tangent; `|x| > 1` is an error and `±1` are poles.
pub fn atanh<T: Elementary>(x: T) -> Result<T, DomainError> {
    reject_nan("atanh", x)?;
    let neg_one = T::ZERO - T::ONE;
    if x > T::ONE || x < neg_one {
        return Err(out_of_domain("atanh", x));
    }
    if x == T::ONE || x == neg_one {
        return Err(pole("atanh", x));
    }
    Ok(T::atanh(x))
}
