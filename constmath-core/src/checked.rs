//! Checked variants of the core functions.
//!
//! Each one rejects arguments whose plain result would be a NaN or infinity sentinel and
//! otherwise returns exactly what the plain function returns.

use crate::error::DomainError;
use crate::real::Real;
use log::debug;

/// Rejects NaN before any other classification.
pub fn reject_nan<T: Real>(function: &'static str, x: T) -> Result<(), DomainError> {
    if x.is_nan() {
        debug!("{}: rejecting NaN argument", function);
        return Err(DomainError::NanInput { function });
    }
    Ok(())
}

pub fn out_of_domain<T: Real>(function: &'static str, x: T) -> DomainError {
    debug!("{}: argument {:?} is outside the domain", function, x);
    DomainError::OutOfDomain {
        function,
        value: format!("{:?}", x),
    }
}

pub fn pole<T: Real>(function: &'static str, x: T) -> DomainError {
    debug!("{}: argument {:?} is a pole", function, x);
    DomainError::Pole {
        function,
        value: format!("{:?}", x),
    }
}

/// Square root; negative arguments are an error.
pub fn sqrt<T: Real>(x: T) -> Result<T, DomainError> {
    reject_nan("sqrt", x)?;
    if x < T::ZERO {
        return Err(out_of_domain("sqrt", x));
    }
    Ok(T::sqrt(x))
}

/// Natural logarithm; negative arguments are an error and zero is a pole.
///
/// Positive values below the smallest positive normal count as zero, matching the `-inf`
/// the plain function returns for them.
pub fn ln<T: Real>(x: T) -> Result<T, DomainError> {
    reject_nan("ln", x)?;
    if x < T::ZERO {
        return Err(out_of_domain("ln", x));
    }
    if x < T::MIN_POSITIVE {
        return Err(pole("ln", x));
    }
    Ok(T::ln(x))
}

/// Exponential; only NaN is rejected.
pub fn exp<T: Real>(x: T) -> Result<T, DomainError> {
    reject_nan("exp", x)?;
    Ok(T::exp(x))
}

/// Tangent; infinite arguments, and arguments too large to reduce modulo π at this
/// precision, are an error.
pub fn tan<T: Real>(x: T) -> Result<T, DomainError> {
    reject_nan("tan", x)?;
    if x.is_infinite() {
        return Err(out_of_domain("tan", x));
    }
    let value = T::tan(x);
    if value.is_nan() {
        return Err(out_of_domain("tan", x));
    }
    Ok(value)
}

#[cfg(test)]
#[path = "checked_test.rs"]
mod tests;
