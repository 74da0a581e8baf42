//! # constmath-func
//!
//! Trigonometric and hyperbolic functions assembled from the primitives of
//! [`constmath_core`] (`sqrt`, `ln`, `exp`, `tan`).
//!
//! ## Structure:
//!
//! - [`trig`]: `sin` and `cos` through the tangent half-angle identities.
//! - [`hyperbolic`]: `sinh`, `cosh`, `tanh` through the exponential.
//! - [`inverse_hyperbolic`]: `asinh`, `acosh`, `atanh` through the logarithm and square root.
//!
//! Each module holds the guard and formula of its functions once, as a macro body. The
//! macro is expanded twice per precision: in [`ct`] against the core's `const fn`
//! primitives and in [`rt`] against its loop-based ones. Generic callers go through
//! [`Elementary`].
//!
//! ```
//! use constmath_func::{ct, sin};
//!
//! const SIN_1: f64 = ct::f64::sin(1.0);
//! assert_eq!(SIN_1.to_bits(), sin(1.0f64).to_bits());
//! ```
#![cfg_attr(feature = "f128", feature(f128))]

#[macro_use]
pub mod trig;
#[macro_use]
pub mod hyperbolic;
#[macro_use]
pub mod inverse_hyperbolic;

pub mod ct;
pub mod rt;

pub mod checked;
pub mod elementary;

pub use elementary::Elementary;
pub use hyperbolic::{cosh, sinh, tanh};
pub use inverse_hyperbolic::{acosh, asinh, atanh};
pub use trig::{cos, sin};

// Re-export the core so downstream crates need a single dependency
pub use constmath_core;
