//! # constmath-core
//!
//! Elementary functions that give the same answer whether they are evaluated by the
//! constant evaluator (inside a `const` item) or at run time.
//!
//! ## Structure:
//!
//! Every function follows the same pipeline:
//!
//! - **Guard:** classifies degenerate inputs (NaN, out of domain, infinities, values
//!   indistinguishable from a fixed point) and answers them directly.
//! - **Reducer:** rescales the argument into a small interval with an exact (or nearly
//!   exact) identity and records how to undo the rescaling.
//! - **Kernel:** an iterative method (Newton–Raphson, a series, a continued fraction)
//!   that only ever sees the reduced argument.
//! - **Composer:** wires the stages together.
//!
//! Each stage exposes a single-step `const fn`; the compile-time path ([`ct`]) drives it
//! by recursion and the run-time path ([`rt`]) drives it with a loop, so both paths round
//! identically.
//!
//! ## Key Submodules:
//!
//! - [`sqrt`]: the square-root engine (guard, reducer, Newton–Raphson kernel).
//! - [`ln`], [`exp`], [`tan`]: primitives built with the same shape.
//! - [`ct`] / [`rt`]: per-precision entry points for both evaluation contexts.
//! - [`limits`] / [`classify`]: numeric limits and classification predicates.
//! - [`checked`]: opt-in variants that report domain errors as [`DomainError`].
#![cfg_attr(feature = "f128", feature(f128))]

/// Instantiates a per-precision macro for every supported float type.
///
/// The callee receives the module name used for that precision and the primitive type:
/// `single`/`f32`, `double`/`f64` and, with the `f128` feature, `quad`/`f128`.
#[macro_export]
macro_rules! for_each_precision {
    ($mac:ident) => {
        $mac!(single, f32);
        $mac!(double, f64);
        #[cfg(feature = "f128")]
        $mac!(quad, f128);
    };
}

pub mod config;
pub mod limits;
pub mod classify;

pub mod sqrt;
pub mod ln;
pub mod exp;
pub mod tan;

pub mod ct;
pub mod rt;

pub mod real;
pub mod checked;
pub mod error;

pub use error::DomainError;
pub use real::Real;
pub use sqrt::sqrt;
pub use ln::ln;
pub use exp::exp;
pub use tan::tan;
// Re-export traits required by public bounds
pub use num_traits;
