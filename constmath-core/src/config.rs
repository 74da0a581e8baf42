//! Compile-time configuration of the iterative kernels.
//!
//! These caps bound the work done per call and, on the compile-time path, the recursion
//! depth the constant evaluator has to walk. Reaching a cap is not an error: the kernel
//! returns its last estimate.

/// Maximum number of Newton–Raphson steps taken by the square-root kernel.
pub const SQRT_MAX_ITER: u32 = 100;

/// Maximum number of series terms summed by the logarithm kernel.
pub const LOG_MAX_ITER: u32 = 100;

/// Maximum number of Taylor terms summed by the exponential kernel.
pub const EXP_MAX_ITER: u32 = 100;

/// Depth of the continued fraction used by the tangent kernel.
///
/// The fraction is evaluated bottom-up, so every call performs exactly this many levels.
pub const TAN_CF_DEPTH: u32 = 25;
