// constmath-func/src/trig_test.rs

use super::{cos, sin};
use crate::{ct, rt};
use approx::{assert_abs_diff_eq, assert_relative_eq};
use std::f64::consts::{FRAC_PI_2, FRAC_PI_6, PI};

const SAMPLES: [f64; 9] = [0.5, -1.0, 2.0, FRAC_PI_6, 3.0, 10.0, -25.5, 1e-3, 1e-200];

#[test]
fn test_sin_scenarios() {
    assert_relative_eq!(sin(0.5f64), 0.479425538604203, max_relative = 1e-14);
    assert_relative_eq!(sin(-1.0f64), -0.8414709848078965, max_relative = 1e-14);
    assert_relative_eq!(sin(FRAC_PI_6), 0.5, max_relative = 1e-14);
    assert_relative_eq!(sin(FRAC_PI_2), 1.0, max_relative = 1e-15);
    assert_relative_eq!(sin(0.5f32), 0.47942554, max_relative = 1e-6);
}

#[test]
fn test_cos_scenarios() {
    assert_relative_eq!(cos(0.5f64), 0.8775825618903728, max_relative = 1e-14);
    assert_relative_eq!(cos(2.0f64), -0.4161468365471424, max_relative = 1e-14);
    assert_relative_eq!(cos(0.5f32), 0.87758255, max_relative = 1e-6);
}

#[test]
fn test_half_angle_pole() {
    // tan(π/2) evaluates to an infinity; the limits take over
    assert_abs_diff_eq!(sin(PI), 0.0, epsilon = 1e-15);
    assert_eq!(cos(PI), -1.0);
}

#[test]
fn test_degenerate_inputs() {
    assert!(sin(f64::NAN).is_nan());
    assert!(sin(f64::INFINITY).is_nan());
    assert!(cos(f64::NEG_INFINITY).is_nan());
    assert!(cos(1e300f64).is_nan());
    assert_eq!(sin(0.0f64), 0.0);
    assert_eq!(cos(0.0f64), 1.0);
    assert_eq!(sin(1e-310f64), 1e-310);
}

#[test]
fn test_symmetry() {
    for &x in SAMPLES.iter() {
        assert_eq!(sin(-x).to_bits(), (-sin(x)).to_bits(), "sin is not odd at {:e}", x);
        assert_eq!(cos(-x).to_bits(), cos(x).to_bits(), "cos is not even at {:e}", x);
    }
}

#[test]
fn test_against_std() {
    for &x in SAMPLES.iter() {
        assert_abs_diff_eq!(sin(x), x.sin(), epsilon = 1e-14);
        assert_abs_diff_eq!(cos(x), x.cos(), epsilon = 1e-14);
    }
}

#[test]
fn test_paths_agree() {
    for &x in SAMPLES.iter() {
        assert_eq!(ct::f64::sin(x).to_bits(), rt::f64::sin(x).to_bits());
        assert_eq!(ct::f64::cos(x).to_bits(), rt::f64::cos(x).to_bits());
        let xf = x as f32;
        assert_eq!(ct::f32::sin(xf).to_bits(), rt::f32::sin(xf).to_bits());
        assert_eq!(ct::f32::cos(xf).to_bits(), rt::f32::cos(xf).to_bits());
    }
}
