// constmath-core/src/exp_test.rs

use super::{double, exp, single};
use crate::classify::Guard;
use approx::assert_relative_eq;

#[test]
fn test_exp_guard() {
    assert!(matches!(double::check(f64::NAN), Guard::Exit(v) if v.is_nan()));
    assert_eq!(double::check(f64::INFINITY), Guard::Exit(f64::INFINITY));
    assert_eq!(double::check(f64::NEG_INFINITY), Guard::Exit(0.0));
    assert_eq!(double::check(710.0), Guard::Exit(f64::INFINITY));
    assert_eq!(double::check(-746.0), Guard::Exit(0.0));
    assert_eq!(double::check(0.0), Guard::Exit(1.0));
    assert_eq!(double::check(0.5), Guard::Pass(0.5));
}

#[test]
fn test_exp_thresholds() {
    assert_relative_eq!(double::OVERFLOW_ARG, f64::MAX.ln(), max_relative = 1e-3);
    assert_relative_eq!(single::OVERFLOW_ARG, f32::MAX.ln(), max_relative = 1e-3);
    assert!(double::UNDERFLOW_ARG < -745.0);
}

#[test]
fn test_exp_reduce() {
    // 70 = 64 + 4 + 1 + 1
    let (x, _) = double::reduce(70.0, 1.0);
    assert_eq!(x, 1.0);
    let (x, multiplier) = double::reduce(-2.5, 1.0);
    assert_relative_eq!(x, -0.5, max_relative = 1e-14);
    assert_relative_eq!(multiplier, (-2.0f64).exp(), max_relative = 1e-14);
    assert_eq!(double::step(0.75, 1.0), None);
}

#[test]
fn test_exp_known_values() {
    assert_relative_eq!(exp(1.0f64), std::f64::consts::E, max_relative = 1e-14);
    assert_relative_eq!(exp(10.0f64), 22026.465794806718, max_relative = 1e-14);
    assert_relative_eq!(exp(-1.0f64), 1.0 / std::f64::consts::E, max_relative = 1e-14);
    assert_eq!(exp(0.0f64), 1.0);
    assert_eq!(exp(f64::NEG_INFINITY), 0.0);
    assert_eq!(exp(1000.0f64), f64::INFINITY);
}

#[test]
fn test_exp_against_std() {
    for &x in [-700.0, -30.5, -1.0, -0.001, 0.3, 2.5, 17.25, 100.0, 700.0].iter() {
        assert_relative_eq!(exp(x), f64::exp(x), max_relative = 1e-13);
    }
    for &x in [-80.0f32, -2.0, 0.3, 2.5, 17.25, 80.0].iter() {
        assert_relative_eq!(exp(x), f32::exp(x), max_relative = 1e-5);
    }
}

#[test]
fn test_exp_paths_agree() {
    for &x in [-700.0, -30.5, -0.001, 0.3, 17.25, 700.0].iter() {
        assert_eq!(double::eval(x).to_bits(), double::eval_iter(x).to_bits());
        let xf = (x as f32).clamp(-80.0, 80.0);
        assert_eq!(single::eval(xf).to_bits(), single::eval_iter(xf).to_bits());
    }
}

#[test]
fn test_exp_ln_round_trips() {
    for &x in [-50.0, -3.25, -0.5, 0.125, 1.0, 9.0, 42.0].iter() {
        assert_relative_eq!(crate::ln(exp(x)), x, max_relative = 1e-13, epsilon = 1e-14);
    }
    for &x in [1e-100, 0.003, 0.7, 2.0, 123.5, 1e100].iter() {
        assert_relative_eq!(exp(crate::ln(x)), x, max_relative = 1e-12);
    }
}

#[test]
fn test_sinh_series_small_arguments() {
    for &x in [1e-7, -1e-6, 1e-5, 1e-3, 0.1, -0.35, 0.5].iter() {
        assert_relative_eq!(double::sinh_series(x), f64::sinh(x), max_relative = 8.0 * f64::EPSILON);
        assert_eq!(double::sinh_series(x).to_bits(), double::sinh_series_iter(x).to_bits());
    }
    assert_relative_eq!(single::sinh_series(1e-3f32), 1e-3f32.sinh(), max_relative = 4.0 * f32::EPSILON);
    assert_eq!(double::sinh_series(0.0), 0.0);
}
