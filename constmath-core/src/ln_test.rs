// constmath-core/src/ln_test.rs

use super::{double, ln, single};
use crate::classify::Guard;
use approx::assert_relative_eq;

#[test]
fn test_ln_guard() {
    assert!(matches!(double::check(f64::NAN), Guard::Exit(v) if v.is_nan()));
    assert!(matches!(double::check(-2.0), Guard::Exit(v) if v.is_nan()));
    assert_eq!(double::check(0.0), Guard::Exit(f64::NEG_INFINITY));
    assert_eq!(double::check(f64::MIN_POSITIVE / 8.0), Guard::Exit(f64::NEG_INFINITY));
    assert_eq!(double::check(f64::INFINITY), Guard::Exit(f64::INFINITY));
    assert_eq!(double::check(1.0), Guard::Exit(0.0));
    assert_eq!(double::check(3.0), Guard::Pass(3.0));
}

#[test]
fn test_ln_reduce_counts_decades_and_octaves() {
    // 150 -> 1.5 through one 100-rung
    let (x, decades, octaves) = double::reduce(150.0, 0, 0);
    assert_relative_eq!(x, 1.5, max_relative = 1e-14);
    assert_eq!((decades, octaves), (2, 0));

    // 8 -> 4 -> 2 through two halvings
    assert_eq!(double::reduce(8.0, 0, 0), (2.0, 0, 2));

    // 0.125 -> 0.25 -> 0.5
    assert_eq!(double::reduce(0.125, 0, 0), (0.5, 0, -2));
}

#[test]
fn test_ln_reduce_drivers_agree() {
    for &x in [1e-250, 0.003, 0.7, 1.9, 77.0, 6.02e23, 1e300].iter() {
        let (a, b, c) = double::reduce(x, 0, 0);
        let (d, e, f) = double::reduce_iter(x);
        assert_eq!((a.to_bits(), b, c), (d.to_bits(), e, f));
        assert!((0.5..=2.0).contains(&a), "{:e} reduced to {:e}", x, a);
    }
}

#[test]
fn test_ln_known_values() {
    assert_relative_eq!(ln(std::f64::consts::E), 1.0, max_relative = 1e-14);
    assert_relative_eq!(ln(2.0f64), std::f64::consts::LN_2, max_relative = 1e-14);
    assert_relative_eq!(ln(10.0f64), std::f64::consts::LN_10, max_relative = 1e-14);
    assert_relative_eq!(ln(0.5f64), -std::f64::consts::LN_2, max_relative = 1e-14);
    assert_eq!(ln(1.0f64), 0.0);
    assert_eq!(ln(0.0f64), f64::NEG_INFINITY);
    assert!(ln(-1.0f64).is_nan());
}

#[test]
fn test_ln_against_std() {
    for &x in [1e-300, 1e-20, 0.001, 0.3, 0.99, 1.01, 3.7, 1234.5, 1e20, 1e300].iter() {
        assert_relative_eq!(ln(x), f64::ln(x), max_relative = 1e-14);
    }
    for &x in [1e-30f32, 0.001, 0.3, 3.7, 1234.5, 1e30].iter() {
        assert_relative_eq!(ln(x), f32::ln(x), max_relative = 1e-6);
    }
}

#[test]
fn test_ln_paths_agree() {
    for &x in [1e-300, 0.001, 0.3, 1.5, 3.7, 1234.5, 1e300].iter() {
        assert_eq!(double::eval(x).to_bits(), double::eval_iter(x).to_bits());
        let xf = x as f32;
        assert_eq!(single::eval(xf).to_bits(), single::eval_iter(xf).to_bits());
    }
}

#[test]
fn test_atanh_series_small_arguments() {
    for &z in [1e-7, -1e-6, 1e-5, 1e-3, 0.2, -0.45, 0.5].iter() {
        assert_relative_eq!(double::atanh_series(z), f64::atanh(z), max_relative = 8.0 * f64::EPSILON);
        assert_eq!(double::atanh_series(z).to_bits(), double::atanh_series_iter(z).to_bits());
    }
    assert_eq!(double::atanh_series(0.0), 0.0);
}
