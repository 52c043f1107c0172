use std::cell::Cell;

use approx::assert_relative_eq;
use numlab::interpolation::errors::{ErrorKind, InterpolationError};
use numlab::interpolation::lagrange::{LagrangeInterpolator, LagrangeWeights};
use numlab::interpolation::{CoefficientEngine, Interpolator, Point};

type TestResult = Result<(), InterpolationError>;

fn cubic() -> Result<LagrangeInterpolator, InterpolationError> {
    LagrangeInterpolator::from_points([
        Point::new(-1.0, -1.0),
        Point::new(0.0, 3.0),
        Point::new(2.0, 11.0),
        Point::new(3.0, 27.0),
    ])
}

/// Delegates to [`LagrangeWeights`] and counts the calls.
#[derive(Default)]
struct CountingEngine {
    calls: Cell<usize>,
}

impl CoefficientEngine for CountingEngine {
    fn coefficients(&self, points: &[Point]) -> Result<Vec<f64>, InterpolationError> {
        self.calls.set(self.calls.get() + 1);
        LagrangeWeights.coefficients(points)
    }
}

#[test]
fn cubic_weights() -> TestResult {
    let mut interp = cubic()?;
    let c = interp.coefficients()?;
    let expected = [0.08333333333333333, 0.5, -1.8333333333333333, 2.25];

    assert_eq!(c.len(), expected.len());
    for (ci, ei) in c.iter().zip(expected) {
        assert_relative_eq!(*ci, ei, max_relative = 1e-12);
    }
    Ok(())
}

#[test]
fn cubic_at_one() -> TestResult {
    let mut interp = cubic()?;
    assert_relative_eq!(interp.eval(1.0)?, 5.0, epsilon = 1e-12);
    Ok(())
}

#[test]
fn exact_hits() -> TestResult {
    let mut interp = cubic()?;
    for p in interp.points().to_vec() {
        assert_relative_eq!(interp.eval(p.x())?, p.y(), epsilon = 1e-12);
    }
    Ok(())
}

#[test]
fn empty_evaluates_to_zero() -> TestResult {
    let mut interp = LagrangeInterpolator::new();
    assert!(interp.coefficients()?.is_empty());
    assert_eq!(interp.eval(42.0)?, 0.0);
    assert_eq!(interp.render_short()?, "");
    assert_eq!(interp.render_full()?, "");
    Ok(())
}

#[test]
fn duplicate_x_rejected_and_set_unchanged() -> TestResult {
    let mut interp = cubic()?;
    let before = interp.points().to_vec();

    let err = interp.add(Point::new(2.0, 7.0)).unwrap_err();
    assert_eq!(err, InterpolationError::DuplicateX { x: 2.0 });
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    assert_eq!(interp.points(), &before[..]);
    Ok(())
}

#[test]
fn exact_duplicate_is_noop() -> TestResult {
    let mut interp = cubic()?;
    interp.coefficients()?;

    assert!(!interp.add(Point::new(0.0, 3.0))?);
    assert_eq!(interp.len(), 4);
    assert!(!interp.is_stale());
    Ok(())
}

#[test]
fn non_finite_point_rejected() {
    let mut interp = LagrangeInterpolator::new();
    let err = interp.add(Point::new(f64::NAN, 1.0)).unwrap_err();
    assert!(matches!(err, InterpolationError::NonFinitePoint { y, .. } if y == 1.0));
    assert!(interp.is_empty());
}

#[test]
fn remove_absent_is_noop() -> TestResult {
    let mut interp = cubic()?;
    let before = interp.coefficients()?;

    assert!(!interp.remove(&Point::new(0.0, 4.0)));
    assert!(!interp.is_stale());
    assert_eq!(interp.len(), 4);
    assert_eq!(interp.coefficients()?, before);
    Ok(())
}

#[test]
fn mutation_invalidates_cache() -> TestResult {
    let mut interp = cubic()?;
    assert_relative_eq!(interp.eval(1.0)?, 5.0, epsilon = 1e-12);

    // without (3, 27) the interpolant is 4x + 3
    assert!(interp.remove(&Point::new(3.0, 27.0)));
    assert!(interp.is_stale());
    assert_relative_eq!(interp.eval(1.0)?, 7.0, epsilon = 1e-12);

    interp.add(Point::new(1.0, 0.0))?;
    assert_relative_eq!(interp.eval(1.0)?, 0.0, epsilon = 1e-12);
    Ok(())
}

#[test]
fn clear_then_single_point_is_constant() -> TestResult {
    let mut interp = cubic()?;
    interp.eval(0.5)?;

    interp.clear();
    assert!(interp.is_empty());
    interp.add(Point::new(2.0, 5.0))?;

    assert_eq!(interp.eval(-100.0)?, 5.0);
    assert_eq!(interp.eval(2.0)?, 5.0);
    assert_eq!(interp.eval(1e6)?, 5.0);
    Ok(())
}

#[test]
fn coefficients_are_cached_between_reads() -> TestResult {
    let mut interp = LagrangeInterpolator::with_engine(CountingEngine::default());
    interp.add(Point::new(0.0, 1.0))?;
    interp.add(Point::new(1.0, 3.0))?;
    assert_eq!(interp.engine().calls.get(), 0);

    let first  = interp.coefficients()?;
    let second = interp.coefficients()?;
    interp.eval(0.25)?;
    interp.render_short()?;
    interp.render_full()?;

    assert_eq!(first, second);
    assert_eq!(interp.engine().calls.get(), 1);

    interp.add(Point::new(2.0, 9.0))?;
    interp.eval(0.25)?;
    assert_eq!(interp.engine().calls.get(), 2);
    Ok(())
}

#[test]
fn returned_coefficients_are_a_copy() -> TestResult {
    let mut interp = cubic()?;
    let mut c = interp.coefficients()?;
    c[0] = 1e9;
    c.clear();

    assert_eq!(interp.coefficients()?.len(), 4);
    assert_relative_eq!(interp.eval(1.0)?, 5.0, epsilon = 1e-12);
    Ok(())
}

#[test]
fn short_form() -> TestResult {
    let mut interp = cubic()?;
    assert_eq!(
        interp.render_short()?,
        "0.0833 * (x - 0)(x - 2)(x - 3) \
         + 0.5000 * (x + 1)(x - 2)(x - 3) \
         - 1.8333 * (x + 1)(x - 0)(x - 3) \
         + 2.2500 * (x + 1)(x - 0)(x - 2)"
    );
    assert_eq!(interp.render()?, interp.render_short()?);
    Ok(())
}

#[test]
fn short_form_skips_zero_terms_and_keeps_leading_minus() -> TestResult {
    let mut interp = LagrangeInterpolator::from_points([
        Point::new(0.0, 0.0),
        Point::new(1.0, -2.0),
        Point::new(2.0, 0.0),
    ])?;

    // only the middle weight, -2 / ((1 - 0)(1 - 2)) = 2, survives
    assert_eq!(interp.render_short()?, "2.0000 * (x - 0)(x - 2)");

    interp.clear();
    interp.add(Point::new(0.5, -1.0))?;
    assert_eq!(interp.render_short()?, "-1.0000 * ");
    Ok(())
}

#[test]
fn full_form() -> TestResult {
    let mut interp = LagrangeInterpolator::from_points([
        Point::new(-1.0, -1.0),
        Point::new(0.0, 3.0),
        Point::new(2.5, 11.0),
    ])?;

    let expected = [
        "-1.0000 * (A0 / B0) + 3.0000 * (A1 / B1) + 11.0000 * (A2 / B2)",
        "A0 = (x - 0)(x - 2.5)",
        "B0 = (-1 - 0)(-1 - 2.5)",
        "A1 = (x + 1)(x - 2.5)",
        "B1 = (0 + 1)(0 - 2.5)",
        "A2 = (x + 1)(x - 0)",
        "B2 = (2.5 + 1)(2.5 - 0)",
    ]
    .join("\n");

    assert_eq!(interp.render_full()?, expected);
    Ok(())
}

#[test]
fn eval_many_matches_eval() -> TestResult {
    let mut interp = cubic()?;
    let xs = [-2.0, 0.5, 4.0];
    let ys = interp.eval_many(&xs)?;
    for (x, y) in xs.iter().zip(ys) {
        assert_eq!(interp.eval(*x)?, y);
    }
    assert_eq!(interp.algorithm_name(), "lagrange");
    Ok(())
}
