use approx::assert_relative_eq;
use numlab::ode::{rk4, rk4_full, OdeError};

type TestResult = Result<(), OdeError>;

/// y' = y sin^3(t), y(0) = 1, h = 0.5 on [0, 3]
fn cubic_sine(t: f64, y: f64) -> f64 {
    y * t.sin().powi(3)
}

const EXPECTED: [f64; 7] = [
    1.0,
    1.0143100585964484,
    1.195522844012162,
    1.8141324164206203,
    2.881306926997134,
    3.6536819063557124,
    3.789845254718446,
];

#[test]
fn every_prefix_matches_reference() -> TestResult {
    for (n, &expected) in EXPECTED.iter().enumerate() {
        let y = rk4(cubic_sine, 0.0, 1.0, 0.5, n)?;
        assert_relative_eq!(y, expected, max_relative = 1e-12);
    }
    Ok(())
}

#[test]
fn trace_rows_follow_integrator() -> TestResult {
    let trace = rk4_full(cubic_sine, 0.0, 1.0, 0.5, 6)?;
    let steps = trace.steps();

    assert_eq!(steps.len(), 7);
    for (i, step) in steps.iter().enumerate() {
        assert_relative_eq!(step.t, 0.5 * i as f64, epsilon = 1e-15);
        assert_relative_eq!(step.y, EXPECTED[i], max_relative = 1e-12);
    }
    assert_relative_eq!(trace.y(), rk4(cubic_sine, 0.0, 1.0, 0.5, 6)?, max_relative = 1e-15);
    Ok(())
}

#[test]
fn last_row_has_no_stages() -> TestResult {
    let trace = rk4_full(cubic_sine, 0.0, 1.0, 0.5, 6)?;
    let (last, rest) = trace.steps().split_last().unwrap();

    assert!(last.stages.is_none());
    assert!(rest.iter().all(|s| s.stages.is_some()));
    Ok(())
}

#[test]
fn first_row_stages() -> TestResult {
    let trace = rk4_full(cubic_sine, 0.0, 1.0, 0.5, 6)?;
    let k = trace.steps()[0].stages.unwrap();

    assert_eq!(k.k1, 0.0);
    assert_relative_eq!(k.k2, 0.007571639717529328, max_relative = 1e-12);
    assert_relative_eq!(k.k3, 0.007600304581535361, max_relative = 1e-12);
    assert_relative_eq!(k.k4, 0.05551646298056062, max_relative = 1e-12);
    Ok(())
}

#[test]
fn table_layout() -> TestResult {
    let table = rk4_full(cubic_sine, 0.0, 1.0, 0.5, 6)?.table();
    let lines: Vec<&str> = table.lines().collect();

    assert_eq!(lines.len(), 9);
    assert_eq!(lines[0], "i    | t        | y          | k1         | k2         | k3         | k4        ");
    assert_eq!(lines[1], "-".repeat(75));
    assert_eq!(lines[2], "0    | 0.000000 | 1.000000   | 0.000000   | 0.007572   | 0.007600   | 0.055516  ");
    assert_eq!(lines[8], "6    | 3.000000 | 3.789845   | None       | None       | None       | None      ");
    Ok(())
}

#[test]
fn exponential_growth() -> TestResult {
    let y = rk4(|_t, y| y, 0.0, 1.0, 0.01, 100)?;
    assert_relative_eq!(y, std::f64::consts::E, max_relative = 1e-9);
    Ok(())
}

#[test]
fn non_finite_inputs() {
    let err = rk4(cubic_sine, 0.0, f64::NAN, 0.5, 3).unwrap_err();
    assert!(matches!(err, OdeError::NonFiniteInput { t0, h, .. } if t0 == 0.0 && h == 0.5));

    let err = rk4_full(cubic_sine, 0.0, 1.0, f64::INFINITY, 3).unwrap_err();
    assert!(matches!(err, OdeError::NonFiniteInput { .. }));
}

#[test]
fn non_finite_evaluation() {
    let err = rk4(|t, _y| 1.0 / t, 0.0, 1.0, 0.1, 3).unwrap_err();
    assert!(matches!(err, OdeError::NonFiniteEvaluation { t, y, f } if t == 0.0 && y == 1.0 && f.is_infinite()));
}
