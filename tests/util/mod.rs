#![allow(dead_code)]

pub type RealFn = fn(f64) -> f64;

/// A test function with known derivatives and antiderivative.
pub struct ExampleFunction {
    pub name: &'static str,
    pub f: RealFn,
    /// Derivatives by order, only those we check.
    pub df: Vec<(usize, RealFn)>,
    pub antiderivative: RealFn,
}

pub fn example_functions() -> Vec<ExampleFunction> {
    vec![
        ExampleFunction {
            name: "x",
            f: |x| x,
            df: vec![(1, (|_: f64| 1.0) as RealFn)],
            antiderivative: |x| 0.5 * x * x,
        },
        ExampleFunction {
            name: "sin(x)",
            f: f64::sin,
            df: vec![
                (1, f64::cos as RealFn),
                (2, (|x: f64| -x.sin()) as RealFn),
            ],
            antiderivative: |x| -x.cos(),
        },
        ExampleFunction {
            name: "exp(-x)",
            f: |x| (-x).exp(),
            df: vec![
                (1, (|x: f64| -(-x).exp()) as RealFn),
                (2, (|x: f64| (-x).exp()) as RealFn),
            ],
            antiderivative: |x| -(-x).exp(),
        },
    ]
}

/// Elementwise `|a - e| <= atol + rtol * |e|`.
pub fn assert_allclose(actual: &[f64], expected: &[f64], rtol: f64, atol: f64, what: &str) {
    assert_eq!(actual.len(), expected.len(), "{what}: length");
    for (i, (a, e)) in actual.iter().zip(expected).enumerate() {
        assert!(
            (a - e).abs() <= atol + rtol * e.abs(),
            "{what}: index {i}, got {a}, expected {e}"
        );
    }
}
