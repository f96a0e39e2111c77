use crate::error::*;
use crate::stencil::Stencil;
use nalgebra::DVector;

/// Step of a uniform grid, inferred from the first two samples.
/// The rest of the grid is assumed to follow and is not checked.
pub fn sample_step(x: &[f64], y: &[f64]) -> Result<f64> {
    if x.len() != y.len() {
        return Err(StencilError::SampleLengthMismatch {
            x: x.len(),
            y: y.len(),
        });
    }
    if x.len() < 2 {
        return Err(StencilError::TooFewSamples(x.len()));
    }
    Ok(x[1] - x[0])
}

/// Turn per sample running integrals into an antiderivative anchored at
/// `initial`: the first value is `initial`, the trailing running integral
/// is dropped.
pub(crate) fn anchor_cumulative(
    cumulative: impl Iterator<Item = f64>,
    size: usize,
    initial: f64,
) -> DVector<f64> {
    DVector::from_iterator(
        size,
        std::iter::once(0.0)
            .chain(cumulative.take(size.saturating_sub(1)))
            .map(|v| v + initial),
    )
}

impl Stencil {
    /// Derivative of `order` of the samples `y` taken at the uniform
    /// points `x`. Values at the edges, where the stencil does not fit,
    /// are zero and should not be trusted.
    pub fn derive(
        &self,
        x: &[f64],
        y: &[f64],
        order: usize,
    ) -> Result<DVector<f64>> {
        let step = sample_step(x, y)?;
        let matrix = self.difference_matrix(order, y.len(), step, false, true)?;
        Ok(matrix * DVector::from_column_slice(y))
    }

    /// Running integral of the samples `y` taken at the uniform points `x`,
    /// using a Taylor expansion of `order`.
    /// The result has one value per sample and starts at `initial`.
    pub fn integrate(
        &self,
        x: &[f64],
        y: &[f64],
        order: usize,
        initial: f64,
    ) -> Result<DVector<f64>> {
        let step = sample_step(x, y)?;
        let matrix = self.integral_matrix(order, y.len(), step, true)?;
        let cumulative = matrix * DVector::from_column_slice(y);
        Ok(anchor_cumulative(
            cumulative.iter().copied(),
            y.len(),
            initial,
        ))
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;
    use crate::util::linspace;
    use float_cmp::assert_approx_eq;

    #[test]
    fn sample_errors() {
        let s = Stencil::new(&[-1, 0, 1]).unwrap();
        assert!(matches!(
            s.derive(&[0.0, 1.0, 2.0], &[0.0, 1.0], 1),
            Err(StencilError::SampleLengthMismatch { x: 3, y: 2 })
        ));
        assert!(matches!(
            s.integrate(&[0.0], &[1.0], 1, 0.0),
            Err(StencilError::TooFewSamples(1))
        ));
        assert!(matches!(
            s.derive(&[0.0, 1.0], &[0.0, 1.0], 3),
            Err(StencilError::InsufficientStencilLength { order: 3, length: 3 })
        ));
    }

    #[test]
    fn derive_parabola() {
        let s = Stencil::new(&[-1, 0, 1]).unwrap();
        let x = linspace(-2.0, 2.0, 41);
        let y: Vec<f64> = x.iter().map(|v| v * v).collect();

        let d1 = s.derive(&x, &y, 1).unwrap();
        let d2 = s.derive(&x, &y, 2).unwrap();
        assert_eq!(d1.len(), x.len());
        assert_eq!(d1[0], 0.0);
        assert_eq!(d1[40], 0.0);
        assert_eq!(d2[0], 0.0);
        assert_eq!(d2[40], 0.0);
        for i in 1..40 {
            assert_approx_eq!(f64, d1[i], 2.0 * x[i], epsilon = 1e-9);
            assert_approx_eq!(f64, d2[i], 2.0, epsilon = 1e-7);
        }
    }

    #[test]
    fn integrate_constant() {
        let s = Stencil::new(&[0, 1]).unwrap();
        let x = linspace(0.0, 4.0, 5);
        let y = vec![3.0; 5];
        let r = s.integrate(&x, &y, 1, 2.0).unwrap();
        assert_eq!(r.len(), 5);
        for i in 0..5 {
            assert_approx_eq!(f64, r[i], 2.0 + 3.0 * x[i], epsilon = 1e-12);
        }
    }

    #[test]
    fn anchor_test() {
        let r = anchor_cumulative([1.0, 3.0, 6.0].into_iter(), 3, 10.0);
        assert_eq!(r.as_slice(), &[10.0, 11.0, 13.0]);
    }
}
