use crate::error::*;
use crate::operator::apply::*;
use crate::operator::EdgePolicy;
use crate::stencil::Stencil;
use crate::util::diagonal::banded_matrix;
use crate::util::*;
use nalgebra::DVector;
use rayon::prelude::*;

/// The nonzero diagonals of an operator matrix.
/// Applying it is a direct convolution of the weights with the samples,
/// which gives the same rows as the dense matrices in linear memory.
#[derive(Clone, Debug)]
pub struct BandedOperator {
    offsets: Vec<i32>,
    weights: Weights,
    scale: f64,
    edges: EdgePolicy,
}

impl BandedOperator {
    /// Banded form of [`Stencil::difference_matrix`].
    pub fn difference(
        stencil: &Stencil,
        order: usize,
        step: f64,
        normalize_by_factorial: bool,
        fix_edges: bool,
    ) -> Result<Self> {
        Ok(BandedOperator {
            offsets: stencil.to_offsets(),
            weights: stencil.difference_weights(order, normalize_by_factorial)?,
            scale: 1.0 / step.powi(order as i32),
            edges: EdgePolicy::difference(fix_edges),
        })
    }

    /// Per step contributions of [`Stencil::integral_matrix`], before they
    /// are accumulated into a running sum.
    pub fn integral(
        stencil: &Stencil,
        order: usize,
        step: f64,
        fix_edges: bool,
    ) -> Result<Self> {
        Ok(BandedOperator {
            offsets: stencil.to_offsets(),
            weights: stencil.integral_weights(order)?,
            scale: step,
            edges: EdgePolicy::integral(fix_edges),
        })
    }

    pub fn offsets(&self) -> &[i32] {
        &self.offsets
    }

    pub fn weights(&self) -> &Weights {
        &self.weights
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn edges(&self) -> EdgePolicy {
        self.edges
    }

    fn row(&self, i: usize, y: &[f64]) -> f64 {
        let n = y.len() as i64;
        let mut value = 0.0;
        let mut row_sum = 0.0;
        for (offset, weight) in self.offsets.iter().zip(self.weights.iter()) {
            let j = i as i64 + *offset as i64;
            if j < 0 || j >= n {
                continue;
            }
            value += weight * y[j as usize];
            row_sum += weight;
        }
        self.edges.fix_value(value, row_sum) * self.scale
    }

    /// Apply to every sample of `y`.
    /// `chunk_size` is used to break the work into tasks for multi-threading.
    pub fn apply(&self, y: &[f64], chunk_size: usize) -> Vec<f64> {
        profiling::scope!("banded_operator::apply");
        let chunk_size = chunk_size.max(1);
        let mut result = vec![0.0; y.len()];
        result
            .par_chunks_mut(chunk_size)
            .enumerate()
            .for_each(|(c, output_chunk)| {
                profiling::scope!("banded_operator::apply Thread Callback");
                let start = c * chunk_size;
                for (k, output) in output_chunk.iter_mut().enumerate() {
                    *output = self.row(start + k, y);
                }
            });
        result
    }

    /// The equivalent dense matrix for `size` samples.
    pub fn to_dense(&self, size: usize) -> OperatorMatrix {
        let mut matrix = banded_matrix(&self.offsets, &self.weights, size);
        self.edges.fix_rows(&mut matrix);
        matrix * self.scale
    }
}

impl Stencil {
    /// Same as [`Stencil::derive`] without materializing the matrix.
    pub fn derive_banded(
        &self,
        x: &[f64],
        y: &[f64],
        order: usize,
        chunk_size: usize,
    ) -> Result<DVector<f64>> {
        let step = sample_step(x, y)?;
        let operator = BandedOperator::difference(self, order, step, false, true)?;
        Ok(DVector::from_vec(operator.apply(y, chunk_size)))
    }

    /// Same as [`Stencil::integrate`] without materializing the matrix.
    pub fn integrate_banded(
        &self,
        x: &[f64],
        y: &[f64],
        order: usize,
        initial: f64,
        chunk_size: usize,
    ) -> Result<DVector<f64>> {
        let step = sample_step(x, y)?;
        let operator = BandedOperator::integral(self, order, step, true)?;
        let cumulative = operator.apply(y, chunk_size).into_iter().scan(
            0.0,
            |total, contribution| {
                *total += contribution;
                Some(*total)
            },
        );
        Ok(anchor_cumulative(cumulative, y.len(), initial))
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;
    use float_cmp::assert_approx_eq;

    #[test]
    fn apply_matches_dense() {
        let y: Vec<f64> = (0..23).map(|i| ((i * i) % 7) as f64 - 2.5).collect();
        let yv = DVector::from_column_slice(&y);
        let s = Stencil::new(&[-2, 0, 1, 3]).unwrap();

        for fix_edges in [true, false] {
            for order in 0..4 {
                let banded =
                    BandedOperator::difference(&s, order, 0.3, false, fix_edges)
                        .unwrap();
                let dense = s
                    .difference_matrix(order, y.len(), 0.3, false, fix_edges)
                    .unwrap();
                let as_dense = banded.to_dense(y.len());
                for (a, e) in as_dense.iter().zip(dense.iter()) {
                    assert_approx_eq!(f64, *a, *e, epsilon = 1e-9);
                }
                let e = &dense * &yv;
                for chunk_size in [1, 4, 100] {
                    let r = banded.apply(&y, chunk_size);
                    for i in 0..y.len() {
                        assert_approx_eq!(f64, r[i], e[i], epsilon = 1e-9);
                    }
                }
            }
        }
    }

    #[test]
    fn integral_matches_dense() {
        let x: Vec<f64> = (0..17).map(|i| 0.25 * i as f64).collect();
        let y: Vec<f64> = x.iter().map(|v| v.cos()).collect();
        for s in [
            Stencil::new(&[0, 1]).unwrap(),
            Stencil::new(&[-1, 0, 1]).unwrap(),
            Stencil::new(&[0, 1, 2, 3]).unwrap(),
        ] {
            let order = s.max_order();
            let dense = s.integrate(&x, &y, order, 1.5).unwrap();
            let banded = s.integrate_banded(&x, &y, order, 1.5, 5).unwrap();
            assert_eq!(dense.len(), banded.len());
            for i in 0..x.len() {
                assert_approx_eq!(f64, dense[i], banded[i], epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn zero_sized_input() {
        let s = Stencil::new(&[-1, 0, 1]).unwrap();
        let op = BandedOperator::difference(&s, 1, 1.0, false, true).unwrap();
        assert!(op.apply(&[], 10).is_empty());
        assert!(op.apply(&[1.0], 0).iter().all(|v| v.abs() < 1e-12));
        assert_eq!(op.offsets(), &[-1, 0, 1]);
        assert_eq!(op.edges(), EdgePolicy::ZeroIncomplete);
        assert_approx_eq!(f64, op.scale(), 1.0);
        assert_eq!(op.weights().len(), 3);
    }
}
