use crate::error::*;
use crate::operator::EdgePolicy;
use crate::stencil::Stencil;
use crate::util::diagonal::*;
use crate::util::*;

impl Stencil {
    /// Matrix of size `size x size` that computes the derivative of
    /// `order` for a sequence sampled with step `step`.
    /// Each weight is placed on the diagonal shifted by its offset.
    /// With `fix_edges`, rows where the stencil does not fit are zeroed,
    /// so derivatives at the edges of the sequence are not meaningful.
    pub fn difference_matrix(
        &self,
        order: usize,
        size: usize,
        step: f64,
        normalize_by_factorial: bool,
        fix_edges: bool,
    ) -> Result<OperatorMatrix> {
        let weights = self.difference_weights(order, normalize_by_factorial)?;
        profiling::scope!("stencil::difference_matrix");
        let mut matrix = banded_matrix(self.offsets(), &weights, size);
        EdgePolicy::difference(fix_edges).fix_rows(&mut matrix);
        Ok(matrix / step.powi(order as i32))
    }

    /// Matrix of size `size x size` whose row `i` is the integral from the
    /// first sample up to sample `i + 1`, using a Taylor expansion of
    /// `order`. The last row reaches past the sequence and is only as good
    /// as its renormalized edge rows.
    /// With `fix_edges`, every per step row is divided by its sum before
    /// accumulating, which keeps partial rows at the edge normalized.
    pub fn integral_matrix(
        &self,
        order: usize,
        size: usize,
        step: f64,
        fix_edges: bool,
    ) -> Result<OperatorMatrix> {
        let weights = self.integral_weights(order)?;
        profiling::scope!("stencil::integral_matrix");
        let mut matrix = banded_matrix(self.offsets(), &weights, size);
        EdgePolicy::integral(fix_edges).fix_rows(&mut matrix);
        accumulate_rows(&mut matrix);
        Ok(matrix * step)
    }
}
