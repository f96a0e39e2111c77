use crate::error::*;
use crate::stencil::Stencil;
use crate::util::*;

impl Stencil {
    /// Generalized Vandermonde matrix, `A[i][j] = offsets[j]^i`.
    fn vandermonde(&self) -> OperatorMatrix {
        let offsets = self.offsets();
        OperatorMatrix::from_fn(self.len(), self.len(), |i, j| {
            (offsets[j] as f64).powi(i as i32)
        })
    }

    fn check_order(&self, order: usize) -> Result<()> {
        if order >= self.len() {
            return Err(StencilError::InsufficientStencilLength {
                order,
                length: self.len(),
            });
        }
        Ok(())
    }

    /// Weights `w_i` for the derivative of order `n` such that
    ///
    /// ```text
    /// d^n f      1
    /// -----  = ---- (w_1 f(x + s_1 h) + w_2 f(x + s_2 h) + ...)
    /// d x^n     h^n
    /// ```
    ///
    /// where the `s_i` are the offsets and `h` the step.
    /// With `normalize_by_factorial` the weights are divided by `n!`,
    /// which is what a Taylor series term needs.
    pub fn difference_weights(
        &self,
        order: usize,
        normalize_by_factorial: bool,
    ) -> Result<Weights> {
        self.check_order(order)?;
        profiling::scope!("stencil::difference_weights");

        let mut b = Weights::zeros(self.len());
        b[order] = if normalize_by_factorial {
            1.0
        } else {
            factorial::<f64>(order as i64)?
        };
        self.vandermonde()
            .lu()
            .solve(&b)
            .ok_or(StencilError::SingularSystem { length: self.len() })
    }

    /// Weights `w_i` for the integral over a single step,
    ///
    /// ```text
    /// x+h
    ///  ∫ f(t) dt = (w_1 f(x + s_1 h) + w_2 f(x + s_2 h) + ...) h
    /// x
    /// ```
    ///
    /// from a Taylor expansion of `f` around `x` truncated at `order`.
    pub fn integral_weights(&self, order: usize) -> Result<Weights> {
        self.check_order(order)?;
        let mut weights = Weights::zeros(self.len());
        for i in 0..=order {
            weights += self.difference_weights(i, true)? / (i as f64 + 1.0);
        }
        Ok(weights)
    }
}
