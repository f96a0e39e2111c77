use crate::util::*;

/// Row sums within this distance of zero count as zero.
pub const ROW_SUM_TOLERANCE: f64 = 1e-8;

/// What to do with edge rows, the rows of an operator where part of the
/// stencil falls outside the sequence.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum EdgePolicy {
    /// Leave the partial rows as they are.
    #[default]
    Keep,

    /// Zero every row whose coefficients do not sum to zero.
    /// Complete difference rows always sum to zero, so this
    /// suppresses the biased partial estimates.
    ZeroIncomplete,

    /// Divide every row by its own sum, so the weights of partial rows
    /// still sum to one. Rows summing to zero are left alone.
    Renormalize,
}

impl EdgePolicy {
    /// Policy used by difference operators.
    pub fn difference(fix_edges: bool) -> Self {
        if fix_edges {
            EdgePolicy::ZeroIncomplete
        } else {
            EdgePolicy::Keep
        }
    }

    /// Policy used by integral operators.
    pub fn integral(fix_edges: bool) -> Self {
        if fix_edges {
            EdgePolicy::Renormalize
        } else {
            EdgePolicy::Keep
        }
    }

    /// Fix a single row value given the sum of the weights that produced it.
    pub fn fix_value(&self, value: f64, row_sum: f64) -> f64 {
        match self {
            EdgePolicy::Keep => value,
            EdgePolicy::ZeroIncomplete => {
                if row_sum.abs() > ROW_SUM_TOLERANCE {
                    0.0
                } else {
                    value
                }
            }
            EdgePolicy::Renormalize => {
                if row_sum != 0.0 {
                    value / row_sum
                } else {
                    value
                }
            }
        }
    }

    pub fn fix_rows(&self, matrix: &mut OperatorMatrix) {
        if *self == EdgePolicy::Keep {
            return;
        }
        profiling::scope!("edge_policy::fix_rows");
        for i in 0..matrix.nrows() {
            let mut row = matrix.row_mut(i);
            let row_sum = row.sum();
            match self {
                EdgePolicy::Keep => {}
                EdgePolicy::ZeroIncomplete => {
                    if row_sum.abs() > ROW_SUM_TOLERANCE {
                        row.fill(0.0);
                    }
                }
                EdgePolicy::Renormalize => {
                    if row_sum != 0.0 {
                        row /= row_sum;
                    }
                }
            }
        }
    }
}
