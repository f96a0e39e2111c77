pub use num_traits::{Num, One, Zero};

/// Scalar types our generic helpers work with.
pub trait NumTrait: Num + Copy + Send + Sync {}

impl<T: Num + Copy + Send + Sync> NumTrait for T {}

pub mod diagonal;
mod factorial;
pub use factorial::*;

/// Real valued weight vector, one entry per stencil offset.
pub type Weights = nalgebra::DVector<f64>;

/// Dense square operator over a sampled sequence.
pub type OperatorMatrix = nalgebra::DMatrix<f64>;

/// `samples` evenly spaced points from `start` to `end` inclusive.
pub fn linspace(start: f64, end: f64, samples: usize) -> Vec<f64> {
    if samples < 2 {
        return vec![start; samples];
    }
    let last = (samples - 1) as f64;
    (0..samples)
        .map(|i| start + (end - start) * (i as f64 / last))
        .collect()
}
