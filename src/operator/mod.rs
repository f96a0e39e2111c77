//! Operators that apply stencil weights along a whole sampled sequence.
//!
//! The dense path materializes an `m x m` matrix per call,
//! the banded path stores only the stencil diagonals and evaluates
//! each row by direct convolution. Both honor the same edge policies.

mod apply;
mod banded;
mod edges;
mod matrix;

pub use apply::*;
pub use banded::*;
pub use edges::*;
