//! Finite difference calculus on arbitrary integer stencils.
//!
//! A [`Stencil`] is a list of relative sample offsets. From it we solve for
//! the weights that approximate a derivative or a one step integral, and
//! assemble operators that apply those weights along a uniformly sampled
//! sequence.

pub mod build_info;
pub mod csv;
pub mod error;
pub mod operator;
pub mod stencil;
pub mod util;

pub use error::*;
pub use operator::{BandedOperator, EdgePolicy};
pub use stencil::Stencil;
