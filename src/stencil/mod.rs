#![allow(clippy::module_inception)]
mod parse;
mod stencil;
mod weights;

pub mod standard_stencils;

pub use stencil::*;
