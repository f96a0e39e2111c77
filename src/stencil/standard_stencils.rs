//! Commonly used stencil shapes.
//! These are fixed, distinct offsets, so they never fail validation.

use crate::stencil::Stencil;

fn from_range(offsets: impl Iterator<Item = i32>) -> Stencil {
    Stencil::from_distinct(offsets.collect())
}

/// `-half_width..=half_width`
pub fn central(half_width: u16) -> Stencil {
    let k = half_width as i32;
    from_range(-k..=k)
}

/// `0..points`, at least one point.
pub fn forward(points: u16) -> Stencil {
    from_range(0..points.max(1) as i32)
}

/// `-(points - 1)..=0`, at least one point.
pub fn backward(points: u16) -> Stencil {
    from_range(-(points.max(1) as i32 - 1)..=0)
}

/// `[0, 1]`, the trapezoidal rule at order 1.
pub fn trapezoid() -> Stencil {
    forward(2)
}

/// `[0, 1, 2]`
pub fn simpson() -> Stencil {
    forward(3)
}

/// `[-2, -1, 0, 1, 2]`
pub fn five_point() -> Stencil {
    central(2)
}
