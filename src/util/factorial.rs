use crate::error::*;
use crate::util::NumTrait;

/// Iterative `n!`, for any numeric type.
/// Negative arguments are rejected rather than mapped through a gamma function.
pub fn factorial<NumType: NumTrait>(n: i64) -> Result<NumType> {
    if n < 0 {
        return Err(StencilError::NegativeFactorial(n));
    }
    let mut accumulator = NumType::one();
    let mut factor = NumType::one();
    for _ in 0..n {
        accumulator = accumulator * factor;
        factor = factor + NumType::one();
    }
    Ok(accumulator)
}
