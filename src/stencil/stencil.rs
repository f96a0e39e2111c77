use crate::error::*;
use std::fmt;

/// A stencil is a list of integers used as relative indices into
/// an array of regularly spaced evaluations of a function.
/// For example `[0, 1, 2]` refers to `f(x)`, `f(x + h)` and `f(x + 2h)`.
/// A stencil of length `L` supports orders up to `L - 1`.
///
/// Stencils are immutable once built, every constructor validates its input.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Stencil {
    offsets: Vec<i32>,
}

impl Stencil {
    pub fn new(offsets: &[i32]) -> Result<Self> {
        if offsets.is_empty() {
            return Err(StencilError::EmptyStencil);
        }
        let mut sorted = offsets.to_vec();
        sorted.sort_unstable();
        if let Some(pair) = sorted.windows(2).find(|pair| pair[0] == pair[1]) {
            return Err(StencilError::DuplicateOffset(pair[0]));
        }
        Ok(Stencil {
            offsets: offsets.to_vec(),
        })
    }

    /// Build from real numbers that must hold integer values,
    /// e.g. `[-1.0, 0.0, 1.0]`.
    pub fn from_reals(offsets: &[f64]) -> Result<Self> {
        let mut result = Vec::with_capacity(offsets.len());
        for (index, value) in offsets.iter().copied().enumerate() {
            if value.fract() != 0.0 {
                return Err(StencilError::NonIntegerOffset { index, value });
            }
            if value < i32::MIN as f64 || value > i32::MAX as f64 {
                return Err(StencilError::OffsetOutOfRange { index, value });
            }
            result.push(value as i32);
        }
        Stencil::new(&result)
    }

    /// Skips validation, for offsets that are known to be distinct and non-empty.
    pub(crate) fn from_distinct(offsets: Vec<i32>) -> Self {
        debug_assert!(Stencil::new(&offsets).is_ok());
        Stencil { offsets }
    }

    pub fn offsets(&self) -> &[i32] {
        &self.offsets
    }

    /// Detached copy of the offsets.
    pub fn to_offsets(&self) -> Vec<i32> {
        self.offsets.clone()
    }

    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    /// Always false, construction rejects empty stencils.
    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    /// Highest derivative or Taylor order the stencil supports.
    pub fn max_order(&self) -> usize {
        self.len() - 1
    }

    /// How far the stencil reaches to the left and to the right, as
    /// non-negative step counts.
    /// Rows closer than this to either end of a sequence are edge rows.
    pub fn slopes(&self) -> (usize, usize) {
        let mut result = (0, 0);
        for offset in &self.offsets {
            let reach = offset.unsigned_abs() as usize;
            if *offset > 0 {
                result.1 = result.1.max(reach);
            } else {
                result.0 = result.0.max(reach);
            }
        }
        result
    }

    /// Distance between the outermost offsets.
    pub fn span(&self) -> usize {
        let min = self.offsets.iter().min().copied().unwrap_or(0) as i64;
        let max = self.offsets.iter().max().copied().unwrap_or(0) as i64;
        (max - min) as usize
    }

    /// Range of sample positions in a sequence of length `size` where the
    /// whole stencil fits.
    pub fn interior(&self, size: usize) -> std::ops::Range<usize> {
        let (left, right) = self.slopes();
        let end = size.saturating_sub(right);
        left.min(end)..end
    }
}

impl fmt::Display for Stencil {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, offset) in self.offsets.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{offset}")?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn bad_arguments() {
        assert!(matches!(
            Stencil::from_reals(&[1.0, 2.0, 3.5]),
            Err(StencilError::NonIntegerOffset { index: 2, .. })
        ));
        assert!(matches!(
            Stencil::from_reals(&[f64::NAN]),
            Err(StencilError::NonIntegerOffset { index: 0, .. })
        ));
        assert!(matches!(
            Stencil::from_reals(&[0.0, f64::INFINITY]),
            Err(StencilError::NonIntegerOffset { index: 1, .. })
        ));
        assert!(matches!(
            Stencil::from_reals(&[0.0, 1e12]),
            Err(StencilError::OffsetOutOfRange { index: 1, .. })
        ));
        assert!(matches!(Stencil::new(&[]), Err(StencilError::EmptyStencil)));
        assert!(matches!(
            Stencil::new(&[0, 1, 0]),
            Err(StencilError::DuplicateOffset(0))
        ));
    }

    #[test]
    fn from_reals() {
        let s = Stencil::from_reals(&[-1.0, 0.0, 1.0]).unwrap();
        assert_eq!(s.offsets(), &[-1, 0, 1]);
        assert_eq!(s, Stencil::new(&[-1, 0, 1]).unwrap());
    }

    #[test]
    fn offsets_are_detached() {
        let supplied = vec![2, -1, 0];
        let s = Stencil::new(&supplied).unwrap();

        let mut copy = s.to_offsets();
        copy[0] = 100;
        copy.push(7);
        assert_eq!(s.offsets(), &[2, -1, 0]);
        assert_eq!(s.to_offsets(), supplied);
    }

    #[test]
    fn slopes() {
        {
            let s = Stencil::new(&[-1, 0, 1]).unwrap();
            assert_eq!(s.slopes(), (1, 1));
            assert_eq!(s.span(), 2);
            assert_eq!(s.max_order(), 2);
        }

        {
            let s = Stencil::new(&[0, 1, 2, 3]).unwrap();
            assert_eq!(s.slopes(), (0, 3));
            assert_eq!(s.span(), 3);
        }

        {
            let s = Stencil::new(&[-4, -2]).unwrap();
            assert_eq!(s.slopes(), (4, 0));
            assert_eq!(s.span(), 2);
        }

        {
            let s = Stencil::new(&[3]).unwrap();
            assert_eq!(s.slopes(), (0, 3));
            assert_eq!(s.span(), 0);
        }
    }

    #[test]
    fn interior() {
        let s = Stencil::new(&[-2, 0, 1]).unwrap();
        assert_eq!(s.interior(10), 2..9);
        assert_eq!(s.interior(3), 2..2);
        assert!(s.interior(1).is_empty());
    }

    #[test]
    fn display() {
        let s = Stencil::new(&[-1, 0, 1]).unwrap();
        assert_eq!(s.to_string(), "[-1, 0, 1]");
    }
}
