use thiserror::Error;

/// Everything that can go wrong while building a stencil or its operators.
#[derive(Debug, Error)]
pub enum StencilError {
    /// A stencil needs at least one offset.
    #[error("stencil must contain at least one offset")]
    EmptyStencil,
    /// Offsets are whole numbers of steps.
    #[error("offset {index} is not an integer: {value}")]
    NonIntegerOffset { index: usize, value: f64 },
    /// Offset does not fit in an `i32`.
    #[error("offset {index} is out of range: {value}")]
    OffsetOutOfRange { index: usize, value: f64 },
    /// Repeated offsets make the weight system singular.
    #[error("offset {0} appears more than once")]
    DuplicateOffset(i32),
    /// Text that does not describe a flat list of numbers.
    #[error("invalid stencil: {0}")]
    Parse(String),
    /// The order must be strictly less than the number of offsets.
    #[error(
        "stencil length must be greater than order: order {order}, length {length}"
    )]
    InsufficientStencilLength { order: usize, length: usize },
    #[error("factorial of a negative number is invalid: {0}")]
    NegativeFactorial(i64),
    /// LU decomposition found a zero pivot.
    #[error("weight system of size {length} is singular")]
    SingularSystem { length: usize },
    #[error("sample lengths differ: x has {x}, y has {y}")]
    SampleLengthMismatch { x: usize, y: usize },
    /// The step is inferred from the first two samples.
    #[error("at least two samples are required, got {0}")]
    TooFewSamples(usize),
    #[error("column `{column}` has {found} rows, expected {expected}")]
    ColumnLengthMismatch {
        column: String,
        expected: usize,
        found: usize,
    },
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T, E = StencilError> = std::result::Result<T, E>;
