use rust_i18n::t;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    InvalidDimensions { width: u32, height: u32 },
    BufferSizeMismatch { expected: usize, actual: usize },
    OutOfBounds { x: u32, y: u32 },
    LayerNotFound(usize),
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CoreError::InvalidDimensions { width, height } => {
                write!(f, "{}", t!("error.invalid_dimensions", width = width, height = height))
            }
            CoreError::BufferSizeMismatch { expected, actual } => {
                write!(f, "{}", t!("error.buffer_size_mismatch", expected = expected, actual = actual))
            }
            CoreError::OutOfBounds { x, y } => write!(f, "{}", t!("error.out_of_bounds", x = x, y = y)),
            CoreError::LayerNotFound(index) => write!(f, "{}", t!("error.layer_not_found", index = index)),
        }
    }
}

impl std::error::Error for CoreError {}
pub type Result<T> = std::result::Result<T, CoreError>;
