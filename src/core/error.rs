use std::fmt;

/// Failure of a single matrix operation. Every variant is terminal for the
/// operation that raised it; nothing in the engine retries or corrects input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatrixError {
    DimensionError(String),
    NotSquareError(String),
    SingularMatrixError(String),
    VectorShapeError(String),
}

impl fmt::Display for MatrixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatrixError::DimensionError(msg) => write!(f, "Dimension Error: {}", msg),
            MatrixError::NotSquareError(msg) => write!(f, "Not Square: {}", msg),
            MatrixError::SingularMatrixError(msg) => write!(f, "Singular Matrix: {}", msg),
            MatrixError::VectorShapeError(msg) => write!(f, "Vector Shape Error: {}", msg),
        }
    }
}

impl std::error::Error for MatrixError {}

impl MatrixError {
    pub fn dimension(message: &str) -> Self { MatrixError::DimensionError(message.to_string()) }
    pub fn not_square(message: &str) -> Self { MatrixError::NotSquareError(message.to_string()) }
    pub fn singular(message: &str) -> Self { MatrixError::SingularMatrixError(message.to_string()) }
    pub fn vector_shape(message: &str) -> Self { MatrixError::VectorShapeError(message.to_string()) }
}

pub type MatrixResult<T> = Result<T, MatrixError>;
