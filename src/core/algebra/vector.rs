use crate::core::algebra::matrix::Matrix;
use crate::core::error::{MatrixError, MatrixResult};

fn check_pair(a: &Matrix, b: &Matrix, op: &str) -> MatrixResult<()> {
    if !a.is_vector() || !b.is_vector() {
        return Err(MatrixError::vector_shape(&format!(
            "matrices must be vectors for {}",
            op
        )));
    }
    if a.len() != b.len() {
        return Err(MatrixError::dimension(&format!(
            "vectors must be same size for {} ({} and {} elements)",
            op,
            a.len(),
            b.len()
        )));
    }
    Ok(())
}

/// Sum of elementwise products. Row and column vectors mix freely.
pub fn dot_product(a: &Matrix, b: &Matrix) -> MatrixResult<f64> {
    check_pair(a, b, "dot product")?;
    Ok(a.elements().iter().zip(b.elements()).map(|(x, y)| x * y).sum())
}

/// Standard 3-vector cross product, returned as a 3x1 column.
pub fn cross_product(a: &Matrix, b: &Matrix) -> MatrixResult<Matrix> {
    check_pair(a, b, "cross product")?;
    if a.len() != 3 {
        return Err(MatrixError::vector_shape("cross product only for 3-dimensional vectors"));
    }
    let (u, v) = (a.elements(), b.elements());
    Matrix::column_vector(&[
        u[1] * v[2] - u[2] * v[1],
        u[2] * v[0] - u[0] * v[2],
        u[0] * v[1] - u[1] * v[0],
    ])
}
