use crate::core::algebra::arithmetic::{augment, column_range};
use crate::core::algebra::determinant::determinant;
use crate::core::algebra::matrix::Matrix;
use crate::core::algebra::rref::rref;
use crate::core::error::{MatrixError, MatrixResult};

/// Inverse via RREF of `[M | I]`. The reduction trace is discarded.
pub fn inverse(m: &Matrix) -> MatrixResult<Matrix> {
    if !m.is_square() {
        return Err(MatrixError::not_square("only square matrices have inverses"));
    }
    if determinant(m)? == 0.0 {
        return Err(MatrixError::singular("determinant of 0 means no inverse"));
    }
    let n = m.rows();
    let augmented = augment(m, &Matrix::identity(n)?)?;
    let reduced = rref(&augmented).result;
    column_range(&reduced, n, 2 * n)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::algebra::arithmetic::multiply;

    #[test]
    fn inverse_2x2_exact() {
        let m = Matrix::from_rows(&[[2.0, 1.0], [1.0, 1.0]]).unwrap();
        let inv = inverse(&m).unwrap();
        assert_eq!(inv, Matrix::from_rows(&[[1.0, -1.0], [-1.0, 2.0]]).unwrap());
    }

    #[test]
    fn inverse_times_original_is_identity() {
        let m = Matrix::from_rows(&[[4.0, 7.0], [2.0, 6.0]]).unwrap();
        let product = multiply(&inverse(&m).unwrap(), &m).unwrap();
        assert!(product.approx_eq(&Matrix::identity(2).unwrap(), 1e-9));
    }

    #[test]
    fn singular_is_rejected() {
        let m = Matrix::from_rows(&[[1.0, 2.0], [2.0, 4.0]]).unwrap();
        assert!(matches!(inverse(&m), Err(MatrixError::SingularMatrixError(_))));
    }

    #[test]
    fn non_square_is_rejected() {
        let m = Matrix::zeros(3, 2).unwrap();
        assert!(matches!(inverse(&m), Err(MatrixError::NotSquareError(_))));
    }
}
