#![allow(clippy::needless_range_loop)]
use crate::core::algebra::matrix::Matrix;
use crate::core::error::{MatrixError, MatrixResult};

pub fn add(a: &Matrix, b: &Matrix) -> MatrixResult<Matrix> {
    elementwise(a, b, "add", |x, y| x + y)
}

pub fn subtract(a: &Matrix, b: &Matrix) -> MatrixResult<Matrix> {
    elementwise(a, b, "subtract", |x, y| x - y)
}

fn elementwise(
    a: &Matrix,
    b: &Matrix,
    verb: &str,
    op: impl Fn(f64, f64) -> f64,
) -> MatrixResult<Matrix> {
    if !a.dimensions_equal(b) {
        return Err(MatrixError::dimension(&format!(
            "can't {} matrices of differing dimensions ({} and {})",
            verb,
            a.dim(),
            b.dim()
        )));
    }
    let elements = a
        .elements()
        .iter()
        .zip(b.elements())
        .map(|(&x, &y)| op(x, y))
        .collect();
    Ok(Matrix::from_parts(a.rows(), a.cols(), elements))
}

pub fn multiply(a: &Matrix, b: &Matrix) -> MatrixResult<Matrix> {
    if a.cols() != b.rows() {
        return Err(MatrixError::dimension(&format!(
            "bad dimensions for multiplication ({} times {})",
            a.dim(),
            b.dim()
        )));
    }
    let mut elements = vec![0.0; a.rows() * b.cols()];
    for i in 0..a.rows() {
        for j in 0..b.cols() {
            elements[i * b.cols() + j] = (0..a.cols()).map(|k| a[(i, k)] * b[(k, j)]).sum();
        }
    }
    Ok(Matrix::from_parts(a.rows(), b.cols(), elements))
}

pub fn scale(a: &Matrix, factor: f64) -> Matrix {
    let elements = a.elements().iter().map(|v| v * factor).collect();
    Matrix::from_parts(a.rows(), a.cols(), elements)
}

pub fn transpose(a: &Matrix) -> Matrix {
    let elements = a.col_view().into_iter().flatten().collect();
    Matrix::from_parts(a.cols(), a.rows(), elements)
}

/// `[a | b]`: rows of `b` appended to the matching rows of `a`.
pub fn augment(a: &Matrix, b: &Matrix) -> MatrixResult<Matrix> {
    if a.rows() != b.rows() {
        return Err(MatrixError::dimension(&format!(
            "augmented matrices need equal row counts ({} and {})",
            a.dim(),
            b.dim()
        )));
    }
    let elements = a
        .row_view()
        .zip(b.row_view())
        .flat_map(|(left, right)| left.iter().chain(right).copied())
        .collect();
    Ok(Matrix::from_parts(a.rows(), a.cols() + b.cols(), elements))
}

/// Columns `start..end` of `a` as a new matrix.
pub fn column_range(a: &Matrix, start: usize, end: usize) -> MatrixResult<Matrix> {
    if start >= end || end > a.cols() {
        return Err(MatrixError::dimension(&format!(
            "column range {}..{} out of bounds for {}",
            start,
            end,
            a.dim()
        )));
    }
    let elements = a
        .row_view()
        .flat_map(|row| row[start..end].iter().copied())
        .collect();
    Ok(Matrix::from_parts(a.rows(), end - start, elements))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn m(rows: &[&[f64]]) -> Matrix {
        Matrix::from_rows(rows).unwrap()
    }

    #[test]
    fn matmul_2x2() {
        let a = m(&[&[1.0, 2.0], &[3.0, 4.0]]);
        let b = m(&[&[5.0, 6.0], &[7.0, 8.0]]);
        let c = multiply(&a, &b).expect("matmul ok");
        assert_eq!(c, m(&[&[19.0, 22.0], &[43.0, 50.0]]));
    }

    #[test]
    fn matmul_rejects_bad_shapes() {
        let a = Matrix::zeros(2, 3).unwrap();
        assert!(matches!(multiply(&a, &a), Err(MatrixError::DimensionError(_))));
    }

    #[test]
    fn add_and_subtract() {
        let a = m(&[&[1.0, 2.0]]);
        let b = m(&[&[0.5, -2.0]]);
        assert_eq!(add(&a, &b).unwrap(), m(&[&[1.5, 0.0]]));
        assert_eq!(subtract(&a, &b).unwrap(), m(&[&[0.5, 4.0]]));
        assert!(add(&a, &Matrix::zeros(2, 1).unwrap()).is_err());
    }

    #[test]
    fn transpose_2x3() {
        let t = transpose(&m(&[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]]));
        assert_eq!(t, m(&[&[1.0, 4.0], &[2.0, 5.0], &[3.0, 6.0]]));
    }

    #[test]
    fn augment_and_split() {
        let a = m(&[&[1.0, 2.0], &[3.0, 4.0]]);
        let aug = augment(&a, &Matrix::identity(2).unwrap()).unwrap();
        assert_eq!(aug.dim(), "2 x 4");
        assert_eq!(aug.row(1), &[3.0, 4.0, 0.0, 1.0]);
        assert_eq!(column_range(&aug, 2, 4).unwrap(), Matrix::identity(2).unwrap());
    }

    #[test]
    fn scale_every_entry() {
        assert_eq!(scale(&m(&[&[1.0, -2.0]]), -3.0), m(&[&[-3.0, 6.0]]));
    }
}
