use crate::core::algebra::matrix::Matrix;
use crate::core::error::{MatrixError, MatrixResult};

/// Determinant by cofactor expansion along the first row. O(n!).
pub fn determinant(m: &Matrix) -> MatrixResult<f64> {
    if !m.is_square() {
        return Err(MatrixError::not_square("determinant only for square matrices"));
    }
    Ok(expand(m))
}

fn expand(m: &Matrix) -> f64 {
    match m.rows() {
        1 => m[(0, 0)],
        2 => m[(0, 0)] * m[(1, 1)] - m[(0, 1)] * m[(1, 0)],
        n => (0..n)
            .map(|i| sign(i) * m[(0, i)] * expand(&minor(m, 0, i)))
            .sum(),
    }
}

fn sign(k: usize) -> f64 {
    if k % 2 == 0 { 1.0 } else { -1.0 }
}

/// Submatrix with `row` and `col` deleted. Requires at least a 2x2 input.
pub fn minor(m: &Matrix, row: usize, col: usize) -> Matrix {
    debug_assert!(m.rows() > 1 && m.cols() > 1);
    let elements = m
        .row_view()
        .enumerate()
        .filter(|&(i, _)| i != row)
        .flat_map(|(_, r)| {
            r.iter()
                .enumerate()
                .filter(move |&(j, _)| j != col)
                .map(|(_, &v)| v)
        })
        .collect();
    Matrix::from_parts(m.rows() - 1, m.cols() - 1, elements)
}

/// Matrix of signed minor determinants, `(-1)^(i+j) * det(minor(i, j))`.
pub fn cofactor_matrix(m: &Matrix) -> MatrixResult<Matrix> {
    if !m.is_square() {
        return Err(MatrixError::not_square("cofactor expansion only for square matrices"));
    }
    let n = m.rows();
    // the minor of a 1x1 matrix is empty, with determinant 1
    if n == 1 {
        return Matrix::new(1, 1, vec![1.0]);
    }
    let elements = (0..n)
        .flat_map(|i| (0..n).map(move |j| (i, j)))
        .map(|(i, j)| sign(i + j) * expand(&minor(m, i, j)))
        .collect();
    Matrix::new(n, n, elements)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_cases() {
        assert_eq!(determinant(&Matrix::new(1, 1, vec![-7.0]).unwrap()).unwrap(), -7.0);
        let m = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
        assert_eq!(determinant(&m).unwrap(), -2.0);
    }

    #[test]
    fn three_by_three_expansion() {
        let m = Matrix::from_rows(&[[1.0, 2.0, 3.0], [0.0, 1.0, 4.0], [5.0, 6.0, 0.0]]).unwrap();
        assert_eq!(determinant(&m).unwrap(), 1.0);
    }

    #[test]
    fn four_by_four_matches_known_value() {
        let m = Matrix::from_rows(&[
            [1.0, 1.0, 1.0, 1.0],
            [1.0, 2.0, 3.0, 4.0],
            [1.0, 3.0, 6.0, 10.0],
            [1.0, 4.0, 10.0, 20.0],
        ])
        .unwrap();
        assert_eq!(determinant(&m).unwrap(), 1.0);
    }

    #[test]
    fn rejects_non_square() {
        let m = Matrix::zeros(2, 3).unwrap();
        assert!(matches!(determinant(&m), Err(MatrixError::NotSquareError(_))));
        assert!(matches!(cofactor_matrix(&m), Err(MatrixError::NotSquareError(_))));
    }

    #[test]
    fn minor_drops_row_and_column() {
        let m = Matrix::from_rows(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]]).unwrap();
        assert_eq!(minor(&m, 1, 0).elements(), &[2.0, 3.0, 8.0, 9.0]);
    }

    #[test]
    fn cofactor_two_by_two() {
        let m = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
        let c = cofactor_matrix(&m).unwrap();
        assert_eq!(c.elements(), &[4.0, -3.0, -2.0, 1.0]);
    }

    #[test]
    fn cofactor_of_scalar_matrix_is_one() {
        let m = Matrix::new(1, 1, vec![5.0]).unwrap();
        assert_eq!(cofactor_matrix(&m).unwrap().elements(), &[1.0]);
    }
}
