//! Row-level helpers shared by the RREF engine: pivot lookup, sign/scale
//! normalisation, duplicate-row collapse and pivot ordering.

use crate::core::algebra::matrix::Matrix;

/// Entries of a normalised row closer to zero than this become exactly 0.
pub const NORMALIZE_EPSILON: f64 = 1e-15;

/// Column of the first non-zero entry, `None` for an all-zero row.
pub fn lead_index(row: &[f64]) -> Option<usize> {
    row.iter().position(|&v| v != 0.0)
}

/// Index of the only non-zero entry, if the row has exactly one.
pub fn single_non_zero_index(row: &[f64]) -> Option<usize> {
    let mut non_zero = row.iter().enumerate().filter(|&(_, &v)| v != 0.0);
    match (non_zero.next(), non_zero.next()) {
        (Some((i, _)), None) => Some(i),
        _ => None,
    }
}

pub fn has_fraction(row: &[f64]) -> bool {
    row.iter().any(|v| v.fract() != 0.0)
}

fn gcd(a: f64, b: f64) -> f64 {
    if b == 0.0 {
        return a.abs();
    }
    gcd(b, a % b)
}

/// Greatest common divisor folded across the row, always non-negative.
pub fn row_gcd(row: &[f64]) -> f64 {
    let init = row.first().copied().unwrap_or(0.0);
    row.iter().fold(init, |acc, &v| gcd(acc, v))
}

/// Canonical form of one row.
///
/// 1. near-zero entries snap to 0
/// 2. the row is negated when its maximum is <= 0 or its first entry is negative
/// 3. a row with a single non-zero entry becomes a unit row
/// 4. otherwise an all-integral row is divided by the gcd of its entries;
///    rows holding any fractional entry are left unscaled
pub fn normalize_row(row: &[f64]) -> Vec<f64> {
    let mut out: Vec<f64> = row
        .iter()
        .map(|&v| if v.abs() < NORMALIZE_EPSILON { 0.0 } else { v })
        .collect();

    let max = out.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let first_negative = out.first().is_some_and(|&v| v < 0.0);
    if max <= 0.0 || first_negative {
        for v in out.iter_mut() {
            *v = -*v;
        }
    }

    if let Some(i) = single_non_zero_index(&out) {
        out[i] = 1.0;
    }

    let divisor = if has_fraction(&out) { 1.0 } else { row_gcd(&out) };
    out.iter()
        .map(|&v| if v == 0.0 { 0.0 } else { v / divisor })
        .collect()
}

pub fn normalize(m: &Matrix) -> Matrix {
    m.map_rows(|_, row| normalize_row(row))
}

/// Zeroes every row that is bit-for-bit equal to an earlier row. The first
/// occurrence in each group of duplicates survives.
pub fn collapse_duplicate_rows(m: &Matrix) -> Matrix {
    let rows: Vec<&[f64]> = m.row_view().collect();
    m.map_rows(|i, row| {
        let repeated = rows[..i].iter().any(|earlier| same_bits(earlier, row));
        if repeated {
            vec![0.0; row.len()]
        } else {
            row.to_vec()
        }
    })
}

fn same_bits(a: &[f64], b: &[f64]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.to_bits() == y.to_bits())
}

/// Normalise every row, then collapse duplicates.
pub fn reduce(m: &Matrix) -> Matrix {
    collapse_duplicate_rows(&normalize(m))
}

/// Rows ordered by pivot column, leftmost pivot first; all-zero rows go last.
/// Rows sharing a pivot column keep their relative order.
pub fn reorder_by_pivot(m: &Matrix) -> Matrix {
    let mut order: Vec<usize> = (0..m.rows()).collect();
    // stable sort; None (no pivot) sorts after every column index
    order.sort_by_key(|&i| lead_index(m.row(i)).unwrap_or(usize::MAX));
    let elements = order.iter().flat_map(|&i| m.row(i).iter().copied()).collect();
    Matrix::from_parts(m.rows(), m.cols(), elements)
}

pub fn pivot_count(m: &Matrix) -> usize {
    m.row_view().filter(|row| lead_index(row).is_some()).count()
}
