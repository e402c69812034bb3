//! tests/rref_trace.rs
//! Snapshot tests for the rendered RREF step trace.

use matrix_calc::core::algebra::render::render_trace;
use matrix_calc::core::algebra::{rref, Matrix};

fn traced(rows: &[&[f64]]) -> String {
    let m = Matrix::from_rows(rows).expect("valid literal");
    render_trace(&rref(&m).trace).trim_end().to_string()
}

#[test]
fn two_by_two_trace() {
    let rendered = traced(&[&[2.0, 1.0], &[1.0, 1.0]]);
    insta::assert_snapshot!("rref_2x2", rendered);
}

#[test]
fn singular_three_by_three_trace() {
    let rendered = traced(&[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0], &[7.0, 8.0, 9.0]]);
    insta::assert_snapshot!("rref_3x3_singular", rendered);
}

#[test]
fn traces_are_independent_between_calls() {
    let first = traced(&[&[2.0, 1.0], &[1.0, 1.0]]);
    let _ = traced(&[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0], &[7.0, 8.0, 9.0]]);
    let again = traced(&[&[2.0, 1.0], &[1.0, 1.0]]);
    assert_eq!(first, again);
}
