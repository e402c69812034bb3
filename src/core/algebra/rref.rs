//! Reduced row-echelon form with a step trace.
//!
//! The trace is built fresh inside every `rref` call and handed back with the
//! result, so repeated or concurrent reductions never share log state.

use crate::core::algebra::matrix::Matrix;
use crate::core::algebra::reduce::{lead_index, reduce, reorder_by_pivot};
use crate::core::algebra::render::{format_element, render_matrix};

/// Eliminated entries closer to zero than this become exactly 0.
pub const ELIMINATION_EPSILON: f64 = 1e-10;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Step {
    pub label: String,
    pub snapshot: String,
}

/// Ordered (label, rendered matrix) pairs from one reduction.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Trace {
    steps: Vec<Step>,
}

impl Trace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, label: impl Into<String>, snapshot: String) {
        self.steps.push(Step { label: label.into(), snapshot });
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Step> {
        self.steps.iter()
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn labels(&self) -> Vec<&str> {
        self.steps.iter().map(|s| s.label.as_str()).collect()
    }

}

impl<'a> IntoIterator for &'a Trace {
    type Item = &'a Step;
    type IntoIter = std::slice::Iter<'a, Step>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Reduction {
    pub result: Matrix,
    pub trace: Trace,
}

/// Reduces `m` to RREF, returning the result together with its trace.
pub fn rref(m: &Matrix) -> Reduction {
    let mut trace = Trace::new();
    let initial = render_matrix(m);
    trace.record("Initial", initial.clone());

    let mut current = reduce(m);
    record_if_changed(&mut trace, "Reduced", &initial, &current);

    for i in 0..current.rows() {
        let Some(lead) = lead_index(current.row(i)) else {
            continue;
        };
        for j in 0..current.rows() {
            if i == j {
                continue;
            }
            let pivot_row = current.row(i).to_vec();
            // pivot row was zeroed as a duplicate by the last renormalisation
            if lead_index(&pivot_row) != Some(lead) {
                break;
            }
            match lead_index(current.row(j)) {
                Some(other) if other <= lead => {}
                _ => continue,
            }

            let scale = current[(j, lead)] / pivot_row[lead];
            if scale == 0.0 {
                continue;
            }
            let eliminated: Vec<f64> = current
                .row(j)
                .iter()
                .zip(&pivot_row)
                .map(|(&target, &pivot)| {
                    let v = target - pivot * scale;
                    if v.abs() < ELIMINATION_EPSILON { 0.0 } else { v }
                })
                .collect();

            let stepped = current.with_row(j, &eliminated);
            let snapshot = render_matrix(&stepped);
            trace.record(step_label(scale, j, i), snapshot.clone());

            current = reduce(&stepped);
            record_if_changed(&mut trace, "Reduced", &snapshot, &current);
        }
    }

    let before = render_matrix(&current);
    let unit = scale_pivots_to_one(&current);
    record_if_changed(&mut trace, "Reduced", &before, &unit);

    let before = render_matrix(&unit);
    let result = reorder_by_pivot(&unit);
    record_if_changed(&mut trace, "Reordered", &before, &result);

    Reduction { result, trace }
}

fn record_if_changed(trace: &mut Trace, label: &str, before: &str, after: &Matrix) {
    let rendered = render_matrix(after);
    if rendered != before {
        trace.record(label, rendered);
    }
}

/// "Rj -> Rj - Ri * s"; a negative scale flips the operator and reports |s|.
/// Row numbers are 1-based.
pub fn step_label(scale: f64, target: usize, pivot: usize) -> String {
    let op = if scale < 0.0 { '+' } else { '-' };
    format!(
        "R{t} -> R{t} {op} R{p} * {s}",
        t = target + 1,
        op = op,
        p = pivot + 1,
        s = format_element(scale.abs())
    )
}

fn scale_pivots_to_one(m: &Matrix) -> Matrix {
    m.map_rows(|_, row| match lead_index(row) {
        Some(lead) => {
            let pivot = row[lead];
            row.iter().map(|&v| if v == 0.0 { v } else { v / pivot }).collect()
        }
        None => row.to_vec(),
    })
}
