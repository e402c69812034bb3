//! Text rendering for matrices, scalars and RREF traces. Pure functions; the
//! shell decides where the text goes.

use crate::core::algebra::matrix::Matrix;
use crate::core::algebra::rref::Trace;

/// One matrix cell: rounded to 2 decimals, integral values without a fraction.
/// Halves round toward positive infinity, so -0.125 gives -0.12.
pub fn format_element(value: f64) -> String {
    let rounded = (value * 100.0 + 0.5).floor() / 100.0;
    format_number(rounded)
}

/// Scalar results print as integers when the fractional part is exactly zero,
/// otherwise at full precision.
pub fn render_scalar(value: f64) -> String {
    format_number(value)
}

fn format_number(value: f64) -> String {
    // -0.0 would otherwise print as "-0"
    if value == 0.0 {
        return "0".to_string();
    }
    format!("{}", value)
}

pub fn render_matrix(m: &Matrix) -> String {
    m.row_view()
        .map(|row| {
            let mut line = String::from("|\t");
            for &v in row {
                line.push_str(&format_element(v));
                line.push('\t');
            }
            line.push('|');
            line
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Label, snapshot, blank line for every step.
pub fn render_trace(trace: &Trace) -> String {
    let mut out = String::new();
    for step in trace.iter() {
        out.push_str(&step.label);
        out.push('\n');
        out.push_str(&step.snapshot);
        out.push_str("\n\n");
    }
    out
}
