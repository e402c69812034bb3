//! Plain-text rendering of calculator outcomes.

use crate::config::Settings;
use crate::core::algebra::render::{render_scalar, render_trace};
use crate::core::Outcome;

pub const HELP_TEXT: &str = "\
Define:
  A R x C { e1 e2 ... }   # R x C matrix, row-major
  A R x C zero            # zero matrix
  A N identity            # N x N identity
Arithmetic:
  A + B, A - B, A * B     # append '-> C' to store the result
  A * 2, 2 * A            # scalar multiple
  A ^ T                   # transpose
Algebra:
  rref A                  # reduced row-echelon form, with steps
  det A                   # determinant
  cofactor A              # cofactor matrix
  inverse A               # inverse
  A dot B                 # dot product
  A x B                   # cross product of 3-vectors
Store:
  A ?                     # show matrix
  display                 # show every matrix
  rename A B, remove A, reset
Other:
  load FILE               # run commands from FILE
  clear                   # clear the screen (shell only)
  help, quit";

/// Text to print for `outcome`, or `None` when the command is silent.
pub fn format_outcome(outcome: &Outcome, settings: &Settings) -> Option<String> {
    match outcome {
        Outcome::Matrix(m) => Some(m.render()),
        Outcome::Scalar(v) => Some(render_scalar(*v)),
        Outcome::Steps { trace, result } => {
            if settings.show_steps {
                Some(render_trace(trace).trim_end().to_string())
            } else {
                Some(result.render())
            }
        }
        Outcome::Listing(items) if items.is_empty() => None,
        Outcome::Listing(items) => Some(
            items
                .iter()
                .map(|(name, m)| format!("{}:\n{}", name, m.render()))
                .collect::<Vec<_>>()
                .join("\n\n"),
        ),
        Outcome::Help => Some(HELP_TEXT.to_string()),
        Outcome::Stored(_)
        | Outcome::Removed(_)
        | Outcome::Cleared
        | Outcome::Load(_)
        | Outcome::Quit => None,
    }
}
