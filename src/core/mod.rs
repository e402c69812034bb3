//! Core module tree: the algebra engine plus the command/store/calculator
//! layer that drives it.

#[macro_use]
pub mod debug; // gated debug logging (MATRIX_DEBUG=1) provides debug_log! macro

pub mod algebra;
pub mod calculator;
pub mod command;
pub mod error;
pub mod store;

pub use calculator::{CalcError, Calculator, Outcome};
pub use error::MatrixError;
