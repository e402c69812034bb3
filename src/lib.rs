//! Interactive matrix calculator.
//!
//! `core::algebra` is the numerical engine; `core::{command, store,
//! calculator}` turn text commands into engine calls; `shell` and `commands`
//! are the front ends driven by `main`.
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod shell;

pub use crate::core::algebra::Matrix;
pub use crate::core::MatrixError;
