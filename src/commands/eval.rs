//! src/commands/eval.rs
//! One-shot evaluation: `matrix eval "a 2 x 2 { 2 1 1 1 }; inverse a"`.

use std::io;

use anyhow::Result;

use crate::commands::load::{run_line, Flow};
use crate::config::Settings;
use crate::core::Calculator;

/// Runs `;`-separated commands against a fresh store.
pub fn main(input: &str, settings: &Settings) -> Result<()> {
    let mut calc = Calculator::new();
    let mut stdout = io::stdout();
    for line in split_commands(input) {
        if run_line(&mut calc, line, settings, 0, &mut stdout)? == Flow::Quit {
            break;
        }
    }
    Ok(())
}

pub fn split_commands(input: &str) -> impl Iterator<Item = &str> {
    input.split(';').map(str::trim).filter(|s| !s.is_empty())
}
