//! src/commands/load.rs
//! Runs calculator commands from a script file, one per line.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use colored::Colorize;

use crate::commands::report::format_outcome;
use crate::config::Settings;
use crate::core::{Calculator, Outcome};
use crate::debug_log;

/// Nested `load` commands deeper than this are refused.
pub const MAX_LOAD_DEPTH: usize = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub fn main(path: &Path, settings: &Settings) -> Result<()> {
    let mut calc = Calculator::new();
    let mut stdout = io::stdout();
    run_script(&mut calc, path, settings, 0, &mut stdout)?;
    Ok(())
}

/// Executes every non-empty, non-comment line of `path`. A failing line is
/// reported and the script carries on; only `quit` stops it early.
pub fn run_script<W: Write>(
    calc: &mut Calculator,
    path: &Path,
    settings: &Settings,
    depth: usize,
    out: &mut W,
) -> Result<Flow> {
    let src = fs::read_to_string(path)
        .with_context(|| format!("Cannot open file {}", path.display()))?;
    debug_log!("load: {} ({} lines, depth {})", path.display(), src.lines().count(), depth);

    for line in src.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if run_line(calc, line, settings, depth, out)? == Flow::Quit {
            return Ok(Flow::Quit);
        }
    }
    Ok(Flow::Continue)
}

/// Executes one line and prints its outcome. Command errors are reported on
/// stderr; only a failure to write output is returned as `Err`.
pub fn run_line<W: Write>(
    calc: &mut Calculator,
    line: &str,
    settings: &Settings,
    depth: usize,
    out: &mut W,
) -> Result<Flow> {
    match calc.execute_line(line) {
        Ok(Outcome::Quit) => Ok(Flow::Quit),
        Ok(Outcome::Load(path)) => {
            if depth >= MAX_LOAD_DEPTH {
                report_error(&format!("load nested deeper than {} files", MAX_LOAD_DEPTH));
                return Ok(Flow::Continue);
            }
            match run_script(calc, &path, settings, depth + 1, out) {
                Ok(flow) => Ok(flow),
                Err(e) => {
                    report_error(&format!("{:#}", e));
                    Ok(Flow::Continue)
                }
            }
        }
        Ok(outcome) => {
            if let Some(text) = format_outcome(&outcome, settings) {
                writeln!(out, "{}", text)?;
                out.flush()?;
            }
            Ok(Flow::Continue)
        }
        Err(e) => {
            report_error(&e.to_string());
            Ok(Flow::Continue)
        }
    }
}

pub fn report_error(msg: &str) {
    eprintln!("{} {}", "err:".red().bold(), msg);
}
