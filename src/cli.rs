use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "matrix",
    about = "Matrix calculator: row reduction, determinants, inverses and vector products",
    version,
    propagate_version = true,
    disable_help_subcommand = true
)]
pub struct MatrixCli {
    /// Global: path to config (TOML); default: ~/.matrix/calc.toml
    #[arg(long = "config", value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Global: disable colored output
    #[arg(long = "no-color", action = ArgAction::SetTrue, global = true)]
    pub no_color: bool,

    /// Global: print only the RREF result, not every step
    #[arg(long = "no-steps", action = ArgAction::SetTrue, global = true)]
    pub no_steps: bool,

    #[command(subcommand)]
    pub cmd: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Interactive shell (the default when no subcommand is given)
    Shell,

    /// Run calculator commands from a file, one per line
    Load {
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Evaluate `;`-separated commands and exit. Example: matrix eval "a 2 identity; det a"
    Eval {
        #[arg(value_name = "COMMANDS", trailing_var_arg = true, allow_hyphen_values = true, required = true)]
        words: Vec<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eval_collects_trailing_words() {
        let cli = MatrixCli::parse_from(["matrix", "--no-steps", "eval", "a", "*", "-2"]);
        assert!(cli.no_steps);
        match cli.cmd {
            Some(Command::Eval { words }) => assert_eq!(words, vec!["a", "*", "-2"]),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn no_subcommand_means_shell() {
        let cli = MatrixCli::parse_from(["matrix"]);
        assert!(cli.cmd.is_none());
    }
}
