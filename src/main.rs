/// Matrix calculator main: subcommands + interactive shell by default.
use std::io::IsTerminal;

use clap::Parser; // trait import enables MatrixCli::parse()

use matrix_calc::cli::{Command, MatrixCli};
use matrix_calc::config::{resolve_config_path, Settings};
use matrix_calc::{commands, debug_log, shell};

fn set_console_title() {
    use crossterm::{execute, terminal::SetTitle};
    if std::io::stdout().is_terminal() {
        let _ = execute!(std::io::stdout(), SetTitle("Matrix Calculator"));
    }
}

fn main() -> anyhow::Result<()> {
    let args = MatrixCli::parse();

    debug_log!("config path: {:?}", resolve_config_path(&args.config));
    let mut settings = Settings::load(&args.config)?;
    if args.no_color {
        settings.color = false;
    }
    if args.no_steps {
        settings.show_steps = false;
    }
    if !settings.color {
        colored::control::set_override(false);
    }

    match args.cmd {
        None | Some(Command::Shell) => {
            set_console_title();
            shell::start(&settings)
        }
        Some(Command::Load { file }) => commands::load::main(&file, &settings),
        Some(Command::Eval { words }) => commands::eval::main(&words.join(" "), &settings),
    }
}
