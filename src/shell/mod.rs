use colored::Colorize;
use crossterm::{cursor, execute, terminal::{Clear, ClearType}};
use std::io::{self, Write};

use crate::commands::load::{report_error, run_line, Flow};
use crate::config::Settings;
use crate::core::Calculator;
use crate::debug_log;

pub fn start(settings: &Settings) -> anyhow::Result<()> {
    banner();

    let mut calc = Calculator::new();
    let mut stdout = io::stdout();
    loop {
        // Prompt
        print!("{}", settings.prompt.truecolor(255, 240, 0));
        stdout.flush().ok();

        // Read line
        let mut line = String::new();
        if io::stdin().read_line(&mut line)? == 0 {
            println!();
            break;
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if line.eq_ignore_ascii_case("clear") {
            if let Err(e) = execute!(stdout, Clear(ClearType::All), cursor::MoveTo(0, 0)) {
                report_error(&e.to_string());
            }
            continue;
        }

        debug_log!("shell: {}", line);
        if run_line(&mut calc, line, settings, 0, &mut stdout)? == Flow::Quit {
            break;
        }
    }

    Ok(())
}

fn banner() {
    println!(
        "\n{}\n{}\n{}  {}\n",
        "╔══════════════════════════════════════╗".truecolor(0, 180, 255),
        "║     M a t r i x   C a l c u l a t o r ║".truecolor(255, 240, 0).bold(),
        "╚══════════════════════════════════════╝".truecolor(0, 180, 255),
        "type 'help' for commands".truecolor(130, 0, 200)
    );
}
