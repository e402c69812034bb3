//! Calculator command grammar.
//!
//! Lines are trimmed, lower-cased and split on whitespace; the word slice is
//! then matched against the known forms. An optional trailing `-> NAME`
//! stores a matrix result under NAME.

use std::fmt;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    Name(String),
    Scalar(f64),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Define { name: String, rows: usize, cols: usize, elements: Vec<f64> },
    Zero { name: String, rows: usize, cols: usize },
    Identity { name: String, size: usize },
    Add { lhs: String, rhs: String, dest: Option<String> },
    Subtract { lhs: String, rhs: String, dest: Option<String> },
    Multiply { lhs: Operand, rhs: Operand, dest: Option<String> },
    Transpose { name: String, dest: Option<String> },
    Inverse { name: String, dest: Option<String> },
    Cofactor { name: String, dest: Option<String> },
    Rref { name: String, dest: Option<String> },
    Determinant { name: String },
    Dot { lhs: String, rhs: String },
    Cross { lhs: String, rhs: String, dest: Option<String> },
    Show { name: String },
    Rename { from: String, to: String },
    Remove { name: String },
    Reset,
    Display,
    Load { path: PathBuf },
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    NotUnderstood(String),
    BadNumber(String),
    BadSpecification(String),
    MissingMatrix,
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::NotUnderstood(line) => write!(f, "Command not understood: {}", line),
            CommandError::BadNumber(lit) => write!(f, "Invalid number literal '{}'", lit),
            CommandError::BadSpecification(msg) => write!(f, "Bad specification: {}", msg),
            CommandError::MissingMatrix => write!(f, "matrices do not exist"),
        }
    }
}

impl std::error::Error for CommandError {}

fn is_name(word: &str) -> bool {
    !word.is_empty()
        && word.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
        && word.parse::<f64>().is_err()
}

fn name(word: &str, line: &str) -> Result<String, CommandError> {
    if is_name(word) {
        Ok(word.to_string())
    } else {
        Err(CommandError::NotUnderstood(line.to_string()))
    }
}

fn number(word: &str) -> Result<f64, CommandError> {
    word.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| CommandError::BadNumber(word.to_string()))
}

fn dimension(word: &str) -> Result<usize, CommandError> {
    word.parse::<usize>()
        .map_err(|_| CommandError::BadNumber(word.to_string()))
}

fn operand(word: &str, line: &str) -> Result<Operand, CommandError> {
    match word.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(Operand::Scalar(v)),
        _ => name(word, line).map(Operand::Name),
    }
}

/// Parses one input line.
pub fn parse(input: &str) -> Result<Command, CommandError> {
    let trimmed = input.trim();

    // `load` keeps the path's original case
    if let Some((head, rest)) = trimmed.split_once(char::is_whitespace) {
        let path = rest.trim();
        if head.eq_ignore_ascii_case("load") && !path.is_empty() {
            return Ok(Command::Load { path: PathBuf::from(path) });
        }
    }

    let line = trimmed.to_lowercase();
    let mut words: Vec<&str> = line.split_whitespace().collect();

    let mut dest = None;
    if words.len() >= 3 && words[words.len() - 2] == "->" {
        let target = words[words.len() - 1];
        dest = Some(name(target, &line)?);
        words.truncate(words.len() - 2);
    }

    let not_understood = || CommandError::NotUnderstood(line.clone());

    let command = match words.as_slice() {
        ["help"] => Command::Help,
        ["quit"] | ["exit"] => Command::Quit,
        ["reset"] => Command::Reset,
        ["display"] => Command::Display,
        ["det", m] => Command::Determinant { name: name(m, &line)? },
        ["inverse", m] => Command::Inverse { name: name(m, &line)?, dest: dest.take() },
        ["cofactor", m] => Command::Cofactor { name: name(m, &line)?, dest: dest.take() },
        ["rref", m] => Command::Rref { name: name(m, &line)?, dest: dest.take() },
        ["rename", from, to] => Command::Rename { from: name(from, &line)?, to: name(to, &line)? },
        ["remove", m] => Command::Remove { name: name(m, &line)? },
        [m, "?"] => Command::Show { name: name(m, &line)? },
        [a, "+", b] => Command::Add { lhs: name(a, &line)?, rhs: name(b, &line)?, dest: dest.take() },
        [a, "-", b] => Command::Subtract { lhs: name(a, &line)?, rhs: name(b, &line)?, dest: dest.take() },
        [a, "*", b] => Command::Multiply {
            lhs: operand(a, &line)?,
            rhs: operand(b, &line)?,
            dest: dest.take(),
        },
        [m, "^", "t"] => Command::Transpose { name: name(m, &line)?, dest: dest.take() },
        [a, "dot", b] => Command::Dot { lhs: name(a, &line)?, rhs: name(b, &line)? },
        [a, "x", b] => Command::Cross { lhs: name(a, &line)?, rhs: name(b, &line)?, dest: dest.take() },
        [m, n, "identity"] => Command::Identity { name: name(m, &line)?, size: dimension(n)? },
        [m, r, "x", c, "zero"] => Command::Zero {
            name: name(m, &line)?,
            rows: dimension(r)?,
            cols: dimension(c)?,
        },
        [m, r, "x", c, "{", values @ .., "}"] => {
            let (rows, cols) = (dimension(r)?, dimension(c)?);
            let count = rows.checked_mul(cols).ok_or_else(|| {
                CommandError::BadSpecification(format!("{} x {} is too large", rows, cols))
            })?;
            if values.len() != count {
                return Err(CommandError::BadSpecification(format!(
                    "{} x {} needs {} elements, got {}",
                    rows,
                    cols,
                    count,
                    values.len()
                )));
            }
            let elements = values.iter().map(|v| number(v)).collect::<Result<Vec<_>, _>>()?;
            Command::Define { name: name(m, &line)?, rows, cols, elements }
        }
        _ => return Err(not_understood()),
    };

    // a destination on a command that produces no matrix
    if dest.is_some() {
        return Err(not_understood());
    }
    Ok(command)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_literal_definition() {
        let cmd = parse("A 2 x 2 { 1 -2 3.5 4 }").unwrap();
        assert_eq!(
            cmd,
            Command::Define { name: "a".into(), rows: 2, cols: 2, elements: vec![1.0, -2.0, 3.5, 4.0] }
        );
    }

    #[test]
    fn literal_count_must_match_shape() {
        let err = parse("a 2 x 2 { 1 2 3 }").unwrap_err();
        assert!(matches!(err, CommandError::BadSpecification(_)));
    }

    #[test]
    fn oversized_literal_shape_is_a_bad_specification() {
        let line = format!("a {} x 2 {{ 1 }}", usize::MAX);
        assert!(matches!(parse(&line), Err(CommandError::BadSpecification(_))));
    }

    #[test]
    fn destination_suffix() {
        assert_eq!(
            parse("inverse a -> b").unwrap(),
            Command::Inverse { name: "a".into(), dest: Some("b".into()) }
        );
        assert_eq!(
            parse("a x b -> c").unwrap(),
            Command::Cross { lhs: "a".into(), rhs: "b".into(), dest: Some("c".into()) }
        );
    }

    #[test]
    fn destination_rejected_where_no_matrix_results() {
        assert!(parse("det a -> b").is_err());
        assert!(parse("a dot b -> c").is_err());
    }

    #[test]
    fn scalar_operands() {
        assert_eq!(
            parse("2.5 * m").unwrap(),
            Command::Multiply { lhs: Operand::Scalar(2.5), rhs: Operand::Name("m".into()), dest: None }
        );
    }

    #[test]
    fn store_commands() {
        assert_eq!(parse("rename a b").unwrap(), Command::Rename { from: "a".into(), to: "b".into() });
        assert_eq!(parse("a ?").unwrap(), Command::Show { name: "a".into() });
        assert_eq!(parse("m 3 identity").unwrap(), Command::Identity { name: "m".into(), size: 3 });
        assert_eq!(parse("z 2 x 3 zero").unwrap(), Command::Zero { name: "z".into(), rows: 2, cols: 3 });
        assert_eq!(parse("  RESET ").unwrap(), Command::Reset);
    }

    #[test]
    fn load_keeps_path_case() {
        assert_eq!(
            parse("load Scripts/Demo.txt").unwrap(),
            Command::Load { path: PathBuf::from("Scripts/Demo.txt") }
        );
    }

    #[test]
    fn garbage_is_not_understood() {
        assert!(matches!(parse("frobnicate a"), Err(CommandError::NotUnderstood(_))));
        assert!(matches!(parse("a 2 x two zero"), Err(CommandError::BadNumber(_))));
    }
}
