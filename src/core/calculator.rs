//! Evaluates parsed commands against the named-matrix store.
//!
//! The calculator resolves names to `Matrix` values, calls the algebra engine
//! and hands back a structured `Outcome`; printing is left to the caller.

use std::fmt;
use std::path::PathBuf;

use crate::core::algebra::{self, Matrix, Trace};
use crate::core::command::{self, Command, CommandError, Operand};
use crate::core::error::MatrixError;
use crate::core::store::{MatrixStore, StoreError};
use crate::debug_log;

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Matrix(Matrix),
    Scalar(f64),
    Steps { trace: Trace, result: Matrix },
    Listing(Vec<(String, Matrix)>),
    Stored(String),
    Removed(String),
    Cleared,
    Help,
    Load(PathBuf),
    Quit,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CalcError {
    Matrix(MatrixError),
    Command(CommandError),
    Store(StoreError),
}

impl fmt::Display for CalcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalcError::Matrix(e) => write!(f, "{}", e),
            CalcError::Command(e) => write!(f, "{}", e),
            CalcError::Store(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for CalcError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CalcError::Matrix(e) => Some(e),
            CalcError::Command(e) => Some(e),
            CalcError::Store(e) => Some(e),
        }
    }
}

impl From<MatrixError> for CalcError {
    fn from(e: MatrixError) -> Self { CalcError::Matrix(e) }
}
impl From<CommandError> for CalcError {
    fn from(e: CommandError) -> Self { CalcError::Command(e) }
}
impl From<StoreError> for CalcError {
    fn from(e: StoreError) -> Self { CalcError::Store(e) }
}

#[derive(Debug, Default)]
pub struct Calculator {
    store: MatrixStore,
}

impl Calculator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn store(&self) -> &MatrixStore {
        &self.store
    }

    /// Parses and executes one input line.
    pub fn execute_line(&mut self, line: &str) -> Result<Outcome, CalcError> {
        let cmd = command::parse(line)?;
        debug_log!("exec: {:?}", cmd);
        self.execute(cmd)
    }

    pub fn execute(&mut self, cmd: Command) -> Result<Outcome, CalcError> {
        match cmd {
            Command::Define { name, rows, cols, elements } => {
                let m = Matrix::new(rows, cols, elements)?;
                self.define(name, m)
            }
            Command::Zero { name, rows, cols } => self.define(name, Matrix::zeros(rows, cols)?),
            Command::Identity { name, size } => self.define(name, Matrix::identity(size)?),

            Command::Add { lhs, rhs, dest } => {
                let m = algebra::add(self.get(&lhs)?, self.get(&rhs)?)?;
                Ok(self.emit(m, dest))
            }
            Command::Subtract { lhs, rhs, dest } => {
                let m = algebra::subtract(self.get(&lhs)?, self.get(&rhs)?)?;
                Ok(self.emit(m, dest))
            }
            Command::Multiply { lhs, rhs, dest } => {
                let m = self.multiply(&lhs, &rhs)?;
                Ok(self.emit(m, dest))
            }
            Command::Transpose { name, dest } => {
                let m = algebra::transpose(self.get(&name)?);
                Ok(self.emit(m, dest))
            }
            Command::Inverse { name, dest } => {
                let m = algebra::inverse(self.get(&name)?)?;
                Ok(self.emit(m, dest))
            }
            Command::Cofactor { name, dest } => {
                let m = algebra::cofactor_matrix(self.get(&name)?)?;
                Ok(self.emit(m, dest))
            }
            Command::Rref { name, dest } => {
                let reduction = algebra::rref(self.get(&name)?);
                debug_log!("rref {}: {} steps", name, reduction.trace.len());
                if let Some(dest) = dest {
                    self.store.insert(dest, reduction.result.clone());
                }
                Ok(Outcome::Steps { trace: reduction.trace, result: reduction.result })
            }
            Command::Determinant { name } => Ok(Outcome::Scalar(algebra::determinant(self.get(&name)?)?)),
            Command::Dot { lhs, rhs } => {
                Ok(Outcome::Scalar(algebra::dot_product(self.get(&lhs)?, self.get(&rhs)?)?))
            }
            Command::Cross { lhs, rhs, dest } => {
                let m = algebra::cross_product(self.get(&lhs)?, self.get(&rhs)?)?;
                Ok(self.emit(m, dest))
            }

            Command::Show { name } => Ok(Outcome::Matrix(self.get(&name)?.clone())),
            Command::Rename { from, to } => {
                self.store.rename(&from, &to)?;
                Ok(Outcome::Stored(to))
            }
            Command::Remove { name } => {
                self.store.remove(&name)?;
                Ok(Outcome::Removed(name))
            }
            Command::Reset => {
                self.store.clear();
                Ok(Outcome::Cleared)
            }
            Command::Display => Ok(Outcome::Listing(
                self.store
                    .iter()
                    .map(|(name, m)| (name.to_string(), m.clone()))
                    .collect(),
            )),
            Command::Load { path } => Ok(Outcome::Load(path)),
            Command::Help => Ok(Outcome::Help),
            Command::Quit => Ok(Outcome::Quit),
        }
    }

    fn get(&self, name: &str) -> Result<&Matrix, StoreError> {
        self.store.get(name)
    }

    fn define(&mut self, name: String, m: Matrix) -> Result<Outcome, CalcError> {
        self.store.insert(name.clone(), m);
        Ok(Outcome::Stored(name))
    }

    /// Stores `m` under `dest` when given; the result is reported either way.
    fn emit(&mut self, m: Matrix, dest: Option<String>) -> Outcome {
        if let Some(dest) = dest {
            self.store.insert(dest, m.clone());
        }
        Outcome::Matrix(m)
    }

    fn multiply(&self, lhs: &Operand, rhs: &Operand) -> Result<Matrix, CalcError> {
        match (lhs, rhs) {
            (Operand::Name(a), Operand::Name(b)) => Ok(algebra::multiply(self.get(a)?, self.get(b)?)?),
            (Operand::Name(a), Operand::Scalar(k)) | (Operand::Scalar(k), Operand::Name(a)) => {
                Ok(algebra::scale(self.get(a)?, *k))
            }
            (Operand::Scalar(_), Operand::Scalar(_)) => Err(CommandError::MissingMatrix.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(calc: &mut Calculator, lines: &[&str]) -> Outcome {
        let mut last = Outcome::Cleared;
        for line in lines {
            last = calc.execute_line(line).unwrap();
        }
        last
    }

    #[test]
    fn define_then_invert_with_destination() {
        let mut calc = Calculator::new();
        let out = run(&mut calc, &["m 2 x 2 { 2 1 1 1 }", "inverse m -> n"]);
        let expected = Matrix::from_rows(&[[1.0, -1.0], [-1.0, 2.0]]).unwrap();
        assert_eq!(out, Outcome::Matrix(expected.clone()));
        assert_eq!(calc.store().get("n").unwrap(), &expected);
    }

    #[test]
    fn scalar_multiply_either_side() {
        let mut calc = Calculator::new();
        run(&mut calc, &["v 1 x 2 { 1 2 }"]);
        let left = calc.execute_line("3 * v").unwrap();
        let right = calc.execute_line("v * 3").unwrap();
        assert_eq!(left, right);
        assert!(matches!(
            calc.execute_line("2 * 3"),
            Err(CalcError::Command(CommandError::MissingMatrix))
        ));
    }

    #[test]
    fn rref_returns_trace_and_stores_result() {
        let mut calc = Calculator::new();
        let out = run(&mut calc, &["a 2 x 2 { 2 1 1 1 }", "rref a -> r"]);
        match out {
            Outcome::Steps { trace, result } => {
                assert_eq!(trace.labels()[0], "Initial");
                assert_eq!(result, Matrix::identity(2).unwrap());
            }
            other => panic!("unexpected outcome {:?}", other),
        }
        assert!(calc.store().contains("r"));
    }

    #[test]
    fn unknown_matrix_is_reported() {
        let mut calc = Calculator::new();
        let err = calc.execute_line("det nope").unwrap_err();
        assert_eq!(err.to_string(), "matrix does not exist: nope");
    }

    #[test]
    fn engine_errors_pass_through() {
        let mut calc = Calculator::new();
        run(&mut calc, &["s 2 x 2 { 1 2 2 4 }"]);
        assert!(matches!(
            calc.execute_line("inverse s"),
            Err(CalcError::Matrix(MatrixError::SingularMatrixError(_)))
        ));
    }

    #[test]
    fn oversized_zero_and_identity_are_errors() {
        let mut calc = Calculator::new();
        let zero = format!("z {} x {} zero", usize::MAX, usize::MAX);
        assert!(matches!(
            calc.execute_line(&zero),
            Err(CalcError::Matrix(MatrixError::DimensionError(_)))
        ));
        let ident = format!("i {} identity", usize::MAX);
        assert!(matches!(
            calc.execute_line(&ident),
            Err(CalcError::Matrix(MatrixError::DimensionError(_)))
        ));
        assert!(calc.store().is_empty());
    }

    #[test]
    fn display_lists_sorted() {
        let mut calc = Calculator::new();
        run(&mut calc, &["b 1 identity", "a 1 x 1 zero"]);
        match calc.execute_line("display").unwrap() {
            Outcome::Listing(items) => {
                let names: Vec<&str> = items.iter().map(|(n, _)| n.as_str()).collect();
                assert_eq!(names, vec!["a", "b"]);
            }
            other => panic!("unexpected outcome {:?}", other),
        }
    }
}
