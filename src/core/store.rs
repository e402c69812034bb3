//! Named-matrix table. Ordered by name so listings are stable.

use std::collections::BTreeMap;
use std::fmt;

use crate::core::algebra::Matrix;
use crate::debug_log;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    Missing(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Missing(name) => write!(f, "matrix does not exist: {}", name),
        }
    }
}

impl std::error::Error for StoreError {}

#[derive(Debug, Default, Clone)]
pub struct MatrixStore {
    matrices: BTreeMap<String, Matrix>,
}

impl MatrixStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `matrix` under `name`, returning whatever was there before.
    pub fn insert(&mut self, name: impl Into<String>, matrix: Matrix) -> Option<Matrix> {
        let name = name.into();
        debug_log!("store: {} <- {}", name, matrix.dim());
        self.matrices.insert(name, matrix)
    }

    pub fn get(&self, name: &str) -> Result<&Matrix, StoreError> {
        self.matrices
            .get(name)
            .ok_or_else(|| StoreError::Missing(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.matrices.contains_key(name)
    }

    /// Moves the matrix at `from` to `to`, replacing any matrix already there.
    pub fn rename(&mut self, from: &str, to: &str) -> Result<(), StoreError> {
        let matrix = self.remove(from)?;
        self.insert(to, matrix);
        Ok(())
    }

    pub fn remove(&mut self, name: &str) -> Result<Matrix, StoreError> {
        self.matrices
            .remove(name)
            .ok_or_else(|| StoreError::Missing(name.to_string()))
    }

    pub fn clear(&mut self) {
        debug_log!("store: cleared {} matrices", self.matrices.len());
        self.matrices.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Matrix)> {
        self.matrices.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.matrices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matrices.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rename_moves_entry() {
        let mut store = MatrixStore::new();
        store.insert("a", Matrix::identity(2).unwrap());
        store.rename("a", "b").unwrap();
        assert!(!store.contains("a"));
        assert_eq!(store.get("b").unwrap(), &Matrix::identity(2).unwrap());
    }

    #[test]
    fn missing_names_error() {
        let mut store = MatrixStore::new();
        assert_eq!(store.get("x").unwrap_err().to_string(), "matrix does not exist: x");
        assert!(store.remove("x").is_err());
        assert!(store.rename("x", "y").is_err());
    }

    #[test]
    fn iter_is_sorted_by_name() {
        let mut store = MatrixStore::new();
        store.insert("zeta", Matrix::identity(1).unwrap());
        store.insert("alpha", Matrix::identity(1).unwrap());
        let names: Vec<&str> = store.iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["alpha", "zeta"]);
        store.clear();
        assert!(store.is_empty());
    }
}
