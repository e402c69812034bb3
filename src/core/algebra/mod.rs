//! Matrix algebra engine. Pure computation over immutable `Matrix` values:
//! no I/O, no shared state.

pub mod arithmetic;
pub mod determinant;
pub mod inverse;
pub mod matrix;
pub mod reduce;
pub mod render;
pub mod rref;
pub mod vector;

pub use arithmetic::{add, multiply, scale, subtract, transpose};
pub use determinant::{cofactor_matrix, determinant};
pub use inverse::inverse;
pub use matrix::Matrix;
pub use rref::{rref, Reduction, Step, Trace};
pub use vector::{cross_product, dot_product};
