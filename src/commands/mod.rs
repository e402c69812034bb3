pub mod eval;
pub mod load;
pub mod report;
