//! Relational AST produced by the translators.

pub mod operators;
pub mod statement;
pub mod values;

pub use operators::*;
pub use statement::*;
pub use values::*;
