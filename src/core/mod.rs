//! Core domain types
//!
//! Pure arithmetic only: nothing here touches I/O or process state.

pub mod aggregate;
pub mod blend;
pub mod embedding;
pub mod error;

pub use aggregate::{Aggregate, Behavioral, Operation};
pub use blend::{blend, interest_weight};
pub use embedding::Embedding;
pub use error::{ProfileError, Result};
