//! Common types and utilities shared by the logo composer and the deck builder.
//!
//! Only ambient concerns live here: the error type, XML escaping and unit
//! conversions. Neither pipeline depends on the other.

// Submodule declarations
pub mod error;
pub mod unit;
pub mod xml;

// Re-exports for convenience
pub use error::{Error, Result};
