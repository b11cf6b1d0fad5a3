//! Unified error types for pitchkit.
//!
//! Both the logo composer and the deck builder report failures through the same
//! error type, so the binaries can print one message and exit non-zero.

// Submodule declarations
pub mod conversions;
pub mod types;

// Re-exports
pub use types::{Error, Result};
