/// Shared utilities and common types
///
/// This module contains error types, result aliases and input
/// validation helpers used across all layers.
pub mod error;
pub mod result;
pub mod security;

pub use result::Result;
