//! Common test imports for the format registry tests.

// External crates commonly used in tests
pub use rstest::rstest;

// Re-export crate root for convenience in test modules
pub use super::*;
