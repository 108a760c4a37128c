//! Common test imports for the codec tests.

// External crates commonly used in tests
pub use rstest::rstest;

// Allocation in no_std test modules
pub use alloc::vec;
pub use alloc::vec::Vec;

// Re-export crate root for convenience in test modules
pub use super::*;
