//! Error types for consuming service definitions
//!
//! Building a [`ServiceDefinition`](crate::ServiceDefinition) never fails.
//! These errors come from the read side: downcasting a target or converting
//! an argument to a concrete Rust value.

use thiserror::Error;

/// Errors raised while reading values out of a definition
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DefinitionError {
    /// Target was downcast to a type it does not hold
    #[error("Service target type mismatch: expected {expected}, found {found}")]
    TargetMismatch {
        expected: &'static str,
        found: &'static str,
    },

    /// Argument was converted to a type its variant does not hold
    #[error("Argument type mismatch: expected {expected}, found {found}")]
    ArgumentMismatch {
        expected: &'static str,
        found: &'static str,
    },
}

impl DefinitionError {
    /// Create a TargetMismatch error for the requested type
    #[inline]
    pub fn target_mismatch<T: 'static>(found: &'static str) -> Self {
        Self::TargetMismatch {
            expected: std::any::type_name::<T>(),
            found,
        }
    }

    /// Create an ArgumentMismatch error
    #[inline]
    pub fn argument_mismatch(expected: &'static str, found: &'static str) -> Self {
        Self::ArgumentMismatch { expected, found }
    }
}

/// Result type alias for definition read operations
pub type Result<T> = std::result::Result<T, DefinitionError>;
