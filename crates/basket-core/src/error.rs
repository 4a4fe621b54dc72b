//! # Error Types
//!
//! Domain-specific error types for basket-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  basket-core errors (this file)                                        │
//! │  └── CoreError        - General domain errors                          │
//! │                                                                         │
//! │  Flow: io::Error → CoreError → demo binary (Box<dyn Error>)            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Cart mutations cannot fail: removing an absent line, or removing zero
//! units, is a no-op. The error surface is limited to failed writes of a
//! cart listing.

use std::io;

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core cart errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Writing a cart listing to its destination failed.
    #[error("Failed to write cart listing: {0}")]
    Output(#[from] io::Error),
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_converts_to_core_error() {
        let io_err = io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed");
        let core_err: CoreError = io_err.into();
        assert!(matches!(core_err, CoreError::Output(_)));
        assert_eq!(
            core_err.to_string(),
            "Failed to write cart listing: pipe closed"
        );
    }
}
