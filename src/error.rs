//! Error types for telemetry processing.
//!
//! Errors in this crate exist only at the page-decode boundary: turning a raw
//! byte region into a typed page can fail when the region is too small or the
//! layout disagrees with the producer contract. Everything above that
//! boundary degrades to documented default values instead of erroring: the
//! category adapters in [`crate::data`] never return a `Result`, because the
//! surrounding display layer polls at high frequency and must never stall on
//! transient data unavailability.
//!
//! ## Recovery and Retry
//!
//! Errors classify themselves as retryable or not:
//!
//! ```rust
//! use paddock::TelemetryError;
//!
//! let error = TelemetryError::attach_failed("simulation not running");
//! if error.is_retryable() {
//!     println!("Can retry this operation");
//! }
//! ```

use std::time::Duration;
use thiserror::Error;

/// Result type alias for telemetry operations.
pub type Result<T, E = TelemetryError> = std::result::Result<T, E>;

/// Main error type for telemetry operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum TelemetryError {
    #[error("Failed to attach to simulation: {reason}")]
    Attach {
        reason: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("Memory region too small: need {needed} bytes, have {available}")]
    Memory { needed: usize, available: usize },

    #[error("Layout error in {context}: {details}")]
    Layout { context: String, details: String },

    #[error("Operation timed out after {duration:?}")]
    Timeout { duration: Duration },
}

impl TelemetryError {
    /// Returns whether this error is potentially recoverable through retry.
    ///
    /// Attach failures and timeouts are transient (the producer process may
    /// simply not be running yet); memory and layout errors indicate a
    /// contract mismatch that retrying will not fix.
    pub fn is_retryable(&self) -> bool {
        match self {
            TelemetryError::Attach { .. } => true,
            TelemetryError::Timeout { .. } => true,
            TelemetryError::Memory { .. } => false,
            TelemetryError::Layout { .. } => false,
        }
    }

    /// Helper constructor for attach failures.
    pub fn attach_failed(reason: impl Into<String>) -> Self {
        TelemetryError::Attach { reason: reason.into(), source: None }
    }

    /// Helper constructor for attach failures with an underlying source.
    pub fn attach_failed_with_source(
        reason: impl Into<String>,
        source: Box<dyn std::error::Error + Send + Sync>,
    ) -> Self {
        TelemetryError::Attach { reason: reason.into(), source: Some(source) }
    }

    /// Helper constructor for undersized memory regions.
    pub fn memory_too_small(needed: usize, available: usize) -> Self {
        TelemetryError::Memory { needed, available }
    }

    /// Helper constructor for layout mismatches.
    pub fn layout_error(context: impl Into<String>, details: impl Into<String>) -> Self {
        TelemetryError::Layout { context: context.into(), details: details.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn error_constructors_validation() {
        let attach = TelemetryError::attach_failed("test");
        assert!(matches!(attach, TelemetryError::Attach { .. }));

        let memory = TelemetryError::memory_too_small(1024, 16);
        assert!(matches!(memory, TelemetryError::Memory { .. }));

        let layout = TelemetryError::layout_error("scoring page", "bad vehicle count");
        assert!(matches!(layout, TelemetryError::Layout { .. }));
    }

    #[test]
    fn error_traits_validation() {
        // Compile-time check: TelemetryError must be Send + Sync + 'static
        fn assert_send_sync_static<T: Send + Sync + 'static>() {}
        assert_send_sync_static::<TelemetryError>();

        let error = TelemetryError::attach_failed("test");
        let _: &dyn std::error::Error = &error;
    }

    #[test]
    fn retryability_classification() {
        assert!(TelemetryError::attach_failed("test").is_retryable());
        assert!(TelemetryError::Timeout { duration: Duration::from_secs(1) }.is_retryable());
        assert!(!TelemetryError::memory_too_small(100, 10).is_retryable());
        assert!(!TelemetryError::layout_error("x", "y").is_retryable());
    }

    proptest! {
        #[test]
        fn error_messages_contain_their_context(
            reason in "[a-zA-Z0-9 ]*",
            needed in 1usize..0x10000,
            available in 0usize..0x10000,
            details in "[a-zA-Z0-9 ]*"
        ) {
            let attach = TelemetryError::attach_failed(reason.clone());
            prop_assert!(attach.to_string().contains(&reason));

            let memory = TelemetryError::memory_too_small(needed, available);
            prop_assert!(memory.to_string().contains(&needed.to_string()));
            prop_assert!(memory.to_string().contains(&available.to_string()));

            let layout = TelemetryError::layout_error("page", details.clone());
            prop_assert!(layout.to_string().contains(&details));
        }

        #[test]
        fn source_chain_is_traversable(base in "[a-zA-Z0-9 ]+") {
            let inner: Box<dyn std::error::Error + Send + Sync> =
                Box::new(std::io::Error::other(base.clone()));
            let top = TelemetryError::attach_failed_with_source("top level", inner);

            let source = std::error::Error::source(&top);
            prop_assert!(source.is_some());
            prop_assert!(source.unwrap().to_string().contains(&base));
        }
    }
}
