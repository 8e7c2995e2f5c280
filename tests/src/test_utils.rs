//! Test utility functions for integration tests
//!
//! Provides common utilities for test setup, logging, and assertions.

use radiocfg_common::{Error, LogLevel, ValidationError};
use tracing_subscriber::{fmt, EnvFilter};

/// Result type for integration tests
pub type TestResult<T = ()> = Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Route radiocfg debug events to the test harness output.
///
/// `RUST_LOG` overrides the default [`LogLevel::Debug`] directives. Only the
/// first call in a test binary installs the subscriber.
pub fn init_test_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(LogLevel::Debug.directives()));

    let _ = fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}

/// Assert that a decode result failed validation at the given field path.
///
/// Returns the validation error for further inspection.
pub fn assert_rejected_at<T: std::fmt::Debug>(
    result: Result<T, Error>,
    field: &str,
) -> ValidationError {
    match result {
        Err(Error::Validation(e)) => {
            assert_eq!(e.field, field, "unexpected field in {e}");
            e
        }
        other => panic!("expected validation error at {field}, got {other:?}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assert_rejected_at() {
        let result: Result<(), Error> =
            Err(ValidationError::out_of_range("tac", 16777216, 0, 16777215).into());
        let err = assert_rejected_at(result, "tac");
        assert_eq!(err.field, "tac");
    }

    #[test]
    #[should_panic(expected = "expected validation error")]
    fn test_assert_rejected_at_on_success() {
        let result: Result<(), Error> = Ok(());
        assert_rejected_at(result, "tac");
    }
}
