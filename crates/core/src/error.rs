//! Error types for the wavelines core.

use thiserror::Error;

/// Errors produced by CPU-side frame export.
///
/// The GPU pipeline has its own error type under `render`; everything
/// here concerns building pixel buffers and writing snapshots.
#[derive(Debug, Error)]
pub enum BackgroundError {
    /// Width or height was zero when evaluating a frame.
    #[error("invalid dimensions: width and height must be non-zero")]
    InvalidDimensions,

    /// An underlying I/O or encoding failure while writing a snapshot.
    #[error("i/o error: {0}")]
    Io(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_dimensions_displays_readable_message() {
        let err = BackgroundError::InvalidDimensions;
        let msg = format!("{err}");
        assert!(
            msg.contains("width") && msg.contains("height"),
            "expected message mentioning width and height, got: {msg}"
        );
    }

    #[test]
    fn io_error_includes_cause() {
        let err = BackgroundError::Io("disk full".into());
        let msg = format!("{err}");
        assert!(msg.contains("disk full"), "missing cause in: {msg}");
    }

    #[test]
    fn background_error_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<BackgroundError>();
    }

    #[test]
    fn background_error_implements_std_error() {
        fn assert_std_error<T: std::error::Error>() {}
        assert_std_error::<BackgroundError>();
    }
}
