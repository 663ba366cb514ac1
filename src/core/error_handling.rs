//! Generic error handling utilities
//!
//! Provides unified fatal-error reporting across the error types of the
//! different subsystems.

/// Trait for errors that can distinguish between user-actionable and system errors
///
/// When `is_user_actionable()` returns `true`, `user_message()` should return
/// `Some(message)` with a message the user can act on (fix the manifest, pick
/// another output path, ...). System errors return `None` and are reported
/// through the operation context instead.
pub trait ContextualError: std::error::Error {
    /// Returns true if this error carries a message that should be shown as is
    fn is_user_actionable(&self) -> bool;

    /// Returns the specific user message if this is a user-actionable error
    fn user_message(&self) -> Option<String>;
}

/// Log errors with appropriate detail level based on error specificity
///
/// User-actionable errors log their own message, everything else logs the
/// given operation context. The full error chain is always available at debug
/// level.
pub fn log_error_with_context<E: ContextualError + std::fmt::Display + std::fmt::Debug>(
    error: &E,
    operation_context: &str,
) {
    match error.user_message() {
        Some(user_msg) if error.is_user_actionable() => log::error!("FATAL: {}", user_msg),
        _ => log::error!("FATAL: {}", operation_context),
    }

    let mut source = std::error::Error::source(error);
    while let Some(cause) = source {
        log::debug!("CAUSED BY: {}", cause);
        source = cause.source();
    }
    log::debug!("DEBUG_DETAILS: {:?}", error);
}
