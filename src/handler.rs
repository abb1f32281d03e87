//! Error-reporting hook.
//!
//! Fallible code does not abort directly. It asks its [`ErrorReporter`]
//! to [`fail`](ErrorReporter::fail), which hands the return code and
//! message to the configured [`ErrorHandler`] and then yields a
//! [`SpsparseError::Fatal`] for the caller to propagate with `?`.
//! A host application redirects failures into its own reporting system
//! by injecting a handler, or by installing a process-wide default once
//! at startup.

use std::fmt;
use std::sync::{Arc, OnceLock};

use crate::error::{SpsparseError, ValidationError};

/// Receives fatal conditions raised by library code.
pub trait ErrorHandler: Send + Sync {
    /// Called once per fatal condition, before the error is returned.
    fn handle(&self, retcode: i32, message: &str);
}

impl<F> ErrorHandler for F
where
    F: Fn(i32, &str) + Send + Sync,
{
    fn handle(&self, retcode: i32, message: &str) {
        self(retcode, message);
    }
}

/// Logs the failure through `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultErrorHandler;

impl ErrorHandler for DefaultErrorHandler {
    fn handle(&self, retcode: i32, message: &str) {
        tracing::error!(retcode, "spsparse fatal error: {message}");
    }
}

static DEFAULT_HANDLER: OnceLock<Arc<dyn ErrorHandler>> = OnceLock::new();

/// Installs the handler used by every `ErrorReporter::default()` created
/// afterwards.
///
/// May succeed at most once per process; call it during startup before
/// worker threads create reporters.
///
/// # Errors
///
/// Returns `ValidationError::HandlerAlreadyInstalled` if a default was
/// already installed.
pub fn install_default_handler<H>(handler: H) -> Result<(), ValidationError>
where
    H: ErrorHandler + 'static,
{
    DEFAULT_HANDLER
        .set(Arc::new(handler))
        .map_err(|_| ValidationError::HandlerAlreadyInstalled)?;
    tracing::debug!("installed process-wide spsparse error handler");
    Ok(())
}

fn default_handler() -> Arc<dyn ErrorHandler> {
    DEFAULT_HANDLER
        .get()
        .cloned()
        .unwrap_or_else(|| Arc::new(DefaultErrorHandler))
}

/// Handle to the error hook, held by each component that can fail.
#[derive(Clone)]
pub struct ErrorReporter {
    handler: Arc<dyn ErrorHandler>,
}

impl ErrorReporter {
    /// Creates a reporter that forwards to `handler`.
    #[must_use]
    pub fn new<H>(handler: H) -> Self
    where
        H: ErrorHandler + 'static,
    {
        Self {
            handler: Arc::new(handler),
        }
    }

    /// Creates a reporter sharing an existing handler.
    #[must_use]
    pub fn from_arc(handler: Arc<dyn ErrorHandler>) -> Self {
        Self { handler }
    }

    /// Replaces the handler. The previous handler is not called again
    /// through this reporter.
    #[must_use]
    pub fn with_handler<H>(mut self, handler: H) -> Self
    where
        H: ErrorHandler + 'static,
    {
        tracing::debug!("replacing spsparse error handler");
        self.handler = Arc::new(handler);
        self
    }

    /// Reports a fatal condition and returns the error to propagate.
    #[must_use]
    pub fn fail(&self, retcode: i32, message: impl Into<String>) -> SpsparseError {
        let message = message.into();
        self.handler.handle(retcode, &message);
        SpsparseError::Fatal { retcode, message }
    }

    /// Reports an existing error through the hook and passes it on.
    #[must_use]
    pub fn report(&self, err: SpsparseError) -> SpsparseError {
        self.handler.handle(err.retcode(), &err.to_string());
        err
    }
}

impl Default for ErrorReporter {
    fn default() -> Self {
        Self::from_arc(default_handler())
    }
}

impl fmt::Debug for ErrorReporter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ErrorReporter").finish_non_exhaustive()
    }
}
