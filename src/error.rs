use thiserror::Error;

use crate::registry::CallbackError;

/// Errors surfaced by [`Mediator::invoke`](crate::Mediator::invoke).
///
/// Dispatch is fail-fast: the first failing callback aborts the whole
/// dispatch, remaining callbacks are never invoked, and no merged result is
/// produced. Partial results from a broken callback chain are considered
/// unsafe to return.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// A callback failed during dispatch.
    #[error("callback {index} for event '{event}' failed: {source}")]
    CallbackFailed {
        /// Name of the event being dispatched.
        event: String,
        /// Zero-based registration position of the failing callback.
        index: usize,
        /// The originating failure, chained via `Error::source`.
        #[source]
        source: CallbackError,
    },
}

impl DispatchError {
    /// Name of the event whose dispatch failed.
    pub fn event(&self) -> &str {
        match self {
            DispatchError::CallbackFailed { event, .. } => event,
        }
    }
}
