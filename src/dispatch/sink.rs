//! Destinations for dispatch outcomes.

use std::sync::Arc;

use super::DispatchOutcome;

/// Receives exactly one outcome per dispatch attempt.
///
/// Implementations must not block; they are called from the dispatch task.
pub trait OutcomeSink: Send + Sync {
    /// Records an outcome.
    fn emit(&self, outcome: &DispatchOutcome);
}

impl<T: OutcomeSink + ?Sized> OutcomeSink for Arc<T> {
    fn emit(&self, outcome: &DispatchOutcome) {
        (**self).emit(outcome);
    }
}

/// Logs outcomes through `tracing`.
///
/// Successes are logged at `INFO`, failures at `ERROR`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl OutcomeSink for TracingSink {
    fn emit(&self, outcome: &DispatchOutcome) {
        match outcome {
            DispatchOutcome::Success {
                method,
                url,
                status,
                ..
            } => {
                tracing::info!(
                    method = %method,
                    url = %url,
                    status = status.as_u16(),
                    "{outcome}"
                );
            }
            DispatchOutcome::Failure { kind, .. } => {
                tracing::error!(kind = ?kind, "{outcome}");
            }
        }
    }
}
