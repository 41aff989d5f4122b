use std::future::Future;
use std::sync::Arc;

use sg_core::ports::ConnectivityProbePort;
use sg_core::{classify, ErrorReport, Failure};
use tokio_util::sync::CancellationToken;
use tracing::warn;

use crate::state::AppFlagsStore;

/// How a classified call ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallOutcome<T> {
    Completed(T),
    /// Classified and stored as `last_error`.
    Failed(ErrorReport),
    /// The caller's scope was cancelled first; nothing was recorded.
    Abandoned,
}

impl<T> CallOutcome<T> {
    pub fn completed(self) -> Option<T> {
        match self {
            CallOutcome::Completed(value) => Some(value),
            _ => None,
        }
    }

    /// Whether offering a retry makes sense.
    pub fn can_retry(&self) -> bool {
        matches!(self, CallOutcome::Failed(report) if report.retryable())
    }
}

/// Wraps an arbitrary backend call with the loading flag and the
/// classifier. Never retries on its own.
pub struct RunClassified {
    flags: Arc<AppFlagsStore>,
    connectivity: Arc<dyn ConnectivityProbePort>,
}

impl RunClassified {
    pub fn new(flags: Arc<AppFlagsStore>, connectivity: Arc<dyn ConnectivityProbePort>) -> Self {
        Self {
            flags,
            connectivity,
        }
    }

    pub async fn execute<T, F>(&self, call: F, scope: &CancellationToken) -> CallOutcome<T>
    where
        F: Future<Output = Result<T, Failure>>,
    {
        if scope.is_cancelled() {
            return CallOutcome::Abandoned;
        }

        let _loading = self.flags.begin_loading();

        let result = tokio::select! {
            biased;
            _ = scope.cancelled() => return CallOutcome::Abandoned,
            result = call => result,
        };

        match result {
            Ok(value) => {
                self.flags.clear_error();
                CallOutcome::Completed(value)
            }
            Err(failure) => {
                let report = classify(&failure, self.connectivity.as_ref());
                warn!(kind = %report.kind(), error = %failure, "Backend call failed");
                self.flags.set_error(report.clone());
                CallOutcome::Failed(report)
            }
        }
    }
}
