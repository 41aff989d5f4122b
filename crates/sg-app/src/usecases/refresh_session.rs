use std::sync::Arc;

use sg_core::ports::ConnectivityProbePort;
use sg_core::{classify, AuthError, Session};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info_span, warn, Instrument};

use crate::state::{AppFlagsStore, SessionStore};

/// Use case for refreshing the token pair of the live session.
///
/// Runs in the background: it does not raise the loading flag, and a
/// failure is recorded in `last_error` without signing the user out.
pub struct RefreshSession {
    session: Arc<SessionStore>,
    flags: Arc<AppFlagsStore>,
    connectivity: Arc<dyn ConnectivityProbePort>,
}

impl RefreshSession {
    pub fn new(
        session: Arc<SessionStore>,
        flags: Arc<AppFlagsStore>,
        connectivity: Arc<dyn ConnectivityProbePort>,
    ) -> Self {
        Self {
            session,
            flags,
            connectivity,
        }
    }

    pub async fn execute(&self, scope: &CancellationToken) -> Result<Session, AuthError> {
        let span = info_span!("usecase.refresh_session.execute");

        async {
            let refresh_token = self
                .session
                .current()
                .map(|s| s.refresh_token)
                .ok_or(AuthError::NoSession)?;

            let outcome = tokio::select! {
                biased;
                _ = scope.cancelled() => return Err(AuthError::Superseded),
                outcome = self.session.refresh(&refresh_token) => outcome,
            };

            match &outcome {
                Err(AuthError::Rejected(failure)) => {
                    let report = classify(failure, self.connectivity.as_ref());
                    warn!(kind = %report.kind(), "Token refresh failed");
                    self.flags.set_error(report);
                }
                Err(AuthError::Superseded) => debug!("Token refresh superseded"),
                _ => {}
            }

            outcome
        }
        .instrument(span)
        .await
    }
}
