use std::sync::Arc;

use sg_core::ports::ConnectivityProbePort;
use sg_core::{classify, AuthError, Credentials, Session};
use tokio_util::sync::CancellationToken;
use tracing::{info, info_span, warn, Instrument};

use crate::state::{AppFlagsStore, SessionStore};

/// Use case for signing in from the auth screen.
pub struct SignIn {
    session: Arc<SessionStore>,
    flags: Arc<AppFlagsStore>,
    connectivity: Arc<dyn ConnectivityProbePort>,
}

impl SignIn {
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

    /// Sign in, recording a classified error on failure.
    ///
    /// If `scope` is cancelled before the backend answers, the call is
    /// abandoned and reported as [`AuthError::Superseded`]; neither the
    /// session nor `last_error` changes.
    pub async fn execute(
        &self,
        credentials: Credentials,
        scope: &CancellationToken,
    ) -> Result<Session, AuthError> {
        let span = info_span!("usecase.sign_in.execute", identifier = %credentials.identifier);

        async {
            if scope.is_cancelled() {
                return Err(AuthError::Superseded);
            }

            let _loading = self.flags.begin_loading();

            let outcome = tokio::select! {
                biased;
                _ = scope.cancelled() => {
                    info!("Sign-in abandoned: caller went away");
                    return Err(AuthError::Superseded);
                }
                outcome = self.session.login(&credentials) => outcome,
            };

            match &outcome {
                Ok(_) => self.flags.clear_error(),
                Err(AuthError::Rejected(failure)) => {
                    let report = classify(failure, self.connectivity.as_ref());
                    warn!(kind = %report.kind(), "Sign-in failed");
                    self.flags.set_error(report);
                }
                Err(_) => {}
            }

            outcome
        }
        .instrument(span)
        .await
    }
}
