use std::sync::Arc;

use tracing::{info_span, Instrument};

use crate::state::{AppFlagsStore, SessionStore};

/// Use case for signing out. Never fails: the local session is always
/// cleared, remote revocation is best effort.
pub struct SignOut {
    session: Arc<SessionStore>,
    flags: Arc<AppFlagsStore>,
}

impl SignOut {
    pub fn new(session: Arc<SessionStore>, flags: Arc<AppFlagsStore>) -> Self {
        Self { session, flags }
    }

    pub async fn execute(&self) {
        let span = info_span!("usecase.sign_out.execute");

        async {
            self.session.logout().await;
            self.flags.clear_error();
        }
        .instrument(span)
        .await
    }
}
