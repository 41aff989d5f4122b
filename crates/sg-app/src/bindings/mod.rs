//! UI bindings
//!
//! What screen components read and call. Each `use_*` returns a snapshot
//! of the current values together with the actions that change them.

use std::sync::Arc;

use sg_core::ports::ConnectivityProbePort;
use sg_core::{classify_message, AuthError, Credentials, ErrorReport, Failure, Session};
use tokio_util::sync::CancellationToken;

use crate::app::App;
use crate::state::{AppFlagsStore, PersistError, SessionStore};
use crate::usecases::{SignIn, SignOut};

#[derive(Clone)]
pub struct UiBindings {
    session: Arc<SessionStore>,
    flags: Arc<AppFlagsStore>,
    connectivity: Arc<dyn ConnectivityProbePort>,
    sign_in: Arc<SignIn>,
    sign_out: Arc<SignOut>,
}

impl UiBindings {
    pub fn new(app: &App) -> Self {
        Self {
            session: app.session.clone(),
            flags: app.flags.clone(),
            connectivity: app.connectivity.clone(),
            sign_in: Arc::new(app.sign_in()),
            sign_out: Arc::new(app.sign_out()),
        }
    }

    pub fn use_session(&self) -> SessionBinding {
        let session = self.session.current();
        SessionBinding {
            is_authenticated: session.is_some(),
            session,
            sign_in: self.sign_in.clone(),
            sign_out: self.sign_out.clone(),
        }
    }

    pub fn use_app_flags(&self) -> AppFlagsBinding {
        let flags = self.flags.snapshot();
        AppFlagsBinding {
            is_loading: flags.is_loading,
            last_error: flags.last_error,
            is_onboarded: flags.is_onboarded,
            store: self.flags.clone(),
        }
    }

    /// Display string for a failure, for components that show it inline.
    pub fn classify(&self, failure: &Failure) -> String {
        classify_message(failure, self.connectivity.as_ref())
    }
}

pub struct SessionBinding {
    pub session: Option<Session>,
    pub is_authenticated: bool,
    sign_in: Arc<SignIn>,
    sign_out: Arc<SignOut>,
}

impl SessionBinding {
    pub async fn login(
        &self,
        credentials: Credentials,
        scope: &CancellationToken,
    ) -> Result<Session, AuthError> {
        self.sign_in.execute(credentials, scope).await
    }

    pub async fn logout(&self) {
        self.sign_out.execute().await
    }
}

pub struct AppFlagsBinding {
    pub is_loading: bool,
    pub last_error: Option<ErrorReport>,
    pub is_onboarded: bool,
    store: Arc<AppFlagsStore>,
}

impl AppFlagsBinding {
    pub async fn set_is_onboarded(&self, is_onboarded: bool) -> Result<(), PersistError> {
        self.store.set_is_onboarded(is_onboarded).await
    }
}
