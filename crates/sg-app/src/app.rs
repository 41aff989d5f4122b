//! Application runtime assembly

use std::sync::Arc;

use sg_core::ports::ConnectivityProbePort;
use tracing::{info, info_span, Instrument};

use crate::bindings::UiBindings;
use crate::deps::AppDeps;
use crate::navigation::NavigationGuard;
use crate::state::{AppFlagsStore, SessionStore};
use crate::usecases::{
    CompleteOnboarding, RefreshSession, RunClassified, SignIn, SignOut,
};

/// The running session-gating layer: stores, guard and use cases wired
/// together.
pub struct App {
    pub session: Arc<SessionStore>,
    pub flags: Arc<AppFlagsStore>,
    pub guard: Arc<NavigationGuard>,
    pub connectivity: Arc<dyn ConnectivityProbePort>,
}

impl App {
    /// Restore persisted flags, create the stores and attach the guard.
    ///
    /// This constructor signature IS the dependency manifest.
    pub async fn start(deps: AppDeps) -> Self {
        let span = info_span!("app.start");

        async {
            let AppDeps {
                auth_backend,
                connectivity,
                persistent_store,
                navigation_host,
            } = deps;

            let session = Arc::new(SessionStore::new(auth_backend));
            let flags = Arc::new(AppFlagsStore::restore(persistent_store).await);
            let guard = NavigationGuard::attach(session.clone(), flags.clone(), navigation_host);

            info!(target_stack = ?guard.mounted(), "Session gating ready");

            Self {
                session,
                flags,
                guard,
                connectivity,
            }
        }
        .instrument(span)
        .await
    }

    pub fn sign_in(&self) -> SignIn {
        SignIn::new(
            self.session.clone(),
            self.flags.clone(),
            self.connectivity.clone(),
        )
    }

    pub fn sign_out(&self) -> SignOut {
        SignOut::new(self.session.clone(), self.flags.clone())
    }

    pub fn refresh_session(&self) -> RefreshSession {
        RefreshSession::new(
            self.session.clone(),
            self.flags.clone(),
            self.connectivity.clone(),
        )
    }

    pub fn complete_onboarding(&self) -> CompleteOnboarding {
        CompleteOnboarding::new(self.flags.clone())
    }

    pub fn run_classified(&self) -> RunClassified {
        RunClassified::new(self.flags.clone(), self.connectivity.clone())
    }

    pub fn bindings(&self) -> UiBindings {
        UiBindings::new(self)
    }
}
