//! Navigation guard
//!
//! Keeps the mounted top-level stack consistent with the session and app
//! flags. The decision itself is [`sg_core::decide`]; this type only reads
//! the current state, compares with what is mounted and issues a
//! stack-replace when they differ.

use std::sync::{Arc, Mutex, PoisonError};

use sg_core::ports::NavigationHostPort;
use sg_core::{decide, NavigationTarget};
use tracing::{debug, info};

use crate::state::{AppFlagsStore, SessionStore, StateChangeListener};

pub struct NavigationGuard {
    session: Arc<SessionStore>,
    flags: Arc<AppFlagsStore>,
    host: Arc<dyn NavigationHostPort>,
    mounted: Mutex<Option<NavigationTarget>>,
}

impl NavigationGuard {
    pub fn new(
        session: Arc<SessionStore>,
        flags: Arc<AppFlagsStore>,
        host: Arc<dyn NavigationHostPort>,
    ) -> Self {
        Self {
            session,
            flags,
            host,
            mounted: Mutex::new(None),
        }
    }

    /// Create a guard, subscribe it to both stores and route once.
    ///
    /// The stores hold the guard weakly; dropping the returned `Arc`
    /// detaches it.
    pub fn attach(
        session: Arc<SessionStore>,
        flags: Arc<AppFlagsStore>,
        host: Arc<dyn NavigationHostPort>,
    ) -> Arc<Self> {
        let guard = Arc::new(Self::new(session, flags, host));

        let listener: Arc<dyn StateChangeListener> = guard.clone();
        guard.session.register_listener(Arc::downgrade(&listener));
        guard.flags.register_listener(Arc::downgrade(&listener));

        guard.evaluate();
        guard
    }

    /// Target for the state as it is right now.
    pub fn current_target(&self) -> NavigationTarget {
        let session = self.session.current();
        let flags = self.flags.snapshot();
        decide(session.as_ref(), &flags)
    }

    pub fn mounted(&self) -> Option<NavigationTarget> {
        *self.mounted.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Recompute and navigate if needed.
    ///
    /// Returns the new target when a stack-replace was issued. Reading the
    /// state, updating `mounted` and calling the host all happen under the
    /// guard's lock, so concurrent notifications are applied in order and
    /// the last one always reflects the latest state. The host must not
    /// mutate either store from `replace_stack`.
    pub fn evaluate(&self) -> Option<NavigationTarget> {
        let mut mounted = self.mounted.lock().unwrap_or_else(PoisonError::into_inner);

        let target = self.current_target();
        if *mounted == Some(target) {
            debug!(current = ?target, "Navigation unchanged");
            return None;
        }

        let previous = mounted.replace(target);
        info!(from = ?previous, to = ?target, "Replacing navigation stack");
        self.host.replace_stack(target);
        Some(target)
    }
}

impl StateChangeListener for NavigationGuard {
    fn on_state_changed(&self) {
        self.evaluate();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::Utc;
    use sg_core::ports::{AuthBackendPort, PersistentStorePort};
    use sg_core::{Credentials, Failure, Session, TokenPair, UserId, VerificationUpdate};

    mockall::mock! {
        pub Host {}

        impl NavigationHostPort for Host {
            fn replace_stack(&self, target: NavigationTarget);
        }
    }

    struct FixedBackend {
        session: Session,
    }

    #[async_trait]
    impl AuthBackendPort for FixedBackend {
        async fn login(&self, _credentials: &Credentials) -> Result<Session, Failure> {
            Ok(self.session.clone())
        }

        async fn logout(&self, _session: &Session) -> Result<(), Failure> {
            Ok(())
        }

        async fn refresh(&self, _refresh_token: &str) -> Result<TokenPair, Failure> {
            Err(Failure::network("timeout"))
        }
    }

    struct NullStore;

    #[async_trait]
    impl PersistentStorePort for NullStore {
        async fn get(&self, _key: &str) -> anyhow::Result<Option<String>> {
            Ok(None)
        }

        async fn set(&self, _key: &str, _value: &str) -> anyhow::Result<()> {
            Ok(())
        }
    }

    fn stores(email: bool, phone: bool) -> (Arc<SessionStore>, Arc<AppFlagsStore>) {
        let session = Session {
            user_id: UserId::from("usr_1"),
            access_token: "a".into(),
            refresh_token: "r".into(),
            email_verified: email,
            phone_verified: phone,
            created_at: Utc::now(),
        };
        (
            Arc::new(SessionStore::new(Arc::new(FixedBackend { session }))),
            Arc::new(AppFlagsStore::new(Arc::new(NullStore))),
        )
    }

    #[test]
    fn test_attach_routes_once_on_cold_start() {
        let (session, flags) = stores(true, true);
        let mut host = MockHost::new();
        host.expect_replace_stack()
            .withf(|t| *t == NavigationTarget::Auth)
            .times(1)
            .return_const(());

        let guard = NavigationGuard::attach(session, flags, Arc::new(host));

        assert_eq!(guard.mounted(), Some(NavigationTarget::Auth));
    }

    #[test]
    fn test_evaluate_is_idempotent() {
        let (session, flags) = stores(true, true);
        let mut host = MockHost::new();
        host.expect_replace_stack().times(1).return_const(());

        let guard = NavigationGuard::attach(session, flags, Arc::new(host));

        assert_eq!(guard.evaluate(), None);
        assert_eq!(guard.evaluate(), None);
    }

    #[tokio::test]
    async fn test_verification_then_onboarding_issues_one_command_per_transition() {
        let (session, flags) = stores(true, false);
        let mut host = MockHost::new();
        let mut seq = mockall::Sequence::new();
        for target in [
            NavigationTarget::Auth,
            NavigationTarget::Verification,
            NavigationTarget::Onboarding,
        ] {
            host.expect_replace_stack()
                .withf(move |t| *t == target)
                .times(1)
                .in_sequence(&mut seq)
                .return_const(());
        }

        let guard = NavigationGuard::attach(session.clone(), flags.clone(), Arc::new(host));
        session.login(&Credentials::new("u", "p")).await.unwrap();
        assert_eq!(guard.mounted(), Some(NavigationTarget::Verification));

        session
            .update_verification(VerificationUpdate::phone_verified())
            .unwrap();
        assert_eq!(guard.mounted(), Some(NavigationTarget::Onboarding));

        // Unrelated flag churn must not re-navigate
        flags.set_loading(true);
        flags.set_loading(false);
    }

    #[tokio::test]
    async fn test_dropped_guard_stops_navigating() {
        let (session, flags) = stores(true, true);
        let mut host = MockHost::new();
        host.expect_replace_stack().times(1).return_const(());

        let guard = NavigationGuard::attach(session.clone(), flags, Arc::new(host));
        drop(guard);

        session.login(&Credentials::new("u", "p")).await.unwrap();
    }

    #[derive(Default)]
    struct RecordingHost {
        stacks: Mutex<Vec<NavigationTarget>>,
    }

    impl NavigationHostPort for RecordingHost {
        fn replace_stack(&self, target: NavigationTarget) {
            self.stacks.lock().unwrap().push(target);
        }
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_changes_settle_on_latest_state() {
        let (session, flags) = stores(true, true);
        let host = Arc::new(RecordingHost::default());
        let guard = NavigationGuard::attach(session.clone(), flags, host.clone());

        let mut tasks = Vec::new();
        for worker in 0..8 {
            let session = session.clone();
            tasks.push(tokio::spawn(async move {
                for _ in 0..50 {
                    if worker % 2 == 0 {
                        let _ = session.login(&Credentials::new("u", "p")).await;
                    } else {
                        session.logout().await;
                    }
                    tokio::task::yield_now().await;
                }
            }));
        }
        for task in tasks {
            task.await.unwrap();
        }

        let expected = guard.current_target();
        assert_eq!(guard.mounted(), Some(expected));
        assert_eq!(host.stacks.lock().unwrap().last(), Some(&expected));
    }
}
