//! Session store
//!
//! The single authoritative record of who is logged in and how verified
//! they are. Every mutation replaces the whole value inside a `watch`
//! channel, so readers never observe a half-updated session, and then
//! notifies the registered listeners synchronously.

use std::sync::{Arc, Weak};

use sg_core::ports::AuthBackendPort;
use sg_core::{AuthError, Credentials, Session, VerificationUpdate};
use tokio::sync::watch;
use tracing::{debug, info, warn};

use super::listeners::{ChangeListeners, StateChangeListener};

/// Session value plus the identity epoch it belongs to.
///
/// The epoch increases on every login and logout. In-flight calls compare
/// the epoch they were issued under with the current one and drop their
/// result when it moved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub epoch: u64,
    pub session: Option<Session>,
}

pub struct SessionStore {
    backend: Arc<dyn AuthBackendPort>,
    state: watch::Sender<SessionSnapshot>,
    listeners: ChangeListeners,
}

impl SessionStore {
    pub fn new(backend: Arc<dyn AuthBackendPort>) -> Self {
        let (state, _) = watch::channel(SessionSnapshot::default());
        Self {
            backend,
            state,
            listeners: ChangeListeners::default(),
        }
    }

    pub fn current(&self) -> Option<Session> {
        self.state.borrow().session.clone()
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        self.state.borrow().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.borrow().session.is_some()
    }

    pub fn subscribe(&self) -> watch::Receiver<SessionSnapshot> {
        self.state.subscribe()
    }

    pub fn register_listener(&self, listener: Weak<dyn StateChangeListener>) {
        self.listeners.register(listener);
    }

    /// Sign in. On failure the current session, if any, is kept.
    pub async fn login(&self, credentials: &Credentials) -> Result<Session, AuthError> {
        let issued_epoch = self.state.borrow().epoch;

        let session = match self.backend.login(credentials).await {
            Ok(session) => session,
            Err(failure) => {
                if self.state.borrow().epoch != issued_epoch {
                    debug!(error = %failure, "Discarding login failure issued before a newer session change");
                    return Err(AuthError::Superseded);
                }
                return Err(AuthError::Rejected(failure));
            }
        };

        let mut applied = false;
        self.state.send_if_modified(|slot| {
            if slot.epoch != issued_epoch {
                return false;
            }
            slot.epoch += 1;
            slot.session = Some(session.clone());
            applied = true;
            true
        });

        if !applied {
            debug!(user_id = %session.user_id, "Discarding login result issued before a newer session change");
            return Err(AuthError::Superseded);
        }

        info!(user_id = %session.user_id, "Session established");
        self.listeners.notify();
        Ok(session)
    }

    /// Clear the session, then revoke it remotely on a best-effort basis.
    ///
    /// The local session is gone before the backend is contacted; a failed
    /// revocation is logged and otherwise ignored.
    pub async fn logout(&self) {
        let mut previous = None;
        self.state.send_modify(|slot| {
            slot.epoch += 1;
            previous = slot.session.take();
        });
        self.listeners.notify();

        let Some(session) = previous else {
            return;
        };
        info!(user_id = %session.user_id, "Session cleared");

        if let Err(failure) = self.backend.logout(&session).await {
            warn!(
                user_id = %session.user_id,
                error = %failure,
                "Backend sign-out failed; local session already cleared"
            );
        }
    }

    /// Replace the token pair of the live session.
    ///
    /// Identity and verification flags are untouched. The result is dropped
    /// if a login or logout happened while the call was in flight.
    pub async fn refresh(&self, refresh_token: &str) -> Result<Session, AuthError> {
        let issued_epoch = {
            let slot = self.state.borrow();
            if slot.session.is_none() {
                return Err(AuthError::NoSession);
            }
            slot.epoch
        };

        let tokens = match self.backend.refresh(refresh_token).await {
            Ok(tokens) => tokens,
            Err(failure) => {
                let slot = self.state.borrow();
                if slot.epoch != issued_epoch || slot.session.is_none() {
                    debug!(error = %failure, "Discarding stale refresh failure");
                    return Err(AuthError::Superseded);
                }
                return Err(AuthError::Rejected(failure));
            }
        };

        let mut refreshed = None;
        self.state.send_if_modified(|slot| {
            if slot.epoch != issued_epoch {
                return false;
            }
            let Some(current) = slot.session.as_ref() else {
                return false;
            };
            let next = current.with_tokens(tokens);
            slot.session = Some(next.clone());
            refreshed = Some(next);
            true
        });

        match refreshed {
            Some(session) => {
                debug!(user_id = %session.user_id, "Session tokens refreshed");
                self.listeners.notify();
                Ok(session)
            }
            None => {
                debug!("Discarding stale refresh result");
                Err(AuthError::Superseded)
            }
        }
    }

    /// Apply a verification change to the live session.
    ///
    /// Listeners are only notified when a flag actually flipped.
    pub fn update_verification(&self, update: VerificationUpdate) -> Result<Session, AuthError> {
        let mut updated = None;
        let changed = self.state.send_if_modified(|slot| {
            let Some(current) = slot.session.as_ref() else {
                return false;
            };
            let next = current.with_verification(update);
            let changed = &next != current;
            slot.session = Some(next.clone());
            updated = Some(next);
            changed
        });

        let session = updated.ok_or(AuthError::NoSession)?;
        if !changed {
            return Ok(session);
        }
        info!(
            user_id = %session.user_id,
            email_verified = session.email_verified,
            phone_verified = session.phone_verified,
            "Verification status updated"
        );
        self.listeners.notify();
        Ok(session)
    }
}
