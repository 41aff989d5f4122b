//! Session domain model
//!
//! A [`Session`] is the authenticated identity held by the client together
//! with its verification status. It is created by a successful login,
//! refreshed in place by a token refresh and destroyed by logout.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::Failure;
use crate::ids::UserId;

/// Authenticated identity and verification status.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user_id: UserId,
    pub access_token: String,
    pub refresh_token: String,
    pub email_verified: bool,
    pub phone_verified: bool,
    pub created_at: DateTime<Utc>,
}

impl Session {
    /// Both contact channels confirmed.
    pub fn is_verified(&self) -> bool {
        self.email_verified && self.phone_verified
    }

    pub fn tokens(&self) -> TokenPair {
        TokenPair {
            access_token: self.access_token.clone(),
            refresh_token: self.refresh_token.clone(),
        }
    }

    /// Same identity and verification flags, new token pair.
    pub fn with_tokens(&self, tokens: TokenPair) -> Self {
        Self {
            access_token: tokens.access_token,
            refresh_token: tokens.refresh_token,
            ..self.clone()
        }
    }

    pub fn with_verification(&self, update: VerificationUpdate) -> Self {
        Self {
            email_verified: update.email.unwrap_or(self.email_verified),
            phone_verified: update.phone.unwrap_or(self.phone_verified),
            ..self.clone()
        }
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("user_id", &self.user_id)
            .field("access_token", &"<redacted>")
            .field("refresh_token", &"<redacted>")
            .field("email_verified", &self.email_verified)
            .field("phone_verified", &self.phone_verified)
            .field("created_at", &self.created_at)
            .finish()
    }
}

/// The unit replaced by a token refresh.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

impl fmt::Debug for TokenPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenPair").finish_non_exhaustive()
    }
}

/// Login credentials as typed by the user.
#[derive(Clone, Serialize, Deserialize)]
pub struct Credentials {
    /// Email address or phone number.
    pub identifier: String,
    pub password: String,
}

impl Credentials {
    pub fn new(identifier: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("identifier", &self.identifier)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Partial change of the verification flags. `None` leaves a flag as is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VerificationUpdate {
    pub email: Option<bool>,
    pub phone: Option<bool>,
}

impl VerificationUpdate {
    pub fn email_verified() -> Self {
        Self {
            email: Some(true),
            phone: None,
        }
    }

    pub fn phone_verified() -> Self {
        Self {
            email: None,
            phone: Some(true),
        }
    }
}

/// Why a session operation produced no new session.
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    /// The backend refused or the call failed. Carries the raw failure for
    /// the classifier.
    #[error("authentication rejected: {0}")]
    Rejected(Failure),

    #[error("no active session")]
    NoSession,

    /// A newer login/logout happened while the call was in flight, or the
    /// caller's scope went away. The result was discarded.
    #[error("response superseded by a newer session change")]
    Superseded,
}

impl AuthError {
    pub fn failure(&self) -> Option<&Failure> {
        match self {
            AuthError::Rejected(failure) => Some(failure),
            _ => None,
        }
    }
}
