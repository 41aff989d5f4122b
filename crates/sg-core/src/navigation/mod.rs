//! Navigation decision
//!
//! Pure mapping from (session, flags) to the top-level stack the UI must
//! show. No IO, no caching: callers recompute on every state change.

use serde::{Deserialize, Serialize};

use crate::flags::AppFlags;
use crate::session::Session;

/// Top-level navigation stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NavigationTarget {
    /// Sign in / sign up.
    Auth,
    /// Email and phone confirmation.
    Verification,
    /// First-run walkthrough.
    Onboarding,
    /// Main application.
    Dashboard,
}

/// Decide which stack is allowed for the given state.
///
/// Total and mutually exclusive: every input maps to exactly one target.
pub fn decide(session: Option<&Session>, flags: &AppFlags) -> NavigationTarget {
    match session {
        None => NavigationTarget::Auth,
        Some(session) if !session.is_verified() => NavigationTarget::Verification,
        Some(_) if !flags.is_onboarded => NavigationTarget::Onboarding,
        Some(_) => NavigationTarget::Dashboard,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{classify_with, Failure};
    use crate::ids::UserId;
    use chrono::Utc;

    fn session(email: bool, phone: bool) -> Session {
        Session {
            user_id: UserId::from("usr_1"),
            access_token: "a".into(),
            refresh_token: "r".into(),
            email_verified: email,
            phone_verified: phone,
            created_at: Utc::now(),
        }
    }

    fn all_flags() -> Vec<AppFlags> {
        let mut out = Vec::new();
        for is_loading in [false, true] {
            for is_onboarded in [false, true] {
                for last_error in [None, Some(classify_with(&Failure::message("x"), true))] {
                    out.push(AppFlags {
                        is_loading,
                        last_error,
                        is_onboarded,
                    });
                }
            }
        }
        out
    }

    #[test]
    fn test_no_session_is_always_auth() {
        for flags in all_flags() {
            assert_eq!(decide(None, &flags), NavigationTarget::Auth);
        }
    }

    #[test]
    fn test_unverified_session_is_verification_regardless_of_flags() {
        for (email, phone) in [(false, false), (true, false), (false, true)] {
            let s = session(email, phone);
            for flags in all_flags() {
                assert_eq!(decide(Some(&s), &flags), NavigationTarget::Verification);
            }
        }
    }

    #[test]
    fn test_verified_not_onboarded_is_onboarding() {
        let s = session(true, true);
        for flags in all_flags().into_iter().filter(|f| !f.is_onboarded) {
            assert_eq!(decide(Some(&s), &flags), NavigationTarget::Onboarding);
        }
    }

    #[test]
    fn test_verified_and_onboarded_is_dashboard() {
        let s = session(true, true);
        for flags in all_flags().into_iter().filter(|f| f.is_onboarded) {
            assert_eq!(decide(Some(&s), &flags), NavigationTarget::Dashboard);
        }
    }

    #[test]
    fn test_phone_verification_moves_to_onboarding() {
        let flags = AppFlags::default();
        let before = session(true, false);
        let after = Session {
            phone_verified: true,
            ..before.clone()
        };
        assert_eq!(decide(Some(&before), &flags), NavigationTarget::Verification);
        assert_eq!(decide(Some(&after), &flags), NavigationTarget::Onboarding);
    }
}
