//! Use cases
//!
//! Each use case owns the collaborators it needs and exposes `execute`.
//! They are the only place where raw backend failures meet the classifier
//! and where the result lands in the app flags.
//!
//! Calls that a UI component starts take a `CancellationToken` for that
//! component's lifetime. Once it is cancelled, the outcome is ignored for
//! every state the call would otherwise have changed.

pub mod complete_onboarding;
pub mod refresh_session;
pub mod run_classified;
pub mod sign_in;
pub mod sign_out;

pub use complete_onboarding::CompleteOnboarding;
pub use refresh_session::RefreshSession;
pub use run_classified::{CallOutcome, RunClassified};
pub use sign_in::SignIn;
pub use sign_out::SignOut;
