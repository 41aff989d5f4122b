use std::sync::Arc;

use tracing::{info, info_span, Instrument};

use crate::state::{AppFlagsStore, PersistError};

/// Use case for finishing the first-run walkthrough.
pub struct CompleteOnboarding {
    flags: Arc<AppFlagsStore>,
}

impl CompleteOnboarding {
    pub fn new(flags: Arc<AppFlagsStore>) -> Self {
        Self { flags }
    }

    /// Mark onboarding as complete.
    ///
    /// Navigation moves on even if persisting fails; the error tells the
    /// caller that the flag will not survive a restart.
    pub async fn execute(&self) -> Result<(), PersistError> {
        let span = info_span!("usecase.complete_onboarding.execute");

        async {
            self.flags.set_is_onboarded(true).await?;
            info!("Onboarding completed");
            Ok(())
        }
        .instrument(span)
        .await
    }
}
