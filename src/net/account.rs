//! Account-creation collaborator.
//!
//! There is no backend behind this page yet. [`SimulatedAccountApi`] waits a
//! fixed latency and succeeds, standing in for a real signup endpoint.
//!
//! ERROR HANDLING
//! ==============
//! Failures are returned as [`SubmissionError`] and surfaced only through the
//! notifier; the form keeps its values so the user can retry by hand.

#[cfg(test)]
#[path = "account_test.rs"]
mod account_test;

use std::time::Duration;

use crate::config::SignupConfig;
use crate::state::form::FormFields;
use crate::util::timer;

/// Errors produced while creating an account.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmissionError {
    /// The account service refused the request.
    #[error("account rejected: {0}")]
    Rejected(String),

    /// The account service could not be reached.
    #[error("account service unavailable: {0}")]
    Unavailable(String),
}

/// Creates accounts from validated form values.
///
/// Futures are not `Send`; they run on the browser's single thread.
#[async_trait::async_trait(?Send)]
pub trait AccountApi {
    /// Create an account for `fields`.
    ///
    /// # Errors
    ///
    /// Returns a [`SubmissionError`] if the account could not be created.
    async fn create_account(&self, fields: &FormFields) -> Result<(), SubmissionError>;
}

/// Always succeeds after a fixed latency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulatedAccountApi {
    pub latency: Duration,
}

impl SimulatedAccountApi {
    #[must_use]
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }
}

impl Default for SimulatedAccountApi {
    fn default() -> Self {
        Self::from(&SignupConfig::default())
    }
}

impl From<&SignupConfig> for SimulatedAccountApi {
    fn from(config: &SignupConfig) -> Self {
        Self::new(config.submit_latency)
    }
}

#[async_trait::async_trait(?Send)]
impl AccountApi for SimulatedAccountApi {
    async fn create_account(&self, fields: &FormFields) -> Result<(), SubmissionError> {
        tracing::debug!(email = %fields.email, latency = ?self.latency, "simulating account creation");
        timer::sleep(self.latency).await;
        Ok(())
    }
}
