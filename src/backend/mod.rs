// ABOUTME: Backend abstraction for authentication and application submission
// The simulated implementation waits a configured delay and then succeeds

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};
use uuid::Uuid;

use crate::auth::Credentials;
use crate::config::BackendConfig;
use crate::wizard::{SubmissionReceipt, WizardFormState};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BackendError {
    #[error("invalid email or password")]
    RejectedCredentials,
    #[error("an account already exists for {0}")]
    AccountExists(String),
    #[error("application rejected: {0}")]
    SubmissionRejected(String),
    #[error("service unavailable: {0}")]
    Unavailable(String),
}

/// Authenticated vendor session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub email: String,
    pub token: Uuid,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OnboardingBackend: Send + Sync {
    async fn login(&self, credentials: Credentials) -> Result<Session, BackendError>;
    async fn signup(&self, credentials: Credentials) -> Result<Session, BackendError>;
    async fn submit_application(
        &self,
        application: WizardFormState,
    ) -> Result<SubmissionReceipt, BackendError>;
}

/// Stand-in backend with fixed delays and unconditional success
#[derive(Debug, Clone, Default)]
pub struct SimulatedBackend {
    config: BackendConfig,
}

impl SimulatedBackend {
    pub fn new(config: BackendConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl OnboardingBackend for SimulatedBackend {
    async fn login(&self, credentials: Credentials) -> Result<Session, BackendError> {
        debug!("Simulating login for {}", credentials.email);
        tokio::time::sleep(self.config.login_delay()).await;
        info!("Login accepted for {}", credentials.email);
        Ok(Session {
            email: credentials.email,
            token: Uuid::new_v4(),
        })
    }

    async fn signup(&self, credentials: Credentials) -> Result<Session, BackendError> {
        debug!("Simulating signup for {}", credentials.email);
        tokio::time::sleep(self.config.signup_delay()).await;
        info!("Account created for {}", credentials.email);
        Ok(Session {
            email: credentials.email,
            token: Uuid::new_v4(),
        })
    }

    async fn submit_application(
        &self,
        application: WizardFormState,
    ) -> Result<SubmissionReceipt, BackendError> {
        match serde_json::to_string(&application) {
            Ok(payload) => debug!(bytes = payload.len(), "Application payload: {}", payload),
            Err(e) => debug!("Application payload not serializable: {}", e),
        }
        tokio::time::sleep(self.config.submit_delay()).await;
        let receipt = SubmissionReceipt {
            reference: Uuid::new_v4(),
        };
        info!(
            "Application for {} accepted as {}",
            application.business_name, receipt.reference
        );
        Ok(receipt)
    }
}
