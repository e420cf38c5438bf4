use crate::{onboarding::OnboardingError, types::ClientId};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AdvisorError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Client {id} not found")]
    ClientNotFound { id: ClientId },

    #[error("Onboarding rejected: {0}")]
    Onboarding(#[from] OnboardingError),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type AdvisorResult<T> = Result<T, AdvisorError>;
