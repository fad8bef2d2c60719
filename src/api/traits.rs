//! Trait abstraction for the service client to enable mocking in tests

use crate::api::ApiError;
use crate::state::{FormValues, RegistrationResponse, Statistics};
use async_trait::async_trait;

/// Trait for registration service operations, enabling mocking in tests
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ApiClient: Send + Sync {
    /// Submit a validated registration payload
    async fn submit_registration(
        &self,
        values: &FormValues,
    ) -> Result<RegistrationResponse, ApiError>;

    /// Fetch aggregated registration statistics
    async fn fetch_statistics(&self) -> Result<Statistics, ApiError>;
}
