//! Registration service client module

mod client;
mod error;
mod traits;

pub use client::{HttpApiClient, DEFAULT_SERVER_URL, REQUEST_TIMEOUT};
pub use error::ApiError;
pub use traits::ApiClient;
#[cfg(test)]
pub use traits::MockApiClient;
