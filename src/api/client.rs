//! HTTP client for communicating with the registration service
//!
//! Every call is one request/response exchange against
//! `{base_url}/{route}`, bounded by a fixed timeout. Transport errors,
//! non-success statuses, and timeouts are normalized into [`ApiError`].

use crate::api::{ApiClient, ApiError};
use crate::state::{FormValues, RegistrationResponse, Statistics};
use async_trait::async_trait;
use reqwest::{header, Method};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;
use tokio::task::JoinHandle;

/// Default registration service address
pub const DEFAULT_SERVER_URL: &str = "http://localhost:8080";

/// Fixed response bound applied to every call
pub const REQUEST_TIMEOUT: Duration = Duration::from_millis(5000);

/// Client for communicating with the registration service
pub struct HttpApiClient {
    /// The underlying HTTP client
    http: reqwest::Client,
    /// The service base URL
    base_url: String,
    /// Per-call response bound
    timeout: Duration,
}

impl HttpApiClient {
    /// Create a new service client
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            timeout,
        }
    }

    /// Perform one exchange against `{base_url}/{route}`.
    ///
    /// The request runs on its own task so that losing the race in
    /// [`race_with_deadline`] does not cancel it; the timed-out request
    /// keeps running in the background with its result discarded.
    async fn call<T: DeserializeOwned>(
        &self,
        method: Method,
        route: &str,
        body: Option<Value>,
    ) -> Result<T, ApiError> {
        let url = format!("{}/{}", self.base_url.trim_end_matches('/'), route);
        tracing::debug!(%url, ?method, "sending request");

        let mut request = self
            .http
            .request(method, &url)
            .header(header::CONTENT_TYPE, "application/json");
        if let Some(body) = body {
            request = request.json(&body);
        }

        let handle: JoinHandle<Result<Value, ApiError>> = tokio::spawn(async move {
            let response = request
                .send()
                .await
                .map_err(|e| ApiError::Transport(e.to_string()))?;
            let status = response.status();
            if !status.is_success() {
                return Err(ApiError::Http {
                    status: status.as_u16(),
                    reason: status.canonical_reason().unwrap_or("unknown").to_string(),
                });
            }
            response
                .json::<Value>()
                .await
                .map_err(|e| ApiError::Transport(e.to_string()))
        });

        let raw = race_with_deadline(self.timeout, handle).await?;
        serde_json::from_value(raw).map_err(|e| ApiError::Transport(e.to_string()))
    }
}

#[async_trait]
impl ApiClient for HttpApiClient {
    async fn submit_registration(
        &self,
        values: &FormValues,
    ) -> Result<RegistrationResponse, ApiError> {
        let body = serde_json::to_value(values).map_err(|e| ApiError::Transport(e.to_string()))?;
        self.call(Method::POST, "registration", Some(body)).await
    }

    async fn fetch_statistics(&self) -> Result<Statistics, ApiError> {
        self.call(Method::GET, "statistics", None).await
    }
}

/// Race a spawned request task against a deadline; whichever settles
/// first determines the outcome.
///
/// This is a race, not a cancellation: dropping the join handle when the
/// deadline wins detaches the task instead of aborting it.
async fn race_with_deadline<T>(
    deadline: Duration,
    handle: JoinHandle<Result<T, ApiError>>,
) -> Result<T, ApiError> {
    match tokio::time::timeout(deadline, handle).await {
        Ok(Ok(result)) => result,
        Ok(Err(join_error)) => Err(ApiError::Transport(join_error.to_string())),
        Err(_elapsed) => Err(ApiError::Timeout(deadline)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;

    #[tokio::test(start_paused = true)]
    async fn test_race_settles_as_timeout_at_the_bound() {
        let handle = tokio::spawn(std::future::pending::<Result<(), ApiError>>());

        let start = tokio::time::Instant::now();
        let result = race_with_deadline(REQUEST_TIMEOUT, handle).await;

        assert!(matches!(result, Err(ApiError::Timeout(d)) if d == REQUEST_TIMEOUT));
        assert_eq!(start.elapsed(), REQUEST_TIMEOUT);
    }

    #[tokio::test]
    async fn test_race_returns_result_when_task_settles_first() {
        let handle = tokio::spawn(async { Ok::<_, ApiError>(7u32) });
        let result = race_with_deadline(Duration::from_secs(1), handle).await;
        assert_eq!(result.unwrap(), 7);
    }

    #[tokio::test]
    async fn test_race_propagates_task_errors() {
        let handle = tokio::spawn(async {
            Err::<(), _>(ApiError::Http {
                status: 500,
                reason: "Internal Server Error".to_string(),
            })
        });
        let result = race_with_deadline(Duration::from_secs(1), handle).await;
        assert!(matches!(result, Err(ApiError::Http { status: 500, .. })));
    }

    mod http_exchange {
        use super::*;
        use axum::http::StatusCode;
        use axum::routing::{get, post};
        use axum::{Json, Router};
        use serde_json::json;

        /// Bind a stub service on a loopback port and return its base URL
        async fn spawn_stub(router: Router) -> String {
            let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
            let addr = listener.local_addr().unwrap();
            tokio::spawn(async move {
                axum::serve(listener, router).await.unwrap();
            });
            format!("http://{addr}")
        }

        fn sample_values() -> FormValues {
            FormValues {
                username: "Alice".to_string(),
                email: "alice@example.com".to_string(),
                phone: "555-123-4567".to_string(),
                age: "20".to_string(),
                profession: "school".to_string(),
                experience: 2,
                comment: "hello".to_string(),
            }
        }

        #[tokio::test]
        async fn test_submit_posts_exact_payload_and_parses_message() {
            let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel::<Value>();
            let router = Router::new().route(
                "/registration",
                post(move |Json(body): Json<Value>| {
                    let tx = tx.clone();
                    async move {
                        tx.send(body).unwrap();
                        Json(json!({"message": "OK"}))
                    }
                }),
            );
            let base_url = spawn_stub(router).await;

            let client = HttpApiClient::new(base_url, REQUEST_TIMEOUT);
            let response = client.submit_registration(&sample_values()).await.unwrap();
            assert_eq!(response.message, "OK");

            let body = rx.recv().await.unwrap();
            assert_eq!(body["username"], "Alice");
            assert_eq!(body["email"], "alice@example.com");
            assert_eq!(body["phone"], "555-123-4567");
            assert_eq!(body["age"], "20");
            assert_eq!(body["profession"], "school");
            assert_eq!(body["experience"], 2);
            assert_eq!(body["comment"], "hello");
        }

        #[tokio::test]
        async fn test_fetch_statistics_parses_series() {
            let router = Router::new().route(
                "/statistics",
                get(|| async {
                    Json(json!({
                        "age": [1, 2, 3],
                        "profession": [4, 5, 6, 7],
                        "experience": [8, 9, 10],
                    }))
                }),
            );
            let base_url = spawn_stub(router).await;

            let client = HttpApiClient::new(base_url, REQUEST_TIMEOUT);
            let stats = client.fetch_statistics().await.unwrap();
            assert_eq!(stats.age, vec![1, 2, 3]);
            assert_eq!(stats.profession, vec![4, 5, 6, 7]);
            assert_eq!(stats.experience, vec![8, 9, 10]);
        }

        #[tokio::test]
        async fn test_server_error_becomes_http_failure() {
            let router = Router::new().route(
                "/registration",
                post(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
            );
            let base_url = spawn_stub(router).await;

            let client = HttpApiClient::new(base_url, REQUEST_TIMEOUT);
            let result = client.submit_registration(&sample_values()).await;
            assert!(matches!(result, Err(ApiError::Http { status: 500, .. })));
        }

        #[tokio::test]
        async fn test_slow_server_loses_the_race() {
            let router = Router::new().route(
                "/registration",
                post(|| async {
                    tokio::time::sleep(Duration::from_secs(10)).await;
                    Json(json!({"message": "too late"}))
                }),
            );
            let base_url = spawn_stub(router).await;

            // Shortened bound so the test settles quickly
            let client = HttpApiClient::new(base_url, Duration::from_millis(100));
            let result = client.submit_registration(&sample_values()).await;
            assert!(matches!(result, Err(ApiError::Timeout(_))));
        }

        #[tokio::test]
        async fn test_unreachable_server_becomes_transport_failure() {
            // Bind then drop to get a port with nothing listening
            let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
            let addr = listener.local_addr().unwrap();
            drop(listener);

            let client = HttpApiClient::new(format!("http://{addr}"), REQUEST_TIMEOUT);
            let result = client.fetch_statistics().await;
            assert!(matches!(result, Err(ApiError::Transport(_))));
        }

        #[tokio::test]
        async fn test_non_json_success_body_becomes_transport_failure() {
            let router = Router::new().route("/statistics", get(|| async { "not json" }));
            let base_url = spawn_stub(router).await;

            let client = HttpApiClient::new(base_url, REQUEST_TIMEOUT);
            let result = client.fetch_statistics().await;
            assert!(matches!(result, Err(ApiError::Transport(_))));
        }

        #[tokio::test]
        async fn test_base_url_trailing_slash_is_tolerated() {
            let router = Router::new()
                .route("/statistics", get(|| async { Json(json!({"age": [], "profession": [], "experience": []})) }));
            let base_url = spawn_stub(router).await;

            let client = HttpApiClient::new(format!("{base_url}/"), REQUEST_TIMEOUT);
            assert!(client.fetch_statistics().await.is_ok());
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_losing_request_keeps_running_in_background() {
        let finished = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&finished);
        let handle = tokio::spawn(async move {
            tokio::time::sleep(Duration::from_secs(10)).await;
            flag.store(true, Ordering::SeqCst);
            Ok::<_, ApiError>(())
        });

        let result = race_with_deadline(Duration::from_secs(5), handle).await;
        assert!(matches!(result, Err(ApiError::Timeout(_))));
        assert!(!finished.load(Ordering::SeqCst));

        // The loser was detached, not cancelled: it settles on its own later
        tokio::time::sleep(Duration::from_secs(6)).await;
        assert!(finished.load(Ordering::SeqCst));
    }
}
