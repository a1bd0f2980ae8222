//! Habit service client implementation.
//!
//! This module provides the [`HabitClient`] struct which posts newly
//! created habits to the remote service. The UI never waits on it: calls
//! are made from a spawned task and only their outcome is reported back.

use std::time::Duration;

use reqwest::Client;
use tracing::{debug, instrument, warn};

use crate::error::{Error, Result};
use crate::request::{CreateHabitResponse, NewHabit};

/// Path of the create endpoint, relative to the base URL.
const HABITS_PATH: &str = "/api/habits";

/// Client for the habit service.
///
/// Cloning is cheap; clones share the connection pool.
///
/// # Examples
///
/// ```no_run
/// use std::time::Duration;
/// use habitflow_client::{HabitClient, NewHabit};
///
/// # async fn example() -> habitflow_client::Result<()> {
/// let client = HabitClient::new("http://localhost:3000", Duration::from_secs(10))?;
/// client
///     .create_habit(&NewHabit {
///         name: "Drink Water".to_string(),
///         description: "8 glasses".to_string(),
///         category: "Health".to_string(),
///         frequency: "Daily".to_string(),
///     })
///     .await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct HabitClient {
    http: Client,
    endpoint: String,
}

impl HabitClient {
    /// Creates a client for the service at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidBaseUrl`] if `base_url` is not an http(s)
    /// URL, or [`Error::Http`] if the HTTP client fails to initialize.
    #[instrument(skip(timeout))]
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let base = base_url.trim().trim_end_matches('/');
        if !(base.starts_with("http://") || base.starts_with("https://")) {
            return Err(Error::InvalidBaseUrl(base_url.to_string()));
        }

        let http = Client::builder().timeout(timeout).build()?;
        let endpoint = format!("{base}{HABITS_PATH}");
        debug!(%endpoint, "created habit service client");

        Ok(Self { http, endpoint })
    }

    /// Returns the full URL create requests are sent to.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Posts a new habit.
    ///
    /// Succeeds only when the service answers a 2xx status with
    /// `{"success": true}`.
    ///
    /// # Errors
    ///
    /// - [`Error::Http`] if the request cannot be sent or the body is not
    ///   valid JSON
    /// - [`Error::Status`] for non-2xx responses
    /// - [`Error::Rejected`] when the service reports `success: false`
    #[instrument(skip(self, habit), fields(name = %habit.name, category = %habit.category))]
    pub async fn create_habit(&self, habit: &NewHabit) -> Result<()> {
        debug!(endpoint = %self.endpoint, "posting habit");
        let response = self.http.post(&self.endpoint).json(habit).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), "habit service returned an error status");
            return Err(Error::Status {
                status: status.as_u16(),
                body,
            });
        }

        let payload: CreateHabitResponse = response.json().await?;
        if !payload.success {
            warn!(message = ?payload.message, "habit service rejected the habit");
            return Err(Error::Rejected {
                message: payload.message,
            });
        }

        debug!("habit stored");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn sample() -> NewHabit {
        NewHabit {
            name: "Drink Water".to_string(),
            description: "8 glasses".to_string(),
            category: "Health".to_string(),
            frequency: "Daily".to_string(),
        }
    }

    fn client_for(server: &MockServer) -> HabitClient {
        HabitClient::new(&server.uri(), Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn new_rejects_non_http_urls() {
        let err = HabitClient::new("localhost:3000", Duration::from_secs(1)).unwrap_err();
        assert!(matches!(err, Error::InvalidBaseUrl(_)));
    }

    #[test]
    fn endpoint_strips_trailing_slash() {
        let client = HabitClient::new("http://localhost:3000/", Duration::from_secs(1)).unwrap();
        assert_eq!(client.endpoint(), "http://localhost:3000/api/habits");
    }

    #[tokio::test]
    async fn create_habit_success() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/habits"))
            .and(body_json(serde_json::json!({
                "name": "Drink Water",
                "description": "8 glasses",
                "category": "Health",
                "frequency": "Daily",
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "success": true
            })))
            .expect(1)
            .mount(&server)
            .await;

        client_for(&server).create_habit(&sample()).await.unwrap();
    }

    #[tokio::test]
    async fn create_habit_rejected() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/habits"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "success": false,
                "message": "duplicate"
            })))
            .mount(&server)
            .await;

        let err = client_for(&server).create_habit(&sample()).await.unwrap_err();
        assert!(matches!(err, Error::Rejected { message: Some(m) } if m == "duplicate"));
    }

    #[tokio::test]
    async fn create_habit_server_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/habits"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        let err = client_for(&server).create_habit(&sample()).await.unwrap_err();
        assert!(matches!(err, Error::Status { status: 500, ref body } if body == "boom"));
    }

    #[tokio::test]
    async fn create_habit_invalid_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/habits"))
            .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
            .mount(&server)
            .await;

        let err = client_for(&server).create_habit(&sample()).await.unwrap_err();
        assert!(matches!(err, Error::Http(_)));
    }

    #[tokio::test]
    async fn create_habit_unreachable() {
        let client = HabitClient::new("http://127.0.0.1:9", Duration::from_secs(2)).unwrap();
        let err = client.create_habit(&sample()).await.unwrap_err();
        assert!(matches!(err, Error::Http(_)));
    }
}
