use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;

use super::UserSource;
use crate::models::User;

#[derive(thiserror::Error, Debug)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    #[error("JSON parsing error: {0}")]
    Json(String),
}

/// Some user APIs answer with `{"message": "..."}` on errors.
#[derive(Debug, Deserialize)]
struct ApiError {
    message: String,
}

/// Fetches the user list with a single `GET`.
#[derive(Debug, Clone)]
pub struct HttpUserSource {
    client: reqwest::Client,
    url: String,
}

impl HttpUserSource {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("user-directory/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .map_err(|e| FetchError::Network(e.to_string()))?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

#[async_trait]
impl UserSource for HttpUserSource {
    async fn fetch_users(&self) -> Result<Vec<User>, FetchError> {
        let response = self
            .client
            .get(&self.url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            let body = match serde_json::from_str::<ApiError>(&error_text) {
                Ok(err) => err.message,
                Err(_) => error_text,
            };
            return Err(FetchError::Http {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json::<Vec<User>>()
            .await
            .map_err(|e| FetchError::Json(e.to_string()))
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}
