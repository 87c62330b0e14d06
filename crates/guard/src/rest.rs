//! REST-backed user directory client.

use async_trait::async_trait;
use reqwest::StatusCode;
use std::time::Duration;

use crate::config::GuardConfig;
use crate::directory::{UserDirectory, UserRecord};
use crate::error::DirectoryError;

/// HTTP client for the user directory service.
///
/// Documents live at `GET {base}/{collection}/{uid}`; a 404 means the
/// record does not exist.
#[derive(Clone)]
pub struct RestDirectory {
    client: reqwest::Client,
    base_url: String,
    collection: String,
}

impl RestDirectory {
    /// Create a new directory client.
    pub fn new(base_url: &str, collection: &str, timeout_secs: u64) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .unwrap_or_default();

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            collection: collection.to_string(),
        }
    }

    /// Create a directory client from guard configuration.
    pub fn from_config(config: &GuardConfig) -> Self {
        Self::new(
            &config.directory_url,
            &config.users_collection,
            config.lookup_timeout_secs,
        )
    }

    fn document_url(&self, uid: &str) -> String {
        format!("{}/{}/{}", self.base_url, self.collection, uid)
    }
}

#[async_trait]
impl UserDirectory for RestDirectory {
    async fn fetch_user(&self, uid: &str) -> Result<Option<UserRecord>, DirectoryError> {
        let url = self.document_url(uid);
        let res = self.client.get(&url).send().await?;

        let status = res.status();
        match status {
            StatusCode::NOT_FOUND => Ok(None),
            s if s.is_success() => {
                let record = res
                    .json::<UserRecord>()
                    .await
                    .map_err(|e| DirectoryError::Decode(e.to_string()))?;
                Ok(Some(record))
            }
            _ => {
                let body = res.text().await.unwrap_or_default();
                Err(DirectoryError::Transport(format!(
                    "user lookup failed: {} - {}",
                    status, body
                )))
            }
        }
    }
}
