//! randomuser.me client.
//!
//! One `GET {base_url}/?results=N` per session. Optional `seed` makes the
//! batch reproducible, `nat` restricts nationalities.

use std::time::Duration;

use async_trait::async_trait;
use log::{debug, info, warn};

use crate::source::{SourceError, User, UserSource, UsersResponse};

/// The API refuses batches larger than this.
pub const MAX_RESULTS: usize = 5000;

pub struct RandomUserSource {
    base_url: String,
    results: usize,
    seed: Option<String>,
    nationalities: Vec<String>,
    timeout: Duration,
    client: reqwest::Client,
}

impl RandomUserSource {
    pub fn new(base_url: impl Into<String>, results: usize) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            results,
            seed: None,
            nationalities: Vec::new(),
            timeout: Duration::from_secs(30),
            client: reqwest::Client::new(),
        }
    }

    pub fn with_seed(mut self, seed: Option<String>) -> Self {
        self.seed = seed.filter(|s| !s.is_empty());
        self
    }

    pub fn with_nationalities(mut self, nationalities: Vec<String>) -> Self {
        self.nationalities = nationalities;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn query(&self) -> Vec<(&'static str, String)> {
        let mut query = vec![("results", self.results.to_string())];
        if let Some(ref seed) = self.seed {
            query.push(("seed", seed.clone()));
        }
        if !self.nationalities.is_empty() {
            query.push(("nat", self.nationalities.join(",")));
        }
        query
    }
}

#[async_trait]
impl UserSource for RandomUserSource {
    fn name(&self) -> &str {
        "randomuser"
    }

    async fn fetch_users(&self) -> Result<Vec<User>, SourceError> {
        if self.results == 0 || self.results > MAX_RESULTS {
            return Err(SourceError::Config(format!(
                "results must be between 1 and {MAX_RESULTS}, got {}",
                self.results
            )));
        }

        let url = format!("{}/", self.base_url);
        let query = self.query();
        info!("Fetching users: url={}, query={:?}", url, query);

        let response = self
            .client
            .get(&url)
            .query(&query)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| SourceError::Network(e.to_string()))?;

        debug!("randomuser response status: {}", response.status());

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let err_body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            warn!("randomuser API error: {} - {}", status, err_body);
            return Err(SourceError::Api {
                status,
                message: err_body,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| SourceError::Network(e.to_string()))?;

        // The API reports some failures as 200 with {"error": "..."}
        if let Ok(serde_json::Value::Object(map)) = serde_json::from_str(&body)
            && let Some(message) = map.get("error").and_then(|v| v.as_str())
        {
            warn!("randomuser reported error: {}", message);
            return Err(SourceError::Api {
                status: 200,
                message: message.to_string(),
            });
        }

        let payload: UsersResponse =
            serde_json::from_str(&body).map_err(|e| SourceError::Parse(e.to_string()))?;

        if let Some(ref info) = payload.info {
            debug!("randomuser info: {:?}", info);
        }
        info!("Fetched {} users", payload.results.len());
        Ok(payload.results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let source = RandomUserSource::new("https://randomuser.me/api/", 10);
        assert_eq!(source.base_url, "https://randomuser.me/api");
    }

    #[test]
    fn test_query_includes_optional_params() {
        let source = RandomUserSource::new("http://localhost", 5)
            .with_seed(Some("abc".to_string()))
            .with_nationalities(vec!["es".to_string(), "it".to_string()]);
        assert_eq!(
            source.query(),
            vec![
                ("results", "5".to_string()),
                ("seed", "abc".to_string()),
                ("nat", "es,it".to_string()),
            ]
        );
    }

    #[test]
    fn test_empty_seed_is_dropped() {
        let source = RandomUserSource::new("http://localhost", 5).with_seed(Some(String::new()));
        assert_eq!(source.query(), vec![("results", "5".to_string())]);
    }

    #[test]
    fn test_zero_results_is_config_error() {
        let source = RandomUserSource::new("http://localhost", 0);
        let result = tokio_test::block_on(source.fetch_users());
        assert!(matches!(result, Err(SourceError::Config(_))));
    }
}
