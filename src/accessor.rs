use std::time::{Duration, Instant};

use reqwest::{Client, StatusCode};
use thiserror::Error;
use tokio::sync::Mutex;
use tracing::warn;

use crate::dto::DashboardData;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Error)]
enum FetchError {
    #[error("endpoint returned status {0}")]
    Status(StatusCode),
    #[error("request failed: {0}")]
    Transport(reqwest::Error),
    #[error("invalid response body: {0}")]
    Decode(reqwest::Error),
}

/// Prefers live data from the dashboard endpoint, falling back to the
/// compiled-in catalogue whenever the endpoint cannot be used. A fetched
/// payload is reused for `cache_ttl` before the next network read.
pub struct DashboardClient {
    http: Client,
    base_url: String,
    cache_ttl: Duration,
    fallback: DashboardData,
    cached: Mutex<Option<(Instant, DashboardData)>>,
}

impl DashboardClient {
    pub fn new(
        base_url: impl Into<String>,
        cache_ttl: Duration,
        fallback: DashboardData,
    ) -> anyhow::Result<Self> {
        let http = Client::builder().timeout(REQUEST_TIMEOUT).build()?;

        Ok(Self {
            http,
            base_url: base_url.into(),
            cache_ttl,
            fallback,
            cached: Mutex::new(None),
        })
    }

    /// Never fails: any non-2xx status, transport error or undecodable body is
    /// logged and answered with the static catalogue instead.
    pub async fn fetch(&self) -> DashboardData {
        if let Some(data) = self.fresh_cached().await {
            return data;
        }

        match self.fetch_live().await {
            Ok(data) => {
                *self.cached.lock().await = Some((Instant::now(), data.clone()));
                data
            }
            Err(err) => {
                warn!(
                    "Fetching dashboard data from {} failed, serving static data: {}",
                    self.base_url, err
                );
                self.fallback.clone()
            }
        }
    }

    async fn fresh_cached(&self) -> Option<DashboardData> {
        let cached = self.cached.lock().await;

        match &*cached {
            Some((fetched_at, data)) if fetched_at.elapsed() < self.cache_ttl => Some(data.clone()),
            _ => None,
        }
    }

    async fn fetch_live(&self) -> Result<DashboardData, FetchError> {
        let url = format!("{}/api/dashboard-data", self.base_url);
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(FetchError::Transport)?;

        if !response.status().is_success() {
            return Err(FetchError::Status(response.status()));
        }

        response
            .json::<DashboardData>()
            .await
            .map_err(FetchError::Decode)
    }
}
