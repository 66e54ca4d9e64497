///! Static dataset fetcher
use async_trait::async_trait;
use reqwest::Client;
use satcat_common::Satellite;
use tracing::{debug, info, warn};

use crate::config::CatalogConfig;
use crate::error::{DecodeError, FetchError, NetworkError};

/// Anything that can hand over the full satellite collection.
#[async_trait]
pub trait SatelliteSource: Send + Sync {
    async fn fetch(&self) -> Result<Vec<Satellite>, FetchError>;
}

/// Retrieves the catalog with a single GET against a fixed static path.
///
/// No retry, no timeout, no caching: every call issues one request and
/// every failure is surfaced immediately.
#[derive(Clone)]
pub struct CatalogFetcher {
    client: Client,
    url: String,
}

impl CatalogFetcher {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            url: url.into(),
        }
    }

    pub fn from_config(config: &CatalogConfig) -> Self {
        Self::new(config.dataset_url())
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl SatelliteSource for CatalogFetcher {
    async fn fetch(&self) -> Result<Vec<Satellite>, FetchError> {
        debug!("Fetching satellite data from {}", self.url);

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(NetworkError::from)?;

        let status = response.status();
        if !status.is_success() {
            warn!("Satellite data request failed status={} url={}", status.as_u16(), self.url);
            return Err(NetworkError::Status(status).into());
        }

        let body = response.bytes().await.map_err(NetworkError::from)?;

        // Decode separately from the transport so malformed JSON stays a DecodeError
        let satellites: Vec<Satellite> =
            serde_json::from_slice(&body).map_err(DecodeError::from)?;

        info!("Fetched {} satellites from {}", satellites.len(), self.url);
        Ok(satellites)
    }
}
