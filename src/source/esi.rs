//! Live source backed by the EVE Swagger Interface.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::debug;

use super::{routes_to, FwDataSource, SourceError};
use crate::config::EsiSettings;
use crate::universe::{UniverseIndex, Warzone};
use crate::warfare::{StatsRecord, SystemRecord};

/// Fetches `/fw/systems/` and `/fw/stats/` over HTTP.
#[derive(Debug, Clone)]
pub struct EsiSource {
    client: Client,
    base_url: String,
    datasource: String,
}

impl EsiSource {
    pub fn new(settings: &EsiSettings) -> Result<Self, SourceError> {
        let client = Client::builder()
            .user_agent(settings.user_agent.as_str())
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()?;
        Ok(EsiSource {
            client,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            datasource: settings.datasource.clone(),
        })
    }

    async fn get<T: DeserializeOwned>(&self, path: &str, what: &'static str) -> Result<T, SourceError> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .client
            .get(&url)
            .query(&[("datasource", self.datasource.as_str())])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(SourceError::Status {
                status: status.as_u16(),
                body,
            });
        }
        debug!(%url, bytes = body.len(), "fetched {what}");
        serde_json::from_str(&body).map_err(|source| SourceError::Malformed { what, source })
    }
}

#[async_trait]
impl FwDataSource for EsiSource {
    fn name(&self) -> &str {
        "esi"
    }

    async fn fetch_systems(
        &self,
        index: &UniverseIndex,
        warzone: Warzone,
    ) -> Result<Vec<SystemRecord>, SourceError> {
        let records: Vec<SystemRecord> = self.get("/fw/systems/", "systems").await?;
        Ok(records
            .into_iter()
            .filter(|r| routes_to(index, r, warzone))
            .collect())
    }

    async fn fetch_statistics(&self) -> Result<Vec<StatsRecord>, SourceError> {
        self.get("/fw/stats/", "statistics").await
    }
}
