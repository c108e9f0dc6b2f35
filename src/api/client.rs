use crate::config::Config;
use crate::error::AppError;
use crate::region::Region;
use serde::de::DeserializeOwned;

use super::endpoints::{league_entries_url, summoner_by_name_url};
use super::models::*;
use super::traits::LeagueApi;

const USER_AGENT: &str = concat!("smurf_rank/", env!("CARGO_PKG_VERSION"));

pub struct RiotApiClient {
    agent: ureq::Agent,
    api_key: String,
}

impl RiotApiClient {
    pub fn new(config: &Config) -> Result<Self, AppError> {
        let api_key = config.api_key.trim();
        if api_key.is_empty() {
            return Err(AppError::NotInitializable(
                "the API key is empty, check RIOT_API_KEY or the key file".to_string(),
            ));
        }

        let agent = ureq::AgentBuilder::new()
            .timeout(config.timeout)
            .user_agent(USER_AGENT)
            .build();

        Ok(RiotApiClient {
            agent,
            api_key: api_key.to_string(),
        })
    }

    /// GET `url` and decode the JSON body. A 404 is `Ok(None)`.
    fn execute_request<T: DeserializeOwned>(&self, url: &str) -> Result<Option<T>, AppError> {
        tracing::debug!("GET {}", url);

        let response = match self.agent.get(url).set("X-Riot-Token", &self.api_key).call() {
            Ok(resp) => resp,
            Err(e) => return classify_error(url, e),
        };

        response.into_json::<T>().map(Some).map_err(|e| {
            tracing::warn!("undecodable response from {}: {}", url, e);
            AppError::CouldNotBeReached(format!("invalid response body: {}", e))
        })
    }
}

fn classify_error<T>(url: &str, err: ureq::Error) -> Result<Option<T>, AppError> {
    match err {
        ureq::Error::Status(404, _) => {
            tracing::debug!("{} returned 404", url);
            Ok(None)
        }
        ureq::Error::Status(code, _) => {
            tracing::warn!("{} returned HTTP {}", url, code);
            let reason = match code {
                401 | 403 => "API key is invalid or expired",
                429 => "rate limit exceeded",
                500..=599 => "Riot API server error",
                _ => "unexpected status",
            };
            Err(AppError::CouldNotBeReached(format!("HTTP {}: {}", code, reason)))
        }
        ureq::Error::Transport(transport) => {
            tracing::warn!("transport error for {}: {}", url, transport);
            Err(AppError::CouldNotBeReached(transport.to_string()))
        }
    }
}

impl LeagueApi for RiotApiClient {
    fn fetch_summoner(&self, name: &str, region: Region) -> Result<Option<SummonerDto>, AppError> {
        self.execute_request(&summoner_by_name_url(region, name))
    }

    fn fetch_league_entries(
        &self,
        summoner_id: &str,
        region: Region,
    ) -> Result<Vec<LeagueEntryDto>, AppError> {
        let entries = self.execute_request(&league_entries_url(region, summoner_id))?;
        Ok(entries.unwrap_or_default())
    }
}
