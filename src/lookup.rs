use crate::api::models::{LeagueEntryDto, Queue, SummonerDto};
use crate::api::traits::LeagueApi;
use crate::error::AppError;
use crate::region::{Region, RegionResolver};

/// Solo and flex standings from a single entries fetch.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RankSummary {
    pub solo: Option<LeagueEntryDto>,
    pub flex: Option<LeagueEntryDto>,
}

/// Summoner and ranked lookups against one [`LeagueApi`].
///
/// Every call takes an optional region; `None` falls back to the configured
/// default. A queue without an entry is reported as `None` (unranked).
pub struct RankLookup<A: LeagueApi> {
    api: A,
    regions: RegionResolver,
}

impl<A: LeagueApi> RankLookup<A> {
    pub fn new(api: A, regions: RegionResolver) -> Self {
        RankLookup { api, regions }
    }

    pub fn get_summoner(&self, name: &str, region: Option<Region>) -> Result<SummonerDto, AppError> {
        let region = self.regions.or_default(region)?;
        tracing::debug!("looking up summoner {} in {}", name, region);

        self.api
            .fetch_summoner(name, region)?
            .ok_or_else(|| AppError::InvalidSummonerName {
                name: name.to_string(),
                region: region.to_string(),
            })
    }

    pub fn get_level(&self, name: &str, region: Option<Region>) -> Result<i64, AppError> {
        Ok(self.get_summoner(name, region)?.summoner_level)
    }

    pub fn get_id(&self, name: &str, region: Option<Region>) -> Result<String, AppError> {
        Ok(self.get_summoner(name, region)?.id)
    }

    pub fn get_league_entries(
        &self,
        name: &str,
        region: Option<Region>,
    ) -> Result<Vec<LeagueEntryDto>, AppError> {
        let region = self.regions.or_default(region)?;
        let summoner_id = self.get_id(name, Some(region))?;
        self.api.fetch_league_entries(&summoner_id, region)
    }

    pub fn get_queue_entry(
        &self,
        name: &str,
        region: Option<Region>,
        queue: Queue,
    ) -> Result<Option<LeagueEntryDto>, AppError> {
        let entries = self.get_league_entries(name, region)?;
        Ok(find_entry(entries, queue))
    }

    pub fn get_rank_summary(&self, name: &str, region: Option<Region>) -> Result<RankSummary, AppError> {
        let entries = self.get_league_entries(name, region)?;
        Ok(RankSummary {
            solo: find_entry(entries.iter().cloned(), Queue::RankedSolo),
            flex: find_entry(entries, Queue::RankedFlex),
        })
    }

    pub fn get_flex_rank(&self, name: &str, region: Option<Region>) -> Result<Option<String>, AppError> {
        Ok(self.get_queue_entry(name, region, Queue::RankedFlex)?.map(|e| e.rank))
    }

    pub fn get_solo_rank(&self, name: &str, region: Option<Region>) -> Result<Option<String>, AppError> {
        Ok(self.get_queue_entry(name, region, Queue::RankedSolo)?.map(|e| e.rank))
    }

    pub fn get_flex_tier(&self, name: &str, region: Option<Region>) -> Result<Option<String>, AppError> {
        Ok(self.get_queue_entry(name, region, Queue::RankedFlex)?.map(|e| e.tier))
    }

    pub fn get_solo_tier(&self, name: &str, region: Option<Region>) -> Result<Option<String>, AppError> {
        Ok(self.get_queue_entry(name, region, Queue::RankedSolo)?.map(|e| e.tier))
    }

    pub fn get_flex_lp(&self, name: &str, region: Option<Region>) -> Result<Option<i64>, AppError> {
        Ok(self
            .get_queue_entry(name, region, Queue::RankedFlex)?
            .and_then(|e| e.league_points))
    }

    pub fn get_solo_lp(&self, name: &str, region: Option<Region>) -> Result<Option<i64>, AppError> {
        Ok(self
            .get_queue_entry(name, region, Queue::RankedSolo)?
            .and_then(|e| e.league_points))
    }
}

// First match wins.
fn find_entry(
    entries: impl IntoIterator<Item = LeagueEntryDto>,
    queue: Queue,
) -> Option<LeagueEntryDto> {
    entries.into_iter().find(|entry| entry.is_queue(queue))
}
