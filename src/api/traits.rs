use crate::error::AppError;
use crate::region::Region;

use super::models::{LeagueEntryDto, SummonerDto};

/// The two remote calls a rank lookup needs.
pub trait LeagueApi {
    /// `Ok(None)` when no summoner has that name in the region.
    fn fetch_summoner(&self, name: &str, region: Region) -> Result<Option<SummonerDto>, AppError>;

    fn fetch_league_entries(
        &self,
        summoner_id: &str,
        region: Region,
    ) -> Result<Vec<LeagueEntryDto>, AppError>;
}
