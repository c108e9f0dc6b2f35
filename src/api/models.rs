use serde::Deserialize;

// Summoner V4 response
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(dead_code)]
pub struct SummonerDto {
    /// Encrypted summoner id, the key for League V4 lookups.
    pub id: String,
    #[serde(default)]
    pub account_id: String,
    #[serde(default)]
    pub puuid: String,
    #[serde(default)]
    pub name: String,
    pub summoner_level: i64,
    #[serde(default)]
    pub profile_icon_id: i32,
    #[serde(default)]
    pub revision_date: i64,
}

// League V4 response
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(dead_code)]
pub struct LeagueEntryDto {
    pub queue_type: String,
    #[serde(default)]
    pub tier: String,
    #[serde(default)]
    pub rank: String,
    #[serde(default)]
    pub league_points: Option<i64>,
    #[serde(default)]
    pub wins: i32,
    #[serde(default)]
    pub losses: i32,
    #[serde(default)]
    pub hot_streak: bool,
    #[serde(default)]
    pub veteran: bool,
}

/// Ranked queues the tool reports on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Queue {
    RankedSolo,
    RankedFlex,
}

impl Queue {
    pub const SOLO_TAG: &'static str = "RANKED_SOLO_5x5";
    pub const FLEX_TAG: &'static str = "RANKED_FLEX_SR";

    pub fn tag(&self) -> &'static str {
        match self {
            Queue::RankedSolo => Self::SOLO_TAG,
            Queue::RankedFlex => Self::FLEX_TAG,
        }
    }

    pub fn friendly_name(&self) -> &'static str {
        match self {
            Queue::RankedSolo => "Ranked Solo/Duo",
            Queue::RankedFlex => "Ranked Flex",
        }
    }
}

impl LeagueEntryDto {
    pub fn is_queue(&self, queue: Queue) -> bool {
        self.queue_type == queue.tag()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn league_entry_tolerates_null_league_points() {
        let json = r#"{"queueType":"RANKED_FLEX_SR","tier":"GOLD","rank":"III","leaguePoints":null}"#;
        let entry: LeagueEntryDto = serde_json::from_str(json).unwrap();
        assert!(entry.is_queue(Queue::RankedFlex));
        assert_eq!(entry.league_points, None);
        assert_eq!(entry.wins, 0);
    }

    #[test]
    fn summoner_parses_riot_payload() {
        let json = r#"{
            "id": "enc-summoner",
            "accountId": "enc-account",
            "puuid": "enc-puuid",
            "name": "4damantium",
            "profileIconId": 4568,
            "revisionDate": 1600000000000,
            "summonerLevel": 187
        }"#;
        let summoner: SummonerDto = serde_json::from_str(json).unwrap();
        assert_eq!(summoner.id, "enc-summoner");
        assert_eq!(summoner.summoner_level, 187);
    }
}
