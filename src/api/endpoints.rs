// URL builders for the Riot endpoints this tool calls

use crate::region::Region;

pub const SUMMONER_BY_NAME_PATH: &str = "/lol/summoner/v4/summoners/by-name";
pub const LEAGUE_ENTRIES_PATH: &str = "/lol/league/v4/entries/by-summoner";

pub fn summoner_by_name_url(region: Region, summoner_name: &str) -> String {
    format!(
        "{}{}/{}",
        region.base_url(),
        SUMMONER_BY_NAME_PATH,
        urlencoding::encode(summoner_name)
    )
}

pub fn league_entries_url(region: Region, summoner_id: &str) -> String {
    format!(
        "{}{}/{}",
        region.base_url(),
        LEAGUE_ENTRIES_PATH,
        urlencoding::encode(summoner_id)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summoner_url_encodes_spaces_and_unicode() {
        assert_eq!(
            summoner_by_name_url(Region::Euw, "Le Conservateur"),
            "https://euw1.api.riotgames.com/lol/summoner/v4/summoners/by-name/Le%20Conservateur"
        );
        assert_eq!(
            summoner_by_name_url(Region::Kr, "é"),
            "https://kr.api.riotgames.com/lol/summoner/v4/summoners/by-name/%C3%A9"
        );
    }

    #[test]
    fn league_url_uses_platform_host() {
        assert_eq!(
            league_entries_url(Region::Na, "abc-123"),
            "https://na1.api.riotgames.com/lol/league/v4/entries/by-summoner/abc-123"
        );
    }
}
