use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Riot API could not be initialized: {0}")]
    NotInitializable(String),

    #[error("Invalid region: {0}")]
    InvalidRegion(String),

    #[error("Summoner '{name}' does not exist, or at least not in region {region}")]
    InvalidSummonerName { name: String, region: String },

    #[error("Riot API could not be reached: {0}")]
    CouldNotBeReached(String),
}
