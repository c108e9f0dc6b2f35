use crate::error::AppError;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const DEFAULT_REGION: &str = "euw";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub default_region: String,
    pub timeout: Duration,
}

impl Config {
    pub fn load() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from `lookup`, which maps a variable name to its value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        // An empty value counts as unset.
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let api_key = match var("RIOT_API_KEY") {
            Some(key) => key,
            None => {
                let path = var("RIOT_API_KEY_FILE")
                    .map(PathBuf::from)
                    .unwrap_or_else(Self::default_key_path);
                read_key_file(&path).ok_or_else(|| {
                    AppError::NotInitializable(format!(
                        "RIOT_API_KEY is not set and no key was found in {}",
                        path.display()
                    ))
                })?
            }
        };

        let default_region =
            var("RIOT_DEFAULT_REGION").unwrap_or_else(|| DEFAULT_REGION.to_string());

        let timeout = match var("RIOT_HTTP_TIMEOUT_SECS") {
            Some(raw) => parse_timeout(&raw)?,
            None => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        };

        Ok(Config {
            api_key,
            default_region,
            timeout,
        })
    }

    pub fn default_key_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("smurf_rank")
            .join("api_key.txt")
    }
}

fn parse_timeout(raw: &str) -> Result<Duration, AppError> {
    match raw.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
        _ => Err(AppError::NotInitializable(format!(
            "RIOT_HTTP_TIMEOUT_SECS must be a positive number of seconds, got '{}'",
            raw
        ))),
    }
}

/// First non-blank line of the key file, trimmed.
fn read_key_file(path: &Path) -> Option<String> {
    let content = fs::read_to_string(path).ok()?;
    parse_key(&content)
}

fn parse_key(content: &str) -> Option<String> {
    content
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .map(str::to_string)
}
