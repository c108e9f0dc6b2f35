use std::fmt;
use std::str::FromStr;

use crate::error::AppError;

/// Platform routing values for Summoner-V4 and League-V4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    Br,
    Eune,
    Euw,
    Lan,
    Las,
    Na,
    Oce,
    Ru,
    Tr,
    Jp,
    Kr,
    Pbe,
}

/// Short region codes accepted on the command line and in the config.
pub const REGION_CODES: &[(&str, Region)] = &[
    ("br", Region::Br),
    ("eune", Region::Eune),
    ("euw", Region::Euw),
    ("lan", Region::Lan),
    ("las", Region::Las),
    ("na", Region::Na),
    ("oce", Region::Oce),
    ("ru", Region::Ru),
    ("tr", Region::Tr),
    ("jp", Region::Jp),
    ("kr", Region::Kr),
    ("pbe", Region::Pbe),
];

/// Exact, case-sensitive lookup in [`REGION_CODES`].
pub fn resolve(code: &str) -> Result<Region, AppError> {
    REGION_CODES
        .iter()
        .find(|(known, _)| *known == code)
        .map(|(_, region)| *region)
        .ok_or_else(|| AppError::InvalidRegion(format!("'{}' is not a valid region", code)))
}

impl Region {
    pub fn code(&self) -> &'static str {
        REGION_CODES
            .iter()
            .find(|(_, region)| region == self)
            .map(|(code, _)| *code)
            .unwrap_or("unknown")
    }

    pub fn platform(&self) -> &'static str {
        match self {
            Self::Br => "br1",
            Self::Eune => "eun1",
            Self::Euw => "euw1",
            Self::Lan => "la1",
            Self::Las => "la2",
            Self::Na => "na1",
            Self::Oce => "oc1",
            Self::Ru => "ru",
            Self::Tr => "tr1",
            Self::Jp => "jp1",
            Self::Kr => "kr",
            Self::Pbe => "pbe1",
        }
    }

    pub fn base_url(&self) -> String {
        format!("https://{}.api.riotgames.com", self.platform())
    }
}

impl FromStr for Region {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        resolve(s)
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code().to_uppercase())
    }
}

/// Falls back to the configured default region when a call doesn't name one.
#[derive(Debug, Clone)]
pub struct RegionResolver {
    default_code: String,
}

impl RegionResolver {
    pub fn new(default_code: impl Into<String>) -> Self {
        RegionResolver {
            default_code: default_code.into(),
        }
    }

    pub fn resolve_default(&self) -> Result<Region, AppError> {
        resolve(&self.default_code.to_lowercase())
    }

    pub fn or_default(&self, region: Option<Region>) -> Result<Region, AppError> {
        match region {
            Some(region) => Ok(region),
            None => self.resolve_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_known_code_resolves() {
        for (code, region) in REGION_CODES {
            assert_eq!(resolve(code).unwrap(), *region);
            assert_eq!(resolve(code).unwrap(), resolve(code).unwrap());
            assert_eq!(region.code(), *code);
        }
    }

    #[test]
    fn euw_maps_to_euw1_platform() {
        let region = resolve("euw").unwrap();
        assert_eq!(region, Region::Euw);
        assert_eq!(region.base_url(), "https://euw1.api.riotgames.com");
        assert_eq!(region.to_string(), "EUW");
    }

    #[test]
    fn unknown_codes_are_rejected() {
        for code in ["", "eu", "euw1", "garena", "mars"] {
            assert!(matches!(resolve(code), Err(AppError::InvalidRegion(_))));
        }
    }

    #[test]
    fn resolve_is_case_sensitive() {
        assert!(matches!(resolve("EUW"), Err(AppError::InvalidRegion(_))));
        assert!(matches!("Kr".parse::<Region>(), Err(AppError::InvalidRegion(_))));
    }

    #[test]
    fn from_str_uses_the_table() {
        assert_eq!("na".parse::<Region>().unwrap(), Region::Na);
    }

    #[test]
    fn default_region_is_resolved_case_insensitively() {
        assert_eq!(RegionResolver::new("KR").resolve_default().unwrap(), Region::Kr);
        assert_eq!(RegionResolver::new("oce").resolve_default().unwrap(), Region::Oce);
    }

    #[test]
    fn bad_default_region_fails() {
        let resolver = RegionResolver::new("atlantis");
        assert!(matches!(resolver.resolve_default(), Err(AppError::InvalidRegion(_))));
        assert!(matches!(resolver.or_default(None), Err(AppError::InvalidRegion(_))));
    }

    #[test]
    fn every_table_code_is_a_valid_default() {
        assert_eq!(RegionResolver::new("pbe").resolve_default().unwrap(), Region::Pbe);
        assert!(matches!(
            RegionResolver::new("garena").resolve_default(),
            Err(AppError::InvalidRegion(_))
        ));
    }

    #[test]
    fn or_default_prefers_explicit_region() {
        let resolver = RegionResolver::new("euw");
        assert_eq!(
            resolver.or_default(None).unwrap(),
            resolver.resolve_default().unwrap()
        );
        for (_, region) in REGION_CODES {
            assert_eq!(resolver.or_default(Some(*region)).unwrap(), *region);
        }
    }

    #[test]
    fn explicit_region_ignores_bad_default() {
        let resolver = RegionResolver::new("nowhere");
        assert_eq!(resolver.or_default(Some(Region::Jp)).unwrap(), Region::Jp);
    }
}
