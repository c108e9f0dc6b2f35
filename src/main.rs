mod api;
mod config;
mod display;
mod error;
mod logging;
mod lookup;
mod region;

use api::client::RiotApiClient;
use clap::{Parser, ValueEnum};
use config::Config;
use display::output::{display_error, display_summary, display_value};
use error::AppError;
use lookup::RankLookup;
use region::{Region, RegionResolver};

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum Query {
    FlexRank,
    SoloRank,
    FlexTier,
    SoloTier,
    FlexLp,
    SoloLp,
    Level,
    Id,
    Summary,
}

#[derive(Parser, Debug)]
#[command(name = "smurf_rank")]
#[command(about = "Look up a summoner's ranked standing", long_about = None)]
struct Args {
    /// Summoner name
    summoner_name: String,

    /// Region code: br, eune, euw, lan, las, na, oce, ru, tr, jp, kr, pbe
    /// (default: RIOT_DEFAULT_REGION, or euw)
    #[arg(short, long)]
    region: Option<String>,

    /// What to print
    #[arg(short, long, value_enum, default_value = "flex-rank")]
    query: Query,
}

fn main() {
    logging::init();
    let args = Args::parse();

    if let Err(e) = run(args) {
        tracing::debug!("lookup failed: {:?}", e);
        display_error(&e.to_string());
    }
}

fn run(args: Args) -> Result<(), AppError> {
    let config = Config::load()?;
    let client = RiotApiClient::new(&config)?;
    let lookup = RankLookup::new(client, RegionResolver::new(config.default_region.clone()));

    let region = args
        .region
        .as_deref()
        .map(region::resolve)
        .transpose()?;

    run_query(&lookup, args.query, &args.summoner_name, region)
}

fn run_query<A: api::traits::LeagueApi>(
    lookup: &RankLookup<A>,
    query: Query,
    name: &str,
    region: Option<Region>,
) -> Result<(), AppError> {
    match query {
        Query::FlexRank => display_value(lookup.get_flex_rank(name, region)?),
        Query::SoloRank => display_value(lookup.get_solo_rank(name, region)?),
        Query::FlexTier => display_value(lookup.get_flex_tier(name, region)?),
        Query::SoloTier => display_value(lookup.get_solo_tier(name, region)?),
        Query::FlexLp => display_value(lookup.get_flex_lp(name, region)?),
        Query::SoloLp => display_value(lookup.get_solo_lp(name, region)?),
        Query::Level => display_value(Some(lookup.get_level(name, region)?)),
        Query::Id => display_value(Some(lookup.get_id(name, region)?)),
        Query::Summary => {
            let summary = lookup.get_rank_summary(name, region)?;
            display_summary(&summary, name);
        }
    }
    Ok(())
}
