use crate::api::models::{LeagueEntryDto, Queue};
use crate::lookup::RankSummary;
use colored::*;
use tabled::{settings::Style, Table, Tabled};

pub const UNRANKED: &str = "Unranked";

#[derive(Tabled)]
struct RankRow {
    queue: String,
    tier: String,
    rank: String,
    lp: String,
    record: String,
}

impl RankRow {
    fn new(queue: Queue, entry: Option<&LeagueEntryDto>) -> Self {
        match entry {
            Some(entry) => RankRow {
                queue: queue.friendly_name().to_string(),
                tier: entry.tier.clone(),
                rank: entry.rank.clone(),
                lp: format_lp(entry.league_points),
                record: format!("{}W / {}L", entry.wins, entry.losses),
            },
            None => RankRow {
                queue: queue.friendly_name().to_string(),
                tier: UNRANKED.to_string(),
                rank: "-".to_string(),
                lp: "-".to_string(),
                record: "-".to_string(),
            },
        }
    }
}

fn format_lp(lp: Option<i64>) -> String {
    lp.map(|lp| lp.to_string()).unwrap_or_else(|| "-".to_string())
}

/// One result line, `Unranked` when the queue has no entry.
pub fn format_value<T: ToString>(value: Option<T>) -> String {
    value
        .map(|v| v.to_string())
        .unwrap_or_else(|| UNRANKED.to_string())
}

pub fn display_value<T: ToString>(value: Option<T>) {
    println!("{}", format_value(value));
}

pub fn render_summary(summary: &RankSummary) -> String {
    let rows = vec![
        RankRow::new(Queue::RankedSolo, summary.solo.as_ref()),
        RankRow::new(Queue::RankedFlex, summary.flex.as_ref()),
    ];

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    table.to_string()
}

pub fn display_summary(summary: &RankSummary, summoner_name: &str) {
    println!("{}", format!("Ranked standing for {}", summoner_name).bold().cyan());
    println!("{}", render_summary(summary));
}

// stdout on purpose: errors are the result line of a failed lookup
pub fn display_error(error: &str) {
    println!("{} {}", "Error:".red().bold(), error);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_value_prints_unranked() {
        assert_eq!(format_value::<String>(None), "Unranked");
        assert_eq!(format_value(Some("III")), "III");
        assert_eq!(format_value(Some(42_i64)), "42");
    }

    #[test]
    fn summary_table_lists_both_queues() {
        let summary = RankSummary {
            solo: None,
            flex: Some(LeagueEntryDto {
                queue_type: Queue::FLEX_TAG.to_string(),
                tier: "GOLD".to_string(),
                rank: "III".to_string(),
                league_points: Some(42),
                wins: 12,
                losses: 9,
                hot_streak: false,
                veteran: false,
            }),
        };

        let table = render_summary(&summary);
        assert!(table.contains("Ranked Solo/Duo"));
        assert!(table.contains("Unranked"));
        assert!(table.contains("Ranked Flex"));
        assert!(table.contains("GOLD"));
        assert!(table.contains("12W / 9L"));
    }
}
