//! History command: recorded results, most recent first.

use std::path::Path;

use anyhow::{Context, Result};
use hitcircle_core::record::{ResultLog, ResultRecord};

use crate::cli_utils::format_colored_grade;

pub fn run(record: &Path, limit: Option<usize>, json: bool) -> Result<()> {
    let records = ResultLog::new(record)
        .load()
        .with_context(|| format!("Failed to read {}", record.display()))?;
    let recent = most_recent(records, limit);

    if json {
        println!("{}", serde_json::to_string_pretty(&recent)?);
        return Ok(());
    }

    if recent.is_empty() {
        eprintln!("No results in {}", record.display());
        return Ok(());
    }
    for r in &recent {
        println!(
            "{}  {:>3}  {:>7}  {:>6.2}%  {} - {} [{}]",
            r.played_at.format("%Y-%m-%d %H:%M"),
            format_colored_grade(r.summary.grade),
            r.summary.total_score,
            r.summary.accuracy,
            r.artist,
            r.title,
            r.version
        );
    }
    Ok(())
}

fn most_recent(mut records: Vec<ResultRecord>, limit: Option<usize>) -> Vec<ResultRecord> {
    records.reverse();
    if let Some(limit) = limit {
        records.truncate(limit);
    }
    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use hitcircle_core::chart::ChartMetadata;
    use hitcircle_core::score::ScoreState;

    fn record(title: &str) -> ResultRecord {
        let metadata = ChartMetadata {
            title: title.to_string(),
            ..Default::default()
        };
        ResultRecord::new(&metadata, ScoreState::new().summary())
    }

    #[test]
    fn test_most_recent_first() {
        let records = vec![record("a"), record("b"), record("c")];
        let titles: Vec<String> = most_recent(records.clone(), None)
            .into_iter()
            .map(|r| r.title)
            .collect();
        assert_eq!(titles, vec!["c", "b", "a"]);

        let limited = most_recent(records, Some(2));
        assert_eq!(limited.len(), 2);
        assert_eq!(limited[0].title, "c");
    }
}
