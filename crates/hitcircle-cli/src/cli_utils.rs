//! Common CLI utility functions shared across commands.

use std::path::Path;

use hitcircle_core::judge::Judgement;
use hitcircle_core::score::{Grade, ScoreSummary};
use hitcircle_core::Config;
use owo_colors::OwoColorize;
use tracing::{info, warn};

/// Load the config file, falling back to defaults when absent or invalid.
pub fn load_config(path: Option<&Path>) -> Config {
    let Some(path) = path else {
        return Config::default();
    };
    match Config::load(path) {
        Ok(config) => {
            info!("Loaded config from {}", path.display());
            config
        }
        Err(e) => {
            warn!("Failed to load config {}: {}, using defaults", path.display(), e);
            Config::default()
        }
    }
}

pub fn format_colored_grade(grade: Grade) -> String {
    let name = grade.short_name();
    match grade {
        Grade::D => name.truecolor(200, 60, 60).to_string(),
        Grade::C => name.truecolor(170, 80, 220).to_string(),
        Grade::B => name.truecolor(60, 120, 255).to_string(),
        Grade::A => name.truecolor(60, 220, 100).to_string(),
        Grade::S => name.truecolor(255, 200, 0).to_string(),
        Grade::Ss => name.truecolor(255, 230, 120).bold().to_string(),
    }
}

pub fn format_colored_judgement(judgement: Judgement) -> String {
    let name = judgement.short_name();
    match judgement {
        Judgement::Great => name.cyan().to_string(),
        Judgement::Ok => name.green().to_string(),
        Judgement::Meh => name.yellow().to_string(),
        Judgement::Miss => name.red().to_string(),
    }
}

/// Format milliseconds as m:ss
pub fn format_duration(ms: i64) -> String {
    let seconds = ms.max(0) / 1000;
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

/// Multi-line result block for the console
pub fn format_summary(title: &str, summary: &ScoreSummary) -> String {
    let border = "━".repeat(title.chars().count().max(40) + 4);
    let counts = &summary.counts;
    format!(
        "{}\n  {}\n{}\n  Score    {}\n  Accuracy {:.2}%\n  Grade    {}\n  {} {}  {} {}  {} {}  {} {}\n{}",
        border.dimmed(),
        title.bold(),
        border.dimmed(),
        summary.total_score,
        summary.accuracy,
        format_colored_grade(summary.grade),
        format_colored_judgement(Judgement::Great),
        counts.great,
        format_colored_judgement(Judgement::Ok),
        counts.ok,
        format_colored_judgement(Judgement::Meh),
        counts.meh,
        format_colored_judgement(Judgement::Miss),
        counts.miss,
        border.dimmed(),
    )
}
