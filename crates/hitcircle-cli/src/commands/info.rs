//! Info command: chart metadata and object counts.

use std::path::Path;

use anyhow::{Context, Result};
use hitcircle_core::chart::{ChartMetadata, parse_file};
use hitcircle_core::library::resolve_chart;
use serde::Serialize;

use crate::cli_utils::format_duration;

#[derive(Serialize)]
struct ChartInfo {
    path: String,
    metadata: ChartMetadata,
    circles: usize,
    sliders: usize,
    timing_points: usize,
    length_ms: i64,
    max_score: u32,
}

pub fn run(chart: &Path, json: bool) -> Result<()> {
    let chart_path = resolve_chart(chart)
        .with_context(|| format!("No chart found at {}", chart.display()))?;
    let beatmap = parse_file(&chart_path)
        .with_context(|| format!("Failed to read chart {}", chart_path.display()))?;

    let info = ChartInfo {
        path: chart_path.display().to_string(),
        circles: beatmap.circle_count(),
        sliders: beatmap.slider_count(),
        timing_points: beatmap.timing_points.len(),
        length_ms: beatmap.length_ms(),
        max_score: beatmap.max_score(),
        metadata: beatmap.metadata,
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&info)?);
        return Ok(());
    }

    let metadata = &info.metadata;
    println!("{}", metadata.display_name());
    println!("  File:       {}", info.path);
    if !metadata.creator.is_empty() {
        println!("  Creator:    {}", metadata.creator);
    }
    println!(
        "  Audio:      {}",
        metadata.audio_filename.as_deref().unwrap_or("-")
    );
    if let Some(background) = &metadata.background_filename {
        println!("  Background: {}", background);
    }
    println!(
        "  Objects:    {} ({} circles, {} sliders)",
        info.circles + info.sliders,
        info.circles,
        info.sliders
    );
    println!("  Length:     {}", format_duration(info.length_ms));
    println!("  Max score:  {}", info.max_score);
    Ok(())
}
