//! Play command: run a session to completion and report the result.

use std::path::{Path, PathBuf};
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use hitcircle_core::chart::{Beatmap, parse_file};
use hitcircle_core::library::resolve_chart;
use hitcircle_core::record::{ResultLog, ResultRecord};
use hitcircle_core::replay::{Replay, ReplayInput, autoplay};
use hitcircle_core::score::ScoreSummary;
use hitcircle_core::session::{
    Clock, GameSession, IdleInput, InputSource, ManualClock, SessionState, SystemClock,
};
use hitcircle_core::Config;
use serde::Serialize;
use tracing::{info, warn};

use crate::cli_utils::{format_colored_judgement, format_summary};
use crate::shutdown::{ShutdownSignal, setup_ctrlc_handler};

pub struct PlayOptions {
    pub replay: Option<PathBuf>,
    pub auto: bool,
    pub realtime: bool,
    pub record: Option<PathBuf>,
    pub save_replay: Option<PathBuf>,
    pub json: bool,
}

#[derive(Serialize)]
struct PlayReport<'a> {
    chart: String,
    state: SessionState,
    duration_ms: i64,
    summary: Option<&'a ScoreSummary>,
}

pub fn run(config: &Config, chart: &Path, options: PlayOptions) -> Result<()> {
    let chart_path = resolve_chart(chart)
        .with_context(|| format!("No chart found at {}", chart.display()))?;
    let beatmap = parse_file(&chart_path)
        .with_context(|| format!("Failed to read chart {}", chart_path.display()))?;
    warn_missing_audio(&chart_path, &beatmap);

    let replay = match (&options.replay, options.auto) {
        (Some(path), _) => Some(
            Replay::load(path)
                .with_context(|| format!("Failed to load replay {}", path.display()))?,
        ),
        (None, true) => Some(autoplay(&beatmap)),
        (None, false) => {
            warn!("No replay given and autoplay is off; every object will be missed");
            None
        }
    };
    if let (Some(path), Some(replay)) = (&options.save_replay, &replay) {
        replay
            .save(path)
            .with_context(|| format!("Failed to save replay {}", path.display()))?;
        info!("Saved replay to {}", path.display());
    }

    let mut input: Box<dyn InputSource> = match replay {
        Some(replay) => Box::new(ReplayInput::new(replay)),
        None => Box::new(IdleInput::default()),
    };

    let shutdown = setup_ctrlc_handler()?;
    let mut session = GameSession::new(&beatmap, config.gameplay.clone());
    let interval = config.session.frame_interval_ms();
    let title = beatmap.metadata.display_name();
    info!("Playing {}", title);

    if options.realtime {
        let clock = SystemClock::start(config.session.audio_offset_ms);
        run_loop(&mut session, &clock, input.as_mut(), &shutdown, options.json, || {
            thread::sleep(Duration::from_millis(interval as u64));
        });
    } else {
        let clock = ManualClock::new(config.session.audio_offset_ms);
        run_loop(&mut session, &clock, input.as_mut(), &shutdown, true, || {
            clock.advance(interval);
        });
    }

    let summary = session.summary();
    if options.json {
        let report = PlayReport {
            chart: title.clone(),
            state: session.state(),
            duration_ms: session.current_time(),
            summary: summary.as_ref(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    }

    let Some(summary) = summary else {
        if !options.json {
            println!("Aborted at {}ms; no result recorded", session.current_time());
        }
        return Ok(());
    };

    if !options.json {
        println!("{}", format_summary(&title, &summary));
    }

    if let Some(path) = &options.record {
        ResultLog::new(path)
            .append(&ResultRecord::new(&beatmap.metadata, summary))
            .with_context(|| format!("Failed to record result to {}", path.display()))?;
        info!("Recorded result to {}", path.display());
    }

    Ok(())
}

/// Tick until the session finishes or an abort is requested.
///
/// `step` runs after each tick: sleeping for a wall clock, advancing a manual one.
fn run_loop<C: Clock + ?Sized>(
    session: &mut GameSession,
    clock: &C,
    input: &mut dyn InputSource,
    shutdown: &ShutdownSignal,
    quiet: bool,
    mut step: impl FnMut(),
) {
    while !session.state().is_finished() {
        if shutdown.is_shutdown() {
            session.abort();
            break;
        }
        step();
        for result in session.tick(clock, input) {
            if !quiet {
                println!(
                    "{:>8}ms  {}",
                    result.time,
                    format_colored_judgement(result.judgement)
                );
            }
        }
    }
}

fn warn_missing_audio(chart_path: &Path, beatmap: &Beatmap) {
    let Some(audio) = &beatmap.metadata.audio_filename else {
        return;
    };
    let audio_path = chart_path
        .parent()
        .map_or_else(|| PathBuf::from(audio), |dir| dir.join(audio));
    if !audio_path.exists() {
        warn!("Audio file {} not found", audio_path.display());
    }
}
