//! Integration tests for hitcircle-core
//!
//! These tests drive whole sessions from chart text through to the score.

use hitcircle_core::chart::parse;
use hitcircle_core::config::GameplayConfig;
use hitcircle_core::judge::Judgement;
use hitcircle_core::object::Point;
use hitcircle_core::replay::{Replay, ReplayFrame, ReplayInput, autoplay};
use hitcircle_core::score::Grade;
use hitcircle_core::session::{
    Clock, GameSession, IdleInput, InputEvent, InputKey, ManualClock, SessionState,
};

/// Circle at 1000ms, then a 1000ms slider from (0,0) to (100,0) at 2000ms
const TWO_OBJECT_CHART: &str = "osu file format v14

[Metadata]
Title:Two Objects
Artist:Tester
Version:Basic

[HitObjects]
100,100,1000,1,0,0:0:0:0:
0,0,2000,2,0,L|100:0,1,100
";

fn press(x: f64, y: f64, time: i64) -> InputEvent {
    InputEvent {
        key: InputKey::K1,
        position: Point::new(x, y),
        time,
    }
}

fn two_object_session() -> GameSession {
    let beatmap = parse(TWO_OBJECT_CHART);
    assert_eq!(beatmap.objects.len(), 2);
    GameSession::new(&beatmap, GameplayConfig::default())
}

/// Play a session to the end with a manually stepped clock
fn play_out(session: &mut GameSession, input: &mut impl hitcircle_core::InputSource) {
    let clock = ManualClock::new(0);
    while !session.state().is_finished() {
        clock.advance(16);
        session.tick(&clock, input);
        assert!(clock.elapsed_ms() < 60_000, "session never completed");
    }
}

mod session_tests {
    use super::*;

    #[test]
    fn test_end_to_end_scoring() {
        let mut session = two_object_session();

        let results =
            session.advance_to(1000, &[press(100.0, 100.0, 1000)], Point::new(100.0, 100.0));
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].judgement, Judgement::Great);

        let results = session.advance_to(2000, &[press(0.0, 0.0, 2000)], Point::new(0.0, 0.0));
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].judgement, Judgement::Ok);

        let mut t = 2000;
        while session.state() == SessionState::Playing {
            t += 16;
            let ball = Point::new(((t - 2000) as f64 / 10.0).min(100.0), 0.0);
            let results = session.advance_to(t, &[], ball);
            if t < 3000 {
                assert!(results.is_empty(), "unexpected judgement at {}ms", t);
            }
        }

        assert_eq!(session.state(), SessionState::Completed);
        assert_eq!(session.score().history(), &[300, 100, 300]);
        let summary = session.summary().unwrap();
        assert_eq!(summary.total_score, 700);
        assert!((summary.accuracy - 100.0 * 700.0 / 900.0).abs() < 1e-9);
    }

    #[test]
    fn test_slider_break_awards_consolation() {
        let mut session = two_object_session();
        session.advance_to(1000, &[press(100.0, 100.0, 1000)], Point::new(100.0, 100.0));
        session.advance_to(2000, &[press(0.0, 0.0, 2000)], Point::new(0.0, 0.0));

        let results = session.advance_to(2100, &[], Point::new(400.0, 300.0));
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].judgement, Judgement::Meh);
        assert_eq!(session.state(), SessionState::Completed);
        assert_eq!(session.score().history(), &[300, 100, 50]);
        assert_eq!(session.score().accuracy(), 50.0);
    }

    #[test]
    fn test_idle_play_misses_everything() {
        let mut session = two_object_session();
        play_out(&mut session, &mut IdleInput::default());

        let summary = session.summary().unwrap();
        assert_eq!(summary.total_score, 0);
        assert_eq!(summary.accuracy, 0.0);
        assert_eq!(summary.counts.miss, 2);
        assert_eq!(summary.grade, Grade::D);
    }

    #[test]
    fn test_off_target_presses_are_not_scored() {
        let mut session = two_object_session();
        let results =
            session.advance_to(1000, &[press(400.0, 300.0, 1000)], Point::default());
        assert!(results.is_empty());
        assert!(session.score().history().is_empty());
        assert_eq!(session.score().accuracy(), 100.0);
    }
}

mod replay_tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_autoplay_scores_every_object() {
        let beatmap = parse(TWO_OBJECT_CHART);
        let mut session = GameSession::new(&beatmap, GameplayConfig::default());
        let mut input = ReplayInput::new(autoplay(&beatmap));
        play_out(&mut session, &mut input);

        let summary = session.summary().unwrap();
        assert_eq!(summary.total_score, 700);
        assert_eq!(summary.counts.great, 2);
        assert_eq!(summary.counts.ok, 1);
        assert_eq!(summary.counts.miss, 0);
    }

    #[test]
    fn test_saved_replay_plays_back_identically() {
        let beatmap = parse(TWO_OBJECT_CHART);
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("auto.json");
        autoplay(&beatmap).save(&path).unwrap();

        let mut session = GameSession::new(&beatmap, GameplayConfig::default());
        let mut input = ReplayInput::new(Replay::load(&path).unwrap());
        play_out(&mut session, &mut input);
        assert_eq!(session.score().history(), &[300, 100, 300]);
    }

    #[test]
    fn test_replay_press_judged_at_recorded_time() {
        // Key-down on the last millisecond of the window; the next 16ms tick lands after it
        let beatmap = parse("[HitObjects]\n100,100,1000,1,0,0:0:0:0:\n");
        let center = Point::new(100.0, 100.0);
        let replay = Replay::new(vec![
            ReplayFrame::new(0, center, vec![]),
            ReplayFrame::new(1150, center, vec![InputKey::K1]),
            ReplayFrame::new(1250, center, vec![]),
        ]);

        let mut session = GameSession::new(&beatmap, GameplayConfig::default());
        let mut input = ReplayInput::new(replay);
        play_out(&mut session, &mut input);

        assert_eq!(session.score().history(), &[300]);
        assert_eq!(session.summary().unwrap().total_score, 300);
    }
}

mod library_tests {
    use super::*;
    use hitcircle_core::library::{Library, extract_archive, resolve_chart};
    use hitcircle_core::chart::parse_file;
    use std::fs::File;
    use std::io::Write;
    use tempfile::TempDir;
    use zip::ZipWriter;
    use zip::write::SimpleFileOptions;

    #[test]
    fn test_extract_scan_and_play() {
        let dir = TempDir::new().unwrap();
        let archive = dir.path().join("Tester - Two Objects.osz");
        let mut writer = ZipWriter::new(File::create(&archive).unwrap());
        let options =
            SimpleFileOptions::default().compression_method(zip::CompressionMethod::Stored);
        writer.start_file("Tester - Two Objects (Basic).osu", options).unwrap();
        writer.write_all(TWO_OBJECT_CHART.as_bytes()).unwrap();
        writer.finish().unwrap();

        let root = dir.path().join("extracted");
        let folder = extract_archive(&archive, &root).unwrap();

        let library = Library::scan(&root).unwrap();
        assert_eq!(library.sets.len(), 1);
        assert_eq!(library.sets[0].name, "Tester - Two Objects");

        let chart = resolve_chart(&folder).unwrap();
        let beatmap = parse_file(&chart).unwrap();
        assert_eq!(beatmap.metadata.title, "Two Objects");
        assert_eq!(beatmap.metadata.version, "Basic");

        let mut session = GameSession::new(&beatmap, GameplayConfig::default());
        play_out(&mut session, &mut ReplayInput::new(autoplay(&beatmap)));
        assert_eq!(session.summary().unwrap().total_score, 700);
    }
}
