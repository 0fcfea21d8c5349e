use serde::{Deserialize, Serialize};
use strum::IntoStaticStr;
use tracing::debug;

use super::Point;
use super::circle::hit_test;
use crate::config::GameplayConfig;
use crate::judge::Judgement;

/// Piecewise-linear path through the slider's start point and control points.
///
/// Progress is split evenly between segments regardless of their length.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SliderPath {
    points: Vec<Point>,
}

impl SliderPath {
    pub fn new(start: Point, control_points: &[Point]) -> Self {
        let mut points = Vec::with_capacity(control_points.len() + 1);
        points.push(start);
        points.extend_from_slice(control_points);
        Self { points }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn start(&self) -> Point {
        self.points[0]
    }

    pub fn end(&self) -> Point {
        self.points[self.points.len() - 1]
    }

    pub fn segment_count(&self) -> usize {
        self.points.len() - 1
    }

    /// Position at `progress` (clamped to `[0, 1]`) along the path
    pub fn position_at(&self, progress: f64) -> Point {
        let segments = self.segment_count();
        if segments == 0 {
            return self.start();
        }
        let scaled = progress.clamp(0.0, 1.0) * segments as f64;
        let index = (scaled.floor() as usize).min(segments - 1);
        let local = scaled - index as f64;
        self.points[index].lerp(self.points[index + 1], local)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, IntoStaticStr)]
pub enum SliderState {
    #[default]
    Pending,
    Held {
        last_check_time: i64,
    },
    Completed,
    Missed,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Slider {
    path: SliderPath,
    start_time: i64,
    duration: i64,
    repeats: u32,
    state: SliderState,
}

impl Slider {
    pub fn new(
        start: Point,
        control_points: &[Point],
        start_time: i64,
        duration: i64,
        repeats: u32,
    ) -> Self {
        Self {
            path: SliderPath::new(start, control_points),
            start_time,
            duration: duration.max(0),
            repeats: repeats.max(1),
            state: SliderState::Pending,
        }
    }

    pub fn path(&self) -> &SliderPath {
        &self.path
    }

    pub fn position(&self) -> Point {
        self.path.start()
    }

    pub fn start_time(&self) -> i64 {
        self.start_time
    }

    pub fn end_time(&self) -> i64 {
        self.start_time.saturating_add(self.duration)
    }

    pub fn duration(&self) -> i64 {
        self.duration
    }

    pub fn repeats(&self) -> u32 {
        self.repeats
    }

    pub fn state(&self) -> SliderState {
        self.state
    }

    pub fn is_held(&self) -> bool {
        matches!(self.state, SliderState::Held { .. })
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self.state, SliderState::Completed | SliderState::Missed)
    }

    pub fn visible_at(&self, time: i64, config: &GameplayConfig) -> bool {
        !self.is_resolved()
            && time >= self.start_time.saturating_sub(config.approach_duration_ms)
            && time <= self.end_time().saturating_add(config.hit_window_ms)
    }

    /// Ball position for `global_progress` in `[0, 1]` across the whole slider.
    ///
    /// Each repeat is one span over the path; odd spans run in reverse.
    pub fn ball_position(&self, global_progress: f64) -> Point {
        let span_progress = global_progress.clamp(0.0, 1.0) * self.repeats as f64;
        let span = span_progress.floor();
        let local = span_progress - span;
        if (span as u64) % 2 == 1 {
            self.path.position_at(1.0 - local)
        } else {
            self.path.position_at(local)
        }
    }

    /// Ball position at session time `time`
    pub fn ball_position_at(&self, time: i64) -> Point {
        self.ball_position(self.progress_at(time))
    }

    /// Fraction of the total duration elapsed at `time`, clamped to `[0, 1]`
    pub fn progress_at(&self, time: i64) -> f64 {
        if self.duration == 0 {
            return if time >= self.start_time { 1.0 } else { 0.0 };
        }
        (time.saturating_sub(self.start_time) as f64 / self.duration as f64).clamp(0.0, 1.0)
    }

    /// Judge a press on the slider head. Success starts holding and awards
    /// partial credit; the full value comes on completion.
    pub fn judge_start(
        &mut self,
        input: Point,
        time: i64,
        config: &GameplayConfig,
    ) -> Option<Judgement> {
        if self.state != SliderState::Pending
            || !hit_test(self.position(), self.start_time, input, time, config)
        {
            return None;
        }
        self.state = SliderState::Held {
            last_check_time: time,
        };
        debug!("Slider at {}ms started at {}ms", self.start_time, time);
        Some(Judgement::Ok)
    }

    /// Advance the slider to `time` with the pointer at `pointer`.
    ///
    /// - Pending past its hit window: missed, no points.
    /// - Held at or past its end: completed, full value.
    /// - Held otherwise: at most one tracking check per check interval; a
    ///   pointer beyond the follow tolerance breaks the slider with a
    ///   consolation value.
    pub fn update(
        &mut self,
        pointer: Point,
        time: i64,
        config: &GameplayConfig,
    ) -> Option<Judgement> {
        match self.state {
            SliderState::Pending => {
                if time <= self.start_time.saturating_add(config.hit_window_ms) {
                    return None;
                }
                self.state = SliderState::Missed;
                debug!("Slider at {}ms missed", self.start_time);
                Some(Judgement::Miss)
            }
            SliderState::Held { last_check_time } => {
                if time >= self.end_time() {
                    self.state = SliderState::Completed;
                    debug!("Slider at {}ms completed", self.start_time);
                    return Some(Judgement::Great);
                }
                if time.saturating_sub(last_check_time) < config.slider_check_interval_ms {
                    return None;
                }
                let ball = self.ball_position_at(time);
                if pointer.distance(ball) <= config.follow_tolerance {
                    self.state = SliderState::Held {
                        last_check_time: time,
                    };
                    None
                } else {
                    self.state = SliderState::Missed;
                    debug!(
                        "Slider at {}ms broken at {}ms (pointer {:.1} from ball)",
                        self.start_time,
                        time,
                        pointer.distance(ball)
                    );
                    Some(Judgement::Meh)
                }
            }
            SliderState::Completed | SliderState::Missed => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_near(actual: Point, expected: Point) {
        assert!(
            actual.distance(expected) < 1e-9,
            "expected {:?}, got {:?}",
            expected,
            actual
        );
    }

    fn straight_slider(repeats: u32) -> Slider {
        Slider::new(
            Point::new(0.0, 0.0),
            &[Point::new(100.0, 0.0)],
            2000,
            1000,
            repeats,
        )
    }

    #[test]
    fn test_path_segments_by_count_not_length() {
        let path = SliderPath::new(
            Point::new(0.0, 0.0),
            &[Point::new(10.0, 0.0), Point::new(10.0, 100.0)],
        );
        assert_eq!(path.segment_count(), 2);
        // Halfway through progress is the shared vertex, not halfway by length
        assert_near(path.position_at(0.5), Point::new(10.0, 0.0));
        assert_near(path.position_at(0.25), Point::new(5.0, 0.0));
        assert_near(path.position_at(0.75), Point::new(10.0, 50.0));
        assert_near(path.position_at(1.0), Point::new(10.0, 100.0));
    }

    #[test]
    fn test_empty_path_is_anchored() {
        let path = SliderPath::new(Point::new(30.0, 40.0), &[]);
        assert_eq!(path.segment_count(), 0);
        assert_near(path.position_at(0.7), Point::new(30.0, 40.0));
    }

    #[test]
    fn test_position_clamped() {
        let slider = straight_slider(1);
        assert_near(slider.path().position_at(-1.0), Point::new(0.0, 0.0));
        assert_near(slider.path().position_at(2.0), Point::new(100.0, 0.0));
    }

    #[test]
    fn test_repeat_parity() {
        let slider = straight_slider(2);
        assert_near(slider.ball_position(0.25), Point::new(50.0, 0.0));
        assert_near(slider.ball_position(0.5), Point::new(100.0, 0.0));
        assert_near(slider.ball_position(0.75), Point::new(50.0, 0.0));
        assert_near(slider.ball_position(1.0), Point::new(0.0, 0.0));

        // Same points by session time
        assert_near(slider.ball_position_at(2250), Point::new(50.0, 0.0));
        assert_near(slider.ball_position_at(2750), Point::new(50.0, 0.0));
        // Reversed span: moving back towards the head
        assert_near(slider.ball_position_at(2600), Point::new(80.0, 0.0));
    }

    #[test]
    fn test_single_span_ends_at_tail() {
        let slider = straight_slider(1);
        assert_near(slider.ball_position(1.0), Point::new(100.0, 0.0));
        assert_near(slider.ball_position(0.3), Point::new(30.0, 0.0));
    }

    #[test]
    fn test_judge_start_awards_partial_credit() {
        let config = GameplayConfig::default();
        let mut slider = straight_slider(1);
        assert_eq!(
            slider.judge_start(Point::new(0.0, 0.0), 2000, &config),
            Some(Judgement::Ok)
        );
        assert_eq!(
            slider.state(),
            SliderState::Held {
                last_check_time: 2000
            }
        );
        // Second press on a held slider is a no-op
        assert_eq!(slider.judge_start(Point::new(0.0, 0.0), 2010, &config), None);
    }

    #[test]
    fn test_judge_start_window_and_radius() {
        let config = GameplayConfig::default();
        let mut late = straight_slider(1);
        assert_eq!(late.judge_start(Point::new(0.0, 0.0), 2151, &config), None);
        let mut far = straight_slider(1);
        assert_eq!(far.judge_start(Point::new(0.0, 65.0), 2000, &config), None);
        assert_eq!(far.state(), SliderState::Pending);
    }

    #[test]
    fn test_completes_when_tracked() {
        let config = GameplayConfig::default();
        let mut slider = straight_slider(1);
        slider.judge_start(Point::new(0.0, 0.0), 2000, &config);

        let mut t = 2000;
        while t < 3000 {
            t += 16;
            let result = slider.update(slider.ball_position_at(t), t, &config);
            if t < 3000 {
                assert_eq!(result, None, "unexpected judgement at {}", t);
            } else {
                assert_eq!(result, Some(Judgement::Great));
            }
        }
        assert_eq!(slider.state(), SliderState::Completed);
    }

    #[test]
    fn test_completes_exactly_at_end() {
        let config = GameplayConfig::default();
        let mut slider = straight_slider(1);
        slider.judge_start(Point::new(0.0, 0.0), 2000, &config);
        assert_eq!(
            slider.update(Point::new(100.0, 0.0), 3000, &config),
            Some(Judgement::Great)
        );
    }

    #[test]
    fn test_breaks_when_pointer_strays() {
        let config = GameplayConfig::default();
        let mut slider = straight_slider(1);
        slider.judge_start(Point::new(0.0, 0.0), 2000, &config);

        let far_away = Point::new(400.0, 300.0);
        // Within the check interval nothing is evaluated
        assert_eq!(slider.update(far_away, 2050, &config), None);
        assert!(slider.is_held());
        assert_eq!(slider.update(far_away, 2100, &config), Some(Judgement::Meh));
        assert_eq!(slider.state(), SliderState::Missed);
    }

    #[test]
    fn test_check_interval_resets_on_success() {
        let config = GameplayConfig::default();
        let mut slider = straight_slider(1);
        slider.judge_start(Point::new(0.0, 0.0), 2000, &config);

        assert_eq!(slider.update(slider.ball_position_at(2100), 2100, &config), None);
        assert_eq!(
            slider.state(),
            SliderState::Held {
                last_check_time: 2100
            }
        );
        // Straying right after a successful check is not noticed until the next interval
        assert_eq!(slider.update(Point::new(500.0, 0.0), 2150, &config), None);
        assert_eq!(
            slider.update(Point::new(500.0, 0.0), 2200, &config),
            Some(Judgement::Meh)
        );
    }

    #[test]
    fn test_unclicked_slider_misses() {
        let config = GameplayConfig::default();
        let mut slider = straight_slider(1);
        assert_eq!(slider.update(Point::default(), 2150, &config), None);
        assert_eq!(
            slider.update(Point::default(), 2151, &config),
            Some(Judgement::Miss)
        );
        assert_eq!(slider.state(), SliderState::Missed);
    }

    #[test]
    fn test_resolved_is_idempotent() {
        let config = GameplayConfig::default();
        let mut slider = straight_slider(1);
        slider.judge_start(Point::new(0.0, 0.0), 2000, &config);
        slider.update(Point::new(100.0, 0.0), 3000, &config);
        assert_eq!(slider.state(), SliderState::Completed);

        for t in [2000, 2500, 3000, 5000] {
            assert_eq!(slider.judge_start(Point::new(0.0, 0.0), t, &config), None);
            assert_eq!(slider.update(Point::new(999.0, 999.0), t, &config), None);
        }
        assert_eq!(slider.state(), SliderState::Completed);
    }

    #[test]
    fn test_zero_duration_slider() {
        let config = GameplayConfig::default();
        let mut slider = Slider::new(Point::new(10.0, 10.0), &[], 500, 0, 1);
        assert_near(slider.ball_position_at(500), Point::new(10.0, 10.0));
        slider.judge_start(Point::new(10.0, 10.0), 500, &config);
        assert_eq!(
            slider.update(Point::new(10.0, 10.0), 500, &config),
            Some(Judgement::Great)
        );
    }
}
