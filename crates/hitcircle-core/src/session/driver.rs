use tracing::{debug, info};

use super::{Clock, InputEvent, InputSource, ObjectView, SessionState};
use crate::chart::Beatmap;
use crate::config::GameplayConfig;
use crate::judge::{JudgementEngine, JudgementResult};
use crate::object::{Playfield, Point};
use crate::score::{ScoreState, ScoreSummary};

/// One play of a chart.
///
/// Owns the timeline (through the engine), the score and the authoritative
/// session time. Clock and input are passed in on every tick.
#[derive(Debug, Clone)]
pub struct GameSession {
    engine: JudgementEngine,
    score: ScoreState,
    state: SessionState,
    current_time: i64,
    pointer: Point,
}

impl GameSession {
    pub fn new(beatmap: &Beatmap, config: GameplayConfig) -> Self {
        Self::with_engine(JudgementEngine::new(beatmap, config))
    }

    pub fn with_engine(engine: JudgementEngine) -> Self {
        Self {
            engine,
            score: ScoreState::new(),
            state: SessionState::Ready,
            current_time: 0,
            pointer: Point::default(),
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn current_time(&self) -> i64 {
        self.current_time
    }

    pub fn pointer(&self) -> Point {
        self.pointer
    }

    pub fn score(&self) -> &ScoreState {
        &self.score
    }

    pub fn engine(&self) -> &JudgementEngine {
        &self.engine
    }

    /// Move time forward by `dt_ms` and apply this tick's input.
    pub fn advance(
        &mut self,
        dt_ms: i64,
        presses: &[InputEvent],
        pointer: Point,
    ) -> Vec<JudgementResult> {
        self.advance_to(self.current_time.saturating_add(dt_ms.max(0)), presses, pointer)
    }

    /// Move time to `now_ms` and apply this tick's input.
    ///
    /// Presses are judged in order, each at its own timestamp (never later
    /// than `now_ms`), before time-driven updates. Times earlier than the
    /// current one are clamped. Finished sessions ignore the call.
    pub fn advance_to(
        &mut self,
        now_ms: i64,
        presses: &[InputEvent],
        pointer: Point,
    ) -> Vec<JudgementResult> {
        if self.state.is_finished() {
            return Vec::new();
        }
        if self.state == SessionState::Ready {
            self.state = SessionState::Playing;
            info!(
                "Session started ({} objects)",
                self.engine.objects().len()
            );
        }

        self.current_time = self.current_time.max(now_ms);
        self.pointer = pointer;

        let mut results = Vec::new();
        for press in presses {
            let time = press.time.min(self.current_time);
            results.extend(self.engine.on_input(press.position, time));
        }
        results.extend(self.engine.on_tick(self.current_time, pointer));

        for result in &results {
            debug!(
                "{} on object {} at {}ms",
                result.judgement, result.object_index, result.time
            );
            self.score.accumulate(result);
        }

        if self.engine.is_finished() {
            self.state = SessionState::Completed;
            info!(
                "Session completed at {}ms: score {}, accuracy {:.2}%",
                self.current_time,
                self.score.total_score(),
                self.score.accuracy()
            );
        }
        results
    }

    /// Read the clock, poll input and advance.
    pub fn tick<C, I>(&mut self, clock: &C, input: &mut I) -> Vec<JudgementResult>
    where
        C: Clock + ?Sized,
        I: InputSource + ?Sized,
    {
        let now = clock.elapsed_ms();
        let frame = input.poll(now);
        self.advance_to(now, &frame.presses, frame.pointer)
    }

    /// Stop the session and discard its score. No-op once finished.
    pub fn abort(&mut self) {
        if self.state.is_finished() {
            return;
        }
        self.state = SessionState::Aborted;
        self.score = ScoreState::new();
        info!("Session aborted at {}ms", self.current_time);
    }

    /// Final figures, available only after completion
    pub fn summary(&self) -> Option<ScoreSummary> {
        (self.state == SessionState::Completed).then(|| self.score.summary())
    }

    /// Render snapshot of the objects visible at the current time
    pub fn view(&self, playfield: &Playfield) -> Vec<ObjectView> {
        let config = self.engine.config();
        self.engine
            .objects()
            .iter()
            .enumerate()
            .filter(|(_, object)| object.visible_at(self.current_time, config))
            .map(|(index, object)| {
                ObjectView::new(index, object, self.current_time, config, playfield)
            })
            .collect()
    }
}
