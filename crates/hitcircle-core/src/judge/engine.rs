use tracing::debug;

use super::JudgementResult;
use crate::chart::Beatmap;
use crate::config::GameplayConfig;
use crate::object::{HitObject, Point};

/// Judges presses and time against the timeline of hit objects.
///
/// Objects are kept in start-time order. Everything before `cursor` is
/// resolved, so both entry points start scanning there.
#[derive(Debug, Clone)]
pub struct JudgementEngine {
    objects: Vec<HitObject>,
    config: GameplayConfig,
    cursor: usize,
}

impl JudgementEngine {
    pub fn new(beatmap: &Beatmap, config: GameplayConfig) -> Self {
        Self::from_objects(beatmap.objects.iter().map(HitObject::from).collect(), config)
    }

    pub fn from_objects(mut objects: Vec<HitObject>, config: GameplayConfig) -> Self {
        objects.sort_by_key(HitObject::start_time);
        Self {
            objects,
            config,
            cursor: 0,
        }
    }

    pub fn objects(&self) -> &[HitObject] {
        &self.objects
    }

    pub fn config(&self) -> &GameplayConfig {
        &self.config
    }

    /// Number of objects still waiting for a judgement
    pub fn remaining(&self) -> usize {
        self.objects[self.cursor..]
            .iter()
            .filter(|o| !o.is_resolved())
            .count()
    }

    pub fn is_finished(&self) -> bool {
        self.cursor == self.objects.len()
    }

    /// Judge one press against every unresolved object in timeline order.
    ///
    /// Each object is judged on its own; a single press may resolve several
    /// overlapping objects. Misses on position or timing produce nothing.
    pub fn on_input(&mut self, position: Point, time: i64) -> Vec<JudgementResult> {
        let latest_start = time.saturating_add(self.config.hit_window_ms);
        let mut results = Vec::new();
        for (index, object) in self.objects.iter_mut().enumerate().skip(self.cursor) {
            if object.start_time() > latest_start {
                break;
            }
            if let Some(judgement) = object.judge(position, time, &self.config) {
                results.push(JudgementResult {
                    judgement,
                    object_index: index,
                    time,
                });
            }
        }
        self.advance_cursor();
        results
    }

    /// Apply the passage of time: expire missed objects and track held sliders.
    pub fn on_tick(&mut self, time: i64, pointer: Point) -> Vec<JudgementResult> {
        let latest_start = time.saturating_add(self.config.hit_window_ms);
        let mut results = Vec::new();
        for (index, object) in self.objects.iter_mut().enumerate().skip(self.cursor) {
            if object.start_time() > latest_start {
                break;
            }
            if let Some(judgement) = object.update(pointer, time, &self.config) {
                results.push(JudgementResult {
                    judgement,
                    object_index: index,
                    time,
                });
            }
        }
        self.advance_cursor();
        results
    }

    fn advance_cursor(&mut self) {
        let before = self.cursor;
        while self
            .objects
            .get(self.cursor)
            .is_some_and(HitObject::is_resolved)
        {
            self.cursor += 1;
        }
        if self.cursor != before {
            debug!(
                "Timeline cursor {} -> {} of {}",
                before,
                self.cursor,
                self.objects.len()
            );
        }
    }
}
