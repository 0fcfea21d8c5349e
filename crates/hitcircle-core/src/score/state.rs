use serde::{Deserialize, Serialize};

use super::Grade;
use crate::judge::{Judgement, JudgementResult};

/// Number of judgements of each kind in a play
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JudgementCounts {
    pub great: u32,
    pub ok: u32,
    pub meh: u32,
    pub miss: u32,
}

impl JudgementCounts {
    pub fn add(&mut self, judgement: Judgement) {
        match judgement {
            Judgement::Great => self.great += 1,
            Judgement::Ok => self.ok += 1,
            Judgement::Meh => self.meh += 1,
            Judgement::Miss => self.miss += 1,
        }
    }

    pub fn total(&self) -> u32 {
        self.great + self.ok + self.meh + self.miss
    }

    /// No object was missed outright
    pub fn is_full_combo(&self) -> bool {
        self.miss == 0
    }
}

/// Final figures of a play
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreSummary {
    pub total_score: u32,
    pub accuracy: f64,
    pub grade: Grade,
    pub counts: JudgementCounts,
}

/// Running score of a session: the history of awarded values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScoreState {
    history: Vec<u32>,
    counts: JudgementCounts,
}

impl ScoreState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn accumulate(&mut self, result: &JudgementResult) {
        self.history.push(result.points());
        self.counts.add(result.judgement);
    }

    pub fn history(&self) -> &[u32] {
        &self.history
    }

    pub fn counts(&self) -> JudgementCounts {
        self.counts
    }

    pub fn total_score(&self) -> u32 {
        self.history.iter().sum()
    }

    /// Percentage of the maximum value over every judgement so far.
    ///
    /// 100.0 before anything has been judged.
    pub fn accuracy(&self) -> f64 {
        if self.history.is_empty() {
            return 100.0;
        }
        let max = Judgement::MAX_POINTS as f64 * self.history.len() as f64;
        (100.0 * self.total_score() as f64 / max).clamp(0.0, 100.0)
    }

    pub fn grade(&self) -> Grade {
        Grade::from_accuracy(self.accuracy(), self.counts.miss)
    }

    pub fn summary(&self) -> ScoreSummary {
        ScoreSummary {
            total_score: self.total_score(),
            accuracy: self.accuracy(),
            grade: self.grade(),
            counts: self.counts,
        }
    }
}
