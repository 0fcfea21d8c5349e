use serde::{Deserialize, Serialize};
use strum::{EnumIter, FromRepr, IntoStaticStr};

/// Scored outcome of a single judgement event.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    EnumIter,
    FromRepr,
    IntoStaticStr,
)]
#[repr(u16)]
pub enum Judgement {
    #[strum(serialize = "MISS")]
    Miss = 0,
    #[strum(serialize = "50")]
    Meh = 50,
    #[strum(serialize = "100")]
    Ok = 100,
    #[strum(serialize = "300")]
    Great = 300,
}

impl Judgement {
    /// Highest value a single judgement can award.
    pub const MAX_POINTS: u32 = 300;

    pub fn from_points(points: u16) -> Option<Self> {
        Self::from_repr(points)
    }

    pub fn points(&self) -> u32 {
        *self as u32
    }

    pub fn short_name(&self) -> &'static str {
        self.into()
    }

    pub fn is_miss(&self) -> bool {
        matches!(self, Self::Miss)
    }
}

impl std::fmt::Display for Judgement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.short_name())
    }
}

/// A judgement attributed to one object of the timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct JudgementResult {
    pub judgement: Judgement,
    /// Index of the object in the session timeline
    pub object_index: usize,
    /// Session time (ms) at which the judgement was made
    pub time: i64,
}

impl JudgementResult {
    pub fn points(&self) -> u32 {
        self.judgement.points()
    }
}
