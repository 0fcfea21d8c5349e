use serde::{Deserialize, Serialize};
use strum::{FromRepr, IntoStaticStr};

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
    Default,
    FromRepr,
    IntoStaticStr,
)]
#[repr(u8)]
pub enum Grade {
    #[default]
    D = 0,
    C = 1,
    B = 2,
    A = 3,
    S = 4,
    #[strum(serialize = "SS")]
    Ss = 5,
}

impl Grade {
    pub fn from_u8(value: u8) -> Option<Self> {
        Self::from_repr(value)
    }

    /// Grade from accuracy (percent) and miss count.
    ///
    /// SS needs a perfect play. A single miss caps the grade at A.
    pub fn from_accuracy(accuracy: f64, misses: u32) -> Self {
        if accuracy >= 100.0 {
            Self::Ss
        } else if accuracy >= 95.0 && misses == 0 {
            Self::S
        } else if accuracy >= 90.0 {
            Self::A
        } else if accuracy >= 80.0 {
            Self::B
        } else if accuracy >= 70.0 {
            Self::C
        } else {
            Self::D
        }
    }

    pub fn short_name(&self) -> &'static str {
        self.into()
    }
}

impl std::fmt::Display for Grade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.short_name())
    }
}
