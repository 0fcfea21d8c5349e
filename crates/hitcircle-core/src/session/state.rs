use serde::{Deserialize, Serialize};
use strum::IntoStaticStr;

/// Lifecycle of a play session
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, IntoStaticStr,
)]
pub enum SessionState {
    #[default]
    Ready,
    Playing,
    Completed,
    Aborted,
}

impl SessionState {
    /// Completed or aborted; no further ticks have any effect
    pub fn is_finished(&self) -> bool {
        matches!(self, Self::Completed | Self::Aborted)
    }

    pub fn short_name(&self) -> &'static str {
        self.into()
    }
}

impl std::fmt::Display for SessionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.short_name())
    }
}
