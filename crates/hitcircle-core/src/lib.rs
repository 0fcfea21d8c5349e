pub mod chart;
pub mod config;
pub mod error;
pub mod judge;
pub mod library;
pub mod object;
pub mod record;
pub mod replay;
pub mod score;
pub mod session;

pub use chart::{Beatmap, ChartMetadata, HitObjectDescriptor, parse, parse_file};
pub use config::Config;
pub use error::{Error, Result};
pub use judge::{Judgement, JudgementEngine, JudgementResult};
pub use library::{Library, extract_all, extract_archive, find_chart, resolve_chart};
pub use object::{HitObject, Playfield, Point};
pub use record::{ResultLog, ResultRecord};
pub use replay::{Replay, ReplayFrame, ReplayInput, autoplay};
pub use score::{Grade, ScoreState, ScoreSummary};
pub use session::{
    Clock, GameSession, InputEvent, InputFrame, InputKey, InputSource, ManualClock,
    SessionState, SystemClock,
};
