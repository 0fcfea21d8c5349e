//! Session driver.
//!
//! This module contains:
//! - `GameSession` - one play of a chart, advanced tick by tick
//! - `SessionState` - Ready, Playing, Completed, Aborted
//! - `Clock`, `SystemClock`, `ManualClock` - time collaborators
//! - `InputSource`, `InputFrame`, `InputEvent`, `InputKey` - input collaborators
//! - `ObjectView` - render snapshot of a visible object

mod clock;
mod driver;
mod input;
mod state;
mod view;

pub use clock::*;
pub use driver::*;
pub use input::*;
pub use state::*;
pub use view::*;
