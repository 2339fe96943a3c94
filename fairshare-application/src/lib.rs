#![warn(clippy::uninlined_format_args)]

pub mod error;
pub mod model;
pub mod ports;
pub mod split_processor;

pub use error::{QuickSplitError, RosterParseError, SplitError};
pub use model::{DegradedRow, ParticipantInput, QuickShare, QuickSplit, SplitResult};
pub use ports::RosterParser;
pub use split_processor::{MAX_QUICK_SPLIT_HEADCOUNT, SplitProcessor};
