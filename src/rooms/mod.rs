//! Building and room aggregation of class meetings.
//!
//! [`format`] reshapes one subject's class records into the shared
//! [`types::RoomSchedule`]; [`aggregate`] drives that over every subject.

pub mod aggregate;
pub mod format;
pub mod time;
pub mod types;
pub mod utility;

pub use aggregate::{ScheduleOptions, collect_room_schedule};
pub use format::format_classes;
pub use time::TimeFormat;
pub use types::{MeetingSummary, RoomSchedule};
