pub mod event;
pub mod goals;

pub use event::{ClockTime, EventCategory, Intensity, ScheduledEvent, TimeParseError};
pub use goals::{GoalAxis, GoalVector};
