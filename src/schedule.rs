//! Day-schedule assembly and time primitives
//!
//! The calendar screens hand us the day's base events; we fold in the
//! generated fueling events for every workout or swim that warrants them and
//! return the merged list in display order.

use tracing::debug;

use crate::fueling::{generate_fueling_events, needs_fueling};
use crate::models::{ClockTime, ScheduledEvent, TimeParseError};

/// ---------------------------------------------------------------------------
/// Time Primitives
/// ---------------------------------------------------------------------------

/// Parse a `HH:MM` string into minutes since midnight.
pub fn parse_time_to_minutes(input: &str) -> Result<u32, TimeParseError> {
  ClockTime::parse(input).map(|t| t.minutes())
}

/// Format minutes since midnight as a zero-padded `HH:MM` string.
///
/// Round-trips with `parse_time_to_minutes` for every input in [0, 1439].
pub fn minutes_to_time_string(minutes: u32) -> String {
  ClockTime::from_minutes(minutes).to_string()
}

/// ---------------------------------------------------------------------------
/// Day Schedule
/// ---------------------------------------------------------------------------

/// Merge base events with generated fueling events and sort for display.
///
/// Fueling events are derived fresh on every call for each workout/swim that
/// `needs_fueling`; they have no lifecycle of their own. The sort is stable
/// and ascending by time-of-day, so tied events keep insertion order (base
/// events first, then generated events in source-workout order).
pub fn build_day_schedule(base_events: &[ScheduledEvent]) -> Vec<ScheduledEvent> {
  let mut schedule = base_events.to_vec();

  for event in base_events {
    if event.category.is_trainable() && needs_fueling(event) {
      schedule.extend(generate_fueling_events(event));
    }
  }

  debug!(
    base = base_events.len(),
    generated = schedule.len() - base_events.len(),
    "assembled day schedule"
  );

  schedule.sort_by_key(|e| e.time.minutes());
  schedule
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------
