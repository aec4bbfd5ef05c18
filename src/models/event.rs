use std::fmt;

use chrono::{NaiveTime, Timelike};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// ---------------------------------------------------------------------------
/// Clock Time
/// ---------------------------------------------------------------------------

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimeParseError {
  #[error("invalid clock time {input:?}: expected HH:MM with hours 00-23 and minutes 00-59")]
  InvalidTime { input: String },
}

/// A time of day stored as minutes since midnight.
///
/// Parsing is strict: `HH:MM`, 24-hour, no timezone. This is the single point
/// where time strings enter the system, so anything downstream can treat times
/// as plain integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime(u32);

impl ClockTime {
  /// Parse a `HH:MM` string, rejecting malformed or out-of-range input.
  pub fn parse(input: &str) -> Result<Self, TimeParseError> {
    let time = NaiveTime::parse_from_str(input, "%H:%M").map_err(|_| {
      TimeParseError::InvalidTime {
        input: input.to_string(),
      }
    })?;
    Ok(Self(time.hour() * 60 + time.minute()))
  }

  /// Build from raw minutes without range validation.
  ///
  /// Fueling arithmetic on a late workout can land past 23:59 (start time plus
  /// duration). The reference behaviour keeps such times un-wrapped rather
  /// than applying modulo-1440, so this constructor accepts them and `Display`
  /// renders e.g. "24:30".
  pub fn from_minutes(minutes: u32) -> Self {
    Self(minutes)
  }

  pub fn minutes(self) -> u32 {
    self.0
  }
}

impl fmt::Display for ClockTime {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{:02}:{:02}", self.0 / 60, self.0 % 60)
  }
}

impl Serialize for ClockTime {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(self)
  }
}

impl<'de> Deserialize<'de> for ClockTime {
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    let raw = String::deserialize(deserializer)?;
    ClockTime::parse(&raw).map_err(de::Error::custom)
  }
}

/// ---------------------------------------------------------------------------
/// Scheduled Events
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventCategory {
  Coffee,
  Workout,
  Meal,
  Swim,
  Fueling,
}

impl EventCategory {
  /// Whether events of this category can trigger supplemental fueling.
  pub fn is_trainable(self) -> bool {
    matches!(self, EventCategory::Workout | EventCategory::Swim)
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Intensity {
  Low,
  Medium,
  High,
}

/// One item on a person's daily schedule.
///
/// Base events come from the caller; fueling events are derived on every read
/// by the planner and carry a back-reference to their source workout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledEvent {
  pub id: String,
  pub title: String,
  pub subtitle: String,
  pub time: ClockTime,
  pub category: EventCategory,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub duration_min: Option<i64>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub intensity: Option<Intensity>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
  /// Set only on generated fueling events; points at the source workout.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub related_workout_id: Option<String>,
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------
