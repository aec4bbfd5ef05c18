//! Test utilities and helpers
//!
//! Mock data factories and assertion helpers shared by the unit tests.
//! Sample schedules live here as fixtures handed to the core at the boundary;
//! the core itself never reads from module-level data.

use crate::models::{ClockTime, EventCategory, GoalVector, Intensity, ScheduledEvent};

/// ---------------------------------------------------------------------------
/// Mock Data Factories
/// ---------------------------------------------------------------------------

/// Create a generic scheduled event for testing.
pub fn mock_event(id: &str, time: &str, category: EventCategory) -> ScheduledEvent {
  ScheduledEvent {
    id: id.to_string(),
    title: format!("Event {}", id),
    subtitle: "test".to_string(),
    time: ClockTime::parse(time).expect("test time must be valid"),
    category,
    duration_min: None,
    intensity: None,
    description: None,
    related_workout_id: None,
  }
}

/// Create a mock workout at 06:30 with the given duration and intensity.
pub fn mock_workout(duration_min: Option<i64>, intensity: Option<Intensity>) -> ScheduledEvent {
  mock_workout_at("06:30", duration_min, intensity)
}

/// Create a mock workout (id "w1") at an arbitrary start time.
pub fn mock_workout_at(
  time: &str,
  duration_min: Option<i64>,
  intensity: Option<Intensity>,
) -> ScheduledEvent {
  ScheduledEvent {
    id: "w1".to_string(),
    title: "Morning run".to_string(),
    subtitle: "Endurance".to_string(),
    time: ClockTime::parse(time).expect("test time must be valid"),
    category: EventCategory::Workout,
    duration_min,
    intensity,
    description: None,
    related_workout_id: None,
  }
}

/// A realistic sample day: coffee, a fueling-worthy run, meals and a swim.
pub fn sample_day_events() -> Vec<ScheduledEvent> {
  let mut run = mock_workout_at("06:30", Some(75), Some(Intensity::Medium));
  run.id = "run1".to_string();

  let mut swim = mock_event("swim1", "17:00", EventCategory::Swim);
  swim.title = "Evening swim".to_string();
  swim.duration_min = Some(45);
  swim.intensity = Some(Intensity::High);

  vec![
    mock_event("coffee1", "06:00", EventCategory::Coffee),
    run,
    mock_event("breakfast", "08:30", EventCategory::Meal),
    mock_event("lunch", "12:30", EventCategory::Meal),
    swim,
    mock_event("dinner", "19:30", EventCategory::Meal),
  ]
}

/// Create a goal vector with explicit per-axis values.
pub fn mock_goal_vector(
  performance: i64,
  recovery: i64,
  muscle_gain: i64,
  weight_loss: i64,
) -> GoalVector {
  GoalVector {
    performance,
    recovery,
    muscle_gain,
    weight_loss,
  }
}

/// ---------------------------------------------------------------------------
/// Test Macros
/// ---------------------------------------------------------------------------

/// Assert two floats are approximately equal within a tolerance
#[macro_export]
macro_rules! assert_approx_eq {
  ($left:expr, $right:expr, $tolerance:expr) => {
    let diff = ($left - $right).abs();
    assert!(
      diff < $tolerance,
      "Values not approximately equal: {} vs {} (diff: {}, tolerance: {})",
      $left,
      $right,
      diff,
      $tolerance
    );
  };
}

/// ---------------------------------------------------------------------------
/// Tests for Test Utilities
/// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_mock_factories_create_valid_data() {
    let workout = mock_workout(Some(75), Some(Intensity::High));
    assert_eq!(workout.category, EventCategory::Workout);
    assert_eq!(workout.time.to_string(), "06:30");

    let event = mock_event("x", "12:00", EventCategory::Meal);
    assert_eq!(event.time.minutes(), 720);
    assert!(event.duration_min.is_none());
  }

  #[test]
  fn test_sample_day_has_both_trainable_categories() {
    let events = sample_day_events();
    assert!(events.iter().any(|e| e.category == EventCategory::Workout));
    assert!(events.iter().any(|e| e.category == EventCategory::Swim));
    assert_eq!(events.len(), 6);
  }
}
