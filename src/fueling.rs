//! Deterministic fueling planner for scheduled workouts
//!
//! Decides whether a workout needs supplemental fueling and, if so,
//! synthesizes the before/after calendar events and the multi-phase
//! nutrition plan shown on the detail screen. Everything here is a pure
//! function over the event passed in; nothing is persisted.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::{ClockTime, EventCategory, Intensity, ScheduledEvent};

/// A workout longer than this always gets fueling support.
pub const FUELING_DURATION_MIN: i64 = 60;

/// High-intensity work at or past this duration also gets fueling support.
pub const HIGH_INTENSITY_FUELING_MIN: i64 = 45;

/// How far before the workout the pre-fueling event is scheduled.
pub const PRE_FUELING_LEAD_MIN: i64 = 30;

/// Assumed duration when a workout doesn't carry one.
pub const DEFAULT_DURATION_MIN: i64 = 60;

/// ---------------------------------------------------------------------------
/// Fueling Decision
/// ---------------------------------------------------------------------------

/// Whether an event warrants supplemental fueling.
///
/// True for anything longer than an hour, or high-intensity work of 45 minutes
/// and up. Missing duration/intensity counts as insufficient evidence, not an
/// error.
pub fn needs_fueling(event: &ScheduledEvent) -> bool {
  if event.duration_min.is_none() && event.intensity.is_none() {
    return false;
  }
  if let Some(duration) = event.duration_min {
    if duration > FUELING_DURATION_MIN {
      return true;
    }
    if event.intensity == Some(Intensity::High) && duration >= HIGH_INTENSITY_FUELING_MIN {
      return true;
    }
  }
  false
}

/// ---------------------------------------------------------------------------
/// Fueling Calendar Events
/// ---------------------------------------------------------------------------

/// Synthesize the before/after fueling events for a workout.
///
/// The before-event lands 30 minutes ahead of the start and is omitted
/// entirely when that would fall before midnight. The after-event lands at
/// start + duration and is always emitted; a late workout can push it past
/// 23:59, which stays un-wrapped (see `ClockTime::from_minutes`).
///
/// Ids derive from the source workout's id, so repeated generation from the
/// same workout is idempotent.
pub fn generate_fueling_events(workout: &ScheduledEvent) -> Vec<ScheduledEvent> {
  let duration = workout.duration_min.unwrap_or(DEFAULT_DURATION_MIN);
  let start = workout.time.minutes() as i64;
  let mut events = Vec::with_capacity(2);

  let before = start - PRE_FUELING_LEAD_MIN;
  if before >= 0 {
    events.push(ScheduledEvent {
      id: format!("{}-before-fueling", workout.id),
      title: "Pre-workout fueling".to_string(),
      subtitle: format!("Fuel up for {}", workout.title),
      time: ClockTime::from_minutes(before as u32),
      category: EventCategory::Fueling,
      duration_min: None,
      intensity: None,
      description: Some("Light carbs and fluids before you start".to_string()),
      related_workout_id: Some(workout.id.clone()),
    });
  } else {
    debug!(
      workout_id = %workout.id,
      start_min = start,
      "pre-fueling event would land before midnight, omitting"
    );
  }

  events.push(ScheduledEvent {
    id: format!("{}-after-fueling", workout.id),
    title: "Post-workout recovery".to_string(),
    subtitle: format!("Recover from {}", workout.title),
    time: ClockTime::from_minutes((start + duration) as u32),
    category: EventCategory::Fueling,
    duration_min: None,
    intensity: None,
    description: Some("Carbs, protein and fluids to kick off recovery".to_string()),
    related_workout_id: Some(workout.id.clone()),
  });

  events
}

/// ---------------------------------------------------------------------------
/// Fueling Plan (detail view)
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FuelingIcon {
  Leaf,
  Droplet,
  Zap,
  Salt,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Nutrient {
  WholeFood,
  Hydration,
  Carbs,
  Sodium,
}

/// A single nutrient line within a fueling phase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FuelingItem {
  pub icon: FuelingIcon,
  pub nutrient: Nutrient,
  pub amount: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub frequency: Option<String>,
  pub details: String,
}

/// One phase of the plan (before, during or after the workout).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FuelingPhase {
  pub timing: String,
  pub items: Vec<FuelingItem>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
}

/// Structured nutrition plan for a single workout.
///
/// Always fully populated: every workout gets a before, at least one during,
/// and an after phase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FuelingPlan {
  pub before: FuelingPhase,
  pub during: Vec<FuelingPhase>,
  pub after: FuelingPhase,
}

impl FuelingPlan {
  /// Serialize to pretty JSON for the display boundary.
  pub fn to_json(&self) -> String {
    serde_json::to_string_pretty(self).unwrap_or_default()
  }
}

/// Build the nutrition plan for a workout.
///
/// Duration defaults to 60 minutes and intensity to MEDIUM when absent; plan
/// content scales with both. Pure lookup/construction, no failure modes.
pub fn generate_fueling_plan(workout: &ScheduledEvent) -> FuelingPlan {
  let duration = workout.duration_min.unwrap_or(DEFAULT_DURATION_MIN);
  let intensity = workout.intensity.unwrap_or(Intensity::Medium);

  FuelingPlan {
    before: before_phase(intensity),
    during: vec![during_phase(duration)],
    after: after_phase(),
  }
}

fn before_phase(intensity: Intensity) -> FuelingPhase {
  let mut items = vec![
    FuelingItem {
      icon: FuelingIcon::Leaf,
      nutrient: Nutrient::WholeFood,
      amount: "30-40g carbs".to_string(),
      frequency: None,
      details: "Banana, toast with honey, or a small bowl of oatmeal".to_string(),
    },
    FuelingItem {
      icon: FuelingIcon::Droplet,
      nutrient: Nutrient::Hydration,
      amount: "400-600ml".to_string(),
      frequency: None,
      details: "Water, sipped steadily over the half hour".to_string(),
    },
  ];

  if intensity == Intensity::High {
    items.push(FuelingItem {
      icon: FuelingIcon::Leaf,
      nutrient: Nutrient::WholeFood,
      amount: "15-20g carbs".to_string(),
      frequency: None,
      details: "Extra top-up for high-intensity work: dates or a rice cake".to_string(),
    });
  }

  FuelingPhase {
    timing: "30-60 min before".to_string(),
    items,
    description: Some("Top up glycogen without sitting heavy in the stomach".to_string()),
  }
}

fn during_phase(duration: i64) -> FuelingPhase {
  if duration > FUELING_DURATION_MIN {
    FuelingPhase {
      timing: "Throughout workout".to_string(),
      items: vec![
        FuelingItem {
          icon: FuelingIcon::Zap,
          nutrient: Nutrient::Carbs,
          amount: "30-60g per hour".to_string(),
          frequency: Some("Every 30 min".to_string()),
          details: "Gel, chews, or carb drink".to_string(),
        },
        FuelingItem {
          icon: FuelingIcon::Droplet,
          nutrient: Nutrient::Hydration,
          amount: "150-250ml".to_string(),
          frequency: Some("Every 15-20 min".to_string()),
          details: "Water or electrolyte mix".to_string(),
        },
        FuelingItem {
          icon: FuelingIcon::Salt,
          nutrient: Nutrient::Sodium,
          amount: "300-500mg per hour".to_string(),
          frequency: Some("Every 45 min".to_string()),
          details: "Electrolyte tabs or a salty drink mix".to_string(),
        },
      ],
      description: Some("Long session: keep carbs, fluid and sodium coming in".to_string()),
    }
  } else if duration > HIGH_INTENSITY_FUELING_MIN {
    FuelingPhase {
      timing: "Mid-workout".to_string(),
      items: vec![FuelingItem {
        icon: FuelingIcon::Droplet,
        nutrient: Nutrient::Hydration,
        amount: "150-250ml".to_string(),
        frequency: Some("Every 15-20 min".to_string()),
        details: "Plain water is enough at this duration".to_string(),
      }],
      description: None,
    }
  } else {
    FuelingPhase {
      timing: "As needed".to_string(),
      items: vec![FuelingItem {
        icon: FuelingIcon::Droplet,
        nutrient: Nutrient::Hydration,
        amount: "Small sips".to_string(),
        frequency: None,
        details: "Drink to thirst".to_string(),
      }],
      description: None,
    }
  }
}

fn after_phase() -> FuelingPhase {
  FuelingPhase {
    timing: "Within 30-60 min after".to_string(),
    items: vec![
      FuelingItem {
        icon: FuelingIcon::Zap,
        nutrient: Nutrient::Carbs,
        amount: "60-90g carbs".to_string(),
        frequency: None,
        details: "Rice, potatoes, or a recovery shake".to_string(),
      },
      FuelingItem {
        icon: FuelingIcon::Leaf,
        nutrient: Nutrient::WholeFood,
        amount: "20-30g protein".to_string(),
        frequency: None,
        details: "Greek yogurt, eggs, or a protein shake".to_string(),
      },
      FuelingItem {
        icon: FuelingIcon::Droplet,
        nutrient: Nutrient::Hydration,
        amount: "500-750ml".to_string(),
        frequency: None,
        details: "Replace sweat loss; add electrolytes after hard sessions".to_string(),
      },
    ],
    description: Some("Kick-start recovery before the window closes".to_string()),
  }
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------
