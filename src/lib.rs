//! Fueling and goal-balancing core for a training nutrition app
//!
//! Two independent, pure computation layers sit behind the UI:
//!
//! - the fueling planner ([`fueling`], [`schedule`]) decides which scheduled
//!   workouts need supplemental fueling and synthesizes the before/after
//!   calendar events and the detailed nutrition plan;
//! - the goal balancer ([`balance`]) keeps the four radar-chart goal axes
//!   consistent under the pairwise opposition constraint and scores how
//!   balanced the vector is.
//!
//! Everything takes its input as parameters and returns new values; there is
//! no I/O, no shared state and no persistence in this crate. Rendering,
//! modals and gesture plumbing belong to the embedding application.

pub mod balance;
pub mod fueling;
pub mod models;
pub mod schedule;

#[cfg(test)]
mod test_utils;

pub use balance::{apply_opposition_constraint, balance_score, drag_percentage, GoalEditor};
pub use fueling::{
  generate_fueling_events, generate_fueling_plan, needs_fueling, FuelingIcon, FuelingItem,
  FuelingPhase, FuelingPlan, Nutrient,
};
pub use models::{
  ClockTime, EventCategory, GoalAxis, GoalVector, Intensity, ScheduledEvent, TimeParseError,
};
pub use schedule::{build_day_schedule, minutes_to_time_string, parse_time_to_minutes};
