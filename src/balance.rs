//! Opposing-goals balancing for the radar-chart editor
//!
//! The radar editor lets one axis be dragged at a time; every pointer move
//! re-applies the opposition constraint so "more of one costs some of its
//! opposite". The pair budget of 140 (not 100) deliberately lets both sides
//! of a pair sit moderately high at once, and the floor of 20 keeps either
//! side from being driven to zero. Both are tuned UI-feel constants; keep
//! them as-is.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::{GoalAxis, GoalVector};

/// Maximum combined value an opposition pair may hold.
pub const TOTAL_PAIR_ENERGY: i64 = 140;

/// Minimum value any axis can be pushed down to during editing.
pub const AXIS_FLOOR: i64 = 20;

/// ---------------------------------------------------------------------------
/// Opposition Constraint
/// ---------------------------------------------------------------------------

/// Set one axis and rebalance its opposite under the pair energy budget.
///
/// The changed axis takes `new_value` (clamped to [0, 100]); its opposite is
/// squeezed into whatever energy remains, floored at `AXIS_FLOOR` and never
/// raised above its current value. Pure and idempotent: same inputs, same
/// output vector. Other axes are untouched.
pub fn apply_opposition_constraint(
  vector: &GoalVector,
  changed_axis: GoalAxis,
  new_value: i64,
) -> GoalVector {
  let new_value = new_value.clamp(0, 100);
  let opposite_axis = changed_axis.opposite();

  let remaining_energy = (TOTAL_PAIR_ENERGY - new_value).max(AXIS_FLOOR);
  let opposite_value = remaining_energy.min(vector.get(opposite_axis).max(AXIS_FLOOR));

  let mut updated = *vector;
  updated.set(changed_axis, new_value);
  updated.set(opposite_axis, opposite_value);
  updated
}

/// ---------------------------------------------------------------------------
/// Balance Score
/// ---------------------------------------------------------------------------

/// How evenly spread the four axes are, on a 0-100 scale.
///
/// 100 for a perfectly uniform vector; the score drops with the population
/// standard deviation (`100 - 2 * stddev`) and floors at 0.
pub fn balance_score(vector: &GoalVector) -> f64 {
  let values = vector.values().map(|v| v as f64);
  let mean = values.iter().sum::<f64>() / values.len() as f64;
  let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / values.len() as f64;

  (100.0 - 2.0 * variance.sqrt()).max(0.0)
}

/// ---------------------------------------------------------------------------
/// Drag Geometry
/// ---------------------------------------------------------------------------

/// Convert a pointer's distance from the radar center into a percentage.
///
/// Clamped to [0, 100] and rounded to the nearest integer; a fractionally
/// out-of-range pointer position clamps rather than erroring. A degenerate
/// radius yields 0.
pub fn drag_percentage(distance: f64, max_radius: f64) -> i64 {
  if max_radius <= 0.0 {
    return 0;
  }
  (distance / max_radius * 100.0).clamp(0.0, 100.0).round() as i64
}

/// ---------------------------------------------------------------------------
/// Goal Editor (edit buffer + drag gesture)
/// ---------------------------------------------------------------------------

/// Scratch-copy editing state for the radar modal.
///
/// Edits accumulate in a draft vector; `commit` promotes the draft and
/// `discard` throws it away. Exactly one axis can be dragged at a time, which
/// is all the serialization the host UI event loop needs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalEditor {
  committed: GoalVector,
  draft: GoalVector,
  active_axis: Option<GoalAxis>,
}

impl GoalEditor {
  pub fn new(initial: GoalVector) -> Self {
    Self {
      committed: initial,
      draft: initial,
      active_axis: None,
    }
  }

  pub fn committed(&self) -> &GoalVector {
    &self.committed
  }

  pub fn draft(&self) -> &GoalVector {
    &self.draft
  }

  /// Balance score of the vector currently on screen.
  pub fn draft_balance(&self) -> f64 {
    balance_score(&self.draft)
  }

  /// Grab one axis's control point. Refused while another drag is active.
  pub fn begin_drag(&mut self, axis: GoalAxis) -> bool {
    if self.active_axis.is_some() {
      debug!(?axis, "drag refused, another axis is active");
      return false;
    }
    self.active_axis = Some(axis);
    true
  }

  /// Apply one pointer-move sample of the active drag.
  pub fn drag_to(&mut self, distance: f64, max_radius: f64) {
    if let Some(axis) = self.active_axis {
      let value = drag_percentage(distance, max_radius);
      self.draft = apply_opposition_constraint(&self.draft, axis, value);
    }
  }

  /// Release the pointer. The last applied vector stands.
  pub fn end_drag(&mut self) {
    self.active_axis = None;
  }

  /// Promote the draft to the committed vector.
  pub fn commit(&mut self) {
    self.committed = self.draft;
    self.active_axis = None;
  }

  /// Drop the draft and fall back to the committed vector.
  pub fn discard(&mut self) {
    self.draft = self.committed;
    self.active_axis = None;
  }
}

impl Default for GoalEditor {
  fn default() -> Self {
    Self::new(GoalVector::default())
  }
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------
