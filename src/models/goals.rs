use serde::{Deserialize, Serialize};

/// ---------------------------------------------------------------------------
/// Goal Axes
/// ---------------------------------------------------------------------------

/// The four training-focus axes shown on the goal radar.
///
/// Axes form two fixed opposition pairs: pushing performance costs recovery,
/// chasing muscle gain costs weight loss (and vice versa).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GoalAxis {
  Performance,
  Recovery,
  MuscleGain,
  WeightLoss,
}

impl GoalAxis {
  pub const ALL: [GoalAxis; 4] = [
    GoalAxis::Performance,
    GoalAxis::Recovery,
    GoalAxis::MuscleGain,
    GoalAxis::WeightLoss,
  ];

  /// The logical opposite in this axis's opposition pair.
  pub fn opposite(self) -> GoalAxis {
    match self {
      GoalAxis::Performance => GoalAxis::Recovery,
      GoalAxis::Recovery => GoalAxis::Performance,
      GoalAxis::MuscleGain => GoalAxis::WeightLoss,
      GoalAxis::WeightLoss => GoalAxis::MuscleGain,
    }
  }
}

/// ---------------------------------------------------------------------------
/// Goal Vector
/// ---------------------------------------------------------------------------

/// Four 0-100 priority percentages, one per axis.
///
/// Values are only ever mutated through the opposition constraint in
/// `crate::balance`, which keeps each pair's combined value bounded and floors
/// every axis at 20 during interactive editing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalVector {
  pub performance: i64,
  pub recovery: i64,
  pub muscle_gain: i64,
  pub weight_loss: i64,
}

impl GoalVector {
  pub fn get(&self, axis: GoalAxis) -> i64 {
    match axis {
      GoalAxis::Performance => self.performance,
      GoalAxis::Recovery => self.recovery,
      GoalAxis::MuscleGain => self.muscle_gain,
      GoalAxis::WeightLoss => self.weight_loss,
    }
  }

  pub fn set(&mut self, axis: GoalAxis, value: i64) {
    match axis {
      GoalAxis::Performance => self.performance = value,
      GoalAxis::Recovery => self.recovery = value,
      GoalAxis::MuscleGain => self.muscle_gain = value,
      GoalAxis::WeightLoss => self.weight_loss = value,
    }
  }

  /// Axis values in `GoalAxis::ALL` order.
  pub fn values(&self) -> [i64; 4] {
    [
      self.performance,
      self.recovery,
      self.muscle_gain,
      self.weight_loss,
    ]
  }
}

impl Default for GoalVector {
  /// Starting vector the goal editor is seeded with.
  fn default() -> Self {
    Self {
      performance: 70,
      recovery: 55,
      muscle_gain: 60,
      weight_loss: 40,
    }
  }
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_opposites_are_symmetric() {
    for axis in GoalAxis::ALL {
      assert_eq!(axis.opposite().opposite(), axis);
      assert_ne!(axis.opposite(), axis);
    }
  }

  #[test]
  fn test_get_set_round_trip() {
    let mut vector = GoalVector::default();
    for axis in GoalAxis::ALL {
      vector.set(axis, 33);
      assert_eq!(vector.get(axis), 33);
    }
    assert_eq!(vector.values(), [33, 33, 33, 33]);
  }

  #[test]
  fn test_default_respects_pair_bounds() {
    let vector = GoalVector::default();
    assert!(vector.performance + vector.recovery <= 140);
    assert!(vector.muscle_gain + vector.weight_loss <= 140);
    for value in vector.values() {
      assert!((20..=100).contains(&value));
    }
  }

  #[test]
  fn test_goal_vector_serde_uses_camel_case() {
    let json = serde_json::to_string(&GoalVector::default()).unwrap();
    assert!(json.contains("\"muscleGain\":60"));
    assert!(json.contains("\"weightLoss\":40"));
  }
}
