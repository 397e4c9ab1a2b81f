use crate::core::CoefficientCurve;

#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

/// Configuration parameters for the physics simulation
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct SimulationConfig {
    /// Downward gravitational acceleration
    pub gravity: f32,

    /// Air density used by the drag and lift formulas
    pub air_density: f32,

    /// Hard population cap; exceeding it evicts the oldest balls
    pub max_ball_count: usize,

    /// Balls falling below this height are removed
    pub floor_limit: f32,

    /// Balls farther than this from the origin are removed
    pub bounds_radius: f32,

    /// Whether balls may fall asleep at rest
    pub allow_sleeping: bool,

    /// Position drift tolerated before the still-timer resets
    pub sleep_radius: f32,

    /// Orientation drift in radians tolerated before the still-timer resets
    pub sleep_angle: f32,

    /// Still-time after which a ball falls asleep
    pub fall_asleep_duration: f32,

    /// Per-speed scaling of the translational drag coefficient
    pub lin_drag_curve: CoefficientCurve,

    /// Per-spin-rate scaling of the rotational drag coefficient
    pub rot_drag_curve: CoefficientCurve,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            gravity: 9.81,
            air_density: 1.225,
            max_ball_count: 100,
            floor_limit: -100.0,
            bounds_radius: 316.0,
            allow_sleeping: true,
            sleep_radius: 0.1,
            sleep_angle: crate::math::to_radians(5.0),
            fall_asleep_duration: 1.0,
            lin_drag_curve: CoefficientCurve::new(),
            rot_drag_curve: CoefficientCurve::new(),
        }
    }
}
