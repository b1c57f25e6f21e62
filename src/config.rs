use std::time::Duration;

use clap::ValueEnum;

use crate::core::animator::{DEFAULT_FRAME_DELAY, TrajectoryAnimator};
use crate::core::ballistics::{EARTH_GRAVITY_MPS2, KinematicsEngine};
use crate::core::error::DomainError;
use crate::core::window::DEFAULT_AXIS_MARGIN;

/// Number of samples per flight, one animation frame each.
pub const DEFAULT_STEP_COUNT: usize = 100;

/// Bodies with a preset surface gravity.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum CelestialBody {
    #[default]
    Earth,
    Moon,
    Mars,
    Jupiter,
}

impl CelestialBody {
    pub fn gravity_mps2(self) -> f64 {
        match self {
            CelestialBody::Earth => EARTH_GRAVITY_MPS2,
            CelestialBody::Moon => 1.62,
            CelestialBody::Mars => 3.71,
            CelestialBody::Jupiter => 24.79,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            CelestialBody::Earth => "Earth",
            CelestialBody::Moon => "Moon",
            CelestialBody::Mars => "Mars",
            CelestialBody::Jupiter => "Jupiter",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimulationConfig {
    pub gravity_mps2: f64,
    pub step_count: usize,
    pub frame_delay: Duration,
    pub axis_margin: f64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            gravity_mps2: EARTH_GRAVITY_MPS2,
            step_count: DEFAULT_STEP_COUNT,
            frame_delay: DEFAULT_FRAME_DELAY,
            axis_margin: DEFAULT_AXIS_MARGIN,
        }
    }
}

impl SimulationConfig {
    pub fn for_body(body: CelestialBody) -> Self {
        Self {
            gravity_mps2: body.gravity_mps2(),
            ..Self::default()
        }
    }

    pub fn engine(&self) -> Result<KinematicsEngine, DomainError> {
        KinematicsEngine::new(self.gravity_mps2)
    }

    pub fn animator(&self) -> TrajectoryAnimator {
        TrajectoryAnimator::new(self.frame_delay, self.axis_margin)
    }
}
