use tracing::debug;

use crate::core::error::{DegenerateCase, DomainError};

pub const EARTH_GRAVITY_MPS2: f64 = 9.81;

/// Below this a flight time or range counts as zero.
pub(crate) const DEGENERATE_TOLERANCE: f64 = 1e-9;

/// Launch state of the projectile. Only built through [`InitialConditions::new`],
/// so every value held here is finite, with non-negative height and speed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InitialConditions {
    initial_height_m: f64,
    launch_speed_mps: f64,
    launch_angle_deg: f64,
}

impl InitialConditions {
    pub fn new(
        initial_height_m: f64,
        launch_speed_mps: f64,
        launch_angle_deg: f64,
    ) -> Result<Self, DomainError> {
        ensure_finite("initial height", initial_height_m)?;
        ensure_finite("launch speed", launch_speed_mps)?;
        ensure_finite("launch angle", launch_angle_deg)?;

        if initial_height_m < 0.0 {
            return Err(DomainError::NegativeHeight(initial_height_m));
        }
        if launch_speed_mps < 0.0 {
            return Err(DomainError::NegativeSpeed(launch_speed_mps));
        }

        Ok(Self {
            initial_height_m,
            launch_speed_mps,
            launch_angle_deg,
        })
    }

    pub fn initial_height_m(&self) -> f64 {
        self.initial_height_m
    }

    pub fn launch_speed_mps(&self) -> f64 {
        self.launch_speed_mps
    }

    pub fn launch_angle_deg(&self) -> f64 {
        self.launch_angle_deg
    }

    pub fn velocity(&self) -> VelocityComponents {
        resolve_velocity(self.launch_speed_mps, self.launch_angle_deg)
    }
}

fn ensure_finite(label: &'static str, value: f64) -> Result<(), DomainError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(DomainError::NonFinite { label, value })
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VelocityComponents {
    pub vx: f64,
    pub vy: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FlightMetrics {
    pub flight_time_s: f64,
    pub max_height_m: f64,
    pub total_range_m: f64,
}

impl FlightMetrics {
    /// Zero flight time takes precedence over zero range.
    pub fn degenerate_case(&self) -> Option<DegenerateCase> {
        if self.flight_time_s.abs() < DEGENERATE_TOLERANCE {
            Some(DegenerateCase::ZeroFlightTime)
        } else if self.total_range_m.abs() < DEGENERATE_TOLERANCE {
            Some(DegenerateCase::ZeroRange)
        } else {
            None
        }
    }
}

/// Splits a launch speed into horizontal and vertical components.
/// The angle is measured from the horizontal, in degrees.
pub fn resolve_velocity(speed_mps: f64, angle_deg: f64) -> VelocityComponents {
    let theta = angle_deg.to_radians();
    VelocityComponents {
        vx: speed_mps * theta.cos(),
        vy: speed_mps * theta.sin(),
    }
}

/// Closed-form drag-free kinematics under a fixed gravitational acceleration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct KinematicsEngine {
    gravity_mps2: f64,
}

impl Default for KinematicsEngine {
    fn default() -> Self {
        Self {
            gravity_mps2: EARTH_GRAVITY_MPS2,
        }
    }
}

impl KinematicsEngine {
    /// `gravity_mps2` is the magnitude of the downward acceleration.
    pub fn new(gravity_mps2: f64) -> Result<Self, DomainError> {
        ensure_finite("gravity", gravity_mps2)?;
        if gravity_mps2 <= 0.0 {
            return Err(DomainError::NonPositiveGravity(gravity_mps2));
        }
        Ok(Self { gravity_mps2 })
    }

    pub fn gravity_mps2(&self) -> f64 {
        self.gravity_mps2
    }

    /// Solves `h + vy*t - g*t^2/2 = 0` for the positive root and derives the
    /// apex height and horizontal range from it.
    pub fn compute_flight_metrics(
        &self,
        conditions: &InitialConditions,
    ) -> Result<FlightMetrics, DomainError> {
        let g = self.gravity_mps2;
        let h = conditions.initial_height_m();
        let VelocityComponents { vx, vy } = conditions.velocity();

        let disc = vy * vy + 2.0 * g * h;
        if disc < 0.0 {
            return Err(DomainError::NegativeDiscriminant(disc));
        }

        let flight_time_s = (vy + disc.sqrt()) / g;
        let metrics = FlightMetrics {
            flight_time_s,
            max_height_m: h + (vy * vy) / (2.0 * g),
            total_range_m: vx * flight_time_s,
        };

        debug!(
            flight_time_s = metrics.flight_time_s,
            max_height_m = metrics.max_height_m,
            total_range_m = metrics.total_range_m,
            gravity_mps2 = g,
            "Computed flight metrics"
        );

        Ok(metrics)
    }

    pub fn position_at(
        &self,
        conditions: &InitialConditions,
        velocity: VelocityComponents,
        time_s: f64,
    ) -> (f64, f64) {
        let x = velocity.vx * time_s;
        let y = conditions.initial_height_m() + (velocity.vy * time_s)
            - (0.5 * self.gravity_mps2 * time_s * time_s);
        (x, y)
    }
}
