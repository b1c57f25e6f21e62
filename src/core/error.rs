//! Error types for flight computation and rendering.

use std::fmt;

use thiserror::Error;

/// Input that falls outside the domain the closed-form solution supports.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    /// A value was NaN or infinite.
    #[error("{label} must be a finite number, got {value}")]
    NonFinite { label: &'static str, value: f64 },

    #[error("Initial height cannot be negative ({0} m)")]
    NegativeHeight(f64),

    #[error("Launch speed cannot be negative ({0} m/s)")]
    NegativeSpeed(f64),

    #[error("Gravitational acceleration must be positive, got {0} m/s^2")]
    NonPositiveGravity(f64),

    /// `vy^2 + 2*g*h` is negative, so the projectile never reaches the ground.
    #[error("No real landing time: vy^2 + 2*g*h is negative ({0})")]
    NegativeDiscriminant(f64),

    /// Text that could not be parsed as a number.
    #[error("Invalid {label}: '{value}'. Expected a number.")]
    NotANumber { label: &'static str, value: String },
}

/// A flight that is valid but collapses to a point or a vertical line.
///
/// Callers log these and carry on; sampling and axis limits handle them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DegenerateCase {
    ZeroFlightTime,
    ZeroRange,
}

impl fmt::Display for DegenerateCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DegenerateCase::ZeroFlightTime => {
                f.write_str("zero flight time: the trajectory is a single point")
            }
            DegenerateCase::ZeroRange => {
                f.write_str("zero range: the projectile moves only vertically")
            }
        }
    }
}

/// Failures while driving a render sink.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Plot backend failed: {0}")]
    Backend(String),

    #[error("Cannot animate an empty trajectory")]
    EmptyTrajectory,
}
