//! Closed-form kinematics and trajectory animation for a projectile flying
//! under uniform gravity with no air resistance.

pub mod config;
pub mod core;
pub mod input;
pub mod logging;
pub mod render;
