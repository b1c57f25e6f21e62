use crate::core::ballistics::{DEGENERATE_TOLERANCE, FlightMetrics};

pub const DEFAULT_AXIS_MARGIN: f64 = 1.1;
pub const MIN_AXIS_SPAN_M: f64 = 1.0;

/// Fixed plot limits for a whole animation run, in metres.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisWindow {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl AxisWindow {
    /// Scales range and apex height by `margin`. A span that collapses to zero
    /// falls back to [`MIN_AXIS_SPAN_M`] so a flight with no range or no height
    /// still gets a drawable window.
    pub fn for_flight(metrics: &FlightMetrics, margin: f64) -> Self {
        let margin = if margin.is_finite() && margin > 0.0 {
            margin
        } else {
            DEFAULT_AXIS_MARGIN
        };

        let scaled_range = non_zero_span(metrics.total_range_m * margin);
        let (x_min, x_max) = if scaled_range < 0.0 {
            (scaled_range, 0.0)
        } else {
            (0.0, scaled_range)
        };

        Self {
            x_min,
            x_max,
            y_min: 0.0,
            y_max: non_zero_span(metrics.max_height_m * margin).abs(),
        }
    }

    pub fn x_span(&self) -> f64 {
        self.x_max - self.x_min
    }

    pub fn y_span(&self) -> f64 {
        self.y_max - self.y_min
    }
}

fn non_zero_span(span: f64) -> f64 {
    if span.is_finite() && span.abs() >= DEGENERATE_TOLERANCE {
        span
    } else {
        MIN_AXIS_SPAN_M
    }
}
