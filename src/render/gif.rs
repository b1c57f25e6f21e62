use std::fmt::Display;
use std::path::{Path, PathBuf};
use std::time::Duration;

use plotters::coord::Shift;
use plotters::prelude::*;
use tracing::{info, warn};

use crate::core::animator::{Frame, RenderSink};
use crate::core::error::RenderError;

pub const GIF_SIZE_PX: (u32, u32) = (960, 540);
pub const CHART_TITLE: &str = "Flight Trajectory in zero-drag conditions";
pub const X_AXIS_LABEL: &str = "Range (in metres)";
pub const Y_AXIS_LABEL: &str = "Height (in metres)";

fn backend_error<E: Display>(err: E) -> RenderError {
    RenderError::Backend(err.to_string())
}

/// Writes every animation frame into an animated GIF. The per-frame delay is
/// baked into the file when it is created.
pub struct GifSink<'a> {
    root: DrawingArea<BitMapBackend<'a>, Shift>,
    path: PathBuf,
    frame_delay: Duration,
    frames: usize,
}

impl<'a> GifSink<'a> {
    pub fn create(path: &'a Path, frame_delay: Duration) -> Result<Self, RenderError> {
        let delay_ms = u32::try_from(frame_delay.as_millis()).unwrap_or(u32::MAX);
        let backend = BitMapBackend::gif(path, GIF_SIZE_PX, delay_ms).map_err(backend_error)?;
        Ok(Self {
            root: backend.into_drawing_area(),
            path: path.to_path_buf(),
            frame_delay,
            frames: 0,
        })
    }

    pub fn frames_written(&self) -> usize {
        self.frames
    }
}

impl RenderSink for GifSink<'_> {
    fn render(&mut self, frame: &Frame<'_>) -> Result<(), RenderError> {
        self.root.fill(&WHITE).map_err(backend_error)?;

        let axes = frame.axes;
        let mut chart = ChartBuilder::on(&self.root)
            .caption(CHART_TITLE, ("sans-serif", 24))
            .margin(12)
            .x_label_area_size(40)
            .y_label_area_size(56)
            .build_cartesian_2d(axes.x_min..axes.x_max, axes.y_min..axes.y_max)
            .map_err(backend_error)?;

        chart
            .configure_mesh()
            .x_desc(X_AXIS_LABEL)
            .y_desc(Y_AXIS_LABEL)
            .draw()
            .map_err(backend_error)?;

        chart
            .draw_series(LineSeries::new(
                frame.path.iter().copied(),
                BLUE.stroke_width(2),
            ))
            .map_err(backend_error)?
            .label(frame.legend.as_str())
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &BLUE));

        if let Some(head) = frame.head() {
            chart
                .draw_series(std::iter::once(Circle::new(head, 4, RED.filled())))
                .map_err(backend_error)?;
        }

        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .background_style(WHITE.mix(0.8))
            .border_style(&BLACK)
            .draw()
            .map_err(backend_error)?;

        Ok(())
    }

    fn pause(&mut self, delay: Duration) -> Result<(), RenderError> {
        if delay != self.frame_delay && self.frames == 0 {
            warn!(
                requested_ms = delay.as_millis() as u64,
                encoded_ms = self.frame_delay.as_millis() as u64,
                "GIF frame delay is fixed at creation"
            );
        }
        self.root.present().map_err(backend_error)?;
        self.frames += 1;
        Ok(())
    }

    fn show(&mut self) -> Result<(), RenderError> {
        info!(
            path = %self.path.display(),
            frames = self.frames,
            "Trajectory animation written"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;
    use crate::core::animator::TrajectoryAnimator;
    use crate::core::ballistics::{InitialConditions, KinematicsEngine};
    use crate::core::sampler::sample;

    #[test]
    fn writes_one_gif_frame_per_sample() {
        let path = std::env::temp_dir().join(format!(
            "dragless_projectile_gif_{}.gif",
            std::process::id()
        ));
        let engine = KinematicsEngine::default();
        let conditions = InitialConditions::new(0.0, 10.0, 45.0).expect("valid conditions");
        let metrics = engine
            .compute_flight_metrics(&conditions)
            .expect("calculation should succeed");
        let samples = sample(&engine, &conditions, &metrics, conditions.velocity(), 5);
        let animator = TrajectoryAnimator::default();

        {
            let mut sink =
                GifSink::create(&path, animator.frame_delay()).expect("gif should be created");
            let frames = animator
                .animate(samples, &metrics, &mut sink)
                .expect("animation should succeed");

            assert_eq!(frames, 5);
            assert_eq!(sink.frames_written(), frames);
        }

        let size = fs::metadata(&path).expect("gif should exist").len();
        fs::remove_file(&path).expect("gif should be removable");
        assert!(size > 0);
    }
}
