//! Frame-by-frame playback of a sampled trajectory.
//!
//! The animator never draws anything itself. It grows a path buffer one
//! sample at a time and hands each resulting [`Frame`] to a [`RenderSink`],
//! which owns the actual plotting backend.

use std::time::Duration;

use tracing::{debug, info};

use crate::core::ballistics::FlightMetrics;
use crate::core::error::RenderError;
use crate::core::sampler::TrajectoryPoint;
use crate::core::window::{AxisWindow, DEFAULT_AXIS_MARGIN};

pub const DEFAULT_FRAME_DELAY: Duration = Duration::from_millis(10);

/// One step of the animation: the full path flown so far plus everything
/// needed to label and scale it.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame<'a> {
    pub index: usize,
    pub path: &'a [(f64, f64)],
    pub elapsed_s: f64,
    pub legend: String,
    pub axes: AxisWindow,
    pub delay: Duration,
}

impl Frame<'_> {
    pub fn head(&self) -> Option<(f64, f64)> {
        self.path.last().copied()
    }
}

/// Output side of the animation.
///
/// `render` replaces whatever the previous frame drew. `pause` is where the
/// backend gets to display the frame before the next one arrives. `show` is
/// called once after the last frame and may block until the viewer is closed.
pub trait RenderSink {
    fn render(&mut self, frame: &Frame<'_>) -> Result<(), RenderError>;
    fn pause(&mut self, delay: Duration) -> Result<(), RenderError>;
    fn show(&mut self) -> Result<(), RenderError>;
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrajectoryAnimator {
    frame_delay: Duration,
    axis_margin: f64,
}

impl Default for TrajectoryAnimator {
    fn default() -> Self {
        Self {
            frame_delay: DEFAULT_FRAME_DELAY,
            axis_margin: DEFAULT_AXIS_MARGIN,
        }
    }
}

impl TrajectoryAnimator {
    pub fn new(frame_delay: Duration, axis_margin: f64) -> Self {
        Self {
            frame_delay,
            axis_margin,
        }
    }

    pub fn frame_delay(&self) -> Duration {
        self.frame_delay
    }

    pub fn axes(&self, metrics: &FlightMetrics) -> AxisWindow {
        AxisWindow::for_flight(metrics, self.axis_margin)
    }

    /// Starts a playback over `samples`. Nothing is consumed until the first
    /// call to [`Playback::advance`].
    pub fn playback<I>(&self, samples: I, metrics: &FlightMetrics) -> Playback<I::IntoIter>
    where
        I: IntoIterator<Item = TrajectoryPoint>,
    {
        let samples = samples.into_iter();
        let (lower, _) = samples.size_hint();
        Playback {
            samples,
            path: Vec::with_capacity(lower),
            elapsed_s: 0.0,
            axes: self.axes(metrics),
            delay: self.frame_delay,
        }
    }

    /// Renders every growing prefix of `samples`, pausing after each one, and
    /// finally asks the sink to keep the last frame on display.
    ///
    /// Returns the number of frames rendered.
    pub fn animate<I, S>(
        &self,
        samples: I,
        metrics: &FlightMetrics,
        sink: &mut S,
    ) -> Result<usize, RenderError>
    where
        I: IntoIterator<Item = TrajectoryPoint>,
        S: RenderSink + ?Sized,
    {
        let mut playback = self.playback(samples, metrics);
        info!(
            flight_time_s = metrics.flight_time_s,
            delay_ms = self.frame_delay.as_millis() as u64,
            "Starting trajectory animation"
        );

        let mut rendered = 0usize;
        while let Some(frame) = playback.advance() {
            sink.render(&frame)?;
            sink.pause(frame.delay)?;
            rendered += 1;
        }

        if rendered == 0 {
            return Err(RenderError::EmptyTrajectory);
        }

        debug!(frames = rendered, "Final frame reached");
        sink.show()?;
        Ok(rendered)
    }
}

/// Growing path buffer fed from a sample sequence.
#[derive(Clone, Debug)]
pub struct Playback<I> {
    samples: I,
    path: Vec<(f64, f64)>,
    elapsed_s: f64,
    axes: AxisWindow,
    delay: Duration,
}

impl<I> Playback<I>
where
    I: Iterator<Item = TrajectoryPoint>,
{
    /// Appends the next sample and returns the frame it completes, or `None`
    /// once the samples are exhausted.
    pub fn advance(&mut self) -> Option<Frame<'_>> {
        let point = self.samples.next()?;
        self.path.push((point.x_m, point.y_m));
        self.elapsed_s = point.time_s;
        self.current()
    }

    /// The most recently completed frame, if any sample has been consumed.
    pub fn current(&self) -> Option<Frame<'_>> {
        if self.path.is_empty() {
            return None;
        }
        Some(Frame {
            index: self.path.len() - 1,
            path: &self.path,
            elapsed_s: self.elapsed_s,
            legend: time_legend(self.elapsed_s),
            axes: self.axes,
            delay: self.delay,
        })
    }

    pub fn axes(&self) -> AxisWindow {
        self.axes
    }

    pub fn frames_rendered(&self) -> usize {
        self.path.len()
    }
}

pub fn time_legend(elapsed_s: f64) -> String {
    format!("Time of Flight: {:.2} seconds", two_decimals(elapsed_s))
}

/// Fixed three-line flight report, each value to two decimal places.
pub fn summarize(metrics: &FlightMetrics) -> String {
    format!(
        "Flight Parameters\n\
         - Total Flight Time\t: {:.2} seconds\n\
         - Maximum Height\t: {:.2} metres\n\
         - Total Range\t\t: {:.2} metres",
        two_decimals(metrics.flight_time_s),
        two_decimals(metrics.max_height_m),
        two_decimals(metrics.total_range_m),
    )
}

// Rounds away float noise such as -1e-17 so it never prints as "-0.00".
fn two_decimals(value: f64) -> f64 {
    ((value * 100.0).round() / 100.0) + 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct CountingSink {
        renders: Vec<(usize, usize, String)>,
        pauses: usize,
        shows: usize,
    }

    impl RenderSink for CountingSink {
        fn render(&mut self, frame: &Frame<'_>) -> Result<(), RenderError> {
            self.renders
                .push((frame.index, frame.path.len(), frame.legend.clone()));
            Ok(())
        }

        fn pause(&mut self, _delay: Duration) -> Result<(), RenderError> {
            self.pauses += 1;
            Ok(())
        }

        fn show(&mut self) -> Result<(), RenderError> {
            self.shows += 1;
            Ok(())
        }
    }

    fn point(time_s: f64, x_m: f64, y_m: f64) -> TrajectoryPoint {
        TrajectoryPoint { time_s, x_m, y_m }
    }

    fn metrics() -> FlightMetrics {
        FlightMetrics {
            flight_time_s: 1.0,
            max_height_m: 2.0,
            total_range_m: 3.0,
        }
    }

    #[test]
    fn summary_matches_report_layout() {
        let report = summarize(&FlightMetrics {
            flight_time_s: 1.441_614,
            max_height_m: 2.548_42,
            total_range_m: 10.193_68,
        });

        assert_eq!(
            report,
            "Flight Parameters\n\
             - Total Flight Time\t: 1.44 seconds\n\
             - Maximum Height\t: 2.55 metres\n\
             - Total Range\t\t: 10.19 metres"
        );
    }

    #[test]
    fn summary_never_prints_negative_zero() {
        let report = summarize(&FlightMetrics {
            flight_time_s: 0.0,
            max_height_m: 0.0,
            total_range_m: -1e-17,
        });
        assert!(report.ends_with("- Total Range\t\t: 0.00 metres"), "{report}");
    }

    #[test]
    fn legend_rounds_to_two_decimals() {
        assert_eq!(time_legend(3.19275), "Time of Flight: 3.19 seconds");
        assert_eq!(time_legend(0.0), "Time of Flight: 0.00 seconds");
    }

    #[test]
    fn each_frame_extends_the_path_by_one_point() {
        let samples = vec![
            point(0.0, 0.0, 0.0),
            point(0.5, 1.5, 1.0),
            point(1.0, 3.0, 0.0),
        ];
        let mut sink = CountingSink::default();

        let rendered = TrajectoryAnimator::default()
            .animate(samples, &metrics(), &mut sink)
            .expect("animation should succeed");

        assert_eq!(rendered, 3);
        assert_eq!(
            sink.renders,
            vec![
                (0, 1, "Time of Flight: 0.00 seconds".to_string()),
                (1, 2, "Time of Flight: 0.50 seconds".to_string()),
                (2, 3, "Time of Flight: 1.00 seconds".to_string()),
            ]
        );
        assert_eq!(sink.pauses, 3);
        assert_eq!(sink.shows, 1);
    }

    #[test]
    fn empty_trajectory_is_rejected_without_showing() {
        let mut sink = CountingSink::default();
        let result = TrajectoryAnimator::default().animate(Vec::new(), &metrics(), &mut sink);

        assert!(matches!(result, Err(RenderError::EmptyTrajectory)));
        assert_eq!(sink.shows, 0);
    }

    #[test]
    fn playback_exposes_latest_frame() {
        let animator = TrajectoryAnimator::new(Duration::from_millis(25), 1.1);
        let samples = vec![point(0.0, 0.0, 5.0), point(1.0, 2.0, 0.0)];
        let mut playback = animator.playback(samples, &metrics());

        assert!(playback.current().is_none());
        let first_delay = playback.advance().map(|frame| frame.delay);
        assert_eq!(first_delay, Some(Duration::from_millis(25)));
        playback.advance();
        assert!(playback.advance().is_none());

        let last = playback.current().expect("a frame was rendered");
        assert_eq!(last.path, &[(0.0, 5.0), (2.0, 0.0)]);
        assert_eq!(last.head(), Some((2.0, 0.0)));
        assert_eq!(playback.frames_rendered(), 2);
    }
}
