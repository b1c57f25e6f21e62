//! Command-line and interactive input, turned into validated launch values.

use std::io::{BufRead, Write};
use std::time::Duration;

use anyhow::{Context, Result, bail};
use clap::Args;

use crate::config::{CelestialBody, DEFAULT_STEP_COUNT, SimulationConfig};
use crate::core::ballistics::InitialConditions;
use crate::core::error::DomainError;

const DEFAULT_FRAME_DELAY_MS: u64 = 10;

/// Launch parameters shared by every binary. Values left out are prompted for.
#[derive(Args, Clone, Debug, PartialEq)]
pub struct LaunchArgs {
    /// Initial height above the ground (m)
    #[arg(long, allow_negative_numbers = true)]
    pub height: Option<f64>,

    /// Launch speed (m/s)
    #[arg(long, allow_negative_numbers = true)]
    pub speed: Option<f64>,

    /// Launch angle above the horizontal (degrees)
    #[arg(short = 'a', long, allow_negative_numbers = true)]
    pub angle: Option<f64>,

    /// Body whose surface gravity is used
    #[arg(long, value_enum, default_value_t = CelestialBody::Earth)]
    pub body: CelestialBody,

    /// Gravitational acceleration (m/s^2), overrides --body
    #[arg(short = 'g', long)]
    pub gravity: Option<f64>,

    /// Number of trajectory samples, one animation frame each
    #[arg(long, default_value_t = DEFAULT_STEP_COUNT)]
    pub steps: usize,

    /// Delay between animation frames (ms)
    #[arg(long, default_value_t = DEFAULT_FRAME_DELAY_MS)]
    pub frame_delay_ms: u64,
}

impl Default for LaunchArgs {
    fn default() -> Self {
        Self {
            height: None,
            speed: None,
            angle: None,
            body: CelestialBody::Earth,
            gravity: None,
            steps: DEFAULT_STEP_COUNT,
            frame_delay_ms: DEFAULT_FRAME_DELAY_MS,
        }
    }
}

impl LaunchArgs {
    pub fn config(&self) -> SimulationConfig {
        SimulationConfig {
            gravity_mps2: self
                .gravity
                .unwrap_or_else(|| self.body.gravity_mps2()),
            step_count: self.steps,
            frame_delay: Duration::from_millis(self.frame_delay_ms),
            ..SimulationConfig::for_body(self.body)
        }
    }

    /// Where the gravity in [`LaunchArgs::config`] comes from: the body name,
    /// or `"custom"` when `--gravity` is given.
    pub fn gravity_source(&self) -> &'static str {
        match self.gravity {
            Some(_) => "custom",
            None => self.body.name(),
        }
    }

    pub fn is_complete(&self) -> bool {
        self.height.is_some() && self.speed.is_some() && self.angle.is_some()
    }

    /// Builds the launch state, prompting on `output` and reading from `input`
    /// for any value not supplied on the command line.
    pub fn conditions<R, W>(&self, input: &mut R, output: &mut W) -> Result<InitialConditions>
    where
        R: BufRead,
        W: Write,
    {
        if !self.is_complete() {
            writeln!(output, "Solution Setup").context("Failed to write prompt")?;
        }

        let height = match self.height {
            Some(v) => v,
            None => read_f64(input, output, "- Initial Height (in metres)\t: ")?,
        };
        let speed = match self.speed {
            Some(v) => v,
            None => read_f64(input, output, "- Initial Velocity (in m/s)\t: ")?,
        };
        let angle = match self.angle {
            Some(v) => v,
            None => read_f64(input, output, "- Incident Angle (in degrees)\t: ")?,
        };

        Ok(InitialConditions::new(height, speed, angle)?)
    }
}

pub fn parse_f64(value: &str, label: &'static str) -> Result<f64, DomainError> {
    value
        .trim()
        .parse::<f64>()
        .map_err(|_| DomainError::NotANumber {
            label,
            value: value.trim().to_string(),
        })
}

/// Prompts until a number is entered. Running out of input is an error.
pub fn read_f64<R, W>(input: &mut R, output: &mut W, prompt: &str) -> Result<f64>
where
    R: BufRead,
    W: Write,
{
    loop {
        write!(output, "{prompt}").context("Failed to write prompt")?;
        output.flush().context("Failed to flush stdout")?;

        let mut line = String::new();
        let bytes = input
            .read_line(&mut line)
            .context("Could not read input")?;
        if bytes == 0 {
            bail!("Input ended unexpectedly (EOF).");
        }

        match parse_f64(&line, "number") {
            Ok(v) => return Ok(v),
            Err(_) => writeln!(output, "Please enter a valid number (e.g., 45 or 12.5).")
                .context("Failed to write prompt")?,
        }
    }
}
