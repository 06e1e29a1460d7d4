use crate::error::Error;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DurationMilliSeconds};
use std::fmt::{self, Display, Formatter};
use std::time::Duration;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
/// Which line algorithm a draw uses.
pub enum Algorithm {
    /// Sample the continuous line at fractional column steps.
    #[default]
    Step,
    /// Integer error-accumulating walk.
    Bresenham,
}

impl Display for Algorithm {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Algorithm::Step => write!(f, "step"),
            Algorithm::Bresenham => write!(f, "bresenham"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
/// Distance the step algorithm advances along the column axis per sample.
/// Always within (0, 1].
pub struct SampleStep(f64);

impl SampleStep {
    pub const MIN: f64 = 0.01;

    pub fn get(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for SampleStep {
    type Error = Error;

    fn try_from(value: f64) -> Result<SampleStep, Error> {
        // NaN fails both comparisons.
        if value > 0.0 && value <= 1.0 {
            Ok(SampleStep(value))
        } else {
            Err(Error::InvalidStep(value))
        }
    }
}

impl From<SampleStep> for f64 {
    fn from(step: SampleStep) -> f64 {
        step.0
    }
}

impl Default for SampleStep {
    fn default() -> SampleStep {
        SampleStep(0.1)
    }
}

#[serde_as]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
/// Everything a single rasterization needs besides its endpoints.
pub struct RasterConfig {
    pub algorithm: Algorithm,
    // Time between two emitted cells. The step algorithm scales this by
    // its step outside of vertical lines.
    #[serde(rename = "pacing_ms")]
    #[serde_as(as = "DurationMilliSeconds<u64>")]
    pacing: Duration,
    step: SampleStep,
    // Emit the end cell after a step walk that stopped short of it.
    pub close_endpoint: bool,
}

impl RasterConfig {
    pub fn new(algorithm: Algorithm, pacing: Duration, step: f64) -> Result<RasterConfig, Error> {
        Ok(RasterConfig {
            algorithm,
            pacing,
            step: SampleStep::try_from(step)?,
            close_endpoint: false,
        })
    }

    pub fn pacing(&self) -> Duration {
        self.pacing
    }

    pub fn set_pacing(&mut self, pacing: Duration) {
        self.pacing = pacing;
    }

    pub fn step(&self) -> f64 {
        self.step.get()
    }

    pub fn set_step(&mut self, step: f64) -> Result<(), Error> {
        self.step = SampleStep::try_from(step)?;
        Ok(())
    }
}

impl Default for RasterConfig {
    fn default() -> RasterConfig {
        RasterConfig {
            algorithm: Algorithm::Step,
            pacing: Duration::from_millis(100),
            step: SampleStep::default(),
            close_endpoint: false,
        }
    }
}

impl Display for RasterConfig {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{} {}ms", self.algorithm, self.pacing.as_millis())?;
        if self.algorithm == Algorithm::Step {
            write!(f, " step {:.2}", self.step())?;
        }
        Ok(())
    }
}
