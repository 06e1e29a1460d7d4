mod bresenham;
mod cell;
mod config;
mod step;

pub use bresenham::Bresenham;
pub use cell::{Cell, Segment};
pub use config::{Algorithm, RasterConfig, SampleStep};
pub use step::StepSampler;

use std::time::Duration;

/// A finite stream of cells that is meant to be consumed at a fixed pace.
pub trait Paced: Iterator<Item = Cell> {
    /// How long the consumer waits after each emitted cell.
    fn pacing(&self) -> Duration;
}

impl Paced for StepSampler {
    fn pacing(&self) -> Duration {
        StepSampler::pacing(self)
    }
}

impl Paced for Bresenham {
    fn pacing(&self) -> Duration {
        Bresenham::pacing(self)
    }
}

/// One in-progress rasterization, whichever algorithm produced it.
///
/// Forward-only: drawing the same segment again needs a new `rasterize` call.
pub enum Line {
    Step(StepSampler),
    Bresenham(Bresenham),
}

impl Iterator for Line {
    type Item = Cell;

    fn next(&mut self) -> Option<Cell> {
        match self {
            Line::Step(sampler) => sampler.next(),
            Line::Bresenham(walk) => walk.next(),
        }
    }
}

impl Paced for Line {
    fn pacing(&self) -> Duration {
        match self {
            Line::Step(sampler) => sampler.pacing(),
            Line::Bresenham(walk) => walk.pacing(),
        }
    }
}

/// Start rasterizing the segment from `start` to `end`.
///
/// Nothing is computed until the returned line is iterated, and iterating
/// it has no effect besides producing cells.
pub fn rasterize(start: Cell, end: Cell, config: &RasterConfig) -> Line {
    match config.algorithm {
        Algorithm::Step => Line::Step(StepSampler::new(
            start,
            end,
            config.step(),
            config.pacing(),
            config.close_endpoint,
        )),
        Algorithm::Bresenham => Line::Bresenham(Bresenham::new(start, end, config.pacing())),
    }
}
