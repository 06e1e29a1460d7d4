use crate::error::Error;
use crate::grid::Surface;
use crate::raster::{Algorithm, Cell, Segment};

pub enum PollResult {
    ShouldContinue,
    ShouldExit,
}

#[derive(Clone, Copy, Debug, PartialEq)]
/// Something the user asked for. Requests are applied in order, and only
/// while no line is being drawn.
pub enum Request {
    // A click at surface pixel coordinates.
    Click { x: i32, y: i32 },
    // Pick a cell directly, without going through the mapper.
    Select(Cell),
    // Draw a whole segment, leaving the selection and earlier lines alone.
    Draw(Segment),
    // Grow or shrink the cell scale by this many pixels.
    ScaleBy(i32),
    // Multiply the pacing delay.
    PacingBy(f64),
    // Add to the sampling step.
    StepBy(f64),
    UseAlgorithm(Algorithm),
    Clear,
    Quit,
}

/// A front end that shows the surface and turns user input into requests.
pub trait Interactible {
    fn init(&mut self) -> Result<(), Error>;
    fn set_title(&mut self, title: &str) -> Result<(), Error>;
    fn update_display(&mut self, surface: &Surface) -> Result<(), Error>;

    /// Append everything that happened since the last poll to `requests`.
    fn poll(&mut self, requests: &mut Vec<Request>) -> PollResult;
}
