use crate::raster::Segment;
use thiserror::Error;

/// Everything that can go wrong before or while the grid is on screen.
#[derive(Debug, Error)]
pub enum Error {
    #[error("sampling step {0} is outside (0, 1]")]
    InvalidStep(f64),

    #[error("cell scale must be greater than zero")]
    ZeroScale,

    #[error("a {width}x{height} surface at scale {scale} leaves no room for a single cell")]
    SurfaceTooSmall { width: u32, height: u32, scale: u32 },

    #[error("could not parse line '{0}', expected COL,ROW:COL,ROW")]
    InvalidLine(String),

    #[error("line {segment} does not fit the {columns}x{rows} grid")]
    LineOffGrid {
        segment: Segment,
        columns: u32,
        rows: u32,
    },

    #[error("built without window support, pass --line to draw without one")]
    NoWindow,

    #[error("SDL error: {0}")]
    Sdl(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("malformed settings: {0}")]
    Settings(#[from] serde_json::Error),
}
