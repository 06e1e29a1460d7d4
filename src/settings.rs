use crate::error::Error;
use crate::grid::Layout;
use crate::raster::RasterConfig;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
/// Startup configuration. Every field may be left out of a settings file.
pub struct Settings {
    // Surface size in pixels.
    pub width: u32,
    pub height: u32,
    // Pixels per cell.
    pub scale: u32,
    // Height of the column number band, which also sizes the digits.
    pub label_height: u32,
    // Animation loop iterations per second.
    pub frame_rate: u32,
    pub raster: RasterConfig,
}

impl Default for Settings {
    fn default() -> Settings {
        Settings {
            width: 800,
            height: 600,
            scale: 50,
            label_height: 20,
            frame_rate: 60,
            raster: RasterConfig::default(),
        }
    }
}

impl Settings {
    pub fn load(path: &Path) -> Result<Settings, Error> {
        let file = File::open(path)?;
        Ok(serde_json::from_reader(BufReader::new(file))?)
    }

    /// The grid layout these settings describe, which fails if the grid
    /// would not fit on the surface.
    pub fn layout(&self) -> Result<Layout, Error> {
        Layout::new(self.scale, self.width, self.height, self.label_height)
    }
}
