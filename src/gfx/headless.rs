use super::interactible::{Interactible, PollResult, Request};
use crate::error::Error;
use crate::grid::Surface;
use crate::raster::Segment;
use log::{debug, info};

/// A front end without a window that draws a fixed list of segments and
/// then asks to quit.
pub struct Headless {
    script: Vec<Request>,
    lit: usize,
}

impl Headless {
    pub fn new(segments: &[Segment]) -> Headless {
        let mut script: Vec<Request> = segments.iter().copied().map(Request::Draw).collect();
        script.push(Request::Quit);

        Headless { script, lit: 0 }
    }
}

impl Interactible for Headless {
    fn init(&mut self) -> Result<(), Error> {
        Ok(())
    }

    fn set_title(&mut self, title: &str) -> Result<(), Error> {
        info!("{title}");
        Ok(())
    }

    fn update_display(&mut self, surface: &Surface) -> Result<(), Error> {
        if surface.lit_count() != self.lit {
            self.lit = surface.lit_count();
            debug!("{} cells lit", self.lit);
        }
        Ok(())
    }

    fn poll(&mut self, requests: &mut Vec<Request>) -> PollResult {
        requests.append(&mut self.script);
        PollResult::ShouldContinue
    }
}
