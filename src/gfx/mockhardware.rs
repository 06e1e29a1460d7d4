use super::interactible::{Interactible, PollResult, Request};
use crate::error::Error;
use crate::grid::Surface;
use crate::raster::Cell;
use std::collections::VecDeque;

#[derive(Default)]
/// A placeholder for Hardware that is useful during testing
/// when we cannot call any SDL methods (since our test runner
/// may not run our tests on the main thread, which SDL strictly requires).
///
/// Every poll hands out the next scripted batch of requests, and every
/// display update records which cells were lit.
pub struct MockHardware {
    pub initialized: bool,
    pub titles: Vec<String>,
    pub frames: Vec<Vec<Cell>>,
    batches: VecDeque<Vec<Request>>,
    // Report an exit once the batches run out.
    exit_when_done: bool,
}

impl MockHardware {
    pub fn new(batches: Vec<Vec<Request>>, exit_when_done: bool) -> MockHardware {
        MockHardware {
            batches: batches.into(),
            exit_when_done,
            ..Default::default()
        }
    }
}

impl Interactible for MockHardware {
    fn init(&mut self) -> Result<(), Error> {
        self.initialized = true;
        Ok(())
    }

    fn set_title(&mut self, title: &str) -> Result<(), Error> {
        self.titles.push(title.to_string());
        Ok(())
    }

    fn update_display(&mut self, surface: &Surface) -> Result<(), Error> {
        let mut lit: Vec<Cell> = surface.lit().copied().collect();
        lit.sort();
        self.frames.push(lit);
        Ok(())
    }

    fn poll(&mut self, requests: &mut Vec<Request>) -> PollResult {
        match self.batches.pop_front() {
            Some(mut batch) => {
                requests.append(&mut batch);
                PollResult::ShouldContinue
            }
            None if self.exit_when_done => PollResult::ShouldExit,
            None => PollResult::ShouldContinue,
        }
    }
}
