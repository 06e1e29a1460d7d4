use crate::error::Error;
use crate::gfx::{Interactible, PollResult, Request};
use crate::grid::{Drawable, Surface};
use crate::raster::{self, Line, Paced, RasterConfig, SampleStep, Segment};
use log::{debug, info, warn};
use std::collections::VecDeque;
use std::time::{Duration, Instant};

pub const MIN_SCALE: u32 = 10;
pub const MAX_SCALE: u32 = 200;
pub const MIN_PACING: Duration = Duration::from_millis(1);
pub const MAX_PACING: Duration = Duration::from_millis(2000);

/// The line currently being drawn.
struct InFlight {
    segment: Segment,
    line: Line,
    // When the next cell is due.
    next_at: Instant,
    emitted: usize,
}

/// Drives the surface: applies user requests, and animates at most one
/// line at a time.
///
/// Requests queue up while a line is in flight and are only applied once
/// it has been fully drawn, so neither the lit cells nor any setting
/// change under a running line.
pub struct App<I: Interactible> {
    surface: Surface,
    config: RasterConfig,
    hardware: I,
    pending: VecDeque<Request>,
    in_flight: Option<InFlight>,
    quit: bool,
    frame: Duration,
}

impl<I: Interactible> App<I> {
    pub fn new(surface: Surface, config: RasterConfig, hardware: I, frame_rate: u32) -> App<I> {
        App {
            surface,
            config,
            hardware,
            pending: VecDeque::new(),
            in_flight: None,
            quit: false,
            frame: Duration::from_secs(1) / frame_rate.max(1),
        }
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    pub fn config(&self) -> &RasterConfig {
        &self.config
    }

    pub fn hardware(&self) -> &I {
        &self.hardware
    }

    /// Whether a line is still being drawn.
    pub fn is_busy(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn submit(&mut self, request: Request) {
        self.pending.push_back(request);
    }

    /// Run until the front end exits or a quit request is applied.
    pub fn run(&mut self) -> Result<(), Error> {
        self.hardware.init()?;
        self.refresh_title()?;

        let mut requests = Vec::new();
        loop {
            if let PollResult::ShouldExit = self.hardware.poll(&mut requests) {
                break;
            }
            self.pending.extend(requests.drain(..));

            self.tick(Instant::now())?;
            self.hardware.update_display(&self.surface)?;

            if self.quit {
                break;
            }
            std::thread::sleep(self.frame);
        }

        Ok(())
    }

    /// Emit every cell due by `now`, and apply queued requests for as long
    /// as no line is in flight.
    pub fn tick(&mut self, now: Instant) -> Result<(), Error> {
        loop {
            self.advance(now);
            if self.is_busy() || self.quit {
                return Ok(());
            }

            match self.pending.pop_front() {
                Some(request) => self.apply(request, now)?,
                None => return Ok(()),
            }
        }
    }

    fn advance(&mut self, now: Instant) {
        while let Some(flight) = self.in_flight.as_mut() {
            if flight.next_at > now {
                return;
            }

            match flight.line.next() {
                Some(cell) => {
                    debug!("Lighting {cell}");
                    self.surface.set_pixel(cell);
                    flight.emitted += 1;
                    flight.next_at += flight.line.pacing();
                }
                None => {
                    info!("Finished {} after {} cells", flight.segment, flight.emitted);
                    self.in_flight = None;
                }
            }
        }
    }

    fn start(&mut self, segment: Segment, now: Instant) {
        info!("Drawing {segment} ({})", self.config);

        self.in_flight = Some(InFlight {
            segment,
            line: raster::rasterize(segment.start, segment.end, &self.config),
            next_at: now,
            emitted: 0,
        });
    }

    fn apply(&mut self, request: Request, now: Instant) -> Result<(), Error> {
        match request {
            Request::Click { x, y } => {
                if let Some(segment) = self.surface.click(x, y) {
                    self.start(segment, now);
                }
            }
            Request::Select(cell) => {
                if let Some(segment) = self.surface.select(cell) {
                    self.start(segment, now);
                }
            }
            Request::Draw(segment) => {
                let layout = self.surface.layout();
                if layout.contains(segment.start) && layout.contains(segment.end) {
                    self.surface.set_pixel(segment.start);
                    self.surface.set_pixel(segment.end);
                    self.start(segment, now);
                } else {
                    warn!(
                        "Skipping {segment}, it does not fit the {}x{} grid",
                        layout.columns(),
                        layout.rows()
                    );
                }
            }
            Request::ScaleBy(delta) => {
                let current = self.surface.layout().scale();
                let scale = current
                    .saturating_add_signed(delta)
                    .clamp(MIN_SCALE, MAX_SCALE);
                if scale != current {
                    if let Err(e) = self.surface.rescale(scale) {
                        warn!("Keeping scale {current}: {e}");
                    }
                    self.refresh_title()?;
                }
            }
            Request::PacingBy(factor) => {
                let pacing = self
                    .config
                    .pacing()
                    .mul_f64(factor)
                    .clamp(MIN_PACING, MAX_PACING);
                self.config.set_pacing(pacing);
                info!("Pacing is now {}ms", pacing.as_millis());
                self.refresh_title()?;
            }
            Request::StepBy(delta) => {
                // Round to hundredths so repeated nudges do not drift.
                let step = (self.config.step() + delta).clamp(SampleStep::MIN, 1.0);
                let step = (step * 100.0).round() / 100.0;
                self.config.set_step(step)?;
                info!("Step is now {step:.2}");
                self.refresh_title()?;
            }
            Request::UseAlgorithm(algorithm) => {
                self.config.algorithm = algorithm;
                info!("Using {algorithm}");
                self.refresh_title()?;
            }
            Request::Clear => self.surface.clear_all_pixels(),
            Request::Quit => self.quit = true,
        }

        Ok(())
    }

    fn refresh_title(&mut self) -> Result<(), Error> {
        let title = format!(
            "gridline | {} | scale {}",
            self.config,
            self.surface.layout().scale()
        );
        self.hardware.set_title(&title)
    }
}
