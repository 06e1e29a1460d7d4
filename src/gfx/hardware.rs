use super::interactible::{Interactible, PollResult, Request};
use crate::error::Error;
use crate::grid::{font, Rect, Surface};
use crate::raster::Algorithm;

use log::info;
use sdl2::event::Event;
use sdl2::keyboard::Scancode;
use sdl2::mouse::MouseButton;
use sdl2::pixels::Color;
use sdl2::rect::Rect as SdlRect;
use sdl2::render::WindowCanvas;

const BACKGROUND: Color = Color::RGB(255, 255, 255);
const FOREGROUND: Color = Color::RGB(0, 0, 0);
const SELECTED: Color = Color::RGB(200, 40, 40);

const SCALE_STEP: i32 = 5;
const STEP_STEP: f64 = 0.05;

fn sdl_rect(rect: Rect) -> SdlRect {
    SdlRect::new(rect.x, rect.y, rect.w, rect.h)
}

/// An SDL2 window showing the grid.
///
/// SDL must be driven from the main thread, so tests use `MockHardware`.
pub struct Hardware {
    width: u32,
    height: u32,
    title: String,
    sdl: Option<sdl2::Sdl>,
    canvas: Option<WindowCanvas>,
    events: Option<sdl2::EventPump>,
}

impl Hardware {
    pub fn new(surface: &Surface, title: &str) -> Hardware {
        let (width, height) = surface.layout().size();

        Hardware {
            width,
            height,
            title: title.to_string(),
            sdl: None,
            canvas: None,
            events: None,
        }
    }

    fn request_for(scancode: Scancode) -> Option<Request> {
        let request = match scancode {
            Scancode::Up => Request::ScaleBy(SCALE_STEP),
            Scancode::Down => Request::ScaleBy(-SCALE_STEP),
            Scancode::LeftBracket => Request::PacingBy(0.5),
            Scancode::RightBracket => Request::PacingBy(2.0),
            Scancode::Minus => Request::StepBy(-STEP_STEP),
            Scancode::Equals => Request::StepBy(STEP_STEP),
            Scancode::B => Request::UseAlgorithm(Algorithm::Bresenham),
            Scancode::S => Request::UseAlgorithm(Algorithm::Step),
            Scancode::C => Request::Clear,
            Scancode::Escape => Request::Quit,
            _ => return None,
        };
        Some(request)
    }
}

impl Interactible for Hardware {
    fn init(&mut self) -> Result<(), Error> {
        let sdl_context = sdl2::init().map_err(Error::Sdl)?;
        let video_subsystem = sdl_context.video().map_err(Error::Sdl)?;

        let window = video_subsystem
            .window(&self.title, self.width, self.height)
            .position_centered()
            .build()
            .map_err(|e| Error::Sdl(e.to_string()))?;
        let mut canvas = window
            .into_canvas()
            .build()
            .map_err(|e| Error::Sdl(e.to_string()))?;
        canvas.set_draw_color(BACKGROUND);
        canvas.clear();
        canvas.present();

        self.events = Some(sdl_context.event_pump().map_err(Error::Sdl)?);
        self.sdl = Some(sdl_context);
        self.canvas = Some(canvas);

        info!("Opened a {}x{} window", self.width, self.height);
        Ok(())
    }

    fn set_title(&mut self, title: &str) -> Result<(), Error> {
        self.title = title.to_string();

        if let Some(canvas) = self.canvas.as_mut() {
            canvas
                .window_mut()
                .set_title(title)
                .map_err(|e| Error::Sdl(e.to_string()))?;
        }
        Ok(())
    }

    fn update_display(&mut self, surface: &Surface) -> Result<(), Error> {
        let Some(canvas) = self.canvas.as_mut() else {
            return Ok(());
        };
        let layout = surface.layout();
        let mapper = layout.mapper();

        canvas.set_draw_color(BACKGROUND);
        canvas.clear();

        canvas.set_draw_color(FOREGROUND);
        for cell in layout.cells() {
            canvas
                .draw_rect(sdl_rect(mapper.cell_to_rect(cell)))
                .map_err(Error::Sdl)?;
        }

        let lit: Vec<SdlRect> = surface.lit_rects().into_iter().map(sdl_rect).collect();
        canvas.fill_rects(&lit).map_err(Error::Sdl)?;

        for label in layout.labels() {
            let glyphs: Vec<SdlRect> =
                font::text_rects(&label.text, label.x, label.y, layout.label_height())
                    .into_iter()
                    .map(sdl_rect)
                    .collect();
            canvas.fill_rects(&glyphs).map_err(Error::Sdl)?;
        }

        // Outline the picked endpoints so they stay visible under the line.
        canvas.set_draw_color(SELECTED);
        for cell in surface.selection().iter().filter(|c| layout.contains(**c)) {
            canvas
                .draw_rect(sdl_rect(mapper.cell_to_rect(*cell)))
                .map_err(Error::Sdl)?;
        }

        canvas.present();
        Ok(())
    }

    fn poll(&mut self, requests: &mut Vec<Request>) -> PollResult {
        let Some(events) = self.events.as_mut() else {
            return PollResult::ShouldExit;
        };

        for event in events.poll_iter() {
            match event {
                Event::Quit { .. } => {
                    info!("Window closed");
                    return PollResult::ShouldExit;
                }
                Event::MouseButtonDown {
                    mouse_btn: MouseButton::Left,
                    x,
                    y,
                    ..
                } => requests.push(Request::Click { x, y }),
                Event::KeyDown {
                    scancode: Some(scancode),
                    repeat: false,
                    ..
                } => requests.extend(Hardware::request_for(scancode)),
                _ => {}
            }
        }

        PollResult::ShouldContinue
    }
}
