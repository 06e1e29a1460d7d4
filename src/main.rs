pub mod app;
pub mod error;
pub mod gfx;
pub mod grid;
pub mod raster;
pub mod settings;

use app::App;
use clap::Parser;
use error::Error;
use gfx::Headless;
use grid::{Layout, Surface};
use raster::{Algorithm, Segment};
use settings::Settings;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Path to a JSON settings file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Pixels per grid cell
    #[arg(long)]
    scale: Option<u32>,

    /// Milliseconds between two drawn cells
    #[arg(long)]
    pacing_ms: Option<u64>,

    /// Sampling step of the step algorithm, in (0, 1]
    #[arg(long)]
    step: Option<f64>,

    /// Line algorithm to start with
    #[arg(short, long, value_enum)]
    algorithm: Option<Algorithm>,

    /// Make the step algorithm always finish on the end cell
    #[arg(long)]
    close_endpoint: bool,

    /// Draw this line without opening a window and print the grid (repeatable)
    #[arg(short, long = "line", value_name = "COL,ROW:COL,ROW")]
    lines: Vec<Segment>,

    /// Whether or not to turn on debug logging
    #[arg(short, long)]
    debug: bool,
}

impl Args {
    fn apply(&self, settings: &mut Settings) -> Result<(), Error> {
        if let Some(scale) = self.scale {
            settings.scale = scale;
        }
        if let Some(pacing) = self.pacing_ms {
            settings.raster.set_pacing(Duration::from_millis(pacing));
        }
        if let Some(step) = self.step {
            settings.raster.set_step(step)?;
        }
        if let Some(algorithm) = self.algorithm {
            settings.raster.algorithm = algorithm;
        }
        if self.close_endpoint {
            settings.raster.close_endpoint = true;
        }
        Ok(())
    }
}

/// Every endpoint of a scripted line has to land on the grid.
fn check_lines(lines: &[Segment], layout: &Layout) -> Result<(), Error> {
    match lines
        .iter()
        .find(|segment| !layout.contains(segment.start) || !layout.contains(segment.end))
    {
        Some(&segment) => Err(Error::LineOffGrid {
            segment,
            columns: layout.columns(),
            rows: layout.rows(),
        }),
        None => Ok(()),
    }
}

#[cfg(feature = "hardware")]
fn open_window(surface: Surface, settings: Settings) -> Result<(), Error> {
    let hardware = gfx::Hardware::new(&surface, "gridline");
    App::new(surface, settings.raster, hardware, settings.frame_rate).run()
}

#[cfg(not(feature = "hardware"))]
fn open_window(_surface: Surface, _settings: Settings) -> Result<(), Error> {
    Err(Error::NoWindow)
}

fn main() -> Result<(), Error> {
    let args = Args::parse();

    let level = if args.debug { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let mut settings = match &args.config {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };
    args.apply(&mut settings)?;

    let layout = settings.layout()?;
    if args.lines.is_empty() {
        return open_window(Surface::new(layout), settings);
    }
    check_lines(&args.lines, &layout)?;

    let surface = Surface::new(layout);
    let headless = Headless::new(&args.lines);
    let mut app = App::new(surface, settings.raster, headless, settings.frame_rate);
    app.run()?;
    print!("{}", app.surface());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use grid::Drawable;
    use raster::Cell;

    fn args(extra: &[&str]) -> Args {
        Args::parse_from(std::iter::once("gridline").chain(extra.iter().copied()))
    }

    fn segment(start: (i32, i32), end: (i32, i32)) -> Segment {
        Segment::new(start.into(), end.into())
    }

    #[test]
    fn no_flags_keep_settings() {
        let mut settings = Settings::default();
        args(&[]).apply(&mut settings).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn flags_override_settings() {
        let mut settings = Settings::default();
        args(&[
            "--scale",
            "20",
            "--pacing-ms",
            "5",
            "--step",
            "0.25",
            "-a",
            "bresenham",
            "--close-endpoint",
        ])
        .apply(&mut settings)
        .unwrap();

        assert_eq!(settings.scale, 20);
        assert_eq!(settings.raster.pacing(), Duration::from_millis(5));
        assert_eq!(settings.raster.step(), 0.25);
        assert_eq!(settings.raster.algorithm, Algorithm::Bresenham);
        assert!(settings.raster.close_endpoint);
    }

    #[test]
    fn step_is_validated() {
        let mut settings = Settings::default();
        let result = args(&["--step", "2"]).apply(&mut settings);
        assert!(matches!(result, Err(Error::InvalidStep(step)) if step == 2.0));
        assert_eq!(settings.raster.step(), 0.1);

        assert!(matches!(
            args(&["--step", "0"]).apply(&mut settings),
            Err(Error::InvalidStep(_))
        ));
    }

    #[test]
    fn lines_repeat() {
        let args = args(&["--line", "0,0:0,3", "-l", "5,0:5,3"]);
        assert_eq!(args.lines, vec![segment((0, 0), (0, 3)), segment((5, 0), (5, 3))]);
        assert!(Args::try_parse_from(["gridline", "--line", "0,0"]).is_err());
    }

    #[test]
    fn lines_must_fit_the_grid() {
        // 15x11 cells.
        let layout = Settings::default().layout().unwrap();

        assert!(check_lines(&[segment((0, 0), (14, 10))], &layout).is_ok());

        let off_grid = segment((99, 0), (2, 2));
        match check_lines(&[segment((5, 0), (5, 3)), off_grid], &layout) {
            Err(Error::LineOffGrid {
                segment,
                columns,
                rows,
            }) => {
                assert_eq!(segment, off_grid);
                assert_eq!((columns, rows), (15, 11));
            }
            other => panic!("expected an off-grid error, got {other:?}"),
        }

        assert!(check_lines(&[segment((0, 0), (0, 11))], &layout).is_err());
        assert!(check_lines(&[segment((0, 0), (15, 0))], &layout).is_err());
    }

    #[test]
    fn headless_run_draws_every_line() {
        let mut settings = Settings::default();
        args(&["--pacing-ms", "1", "-a", "bresenham"])
            .apply(&mut settings)
            .unwrap();
        let lines = [segment((0, 0), (0, 3)), segment((5, 0), (5, 3))];
        let layout = settings.layout().unwrap();
        check_lines(&lines, &layout).unwrap();

        let mut app = App::new(Surface::new(layout), settings.raster, Headless::new(&lines), 1000);
        app.run().unwrap();

        let surface = app.surface();
        for row in 0..4 {
            assert!(surface.is_lit(Cell::new(0, row)), "(0, {row}) should be lit");
            assert!(surface.is_lit(Cell::new(5, row)), "(5, {row}) should be lit");
        }
        assert_eq!(surface.lit_count(), 8);
    }
}
