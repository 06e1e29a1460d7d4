use super::cell::Cell;
use std::ops::RangeInclusive;
use std::time::Duration;

/// Lazily samples the continuous line between two cells at fractional
/// column offsets and yields the cell under every sample.
///
/// Vertical lines have no slope to sample, so they are walked row by row,
/// always bottom to top. Every other line is walked from the start column
/// towards the end column and stops *before* reaching the end column.
/// Depending on the step, the end cell itself may therefore never be
/// produced unless `close_endpoint` is set.
pub struct StepSampler {
    walk: Walk,
    pacing: Duration,
}

enum Walk {
    Vertical {
        col: i32,
        rows: RangeInclusive<i32>,
    },
    Sloped {
        slope: f64,
        intercept: f64,
        // Current sample position on the column axis.
        t: f64,
        end: f64,
        // Signed: negative when walking right to left.
        step: f64,
        // The end cell, if it should be emitted once the walk is over.
        closing: Option<Cell>,
        last: Option<Cell>,
    },
}

impl StepSampler {
    pub fn new(start: Cell, end: Cell, step: f64, pacing: Duration, close_endpoint: bool) -> StepSampler {
        if start.col == end.col {
            let rows = start.row.min(end.row)..=start.row.max(end.row);
            return StepSampler {
                walk: Walk::Vertical {
                    col: start.col,
                    rows,
                },
                pacing,
            };
        }

        let dx = f64::from(end.col - start.col);
        let dy = f64::from(end.row - start.row);
        let slope = dy / dx;
        let intercept =
            (f64::from(end.col) * f64::from(start.row) - f64::from(start.col) * f64::from(end.row)) / dx;

        StepSampler {
            walk: Walk::Sloped {
                slope,
                intercept,
                t: f64::from(start.col),
                end: f64::from(end.col),
                step: if dx > 0.0 { step } else { -step },
                closing: close_endpoint.then_some(end),
                last: None,
            },
            // Finer steps produce more samples, so each one waits less.
            pacing: pacing.mul_f64(step),
        }
    }

    /// The delay to wait after each emitted cell.
    pub fn pacing(&self) -> Duration {
        self.pacing
    }
}

impl Iterator for StepSampler {
    type Item = Cell;

    fn next(&mut self) -> Option<Cell> {
        match &mut self.walk {
            Walk::Vertical { col, rows } => rows.next().map(|row| Cell::new(*col, row)),
            Walk::Sloped {
                slope,
                intercept,
                t,
                end,
                step,
                closing,
                last,
            } => {
                let within = if *step > 0.0 { *t < *end } else { *t > *end };
                if within {
                    let cell = Cell::new(t.floor() as i32, (*slope * *t + *intercept).floor() as i32);
                    *t += *step;
                    *last = Some(cell);
                    return Some(cell);
                }

                // Only emit the end cell if the walk did not already land on it.
                closing.take().filter(|cell| *last != Some(*cell))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(start: (i32, i32), end: (i32, i32), step: f64) -> Vec<Cell> {
        StepSampler::new(start.into(), end.into(), step, Duration::from_millis(100), false).collect()
    }

    #[test]
    fn vertical_walks_upwards() {
        let expected: Vec<Cell> = (1..=5).map(|row| Cell::new(3, row)).collect();

        assert_eq!(sample((3, 1), (3, 5), 0.1), expected);
        assert_eq!(sample((3, 5), (3, 1), 0.1), expected);
    }

    #[test]
    fn single_cell() {
        assert_eq!(sample((2, 2), (2, 2), 0.1), vec![Cell::new(2, 2)]);
        assert_eq!(sample((2, 2), (2, 2), 1.0), vec![Cell::new(2, 2)]);
    }

    #[test]
    fn whole_steps_stop_before_end_column() {
        // One sample per column, none at column 4.
        assert_eq!(
            sample((0, 0), (4, 2), 1.0),
            vec![
                Cell::new(0, 0),
                Cell::new(1, 0),
                Cell::new(2, 1),
                Cell::new(3, 1),
            ]
        );
    }

    #[test]
    fn right_to_left() {
        // Samples at t = 4, 3, 2, 1 on the line through (0, 0) and (4, 4).
        assert_eq!(
            sample((4, 4), (0, 0), 1.0),
            vec![
                Cell::new(4, 4),
                Cell::new(3, 3),
                Cell::new(2, 2),
                Cell::new(1, 1),
            ]
        );
    }

    #[test]
    fn fine_steps_repeat_cells() {
        let cells = sample((0, 0), (2, 0), 0.25);
        assert_eq!(cells.len(), 8);
        assert!(cells[..4].iter().all(|c| *c == Cell::new(0, 0)));
        assert!(cells[4..].iter().all(|c| *c == Cell::new(1, 0)));
    }

    #[test]
    fn close_endpoint_appends_end_once() {
        let end = Cell::new(4, 2);
        let closed: Vec<Cell> =
            StepSampler::new(Cell::new(0, 0), end, 1.0, Duration::ZERO, true).collect();
        assert_eq!(closed.len(), 5);
        assert_eq!(closed.last(), Some(&end));

        // Vertical lines already include both ends.
        let vertical: Vec<Cell> =
            StepSampler::new(Cell::new(1, 0), Cell::new(1, 2), 1.0, Duration::ZERO, true).collect();
        assert_eq!(vertical.len(), 3);
    }

    #[test]
    fn pacing_scales_with_step() {
        let base = Duration::from_millis(100);
        let sloped = StepSampler::new(Cell::new(0, 0), Cell::new(5, 1), 0.5, base, false);
        assert_eq!(sloped.pacing(), Duration::from_millis(50));

        let vertical = StepSampler::new(Cell::new(0, 0), Cell::new(0, 5), 0.5, base, false);
        assert_eq!(vertical.pacing(), base);
    }
}
