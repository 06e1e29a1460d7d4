use super::drawable::Drawable;
use super::mapper::{Layout, Rect};
use crate::error::Error;
use crate::raster::{Cell, Segment};
use log::{debug, info, warn};
use std::collections::HashSet;
use std::fmt;

/// The grid as the user sees it: which cells are lit, which cells have
/// been picked as the ends of the next line, and how cells map onto
/// surface pixels.
pub struct Surface {
    layout: Layout,
    lit: HashSet<Cell>,
    // At most two cells. A full selection is cleared, together with
    // everything lit, by the next pick.
    selection: Vec<Cell>,
}

impl Surface {
    pub fn new(layout: Layout) -> Surface {
        Surface {
            layout,
            lit: HashSet::new(),
            selection: Vec::with_capacity(2),
        }
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn selection(&self) -> &[Cell] {
        &self.selection
    }

    /// Every lit cell, in no particular order.
    pub fn lit(&self) -> impl Iterator<Item = &Cell> {
        self.lit.iter()
    }

    pub fn lit_count(&self) -> usize {
        self.lit.len()
    }

    /// Rectangles to fill for the lit cells that are on the grid.
    pub fn lit_rects(&self) -> Vec<Rect> {
        self.lit
            .iter()
            .filter(|cell| self.layout.contains(**cell))
            .map(|cell| self.layout.mapper().cell_to_rect(*cell))
            .collect()
    }

    /// Lay the grid out again with a new cell scale.
    ///
    /// Lit cells survive, including those that no longer fit on the
    /// surface; they show up again once the scale allows it. On error the
    /// old layout stays in place.
    pub fn rescale(&mut self, scale: u32) -> Result<(), Error> {
        let (width, height) = self.layout.size();
        self.layout = Layout::new(scale, width, height, self.layout.label_height())?;

        let hidden = self.lit.iter().filter(|cell| !self.layout.contains(**cell)).count();
        if hidden > 0 {
            warn!("{hidden} lit cells do not fit on the grid at scale {scale}");
        }
        info!(
            "Rescaled to {scale}px cells ({}x{} grid)",
            self.layout.columns(),
            self.layout.rows()
        );

        Ok(())
    }

    /// Handle a click at a surface point. Returns the segment to draw once
    /// the click completes a selection of two cells.
    pub fn click(&mut self, px: i32, py: i32) -> Option<Segment> {
        self.reset_full_selection();

        match self.layout.mapper().point_to_cell(px, py) {
            Some(cell) if self.layout.contains(cell) => self.pick(cell),
            _ => {
                debug!("Ignoring click at ({px}, {py}) outside the grid");
                None
            }
        }
    }

    /// Like `click`, but with the cell already known.
    pub fn select(&mut self, cell: Cell) -> Option<Segment> {
        self.reset_full_selection();

        if !self.layout.contains(cell) {
            debug!("Ignoring selection of {cell} outside the grid");
            return None;
        }
        self.pick(cell)
    }

    fn reset_full_selection(&mut self) {
        if self.selection.len() == 2 {
            self.clear_all_pixels();
        }
    }

    fn pick(&mut self, cell: Cell) -> Option<Segment> {
        self.selection.push(cell);

        // Picking a lit cell turns it off again.
        if self.is_lit(cell) {
            self.clear_pixel(cell);
        } else {
            self.set_pixel(cell);
        }

        match self.selection[..] {
            [start, end] => Some(Segment::new(start, end)),
            _ => None,
        }
    }
}

impl Drawable for Surface {
    fn clear_all_pixels(&mut self) {
        self.lit.clear();
        self.selection.clear();
    }

    fn set_pixel(&mut self, cell: Cell) {
        if cell.is_valid() {
            self.lit.insert(cell);
        }
    }

    fn clear_pixel(&mut self, cell: Cell) {
        if cell.is_valid() {
            self.lit.remove(&cell);
        }
    }

    fn is_lit(&self, cell: Cell) -> bool {
        self.lit.contains(&cell)
    }
}

// Text rendering of the grid, top row first, with row numbers on the left.
impl fmt::Display for Surface {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let rows = self.layout.rows() as i32;
        let columns = self.layout.columns() as i32;
        let gutter = (rows - 1).to_string().len();

        for row in (0..rows).rev() {
            write!(f, "{row:>gutter$} ")?;
            for col in 0..columns {
                let c = if self.is_lit(Cell::new(col, row)) { '#' } else { '.' };
                write!(f, "{c}")?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn surface() -> Surface {
        // Margin 40, usable height 580, 15x11 cells.
        Surface::new(Layout::new(50, 800, 600, 20).unwrap())
    }

    fn click_cell(surface: &mut Surface, cell: Cell) -> Option<Segment> {
        let (px, py) = surface.layout().mapper().cell_to_rect(cell).center();
        surface.click(px, py)
    }

    #[test]
    fn negative_cells_are_ignored() {
        let mut surface = surface();
        surface.set_pixel(Cell::new(-1, 3));
        surface.set_pixel(Cell::new(3, -1));
        assert_eq!(surface.lit_count(), 0);

        surface.set_pixel(Cell::new(3, 3));
        surface.clear_pixel(Cell::new(-3, -3));
        assert_eq!(surface.lit_count(), 1);
    }

    #[test]
    fn two_clicks_make_a_segment() {
        let mut surface = surface();
        assert_eq!(click_cell(&mut surface, Cell::new(1, 2)), None);
        assert!(surface.is_lit(Cell::new(1, 2)));

        let segment = click_cell(&mut surface, Cell::new(6, 4));
        assert_eq!(segment, Some(Segment::new(Cell::new(1, 2), Cell::new(6, 4))));
        assert!(surface.is_lit(Cell::new(6, 4)));
        assert_eq!(surface.selection().len(), 2);
    }

    #[test]
    fn third_click_starts_over() {
        let mut surface = surface();
        click_cell(&mut surface, Cell::new(1, 2));
        click_cell(&mut surface, Cell::new(6, 4));
        surface.set_pixel(Cell::new(3, 3));

        assert_eq!(click_cell(&mut surface, Cell::new(0, 0)), None);
        assert_eq!(surface.selection(), &[Cell::new(0, 0)]);
        assert_eq!(surface.lit().copied().collect::<Vec<_>>(), vec![Cell::new(0, 0)]);
    }

    #[test]
    fn click_outside_grid() {
        let mut surface = surface();
        assert_eq!(surface.click(10, 100), None);
        assert_eq!(surface.click(100, 590), None);
        // Right of the last full column.
        assert_eq!(surface.click(795, 100), None);
        assert!(surface.selection().is_empty());
        assert_eq!(surface.lit_count(), 0);
    }

    #[test]
    fn outside_click_still_clears_full_selection() {
        let mut surface = surface();
        click_cell(&mut surface, Cell::new(1, 2));
        click_cell(&mut surface, Cell::new(6, 4));

        assert_eq!(surface.click(10, 100), None);
        assert!(surface.selection().is_empty());
        assert_eq!(surface.lit_count(), 0);
    }

    #[test]
    fn picking_a_lit_cell_toggles_it() {
        let mut surface = surface();
        surface.set_pixel(Cell::new(2, 2));

        assert_eq!(surface.select(Cell::new(2, 2)), None);
        assert!(!surface.is_lit(Cell::new(2, 2)));
        assert_eq!(surface.selection(), &[Cell::new(2, 2)]);
    }

    #[test]
    fn rescale_keeps_lit_cells_inside_grid() {
        let mut surface = surface();
        let cells = [Cell::new(0, 0), Cell::new(5, 5), Cell::new(14, 10), Cell::new(7, 2)];
        for cell in cells {
            surface.set_pixel(cell);
        }

        for scale in [10, 25, 40, 50] {
            surface.rescale(scale).unwrap();
            let layout = surface.layout();
            assert_eq!(layout.scale(), scale);

            let bounds = layout.bounds();
            for cell in cells {
                assert!(surface.is_lit(cell));
                assert!(layout.contains(cell), "{cell} fell off the grid at scale {scale}");
                assert!(bounds.contains_rect(&layout.mapper().cell_to_rect(cell)));
            }
            assert_eq!(surface.lit_rects().len(), cells.len());
        }
    }

    #[test]
    fn rescale_hides_but_keeps_cells_that_do_not_fit() {
        let mut surface = surface();
        surface.set_pixel(Cell::new(14, 10));

        // 7x5 cells at scale 100.
        surface.rescale(100).unwrap();
        assert!(surface.is_lit(Cell::new(14, 10)));
        assert!(surface.lit_rects().is_empty());

        surface.rescale(50).unwrap();
        assert_eq!(surface.lit_rects().len(), 1);
    }

    #[test]
    fn failed_rescale_keeps_layout() {
        let mut surface = surface();
        assert!(surface.rescale(0).is_err());
        assert!(surface.rescale(1000).is_err());
        assert_eq!(surface.layout().scale(), 50);
    }

    #[test]
    fn display() {
        let mut surface = Surface::new(Layout::new(100, 500, 320, 20).unwrap());
        surface.set_pixel(Cell::new(0, 0));
        surface.set_pixel(Cell::new(2, 1));

        assert_eq!(surface.to_string(), "2 ....\n1 ..#.\n0 #...\n");
    }
}
