use super::font;
use crate::error::Error;
use crate::raster::Cell;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// An axis-aligned rectangle in surface pixels, `(x, y)` being its top-left corner.
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: u32,
    pub h: u32,
}

impl Rect {
    pub fn right(&self) -> i32 {
        self.x + self.w as i32
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.h as i32
    }

    pub fn center(&self) -> (i32, i32) {
        (self.x + (self.w / 2) as i32, self.y + (self.h / 2) as i32)
    }

    pub fn contains_rect(&self, other: &Rect) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Converts between grid cells and surface pixels.
///
/// The grid grows rightwards from `margin` and upwards from `usable_height`,
/// so row 0 is drawn just above the column labels.
pub struct Mapper {
    scale: u32,
    margin: i32,
    usable_height: i32,
}

impl Mapper {
    pub fn new(scale: u32, margin: i32, usable_height: i32) -> Result<Mapper, Error> {
        if scale == 0 {
            return Err(Error::ZeroScale);
        }

        Ok(Mapper {
            scale,
            margin,
            usable_height,
        })
    }

    pub fn scale(&self) -> u32 {
        self.scale
    }

    pub fn margin(&self) -> i32 {
        self.margin
    }

    pub fn usable_height(&self) -> i32 {
        self.usable_height
    }

    pub fn cell_to_rect(&self, cell: Cell) -> Rect {
        let scale = self.scale as i32;

        Rect {
            x: self.margin + cell.col * scale,
            y: self.usable_height - (cell.row + 1) * scale,
            w: self.scale,
            h: self.scale,
        }
    }

    /// The cell under a surface point, or `None` if the point is in the
    /// label gutter to the left of the grid or the label band below it.
    pub fn point_to_cell(&self, px: i32, py: i32) -> Option<Cell> {
        if px <= self.margin || py > self.usable_height {
            return None;
        }

        let scale = self.scale as i32;
        // Both offsets are non-negative here, so division floors.
        Some(Cell::new(
            (px - self.margin) / scale,
            (self.usable_height - py) / scale,
        ))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// A text label positioned on the surface; `(x, y)` is its top-left corner.
pub struct Label {
    pub text: String,
    pub x: i32,
    pub y: i32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// The mapper together with the extent of the grid it is drawn on.
pub struct Layout {
    mapper: Mapper,
    width: u32,
    height: u32,
    label_height: u32,
    columns: u32,
    rows: u32,
}

impl Layout {
    /// Lay out a grid of `scale` sized cells on a `width` x `height` surface.
    ///
    /// The bottom `label_height` pixels hold column numbers, and the left
    /// margin is as wide as the widest row number at this scale.
    pub fn new(scale: u32, width: u32, height: u32, label_height: u32) -> Result<Layout, Error> {
        if scale == 0 {
            return Err(Error::ZeroScale);
        }

        let widest_label = (height / scale).to_string();
        let margin = widest_label.len() as u32 * font::advance(label_height);
        let usable_height = height.saturating_sub(label_height);

        let columns = width.saturating_sub(margin) / scale;
        let rows = usable_height / scale;
        if columns == 0 || rows == 0 {
            return Err(Error::SurfaceTooSmall {
                width,
                height,
                scale,
            });
        }

        Ok(Layout {
            mapper: Mapper::new(scale, margin as i32, usable_height as i32)?,
            width,
            height,
            label_height,
            columns,
            rows,
        })
    }

    pub fn mapper(&self) -> &Mapper {
        &self.mapper
    }

    pub fn scale(&self) -> u32 {
        self.mapper.scale
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn label_height(&self) -> u32 {
        self.label_height
    }

    pub fn columns(&self) -> u32 {
        self.columns
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Whether the cell is one of the squares drawn on the surface.
    pub fn contains(&self, cell: Cell) -> bool {
        cell.is_valid() && (cell.col as u32) < self.columns && (cell.row as u32) < self.rows
    }

    /// The area covered by all grid squares.
    pub fn bounds(&self) -> Rect {
        let scale = self.scale();
        Rect {
            x: self.mapper.margin,
            y: self.mapper.usable_height - (self.rows * scale) as i32,
            w: self.columns * scale,
            h: self.rows * scale,
        }
    }

    /// Every grid square, bottom row first.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.rows as i32)
            .flat_map(move |row| (0..self.columns as i32).map(move |col| Cell::new(col, row)))
    }

    /// Row numbers in the left margin and column numbers below the grid,
    /// each centered on its row or column.
    pub fn labels(&self) -> Vec<Label> {
        let scale = self.scale() as i32;
        let label_height = self.label_height as i32;
        let mut labels = Vec::with_capacity((self.rows + self.columns) as usize);

        for row in 0..self.rows as i32 {
            let rect = self.mapper.cell_to_rect(Cell::new(0, row));
            labels.push(Label {
                text: row.to_string(),
                x: 0,
                y: rect.y + (scale - label_height) / 2,
            });
        }

        for col in 0..self.columns as i32 {
            let text = col.to_string();
            let width = font::text_width(&text, self.label_height) as i32;
            let rect = self.mapper.cell_to_rect(Cell::new(col, 0));
            labels.push(Label {
                text,
                x: rect.x + (scale - width) / 2,
                y: self.mapper.usable_height,
            });
        }

        labels
    }
}
