use crate::raster::Cell;

/// A grid whose cells are either lit or not.
///
/// Cells with a negative component are silently ignored by every setter.
pub trait Drawable {
    fn clear_all_pixels(&mut self);
    fn set_pixel(&mut self, cell: Cell);
    fn clear_pixel(&mut self, cell: Cell);

    fn is_lit(&self, cell: Cell) -> bool;
}
