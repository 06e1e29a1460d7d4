mod drawable;
pub mod font;
mod mapper;
mod surface;

pub use drawable::Drawable;
pub use mapper::{Label, Layout, Mapper, Rect};
pub use surface::Surface;
