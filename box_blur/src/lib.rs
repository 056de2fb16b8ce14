pub mod geometry {
    pub mod point;

    pub use point::Point;
}

mod algorithm;
pub mod grid;
pub mod image;
pub mod settings;
pub mod verboser;

pub use algorithm::*;
pub use grid::Grid;
pub use self::image::{Bitmap, BitmapError};
pub use settings::{BlurSettings, EdgeMode};
