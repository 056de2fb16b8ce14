use num_traits::{CheckedMul, NumCast, Unsigned};

use crate::geometry::Point;

/// Bytes per interleaved RGBA pixel.
pub const CHANNELS: usize = 4;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Grid<T = usize> {
    pub width: T,
    pub height: T,
}

impl<T> Grid<T> {
    pub fn new(width: T, height: T) -> Self {
        Self { width, height }
    }
}

impl<T: NumCast + Unsigned + PartialOrd + Copy + CheckedMul> Grid<T> {
    pub fn index_of(&self, point: Point<T>) -> Option<T> {
        if point.x < self.width && point.y < self.height {
            Some(point.y * self.width + point.x)
        } else {
            None
        }
    }

    pub fn pixel_count(&self) -> Option<T> {
        self.width.checked_mul(&self.height)
    }

    /// Length in bytes of a tightly packed RGBA buffer with this geometry.
    pub fn byte_len(&self) -> Option<usize> {
        self.pixel_count()
            .and_then(|count| count.to_usize())
            .and_then(|count| count.checked_mul(CHANNELS))
    }

    pub fn is_empty(&self) -> bool {
        self.width.is_zero() || self.height.is_zero()
    }

    pub fn cast<U: NumCast>(self) -> Option<Grid<U>> {
        Some(Grid {
            width: U::from(self.width)?,
            height: U::from(self.height)?,
        })
    }
}

impl Grid {
    /// Byte distance between vertically adjacent pixels.
    pub fn row_stride(&self) -> usize {
        self.width * CHANNELS
    }
}
