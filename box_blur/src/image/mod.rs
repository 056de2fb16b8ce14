use crate::{
    geometry::Point,
    grid::{Grid, CHANNELS},
};
use image::RgbaImage;
use std::ops::Deref;

pub mod alpha;
mod blur;

pub use alpha::{AlphaPreprocessor, Premultiplied, Straight};
pub use blur::{blur_x, blur_y};

/// Mutable view over a caller-owned, tightly packed RGBA8 buffer.
///
/// Pixels are stored row-major, four bytes each in `R, G, B, A` order, with no
/// padding between rows. The view never reallocates the buffer.
pub struct Bitmap<'a> {
    pixels: &'a mut [u8],
    grid: Grid,
}

impl<'a> Bitmap<'a> {
    pub fn new(pixels: &'a mut [u8], width: usize, height: usize) -> Result<Self, BitmapError> {
        let grid = Grid::new(width, height);
        let expected = grid.byte_len().ok_or(BitmapError::TooLarge { width, height })?;
        if pixels.len() != expected {
            return Err(BitmapError::BufferSize {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self { pixels, grid })
    }

    /// Borrows the pixels of an in-memory `image` buffer.
    pub fn from_image(image: &'a mut RgbaImage) -> Result<Self, BitmapError> {
        let (width, height) = image.dimensions();
        let grid = Grid::new(width, height)
            .cast::<usize>()
            .ok_or(BitmapError::TooLarge {
                width: width as usize,
                height: height as usize,
            })?;
        Self::new(image, grid.width, grid.height)
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn bytes(&self) -> &[u8] {
        &*self.pixels
    }

    pub fn bytes_mut(&mut self) -> &mut [u8] {
        &mut *self.pixels
    }

    pub fn pixels(&self) -> impl Iterator<Item = &[u8]> + '_ {
        self.pixels.chunks_exact(CHANNELS)
    }

    pub fn pixels_mut(&mut self) -> impl Iterator<Item = &mut [u8]> + '_ {
        self.pixels.chunks_exact_mut(CHANNELS)
    }

    pub fn pixel(&self, index: impl ImageIndexer) -> Option<[u8; 4]> {
        let offset = index.byte_offset(&self.grid)?;
        let mut pixel = [0; CHANNELS];
        pixel.copy_from_slice(&self.pixels[offset..offset + CHANNELS]);
        Some(pixel)
    }

    /// Overwrites one pixel, returning `false` when `index` is out of bounds.
    pub fn set_pixel(&mut self, index: impl ImageIndexer, value: [u8; 4]) -> bool {
        match index.byte_offset(&self.grid) {
            Some(offset) => {
                self.pixels[offset..offset + CHANNELS].copy_from_slice(&value);
                true
            }
            None => false,
        }
    }

    pub fn channel(&self, x: usize, y: usize, channel: usize) -> Option<u8> {
        if channel >= CHANNELS {
            return None;
        }
        Point { x, y }
            .byte_offset(&self.grid)
            .map(|offset| self.pixels[offset + channel])
    }
}

impl Deref for Bitmap<'_> {
    type Target = Grid;

    fn deref(&self) -> &Self::Target {
        &self.grid
    }
}

/// Anything that can address a single pixel of a [`Bitmap`].
pub trait ImageIndexer {
    fn pixel_index(self, grid: &Grid) -> Option<usize>;

    fn byte_offset(self, grid: &Grid) -> Option<usize>
    where
        Self: Sized,
    {
        self.pixel_index(grid).map(|index| index * CHANNELS)
    }
}

impl ImageIndexer for usize {
    fn pixel_index(self, grid: &Grid) -> Option<usize> {
        (self < grid.width * grid.height).then_some(self)
    }
}

impl ImageIndexer for Point<usize> {
    fn pixel_index(self, grid: &Grid) -> Option<usize> {
        grid.index_of(self)
    }
}

impl ImageIndexer for (usize, usize) {
    fn pixel_index(self, grid: &Grid) -> Option<usize> {
        grid.index_of(self.into())
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum BitmapError {
    #[error("Buffer holds {actual} bytes but the geometry needs {expected}")]
    BufferSize { expected: usize, actual: usize },
    #[error("A {width}x{height} bitmap does not fit in memory")]
    TooLarge { width: usize, height: usize },
}
