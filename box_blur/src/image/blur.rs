use super::Bitmap;
use crate::{grid::CHANNELS, settings::EdgeMode};

/// Running per-channel sum over the pixels currently inside the window.
///
/// Sums are 128-bit so that any `usize` distance fits: a clamped window may
/// repeat a border pixel `distance + 1` times.
struct Accumulator {
    sums: [u128; CHANNELS],
    length: u128,
}

impl Accumulator {
    fn new(distance: usize) -> Self {
        Self {
            sums: [0; CHANNELS],
            length: 2 * distance as u128 + 1,
        }
    }

    #[inline]
    fn add(&mut self, pixel: &[u8], count: u128) {
        for (sum, &value) in self.sums.iter_mut().zip(pixel) {
            *sum += value as u128 * count;
        }
    }

    #[inline]
    fn slide(&mut self, entering: &[u8], leaving: &[u8]) {
        for ((sum, &next), &last) in self.sums.iter_mut().zip(entering).zip(leaving) {
            *sum = *sum + next as u128 - last as u128;
        }
    }

    #[inline]
    fn write_mean(&self, pixel: &mut [u8]) {
        for (value, &sum) in pixel.iter_mut().zip(&self.sums) {
            *value = (sum / self.length) as u8;
        }
    }
}

/// Pixels of one row or column inside the flat RGBA buffer.
#[derive(Clone, Copy)]
struct Line<'s> {
    bytes: &'s [u8],
    origin: usize,
    step: usize,
}

impl<'s> Line<'s> {
    #[inline]
    fn pixel(&self, index: usize) -> &'s [u8] {
        let offset = self.origin + index * self.step;
        &self.bytes[offset..offset + CHANNELS]
    }
}

/// Computes the moving average of `line` into `out`, which holds one line.
fn slide_line(line: Line, out: &mut [u8], distance: usize, edge: EdgeMode) {
    let len = out.len() / CHANNELS;
    let mut acc = Accumulator::new(distance);
    match edge {
        EdgeMode::Clamp => {
            // Window around pixel 0: indices below 0 and above `last` repeat
            // the border pixels.
            let last = len - 1;
            acc.add(line.pixel(0), distance as u128 + 1);
            for i in 1..=distance.min(last) {
                acc.add(line.pixel(i), 1);
            }
            acc.add(line.pixel(last), distance.saturating_sub(last) as u128);

            for (center, pixel) in out.chunks_exact_mut(CHANNELS).enumerate() {
                if center > 0 {
                    acc.slide(
                        line.pixel(center.saturating_add(distance).min(last)),
                        line.pixel((center - 1).saturating_sub(distance)),
                    );
                }
                acc.write_mean(pixel);
            }
        }
        EdgeMode::Preserve => {
            if distance > (len - 1) / 2 {
                return;
            }
            for i in 0..=2 * distance {
                acc.add(line.pixel(i), 1);
            }
            for center in distance..len - distance {
                if center > distance {
                    acc.slide(line.pixel(center + distance), line.pixel(center - distance - 1));
                }
                acc.write_mean(&mut out[center * CHANNELS..(center + 1) * CHANNELS]);
            }
        }
    }
}

/// Horizontal box pass: every row is replaced by its `2 * distance + 1`
/// pixel moving average. A distance of zero leaves the bitmap untouched.
pub fn blur_x(bitmap: &mut Bitmap, distance: usize, edge: EdgeMode) {
    if distance < 1 || bitmap.is_empty() {
        return;
    }
    let stride = bitmap.row_stride();
    let mut buffer = vec![0u8; stride];

    for row in bitmap.bytes_mut().chunks_exact_mut(stride) {
        if edge == EdgeMode::Preserve {
            buffer.copy_from_slice(row);
        }
        let line = Line {
            bytes: row,
            origin: 0,
            step: CHANNELS,
        };
        slide_line(line, &mut buffer, distance, edge);
        row.copy_from_slice(&buffer);
    }
}

/// Vertical box pass, the column-wise counterpart of [`blur_x`].
pub fn blur_y(bitmap: &mut Bitmap, distance: usize, edge: EdgeMode) {
    if distance < 1 || bitmap.is_empty() {
        return;
    }
    let stride = bitmap.row_stride();
    let (width, height) = (bitmap.width, bitmap.height);
    let bytes = bitmap.bytes_mut();
    let mut buffer = vec![0u8; height * CHANNELS];

    for x in 0..width {
        let line = Line {
            bytes,
            origin: x * CHANNELS,
            step: stride,
        };
        if edge == EdgeMode::Preserve {
            for (y, pixel) in buffer.chunks_exact_mut(CHANNELS).enumerate() {
                pixel.copy_from_slice(line.pixel(y));
            }
        }
        slide_line(line, &mut buffer, distance, edge);

        for (y, pixel) in buffer.chunks_exact(CHANNELS).enumerate() {
            let offset = x * CHANNELS + y * stride;
            bytes[offset..offset + CHANNELS].copy_from_slice(pixel);
        }
    }
}
