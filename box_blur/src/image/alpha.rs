use super::Bitmap;

const ALPHA: usize = 3;
const OPAQUE: u8 = u8::MAX;

/// Colour-space transform applied around the blur rounds.
///
/// `unpremultiply` must invert `premultiply` on every pixel whose alpha is not
/// zero; colour channels of fully transparent pixels are left unspecified.
pub trait AlphaPreprocessor {
    fn premultiply(&self, bitmap: &mut Bitmap);

    fn unpremultiply(&self, bitmap: &mut Bitmap);
}

/// Scales colour channels by `alpha / 255` before blurring, so transparent
/// pixels stop bleeding their colour into their neighbours.
#[derive(Clone, Copy, Debug, Default)]
pub struct Premultiplied;

impl Premultiplied {
    /// `round(value * alpha / 255)`, exact over `u8`.
    #[inline]
    pub fn multiply(value: u8, alpha: u8) -> u8 {
        let t = value as u32 * alpha as u32 + 128;
        (((t >> 8) + t) >> 8) as u8
    }

    /// `round(value * 255 / alpha)`, saturated to `255`.
    #[inline]
    pub fn demultiply(value: u8, alpha: u8) -> u8 {
        if alpha == 0 {
            return 0;
        }
        let alpha = alpha as u32;
        ((value as u32 * OPAQUE as u32 + alpha / 2) / alpha).min(OPAQUE as u32) as u8
    }
}

impl AlphaPreprocessor for Premultiplied {
    fn premultiply(&self, bitmap: &mut Bitmap) {
        for pixel in bitmap.pixels_mut() {
            let alpha = pixel[ALPHA];
            if alpha != OPAQUE {
                for channel in &mut pixel[..ALPHA] {
                    *channel = Self::multiply(*channel, alpha);
                }
            }
        }
    }

    fn unpremultiply(&self, bitmap: &mut Bitmap) {
        for pixel in bitmap.pixels_mut() {
            let alpha = pixel[ALPHA];
            if alpha != OPAQUE {
                for channel in &mut pixel[..ALPHA] {
                    *channel = Self::demultiply(*channel, alpha);
                }
            }
        }
    }
}

/// Leaves the buffer untouched, for data that is already premultiplied or
/// when the channels should be blurred independently.
#[derive(Clone, Copy, Debug, Default)]
pub struct Straight;

impl AlphaPreprocessor for Straight {
    fn premultiply(&self, _: &mut Bitmap) {}

    fn unpremultiply(&self, _: &mut Bitmap) {}
}
