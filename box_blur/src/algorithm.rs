use image::RgbaImage;
use log::trace;

use crate::{
    image::{blur_x, blur_y, AlphaPreprocessor, Bitmap, BitmapError, Premultiplied},
    verboser::{Message, Silent, Verboser},
    BlurSettings,
};

/// Approximates a Gaussian blur by running `quality` rounds of separable box
/// filtering between an alpha premultiplication and its inverse.
#[derive(Clone, Debug, Default)]
pub struct BoxBlur<A = Premultiplied> {
    settings: BlurSettings,
    alpha: A,
}

impl BoxBlur {
    pub fn new(settings: BlurSettings) -> Self {
        Self::with_alpha(settings, Premultiplied)
    }
}

impl<A: AlphaPreprocessor> BoxBlur<A> {
    pub fn with_alpha(settings: BlurSettings, alpha: A) -> Self {
        Self { settings, alpha }
    }

    pub fn apply(&self, bitmap: &mut Bitmap, verboser: &mut impl Verboser) {
        let BlurSettings {
            distance_x,
            distance_y,
            quality,
            edge_mode,
        } = self.settings;
        trace!(
            "BoxBlur: {}x{} distance=({}, {}) quality={} edges={:?} blurs={}",
            bitmap.width,
            bitmap.height,
            distance_x,
            distance_y,
            quality,
            edge_mode,
            self.settings.blurs()
        );

        verboser.verbose(Message::Premultiplying);
        self.alpha.premultiply(bitmap);

        for round in 0..quality {
            verboser.verbose(Message::BlurringX {
                round,
                distance: distance_x,
            });
            blur_x(bitmap, distance_x, edge_mode);
            verboser.verbose(Message::BlurringY {
                round,
                distance: distance_y,
            });
            blur_y(bitmap, distance_y, edge_mode);
        }

        verboser.verbose(Message::Unpremultiplying);
        self.alpha.unpremultiply(bitmap);
    }
}

/// Blurs a tightly packed RGBA8 buffer in place with clamped edges.
pub fn blur(
    buffer: &mut [u8],
    width: usize,
    height: usize,
    distance_x: usize,
    distance_y: usize,
    quality: usize,
) -> Result<(), BitmapError> {
    let mut bitmap = Bitmap::new(buffer, width, height)?;
    BoxBlur::new(BlurSettings::new(distance_x, distance_y, quality)).apply(&mut bitmap, &mut Silent);
    Ok(())
}

/// Blurs an in-memory `image` buffer in place.
pub fn blur_image(image: &mut RgbaImage, settings: &BlurSettings) -> Result<(), BitmapError> {
    let mut bitmap = Bitmap::from_image(image)?;
    BoxBlur::new(*settings).apply(&mut bitmap, &mut Silent);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{image::Straight, EdgeMode};

    #[test]
    fn passes_run_in_order_between_alpha_transforms() {
        let mut buffer = vec![0u8; 4 * 9];
        let mut bitmap = Bitmap::new(&mut buffer, 3, 3).unwrap();
        let mut messages = Vec::<Message>::new();
        BoxBlur::new(BlurSettings::new(2, 1, 2)).apply(&mut bitmap, &mut messages);
        assert_eq!(
            messages,
            [
                Message::Premultiplying,
                Message::BlurringX { round: 0, distance: 2 },
                Message::BlurringY { round: 0, distance: 1 },
                Message::BlurringX { round: 1, distance: 2 },
                Message::BlurringY { round: 1, distance: 1 },
                Message::Unpremultiplying,
            ]
        );
    }

    #[test]
    fn zero_quality_only_round_trips_alpha() {
        let mut buffer: Vec<u8> = (0..64)
            .map(|i| if i % 4 == 3 { 255 } else { (i * 13) as u8 })
            .collect();
        let original = buffer.clone();
        blur(&mut buffer, 4, 4, 3, 3, 0).unwrap();
        assert_eq!(buffer, original);

        let mut messages = Vec::<Message>::new();
        let mut bitmap = Bitmap::new(&mut buffer, 4, 4).unwrap();
        BoxBlur::new(BlurSettings::new(3, 3, 0)).apply(&mut bitmap, &mut messages);
        assert_eq!(messages, [Message::Premultiplying, Message::Unpremultiplying]);
    }

    #[test]
    fn transparent_neighbours_do_not_bleed_colour() {
        let mut buffer = vec![255, 0, 0, 255, 0, 255, 0, 0, 0, 255, 0, 0];
        let mut bitmap = Bitmap::new(&mut buffer, 3, 1).unwrap();
        BoxBlur::new(BlurSettings::new(1, 0, 1)).apply(&mut bitmap, &mut Silent);
        assert_eq!(bitmap.bytes(), &[255, 0, 0, 170, 255, 0, 0, 85, 0, 0, 0, 0]);
    }

    #[test]
    fn straight_alpha_blurs_raw_channels() {
        let mut buffer = vec![255, 0, 0, 255, 0, 255, 0, 0, 0, 255, 0, 0];
        let mut bitmap = Bitmap::new(&mut buffer, 3, 1).unwrap();
        let settings = BlurSettings::new(1, 0, 1).with_edge_mode(EdgeMode::Preserve);
        BoxBlur::with_alpha(settings, Straight).apply(&mut bitmap, &mut Silent);
        assert_eq!(bitmap.pixel(1usize), Some([85, 170, 0, 85]));
    }

    #[test]
    fn rejects_undersized_buffers() {
        let mut buffer = vec![0u8; 15];
        assert_eq!(
            blur(&mut buffer, 2, 2, 1, 1, 1),
            Err(BitmapError::BufferSize {
                expected: 16,
                actual: 15
            })
        );
    }

    #[test]
    fn blurs_rgba_images() {
        let mut image = RgbaImage::from_pixel(6, 4, image::Rgba([40, 80, 120, 255]));
        image.put_pixel(0, 0, image::Rgba([255, 255, 255, 255]));
        blur_image(&mut image, &BlurSettings::uniform(1, 2)).unwrap();
        assert_eq!(image.get_pixel(5, 3), &image::Rgba([40, 80, 120, 255]));
        assert_ne!(image.get_pixel(0, 0), &image::Rgba([255, 255, 255, 255]));
    }
}
