#![allow(dead_code)]

pub const OPAQUE_BLACK: [u8; 4] = [0, 0, 0, 255];
pub const OPAQUE_WHITE: [u8; 4] = [255, 255, 255, 255];

/// Buffer where every pixel holds `color`.
pub fn solid(width: usize, height: usize, color: [u8; 4]) -> Vec<u8> {
    color.repeat(width * height)
}

/// Opaque black buffer with a single white pixel at `(x, y)`.
pub fn dot(width: usize, height: usize, x: usize, y: usize) -> Vec<u8> {
    let mut buffer = solid(width, height, OPAQUE_BLACK);
    let offset = (y * width + x) * 4;
    buffer[offset..offset + 4].copy_from_slice(&OPAQUE_WHITE);
    buffer
}

/// Deterministic pseudo random pixels, with alpha forced to `alpha` when given.
pub fn noise(width: usize, height: usize, alpha: Option<u8>) -> Vec<u8> {
    let mut state = 0x2545_f491u32;
    (0..width * height * 4)
        .map(|i| {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            match alpha {
                Some(alpha) if i % 4 == 3 => alpha,
                _ => (state >> 24) as u8,
            }
        })
        .collect()
}

pub fn pixel_at(buffer: &[u8], width: usize, x: usize, y: usize) -> [u8; 4] {
    let offset = (y * width + x) * 4;
    [
        buffer[offset],
        buffer[offset + 1],
        buffer[offset + 2],
        buffer[offset + 3],
    ]
}
