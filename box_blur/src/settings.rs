use serde::{Deserialize, Serialize};

/// What the box passes do with the pixels whose window crosses the border.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeMode {
    /// Samples outside the line repeat the nearest border pixel.
    #[default]
    Clamp,
    /// Pixels closer than `distance` to the border keep their value.
    Preserve,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlurSettings {
    /// Horizontal window radius in pixels.
    pub distance_x: usize,
    /// Vertical window radius in pixels.
    pub distance_y: usize,
    /// Number of horizontal + vertical rounds.
    pub quality: usize,
    pub edge_mode: EdgeMode,
}

impl Default for BlurSettings {
    fn default() -> Self {
        Self {
            distance_x: 1,
            distance_y: 1,
            quality: 3,
            edge_mode: EdgeMode::Clamp,
        }
    }
}

impl BlurSettings {
    pub fn new(distance_x: usize, distance_y: usize, quality: usize) -> Self {
        Self {
            distance_x,
            distance_y,
            quality,
            edge_mode: EdgeMode::default(),
        }
    }

    pub fn uniform(distance: usize, quality: usize) -> Self {
        Self::new(distance, distance, quality)
    }

    pub fn with_edge_mode(self, edge_mode: EdgeMode) -> Self {
        Self { edge_mode, ..self }
    }

    /// Whether applying these settings can change any pixel besides the
    /// alpha round trip.
    pub fn blurs(&self) -> bool {
        self.quality > 0 && (self.distance_x > 0 || self.distance_y > 0)
    }
}
