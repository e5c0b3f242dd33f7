//! Board configuration and circle palette.

use crate::error::{BoardError, BoardResult};
use peniko::Color;
use serde::{Deserialize, Serialize};

/// Smallest circle diameter as a fraction of container width.
pub const DEFAULT_MIN_SIZE_RATIO: f64 = 0.05;
/// Largest circle diameter as a fraction of container width.
pub const DEFAULT_MAX_SIZE_RATIO: f64 = 0.20;

/// Serializable color representation (RGBA8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializableColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl SerializableColor {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }
}

impl From<Color> for SerializableColor {
    fn from(color: Color) -> Self {
        let rgba = color.to_rgba8();
        Self {
            r: rgba.r,
            g: rgba.g,
            b: rgba.b,
            a: rgba.a,
        }
    }
}

impl From<SerializableColor> for Color {
    fn from(color: SerializableColor) -> Self {
        Color::from_rgba8(color.r, color.g, color.b, color.a)
    }
}

/// Colors used to paint circles.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CirclePalette {
    pub fill: SerializableColor,
    pub selected_fill: SerializableColor,
    pub selected_stroke: SerializableColor,
    pub selected_stroke_width: f64,
}

impl Default for CirclePalette {
    fn default() -> Self {
        Self {
            // lightskyblue
            fill: SerializableColor::rgb(135, 206, 250),
            selected_fill: SerializableColor::rgb(96, 165, 250),
            selected_stroke: SerializableColor::rgb(29, 78, 216),
            selected_stroke_width: 3.0,
        }
    }
}

impl CirclePalette {
    /// Fill color for a circle in the given selection state.
    pub fn fill_for(&self, selected: bool) -> Color {
        if selected {
            self.selected_fill.into()
        } else {
            self.fill.into()
        }
    }

    /// Outline for a circle, `None` when unselected.
    pub fn stroke_for(&self, selected: bool) -> Option<(Color, f64)> {
        selected.then(|| (self.selected_stroke.into(), self.selected_stroke_width))
    }
}

/// Board-level configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Smallest diameter as a fraction of container width.
    pub min_size_ratio: f64,
    /// Largest diameter as a fraction of container width.
    pub max_size_ratio: f64,
    pub palette: CirclePalette,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            min_size_ratio: DEFAULT_MIN_SIZE_RATIO,
            max_size_ratio: DEFAULT_MAX_SIZE_RATIO,
            palette: CirclePalette::default(),
        }
    }
}

impl BoardConfig {
    /// Check that `0 < min <= max <= 1`.
    pub fn validate(&self) -> BoardResult<()> {
        let (min, max) = (self.min_size_ratio, self.max_size_ratio);
        if !(min.is_finite() && max.is_finite()) || min <= 0.0 || min > max || max > 1.0 {
            return Err(BoardError::InvalidConfig { min, max });
        }
        Ok(())
    }

    /// Diameter range for a container of the given width.
    pub fn size_range(&self, container_width: f64) -> (f64, f64) {
        (
            self.min_size_ratio * container_width,
            self.max_size_ratio * container_width,
        )
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(BoardConfig::default().validate().is_ok());
    }

    #[test]
    fn test_invalid_ratios() {
        let config = BoardConfig {
            min_size_ratio: 0.3,
            max_size_ratio: 0.2,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(BoardError::InvalidConfig { min: 0.3, max: 0.2 })
        );

        let config = BoardConfig {
            min_size_ratio: 0.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_size_range() {
        let (lo, hi) = BoardConfig::default().size_range(400.0);
        assert!((lo - 20.0).abs() < 1e-9);
        assert!((hi - 80.0).abs() < 1e-9);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = BoardConfig::from_json(r#"{ "max_size_ratio": 0.1 }"#).unwrap();
        assert!((config.min_size_ratio - DEFAULT_MIN_SIZE_RATIO).abs() < f64::EPSILON);
        assert!((config.max_size_ratio - 0.1).abs() < f64::EPSILON);
        assert_eq!(config.palette, CirclePalette::default());
    }

    #[test]
    fn test_json_round_trip() {
        let config = BoardConfig::default();
        let json = config.to_json().unwrap();
        assert_eq!(BoardConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_palette_selection_states() {
        let palette = CirclePalette::default();
        assert_ne!(
            SerializableColor::from(palette.fill_for(true)),
            SerializableColor::from(palette.fill_for(false))
        );
        assert!(palette.stroke_for(false).is_none());
        assert!(palette.stroke_for(true).is_some());
    }
}
