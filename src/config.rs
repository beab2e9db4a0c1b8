use crate::color::Color;
use crate::fractal::FractalParams;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while loading a drawing configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Invalid config value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Colors, widths and tunables used to paint each frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)] // missing fields fall back to the defaults below
pub struct DrawingConfig {
    pub background: Color,
    pub outline_color: Color,
    /// Width of rectangle outlines and diagonals
    pub outline_width: f32,
    /// Width of the stroke around each fractal triangle
    pub triangle_stroke_width: f32,
    pub fractal: FractalParams,
    pub trail_color: Color,
    /// Side length of the square drawn at each trail point
    pub trail_point_size: f32,
    /// Applied once more for every step from the newest point
    pub trail_fade: f32,
    pub rubber_band_color: Color,
    pub rubber_band_width: f32,
}

impl Default for DrawingConfig {
    fn default() -> Self {
        Self {
            background: Color::LIGHT_GREY,
            outline_color: Color::BLACK,
            outline_width: 5.0,
            triangle_stroke_width: 5.0,
            fractal: FractalParams::default(),
            trail_color: Color::BLUE.darken(0.25),
            trail_point_size: 5.0,
            trail_fade: 0.7,
            rubber_band_color: Color::GREY,
            rubber_band_width: 1.0,
        }
    }
}

impl DrawingConfig {
    /// Read a JSON config from `path` and validate it
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let text = fs::read_to_string(path.as_ref())?;
        let config = Self::from_json(&text)?;
        log::info!("Loaded drawing config from {}", path.as_ref().display());
        Ok(config)
    }

    pub fn from_json(text: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        check_unit("fractal.darken_amount", self.fractal.darken_amount)?;
        check_unit("trail_fade", self.trail_fade)?;

        let step = self.fractal.depth_step;
        if step.is_nan() || step <= 0.0 {
            return Err(ConfigError::InvalidValue {
                field: "fractal.depth_step",
                reason: format!("must be positive, got {}", step),
            });
        }

        for (field, width) in [
            ("outline_width", self.outline_width),
            ("triangle_stroke_width", self.triangle_stroke_width),
            ("trail_point_size", self.trail_point_size),
            ("rubber_band_width", self.rubber_band_width),
        ] {
            if width.is_nan() || width < 0.0 {
                return Err(ConfigError::InvalidValue {
                    field,
                    reason: format!("must not be negative, got {}", width),
                });
            }
        }
        Ok(())
    }
}

fn check_unit(field: &'static str, value: f32) -> ConfigResult<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::InvalidValue {
            field,
            reason: format!("must be within 0..=1, got {}", value),
        })
    }
}
