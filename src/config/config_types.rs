// src/config/config_types.rs
//
// Config types for the app

use serde::Deserialize;

use super::ConfigError;
use crate::utilities::color::parse_hex_color;

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 800,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct AnimationConfig {
    pub partition_count: usize, // Sub-phases each step is split into
    pub tick_interval_ms: u64,  // Time between scheduler ticks
    pub scale_gap: f32,         // Progress per tick, before dividing by partition_count
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            partition_count: 4,
            tick_interval_ms: 20,
            scale_gap: 0.04,
        }
    }
}

impl AnimationConfig {
    /// Progress added to a node's scale on every tick.
    pub fn step_size(&self) -> f32 {
        self.scale_gap / self.partition_count as f32
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct StyleConfig {
    pub size_factor: f32,   // Motif size is min(w, h) / size_factor
    pub stroke_factor: f32, // Stroke weight is min(w, h) / stroke_factor
    pub background_color: String,
    pub palette: Vec<String>,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            size_factor: 6.9,
            stroke_factor: 90.0,
            background_color: "#BDBDBD".to_string(),
            palette: ["#B71C1C", "#00C853", "#FF6D00", "#6200EA", "#F50057"]
                .iter()
                .map(|c| c.to_string())
                .collect(),
        }
    }
}

impl StyleConfig {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.size_factor <= 0.0 {
            return Err(ConfigError::NonPositive {
                field: "style.size_factor",
            });
        }
        if self.stroke_factor <= 0.0 {
            return Err(ConfigError::NonPositive {
                field: "style.stroke_factor",
            });
        }
        if self.palette.is_empty() {
            return Err(ConfigError::EmptyPalette);
        }
        parse_hex_color(&self.background_color)?;
        for color in &self.palette {
            parse_hex_color(color)?;
        }
        Ok(())
    }
}

impl AnimationConfig {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.partition_count == 0 {
            return Err(ConfigError::NonPositive {
                field: "animation.partition_count",
            });
        }
        if self.tick_interval_ms == 0 {
            return Err(ConfigError::NonPositive {
                field: "animation.tick_interval_ms",
            });
        }
        if self.scale_gap <= 0.0 {
            return Err(ConfigError::NonPositive {
                field: "animation.scale_gap",
            });
        }
        Ok(())
    }
}

impl WindowConfig {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 {
            return Err(ConfigError::NonPositive {
                field: "window.width",
            });
        }
        if self.height == 0 {
            return Err(ConfigError::NonPositive {
                field: "window.height",
            });
        }
        Ok(())
    }
}
