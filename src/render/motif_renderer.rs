// src/render/motif_renderer.rs
// Draws one node's motif: a cross whose arms grow one after another while
// the whole figure turns a quarter revolution.

use nannou::color::{rgb8, Rgb8};
use nannou::prelude::*;
use std::f32::consts::PI;

use crate::animation::{divide_scale, NodePainter};
use crate::config::{ConfigError, StyleConfig};
use crate::utilities::color::parse_hex_color;

/// StyleConfig with colors parsed.
#[derive(Debug, Clone)]
pub struct MotifStyle {
    pub size_factor: f32,
    pub stroke_factor: f32,
    pub background: Rgb8,
    pub palette: Vec<Rgb8>,
    pub parts: usize,
}

impl MotifStyle {
    pub fn from_config(style: &StyleConfig, parts: usize) -> Result<Self, ConfigError> {
        let palette = style
            .palette
            .iter()
            .map(|hex| parse_hex_color(hex))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            size_factor: style.size_factor,
            stroke_factor: style.stroke_factor,
            background: parse_hex_color(&style.background_color)?,
            palette,
            parts,
        })
    }

    pub fn node_color(&self, index: usize) -> Rgb8 {
        self.palette[index % self.palette.len()]
    }
}

/// Line endpoints of the motif centred on `center`, one per arm.
/// Arms that haven't started yet are left out.
pub fn motif_arms(center: Point2, scale: f32, parts: usize, size: f32) -> Vec<(Point2, Point2)> {
    let rotation = scale * PI / 2.0;
    let arm_gap = 2.0 * PI / parts as f32;

    (0..parts)
        .filter_map(|j| {
            let length = size * divide_scale(scale, j, parts);
            if length <= 0.0 {
                return None;
            }
            let angle = rotation + arm_gap * j as f32;
            let end = pt2(
                center.x + length * angle.cos(),
                center.y + length * angle.sin(),
            );
            Some((center, end))
        })
        .collect()
}

/// NodePainter for one frame's Draw.
pub struct MotifPainter<'a> {
    draw: &'a Draw,
    style: &'a MotifStyle,
    bounds: Rect,
}

impl<'a> MotifPainter<'a> {
    pub fn new(draw: &'a Draw, style: &'a MotifStyle, bounds: Rect) -> Self {
        Self {
            draw,
            style,
            bounds,
        }
    }
}

impl NodePainter for MotifPainter<'_> {
    fn paint(&mut self, index: usize, scale: f32) {
        let min_dim = self.bounds.w().min(self.bounds.h());
        let size = min_dim / self.style.size_factor;
        let stroke_weight = min_dim / self.style.stroke_factor;
        let color = self.style.node_color(index);

        for (start, end) in motif_arms(self.bounds.xy(), scale, self.style.parts, size) {
            self.draw
                .line()
                .points(start, end)
                .color(color)
                .stroke_weight(stroke_weight)
                .caps_round();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: Point2, b: Point2) {
        assert!(a.distance(b) < 1e-3, "{:?} != {:?}", a, b);
    }

    #[test]
    fn test_no_arms_at_rest() {
        assert!(motif_arms(Vec2::ZERO, 0.0, 4, 100.0).is_empty());
    }

    #[test]
    fn test_first_arm_grows_first() {
        let arms = motif_arms(Vec2::ZERO, 0.125, 4, 100.0);
        assert_eq!(arms.len(), 1);
        let (start, end) = arms[0];
        assert_close(start, Vec2::ZERO);
        assert!((end.length() - 50.0).abs() < 1e-3);
    }

    #[test]
    fn test_full_motif_is_rotated_cross() {
        let arms = motif_arms(pt2(10.0, 20.0), 1.0, 4, 100.0);
        assert_eq!(arms.len(), 4);

        // a quarter turn maps the first arm onto +y
        assert_close(arms[0].1, pt2(10.0, 120.0));
        assert_close(arms[1].1, pt2(-90.0, 20.0));
        assert_close(arms[2].1, pt2(10.0, -80.0));
        assert_close(arms[3].1, pt2(110.0, 20.0));
    }

    #[test]
    fn test_style_from_default_config() {
        let style = MotifStyle::from_config(&StyleConfig::default(), 4).unwrap();
        assert_eq!(style.palette.len(), 5);
        assert_eq!(style.node_color(0), rgb8(0xB7, 0x1C, 0x1C));
        assert_eq!(style.node_color(4), rgb8(0xF5, 0x00, 0x57));
        assert_eq!(style.background, rgb8(0xBD, 0xBD, 0xBD));
    }

    #[test]
    fn test_style_rejects_bad_palette_entry() {
        let config = StyleConfig {
            palette: vec!["#123456".to_string(), "nope".to_string()],
            ..StyleConfig::default()
        };
        assert!(matches!(
            MotifStyle::from_config(&config, 4),
            Err(ConfigError::InvalidColor(_))
        ));
    }
}
