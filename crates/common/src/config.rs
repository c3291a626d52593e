use crate::types::Color;
use glam::DVec3;
use serde::{Deserialize, Serialize};

/// Window and color settings. Fixed for the lifetime of the process.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    pub width: u32,
    pub height: u32,
    pub background: Color,
    pub foreground: Color,
    pub title: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 800,
            background: Color::BLACK,
            foreground: Color::WHITE,
            title: "Spinning Cube".to_owned(),
        }
    }
}

/// Initial placement and spin of the cube.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CubeConfig {
    /// Center of the cube in screen-aligned world space (pixels, y down).
    pub center: DVec3,
    pub side: f64,
    /// Radians added to the shared rotation angle every frame.
    pub rotation_rate: f64,
}

impl Default for CubeConfig {
    fn default() -> Self {
        Self {
            center: DVec3::new(400.0, 400.0, 200.0),
            side: 200.0,
            rotation_rate: 0.001,
        }
    }
}

/// Immutable configuration built once at startup and passed by reference to
/// the render loop and the drawing surface.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub display: DisplayConfig,
    pub cube: CubeConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_compile_time_constants() {
        let config = AppConfig::default();
        assert_eq!(config.display.width, 800);
        assert_eq!(config.display.height, 800);
        assert_eq!(config.display.background, Color::BLACK);
        assert_eq!(config.display.foreground, Color::WHITE);
        assert_eq!(config.cube.center, DVec3::new(400.0, 400.0, 200.0));
        assert_eq!(config.cube.side, 200.0);
        assert_eq!(config.cube.rotation_rate, 0.001);
    }

    #[test]
    fn cube_starts_centered_on_display() {
        let config = AppConfig::default();
        assert_eq!(config.cube.center.x, config.display.width as f64 / 2.0);
        assert_eq!(config.cube.center.y, config.display.height as f64 / 2.0);
    }

    #[test]
    fn json_roundtrip_is_lossless() {
        let config = AppConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let back: AppConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }
}
