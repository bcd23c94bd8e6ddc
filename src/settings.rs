//! Host presentation settings
//!
//! Game rules are fixed (see `consts`); only how the simulation is presented
//! can be changed. Nothing is persisted: hosts start from `Default`.

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_SURFACE_HEIGHT, DEFAULT_SURFACE_WIDTH};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Drawing surface width in pixels
    pub surface_width: u32,
    /// Drawing surface height in pixels
    pub surface_height: u32,
    /// Clear color (linear RGBA)
    pub background: [f32; 4],
    /// Frames run by the native headless driver
    pub headless_frames: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            surface_width: DEFAULT_SURFACE_WIDTH,
            surface_height: DEFAULT_SURFACE_HEIGHT,
            background: [1.0, 1.0, 1.0, 1.0],
            headless_frames: 1000,
        }
    }
}

impl Settings {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let mut settings: Self = serde_json::from_str(json)?;
        settings.sanitize();
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Zero-sized surfaces fall back to the defaults
    fn sanitize(&mut self) {
        if self.surface_width == 0 {
            self.surface_width = DEFAULT_SURFACE_WIDTH;
        }
        if self.surface_height == 0 {
            self.surface_height = DEFAULT_SURFACE_HEIGHT;
        }
    }

    /// Logical surface size in CSS pixels
    pub fn extent(&self) -> (u32, u32) {
        (self.surface_width, self.surface_height)
    }

    /// Backing-store size for a display with the given device pixel ratio
    pub fn physical_size(&self, device_pixel_ratio: f64) -> (u32, u32) {
        let dpr = if device_pixel_ratio > 0.0 { device_pixel_ratio } else { 1.0 };
        (
            (self.surface_width as f64 * dpr).round() as u32,
            (self.surface_height as f64 * dpr).round() as u32,
        )
    }
}
