//! Render configuration
//!
//! Sampling densities, buffer size, colors and preview settings. Stored as JSON;
//! every field is optional on load and falls back to its default.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::display::{Color, DEFAULT_HEIGHT, DEFAULT_VIEWER, DEFAULT_WIDTH};
use crate::error::{Error, Result};

/// Parameter step used by Hermite and Bezier curves
pub const DEFAULT_CURVE_STEP: f64 = 0.01;
pub const DEFAULT_SPHERE_STEP: f64 = 1.0 / 20.0;
pub const DEFAULT_TORUS_STEP: f64 = 1.0 / 20.0;

/// Sample density for curves and surfaces.
///
/// Each step is a fraction of the parameter range; a shape sampled with step `s`
/// is cut into `round(1 / s)` intervals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tessellation {
    pub curve_step: f64,
    pub sphere_step: f64,
    pub torus_step: f64,
}

impl Tessellation {
    pub fn curve_steps(&self) -> Result<usize> {
        steps(self.curve_step)
    }

    pub fn sphere_steps(&self) -> Result<usize> {
        steps(self.sphere_step)
    }

    pub fn torus_steps(&self) -> Result<usize> {
        steps(self.torus_step)
    }

    pub fn validate(&self) -> Result<()> {
        self.curve_steps()?;
        self.sphere_steps()?;
        self.torus_steps()?;
        Ok(())
    }
}

impl Default for Tessellation {
    fn default() -> Self {
        Self {
            curve_step: DEFAULT_CURVE_STEP,
            sphere_step: DEFAULT_SPHERE_STEP,
            torus_step: DEFAULT_TORUS_STEP,
        }
    }
}

/// Interval count for a step size: `round(1 / step)`, at least 1
pub fn steps(step: f64) -> Result<usize> {
    if !step.is_finite() || step <= 0.0 {
        return Err(Error::config(format!("step size must be positive, got {}", step)));
    }
    let n = (1.0 / step).round();
    if n < 1.0 || !n.is_finite() {
        return Err(Error::config(format!("step size {} yields no intervals", step)));
    }
    Ok(n as usize)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Count for the buffer's x axis
    pub height: u32,
    /// Count for the buffer's y axis
    pub width: u32,
    pub background: Color,
    pub foreground: Color,
    pub tessellation: Tessellation,
    /// Program handed the preview file
    pub viewer: String,
    /// Where the preview file is written before the viewer opens it
    pub preview_path: PathBuf,
}

impl RenderConfig {
    pub fn validate(&self) -> Result<()> {
        if self.height == 0 || self.width == 0 {
            return Err(Error::config(format!(
                "buffer dimensions must be non-zero, got {}x{}",
                self.height, self.width
            )));
        }
        if self.viewer.trim().is_empty() {
            return Err(Error::config("viewer program is empty"));
        }
        self.tessellation.validate()
    }

    /// Save config to a JSON file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Load and validate config from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            height: DEFAULT_HEIGHT,
            width: DEFAULT_WIDTH,
            background: Color::WHITE,
            foreground: Color::BLACK,
            tessellation: Tessellation::default(),
            viewer: DEFAULT_VIEWER.to_string(),
            preview_path: std::env::temp_dir().join("wireframe-preview.ppm"),
        }
    }
}
