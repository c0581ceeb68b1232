//! Scene description
//!
//! A scene is a list of shapes stored as JSON. Rendering tessellates every shape
//! with the configured step sizes, then draws all edges followed by all
//! triangles.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::RenderConfig;
use crate::display::{Color, PixelBuffer};
use crate::error::Result;
use crate::math3d::{Matrix, Vec3};
use crate::render::{draw_lines, draw_polygons, Diagnostics};

/// One drawable primitive
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Shape {
    Line {
        from: [f64; 3],
        to: [f64; 3],
    },
    Circle {
        center: [f64; 3],
        radius: f64,
    },
    Hermite {
        p0: [f64; 2],
        p1: [f64; 2],
        r0: [f64; 2],
        r1: [f64; 2],
    },
    Bezier {
        p0: [f64; 2],
        p1: [f64; 2],
        p2: [f64; 2],
        p3: [f64; 2],
    },
    Box {
        corner: [f64; 3],
        width: f64,
        height: f64,
        depth: f64,
    },
    Sphere {
        center: [f64; 3],
        radius: f64,
    },
    Torus {
        center: [f64; 3],
        /// Tube radius
        r1: f64,
        /// Sweep radius
        r2: f64,
    },
}

#[inline]
fn v3([x, y, z]: [f64; 3]) -> Vec3 {
    Vec3::new(x, y, z)
}

#[inline]
fn xy([x, y]: [f64; 2]) -> (f64, f64) {
    (x, y)
}

impl Shape {
    /// Whether this shape produces triangles rather than edges
    pub fn is_solid(&self) -> bool {
        matches!(self, Self::Box { .. } | Self::Sphere { .. } | Self::Torus { .. })
    }

    /// Append this shape's edges or triangles to `out`
    pub fn tessellate(&self, config: &RenderConfig, out: &mut Matrix) -> Result<()> {
        let steps = &config.tessellation;
        match *self {
            Self::Line { from, to } => out.add_edge(v3(from), v3(to)),
            Self::Circle { center, radius } => out.add_circle(v3(center), radius),
            Self::Hermite { p0, p1, r0, r1 } => {
                out.add_hermite(xy(p0), xy(p1), xy(r0), xy(r1), steps.curve_step)?;
            },
            Self::Bezier { p0, p1, p2, p3 } => {
                out.add_bezier(xy(p0), xy(p1), xy(p2), xy(p3), steps.curve_step)?;
            },
            Self::Box {
                corner,
                width,
                height,
                depth,
            } => out.add_box(v3(corner), width, height, depth),
            Self::Sphere { center, radius } => {
                out.add_sphere(v3(center), radius, steps.sphere_step)?;
            },
            Self::Torus { center, r1, r2 } => {
                out.add_torus(v3(center), r1, r2, steps.torus_step)?;
            },
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    /// Overrides the configured foreground color
    #[serde(default)]
    pub color: Option<Color>,
    pub shapes: Vec<Shape>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_shape(mut self, shape: Shape) -> Self {
        self.shapes.push(shape);
        self
    }

    /// Tessellate into `(edges, triangles)`; the first failing shape aborts
    pub fn tessellate(&self, config: &RenderConfig) -> Result<(Matrix, Matrix)> {
        let mut edges = Matrix::points();
        let mut polygons = Matrix::points();
        for shape in &self.shapes {
            let out = if shape.is_solid() { &mut polygons } else { &mut edges };
            shape.tessellate(config, out)?;
        }
        log::debug!(
            "scene: {} edges, {} triangles",
            edges.cols() / 2,
            polygons.cols() / 3
        );
        Ok((edges, polygons))
    }

    /// Draw the whole scene into `buffer`
    pub fn render(&self, config: &RenderConfig, buffer: &mut PixelBuffer) -> Result<Diagnostics> {
        let (edges, polygons) = self.tessellate(config)?;
        let color = self.color.unwrap_or(config.foreground);
        let mut diag = draw_lines(buffer, &edges, color);
        diag.merge(draw_polygons(buffer, &polygons, color));
        Ok(diag)
    }

    /// Save scene to a JSON file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Load scene from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
