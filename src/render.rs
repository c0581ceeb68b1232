//! Draining edge and triangle lists into a pixel buffer
//!
//! Batches never stop on a single bad primitive. Every skipped or cut-short
//! primitive is reported through [`Diagnostics`] and logged.

use std::fmt;

use crate::display::{Color, PixelBuffer};
use crate::error::{Error, Result};
use crate::math3d::{cross_product, Matrix, Vec3};

/// Something a batch had to give up on
#[derive(Debug)]
pub enum Diagnostic {
    /// Facing could not be computed; the triangle was not drawn
    SkippedTriangle { index: usize, error: Error },
    /// An edge of a visible triangle failed; its remaining edges were not drawn
    AbortedTriangle { index: usize, error: Error },
    /// An edge-list segment failed part way through
    AbortedEdge { index: usize, error: Error },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SkippedTriangle { index, error } => {
                write!(f, "triangle {} skipped: {}", index, error)
            },
            Self::AbortedTriangle { index, error } => {
                write!(f, "triangle {} aborted: {}", index, error)
            },
            Self::AbortedEdge { index, error } => write!(f, "edge {} aborted: {}", index, error),
        }
    }
}

/// Outcome of one batch
#[derive(Debug, Default)]
pub struct Diagnostics {
    /// Primitives drawn without error
    pub drawn: usize,
    /// Triangles discarded as back-facing
    pub culled: usize,
    pub events: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn is_clean(&self) -> bool {
        self.events.is_empty()
    }

    pub fn merge(&mut self, other: Self) {
        self.drawn += other.drawn;
        self.culled += other.culled;
        self.events.extend(other.events);
    }

    fn push(&mut self, event: Diagnostic) {
        log::warn!("{}", event);
        self.events.push(event);
    }
}

/// Float coordinate to pixel, truncating toward zero
#[inline]
fn pixel(v: f64) -> i32 {
    v as i32
}

fn line_between(buffer: &mut PixelBuffer, color: Color, a: Vec3, b: Vec3) -> Result<()> {
    buffer.draw_line(color, pixel(a.x), pixel(a.y), pixel(b.x), pixel(b.y))
}

/// Stops at the first edge that fails
fn draw_outline(buffer: &mut PixelBuffer, color: Color, [v0, v1, v2]: [Vec3; 3]) -> Result<()> {
    line_between(buffer, color, v0, v1)?;
    line_between(buffer, color, v1, v2)?;
    line_between(buffer, color, v2, v0)
}

/// Draw every edge (column pair) of `edges`
pub fn draw_lines(buffer: &mut PixelBuffer, edges: &Matrix, color: Color) -> Diagnostics {
    let mut diag = Diagnostics::default();
    for (index, (a, b)) in edges.edges().enumerate() {
        match line_between(buffer, color, a, b) {
            Ok(()) => diag.drawn += 1,
            Err(error) => diag.push(Diagnostic::AbortedEdge { index, error }),
        }
    }
    diag
}

/// Draw the outline of every front-facing triangle (column triple) of `polygons`.
///
/// A triangle faces the viewer when the z component of
/// `(v1 - v0) x (v2 - v0)` is strictly positive.
pub fn draw_polygons(buffer: &mut PixelBuffer, polygons: &Matrix, color: Color) -> Diagnostics {
    let mut diag = Diagnostics::default();
    for (index, [v0, v1, v2]) in polygons.triangles().enumerate() {
        let normal = match cross_product(Vec3::between(v0, v1), Vec3::between(v0, v2)) {
            Ok(n) => n,
            Err(error) => {
                diag.push(Diagnostic::SkippedTriangle { index, error });
                continue;
            },
        };
        if normal.z <= 0.0 {
            diag.culled += 1;
            continue;
        }

        match draw_outline(buffer, color, [v0, v1, v2]) {
            Ok(()) => diag.drawn += 1,
            Err(error) => diag.push(Diagnostic::AbortedTriangle { index, error }),
        }
    }
    diag
}
