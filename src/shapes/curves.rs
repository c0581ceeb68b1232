//! Cubic curve tessellation
//!
//! Both curve kinds turn four control values per axis into `a t^3 + b t^2 + c t + d`
//! through a fixed basis matrix, then sample `t` uniformly into a polyline.

use crate::config;
use crate::error::Result;
use crate::math3d::{Matrix, Vec3};

/// Which basis a control vector is expressed in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurveKind {
    /// Controls are start point, end point, start tangent, end tangent
    Hermite,
    /// Controls are the four Bezier control points
    Bezier,
}

impl CurveKind {
    /// Basis matrix, listed column by column
    fn basis(self) -> [[f64; 4]; 4] {
        match self {
            Self::Hermite => [
                [2.0, -3.0, 0.0, 1.0],
                [-2.0, 3.0, 0.0, 0.0],
                [1.0, -2.0, 1.0, 0.0],
                [1.0, -1.0, 0.0, 0.0],
            ],
            Self::Bezier => [
                [-1.0, 3.0, -3.0, 1.0],
                [3.0, -6.0, 3.0, 0.0],
                [-3.0, 3.0, 0.0, 0.0],
                [1.0, 0.0, 0.0, 0.0],
            ],
        }
    }
}

/// Polynomial coefficients `[a, b, c, d]` for one axis
pub fn coefficients(kind: CurveKind, controls: [f64; 4]) -> Result<[f64; 4]> {
    let basis = Matrix::from_columns(4, &kind.basis())?;
    let mut control = Matrix::new(4);
    control.add_col(&controls)?;
    let product = basis.mult(&control)?;
    let at = |row| product.get(row, 0).unwrap_or(0.0);
    Ok([at(0), at(1), at(2), at(3)])
}

#[inline]
fn cubic([a, b, c, d]: [f64; 4], t: f64) -> f64 {
    ((a * t + b) * t + c) * t + d
}

impl Matrix {
    /// Sample a cubic curve into edges at `z = 0`.
    ///
    /// `xs` and `ys` hold the per-axis control vectors. Exactly `round(1 / step)`
    /// edges are appended, joining consecutive samples of `t` in `[0, 1]`.
    pub fn add_curve(
        &mut self,
        kind: CurveKind,
        xs: [f64; 4],
        ys: [f64; 4],
        step: f64,
    ) -> Result<usize> {
        let steps = config::steps(step)?;
        let xc = coefficients(kind, xs)?;
        let yc = coefficients(kind, ys)?;

        let mut prev: Option<Vec3> = None;
        for i in 0..=steps {
            let t = i as f64 / steps as f64;
            let point = Vec3::new(cubic(xc, t), cubic(yc, t), 0.0);
            if let Some(from) = prev {
                self.add_edge(from, point);
            }
            prev = Some(point);
        }

        log::debug!("{:?} curve: {} edges", kind, steps);
        Ok(steps)
    }

    /// Hermite curve from `p0` to `p1` with tangents `r0` at the start and `r1` at the end
    pub fn add_hermite(
        &mut self,
        p0: (f64, f64),
        p1: (f64, f64),
        r0: (f64, f64),
        r1: (f64, f64),
        step: f64,
    ) -> Result<usize> {
        self.add_curve(
            CurveKind::Hermite,
            [p0.0, p1.0, r0.0, r1.0],
            [p0.1, p1.1, r0.1, r1.1],
            step,
        )
    }

    /// Bezier curve through control points `p0..p3`
    pub fn add_bezier(
        &mut self,
        p0: (f64, f64),
        p1: (f64, f64),
        p2: (f64, f64),
        p3: (f64, f64),
        step: f64,
    ) -> Result<usize> {
        self.add_curve(
            CurveKind::Bezier,
            [p0.0, p1.0, p2.0, p3.0],
            [p0.1, p1.1, p2.1, p3.1],
            step,
        )
    }
}
