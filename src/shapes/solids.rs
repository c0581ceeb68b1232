//! Circles, boxes, spheres and tori
//!
//! Circles become edges. Everything else becomes triangles wound so that faces
//! pointing toward +z have a positive cross product and survive culling.

use std::f64::consts::PI;

use crate::config;
use crate::error::Result;
use crate::math3d::{Matrix, Vec3};

/// Edges per circle
pub const CIRCLE_SEGMENTS: usize = 100;

impl Matrix {
    /// Circle of radius `r` around `center`, in the plane `z = center.z`
    pub fn add_circle(&mut self, center: Vec3, r: f64) {
        let mut prev: Option<Vec3> = None;
        for i in 0..=CIRCLE_SEGMENTS {
            let t = i as f64 / CIRCLE_SEGMENTS as f64;
            let angle = 2.0 * PI * t;
            let point = Vec3::new(r * angle.cos() + center.x, r * angle.sin() + center.y, center.z);
            if let Some(from) = prev {
                self.add_edge(from, point);
            }
            prev = Some(point);
        }
    }

    /// Axis-aligned box with its front-top-left corner at `corner`.
    ///
    /// The box spans `+width` in x, `-height` in y and `-depth` in z. Twelve
    /// triangles, two per face, each wound outward.
    pub fn add_box(&mut self, corner: Vec3, width: f64, height: f64, depth: f64) {
        let (x0, y0, z0) = (corner.x, corner.y, corner.z);
        let (x1, y1, z1) = (x0 + width, y0 - height, z0 - depth);
        let p = Vec3::new;

        // Front
        self.add_polygon(p(x0, y0, z0), p(x0, y1, z0), p(x1, y1, z0));
        self.add_polygon(p(x0, y0, z0), p(x1, y1, z0), p(x1, y0, z0));

        // Back
        self.add_polygon(p(x0, y0, z1), p(x1, y0, z1), p(x0, y1, z1));
        self.add_polygon(p(x1, y1, z1), p(x0, y1, z1), p(x1, y0, z1));

        // Top
        self.add_polygon(p(x0, y0, z0), p(x1, y0, z0), p(x1, y0, z1));
        self.add_polygon(p(x1, y0, z1), p(x0, y0, z1), p(x0, y0, z0));

        // Bottom
        self.add_polygon(p(x1, y1, z0), p(x0, y1, z0), p(x0, y1, z1));
        self.add_polygon(p(x1, y1, z1), p(x1, y1, z0), p(x0, y1, z1));

        // Left
        self.add_polygon(p(x0, y1, z0), p(x0, y0, z0), p(x0, y0, z1));
        self.add_polygon(p(x0, y0, z1), p(x0, y1, z1), p(x0, y1, z0));

        // Right
        self.add_polygon(p(x1, y0, z0), p(x1, y1, z1), p(x1, y0, z1));
        self.add_polygon(p(x1, y0, z0), p(x1, y1, z0), p(x1, y1, z1));
    }

    /// Sphere of radius `r`, sampled with `round(1 / step)` intervals per angle
    pub fn add_sphere(&mut self, center: Vec3, r: f64, step: f64) -> Result<usize> {
        let steps = config::steps(step)?;
        let points = sphere_points(center, r, steps);
        let emitted = self.stitch_grid(&points, steps, true);
        log::debug!("sphere r={}: {} triangles", r, emitted);
        Ok(emitted)
    }

    /// Torus with tube radius `r1` swept around a circle of radius `r2`
    pub fn add_torus(&mut self, center: Vec3, r1: f64, r2: f64, step: f64) -> Result<usize> {
        let steps = config::steps(step)?;
        let points = torus_points(center, r1, r2, steps);
        let emitted = self.stitch_grid(&points, steps, false);
        log::debug!("torus r1={} r2={}: {} triangles", r1, r2, emitted);
        Ok(emitted)
    }

    /// Join a `(steps + 1)²` point grid into triangles, two per cell.
    ///
    /// Row `lat` is joined to the next row, wrapping around the column count.
    /// With `poles` set the triangle collapsing onto the first and last sample of
    /// each row is left out.
    fn stitch_grid(&mut self, points: &Matrix, steps: usize, poles: bool) -> usize {
        let stride = steps + 1;
        let total = points.cols();
        let mut emitted = 0;

        for lat in 0..steps {
            let lat1 = lat * stride;
            let lat2 = (lat1 + stride) % total;
            for lon in 0..steps {
                let index = lat1 + lon;
                let below = lat2 + lon;

                if !poles || lon > 0 {
                    self.add_polygon(points.point(index), points.point(index + 1), points.point(below));
                    emitted += 1;
                }
                if !poles || lon != steps - 1 {
                    self.add_polygon(
                        points.point(index + 1),
                        points.point(below + 1),
                        points.point(below),
                    );
                    emitted += 1;
                }
            }
        }
        emitted
    }
}

/// Sphere surface grid: one row per longitude `phi` in `[0, 2π]`, one column per
/// latitude `theta` in `[0, π]`
pub fn sphere_points(center: Vec3, r: f64, steps: usize) -> Matrix {
    let mut m = Matrix::points();
    for i in 0..=steps {
        let phi = 2.0 * PI * (i as f64 / steps as f64);
        for j in 0..=steps {
            let theta = PI * (j as f64 / steps as f64);
            m.add_point(Vec3::new(
                r * theta.cos() + center.x,
                r * theta.sin() * phi.cos() + center.y,
                r * theta.sin() * phi.sin() + center.z,
            ));
        }
    }
    m
}

/// Torus surface grid: one row per sweep angle `phi`, one column per tube angle
/// `theta`, both over `[0, 2π]`
pub fn torus_points(center: Vec3, r1: f64, r2: f64, steps: usize) -> Matrix {
    let mut m = Matrix::points();
    for i in 0..=steps {
        let phi = 2.0 * PI * (i as f64 / steps as f64);
        for j in 0..=steps {
            let theta = 2.0 * PI * (j as f64 / steps as f64);
            let ring = r1 * theta.cos() + r2;
            m.add_point(Vec3::new(
                phi.cos() * ring + center.x,
                r1 * theta.sin() + center.y,
                -phi.sin() * ring + center.z,
            ));
        }
    }
    m
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math3d::cross_product;

    fn facing(tri: &[Vec3; 3]) -> f64 {
        let a = Vec3::between(tri[0], tri[1]);
        let b = Vec3::between(tri[0], tri[2]);
        a.x * b.y - a.y * b.x
    }

    #[test]
    fn test_circle_is_closed_loop() {
        let mut edges = Matrix::points();
        edges.add_circle(Vec3::zero(), 10.0);
        assert_eq!(edges.cols(), 200);
        let pairs: Vec<(Vec3, Vec3)> = edges.edges().collect();
        assert_eq!(pairs.len(), 100);
        for w in pairs.windows(2) {
            assert_eq!(w[0].1, w[1].0);
        }
        let first = pairs[0].0;
        let last = pairs[99].1;
        assert!(first.approx_eq(&last, 1e-9));
        assert!(first.approx_eq(&Vec3::new(10.0, 0.0, 0.0), 1e-12));
    }

    #[test]
    fn test_circle_keeps_center_z() {
        let mut edges = Matrix::points();
        edges.add_circle(Vec3::new(50.0, 60.0, -7.0), 5.0);
        assert!(edges.edges().all(|(a, b)| a.z == -7.0 && b.z == -7.0));
        assert!(edges
            .edges()
            .all(|(a, _)| ((a.x - 50.0).hypot(a.y - 60.0) - 5.0).abs() < 1e-9));
    }

    #[test]
    fn test_box_has_twelve_triangles() {
        let mut tris = Matrix::points();
        tris.add_box(Vec3::new(0.0, 10.0, 0.0), 10.0, 10.0, 10.0);
        assert_eq!(tris.cols(), 36);
        assert_eq!(tris.triangles().count(), 12);
    }

    #[test]
    fn test_box_front_faces_viewer_back_does_not() {
        let mut tris = Matrix::points();
        tris.add_box(Vec3::new(0.0, 10.0, 0.0), 10.0, 10.0, 10.0);
        let all: Vec<[Vec3; 3]> = tris.triangles().collect();
        // Front pair is visible, back pair is culled
        assert!(facing(&all[0]) > 0.0 && facing(&all[1]) > 0.0);
        assert!(facing(&all[2]) < 0.0 && facing(&all[3]) < 0.0);
        // Side faces are edge-on when looking straight down z
        for tri in &all[4..] {
            assert_eq!(facing(tri), 0.0);
        }
    }

    #[test]
    fn test_box_normals_point_outward() {
        let corner = Vec3::new(0.0, 10.0, 0.0);
        let mut tris = Matrix::points();
        tris.add_box(corner, 10.0, 10.0, 10.0);
        let center = Vec3::new(5.0, 5.0, -5.0);
        for tri in tris.triangles() {
            let n = cross_product(Vec3::between(tri[0], tri[1]), Vec3::between(tri[0], tri[2])).unwrap();
            let centroid = (tri[0] + tri[1] + tri[2]) * (1.0 / 3.0);
            assert!(n.dot(&(centroid - center)) > 0.0, "inward face {:?}", tri);
        }
    }

    #[test]
    fn test_sphere_and_torus_counts() {
        let step = 1.0 / 20.0;
        let steps = 20;

        let mut sphere = Matrix::points();
        let n_sphere = sphere.add_sphere(Vec3::zero(), 1.0, step).unwrap();
        let mut torus = Matrix::points();
        let n_torus = torus.add_torus(Vec3::zero(), 1.0, 2.0, step).unwrap();

        assert_eq!(n_torus, 2 * steps * steps);
        assert_eq!(n_sphere, 2 * steps * steps - 2 * steps);
        assert_eq!(sphere.cols(), 3 * n_sphere);
        assert_eq!(torus.cols(), 3 * n_torus);
    }

    #[test]
    fn test_counts_follow_step_size() {
        let mut torus = Matrix::points();
        assert_eq!(torus.add_torus(Vec3::zero(), 1.0, 2.0, 0.1).unwrap(), 200);
        let mut sphere = Matrix::points();
        assert_eq!(sphere.add_sphere(Vec3::zero(), 1.0, 0.25).unwrap(), 2 * 16 - 8);
    }

    #[test]
    fn test_sphere_skips_pole_triangles() {
        let mut sphere = Matrix::points();
        sphere.add_sphere(Vec3::zero(), 3.0, 0.1).unwrap();
        // Pole samples only agree to rounding error, so compare approximately
        let same = |a: Vec3, b: Vec3| a.approx_eq(&b, 1e-9);
        for tri in sphere.triangles() {
            assert!(!same(tri[0], tri[1]) && !same(tri[1], tri[2]) && !same(tri[0], tri[2]));
        }
    }

    #[test]
    fn test_surface_points_on_shape() {
        let c = Vec3::new(1.0, 2.0, 3.0);
        let pts = sphere_points(c, 4.0, 10);
        assert_eq!(pts.cols(), 121);
        for i in 0..pts.cols() {
            assert!(((pts.point(i) - c).length() - 4.0).abs() < 1e-9);
        }

        let pts = torus_points(Vec3::zero(), 1.0, 5.0, 10);
        assert_eq!(pts.cols(), 121);
        for i in 0..pts.cols() {
            let p = pts.point(i);
            let ring = p.x.hypot(p.z) - 5.0;
            assert!((ring.hypot(p.y) - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_surface_bad_step() {
        let mut m = Matrix::points();
        assert!(m.add_sphere(Vec3::zero(), 1.0, -1.0).is_err());
        assert!(m.add_torus(Vec3::zero(), 1.0, 2.0, f64::INFINITY).is_err());
        assert!(m.is_empty());
    }
}
