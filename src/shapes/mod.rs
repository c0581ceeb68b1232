//! Tessellation of curves and solids into edge and triangle lists
//!
//! All builders append to a [`Matrix`](crate::math3d::Matrix): curves and circles
//! as edges (column pairs), solids as triangles (column triples).

mod curves;
mod solids;

pub use curves::{coefficients, CurveKind};
pub use solids::{sphere_points, torus_points, CIRCLE_SEGMENTS};
