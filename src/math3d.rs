//! 3D Math Utilities
//!
//! Vectors, the homogeneous column matrix the tessellators write into, and the
//! cross product used for back-face culling.

use std::ops::{Add, Mul, Sub};

use crate::error::{Error, Result};

/// 3D Vector (also used as a point)
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub const fn zero() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            z: 0.0,
        }
    }

    /// Direction vector pointing from `from` to `to`
    #[inline]
    pub fn between(from: Self, to: Self) -> Self {
        to - from
    }

    #[inline]
    pub fn length(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    #[inline]
    pub fn dot(&self, other: &Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    #[inline]
    pub fn cross(&self, other: &Self) -> Self {
        Self {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    /// Approximate equality check for floating point comparison
    #[inline]
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        (self.x - other.x).abs() < epsilon
            && (self.y - other.y).abs() < epsilon
            && (self.z - other.z).abs() < epsilon
    }
}

impl Add for Vec3 {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
        }
    }
}

impl Sub for Vec3 {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
        }
    }
}

impl Mul<f64> for Vec3 {
    type Output = Self;

    #[inline]
    fn mul(self, s: f64) -> Self {
        Self {
            x: self.x * s,
            y: self.y * s,
            z: self.z * s,
        }
    }
}

/// Cross product of two edge directions.
///
/// Fails when either input is non-finite or has zero length, since no facing
/// can be derived from it.
pub fn cross_product(a: Vec3, b: Vec3) -> Result<Vec3> {
    if !a.is_finite() || !b.is_finite() {
        return Err(Error::degenerate(format!("non-finite edge vector {:?} x {:?}", a, b)));
    }
    if a.length() == 0.0 || b.length() == 0.0 {
        return Err(Error::degenerate(format!("zero-length edge vector {:?} x {:?}", a, b)));
    }
    Ok(a.cross(&b))
}

// ============================================================================
// Matrix
// ============================================================================

/// Column-major matrix.
///
/// Point containers have 4 rows (x, y, z, w=1) and one column per point. Edge
/// lists hold pairs of columns, triangle lists hold triples.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    rows: usize,
    columns: Vec<Vec<f64>>,
}

impl Matrix {
    /// Empty matrix with `rows` rows and no columns
    pub fn new(rows: usize) -> Self {
        Self {
            rows,
            columns: Vec::new(),
        }
    }

    /// Empty homogeneous point container
    pub fn points() -> Self {
        Self::new(4)
    }

    /// Build a matrix from its columns; all must have `rows` entries
    pub fn from_columns(rows: usize, columns: &[[f64; 4]]) -> Result<Self> {
        let mut m = Self::new(rows);
        for col in columns {
            m.add_col(col)?;
        }
        Ok(m)
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Current column count
    #[inline]
    pub fn cols(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn add_col(&mut self, values: &[f64]) -> Result<()> {
        if values.len() != self.rows {
            return Err(Error::degenerate(format!(
                "column of length {} does not fit {} rows",
                values.len(),
                self.rows
            )));
        }
        self.columns.push(values.to_vec());
        Ok(())
    }

    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        self.columns.get(col).and_then(|c| c.get(row)).copied()
    }

    /// Append a homogeneous point
    pub fn add_point(&mut self, p: Vec3) {
        let mut col = vec![p.x, p.y, p.z, 1.0];
        col.resize(self.rows, 0.0);
        self.columns.push(col);
    }

    pub fn add_edge(&mut self, from: Vec3, to: Vec3) {
        self.add_point(from);
        self.add_point(to);
    }

    pub fn add_polygon(&mut self, a: Vec3, b: Vec3, c: Vec3) {
        self.add_point(a);
        self.add_point(b);
        self.add_point(c);
    }

    /// Column `col` read back as a 3D point
    pub fn point(&self, col: usize) -> Vec3 {
        let at = |row| self.get(row, col).unwrap_or(0.0);
        Vec3::new(at(0), at(1), at(2))
    }

    /// Consecutive column pairs; a trailing odd column is ignored
    pub fn edges(&self) -> impl Iterator<Item = (Vec3, Vec3)> + '_ {
        (0..self.cols() / 2).map(move |i| (self.point(2 * i), self.point(2 * i + 1)))
    }

    /// Consecutive column triples; trailing columns are ignored
    pub fn triangles(&self) -> impl Iterator<Item = [Vec3; 3]> + '_ {
        (0..self.cols() / 3)
            .map(move |i| [self.point(3 * i), self.point(3 * i + 1), self.point(3 * i + 2)])
    }

    /// `self * other`; fails unless `self.cols() == other.rows()`
    pub fn mult(&self, other: &Self) -> Result<Self> {
        if self.cols() != other.rows {
            return Err(Error::degenerate(format!(
                "cannot multiply {}x{} by {}x{}",
                self.rows,
                self.cols(),
                other.rows,
                other.cols()
            )));
        }
        let columns: Vec<Vec<f64>> = other
            .columns
            .iter()
            .map(|rhs| {
                (0..self.rows)
                    .map(|r| {
                        self.columns
                            .iter()
                            .zip(rhs)
                            .map(|(lhs, &v)| lhs[r] * v)
                            .sum::<f64>()
                    })
                    .collect()
            })
            .collect();
        Ok(Self {
            rows: self.rows,
            columns,
        })
    }

    /// Append every column of `other`
    pub fn extend(&mut self, other: &Self) -> Result<()> {
        if other.rows != self.rows {
            return Err(Error::degenerate(format!(
                "cannot append {}-row columns to a {}-row matrix",
                other.rows, self.rows
            )));
        }
        self.columns.extend(other.columns.iter().cloned());
        Ok(())
    }
}

impl Default for Matrix {
    fn default() -> Self {
        Self::points()
    }
}
