//! Software wireframe rasterizer
//!
//! Curves, circles and solids are tessellated into edge and triangle lists
//! ([`math3d::Matrix`]), drawn with integer line scan-conversion into a
//! [`PixelBuffer`], and written out as plain PPM.
//!
//! ```no_run
//! use wireframe::{render, Color, Matrix, PixelBuffer, Vec3};
//!
//! let mut buffer = PixelBuffer::new(500, 500);
//! let mut triangles = Matrix::points();
//! triangles.add_box(Vec3::new(100.0, 400.0, 0.0), 200.0, 200.0, 200.0);
//! let diagnostics = render::draw_polygons(&mut buffer, &triangles, Color::BLACK);
//! assert!(diagnostics.is_clean());
//! buffer.save_ppm("box.ppm").unwrap();
//! ```

pub mod config;
pub mod display;
pub mod error;
pub mod math3d;
pub mod render;
pub mod scene;
pub mod shapes;

pub use config::{RenderConfig, Tessellation};
pub use display::{Color, PixelBuffer};
pub use error::{Error, Result};
pub use math3d::{Matrix, Vec3};
pub use render::{Diagnostic, Diagnostics};
pub use scene::{Scene, Shape};
