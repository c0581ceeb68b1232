//! Integer line scan-conversion
//!
//! Midpoint (decision variable) algorithm split into four loops. Endpoints are
//! normalized so x never decreases, which leaves octants 1, 2, 7 and 8.

use super::{Color, PixelBuffer};
use crate::error::{Error, Result};

impl PixelBuffer {
    /// Draw a straight segment from `(x0, y0)` to `(x1, y1)`.
    ///
    /// The up-front check only rejects a negative start or an end past the far
    /// edge (`x1 > height`, `y1 > width`); anything else that leaves the buffer
    /// fails in [`PixelBuffer::plot`]. A failure stops the line where it is and
    /// pixels already written stay written.
    pub fn draw_line(&mut self, color: Color, x0: i32, y0: i32, x1: i32, y1: i32) -> Result<()> {
        if x0 < 0
            || y0 < 0
            || i64::from(x1) > i64::from(self.height())
            || i64::from(y1) > i64::from(self.width())
        {
            let (x, y) = if x0 < 0 || y0 < 0 { (x0, y0) } else { (x1, y1) };
            return Err(Error::OutOfBounds { x, y });
        }

        let (x0, y0, x1, y1) = if x0 > x1 { (x1, y1, x0, y0) } else { (x0, y0, x1, y1) };

        // Endpoints may sit on opposite sides of the i32 range
        let dx = i64::from(x1) - i64::from(x0);
        let dy = i64::from(y1) - i64::from(y0);
        // A = dy, B = -dx
        let a = dy;
        let b = -dx;

        if dy >= 0 {
            if dy <= dx {
                self.octant1(color, a, b, x0, y0, x1)
            } else {
                self.octant2(color, a, b, x0, y0, y1)
            }
        } else if -dy > dx {
            self.octant7(color, a, b, x0, y0, y1)
        } else {
            self.octant8(color, a, b, x0, y0, x1)
        }
    }

    /// x ascending, slope in [0, 1]
    fn octant1(&mut self, color: Color, a: i64, b: i64, x0: i32, y0: i32, x1: i32) -> Result<()> {
        let mut y = y0;
        let mut d = 2 * a + b;
        for x in x0..=x1 {
            self.plot(color, x, y)?;
            if d > 0 {
                y += 1;
                d += 2 * b;
            }
            d += 2 * a;
        }
        Ok(())
    }

    /// y ascending, slope > 1
    fn octant2(&mut self, color: Color, a: i64, b: i64, x0: i32, y0: i32, y1: i32) -> Result<()> {
        let mut x = x0;
        let mut d = a + 2 * b;
        for y in y0..=y1 {
            self.plot(color, x, y)?;
            if d < 0 {
                x += 1;
                d += 2 * a;
            }
            d += 2 * b;
        }
        Ok(())
    }

    /// y descending, slope < -1
    fn octant7(&mut self, color: Color, a: i64, b: i64, x0: i32, y0: i32, y1: i32) -> Result<()> {
        let mut x = x0;
        let mut d = a - 2 * b;
        for y in (y1..=y0).rev() {
            self.plot(color, x, y)?;
            if d > 0 {
                x += 1;
                d += 2 * a;
            }
            d -= 2 * b;
        }
        Ok(())
    }

    /// x ascending, slope in [-1, 0)
    fn octant8(&mut self, color: Color, a: i64, b: i64, x0: i32, y0: i32, x1: i32) -> Result<()> {
        let mut y = y0;
        let mut d = 2 * a - b;
        for x in x0..=x1 {
            self.plot(color, x, y)?;
            if d < 0 {
                y -= 1;
                d -= 2 * b;
            }
            d += 2 * a;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    const INK: Color = Color::BLACK;

    fn painted(buf: &PixelBuffer) -> BTreeSet<(i32, i32)> {
        let mut set = BTreeSet::new();
        for x in 0..buf.height() as i32 {
            for y in 0..buf.width() as i32 {
                if buf.get_pixel(x, y) == Some(INK) {
                    set.insert((x, y));
                }
            }
        }
        set
    }

    fn line_pixels(x0: i32, y0: i32, x1: i32, y1: i32) -> BTreeSet<(i32, i32)> {
        let mut buf = PixelBuffer::new(40, 40);
        buf.draw_line(INK, x0, y0, x1, y1).unwrap();
        painted(&buf)
    }

    #[test]
    fn test_horizontal_line() {
        let px = line_pixels(2, 5, 12, 5);
        assert_eq!(px.len(), 11);
        assert!(px.iter().all(|&(_, y)| y == 5));
    }

    #[test]
    fn test_vertical_line_both_directions() {
        let up = line_pixels(7, 3, 7, 20);
        let down = line_pixels(7, 20, 7, 3);
        assert_eq!(up.len(), 18);
        assert_eq!(up, down);
    }

    #[test]
    fn test_shallow_lines_one_pixel_per_column() {
        for &(x0, y0, x1, y1) in &[(0, 0, 30, 11), (1, 25, 33, 14), (3, 3, 20, 20), (0, 10, 25, 10)] {
            let px = line_pixels(x0, y0, x1, y1);
            assert_eq!(px.len() as i32, x1 - x0 + 1, "line {:?}", (x0, y0, x1, y1));
            let xs: BTreeSet<i32> = px.iter().map(|&(x, _)| x).collect();
            assert_eq!(xs.len() as i32, x1 - x0 + 1);

            let ordered: Vec<i32> = px.iter().map(|&(_, y)| y).collect();
            if y1 >= y0 {
                assert!(ordered.windows(2).all(|w| w[0] <= w[1]));
            } else {
                assert!(ordered.windows(2).all(|w| w[0] >= w[1]));
            }
        }
    }

    #[test]
    fn test_endpoints_are_plotted() {
        for &(x0, y0, x1, y1) in &[(0, 0, 30, 11), (2, 1, 9, 35), (4, 36, 10, 2), (1, 25, 33, 14)] {
            let px = line_pixels(x0, y0, x1, y1);
            assert!(px.contains(&(x0, y0)), "start of {:?}", (x0, y0, x1, y1));
            assert!(px.contains(&(x1, y1)), "end of {:?}", (x0, y0, x1, y1));
        }
    }

    #[test]
    fn test_steep_lines_one_pixel_per_row() {
        let px = line_pixels(2, 1, 9, 35);
        assert_eq!(px.len(), 35);
        let px = line_pixels(4, 36, 10, 2);
        assert_eq!(px.len(), 35);
    }

    #[test]
    fn test_endpoint_order_invariance() {
        let cases = [
            (0, 0, 30, 11),
            (2, 1, 9, 35),
            (4, 36, 10, 2),
            (1, 25, 33, 14),
            (5, 5, 5, 5),
            (10, 10, 20, 20),
        ];
        for &(x0, y0, x1, y1) in &cases {
            assert_eq!(
                line_pixels(x0, y0, x1, y1),
                line_pixels(x1, y1, x0, y0),
                "line {:?}",
                (x0, y0, x1, y1)
            );
        }
    }

    #[test]
    fn test_lines_are_eight_connected() {
        let px: Vec<(i32, i32)> = line_pixels(0, 0, 30, 11).into_iter().collect();
        for w in px.windows(2) {
            assert!((w[1].0 - w[0].0).abs() <= 1 && (w[1].1 - w[0].1).abs() <= 1);
        }
    }

    #[test]
    fn test_precheck_rejects_negative_start() {
        let mut buf = PixelBuffer::new(10, 10);
        let err = buf.draw_line(INK, -1, 0, 5, 5).unwrap_err();
        assert!(err.is_out_of_bounds());
        assert_eq!(buf.painted_count(), 0);
    }

    #[test]
    fn test_precheck_rejects_far_end() {
        let mut buf = PixelBuffer::new(10, 8);
        assert!(buf.draw_line(INK, 0, 0, 11, 0).unwrap_err().is_out_of_bounds());
        assert!(buf.draw_line(INK, 0, 0, 0, 9).unwrap_err().is_out_of_bounds());
        assert_eq!(buf.painted_count(), 0);
    }

    #[test]
    fn test_edge_touching_end_plots_then_fails() {
        // x1 == height passes the pre-check, the last column then fails in plot
        let mut buf = PixelBuffer::new(10, 10);
        let err = buf.draw_line(INK, 0, 0, 10, 0).unwrap_err();
        assert!(matches!(err, Error::OutOfBounds { x: 10, y: 0 }));
        assert_eq!(buf.painted_count(), 10);
    }

    #[test]
    fn test_far_flung_endpoints_fail_without_overflow() {
        // Passes the pre-check, then spans more than i32::MAX after the swap
        let mut buf = PixelBuffer::new(10, 10);
        let err = buf.draw_line(INK, 5, 1_500_000_000, 0, -1_500_000_000).unwrap_err();
        assert!(matches!(err, Error::OutOfBounds { x: 0, y: -1_500_000_000 }));

        let err = buf.draw_line(INK, 0, i32::MAX, 3, i32::MIN).unwrap_err();
        assert!(err.is_out_of_bounds());
        let err = buf.draw_line(INK, 3, 0, 0, i32::MIN).unwrap_err();
        assert!(err.is_out_of_bounds());
        assert_eq!(buf.painted_count(), 0);
    }
}
