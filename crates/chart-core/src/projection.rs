// File: crates/chart-core/src/projection.rs
// Summary: Affine data-to-canvas mapping, independent per axis.

use crate::error::{ChartError, Result};
use crate::geometry::Rect;
use crate::range::Range;

/// Maps data `(x, y)` to canvas `(x_offset + x_scale·x, y_offset + y_scale·y)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projection {
    pub x_offset: f64,
    pub y_offset: f64,
    pub x_scale: f64,
    pub y_scale: f64,
}

impl Projection {
    /// Canvas coordinates pass through unchanged.
    pub const IDENTITY: Projection = Projection { x_offset: 0.0, y_offset: 0.0, x_scale: 1.0, y_scale: 1.0 };

    /// Map `x_range` onto `[rect.x, rect.x + rect.w]` and `y_range` onto
    /// `[rect.y, rect.y + rect.h]`. A negative `rect.h` flips the y axis.
    pub fn from_rect(rect: &Rect, x_range: Range, y_range: Range) -> Result<Self> {
        for r in [x_range, y_range] {
            if r.is_empty() || !r.is_finite() {
                return Err(ChartError::NoData);
            }
            if r.width() <= 0.0 {
                return Err(ChartError::InvalidRange { min: r.min, max: r.max });
            }
        }
        let x_scale = rect.w / x_range.width();
        let y_scale = rect.h / y_range.width();
        Ok(Self {
            x_offset: rect.x - x_scale * x_range.min,
            y_offset: rect.y - y_scale * y_range.min,
            x_scale,
            y_scale,
        })
    }

    #[inline]
    pub fn x(&self, x: f64) -> f64 {
        self.x_offset + self.x_scale * x
    }

    #[inline]
    pub fn y(&self, y: f64) -> f64 {
        self.y_offset + self.y_scale * y
    }

    #[inline]
    pub fn point(&self, x: f64, y: f64) -> (f64, f64) {
        (self.x(x), self.y(y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_ends_land_on_rect_edges() {
        let rect = Rect::new(12.0, 40.0, 60.0, -30.0);
        let p = Projection::from_rect(&rect, Range::new(-5.0, 15.0), Range::new(0.0, 44.0)).unwrap();
        assert_eq!(p.x(-5.0), 12.0);
        assert!((p.x(15.0) - 72.0).abs() < 1e-12);
        assert_eq!(p.y(0.0), 40.0);
        assert!((p.y(44.0) - 10.0).abs() < 1e-12);
        assert!(p.y_scale < 0.0);
    }

    #[test]
    fn rejects_empty_and_zero_width() {
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert_eq!(
            Projection::from_rect(&rect, Range::EMPTY, Range::new(0.0, 1.0)),
            Err(ChartError::NoData)
        );
        assert!(matches!(
            Projection::from_rect(&rect, Range::new(0.0, 1.0), Range::new(2.0, 2.0)),
            Err(ChartError::InvalidRange { .. })
        ));
    }

    #[test]
    fn identity_is_a_no_op() {
        assert_eq!(Projection::IDENTITY.point(3.5, -2.0), (3.5, -2.0));
    }
}
