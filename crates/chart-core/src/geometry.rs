// File: crates/chart-core/src/geometry.rs
// Summary: Canvas-space geometry: rectangles, margins, and an owned path with stroke styling.

use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle anchored at `(x, y)`; `w`/`h` may be negative.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }
    pub fn center_x(&self) -> f64 { self.x + self.w / 2.0 }
    pub fn center_y(&self) -> f64 { self.y + self.h / 2.0 }
}

/// Space reserved on each side of the drawable rectangle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Insets {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl Insets {
    pub const fn new(left: f64, right: f64, top: f64, bottom: f64) -> Self {
        Self { left, right, top, bottom }
    }
    /// Same inset on all four sides.
    pub const fn uniform(v: f64) -> Self {
        Self::new(v, v, v, v)
    }
    /// Total horizontal inset (left + right).
    pub fn hsum(&self) -> f64 { self.left + self.right }
    /// Total vertical inset (top + bottom).
    pub fn vsum(&self) -> f64 { self.top + self.bottom }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathSegment {
    MoveTo(f64, f64),
    LineTo(f64, f64),
    Close,
}

/// Owned sequence of path segments.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Path {
    segments: Vec<PathSegment>,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(n: usize) -> Self {
        Self { segments: Vec::with_capacity(n) }
    }

    /// Closed rectangle path, starting at `(x, y)`.
    pub fn rectangle(x: f64, y: f64, w: f64, h: f64) -> Self {
        let mut p = Self::with_capacity(5);
        p.move_to(x, y);
        p.line_to(x + w, y);
        p.line_to(x + w, y + h);
        p.line_to(x, y + h);
        p.close();
        p
    }

    pub fn move_to(&mut self, x: f64, y: f64) {
        self.segments.push(PathSegment::MoveTo(x, y));
    }

    pub fn line_to(&mut self, x: f64, y: f64) {
        self.segments.push(PathSegment::LineTo(x, y));
    }

    pub fn close(&mut self) {
        self.segments.push(PathSegment::Close);
    }

    /// Scale every vertex independently along x and y.
    pub fn scale(mut self, sx: f64, sy: f64) -> Self {
        for seg in &mut self.segments {
            match seg {
                PathSegment::MoveTo(x, y) | PathSegment::LineTo(x, y) => {
                    *x *= sx;
                    *y *= sy;
                }
                PathSegment::Close => {}
            }
        }
        self
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Number of explicit vertices (move/line targets).
    pub fn vertex_count(&self) -> usize {
        self.segments.iter().filter(|s| !matches!(s, PathSegment::Close)).count()
    }

    /// Freeze the path with a stroke style.
    pub fn stroke(self, width: f64, cap: LineCap, join: LineJoin, miter_limit: f64) -> StrokedPath {
        StrokedPath { path: self, style: StrokeStyle { width, cap, join, miter_limit } }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LineCap {
    Butt,
    Round,
    Square,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LineJoin {
    Miter,
    Round,
    Bevel,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct StrokeStyle {
    pub width: f64,
    pub cap: LineCap,
    pub join: LineJoin,
    pub miter_limit: f64,
}

impl StrokeStyle {
    /// Thin rounded stroke shared by the frame, tick marks and series.
    pub const THIN: StrokeStyle =
        StrokeStyle { width: 0.3, cap: LineCap::Round, join: LineJoin::Round, miter_limit: 1.0 };
}

/// Immutable path plus the style it is stroked with; ready for a surface.
#[derive(Clone, Debug, PartialEq)]
pub struct StrokedPath {
    path: Path,
    style: StrokeStyle,
}

impl StrokedPath {
    pub fn path(&self) -> &Path {
        &self.path
    }
    pub fn style(&self) -> &StrokeStyle {
        &self.style
    }
}

/// Stroke `path` with [`StrokeStyle::THIN`].
pub fn stroke_thin(path: Path) -> StrokedPath {
    let s = StrokeStyle::THIN;
    path.stroke(s.width, s.cap, s.join, s.miter_limit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rectangle_is_closed_with_four_corners() {
        let p = Path::rectangle(1.0, 2.0, 3.0, -4.0);
        assert_eq!(p.vertex_count(), 4);
        assert_eq!(p.segments()[2], PathSegment::LineTo(4.0, -2.0));
        assert_eq!(p.segments().last(), Some(&PathSegment::Close));
    }

    #[test]
    fn scale_is_per_axis() {
        let mut p = Path::new();
        p.move_to(1.0, 1.0);
        p.line_to(2.0, -3.0);
        let p = p.scale(10.0, -0.5);
        assert_eq!(p.segments(), &[PathSegment::MoveTo(10.0, -0.5), PathSegment::LineTo(20.0, 1.5)]);
    }
}
