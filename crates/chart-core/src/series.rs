// File: crates/chart-core/src/series.rs
// Summary: Line series: paired x/y samples, bounding ranges and polyline drawing.

use crate::error::{ChartError, Result};
use crate::geometry::{stroke_thin, Path};
use crate::projection::Projection;
use crate::range::Range;
use crate::surface::Surface;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Line {
    xs: Vec<f64>,
    ys: Vec<f64>,
}

impl Line {
    /// Pair `xs[i]` with `ys[i]`. Lengths must match.
    pub fn new(xs: Vec<f64>, ys: Vec<f64>) -> Result<Self> {
        if xs.len() != ys.len() {
            return Err(ChartError::DimensionMismatch { xs: xs.len(), ys: ys.len() });
        }
        Ok(Self { xs, ys })
    }

    pub fn from_points(points: &[(f64, f64)]) -> Self {
        let (xs, ys) = points.iter().copied().unzip();
        Self { xs, ys }
    }

    pub fn len(&self) -> usize {
        self.xs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    pub fn xs(&self) -> &[f64] {
        &self.xs
    }

    pub fn ys(&self) -> &[f64] {
        &self.ys
    }

    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.xs.iter().copied().zip(self.ys.iter().copied())
    }

    /// Bounding ranges along x and y; both empty when there are no samples.
    pub fn ranges(&self) -> (Range, Range) {
        let mut x = Range::EMPTY;
        let mut y = Range::EMPTY;
        for (px, py) in self.points() {
            x.include(px);
            y.include(py);
        }
        (x, y)
    }

    /// Stroke one polyline through the samples in input order.
    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S, proj: &Projection) {
        let mut points = self.points();
        let Some((x0, y0)) = points.next() else {
            return;
        };
        let mut path = Path::with_capacity(self.len());
        path.move_to(x0, y0);
        for (x, y) in points {
            path.line_to(x, y);
        }
        let path = stroke_thin(path.scale(proj.x_scale, proj.y_scale));
        surface.draw_path(proj.x_offset, proj.y_offset, &path);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::PathSegment;
    use crate::surface::{DrawCommand, RecordingSurface};
    use crate::text::FixedFace;

    fn reference() -> Line {
        Line::new(
            vec![0.0, 10.0, 20.0, 30.0, 40.0, 50.0, 60.0],
            vec![15.0, 25.0, 40.0, 30.0, 10.0, 5.0, 5.0],
        )
        .unwrap()
    }

    #[test]
    fn ranges_of_reference_series() {
        let (x, y) = reference().ranges();
        assert_eq!(x, Range::new(0.0, 60.0));
        assert_eq!(y, Range::new(5.0, 40.0));
    }

    #[test]
    fn empty_line_has_empty_ranges() {
        let (x, y) = Line::default().ranges();
        assert!(x.is_empty() && y.is_empty());
    }

    #[test]
    fn mismatched_lengths_are_rejected() {
        assert_eq!(
            Line::new(vec![1.0, 2.0], vec![1.0]),
            Err(ChartError::DimensionMismatch { xs: 2, ys: 1 })
        );
    }

    #[test]
    fn draw_emits_one_polyline_under_projection() {
        let proj = Projection { x_offset: 10.0, y_offset: 50.0, x_scale: 2.0, y_scale: -1.0 };
        let mut surface = RecordingSurface::<FixedFace>::new();
        reference().draw(&mut surface, &proj);

        let [DrawCommand::Path { x, y, path }] = surface.commands() else {
            panic!("expected a single path, got {:?}", surface.commands());
        };
        assert_eq!((*x, *y), (10.0, 50.0));
        assert_eq!(path.path().vertex_count(), 7);
        assert_eq!(path.path().segments()[2], PathSegment::LineTo(40.0, -40.0));
    }

    #[test]
    fn empty_line_draws_nothing() {
        let mut surface = RecordingSurface::<FixedFace>::new();
        Line::default().draw(&mut surface, &Projection::IDENTITY);
        assert!(surface.commands().is_empty());
    }
}
