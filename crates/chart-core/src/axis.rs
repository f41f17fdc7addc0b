// File: crates/chart-core/src/axis.rs
// Summary: Ticked, labelled plot edges; margin measurement and drawing of the axis frame.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ChartError, Result};
use crate::geometry::{stroke_thin, Path, Rect};
use crate::projection::Projection;
use crate::range::Range;
use crate::surface::Surface;
use crate::text::{FontFace, HAlign, Label, VAlign};
use crate::ticks::{format_ticks, select_ticks, DEFAULT_TICK_COUNT};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScaleKind {
    #[default]
    Linear,
    Log,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Position {
    Left,
    Right,
    Top,
    Bottom,
}

// Positions that can be measured and drawn.
#[derive(Clone, Copy)]
enum Side {
    Left,
    Bottom,
}

/// Tick generation and spacing shared by both axes.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AxisStyle {
    pub tick_count: usize,
    /// Gap between the frame and the tick labels.
    pub label_padding: f64,
    /// Length of the tick marks drawn into the frame.
    pub tick_length: f64,
}

impl Default for AxisStyle {
    fn default() -> Self {
        Self { tick_count: DEFAULT_TICK_COUNT, label_padding: 2.0, tick_length: 1.5 }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Axis {
    pub position: Position,
    pub range: Range,
    pub scale: ScaleKind,
    pub ticks: Vec<f64>,
    pub label_padding: f64,
    pub tick_length: f64,
}

impl Axis {
    /// Pick ticks for `range` and widen the range to span them.
    pub fn new(position: Position, range: Range, scale: ScaleKind, style: &AxisStyle) -> Result<Self> {
        let ticks = match scale {
            ScaleKind::Linear => select_ticks(range.min, range.max, style.tick_count)?,
            ScaleKind::Log => return Err(ChartError::NotImplemented("log scale ticks")),
        };
        let span: Range = ticks.iter().copied().collect();
        let range = range.merge(span);
        debug!(?position, min = range.min, max = range.max, ticks = ticks.len(), "axis ticks");
        Ok(Self::with_ticks(position, range, scale, ticks, style))
    }

    /// Axis with caller-provided ticks; no selection, no range adjustment.
    pub fn with_ticks(
        position: Position,
        range: Range,
        scale: ScaleKind,
        ticks: Vec<f64>,
        style: &AxisStyle,
    ) -> Self {
        Self {
            position,
            range,
            scale,
            ticks,
            label_padding: style.label_padding,
            tick_length: style.tick_length,
        }
    }

    fn drawable_side(&self) -> Result<Side> {
        match self.scale {
            ScaleKind::Linear => {}
            ScaleKind::Log => return Err(ChartError::NotImplemented("log scale axis")),
        }
        match self.position {
            Position::Left => Ok(Side::Left),
            Position::Bottom => Ok(Side::Bottom),
            Position::Right => Err(ChartError::NotImplemented("right axis")),
            Position::Top => Err(ChartError::NotImplemented("top axis")),
        }
    }

    pub fn tick_labels(&self) -> Vec<String> {
        format_ticks(&self.ticks)
    }

    /// Margin needed beside the frame for this axis's tick labels.
    ///
    /// Widest label for a Left axis, tallest line for a Bottom axis, plus
    /// `label_padding`. With no ticks only the padding is returned.
    pub fn label_space<F: FontFace + ?Sized>(&self, face: &F) -> Result<f64> {
        let side = self.drawable_side()?;
        let labels = self.tick_labels();
        let extent = match side {
            Side::Left => labels.iter().map(|l| face.text_width(l)).fold(0.0, f64::max),
            Side::Bottom => labels.iter().map(|_| face.line_height()).fold(0.0, f64::max),
        };
        Ok(extent + self.label_padding)
    }

    fn is_end(&self, v: f64) -> bool {
        let tol = self.range.width().abs() * 1e-9;
        (v - self.range.min).abs() <= tol || (v - self.range.max).abs() <= tol
    }

    /// Draw tick labels and the interior tick marks.
    ///
    /// `axes` supplies the crossing axis, whose minimum is where this axis
    /// sits on the canvas.
    pub fn draw<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        proj: &Projection,
        axes: &Axes,
        face: &S::Face,
    ) -> Result<()> {
        let side = self.drawable_side()?;
        let labels = self.tick_labels();
        let mut marks = Path::with_capacity(2 * self.ticks.len());

        match side {
            Side::Bottom => {
                let y0 = axes.y.range.min;
                for (&v, text) in self.ticks.iter().zip(labels) {
                    Label::new(face, text, v, y0)
                        .align(HAlign::Center, VAlign::Top)
                        .offset(0.0, self.label_padding)
                        .draw(surface, proj)?;
                    if !self.is_end(v) {
                        marks.move_to(v, 0.0);
                        marks.line_to(v, -self.tick_length);
                    }
                }
                if !marks.is_empty() {
                    let marks = stroke_thin(marks.scale(proj.x_scale, 1.0));
                    surface.draw_path(proj.x_offset, proj.y(y0), &marks);
                }
            }
            Side::Left => {
                let x0 = axes.x.range.min;
                for (&v, text) in self.ticks.iter().zip(labels) {
                    Label::new(face, text, x0, v)
                        .align(HAlign::Right, VAlign::Middle)
                        .offset(-self.label_padding, 0.0)
                        .draw(surface, proj)?;
                    if !self.is_end(v) {
                        marks.move_to(0.0, v);
                        marks.line_to(self.tick_length, v);
                    }
                }
                if !marks.is_empty() {
                    let marks = stroke_thin(marks.scale(1.0, proj.y_scale));
                    surface.draw_path(proj.x(x0), proj.y_offset, &marks);
                }
            }
        }
        Ok(())
    }
}

/// The X (bottom) and Y (left) axes of one plot.
#[derive(Clone, Debug, PartialEq)]
pub struct Axes {
    pub x: Axis,
    pub y: Axis,
}

impl Axes {
    pub fn new(
        x_range: Range,
        x_scale: ScaleKind,
        y_range: Range,
        y_scale: ScaleKind,
        style: &AxisStyle,
    ) -> Result<Self> {
        Ok(Self {
            x: Axis::new(Position::Bottom, x_range, x_scale, style)?,
            y: Axis::new(Position::Left, y_range, y_scale, style)?,
        })
    }

    /// Canvas rectangle spanned by both axis ranges.
    pub fn frame(&self, proj: &Projection) -> Rect {
        let (x0, y0) = proj.point(self.x.range.min, self.y.range.min);
        let (x1, y1) = proj.point(self.x.range.max, self.y.range.max);
        Rect::new(x0, y0, x1 - x0, y1 - y0)
    }

    /// Draw the frame, then each axis. Nothing is drawn if either axis is unsupported.
    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S, proj: &Projection, face: &S::Face) -> Result<()> {
        self.x.drawable_side()?;
        self.y.drawable_side()?;

        let f = self.frame(proj);
        surface.draw_path(0.0, 0.0, &stroke_thin(Path::rectangle(f.x, f.y, f.w, f.h)));

        self.x.draw(surface, proj, self, face)?;
        self.y.draw(surface, proj, self, face)
    }
}
