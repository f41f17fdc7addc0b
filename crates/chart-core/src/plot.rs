// File: crates/chart-core/src/plot.rs
// Summary: Plot orchestration: range merging, tick-driven margin layout, projection and draw order.
// Notes:
// - Layout runs in a fixed order: data ranges -> ticks -> tick label space
//   -> margins -> drawable rectangle -> projection. Ticks depend only on the
//   data, so label space can be measured before the rectangle exists.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::axis::{Axes, AxisStyle, ScaleKind};
use crate::error::{ChartError, Result};
use crate::geometry::{Insets, Rect};
use crate::projection::Projection;
use crate::range::Range;
use crate::series::Line;
use crate::surface::Surface;
use crate::text::{Font, FontFace, HAlign, Label, VAlign};

/// How the `width`/`height` passed to [`Plot::draw`] are interpreted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CanvasSize {
    /// The whole canvas; margins are carved out of it.
    #[default]
    Outer,
    /// The drawable rectangle; the canvas grows by the margins.
    Inner,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotOptions {
    /// Base margin on every side of the canvas.
    pub margin: f64,
    /// Gap below the title.
    pub title_padding: f64,
    /// Gap between an axis label and the tick labels.
    pub label_padding: f64,
    pub axis: AxisStyle,
    pub title_font_size: f64,
    pub label_font_size: f64,
    pub tick_font_size: f64,
    /// Fraction of the y span added above the highest sample.
    pub y_headroom: f64,
    /// Extend the y range down to zero when all samples are positive.
    pub anchor_y_at_zero: bool,
    pub x_scale: ScaleKind,
    pub y_scale: ScaleKind,
    pub canvas: CanvasSize,
}

impl Default for PlotOptions {
    fn default() -> Self {
        Self {
            margin: 10.0,
            title_padding: 4.0,
            label_padding: 3.0,
            axis: AxisStyle::default(),
            title_font_size: 5.0,
            label_font_size: 4.0,
            tick_font_size: 3.5,
            y_headroom: 0.1,
            anchor_y_at_zero: true,
            x_scale: ScaleKind::Linear,
            y_scale: ScaleKind::Linear,
            canvas: CanvasSize::Outer,
        }
    }
}

/// Result of the measuring phase; everything the drawing phase needs.
#[derive(Clone, Debug, PartialEq)]
pub struct Layout {
    pub canvas_width: f64,
    pub canvas_height: f64,
    pub insets: Insets,
    /// Drawable rectangle anchored at its bottom-left corner (`h < 0`).
    pub rect: Rect,
    pub axes: Axes,
    pub projection: Projection,
    /// Space taken by the x tick labels below the frame.
    pub x_tick_space: f64,
    /// Space taken by the y tick labels left of the frame.
    pub y_tick_space: f64,
}

struct Faces<F> {
    title: F,
    label: F,
    tick: F,
}

impl<F: FontFace> Faces<F> {
    fn new<T: Font<Face = F> + ?Sized>(font: &T, opts: &PlotOptions) -> Self {
        Self {
            title: font.face(opts.title_font_size),
            label: font.face(opts.label_font_size),
            tick: font.face(opts.tick_font_size),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct Plot {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub options: PlotOptions,
    lines: Vec<Line>,
}

impl Plot {
    pub fn new(title: impl Into<String>) -> Self {
        Self { title: title.into(), ..Self::default() }
    }

    pub fn with_labels(mut self, x_label: impl Into<String>, y_label: impl Into<String>) -> Self {
        self.x_label = x_label.into();
        self.y_label = y_label.into();
        self
    }

    pub fn with_options(mut self, options: PlotOptions) -> Self {
        self.options = options;
        self
    }

    pub fn add(&mut self, line: Line) {
        self.lines.push(line);
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Merged data ranges of all series, before any axis adjustment.
    pub fn data_ranges(&self) -> (Range, Range) {
        self.lines.iter().map(Line::ranges).fold((Range::EMPTY, Range::EMPTY), |(ax, ay), (x, y)| {
            (ax.merge(x), ay.merge(y))
        })
    }

    fn axis_ranges(&self) -> Result<(Range, Range)> {
        let (x, mut y) = self.data_ranges();
        if x.is_empty() || y.is_empty() {
            return Err(ChartError::NoData);
        }
        for r in [x, y] {
            if !r.is_finite() {
                return Err(ChartError::InvalidRange { min: r.min, max: r.max });
            }
        }
        if self.options.anchor_y_at_zero {
            y.min = y.min.min(0.0);
        }
        y.max += self.options.y_headroom * y.width();
        Ok((x.widened(), y.widened()))
    }

    /// Measure everything and fix the drawable rectangle and projection.
    pub fn layout<F: Font + ?Sized>(&self, font: &F, width: f64, height: f64) -> Result<Layout> {
        let faces = Faces::new(font, &self.options);
        self.layout_with(&faces, width, height)
    }

    fn layout_with<F: FontFace>(&self, faces: &Faces<F>, width: f64, height: f64) -> Result<Layout> {
        let opts = &self.options;
        let (x_range, y_range) = self.axis_ranges()?;
        let axes = Axes::new(x_range, opts.x_scale, y_range, opts.y_scale, &opts.axis)?;

        let x_tick_space = axes.x.label_space(&faces.tick)?;
        let y_tick_space = axes.y.label_space(&faces.tick)?;

        let mut insets = Insets::uniform(opts.margin);
        if !self.title.is_empty() {
            insets.top += faces.title.line_height() + opts.title_padding;
        }
        insets.bottom += x_tick_space;
        if !self.x_label.is_empty() {
            insets.bottom += faces.label.line_height() + opts.label_padding;
        }
        insets.left += y_tick_space;
        if !self.y_label.is_empty() {
            // the y label is drawn unrotated, so its column is as wide as the text
            insets.left += faces.label.text_width(&self.y_label) + opts.label_padding;
        }

        let (canvas_width, canvas_height) = match opts.canvas {
            CanvasSize::Outer => (width, height),
            CanvasSize::Inner => (width + insets.hsum(), height + insets.vsum()),
        };
        let inner_w = canvas_width - insets.hsum();
        let inner_h = canvas_height - insets.vsum();
        for extent in [inner_w, inner_h] {
            if !(extent > 0.0) {
                warn!(inner_w, inner_h, "margins leave no drawable area");
                return Err(ChartError::InvalidRange { min: 0.0, max: extent });
            }
        }
        let rect = Rect::new(insets.left, canvas_height - insets.bottom, inner_w, -inner_h);
        let projection = Projection::from_rect(&rect, axes.x.range, axes.y.range)?;

        debug!(
            left = insets.left,
            right = insets.right,
            top = insets.top,
            bottom = insets.bottom,
            inner_w,
            inner_h,
            "plot layout"
        );
        Ok(Layout { canvas_width, canvas_height, insets, rect, axes, projection, x_tick_space, y_tick_space })
    }

    /// Lay out and render the plot onto `surface`.
    ///
    /// Every failure is detected during layout, before the surface is opened.
    pub fn draw<S, F>(&self, surface: &mut S, font: &F, width: f64, height: f64) -> Result<Layout>
    where
        S: Surface + ?Sized,
        F: Font<Face = S::Face> + ?Sized,
    {
        let faces = Faces::new(font, &self.options);
        let layout = self.layout_with(&faces, width, height)?;
        let opts = &self.options;
        let rect = layout.rect;
        let canvas = Projection::IDENTITY;

        surface.open(layout.canvas_width, layout.canvas_height);
        layout.axes.draw(surface, &layout.projection, &faces.tick)?;

        if !self.title.is_empty() {
            Label::new(&faces.title, self.title.as_str(), layout.canvas_width / 2.0, opts.margin)
                .align(HAlign::Center, VAlign::Top)
                .draw(surface, &canvas)?;
        }
        if !self.x_label.is_empty() {
            let y = rect.y + layout.x_tick_space + opts.label_padding;
            Label::new(&faces.label, self.x_label.as_str(), rect.center_x(), y)
                .align(HAlign::Center, VAlign::Top)
                .draw(surface, &canvas)?;
        }
        if !self.y_label.is_empty() {
            Label::new(&faces.label, self.y_label.as_str(), opts.margin, rect.center_y())
                .align(HAlign::Left, VAlign::Middle)
                .draw(surface, &canvas)?;
        }

        for line in &self.lines {
            line.draw(surface, &layout.projection);
        }
        Ok(layout)
    }
}
