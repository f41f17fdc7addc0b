// File: crates/chart-core/src/text.rs
// Summary: Font/face measurement interfaces and aligned text labels.
// Notes:
// - Vertical alignment follows the cap-height convention: a Top-aligned
//   label hangs its capitals from the anchor; Middle and Bottom shift the
//   baseline up by half / all of the measured text height.

use serde::{Deserialize, Serialize};

use crate::error::{ChartError, Result};
use crate::projection::Projection;
use crate::surface::Surface;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FontMetrics {
    pub line_height: f64,
    pub ascent: f64,
    pub descent: f64,
    pub cap_height: f64,
}

/// A font resolved at one size: metrics plus string measurement.
pub trait FontFace {
    fn size(&self) -> f64;
    fn metrics(&self) -> FontMetrics;
    fn text_width(&self, text: &str) -> f64;

    /// Width and height of `text` as laid out on one line.
    fn bbox(&self, text: &str) -> (f64, f64) {
        let m = self.metrics();
        (self.text_width(text), m.ascent + m.descent)
    }

    fn line_height(&self) -> f64 {
        self.metrics().line_height
    }
}

/// Source of faces at arbitrary sizes.
pub trait Font {
    type Face: FontFace;
    fn face(&self, size: f64) -> Self::Face;
}

/// Face with metrics proportional to its size; deterministic, no font files.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FixedFace {
    pub size: f64,
}

impl FontFace for FixedFace {
    fn size(&self) -> f64 {
        self.size
    }

    fn metrics(&self) -> FontMetrics {
        FontMetrics {
            line_height: 1.2 * self.size,
            ascent: 0.8 * self.size,
            descent: 0.2 * self.size,
            cap_height: 0.7 * self.size,
        }
    }

    fn text_width(&self, text: &str) -> f64 {
        0.6 * self.size * text.chars().count() as f64
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FixedFont;

impl Font for FixedFont {
    type Face = FixedFace;
    fn face(&self, size: f64) -> FixedFace {
        FixedFace { size }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum HAlign {
    #[default]
    Left,
    Center,
    Right,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum VAlign {
    #[default]
    Top,
    Middle,
    Bottom,
}

/// Text anchored at a data-space point, nudged by a canvas-space offset.
#[derive(Clone, Debug)]
pub struct Label<'f, F: FontFace> {
    pub face: &'f F,
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub offset: (f64, f64),
    pub rotation: f64,
    pub halign: HAlign,
    pub valign: VAlign,
}

impl<'f, F: FontFace> Label<'f, F> {
    pub fn new(face: &'f F, text: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            face,
            text: text.into(),
            x,
            y,
            offset: (0.0, 0.0),
            rotation: 0.0,
            halign: HAlign::Left,
            valign: VAlign::Top,
        }
    }

    pub fn align(mut self, halign: HAlign, valign: VAlign) -> Self {
        self.halign = halign;
        self.valign = valign;
        self
    }

    pub fn offset(mut self, dx: f64, dy: f64) -> Self {
        self.offset = (dx, dy);
        self
    }

    pub fn rotated(mut self, radians: f64) -> Self {
        self.rotation = radians;
        self
    }

    /// Baseline origin of the text on the canvas.
    pub fn resolve(&self, proj: &Projection) -> Result<(f64, f64)> {
        if self.rotation != 0.0 {
            return Err(ChartError::NotImplemented("rotated labels"));
        }
        let (w, h) = self.face.bbox(&self.text);

        let dx = match self.halign {
            HAlign::Left => 0.0,
            HAlign::Center => -w / 2.0,
            HAlign::Right => -w,
        };
        let cap = self.face.metrics().cap_height;
        let dy = match self.valign {
            VAlign::Top => cap,
            VAlign::Middle => cap - h / 2.0,
            VAlign::Bottom => cap - h,
        };

        Ok((proj.x(self.x) + self.offset.0 + dx, proj.y(self.y) + self.offset.1 + dy))
    }

    /// Draw the label. Nothing reaches the surface if it cannot be resolved.
    pub fn draw<S>(&self, surface: &mut S, proj: &Projection) -> Result<()>
    where
        S: Surface<Face = F> + ?Sized,
    {
        let (x, y) = self.resolve(proj)?;
        surface.draw_text(x, y, self.face, &self.text);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::RecordingSurface;

    const FACE: FixedFace = FixedFace { size: 10.0 };

    #[test]
    fn horizontal_alignment_uses_width() {
        // "abcd" is 24 wide with the fixed face
        let p = Projection::IDENTITY;
        let at = |h| Label::new(&FACE, "abcd", 100.0, 50.0).align(h, VAlign::Top).resolve(&p).unwrap().0;
        assert_eq!(at(HAlign::Left), 100.0);
        assert_eq!(at(HAlign::Center), 88.0);
        assert_eq!(at(HAlign::Right), 76.0);
    }

    #[test]
    fn vertical_alignment_uses_cap_height() {
        // cap 7, bbox height 10
        let p = Projection::IDENTITY;
        let at = |v| Label::new(&FACE, "x", 0.0, 50.0).align(HAlign::Left, v).resolve(&p).unwrap().1;
        assert_eq!(at(VAlign::Top), 57.0);
        assert_eq!(at(VAlign::Middle), 52.0);
        assert_eq!(at(VAlign::Bottom), 47.0);
    }

    #[test]
    fn offset_applies_after_projection() {
        let p = Projection { x_offset: 10.0, y_offset: 100.0, x_scale: 2.0, y_scale: -1.0 };
        let (x, y) = Label::new(&FACE, "", 5.0, 20.0).offset(-3.0, 4.0).resolve(&p).unwrap();
        assert_eq!((x, y), (17.0, 91.0));
    }

    #[test]
    fn rotated_label_leaves_surface_untouched() {
        let mut surface = RecordingSurface::<FixedFace>::new();
        let label = Label::new(&FACE, "tilted", 1.0, 1.0).rotated(0.5);
        let err = label.draw(&mut surface, &Projection::IDENTITY).unwrap_err();
        assert_eq!(err, ChartError::NotImplemented("rotated labels"));
        assert!(surface.commands().is_empty());
    }
}
