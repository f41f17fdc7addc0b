// File: crates/chart-render-skia/src/surface.rs
// Summary: CPU raster surface implementing chart-core's Surface; encodes PNG.

use anyhow::{anyhow, Context, Result};
use chart_core::{LineCap, LineJoin, PathSegment, StrokedPath, Surface};
use skia_safe as skia;
use tracing::warn;

use crate::font::SkiaFace;

/// Raster surface; canvas units are scaled by `pixels_per_unit`.
pub struct SkiaSurface {
    pixels_per_unit: f32,
    background: skia::Color,
    ink: skia::Color,
    surface: Option<skia::Surface>,
}

impl SkiaSurface {
    pub fn new(pixels_per_unit: f32) -> Self {
        Self {
            pixels_per_unit: pixels_per_unit.max(0.01),
            background: skia::Color::WHITE,
            ink: skia::Color::BLACK,
            surface: None,
        }
    }

    pub fn with_colors(mut self, background: skia::Color, ink: skia::Color) -> Self {
        self.background = background;
        self.ink = ink;
        self
    }

    /// Pixel dimensions of the opened canvas.
    pub fn dimensions(&self) -> Option<(i32, i32)> {
        self.surface.as_ref().map(|s| (s.width(), s.height()))
    }

    fn canvas(&mut self) -> Option<&skia::Canvas> {
        if self.surface.is_none() {
            warn!("drawing into a surface that was never opened");
        }
        self.surface.as_mut().map(|s| s.canvas())
    }

    fn stroke_paint(&self, path: &StrokedPath) -> skia::Paint {
        let style = path.style();
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        paint.set_color(self.ink);
        paint.set_style(skia::paint::Style::Stroke);
        paint.set_stroke_width(style.width as f32);
        paint.set_stroke_cap(match style.cap {
            LineCap::Butt => skia::paint::Cap::Butt,
            LineCap::Round => skia::paint::Cap::Round,
            LineCap::Square => skia::paint::Cap::Square,
        });
        paint.set_stroke_join(match style.join {
            LineJoin::Miter => skia::paint::Join::Miter,
            LineJoin::Round => skia::paint::Join::Round,
            LineJoin::Bevel => skia::paint::Join::Bevel,
        });
        paint.set_stroke_miter(style.miter_limit as f32);
        paint
    }

    /// Encode the current canvas as PNG.
    pub fn png_bytes(&mut self) -> Result<Vec<u8>> {
        let surface = self.surface.as_mut().ok_or_else(|| anyhow!("surface was never opened"))?;
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Encode as PNG and write to `path`, creating parent directories.
    pub fn write_png(&mut self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let path = path.as_ref();
        let bytes = self.png_bytes()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, bytes).with_context(|| format!("failed to write '{}'", path.display()))?;
        Ok(())
    }
}

fn to_skia_path(path: &StrokedPath) -> skia::Path {
    let mut p = skia::Path::new();
    for seg in path.path().segments() {
        match *seg {
            PathSegment::MoveTo(x, y) => {
                p.move_to((x as f32, y as f32));
            }
            PathSegment::LineTo(x, y) => {
                p.line_to((x as f32, y as f32));
            }
            PathSegment::Close => {
                p.close();
            }
        }
    }
    p
}

impl Surface for SkiaSurface {
    type Face = SkiaFace;

    fn open(&mut self, width: f64, height: f64) {
        let s = self.pixels_per_unit;
        let w = ((width as f32 * s).ceil() as i32).max(1);
        let h = ((height as f32 * s).ceil() as i32).max(1);
        self.surface = skia::surfaces::raster_n32_premul((w, h));
        let background = self.background;
        match self.surface.as_mut() {
            Some(surface) => {
                let canvas = surface.canvas();
                canvas.clear(background);
                canvas.scale((s, s));
            }
            None => warn!(w, h, "failed to create raster surface"),
        }
    }

    fn draw_path(&mut self, x: f64, y: f64, path: &StrokedPath) {
        let paint = self.stroke_paint(path);
        let sk_path = to_skia_path(path);
        if let Some(canvas) = self.canvas() {
            canvas.save();
            canvas.translate((x as f32, y as f32));
            canvas.draw_path(&sk_path, &paint);
            canvas.restore();
        }
    }

    fn draw_text(&mut self, x: f64, y: f64, face: &SkiaFace, text: &str) {
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        paint.set_color(self.ink);
        if let Some(canvas) = self.canvas() {
            canvas.draw_str(text, (x as f32, y as f32), face.font(), &paint);
        }
    }
}
