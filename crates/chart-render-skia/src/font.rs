// File: crates/chart-render-skia/src/font.rs
// Summary: Typeface lookup via the system font manager; widths measured with textlayout paragraphs.

use anyhow::{anyhow, Result};
use chart_core::{Font, FontFace, FontMetrics};
use skia::textlayout::{FontCollection, ParagraphBuilder, ParagraphStyle, TextStyle};
use skia_safe as skia;

/// Families tried, in order, by [`SkiaFont::default_family`].
const FALLBACK_FAMILIES: [&str; 6] = ["Segoe UI", "Arial", "Helvetica", "Roboto", "DejaVu Sans", "sans-serif"];

/// A resolved typeface; faces at any size are derived from it.
#[derive(Clone)]
pub struct SkiaFont {
    typeface: skia::Typeface,
    fonts: FontCollection,
}

impl SkiaFont {
    /// Resolve `family` with the system font manager.
    pub fn new(family: &str) -> Result<Self> {
        let mgr = skia::FontMgr::default();
        let typeface = mgr
            .match_family_style(family, skia::FontStyle::normal())
            .ok_or_else(|| anyhow!("font family '{family}' not found"))?;
        Ok(Self::with_manager(mgr, typeface))
    }

    /// First available common sans-serif family, or the platform default typeface.
    pub fn default_family() -> Result<Self> {
        let mgr = skia::FontMgr::default();
        let typeface = FALLBACK_FAMILIES
            .iter()
            .find_map(|f| mgr.match_family_style(f, skia::FontStyle::normal()))
            .or_else(|| mgr.legacy_make_typeface(None::<&str>, skia::FontStyle::normal()))
            .ok_or_else(|| anyhow!("no usable system font"))?;
        Ok(Self::with_manager(mgr, typeface))
    }

    fn with_manager(mgr: skia::FontMgr, typeface: skia::Typeface) -> Self {
        let family = typeface.family_name();
        let mut fonts = FontCollection::new();
        fonts.set_default_font_manager(mgr, family.as_str());
        Self { typeface, fonts }
    }

    pub fn family_name(&self) -> String {
        self.typeface.family_name()
    }
}

impl Font for SkiaFont {
    type Face = SkiaFace;

    fn face(&self, size: f64) -> SkiaFace {
        let size = size.max(0.1) as f32;
        let mut font = skia::Font::from_typeface(self.typeface.clone(), size);
        font.set_subpixel(true);
        SkiaFace { font, fonts: self.fonts.clone(), family: self.family_name() }
    }
}

/// A Skia font at one size.
#[derive(Clone)]
pub struct SkiaFace {
    font: skia::Font,
    fonts: FontCollection,
    family: String,
}

impl SkiaFace {
    pub(crate) fn font(&self) -> &skia::Font {
        &self.font
    }
}

impl FontFace for SkiaFace {
    fn size(&self) -> f64 {
        self.font.size() as f64
    }

    fn metrics(&self) -> FontMetrics {
        let (line_spacing, m) = self.font.metrics();
        FontMetrics {
            line_height: line_spacing as f64,
            // skia reports ascent above the baseline as negative
            ascent: -m.ascent as f64,
            descent: m.descent as f64,
            cap_height: m.cap_height as f64,
        }
    }

    fn text_width(&self, text: &str) -> f64 {
        let mut style = TextStyle::new();
        style.set_font_size(self.font.size());
        style.set_font_families(&[self.family.as_str()]);
        let mut builder = ParagraphBuilder::new(&ParagraphStyle::new(), &self.fonts);
        builder.push_style(&style);
        builder.add_text(text);
        let mut paragraph = builder.build();
        // wide enough that labels never wrap
        paragraph.layout(10_000.0);
        paragraph.longest_line() as f64
    }
}
