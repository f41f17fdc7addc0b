// File: crates/chart-render-skia/src/lib.rs
// Summary: Skia renderer crate; raster surface with PNG output and Skia-measured font faces.

mod font;
mod surface;

pub use font::{SkiaFace, SkiaFont};
pub use surface::SkiaSurface;
