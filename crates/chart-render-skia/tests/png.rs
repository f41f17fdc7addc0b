// File: crates/chart-render-skia/tests/png.rs
// Purpose: Render the reference plot through Skia and check the decoded PNG.
// Behavior:
// - Skips (without failing) when the machine has no usable system font.

use chart_core::{CanvasSize, Line, Plot, Surface};
use chart_render_skia::{SkiaFont, SkiaSurface};

fn reference_plot() -> Plot {
    let mut plot = Plot::new("Reference").with_labels("x", "y");
    plot.add(
        Line::new(
            vec![0.0, 10.0, 20.0, 30.0, 40.0, 50.0, 60.0],
            vec![15.0, 25.0, 40.0, 30.0, 10.0, 5.0, 5.0],
        )
        .expect("equal lengths"),
    );
    plot
}

#[test]
fn renders_png_at_scaled_size() {
    let Ok(font) = SkiaFont::default_family() else {
        eprintln!("[png] no system font available; skipping");
        return;
    };
    let plot = reference_plot();
    let mut surface = SkiaSurface::new(4.0);
    plot.draw(&mut surface, &font, 80.0, 50.0).expect("draw");
    assert_eq!(surface.dimensions(), Some((320, 200)));

    let bytes = surface.png_bytes().expect("png bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
    let img = image::load_from_memory(&bytes).expect("decode").to_rgba8();
    assert_eq!((img.width(), img.height()), (320, 200));

    // background in the corner, ink somewhere on the canvas
    assert_eq!(img.get_pixel(0, 0).0, [255, 255, 255, 255]);
    assert!(img.pixels().any(|p| p.0[0] < 128));
}

#[test]
fn inner_canvas_grows_by_margins() {
    let Ok(font) = SkiaFont::default_family() else {
        eprintln!("[png] no system font available; skipping");
        return;
    };
    let mut plot = reference_plot();
    plot.options.canvas = CanvasSize::Inner;
    let mut surface = SkiaSurface::new(2.0);
    let layout = plot.draw(&mut surface, &font, 80.0, 50.0).expect("draw");
    let (w, h) = surface.dimensions().expect("opened");
    assert_eq!(w, ((layout.canvas_width * 2.0) as f32).ceil() as i32);
    assert_eq!(h, ((layout.canvas_height * 2.0) as f32).ceil() as i32);
}

#[test]
fn unopened_surface_has_no_png() {
    let mut surface = SkiaSurface::new(1.0);
    assert!(surface.png_bytes().is_err());
    surface.open(10.0, 10.0);
    assert_eq!(surface.dimensions(), Some((10, 10)));
}

#[test]
fn paragraph_widths_grow_with_text() {
    use chart_core::{Font, FontFace};
    let Ok(font) = SkiaFont::default_family() else {
        eprintln!("[png] no system font available; skipping");
        return;
    };
    let face = font.face(12.0);
    let short = face.text_width("1");
    let long = face.text_width("1000");
    assert!(short > 0.0);
    assert!(long > short * 2.0, "{short} vs {long}");
    assert!(face.metrics().cap_height > 0.0);
}
