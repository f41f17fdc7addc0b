// File: crates/chart-examples/src/bin/lines.rs
// Summary: Renders the seven-point reference line plot to PNG.
// Usage: example-lines [OUT.png] [OPTIONS.json]

use anyhow::{Context, Result};
use chart_core::{Line, Plot, PlotOptions};
use chart_render_skia::{SkiaFont, SkiaSurface};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn load_options(path: Option<String>) -> Result<PlotOptions> {
    let Some(path) = path else {
        return Ok(PlotOptions::default());
    };
    let text = std::fs::read_to_string(&path).with_context(|| format!("failed to read options '{path}'"))?;
    serde_json::from_str(&text).with_context(|| format!("invalid options in '{path}'"))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut args = std::env::args().skip(1);
    let out = std::path::PathBuf::from(args.next().unwrap_or_else(|| "target/out/example_lines.png".to_string()));
    let options = load_options(args.next())?;

    let mut plot = Plot::new("Example").with_labels("x", "y").with_options(options);
    plot.add(Line::new(
        vec![0.0, 10.0, 20.0, 30.0, 40.0, 50.0, 60.0],
        vec![15.0, 25.0, 40.0, 30.0, 10.0, 5.0, 5.0],
    )?);

    let font = SkiaFont::default_family()?;
    info!(family = %font.family_name(), "using font");

    let mut surface = SkiaSurface::new(8.0);
    let layout = plot.draw(&mut surface, &font, 80.0, 50.0)?;
    info!(
        canvas_width = layout.canvas_width,
        canvas_height = layout.canvas_height,
        x_ticks = ?layout.axes.x.ticks,
        y_ticks = ?layout.axes.y.ticks,
        "laid out plot"
    );

    surface.write_png(&out)?;
    info!("wrote {}", out.display());
    Ok(())
}
