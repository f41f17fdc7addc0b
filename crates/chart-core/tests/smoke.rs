// File: crates/chart-core/tests/smoke.rs
// Purpose: End-to-end draw of the reference series into a recording surface.

use chart_core::{
    CanvasSize, DrawCommand, FixedFace, FixedFont, Line, PathSegment, Plot, PlotOptions, RecordingSurface,
};

fn reference_line() -> Line {
    Line::new(
        vec![0.0, 10.0, 20.0, 30.0, 40.0, 50.0, 60.0],
        vec![15.0, 25.0, 40.0, 30.0, 10.0, 5.0, 5.0],
    )
    .expect("equal lengths")
}

fn draw(canvas: CanvasSize) -> (chart_core::Layout, RecordingSurface<FixedFace>) {
    let mut plot = Plot::new("");
    plot.options = PlotOptions { canvas, ..PlotOptions::default() };
    plot.add(reference_line());
    let mut surface = RecordingSurface::new();
    let layout = plot.draw(&mut surface, &FixedFont, 80.0, 50.0).expect("draw should succeed");
    (layout, surface)
}

#[test]
fn reference_plot_draw_commands() {
    for canvas in [CanvasSize::Inner, CanvasSize::Outer] {
        let (layout, surface) = draw(canvas);
        let cmds = surface.commands();
        assert!(matches!(cmds.first(), Some(DrawCommand::Open { .. })), "surface opened first");

        let closed = surface
            .paths()
            .filter(|p| p.path().segments().last() == Some(&PathSegment::Close))
            .count();
        assert_eq!(closed, 1, "exactly one frame rectangle");

        let nx = layout.axes.x.ticks.len();
        let ny = layout.axes.y.ticks.len();
        assert!((4..=6).contains(&nx), "x ticks {:?}", layout.axes.x.ticks);
        assert!((4..=6).contains(&ny), "y ticks {:?}", layout.axes.y.ticks);
        assert_eq!(surface.texts().count(), nx + ny);

        let last = surface.paths().last().expect("series path");
        assert_eq!(last.path().vertex_count(), 7);
        for p in surface.paths() {
            assert_eq!(p.style().width, 0.3);
        }
    }
}

#[test]
fn inner_canvas_keeps_requested_drawable_area() {
    let (layout, surface) = draw(CanvasSize::Inner);
    assert!((layout.rect.w - 80.0).abs() < 1e-9);
    assert!((layout.rect.h + 50.0).abs() < 1e-9);
    let DrawCommand::Open { width, height } = surface.commands()[0] else {
        panic!("expected open");
    };
    assert!((width - (80.0 + layout.insets.hsum())).abs() < 1e-9);
    assert!((height - (50.0 + layout.insets.vsum())).abs() < 1e-9);
}

#[test]
fn outer_canvas_is_opened_at_requested_size() {
    let (layout, surface) = draw(CanvasSize::Outer);
    assert_eq!(surface.commands()[0], DrawCommand::Open { width: 80.0, height: 50.0 });
    assert!((layout.rect.w - (80.0 - layout.insets.hsum())).abs() < 1e-9);
}

#[test]
fn reference_axes() {
    let (layout, _) = draw(CanvasSize::Inner);
    assert_eq!(layout.axes.x.ticks, vec![0.0, 20.0, 40.0, 60.0]);
    assert_eq!(layout.axes.y.ticks, vec![0.0, 10.0, 20.0, 30.0, 40.0]);
    // y anchored at zero with 10% headroom over the 40 peak
    assert_eq!(layout.axes.y.range.min, 0.0);
    assert!((layout.axes.y.range.max - 44.0).abs() < 1e-9);
}

#[test]
fn projection_maps_ranges_onto_rect_edges() {
    let (layout, _) = draw(CanvasSize::Outer);
    let p = layout.projection;
    let r = layout.rect;
    let (x0, y0) = p.point(layout.axes.x.range.min, layout.axes.y.range.min);
    let (x1, y1) = p.point(layout.axes.x.range.max, layout.axes.y.range.max);
    assert!((x0 - r.x).abs() < 1e-9 && (y0 - r.y).abs() < 1e-9);
    assert!((x1 - (r.x + r.w)).abs() < 1e-9 && (y1 - (r.y + r.h)).abs() < 1e-9);
}

#[test]
fn series_are_painted_after_axes_in_insertion_order() {
    let mut plot = Plot::new("two");
    plot.add(reference_line());
    plot.add(Line::from_points(&[(0.0, 1.0), (30.0, 2.0), (70.0, 3.0)]));
    let before = plot.lines().to_vec();

    let mut surface = RecordingSurface::<FixedFace>::new();
    plot.draw(&mut surface, &FixedFont, 120.0, 80.0).unwrap();

    let counts: Vec<_> = surface.paths().map(|p| p.path().vertex_count()).collect();
    assert_eq!(&counts[counts.len() - 2..], &[7, 3]);
    assert_eq!(plot.lines(), &before[..], "draw does not mutate the plot");
}
