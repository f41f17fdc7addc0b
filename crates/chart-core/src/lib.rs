// File: crates/chart-core/src/lib.rs
// Summary: Core library entry point; exports the layout, tick selection and drawing API.

pub mod axis;
pub mod error;
pub mod geometry;
pub mod plot;
pub mod projection;
pub mod range;
pub mod series;
pub mod surface;
pub mod text;
pub mod ticks;

pub use axis::{Axes, Axis, AxisStyle, Position, ScaleKind};
pub use error::{ChartError, Result};
pub use geometry::{Insets, LineCap, LineJoin, Path, PathSegment, Rect, StrokeStyle, StrokedPath};
pub use plot::{CanvasSize, Layout, Plot, PlotOptions};
pub use projection::Projection;
pub use range::Range;
pub use series::Line;
pub use surface::{DrawCommand, RecordingSurface, Surface};
pub use text::{FixedFace, FixedFont, Font, FontFace, FontMetrics, HAlign, Label, VAlign};
pub use ticks::{format_ticks, select_ticks};
