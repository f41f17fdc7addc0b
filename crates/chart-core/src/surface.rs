// File: crates/chart-core/src/surface.rs
// Summary: Drawing surface interface and a recording implementation for headless layout.

use std::marker::PhantomData;

use crate::geometry::StrokedPath;
use crate::text::FontFace;

/// Vector drawing target. Coordinates are canvas units, y pointing down.
pub trait Surface {
    type Face: FontFace;

    /// Size (or resize) the canvas before anything is drawn.
    fn open(&mut self, width: f64, height: f64);

    /// Draw `path` translated by `(x, y)`.
    fn draw_path(&mut self, x: f64, y: f64, path: &StrokedPath);

    /// Draw `text` with its baseline origin at `(x, y)`.
    fn draw_text(&mut self, x: f64, y: f64, face: &Self::Face, text: &str);
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Open { width: f64, height: f64 },
    Path { x: f64, y: f64, path: StrokedPath },
    Text { x: f64, y: f64, size: f64, text: String },
}

/// Surface that keeps every command in call order.
#[derive(Clone, Debug)]
pub struct RecordingSurface<F> {
    commands: Vec<DrawCommand>,
    _face: PhantomData<fn(&F)>,
}

impl<F> RecordingSurface<F> {
    pub fn new() -> Self {
        Self { commands: Vec::new(), _face: PhantomData }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn into_commands(self) -> Vec<DrawCommand> {
        self.commands
    }

    pub fn paths(&self) -> impl Iterator<Item = &StrokedPath> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Path { path, .. } => Some(path),
            _ => None,
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

impl<F> Default for RecordingSurface<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: FontFace> Surface for RecordingSurface<F> {
    type Face = F;

    fn open(&mut self, width: f64, height: f64) {
        self.commands.push(DrawCommand::Open { width, height });
    }

    fn draw_path(&mut self, x: f64, y: f64, path: &StrokedPath) {
        self.commands.push(DrawCommand::Path { x, y, path: path.clone() });
    }

    fn draw_text(&mut self, x: f64, y: f64, face: &F, text: &str) {
        self.commands.push(DrawCommand::Text { x, y, size: face.size(), text: text.to_string() });
    }
}
