//! Draw commands and the surface seam.
//!
//! The engine never touches a real canvas. It hands out `Frame`s and a
//! frontend replays them onto whatever implements `StrokeSurface`.

use glam::Vec2;

/// One connected stroke with round caps and joins.
#[derive(Clone, Debug, PartialEq)]
pub struct DrawCommand {
    pub points: Vec<Vec2>,
    pub alpha: f32,
    pub width: f32,
    /// Any CSS color string the surface understands.
    pub color: String,
}

/// Output of a single engine tick.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Frame {
    pub width: f32,
    pub height: f32,
    pub commands: Vec<DrawCommand>,
    /// Nothing should be drawn this tick: the engine is stopped or the
    /// surface is degenerate. The surface keeps its previous contents.
    pub skipped: bool,
}

impl Frame {
    pub fn skipped(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            commands: Vec::new(),
            skipped: true,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

/// Minimal polyline surface consumed by `render_frame`.
pub trait StrokeSurface {
    /// Called before every drawn frame with its logical size; implementors
    /// should make this a no-op when nothing changed.
    fn resize(&mut self, width: f32, height: f32);
    /// Clear to `background`; `"transparent"` means erase.
    fn clear(&mut self, background: &str);
    fn stroke_polyline(&mut self, cmd: &DrawCommand);
}

/// Replay a frame. Skipped frames leave the surface untouched.
pub fn render_frame<S: StrokeSurface + ?Sized>(
    surface: &mut S,
    frame: &Frame,
    background: &str,
) {
    if frame.skipped {
        return;
    }
    surface.resize(frame.width, frame.height);
    surface.clear(background);
    for cmd in &frame.commands {
        if cmd.points.len() < 2 {
            continue;
        }
        surface.stroke_polyline(cmd);
    }
}
