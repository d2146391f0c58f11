/// Host drawing abstraction and the two surfaces shipped with the crate.
mod paint;
mod pixel;
mod recording;

pub use paint::{ColorFilter, FontStyle, Paint, PaintStyle, TextAlign, Typeface};
pub use pixel::{GlyphRun, PixelSurface, TileWidget};
pub use recording::{DrawOp, RecordingSurface};

use crate::geometry::RectF;

/// Vertical text extents relative to the baseline. `ascent` is negative.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FontMetrics {
    pub ascent: f32,
    pub descent: f32,
}

/// The canvas primitives a label needs from its host.
///
/// Coordinates passed to the draw calls are in the current (translated) frame.
pub trait Surface {
    fn draw_rect(&mut self, rect: RectF, paint: &Paint);

    fn draw_round_rect(&mut self, rect: RectF, rx: f32, ry: f32, paint: &Paint);

    fn draw_oval(&mut self, rect: RectF, paint: &Paint);

    /// Draw `text` with its baseline at `y`, anchored at `x` per `paint.text_align`.
    fn draw_text(&mut self, text: &str, x: f32, y: f32, paint: &Paint);

    fn font_metrics(&self, paint: &Paint) -> FontMetrics;

    /// Push the current transform. Returns the depth to pass to `restore_to_count`.
    fn save(&mut self) -> usize;

    fn translate(&mut self, dx: f32, dy: f32);

    fn restore_to_count(&mut self, count: usize);
}

/// Translation stack shared by the bundled surfaces.
#[derive(Clone, Debug)]
pub(crate) struct TransformStack {
    stack: Vec<(f32, f32)>,
}

impl Default for TransformStack {
    fn default() -> Self {
        Self {
            stack: vec![(0.0, 0.0)],
        }
    }
}

impl TransformStack {
    pub fn current(&self) -> (f32, f32) {
        self.stack.last().copied().unwrap_or((0.0, 0.0))
    }

    pub fn save(&mut self) -> usize {
        let count = self.stack.len();
        self.stack.push(self.current());
        count
    }

    pub fn translate(&mut self, dx: f32, dy: f32) {
        if let Some(top) = self.stack.last_mut() {
            top.0 += dx;
            top.1 += dy;
        }
    }

    pub fn restore_to_count(&mut self, count: usize) {
        self.stack.truncate(count.max(1));
    }

    pub fn map(&self, rect: RectF) -> RectF {
        let (dx, dy) = self.current();
        rect.offset(dx, dy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn restore_drops_nested_translations() {
        let mut transforms = TransformStack::default();
        let outer = transforms.save();
        transforms.translate(5.0, 7.0);
        transforms.save();
        transforms.translate(1.0, 1.0);
        assert_eq!(transforms.current(), (6.0, 8.0));
        transforms.restore_to_count(outer);
        assert_eq!(transforms.current(), (0.0, 0.0));
    }
}
