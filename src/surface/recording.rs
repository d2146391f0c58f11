use std::fmt;

use super::{FontMetrics, Paint, PaintStyle, Surface, TransformStack};
use crate::color;
use crate::geometry::RectF;

/// Ascent/descent per unit of text size, close to a typical sans-serif face.
const ASCENT_RATIO: f32 = -0.928;
const DESCENT_RATIO: f32 = 0.244;

/// One recorded draw call, in surface coordinates (translation already applied).
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    Rect { rect: RectF, paint: Paint },
    RoundRect { rect: RectF, rx: f32, ry: f32, paint: Paint },
    Oval { rect: RectF, paint: Paint },
    Text { text: String, x: f32, y: f32, paint: Paint },
}

impl DrawOp {
    pub fn paint(&self) -> &Paint {
        match self {
            DrawOp::Rect { paint, .. }
            | DrawOp::RoundRect { paint, .. }
            | DrawOp::Oval { paint, .. }
            | DrawOp::Text { paint, .. } => paint,
        }
    }

    pub fn is_stroke(&self) -> bool {
        self.paint().style == PaintStyle::Stroke
    }
}

impl fmt::Display for DrawOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let style = match self.paint().style {
            PaintStyle::Fill => "fill".to_string(),
            PaintStyle::Stroke => format!("stroke({})", self.paint().stroke_width),
        };
        let hex = color::to_hex(self.paint().effective_color());
        match self {
            DrawOp::Rect { rect, .. } => write!(f, "rect {} {style} {hex}", fmt_rect(rect)),
            DrawOp::RoundRect { rect, rx, ry, .. } => {
                write!(f, "round-rect {} r=({rx},{ry}) {style} {hex}", fmt_rect(rect))
            }
            DrawOp::Oval { rect, .. } => write!(f, "oval {} {style} {hex}", fmt_rect(rect)),
            DrawOp::Text { text, x, y, paint } => write!(
                f,
                "text {text:?} at ({x},{y}) size={} bold={} font={} {hex}",
                paint.text_size, paint.fake_bold, paint.typeface.family
            ),
        }
    }
}

fn fmt_rect(rect: &RectF) -> String {
    format!(
        "[{},{} - {},{}]",
        rect.left, rect.top, rect.right, rect.bottom
    )
}

/// A surface that keeps every draw call instead of painting it.
#[derive(Clone, Debug)]
pub struct RecordingSurface {
    ops: Vec<DrawOp>,
    transforms: TransformStack,
    ascent_ratio: f32,
    descent_ratio: f32,
}

impl Default for RecordingSurface {
    fn default() -> Self {
        Self::with_metrics(ASCENT_RATIO, DESCENT_RATIO)
    }
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_metrics(ascent_ratio: f32, descent_ratio: f32) -> Self {
        Self {
            ops: Vec::new(),
            transforms: TransformStack::default(),
            ascent_ratio,
            descent_ratio,
        }
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    pub fn into_ops(self) -> Vec<DrawOp> {
        self.ops
    }

    pub fn clear(&mut self) {
        self.ops.clear();
    }
}

impl Surface for RecordingSurface {
    fn draw_rect(&mut self, rect: RectF, paint: &Paint) {
        let rect = self.transforms.map(rect);
        self.ops.push(DrawOp::Rect {
            rect,
            paint: paint.clone(),
        });
    }

    fn draw_round_rect(&mut self, rect: RectF, rx: f32, ry: f32, paint: &Paint) {
        let rect = self.transforms.map(rect);
        self.ops.push(DrawOp::RoundRect {
            rect,
            rx,
            ry,
            paint: paint.clone(),
        });
    }

    fn draw_oval(&mut self, rect: RectF, paint: &Paint) {
        let rect = self.transforms.map(rect);
        self.ops.push(DrawOp::Oval {
            rect,
            paint: paint.clone(),
        });
    }

    fn draw_text(&mut self, text: &str, x: f32, y: f32, paint: &Paint) {
        let (dx, dy) = self.transforms.current();
        self.ops.push(DrawOp::Text {
            text: text.to_string(),
            x: x + dx,
            y: y + dy,
            paint: paint.clone(),
        });
    }

    fn font_metrics(&self, paint: &Paint) -> FontMetrics {
        FontMetrics {
            ascent: paint.text_size * self.ascent_ratio,
            descent: paint.text_size * self.descent_ratio,
        }
    }

    fn save(&mut self) -> usize {
        self.transforms.save()
    }

    fn translate(&mut self, dx: f32, dy: f32) {
        self.transforms.translate(dx, dy);
    }

    fn restore_to_count(&mut self, count: usize) {
        self.transforms.restore_to_count(count);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_translated_coordinates() {
        let mut surface = RecordingSurface::new();
        let count = surface.save();
        surface.translate(10.0, 20.0);
        surface.draw_rect(RectF::new(0.0, 0.0, 5.0, 5.0), &Paint::fill(color::GRAY));
        surface.restore_to_count(count);
        surface.draw_oval(RectF::new(0.0, 0.0, 5.0, 5.0), &Paint::fill(color::GRAY));

        assert_eq!(
            surface.ops()[0],
            DrawOp::Rect {
                rect: RectF::new(10.0, 20.0, 15.0, 25.0),
                paint: Paint::fill(color::GRAY),
            }
        );
        assert!(matches!(
            surface.ops()[1],
            DrawOp::Oval { rect, .. } if rect == RectF::new(0.0, 0.0, 5.0, 5.0)
        ));
    }

    #[test]
    fn metrics_scale_with_text_size() {
        let surface = RecordingSurface::with_metrics(-1.0, 0.5);
        let paint = Paint {
            text_size: 20.0,
            ..Paint::default()
        };
        assert_eq!(
            surface.font_metrics(&paint),
            FontMetrics {
                ascent: -20.0,
                descent: 10.0
            }
        );
    }

    #[test]
    fn display_is_readable() {
        let op = DrawOp::Rect {
            rect: RectF::new(2.0, 2.0, 98.0, 98.0),
            paint: Paint::stroke(0xff7a7a7a, 4.0),
        };
        assert_eq!(op.to_string(), "rect [2,2 - 98,98] stroke(4) #7A7A7A");
    }
}
