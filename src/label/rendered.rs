use tracing::debug;

use super::{LabelBuilder, RenderSpec, Shape};
use crate::color::{self, Argb};
use crate::geometry::Bounds;
use crate::surface::{ColorFilter, Paint, PaintStyle, Surface, TextAlign};

/// How a drawable's pixels combine with what is under it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Opacity {
    Opaque,
    Translucent,
    Transparent,
}

/// A built label: immutable geometry and text, redrawn on demand into host bounds.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderedLabel {
    shape: Shape,
    text: String,
    width: i32,
    height: i32,
    font_size: i32,
    border_thickness: i32,
    fill_paint: Paint,
    text_paint: Paint,
    border_paint: Paint,
}

impl RenderedLabel {
    pub fn builder() -> LabelBuilder {
        LabelBuilder::new()
    }

    pub(super) fn new(spec: &RenderSpec, text: &str) -> Self {
        let text = if spec.to_upper_case {
            text.to_uppercase()
        } else {
            text.to_string()
        };

        let text_paint = Paint {
            color: spec.text_color,
            style: PaintStyle::Fill,
            stroke_width: spec.border_thickness as f32,
            anti_alias: true,
            fake_bold: spec.bold,
            typeface: spec.font.clone(),
            text_align: TextAlign::Center,
            ..Paint::default()
        };
        let border_paint = Paint::stroke(
            color::darker_shade(spec.bg_color),
            spec.border_thickness as f32,
        );

        debug!(%text, shape = ?spec.shape, border = spec.border_thickness, "built label");
        Self {
            shape: spec.shape,
            text,
            width: spec.width,
            height: spec.height,
            font_size: spec.font_size,
            border_thickness: spec.border_thickness,
            fill_paint: Paint::fill(spec.bg_color),
            text_paint,
            border_paint,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn shape(&self) -> Shape {
        self.shape
    }

    pub fn background_color(&self) -> Argb {
        self.fill_paint.color
    }

    pub fn text_color(&self) -> Argb {
        self.text_paint.color
    }

    pub fn border_color(&self) -> Argb {
        self.border_paint.color
    }

    pub fn border_thickness(&self) -> i32 {
        self.border_thickness
    }

    /// Configured width, or -1 when it follows the draw bounds.
    pub fn intrinsic_width(&self) -> i32 {
        self.width
    }

    /// Configured height, or -1 when it follows the draw bounds.
    pub fn intrinsic_height(&self) -> i32 {
        self.height
    }

    /// Text edges are antialiased, so the label never claims to be opaque.
    pub fn opacity(&self) -> Opacity {
        Opacity::Translucent
    }

    /// Applies to the text only; the shape keeps its color.
    pub fn set_alpha(&mut self, alpha: u8) {
        self.text_paint.set_alpha(alpha);
    }

    /// Applies to the text only; the shape keeps its color.
    pub fn set_color_filter(&mut self, filter: Option<ColorFilter>) {
        self.text_paint.color_filter = filter;
    }

    /// Paint the shape, optional border and centred text into `bounds`.
    pub fn draw(&self, surface: &mut dyn Surface, bounds: Bounds) {
        self.shape.paint(surface, bounds.to_rect_f(), &self.fill_paint);

        if self.border_thickness > 0 {
            self.draw_border(surface, bounds);
        }

        let count = surface.save();
        surface.translate(bounds.left as f32, bounds.top as f32);

        let width = if self.width < 0 { bounds.width() } else { self.width };
        let height = if self.height < 0 { bounds.height() } else { self.height };
        let font_size = if self.font_size < 0 {
            width.min(height) / 2
        } else {
            self.font_size
        };

        let paint = Paint {
            text_size: font_size as f32,
            ..self.text_paint.clone()
        };
        let metrics = surface.font_metrics(&paint);
        surface.draw_text(
            &self.text,
            (width / 2) as f32,
            (height / 2) as f32 - (metrics.descent + metrics.ascent) / 2.0,
            &paint,
        );

        surface.restore_to_count(count);
    }

    fn draw_border(&self, surface: &mut dyn Surface, bounds: Bounds) {
        let half = (self.border_thickness / 2) as f32;
        let rect = bounds.to_rect_f().inset(half, half);
        self.shape.paint(surface, rect, &self.border_paint);
    }
}
