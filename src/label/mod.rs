/// Shape-backed text labels: the configuration builder and the built label.
mod rendered;

pub use rendered::{Opacity, RenderedLabel};

use serde::{Deserialize, Serialize};

use crate::color::{self, Argb};
use crate::geometry::RectF;
use crate::surface::{Paint, Surface, Typeface};

/// Width, height or font size that is resolved from the draw bounds.
pub const AUTO: i32 = -1;

/// The filled region a label is drawn on.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Shape {
    Rect,
    RoundRect { radius: f32 },
    Oval,
}

impl Shape {
    /// Paint this shape into `rect`; fill or outline depends on `paint.style`.
    pub fn paint(self, surface: &mut dyn Surface, rect: RectF, paint: &Paint) {
        match self {
            Shape::Rect => surface.draw_rect(rect, paint),
            Shape::RoundRect { radius } => surface.draw_round_rect(rect, radius, radius, paint),
            Shape::Oval => surface.draw_oval(rect, paint),
        }
    }

    pub fn kind(self) -> ShapeKind {
        match self {
            Shape::Rect => ShapeKind::Rect,
            Shape::RoundRect { .. } => ShapeKind::RoundRect,
            Shape::Oval => ShapeKind::Round,
        }
    }
}

/// Shape choice without parameters, as named in config files and on the command line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum ShapeKind {
    #[default]
    Rect,
    Round,
    RoundRect,
}

impl ShapeKind {
    pub fn with_radius(self, radius: f32) -> Shape {
        match self {
            ShapeKind::Rect => Shape::Rect,
            ShapeKind::Round => Shape::Oval,
            ShapeKind::RoundRect => Shape::RoundRect { radius },
        }
    }
}

/// Everything a label is built from apart from its text and two colors.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderSpec {
    pub shape: Shape,
    pub width: i32,
    pub height: i32,
    pub font: Typeface,
    pub font_size: i32,
    pub bold: bool,
    pub to_upper_case: bool,
    pub border_thickness: i32,
    pub text_color: Argb,
    pub bg_color: Argb,
}

impl Default for RenderSpec {
    fn default() -> Self {
        Self {
            shape: Shape::Rect,
            width: AUTO,
            height: AUTO,
            font: Typeface::default(),
            font_size: AUTO,
            bold: false,
            to_upper_case: false,
            border_thickness: 0,
            text_color: color::WHITE,
            bg_color: color::GRAY,
        }
    }
}

/// Fluent builder for [`RenderedLabel`].
///
/// `begin_config`/`end_config` only bracket the attribute setters for
/// readability; every method is available at any point. `build` borrows, so a
/// configured builder can stamp out any number of labels.
///
/// ```
/// use lettertile::label::RenderedLabel;
///
/// let label = RenderedLabel::builder()
///     .begin_config()
///     .with_border(4)
///     .to_upper_case()
///     .end_config()
///     .build_round("ak", 0xffffffff, 0xff2093cd);
/// assert_eq!(label.text(), "AK");
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LabelBuilder {
    spec: RenderSpec,
}

impl LabelBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_spec(spec: RenderSpec) -> Self {
        Self { spec }
    }

    pub fn spec(&self) -> &RenderSpec {
        &self.spec
    }

    pub fn begin_config(self) -> Self {
        self
    }

    pub fn end_config(self) -> Self {
        self
    }

    pub fn width(mut self, width: i32) -> Self {
        self.spec.width = width;
        self
    }

    pub fn height(mut self, height: i32) -> Self {
        self.spec.height = height;
        self
    }

    pub fn text_color(mut self, color: Argb) -> Self {
        self.spec.text_color = color;
        self
    }

    pub fn with_border(mut self, thickness: i32) -> Self {
        self.spec.border_thickness = thickness;
        self
    }

    pub fn use_font(mut self, font: Typeface) -> Self {
        self.spec.font = font;
        self
    }

    pub fn font_size(mut self, size: i32) -> Self {
        self.spec.font_size = size;
        self
    }

    pub fn bold(mut self) -> Self {
        self.spec.bold = true;
        self
    }

    pub fn to_upper_case(mut self) -> Self {
        self.spec.to_upper_case = true;
        self
    }

    pub fn rect(mut self) -> Self {
        self.spec.shape = Shape::Rect;
        self
    }

    pub fn round(mut self) -> Self {
        self.spec.shape = Shape::Oval;
        self
    }

    pub fn round_rect(mut self, radius: i32) -> Self {
        self.spec.shape = Shape::RoundRect {
            radius: radius as f32,
        };
        self
    }

    /// Capture the current configuration with the given text and colors.
    /// The full text is kept; only the uppercase flag transforms it.
    pub fn build(&self, text: &str, text_color: Argb, bg_color: Argb) -> RenderedLabel {
        let spec = RenderSpec {
            text_color,
            bg_color,
            ..self.spec.clone()
        };
        RenderedLabel::new(&spec, text)
    }

    pub fn build_rect(self, text: &str, text_color: Argb, bg_color: Argb) -> RenderedLabel {
        self.rect().build(text, text_color, bg_color)
    }

    pub fn build_round(self, text: &str, text_color: Argb, bg_color: Argb) -> RenderedLabel {
        self.round().build(text, text_color, bg_color)
    }

    pub fn build_round_rect(
        self,
        text: &str,
        text_color: Argb,
        bg_color: Argb,
        radius: i32,
    ) -> RenderedLabel {
        self.round_rect(radius).build(text, text_color, bg_color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_auto_sized_gray_on_white() {
        let spec = LabelBuilder::new().spec().clone();
        assert_eq!(spec.width, AUTO);
        assert_eq!(spec.height, AUTO);
        assert_eq!(spec.font_size, AUTO);
        assert_eq!(spec.bg_color, color::GRAY);
        assert_eq!(spec.text_color, color::WHITE);
        assert_eq!(spec.border_thickness, 0);
        assert_eq!(spec.font.family, "sans-serif-light");
        assert!(!spec.bold && !spec.to_upper_case);
        assert_eq!(spec.shape, Shape::Rect);
    }

    #[test]
    fn setters_chain() {
        let builder = LabelBuilder::new()
            .begin_config()
            .width(29)
            .height(40)
            .with_border(2)
            .font_size(15)
            .bold()
            .use_font(Typeface::sans_serif())
            .end_config()
            .round_rect(10);
        let spec = builder.spec();
        assert_eq!(
            (spec.width, spec.height, spec.border_thickness, spec.font_size),
            (29, 40, 2, 15)
        );
        assert!(spec.bold);
        assert_eq!(spec.font, Typeface::sans_serif());
        assert_eq!(spec.shape, Shape::RoundRect { radius: 10.0 });
    }

    #[test]
    fn build_keeps_full_text() {
        let label = LabelBuilder::new().build("Hello", color::WHITE, color::GRAY);
        assert_eq!(label.text(), "Hello");
    }

    #[test]
    fn uppercase_applies_to_whole_text() {
        let label = LabelBuilder::new()
            .to_upper_case()
            .build("abc", color::WHITE, color::GRAY);
        assert_eq!(label.text(), "ABC");
    }

    #[test]
    fn build_arguments_override_configured_colors() {
        let label = LabelBuilder::new()
            .text_color(0xfff58559)
            .build("x", color::DKGRAY, 0xff2093cd);
        assert_eq!(label.text_color(), color::DKGRAY);
        assert_eq!(label.background_color(), 0xff2093cd);
    }

    #[test]
    fn shape_shortcuts_pick_shape() {
        assert_eq!(LabelBuilder::new().build_round("a", 0, 0).shape(), Shape::Oval);
        assert_eq!(LabelBuilder::new().round().build_rect("a", 0, 0).shape(), Shape::Rect);
        assert_eq!(
            LabelBuilder::new().build_round_rect("a", 0, 0, 6).shape(),
            Shape::RoundRect { radius: 6.0 }
        );
    }

    #[test]
    fn one_builder_stamps_many_labels() {
        let builder = LabelBuilder::new().width(29).rect();
        let left = builder.build("I", 0xff000001, 0xff000002);
        let right = builder.build("J", 0xff000003, 0xff000004);
        assert_eq!(left.text(), "I");
        assert_eq!(right.text(), "J");
        assert_eq!(left.intrinsic_width(), right.intrinsic_width());
    }

    #[test]
    fn shape_kind_maps_back() {
        assert_eq!(ShapeKind::RoundRect.with_radius(3.0).kind(), ShapeKind::RoundRect);
        assert_eq!(ShapeKind::Round.with_radius(3.0), Shape::Oval);
    }
}
