use crate::color::{self, Argb};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PaintStyle {
    #[default]
    Fill,
    Stroke,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FontStyle {
    #[default]
    Normal,
    Bold,
    Italic,
}

/// Font family reference. Resolution to actual glyphs is left to the surface.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Typeface {
    pub family: String,
    pub style: FontStyle,
}

impl Typeface {
    pub fn new(family: impl Into<String>, style: FontStyle) -> Self {
        Self {
            family: family.into(),
            style,
        }
    }

    pub fn sans_serif() -> Self {
        Self::new("sans-serif", FontStyle::Normal)
    }
}

impl Default for Typeface {
    fn default() -> Self {
        Self::new("sans-serif-light", FontStyle::Normal)
    }
}

/// A color transform applied when a paint's color is resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorFilter {
    /// Keep the source alpha, take RGB from the tint.
    Tint(Argb),
    /// Per channel `c * mul / 255 + add`, saturating.
    Lighting { mul: Argb, add: Argb },
}

impl ColorFilter {
    pub fn apply(self, src: Argb) -> Argb {
        match self {
            ColorFilter::Tint(tint) => color::with_alpha(tint, color::alpha(src)),
            ColorFilter::Lighting { mul, add } => {
                let channel = |c: u8, m: u8, a: u8| {
                    (u32::from(c) * u32::from(m) / 255 + u32::from(a)).min(255) as u8
                };
                color::argb(
                    color::alpha(src),
                    channel(color::red(src), color::red(mul), color::red(add)),
                    channel(color::green(src), color::green(mul), color::green(add)),
                    channel(color::blue(src), color::blue(mul), color::blue(add)),
                )
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Paint {
    pub color: Argb,
    pub style: PaintStyle,
    pub stroke_width: f32,
    pub anti_alias: bool,
    pub fake_bold: bool,
    pub typeface: Typeface,
    pub text_size: f32,
    pub text_align: TextAlign,
    pub color_filter: Option<ColorFilter>,
}

impl Default for Paint {
    fn default() -> Self {
        Self {
            color: color::BLACK,
            style: PaintStyle::Fill,
            stroke_width: 0.0,
            anti_alias: false,
            fake_bold: false,
            typeface: Typeface::default(),
            text_size: 12.0,
            text_align: TextAlign::Left,
            color_filter: None,
        }
    }
}

impl Paint {
    pub fn fill(color: Argb) -> Self {
        Self {
            color,
            ..Self::default()
        }
    }

    pub fn stroke(color: Argb, width: f32) -> Self {
        Self {
            color,
            style: PaintStyle::Stroke,
            stroke_width: width,
            ..Self::default()
        }
    }

    pub fn set_alpha(&mut self, alpha: u8) {
        self.color = color::with_alpha(self.color, alpha);
    }

    /// Color after the filter, if any.
    pub fn effective_color(&self) -> Argb {
        match self.color_filter {
            Some(filter) => filter.apply(self.color),
            None => self.color,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_alpha_keeps_rgb() {
        let mut paint = Paint::fill(0xff123456);
        paint.set_alpha(0x40);
        assert_eq!(paint.color, 0x40123456);
    }

    #[test]
    fn tint_keeps_source_alpha() {
        let mut paint = Paint::fill(0x80ffffff);
        paint.color_filter = Some(ColorFilter::Tint(0xff00ff00));
        assert_eq!(paint.effective_color(), 0x8000ff00);
    }

    #[test]
    fn lighting_saturates() {
        let filter = ColorFilter::Lighting {
            mul: 0xff808080,
            add: 0xff0000f0,
        };
        assert_eq!(filter.apply(0xffff00f8), 0xff8000ff);
    }
}
