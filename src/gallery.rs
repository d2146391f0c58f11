/// Showcase samples: every builder feature wired once, the way an app would.
use std::time::Duration;

use crate::color::{self, ColorGenerator, PaletteKind};
use crate::geometry::Insets;
use crate::label::RenderedLabel;
use crate::surface::Typeface;

/// Names used by the misc sample.
const NAMES: &[&str] = &["Ada", "Brian", "Chen", "Dora", "Emil", "Fatima", "Gus"];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SampleKind {
    Rect,
    RoundRect,
    Round,
    RectBorder,
    RoundRectBorder,
    RoundBorder,
    MultipleLetters,
    Font,
    Size,
    Animation,
    Misc,
}

impl SampleKind {
    pub const ALL: [SampleKind; 11] = [
        SampleKind::Rect,
        SampleKind::RoundRect,
        SampleKind::Round,
        SampleKind::RectBorder,
        SampleKind::RoundRectBorder,
        SampleKind::RoundBorder,
        SampleKind::MultipleLetters,
        SampleKind::Font,
        SampleKind::Size,
        SampleKind::Animation,
        SampleKind::Misc,
    ];

    pub fn title(self) -> &'static str {
        match self {
            SampleKind::Rect => "Rectangle",
            SampleKind::RoundRect => "Rounded rectangle",
            SampleKind::Round => "Round",
            SampleKind::RectBorder => "Rectangle with border",
            SampleKind::RoundRectBorder => "Rounded rectangle with border",
            SampleKind::RoundBorder => "Round with border",
            SampleKind::MultipleLetters => "Multiple letters",
            SampleKind::Font => "Custom font",
            SampleKind::Size => "Custom size",
            SampleKind::Animation => "Animation",
            SampleKind::Misc => "Misc",
        }
    }
}

/// A label placed inside its parent's bounds.
#[derive(Clone, Debug, PartialEq)]
pub struct Layer {
    pub label: RenderedLabel,
    pub insets: Insets,
}

/// Frames shown one after another, looping.
#[derive(Clone, Debug, PartialEq)]
pub struct Animation {
    pub frames: Vec<RenderedLabel>,
    pub frame_duration: Duration,
}

impl Animation {
    pub fn frame_at(&self, elapsed: Duration) -> Option<&RenderedLabel> {
        let frame_ms = self.frame_duration.as_millis().max(1);
        let index = (elapsed.as_millis() / frame_ms) as usize;
        self.frames.get(index % self.frames.len().max(1))
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Sample {
    Single(RenderedLabel),
    Layers(Vec<Layer>),
    Animation(Animation),
    Row(Vec<RenderedLabel>),
}

/// Sizes for the samples, in surface pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GalleryOptions {
    pub palette: PaletteKind,
    pub radius: i32,
    pub border: i32,
    /// Width the size sample splits in two.
    pub tile_width: i32,
    pub frame_duration: Duration,
}

impl Default for GalleryOptions {
    fn default() -> Self {
        Self {
            palette: PaletteKind::Default,
            radius: 6,
            border: 2,
            tile_width: 24,
            frame_duration: Duration::from_millis(1200),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Gallery {
    options: GalleryOptions,
    samples: Vec<(SampleKind, Sample)>,
}

impl Gallery {
    pub fn new(options: GalleryOptions) -> Self {
        let mut gallery = Self {
            options,
            samples: Vec::new(),
        };
        gallery.reroll();
        gallery
    }

    pub fn options(&self) -> GalleryOptions {
        self.options
    }

    /// Rebuild every sample, drawing fresh random backgrounds.
    pub fn reroll(&mut self) {
        let generator = self.options.palette.generator();
        self.samples = SampleKind::ALL
            .iter()
            .map(|&kind| (kind, build_sample(kind, generator, &self.options)))
            .collect();
    }

    pub fn set_palette(&mut self, palette: PaletteKind) {
        self.options.palette = palette;
        self.reroll();
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&(SampleKind, Sample)> {
        self.samples.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &(SampleKind, Sample)> {
        self.samples.iter()
    }
}

pub fn build_sample(
    kind: SampleKind,
    generator: &ColorGenerator,
    options: &GalleryOptions,
) -> Sample {
    let keyed = |text: &str| generator.get_color(text);
    let border = options.border;
    let radius = options.radius;
    match kind {
        SampleKind::Rect => Sample::Single(RenderedLabel::builder().build_rect(
            "A",
            keyed("A"),
            generator.get_random_color(),
        )),
        SampleKind::RoundRect => Sample::Single(RenderedLabel::builder().build_round_rect(
            "B",
            keyed("B"),
            generator.get_random_color(),
            radius,
        )),
        SampleKind::Round => Sample::Single(RenderedLabel::builder().build_round(
            "C",
            keyed("C"),
            generator.get_random_color(),
        )),
        SampleKind::RectBorder => Sample::Single(
            RenderedLabel::builder()
                .begin_config()
                .with_border(border)
                .end_config()
                .build_rect("D", keyed("D"), generator.get_random_color()),
        ),
        SampleKind::RoundRectBorder => Sample::Single(
            RenderedLabel::builder()
                .begin_config()
                .with_border(border)
                .end_config()
                .build_round_rect("E", keyed("E"), generator.get_random_color(), radius),
        ),
        SampleKind::RoundBorder => Sample::Single(
            RenderedLabel::builder()
                .begin_config()
                .with_border(border)
                .end_config()
                .build_round("F", keyed("F"), generator.get_random_color()),
        ),
        SampleKind::MultipleLetters => Sample::Single(
            RenderedLabel::builder()
                .begin_config()
                .font_size(20)
                .to_upper_case()
                .end_config()
                .build_rect("ak", keyed("AK"), generator.get_random_color()),
        ),
        SampleKind::Font => Sample::Single(
            RenderedLabel::builder()
                .begin_config()
                .use_font(Typeface::sans_serif())
                .font_size(15)
                .text_color(0xfff58559)
                .bold()
                .end_config()
                .build_rect("Bold", color::DKGRAY, generator.get_random_color()),
        ),
        SampleKind::Size => {
            let half = options.tile_width / 2;
            let builder = RenderedLabel::builder()
                .begin_config()
                .width(half - 1)
                .with_border(border)
                .end_config()
                .rect();
            let left = builder.build("I", keyed("I"), generator.get_random_color());
            let right = builder.build("J", keyed("J"), generator.get_random_color());
            Sample::Layers(vec![
                Layer {
                    label: left,
                    insets: Insets::new(0, 0, half + 1, 0),
                },
                Layer {
                    label: right,
                    insets: Insets::new(half + 1, 0, 0, 0),
                },
            ])
        }
        SampleKind::Animation => {
            let builder = RenderedLabel::builder().rect();
            let frames = (1..=10)
                .rev()
                .map(|i| {
                    builder.build(
                        &i.to_string(),
                        generator.get_random_color(),
                        generator.get_random_color(),
                    )
                })
                .collect();
            Sample::Animation(Animation {
                frames,
                frame_duration: options.frame_duration,
            })
        }
        SampleKind::Misc => Sample::Row(
            NAMES
                .iter()
                .map(|name| {
                    let initial: String = name.chars().take(1).collect();
                    RenderedLabel::builder()
                        .with_border(border)
                        .build_round(&initial, color::WHITE, keyed(*name))
                })
                .collect(),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gallery() -> Gallery {
        Gallery::new(GalleryOptions::default())
    }

    #[test]
    fn builds_every_sample_in_order() {
        let gallery = gallery();
        assert_eq!(gallery.len(), SampleKind::ALL.len());
        let kinds: Vec<_> = gallery.iter().map(|(kind, _)| *kind).collect();
        assert_eq!(kinds, SampleKind::ALL.to_vec());
    }

    #[test]
    fn text_colors_are_keyed_by_text() {
        let gallery = gallery();
        let Some((_, Sample::Single(label))) = gallery.get(0) else {
            panic!("rect sample missing");
        };
        assert_eq!(label.text_color(), color::DEFAULT.get_color("A"));
        assert!(color::DEFAULT_PALETTE.contains(&label.background_color()));
    }

    #[test]
    fn multiple_letters_are_uppercased() {
        let gallery = gallery();
        let Some((_, Sample::Single(label))) = gallery.get(6) else {
            panic!("multi-letter sample missing");
        };
        assert_eq!(label.text(), "AK");
    }

    #[test]
    fn size_sample_splits_into_two_fixed_width_layers() {
        let gallery = gallery();
        let Some((SampleKind::Size, Sample::Layers(layers))) = gallery.get(8) else {
            panic!("size sample missing");
        };
        assert_eq!(layers.len(), 2);
        assert_eq!(layers[0].label.text(), "I");
        assert_eq!(layers[1].label.text(), "J");
        assert_eq!(layers[0].label.intrinsic_width(), layers[1].label.intrinsic_width());
        assert_eq!(layers[0].insets.left, 0);
        assert_eq!(layers[1].insets.right, 0);
        assert_eq!(layers[0].label.intrinsic_width(), 11);
        assert_eq!(layers[1].insets.left, 13);
    }

    #[test]
    fn animation_counts_down_and_loops() {
        let gallery = gallery();
        let Some((_, Sample::Animation(animation))) = gallery.get(9) else {
            panic!("animation sample missing");
        };
        assert_eq!(animation.frames.len(), 10);
        let at = |ms| animation.frame_at(Duration::from_millis(ms)).map(|f| f.text().to_string());
        assert_eq!(at(0).as_deref(), Some("10"));
        assert_eq!(at(1199).as_deref(), Some("10"));
        assert_eq!(at(1200).as_deref(), Some("9"));
        assert_eq!(at(12_000).as_deref(), Some("10"));
    }

    #[test]
    fn empty_animation_has_no_frame() {
        let animation = Animation {
            frames: Vec::new(),
            frame_duration: Duration::from_millis(10),
        };
        assert!(animation.frame_at(Duration::from_secs(1)).is_none());
    }

    #[test]
    fn misc_row_uses_initials_with_keyed_backgrounds() {
        let gallery = gallery();
        let Some((_, Sample::Row(labels))) = gallery.get(10) else {
            panic!("misc sample missing");
        };
        assert_eq!(labels.len(), NAMES.len());
        assert_eq!(labels[0].text(), "A");
        assert_eq!(labels[0].background_color(), color::DEFAULT.get_color("Ada"));
    }

    #[test]
    fn switching_palette_rebuilds_from_it() {
        let mut gallery = gallery();
        gallery.set_palette(PaletteKind::Material);
        let Some((_, Sample::Single(label))) = gallery.get(2) else {
            panic!("round sample missing");
        };
        assert!(color::MATERIAL_PALETTE.contains(&label.background_color()));
        assert_eq!(gallery.options().palette, PaletteKind::Material);
    }
}
