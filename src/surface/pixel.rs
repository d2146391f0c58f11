use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier},
    widgets::Widget,
};

use super::{FontMetrics, Paint, PaintStyle, Surface, TextAlign, TransformStack};
use crate::color::{self, Argb};
use crate::geometry::{Bounds, Insets, RectF};
use crate::label::RenderedLabel;

/// A terminal cell is one pixel wide and two pixels tall.
const PIXELS_PER_ROW: u16 = 2;

#[derive(Clone, Copy)]
enum Coverage {
    Rect,
    RoundRect(f32, f32),
    Oval,
}

impl Coverage {
    fn contains(self, rect: &RectF, x: f32, y: f32) -> bool {
        match self {
            Coverage::Rect => rect.contains(x, y),
            Coverage::RoundRect(rx, ry) => rect.round_rect_contains(x, y, rx, ry),
            Coverage::Oval => rect.oval_contains(x, y),
        }
    }

    fn grown(self, by: f32) -> Self {
        match self {
            Coverage::RoundRect(rx, ry) => Coverage::RoundRect(rx + by, ry + by),
            other => other,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct GlyphRun {
    pub col: i32,
    pub row: i32,
    pub text: String,
    pub color: Argb,
    pub bold: bool,
}

/// Software rasteriser over an ARGB grid, sampled at pixel centres.
///
/// Text is not rasterised; it is kept as runs of cells to be written over the
/// shapes when the surface is blitted into a terminal buffer.
#[derive(Clone, Debug)]
pub struct PixelSurface {
    width: u16,
    height: u16,
    pixels: Vec<Argb>,
    glyphs: Vec<GlyphRun>,
    transforms: TransformStack,
}

impl PixelSurface {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; usize::from(width) * usize::from(height)],
            glyphs: Vec::new(),
            transforms: TransformStack::default(),
        }
    }

    /// A surface covering `area` of a terminal buffer.
    pub fn for_area(area: Rect) -> Self {
        Self::new(area.width, area.height * PIXELS_PER_ROW)
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::sized(i32::from(self.width), i32::from(self.height))
    }

    pub fn pixel(&self, x: u16, y: u16) -> Argb {
        if x >= self.width || y >= self.height {
            return 0;
        }
        self.pixels[usize::from(y) * usize::from(self.width) + usize::from(x)]
    }

    pub fn glyphs(&self) -> &[GlyphRun] {
        &self.glyphs
    }

    fn paint_shape(&mut self, rect: RectF, coverage: Coverage, paint: &Paint) {
        let rect = self.transforms.map(rect);
        let src = paint.effective_color();
        match paint.style {
            PaintStyle::Fill => self.cover(|x, y| coverage.contains(&rect, x, y), src),
            PaintStyle::Stroke => {
                let half = paint.stroke_width.max(1.0) / 2.0;
                let outer = rect.inset(-half, -half);
                let inner = rect.inset(half, half);
                let outer_cov = coverage.grown(half);
                let inner_cov = coverage.grown(-half);
                self.cover(
                    |x, y| outer_cov.contains(&outer, x, y) && !inner_cov.contains(&inner, x, y),
                    src,
                );
            }
        }
    }

    fn cover(&mut self, inside: impl Fn(f32, f32) -> bool, src: Argb) {
        for py in 0..self.height {
            for px in 0..self.width {
                if inside(f32::from(px) + 0.5, f32::from(py) + 0.5) {
                    let index = usize::from(py) * usize::from(self.width) + usize::from(px);
                    self.pixels[index] = blend_over(src, self.pixels[index]);
                }
            }
        }
    }

    /// Write the pixels as half blocks, then the glyph runs on top.
    pub fn blit(&self, area: Rect, buf: &mut Buffer) {
        let rows = (self.height / PIXELS_PER_ROW).min(area.height);
        let cols = self.width.min(area.width);
        for row in 0..rows {
            for col in 0..cols {
                let top = self.pixel(col, row * PIXELS_PER_ROW);
                let bottom = self.pixel(col, row * PIXELS_PER_ROW + 1);
                let Some(cell) = buf.cell_mut((area.x + col, area.y + row)) else {
                    continue;
                };
                match (color::alpha(top), color::alpha(bottom)) {
                    (0, 0) => {}
                    (_, 0) => {
                        cell.set_symbol("▀").set_fg(terminal_color(top));
                    }
                    (0, _) => {
                        cell.set_symbol("▄").set_fg(terminal_color(bottom));
                    }
                    _ => {
                        cell.set_symbol("▀")
                            .set_fg(terminal_color(top))
                            .set_bg(terminal_color(bottom));
                    }
                }
            }
        }

        for run in &self.glyphs {
            if run.row < 0 || run.row >= i32::from(rows) {
                continue;
            }
            let row = run.row as u16;
            for (offset, ch) in run.text.chars().enumerate() {
                let col = run.col + offset as i32;
                if col < 0 || col >= i32::from(cols) {
                    continue;
                }
                let col = col as u16;
                let under = self.pixel(col, row * PIXELS_PER_ROW);
                let Some(cell) = buf.cell_mut((area.x + col, area.y + row)) else {
                    continue;
                };
                cell.set_char(ch).set_fg(terminal_color(run.color));
                if color::alpha(under) != 0 {
                    cell.set_bg(terminal_color(under));
                }
                if run.bold {
                    cell.modifier.insert(Modifier::BOLD);
                }
            }
        }
    }
}

impl Surface for PixelSurface {
    fn draw_rect(&mut self, rect: RectF, paint: &Paint) {
        self.paint_shape(rect, Coverage::Rect, paint);
    }

    fn draw_round_rect(&mut self, rect: RectF, rx: f32, ry: f32, paint: &Paint) {
        self.paint_shape(rect, Coverage::RoundRect(rx, ry), paint);
    }

    fn draw_oval(&mut self, rect: RectF, paint: &Paint) {
        self.paint_shape(rect, Coverage::Oval, paint);
    }

    fn draw_text(&mut self, text: &str, x: f32, y: f32, paint: &Paint) {
        let (dx, dy) = self.transforms.current();
        let len = text.chars().count() as f32;
        let left = match paint.text_align {
            TextAlign::Left => x,
            TextAlign::Center => x - len / 2.0,
            TextAlign::Right => x - len,
        } + dx;
        let top = y + dy + self.font_metrics(paint).ascent;
        self.glyphs.push(GlyphRun {
            col: left.floor() as i32,
            row: (top / f32::from(PIXELS_PER_ROW)).floor() as i32,
            text: text.to_string(),
            color: paint.effective_color(),
            bold: paint.fake_bold,
        });
    }

    /// Every glyph is exactly one cell tall, whatever the requested size.
    fn font_metrics(&self, _paint: &Paint) -> FontMetrics {
        FontMetrics {
            ascent: -f32::from(PIXELS_PER_ROW),
            descent: 0.0,
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

/// Source-over on straight (non-premultiplied) alpha.
fn blend_over(src: Argb, dst: Argb) -> Argb {
    let sa = u32::from(color::alpha(src));
    if sa == 255 || color::alpha(dst) == 0 {
        return src;
    }
    if sa == 0 {
        return dst;
    }
    let div_round = |n: u32, d: u32| (n + d / 2) / d;
    // both weights are scaled by 255
    let src_w = sa * 255;
    let dst_w = u32::from(color::alpha(dst)) * (255 - sa);
    let out_w = src_w + dst_w;
    let mix = |s: u8, d: u8| div_round(u32::from(s) * src_w + u32::from(d) * dst_w, out_w) as u8;
    color::argb(
        div_round(out_w, 255) as u8,
        mix(color::red(src), color::red(dst)),
        mix(color::green(src), color::green(dst)),
        mix(color::blue(src), color::blue(dst)),
    )
}

/// Terminal cells have no alpha; translucency is flattened onto black.
fn terminal_color(argb: Argb) -> Color {
    let a = u32::from(color::alpha(argb));
    let scale = |c: u8| (u32::from(c) * a / 255) as u8;
    Color::Rgb(
        scale(color::red(argb)),
        scale(color::green(argb)),
        scale(color::blue(argb)),
    )
}

/// Renders one or more labels into a buffer area, each inset within it.
pub struct TileWidget<'a> {
    layers: Vec<(&'a RenderedLabel, Insets)>,
}

impl<'a> TileWidget<'a> {
    pub fn new(label: &'a RenderedLabel) -> Self {
        Self {
            layers: vec![(label, Insets::NONE)],
        }
    }

    pub fn layered(layers: impl IntoIterator<Item = (&'a RenderedLabel, Insets)>) -> Self {
        Self {
            layers: layers.into_iter().collect(),
        }
    }
}

impl Widget for TileWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut surface = PixelSurface::for_area(area);
        let bounds = surface.bounds();
        for (label, insets) in self.layers {
            label.draw(&mut surface, bounds.inset_by(insets));
        }
        surface.blit(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_rect_covers_every_pixel() {
        let mut surface = PixelSurface::new(4, 4);
        surface.draw_rect(surface.bounds().to_rect_f(), &Paint::fill(0xffff0000));
        assert!((0..4).all(|x| (0..4).all(|y| surface.pixel(x, y) == 0xffff0000)));
    }

    #[test]
    fn oval_leaves_corners_clear() {
        let mut surface = PixelSurface::new(10, 10);
        surface.draw_oval(surface.bounds().to_rect_f(), &Paint::fill(0xff00ff00));
        assert_eq!(surface.pixel(0, 0), 0);
        assert_eq!(surface.pixel(5, 5), 0xff00ff00);
    }

    #[test]
    fn stroke_leaves_interior_untouched() {
        let mut surface = PixelSurface::new(10, 10);
        surface.draw_rect(RectF::new(1.0, 1.0, 9.0, 9.0), &Paint::stroke(0xff0000ff, 2.0));
        assert_eq!(surface.pixel(0, 5), 0xff0000ff);
        assert_eq!(surface.pixel(1, 5), 0xff0000ff);
        assert_eq!(surface.pixel(5, 5), 0);
    }

    #[test]
    fn translucent_source_blends() {
        assert_eq!(blend_over(0x80ffffff, 0xff000000), 0xff808080);
        assert_eq!(blend_over(0x00ffffff, 0xff123456), 0xff123456);
    }

    #[test]
    fn translucent_over_translucent_accumulates_alpha() {
        assert_eq!(blend_over(0x80ff0000, 0x80ff0000), 0xc0ff0000);
        assert_eq!(blend_over(0x80ffffff, 0x80000000), 0xc0aaaaaa);
        assert_eq!(blend_over(0x80ffffff, 0x00123456), 0x80ffffff);
    }

    #[test]
    fn text_lands_in_cell_grid() {
        let mut surface = PixelSurface::new(10, 10);
        let paint = Paint {
            text_align: TextAlign::Center,
            ..Paint::fill(color::WHITE)
        };
        surface.draw_text("AB", 5.0, 6.0, &paint);
        assert_eq!(
            surface.glyphs()[0],
            GlyphRun {
                col: 4,
                row: 2,
                text: "AB".to_string(),
                color: color::WHITE,
                bold: false,
            }
        );
    }

    #[test]
    fn blit_writes_half_blocks() {
        let mut surface = PixelSurface::new(2, 2);
        surface.draw_rect(RectF::new(0.0, 0.0, 2.0, 1.0), &Paint::fill(0xffff0000));
        let area = Rect::new(0, 0, 2, 1);
        let mut buf = Buffer::empty(area);
        surface.blit(area, &mut buf);
        assert_eq!(buf[(0, 0)].symbol(), "▀");
        assert_eq!(buf[(0, 0)].fg, Color::Rgb(255, 0, 0));
    }
}
