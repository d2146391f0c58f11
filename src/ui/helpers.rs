use lettertile::color::{self, Argb};
use ratatui::layout::Rect;
use ratatui::style::Color;

pub fn clamp_name(value: &str, width: usize) -> String {
    let value_len = value.chars().count();
    if value_len <= width {
        return format!("{value:<width$}", width = width);
    }
    let trimmed = value
        .chars()
        .take(width.saturating_sub(2))
        .collect::<String>();
    format!("{trimmed}..")
}

pub fn argb_to_color(value: Argb) -> Color {
    Color::Rgb(color::red(value), color::green(value), color::blue(value))
}

/// A `width` x `height` rect centred in `area`, clipped to it.
pub fn centered_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_pads_and_trims() {
        assert_eq!(clamp_name("Round", 7), "Round  ");
        assert_eq!(clamp_name("Rectangle with border", 8), "Rectan..");
    }

    #[test]
    fn centered_fixed_clips_to_area() {
        let area = Rect::new(10, 5, 30, 8);
        assert_eq!(centered_fixed(24, 12, area), Rect::new(13, 5, 24, 8));
    }

    #[test]
    fn argb_drops_alpha() {
        assert_eq!(argb_to_color(0x80f16364), Color::Rgb(0xf1, 0x63, 0x64));
    }
}
