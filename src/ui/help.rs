use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span, Text},
};

use super::theme::Theme;

pub fn build_help_text() -> Text<'static> {
    let mut lines = Vec::new();

    lines.push(Line::from(Span::styled(
        "Key bindings",
        Style::default()
            .fg(Theme::title())
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(""));

    lines.push(section_title("Global"));
    lines.extend(section_lines(&[
        "q / esc: Quit",
        "?: Toggle help",
    ]));

    lines.push(Line::from(""));
    lines.push(section_title("Gallery"));
    lines.extend(section_lines(&[
        "Up/Down, Left/Right, Tab: Move selection",
        "r: New random background colors",
        "p: Switch between default and material palette",
    ]));

    lines.push(Line::from(""));
    lines.push(section_title("Command line"));
    lines.extend(section_lines(&[
        "lettertile color <key>: Palette color for a key",
        "lettertile render <text>: Draw one label inline",
        "lettertile inspect <text>: List the draw calls for a label",
    ]));

    Text::from(lines)
}

fn section_title(title: &str) -> Line<'static> {
    Line::from(Span::styled(
        format!("  {title}"),
        Style::default()
            .fg(Theme::frame())
            .add_modifier(Modifier::BOLD),
    ))
}

fn section_lines(items: &[&str]) -> Vec<Line<'static>> {
    items
        .iter()
        .map(|item| {
            Line::from(Span::styled(
                format!("  - {item}"),
                Style::default().fg(Theme::text()),
            ))
        })
        .collect()
}
