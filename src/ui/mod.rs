mod help;
mod helpers;
mod theme;

use lettertile::color;
use lettertile::gallery::Sample;
use lettertile::label::RenderedLabel;
use lettertile::surface::TileWidget;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    prelude::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::app::{App, AppView};
use helpers::{argb_to_color, centered_fixed, clamp_name};
use theme::Theme;

/// Preview tile size in cells; 24 x 24 pixels.
const TILE_COLS: u16 = 24;
const TILE_ROWS: u16 = 12;
/// Size of each label in a row sample.
const ROW_TILE_COLS: u16 = 8;
const ROW_TILE_ROWS: u16 = 4;
const LIST_WIDTH: u16 = 34;

/// Renders the entire UI for a single frame.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(3),
        ])
        .split(area);

    let header_lines = vec![Line::from(vec![
        Span::styled(
            "  Lettertile  ",
            Style::default().fg(Color::Black).bg(Theme::brand()),
        ),
        Span::raw(" "),
        Span::styled(
            "text labels",
            Style::default()
                .fg(Theme::frame())
                .add_modifier(Modifier::BOLD),
        ),
    ])];
    let header = Paragraph::new(Text::from(header_lines))
        .alignment(Alignment::Left)
        .block(rounded_block());
    frame.render_widget(header, layout[0]);

    match app.view {
        AppView::Gallery => draw_gallery(frame, app, layout[1]),
        AppView::Help => {
            let body = Paragraph::new(help::build_help_text())
                .style(Style::default().fg(Theme::text()))
                .block(rounded_block().title(" Help "));
            frame.render_widget(body, layout[1]);
        }
    }

    let footer = Paragraph::new(Text::from(footer_line(app)))
        .alignment(Alignment::Left)
        .block(rounded_block());
    frame.render_widget(footer, layout[2]);
}

fn rounded_block() -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .style(Style::default().fg(Theme::frame()))
}

fn draw_gallery(frame: &mut Frame, app: &App, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(LIST_WIDTH), Constraint::Min(TILE_COLS + 2)])
        .split(area);

    let list = Paragraph::new(build_sample_list(app))
        .style(Style::default().fg(Theme::text()))
        .block(rounded_block().title(" Samples "));
    frame.render_widget(list, columns[0]);

    let title = app
        .selected()
        .map(|(kind, _)| format!(" {} ", kind.title()))
        .unwrap_or_default();
    let block = rounded_block().title(title);
    let inner = block.inner(columns[1]);
    frame.render_widget(block, columns[1]);

    let Some((_, sample)) = app.selected() else {
        return;
    };
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(TILE_ROWS), Constraint::Length(2)])
        .split(inner);
    let caption_label = draw_sample(frame, sample, app, rows[0]);
    if let Some(label) = caption_label {
        let caption = Paragraph::new(caption_line(label)).alignment(Alignment::Center);
        frame.render_widget(caption, rows[1]);
    }
}

/// Draws `sample` into `area` and returns the label the caption describes.
fn draw_sample<'a>(
    frame: &mut Frame,
    sample: &'a Sample,
    app: &App,
    area: Rect,
) -> Option<&'a RenderedLabel> {
    let tile = centered_fixed(TILE_COLS, TILE_ROWS, area);
    match sample {
        Sample::Single(label) => {
            frame.render_widget(TileWidget::new(label), tile);
            Some(label)
        }
        Sample::Layers(layers) => {
            frame.render_widget(
                TileWidget::layered(layers.iter().map(|layer| (&layer.label, layer.insets))),
                tile,
            );
            layers.first().map(|layer| &layer.label)
        }
        Sample::Animation(animation) => {
            let label = animation.frame_at(app.elapsed())?;
            frame.render_widget(TileWidget::new(label), tile);
            Some(label)
        }
        Sample::Row(labels) => {
            let count = labels.len() as u16;
            let row_width = count * (ROW_TILE_COLS + 1);
            let row = centered_fixed(row_width, ROW_TILE_ROWS, area);
            for (index, label) in labels.iter().enumerate() {
                let x = row.x + index as u16 * (ROW_TILE_COLS + 1);
                if x + ROW_TILE_COLS > row.x + row.width {
                    break;
                }
                frame.render_widget(
                    TileWidget::new(label),
                    Rect::new(x, row.y, ROW_TILE_COLS, row.height),
                );
            }
            labels.first()
        }
    }
}

fn build_sample_list(app: &App) -> Text<'static> {
    let lines = app
        .gallery
        .iter()
        .enumerate()
        .map(|(index, (kind, _))| {
            let selected = index == app.selected_index;
            let marker_style = if selected {
                Style::default()
                    .fg(Theme::marker())
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Theme::muted())
            };
            let name_style = if selected {
                Style::default()
                    .fg(Theme::selected())
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Theme::text())
            };
            Line::from(vec![
                Span::styled(if selected { "> " } else { "  " }, marker_style),
                Span::styled(
                    clamp_name(kind.title(), usize::from(LIST_WIDTH - 6)),
                    name_style,
                ),
            ])
        })
        .collect::<Vec<_>>();
    Text::from(lines)
}

fn caption_line(label: &RenderedLabel) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("\"{}\"  ", label.text()), Style::default().fg(Theme::text())),
        Span::styled("bg ", Style::default().fg(Theme::muted())),
        Span::styled(
            color::to_hex(label.background_color()),
            Style::default().fg(argb_to_color(label.background_color())),
        ),
        Span::styled("  text ", Style::default().fg(Theme::muted())),
        Span::styled(
            color::to_hex(label.text_color()),
            Style::default().fg(argb_to_color(label.text_color())),
        ),
    ])
}

fn footer_line(app: &App) -> Line<'static> {
    let palette = app.gallery.options().palette;
    let mut spans = vec![
        Span::styled(
            format!(" {} ", palette.name()),
            Style::default()
                .fg(Theme::title())
                .add_modifier(Modifier::BOLD),
        ),
    ];
    spans.extend(
        palette
            .generator()
            .colors()
            .iter()
            .map(|&c| Span::styled("█", Style::default().fg(argb_to_color(c)))),
    );
    let hint = app
        .status
        .clone()
        .unwrap_or_else(|| "r: reroll  p: palette  ?: help  q: quit".to_string());
    spans.push(Span::styled(format!("   {hint}"), Style::default().fg(Theme::muted())));
    Line::from(spans)
}
