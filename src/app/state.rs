use std::time::{Duration, Instant};

use crossterm::event::KeyCode;
use lettertile::gallery::{Gallery, GalleryOptions, Sample, SampleKind};
use tracing::{debug, info};

use super::{AppEvent, AppView};

/// The top-level application state.
pub struct App {
    pub running: bool,
    pub view: AppView,
    pub gallery: Gallery,
    pub selected_index: usize,
    pub status: Option<String>,
    started: Instant,
}

impl App {
    pub fn new(options: GalleryOptions) -> Self {
        Self {
            running: true,
            view: AppView::Gallery,
            gallery: Gallery::new(options),
            selected_index: 0,
            status: None,
            started: Instant::now(),
        }
    }

    /// Time since the gallery opened; drives the animation sample.
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    pub fn selected(&self) -> Option<&(SampleKind, Sample)> {
        self.gallery.get(self.selected_index)
    }

    pub fn update(&mut self, event: AppEvent) {
        let AppEvent::KeyPress(code) = event else {
            return;
        };

        if self.view == AppView::Help {
            if matches!(code, KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')) {
                self.view = AppView::Gallery;
            }
            return;
        }

        match code {
            KeyCode::Char('q') | KeyCode::Esc => self.running = false,
            KeyCode::Char('?') => self.view = AppView::Help,
            KeyCode::Right
            | KeyCode::Down
            | KeyCode::Tab
            | KeyCode::Char('l')
            | KeyCode::Char('j') => self.select_next(),
            KeyCode::Left
            | KeyCode::Up
            | KeyCode::BackTab
            | KeyCode::Char('h')
            | KeyCode::Char('k') => self.select_prev(),
            KeyCode::Char('r') => {
                self.gallery.reroll();
                self.started = Instant::now();
                self.status = Some("New random colors".to_string());
                debug!("rerolled gallery colors");
            }
            KeyCode::Char('p') => {
                let palette = self.gallery.options().palette.toggled();
                self.gallery.set_palette(palette);
                self.status = Some(format!("Palette: {}", palette.name()));
                info!(palette = palette.name(), "switched palette");
            }
            _ => {}
        }
    }

    fn select_next(&mut self) {
        if self.gallery.is_empty() {
            return;
        }
        self.selected_index = (self.selected_index + 1) % self.gallery.len();
        self.status = None;
    }

    fn select_prev(&mut self) {
        if self.gallery.is_empty() {
            return;
        }
        if self.selected_index == 0 {
            self.selected_index = self.gallery.len() - 1;
        } else {
            self.selected_index -= 1;
        }
        self.status = None;
    }
}
