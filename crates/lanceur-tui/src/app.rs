//! Top-level application state around the widget.

use std::time::Instant;

use lanceur_core::{ClickTarget, Focus, Widget};
use ratatui::layout::{Position, Rect};

/// Main application state for the terminal UI.
pub struct TuiApp {
    /// The screen model.
    pub widget: Widget,
    /// Whether to show the help popup.
    pub show_help: bool,
    /// Whether the app should quit.
    pub should_quit: bool,
    /// Clickable regions from the last draw.
    pub hit_areas: Vec<(Focus, Rect)>,
}

impl TuiApp {
    /// Wrap a widget.
    pub fn new(widget: Widget) -> Self {
        Self {
            widget,
            show_help: false,
            should_quit: false,
            hit_areas: Vec::new(),
        }
    }

    /// Click whatever was drawn at a cell, focusing it like a pointer would.
    pub fn click_at(&mut self, column: u16, row: u16, now: Instant) -> bool {
        let pos = Position::new(column, row);
        let Some((focus, _)) = self
            .hit_areas
            .iter()
            .find(|(_, area)| area.contains(pos))
            .copied()
        else {
            return false;
        };
        let target = match focus {
            Focus::NavButton(panel) => ClickTarget::NavButton(panel),
            Focus::RollControl => ClickTarget::RollControl,
            Focus::Link(idx) => ClickTarget::Link(idx),
            Focus::Body => return false,
        };
        self.widget.set_focus(focus);
        self.widget.click(target, now);
        true
    }

    /// Log the roll history as JSON and tell the user.
    pub fn export_history(&mut self, now: Instant) {
        match self.widget.export_history() {
            Ok(json) => {
                tracing::info!(entries = self.widget.history().len(), "history export:\n{json}");
                self.widget
                    .announce("History written to the log.".to_string(), now);
            }
            Err(e) => tracing::warn!(error = %e, "history export failed"),
        }
    }
}
