//! Downloads panel.

use std::time::Instant;

use lanceur_core::{Focus, PanelId, Widget};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use super::PanelView;
use crate::shared::draw_links;

/// Downloads panel view.
pub struct DownloadsView;

impl PanelView for DownloadsView {
    fn draw(
        &self,
        frame: &mut Frame,
        area: Rect,
        widget: &Widget,
        _now: Instant,
    ) -> Vec<(Focus, Rect)> {
        let block = Block::default()
            .title(" Downloads ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(2), Constraint::Min(0)])
            .split(inner);

        frame.render_widget(
            Paragraph::new("Printable material for the table:")
                .style(Style::default().fg(Color::DarkGray)),
            chunks[0],
        );
        draw_links(frame, chunks[1], widget, PanelId::Downloads)
    }

    fn status_hint(&self) -> &str {
        "Alt+1..4:tabs  Tab:focus  Enter:open link  ?:help  q:quit"
    }
}
