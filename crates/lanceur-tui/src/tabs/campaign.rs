//! Campaign panel: the d100 house rules.

use std::time::Instant;

use lanceur_core::dice::check::{CRITICAL_FAILURE_MIN, CRITICAL_SUCCESS_MAX};
use lanceur_core::dice::roller::{MODIFIER_MAX, MODIFIER_MIN};
use lanceur_core::{Focus, PanelId, Widget};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use super::PanelView;
use crate::shared::draw_links;

/// Campaign panel view.
pub struct CampaignView;

impl PanelView for CampaignView {
    fn draw(
        &self,
        frame: &mut Frame,
        area: Rect,
        widget: &Widget,
        _now: Instant,
    ) -> Vec<(Focus, Rect)> {
        let block = Block::default()
            .title(" Campaign ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Green));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(2)])
            .split(inner);

        let lines = vec![
            Line::from(Span::styled("Rules", Style::default().fg(Color::Yellow).bold())),
            Line::from("  Every test: 1d100 at or under skill + modifiers."),
            Line::from(format!("  Critical success: 01-{CRITICAL_SUCCESS_MAX:02}")),
            Line::from(format!("  Critical failure: {CRITICAL_FAILURE_MIN}-00")),
            Line::from(format!(
                "  Modifiers: {MODIFIER_MIN:+} (heroic) to {MODIFIER_MAX:+} (very easy)"
            )),
            Line::from(""),
            Line::from(Span::styled("Damage", Style::default().fg(Color::Yellow).bold())),
            Line::from("  Light \u{f7}10, Medium \u{f7}5, Heavy \u{f7}3, Very heavy \u{f7}2"),
        ];
        frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), chunks[0]);

        draw_links(frame, chunks[1], widget, PanelId::Campaign)
    }

    fn status_hint(&self) -> &str {
        "Alt+1..4:tabs  Tab:focus  Enter:open link  ?:help  q:quit"
    }
}
