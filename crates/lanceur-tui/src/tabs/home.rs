//! Home panel: welcome text and shortcut summary.

use std::time::Instant;

use lanceur_core::{Focus, Widget};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use super::PanelView;

/// Home panel view.
pub struct HomeView;

impl PanelView for HomeView {
    fn draw(
        &self,
        frame: &mut Frame,
        area: Rect,
        widget: &Widget,
        _now: Instant,
    ) -> Vec<(Focus, Rect)> {
        let block = Block::default()
            .title(" Home ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Blue));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let mut lines = vec![
            Line::from(Span::styled(
                "Accessible d100 roller",
                Style::default().fg(Color::Yellow).bold(),
            )),
            Line::from(""),
            Line::from("Every control works from the keyboard. Results are announced"),
            Line::from("on the line under the panel and, when a speech engine is"),
            Line::from("installed, read aloud."),
            Line::from(""),
        ];

        let speech = if widget.speech_available() {
            Span::styled("Speech: on", Style::default().fg(Color::Green))
        } else {
            Span::styled("Speech: off (text only)", Style::default().fg(Color::DarkGray))
        };
        lines.push(Line::from(speech));
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Shortcuts",
            Style::default().fg(Color::DarkGray),
        )));
        lines.extend(
            widget
                .shortcut_listing()
                .into_iter()
                .map(|l| Line::from(format!("  {l}"))),
        );

        frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
        Vec::new()
    }

    fn status_hint(&self) -> &str {
        "Alt+1..4:tabs  Tab:focus  Enter/Space:activate  ?:help  q:quit"
    }
}
