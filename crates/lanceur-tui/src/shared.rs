//! Shared utilities for panel views: layout helpers, links, live region, popups.

use lanceur_core::{Focus, PanelId, Widget};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

/// Create a centered rectangle as a percentage of the given area.
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Draw the links of `panel`, one per row. Returns their regions.
pub fn draw_links(
    frame: &mut Frame,
    area: Rect,
    widget: &Widget,
    panel: PanelId,
) -> Vec<(Focus, Rect)> {
    let mut hits = Vec::new();
    let rows = widget
        .links()
        .iter()
        .enumerate()
        .filter(|(_, link)| link.panel == panel)
        .take(area.height as usize);

    for (row, (idx, link)) in rows.enumerate() {
        let focus = Focus::Link(idx);
        let style = if widget.focus() == focus {
            Style::default().fg(Color::Black).bg(Color::Cyan).bold()
        } else {
            Style::default().fg(Color::Cyan).underlined()
        };
        let text = format!("\u{2192} {}", link.label);
        let rect = Rect::new(area.x, area.y + row as u16, text.chars().count() as u16, 1)
            .intersection(area);
        frame.render_widget(Paragraph::new(Span::styled(text, style)), rect);
        hits.push((focus, rect));
    }
    hits
}

/// Draw the live region: the newest announcement, or nothing.
///
/// The row is always reserved so announcements never move other content.
pub fn draw_live_region(frame: &mut Frame, widget: &Widget, area: Rect) {
    let Some(latest) = widget.announcer().latest() else {
        return;
    };
    let live = widget.announcer().live().len();
    let mut spans = vec![Span::styled(
        latest.message.clone(),
        Style::default().fg(Color::Green),
    )];
    if live > 1 {
        spans.push(Span::styled(
            format!("  (+{})", live - 1),
            Style::default().fg(Color::DarkGray),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Draw the help popup overlay.
pub fn draw_help_popup(frame: &mut Frame, widget: &Widget) {
    let area = centered_rect(60, 70, frame.area());

    let mut help_text = vec![
        Line::from("Keyboard Shortcuts").style(Style::default().bold()),
        Line::from(""),
        Line::from("Navigation:"),
    ];
    help_text.extend(
        widget
            .shortcut_listing()
            .into_iter()
            .map(|l| Line::from(format!("  {l}"))),
    );
    help_text.extend([
        Line::from("  Tab / S-Tab Move focus between controls"),
        Line::from("  Enter/Space Activate the focused control"),
        Line::from("  Esc         Return focus to the page"),
        Line::from(""),
        Line::from("Dice Roller:"),
        Line::from("  t           Skill test"),
        Line::from("  d           Damage roll"),
        Line::from("  m           Roll with modifier"),
        Line::from("  + / -       Skill up / down"),
        Line::from("  ] / [       Modifier up / down"),
        Line::from("  w           Next weapon class"),
        Line::from(""),
        Line::from("  x           Write history to the log"),
        Line::from("  ?           Toggle this help"),
        Line::from("  q / Ctrl+C  Quit"),
    ]);

    let popup = Paragraph::new(help_text)
        .block(
            Block::default()
                .title(" Help ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .style(Style::default().fg(Color::White));

    frame.render_widget(Clear, area);
    frame.render_widget(popup, area);
}

#[cfg(test)]
mod tests {
    use std::time::Instant;

    use super::*;
    use crate::tabs::test_support::{buffer_lines, widget};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn centered_rect_is_inside() {
        let outer = Rect::new(0, 0, 100, 50);
        let inner = centered_rect(60, 70, outer);
        assert_eq!(inner.width, 60);
        assert!(outer.contains(Position::new(inner.x, inner.y)));
    }

    #[test]
    fn live_region_shows_latest() {
        let mut w = widget();
        let now = Instant::now();
        w.announce("first".into(), now);
        w.announce("second".into(), now);
        let mut terminal = Terminal::new(TestBackend::new(40, 1)).unwrap();
        terminal
            .draw(|frame| draw_live_region(frame, &w, frame.area()))
            .unwrap();
        let line = &buffer_lines(terminal.backend().buffer())[0];
        assert!(line.starts_with("second  (+1)"), "{line:?}");
    }

    #[test]
    fn empty_live_region_draws_nothing() {
        let w = widget();
        let mut terminal = Terminal::new(TestBackend::new(20, 1)).unwrap();
        terminal
            .draw(|frame| draw_live_region(frame, &w, frame.area()))
            .unwrap();
        assert_eq!(buffer_lines(terminal.backend().buffer())[0].trim(), "");
    }
}
