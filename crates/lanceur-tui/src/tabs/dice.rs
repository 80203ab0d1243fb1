//! Dice roller panel.

use std::time::Instant;

use lanceur_core::{Focus, PanelId, RollKind, Widget};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph};

use super::PanelView;
use crate::shared::draw_links;

/// Label of the roll control.
const ROLL_LABEL: &str = "[ Roll d100 ]";

/// Dice roller panel view.
pub struct DiceView;

impl PanelView for DiceView {
    fn draw(
        &self,
        frame: &mut Frame,
        area: Rect,
        widget: &Widget,
        now: Instant,
    ) -> Vec<(Focus, Rect)> {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(area);

        let hits = draw_roller(frame, columns[0], widget, now);
        draw_history(frame, columns[1], widget);
        hits
    }

    fn status_hint(&self) -> &str {
        "Space/Enter:roll  t:test  d:damage  m:modified  +/-:skill  [/]:modifier  w:weapon  ?:help"
    }
}

fn draw_roller(frame: &mut Frame, area: Rect, widget: &Widget, now: Instant) -> Vec<(Focus, Rect)> {
    let block = Block::default()
        .title(" Dice Roller ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Magenta));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height < 8 || inner.width < 20 {
        return Vec::new();
    }

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // result
            Constraint::Length(2), // verdict / detail
            Constraint::Length(2), // roll control
            Constraint::Length(2), // check settings
            Constraint::Min(0),    // links
        ])
        .split(inner);

    let roller = widget.roller();

    // Result display
    let result_style = if roller.pulse().is_visible(now) {
        Style::default().fg(Color::Black).bg(Color::Yellow).bold()
    } else {
        Style::default().fg(Color::Yellow).bold()
    };
    let result_text = roller
        .shown()
        .map(|s| format!(" {} ", s.roll))
        .unwrap_or_else(|| " -- ".to_string());
    frame.render_widget(
        Paragraph::new(vec![
            Line::from(Span::styled("Result", Style::default().fg(Color::DarkGray))),
            Line::from(Span::styled(result_text, result_style)),
        ])
        .alignment(Alignment::Center),
        rows[0],
    );

    if let Some(shown) = roller.shown() {
        let (text, color) = match shown.kind {
            RollKind::Simple => (String::new(), Color::White),
            RollKind::SkillTest { verdict, .. } => (
                shown.kind.detail().unwrap_or_default(),
                if verdict.is_success() {
                    Color::Green
                } else {
                    Color::Red
                },
            ),
            _ => (shown.kind.detail().unwrap_or_default(), Color::White),
        };
        frame.render_widget(
            Paragraph::new(Span::styled(text, Style::default().fg(color)))
                .alignment(Alignment::Center),
            rows[1],
        );
    }

    // Roll control
    let focused = widget.focus() == Focus::RollControl;
    let button_style = if focused {
        Style::default().fg(Color::Black).bg(Color::Green).bold()
    } else {
        Style::default().fg(Color::Green).bold()
    };
    let width = ROLL_LABEL.len() as u16;
    let button = Rect::new(
        rows[2].x + rows[2].width.saturating_sub(width) / 2,
        rows[2].y,
        width.min(rows[2].width),
        1,
    );
    frame.render_widget(Paragraph::new(Span::styled(ROLL_LABEL, button_style)), button);

    // Check settings
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled("Skill ", Style::default().fg(Color::DarkGray)),
            Span::styled(roller.skill().to_string(), Style::default().bold()),
            Span::styled("  Modifier ", Style::default().fg(Color::DarkGray)),
            Span::styled(format!("{:+}", roller.modifier()), Style::default().bold()),
            Span::styled("  Weapon ", Style::default().fg(Color::DarkGray)),
            Span::styled(roller.weapon().to_string(), Style::default().bold()),
        ]))
        .alignment(Alignment::Center),
        rows[3],
    );

    let mut hits = vec![(Focus::RollControl, button)];
    hits.extend(draw_links(frame, rows[4], widget, PanelId::Dice));
    hits
}

fn draw_history(frame: &mut Frame, area: Rect, widget: &Widget) {
    let history = widget.history();
    let block = Block::default()
        .title(format!(" History ({}/{}) ", history.len(), history.capacity()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    if history.is_empty() {
        frame.render_widget(
            Paragraph::new("No rolls yet.")
                .style(Style::default().fg(Color::DarkGray))
                .block(block),
            area,
        );
        return;
    }

    let items: Vec<ListItem> = history
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let style = if i == 0 {
                Style::default().fg(Color::White).bold()
            } else {
                Style::default().fg(Color::Gray)
            };
            ListItem::new(entry.to_string()).style(style)
        })
        .collect();
    frame.render_widget(List::new(items).block(block), area);
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::tabs::test_support::{buffer_lines, widget};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render(
        widget: &Widget,
        now: Instant,
    ) -> (Vec<String>, Vec<(Focus, Rect)>, Terminal<TestBackend>) {
        let mut terminal = Terminal::new(TestBackend::new(100, 20)).unwrap();
        let mut hits = Vec::new();
        terminal
            .draw(|frame| hits = DiceView.draw(frame, frame.area(), widget, now))
            .unwrap();
        let lines = buffer_lines(terminal.backend().buffer());
        (lines, hits, terminal)
    }

    #[test]
    fn empty_history_message() {
        let mut w = widget();
        w.activate("dice");
        let (lines, hits, _) = render(&w, Instant::now());
        let text = lines.join("\n");
        assert!(text.contains("No rolls yet."));
        assert!(text.contains(ROLL_LABEL));
        assert_eq!(hits[0].0, Focus::RollControl);
    }

    #[test]
    fn roll_shows_result_and_history() {
        let mut w = widget();
        let now = Instant::now();
        w.activate("dice");
        let roll = w.roll(now);
        let (lines, _, _) = render(&w, now);
        let text = lines.join("\n");
        assert!(text.contains("History (1/10)"));
        assert!(text.contains(&format!("Result: {roll}")));
        assert!(text.contains(&format!(" {roll} ")));
    }

    #[test]
    fn pulse_highlights_result() {
        let mut w = widget();
        let t0 = Instant::now();
        w.activate("dice");
        w.roll(t0);
        let t1 = t0 + Duration::from_millis(10);
        w.tick(t1);

        let (lines, _, terminal) = render(&w, t1);
        let row = lines
            .iter()
            .position(|l| l.contains("Result") && !l.contains("History"))
            .unwrap()
            + 1;
        let buf = terminal.backend().buffer();
        let highlighted = (0..buf.area.width).any(|x| buf[(x, row as u16)].bg == Color::Yellow);
        assert!(highlighted);

        let (_, _, terminal) = render(&w, t1 + Duration::from_millis(600));
        let buf = terminal.backend().buffer();
        let highlighted = (0..buf.area.width).any(|x| buf[(x, row as u16)].bg == Color::Yellow);
        assert!(!highlighted);
    }
}
