//! Panel views, their trait, and tab bar rendering.

pub mod campaign;
pub mod dice;
pub mod downloads;
pub mod home;

use std::time::Instant;

use lanceur_core::{Focus, PanelId, Widget};
use ratatui::prelude::*;

/// Trait that each panel view implements.
pub trait PanelView {
    /// Draw the panel body. Returns the clickable regions it drew.
    fn draw(
        &self,
        frame: &mut Frame,
        area: Rect,
        widget: &Widget,
        now: Instant,
    ) -> Vec<(Focus, Rect)>;

    /// Return context-sensitive status bar text.
    fn status_hint(&self) -> &str;
}

/// The view for a panel.
pub fn view(panel: PanelId) -> &'static dyn PanelView {
    match panel {
        PanelId::Home => &home::HomeView,
        PanelId::Dice => &dice::DiceView,
        PanelId::Campaign => &campaign::CampaignView,
        PanelId::Downloads => &downloads::DownloadsView,
    }
}

/// Tab title with its shortcut digit, e.g. `[2]Dice Roller`.
fn title(index: usize, label: &str) -> String {
    format!("[{}]{label}", index + 1)
}

const DIVIDER: &str = " | ";

/// Draw the tab bar. Returns each nav button's region.
pub fn draw_tab_bar(frame: &mut Frame, widget: &Widget, area: Rect) -> Vec<(Focus, Rect)> {
    let mut spans = Vec::new();
    let mut hits = Vec::new();
    let mut x = area.x;

    for (i, button) in widget.tabs().buttons().iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(DIVIDER, Style::default().fg(Color::DarkGray)));
            x = x.saturating_add(DIVIDER.len() as u16);
        }

        let mut style = if button.active {
            Style::default().fg(Color::White).bold()
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let focus = Focus::NavButton(button.target);
        if widget.focus() == focus {
            style = style.underlined().fg(Color::Yellow);
        }

        let text = title(i, &button.label);
        let width = text.chars().count() as u16;
        hits.push((focus, Rect::new(x, area.y, width, 1).intersection(area)));
        x = x.saturating_add(width);
        spans.push(Span::styled(text, style));
    }

    frame.render_widget(ratatui::widgets::Paragraph::new(Line::from(spans)), area);
    hits
}

#[cfg(test)]
pub(crate) mod test_support {
    use lanceur_core::{Markup, NoSpeech, Widget, WidgetConfig};
    use ratatui::buffer::Buffer;

    pub fn widget() -> Widget {
        Widget::new(
            &Markup::standard(),
            &WidgetConfig::default().with_seed(3),
            Box::new(NoSpeech),
        )
        .unwrap()
    }

    /// Buffer contents as lines of text.
    pub fn buffer_lines(buf: &Buffer) -> Vec<String> {
        let width = buf.area.width as usize;
        buf.content()
            .chunks(width)
            .map(|row| row.iter().map(|c| c.symbol()).collect::<String>())
            .collect()
    }
}
