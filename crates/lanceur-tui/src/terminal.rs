//! Terminal setup, teardown, and main event loop.

use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
    KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use lanceur_core::{Key, KeyOutcome};
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::app::TuiApp;
use crate::error::TuiResult;
use crate::input::to_chord;
use crate::shared::{draw_help_popup, draw_live_region};
use crate::tabs;

/// Longest wait between redraws when no timer is pending.
const IDLE_POLL: Duration = Duration::from_millis(250);

/// Launch the TUI application.
pub fn run(mut app: TuiApp) -> TuiResult<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    tracing::info!(panel = %app.widget.active_panel(), "ui started");
    let result = run_loop(&mut terminal, &mut app);

    disable_raw_mode().ok();
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .ok();
    terminal.show_cursor().ok();

    tracing::info!("ui stopped");
    result
}

/// Main event loop.
///
/// Waits for input no longer than the next timer deadline, so pulse and
/// announcement timers fire on time without busy-looping.
fn run_loop<B: Backend>(terminal: &mut Terminal<B>, app: &mut TuiApp) -> TuiResult<()> {
    loop {
        let now = Instant::now();
        app.widget.tick(now);
        terminal.draw(|frame| draw(frame, app, now))?;

        if app.should_quit {
            return Ok(());
        }

        let timeout = app
            .widget
            .next_deadline(now)
            .map(|deadline| deadline.saturating_duration_since(Instant::now()))
            .unwrap_or(IDLE_POLL)
            .min(IDLE_POLL);

        if event::poll(timeout)? {
            handle_event(app, event::read()?, Instant::now());
        }
    }
}

/// Handle a crossterm event.
pub fn handle_event(app: &mut TuiApp, event: Event, now: Instant) {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(app, key, now),
        Event::Mouse(mouse) => handle_mouse(app, mouse, now),
        _ => {}
    }
}

/// Handle keyboard input: the widget first, then application keys.
fn handle_key(app: &mut TuiApp, key: KeyEvent, now: Instant) {
    // Ctrl+C always quits
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }

    let Some(chord) = to_chord(key) else {
        return;
    };

    if app.show_help {
        // Global shortcuts still apply and close the popup.
        if app.widget.shortcuts().lookup(&chord).is_some() {
            app.show_help = false;
            app.widget.key(chord, now);
        } else if matches!(chord.key, Key::Char('?') | Key::Esc | Key::Char('q')) {
            app.show_help = false;
        }
        return;
    }

    if app.widget.key(chord, now) == KeyOutcome::Handled {
        return;
    }

    match chord.key {
        Key::Char('q') => app.should_quit = true,
        Key::Char('?') => app.show_help = true,
        Key::Char('x') => app.export_history(now),
        _ => {}
    }
}

/// Handle mouse events.
fn handle_mouse(app: &mut TuiApp, mouse: MouseEvent, now: Instant) {
    if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
        if app.show_help {
            app.show_help = false;
            return;
        }
        app.click_at(mouse.column, mouse.row, now);
    }
}

/// Main draw function.
pub fn draw(frame: &mut Frame, app: &mut TuiApp, now: Instant) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Tab bar
            Constraint::Min(0),    // Panel
            Constraint::Length(1), // Live region
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    let widget = &app.widget;
    let view = tabs::view(widget.active_panel());

    let mut hits = tabs::draw_tab_bar(frame, widget, chunks[0]);
    hits.extend(view.draw(frame, chunks[1], widget, now));
    draw_live_region(frame, widget, chunks[2]);

    let status = Paragraph::new(view.status_hint())
        .style(Style::default().fg(Color::Black).bg(Color::White));
    frame.render_widget(status, chunks[3]);

    if app.show_help {
        draw_help_popup(frame, widget);
        hits.clear();
    }
    app.hit_areas = hits;
}
