//! The whole screen: tabs, dice roller, live region, and input dispatch.
//!
//! [`Widget`] is driven by three kinds of input, all carrying the event
//! time: [`Widget::click`], [`Widget::key`], and [`Widget::tick`]. Handlers
//! run to completion; deferred work goes through the timer queue and is
//! fired by `tick`.

use std::time::Instant;

use crate::announce::Announcer;
use crate::config::WidgetConfig;
use crate::dice::{DiceRoller, RollContext, RollKind, RollResult};
use crate::error::{LanceurError, LanceurResult};
use crate::history::{BoundedHistory, HistoryEntry};
use crate::open::{NoOpener, Opener};
use crate::panel::{Link, Markup, PanelId, TabController};
use crate::shortcut::{Action, Key, KeyChord, Modifiers, ShortcutRegistry};
use crate::speech::Speaker;
use crate::timer::{Timer, TimerQueue};

/// Where keyboard focus is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// Nothing focusable; keys go to the page.
    Body,
    /// A tab-bar button.
    NavButton(PanelId),
    /// The "Roll d100" button on the dice panel.
    RollControl,
    /// A link, by index into [`Widget::links`].
    Link(usize),
}

impl Focus {
    /// Whether the focused element is a control that handles Space itself.
    pub fn is_interactive(self) -> bool {
        !matches!(self, Focus::Body)
    }
}

/// Something that can be clicked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// A tab-bar button.
    NavButton(PanelId),
    /// The roll control.
    RollControl,
    /// A link, by index into [`Widget::links`].
    Link(usize),
}

/// Whether a key event was consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// The widget acted on the key.
    Handled,
    /// The key means nothing here.
    Ignored,
}

/// Top-level screen state.
pub struct Widget {
    tabs: TabController,
    roller: DiceRoller,
    announcer: Announcer,
    shortcuts: ShortcutRegistry,
    timers: TimerQueue,
    speaker: Box<dyn Speaker>,
    opener: Box<dyn Opener>,
    focus: Focus,
    links: Vec<Link>,
}

impl std::fmt::Debug for Widget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Widget")
            .field("active", &self.tabs.active())
            .field("focus", &self.focus)
            .field("history", &self.roller.history().len())
            .field("speech", &self.speaker.is_available())
            .finish_non_exhaustive()
    }
}

impl Widget {
    /// Build the screen from its markup.
    pub fn new(
        markup: &Markup,
        config: &WidgetConfig,
        speaker: Box<dyn Speaker>,
    ) -> LanceurResult<Self> {
        let mut tabs = TabController::from_markup(markup)?;
        if let Some(panel) = config.start_panel {
            tabs.activate(panel.name())?;
        }

        let mut links = Vec::with_capacity(markup.links.len());
        for (panel, label, target) in &markup.links {
            let panel = PanelId::from_name(panel)
                .filter(|p| tabs.panels().iter().any(|q| q.id == *p))
                .ok_or_else(|| {
                    LanceurError::Markup(format!("link '{label}' is in missing panel '{panel}'"))
                })?;
            links.push(Link {
                panel,
                label: label.clone(),
                target: target.clone(),
            });
        }

        let widget = Self {
            tabs,
            roller: DiceRoller::new(config.seed),
            announcer: Announcer::with_ttl(config.announcement_ttl),
            shortcuts: ShortcutRegistry::standard(),
            timers: TimerQueue::new(),
            speaker,
            opener: Box::new(NoOpener),
            focus: Focus::Body,
            links,
        };

        tracing::info!("keyboard shortcuts available:");
        for line in widget.shortcut_listing() {
            tracing::info!("  {line}");
        }

        Ok(widget)
    }

    /// Open links with `opener`. Without one, every link is refused.
    pub fn with_opener(mut self, opener: Box<dyn Opener>) -> Self {
        self.opener = opener;
        self
    }

    /// Label of the nav button for `panel`.
    pub fn label(&self, panel: PanelId) -> String {
        self.tabs
            .button(panel)
            .map(|b| b.label.clone())
            .unwrap_or_else(|| panel.name().to_string())
    }

    /// Human-readable list of keyboard shortcuts.
    pub fn shortcut_listing(&self) -> Vec<String> {
        self.shortcuts.describe(|p| self.label(p))
    }

    /// Show a panel by name. An unknown name is ignored.
    pub fn activate(&mut self, name: &str) -> bool {
        match self.tabs.activate(name) {
            Ok(_) => {
                self.drop_hidden_focus();
                true
            }
            Err(e) => {
                tracing::debug!(error = %e, "activation ignored");
                false
            }
        }
    }

    /// Click a control.
    pub fn click(&mut self, target: ClickTarget, now: Instant) {
        match target {
            ClickTarget::NavButton(panel) => {
                if self.activate(panel.name()) {
                    let label = self.label(panel);
                    self.announce(format!("Tab {label} activated."), now);
                }
            }
            ClickTarget::RollControl => {
                if self.tabs.is_active(PanelId::Dice) {
                    self.roll(now);
                }
            }
            ClickTarget::Link(idx) => {
                let Some(link) = self.links.get(idx) else {
                    return;
                };
                if !self.tabs.is_active(link.panel) {
                    return;
                }
                let message = match self.opener.open(&link.target) {
                    Ok(()) => {
                        tracing::info!(target = %link.target, "link opened");
                        format!("Link {} opened: {}.", link.label, link.target)
                    }
                    Err(e) => {
                        tracing::warn!(target = %link.target, error = %e, "link not opened");
                        format!("Link {} could not be opened.", link.label)
                    }
                };
                self.announce(message, now);
            }
        }
    }

    /// Handle a key press.
    ///
    /// Global shortcuts win, then the focused control, then page-level keys.
    pub fn key(&mut self, chord: KeyChord, now: Instant) -> KeyOutcome {
        if let Some(action) = self.shortcuts.lookup(&chord) {
            match action {
                Action::Activate(panel) => self.click(ClickTarget::NavButton(panel), now),
            }
            return KeyOutcome::Handled;
        }

        if chord.is_activation() {
            match self.focus {
                Focus::RollControl => {
                    self.click(ClickTarget::RollControl, now);
                    return KeyOutcome::Handled;
                }
                Focus::NavButton(panel) => {
                    self.click(ClickTarget::NavButton(panel), now);
                    return KeyOutcome::Handled;
                }
                Focus::Link(idx) => {
                    self.click(ClickTarget::Link(idx), now);
                    return KeyOutcome::Handled;
                }
                Focus::Body => {}
            }
        }

        if chord.is_space() && self.tabs.is_active(PanelId::Dice) && !self.focus.is_interactive() {
            self.click(ClickTarget::RollControl, now);
            return KeyOutcome::Handled;
        }

        match (chord.modifiers, chord.key) {
            (_, Key::Tab) if !chord.modifiers.shift => {
                self.focus_next();
                KeyOutcome::Handled
            }
            (_, Key::BackTab) => {
                self.focus_prev();
                KeyOutcome::Handled
            }
            (Modifiers::NONE, Key::Esc) => {
                self.focus = Focus::Body;
                KeyOutcome::Handled
            }
            (Modifiers::NONE, Key::Char(c)) if self.tabs.is_active(PanelId::Dice) => {
                self.dice_key(c, now)
            }
            _ => KeyOutcome::Ignored,
        }
    }

    fn dice_key(&mut self, c: char, now: Instant) -> KeyOutcome {
        use crate::dice::roller::ADJUST_STEP;

        match c {
            't' => {
                if let Err(e) = self.skill_test(now) {
                    tracing::warn!(error = %e, "skill test refused");
                }
            }
            'd' => {
                self.damage(now);
            }
            'm' => {
                self.roll_with_modifier(now);
            }
            '+' | '=' => {
                let skill = self.roller.adjust_skill(ADJUST_STEP);
                self.announce(format!("Skill {skill}."), now);
            }
            '-' => {
                let skill = self.roller.adjust_skill(-ADJUST_STEP);
                self.announce(format!("Skill {skill}."), now);
            }
            ']' => {
                let modifier = self.roller.adjust_modifier(ADJUST_STEP);
                self.announce(format!("Modifier {modifier:+}."), now);
            }
            '[' => {
                let modifier = self.roller.adjust_modifier(-ADJUST_STEP);
                self.announce(format!("Modifier {modifier:+}."), now);
            }
            'w' => {
                let weapon = self.roller.cycle_weapon();
                self.announce(format!("Weapon class {weapon}."), now);
            }
            _ => return KeyOutcome::Ignored,
        }
        KeyOutcome::Handled
    }

    /// Fire every timer due at `now`.
    pub fn tick(&mut self, now: Instant) {
        for timer in self.timers.drain_due(now) {
            match timer {
                Timer::RemoveAnnouncement(id) => {
                    self.announcer.remove(id);
                }
                Timer::ApplyPulse => self.roller.pulse_mut().apply(now),
            }
        }
    }

    /// When the screen next changes on its own.
    pub fn next_deadline(&self, now: Instant) -> Option<Instant> {
        let pulse_end = self.roller.pulse().ends_at().filter(|end| *end > now);
        match (self.timers.next_deadline(), pulse_end) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// Roll the d100.
    pub fn roll(&mut self, now: Instant) -> RollResult {
        let (roller, mut cx) = self.roll_parts(now);
        roller.roll(&mut cx)
    }

    /// Roll with the current difficulty modifier.
    pub fn roll_with_modifier(&mut self, now: Instant) -> (RollResult, RollKind) {
        let (roller, mut cx) = self.roll_parts(now);
        roller.roll_with_modifier(&mut cx)
    }

    /// Skill test with the current skill and modifier.
    pub fn skill_test(&mut self, now: Instant) -> LanceurResult<(RollResult, RollKind)> {
        let (roller, mut cx) = self.roll_parts(now);
        roller.skill_test(&mut cx)
    }

    /// Damage roll with the current weapon class.
    pub fn damage(&mut self, now: Instant) -> (RollResult, RollKind) {
        let (roller, mut cx) = self.roll_parts(now);
        roller.damage(&mut cx)
    }

    fn roll_parts(&mut self, now: Instant) -> (&mut DiceRoller, RollContext<'_>) {
        let Self {
            roller,
            announcer,
            timers,
            speaker,
            ..
        } = self;
        let cx = RollContext {
            now,
            announcer,
            timers,
            speaker: &**speaker,
        };
        (roller, cx)
    }

    /// Put a message in the live region.
    pub fn announce(&mut self, message: String, now: Instant) {
        self.announcer.announce(message, now, &mut self.timers);
    }

    /// Focusable controls on screen, in traversal order.
    pub fn focusables(&self) -> Vec<Focus> {
        let active = self.tabs.active();
        let mut order: Vec<Focus> = self
            .tabs
            .buttons()
            .iter()
            .map(|b| Focus::NavButton(b.target))
            .collect();
        if active == PanelId::Dice {
            order.push(Focus::RollControl);
        }
        order.extend(
            self.links
                .iter()
                .enumerate()
                .filter(|(_, l)| l.panel == active)
                .map(|(i, _)| Focus::Link(i)),
        );
        order
    }

    /// Move focus forward; past the last control it returns to the page.
    pub fn focus_next(&mut self) {
        let order = self.focusables();
        self.focus = match order.iter().position(|f| *f == self.focus) {
            Some(i) if i + 1 < order.len() => order[i + 1],
            Some(_) => Focus::Body,
            None => order.first().copied().unwrap_or(Focus::Body),
        };
    }

    /// Move focus backward; before the first control it returns to the page.
    pub fn focus_prev(&mut self) {
        let order = self.focusables();
        self.focus = match order.iter().position(|f| *f == self.focus) {
            Some(0) => Focus::Body,
            Some(i) => order[i - 1],
            None => order.last().copied().unwrap_or(Focus::Body),
        };
    }

    /// Put focus on a control. Controls that are not on screen are refused.
    pub fn set_focus(&mut self, focus: Focus) -> bool {
        if focus == Focus::Body || self.focusables().contains(&focus) {
            self.focus = focus;
            true
        } else {
            false
        }
    }

    fn drop_hidden_focus(&mut self) {
        if self.focus != Focus::Body && !self.focusables().contains(&self.focus) {
            self.focus = Focus::Body;
        }
    }

    /// Current focus.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// The tab controller.
    pub fn tabs(&self) -> &TabController {
        &self.tabs
    }

    /// The visible panel.
    pub fn active_panel(&self) -> PanelId {
        self.tabs.active()
    }

    /// The dice roller.
    pub fn roller(&self) -> &DiceRoller {
        &self.roller
    }

    /// Past rolls, most recent first.
    pub fn history(&self) -> &BoundedHistory<HistoryEntry> {
        self.roller.history()
    }

    /// The live region.
    pub fn announcer(&self) -> &Announcer {
        &self.announcer
    }

    /// The global shortcuts.
    pub fn shortcuts(&self) -> &ShortcutRegistry {
        &self.shortcuts
    }

    /// All links, across panels.
    pub fn links(&self) -> &[Link] {
        &self.links
    }

    /// Whether speech output is active.
    pub fn speech_available(&self) -> bool {
        self.speaker.is_available()
    }

    /// The roll history as a JSON array, most recent first.
    pub fn export_history(&self) -> serde_json::Result<String> {
        let entries: Vec<&HistoryEntry> = self.history().iter().collect();
        serde_json::to_string_pretty(&entries)
    }
}
