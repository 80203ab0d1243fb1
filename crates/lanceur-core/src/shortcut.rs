//! Keyboard chords and the global shortcut table.

use crate::panel::PanelId;

/// Modifier keys held during a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Modifiers {
    /// Alt / Option.
    pub alt: bool,
    /// Control.
    pub ctrl: bool,
    /// Shift.
    pub shift: bool,
}

impl Modifiers {
    /// No modifier.
    pub const NONE: Modifiers = Modifiers {
        alt: false,
        ctrl: false,
        shift: false,
    };
    /// Alt alone.
    pub const ALT: Modifiers = Modifiers {
        alt: true,
        ctrl: false,
        shift: false,
    };
    /// Control alone.
    pub const CTRL: Modifiers = Modifiers {
        alt: false,
        ctrl: true,
        shift: false,
    };
}

/// A key, independent of the terminal library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// A printable character; space is `Char(' ')`.
    Char(char),
    /// Return.
    Enter,
    /// Tab.
    Tab,
    /// Shift+Tab.
    BackTab,
    /// Escape.
    Esc,
    /// Arrow left.
    Left,
    /// Arrow right.
    Right,
    /// Arrow up.
    Up,
    /// Arrow down.
    Down,
}

/// A key together with its modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyChord {
    /// Held modifiers.
    pub modifiers: Modifiers,
    /// The key pressed.
    pub key: Key,
}

impl KeyChord {
    /// A key with no modifier.
    pub fn plain(key: Key) -> Self {
        Self {
            modifiers: Modifiers::NONE,
            key,
        }
    }

    /// Alt plus a character.
    pub fn alt(c: char) -> Self {
        Self {
            modifiers: Modifiers::ALT,
            key: Key::Char(c),
        }
    }

    /// Control plus a character.
    pub fn ctrl(c: char) -> Self {
        Self {
            modifiers: Modifiers::CTRL,
            key: Key::Char(c),
        }
    }

    /// Whether this is an unmodified space.
    pub fn is_space(&self) -> bool {
        self.modifiers == Modifiers::NONE && self.key == Key::Char(' ')
    }

    /// Whether this is an unmodified Enter or space.
    pub fn is_activation(&self) -> bool {
        self.is_space() || (self.modifiers == Modifiers::NONE && self.key == Key::Enter)
    }
}

impl std::fmt::Display for KeyChord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.modifiers.ctrl {
            write!(f, "Ctrl+")?;
        }
        if self.modifiers.alt {
            write!(f, "Alt+")?;
        }
        if self.modifiers.shift {
            write!(f, "Shift+")?;
        }
        match self.key {
            Key::Char(' ') => write!(f, "Space"),
            Key::Char(c) => write!(f, "{c}"),
            Key::Enter => write!(f, "Enter"),
            Key::Tab => write!(f, "Tab"),
            Key::BackTab => write!(f, "Shift+Tab"),
            Key::Esc => write!(f, "Esc"),
            Key::Left => write!(f, "Left"),
            Key::Right => write!(f, "Right"),
            Key::Up => write!(f, "Up"),
            Key::Down => write!(f, "Down"),
        }
    }
}

/// What a global shortcut does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Click the nav button of a panel.
    Activate(PanelId),
}

/// A chord bound to an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Binding {
    /// The chord.
    pub chord: KeyChord,
    /// What it does.
    pub action: Action,
}

/// Global shortcuts, consulted once per key event before anything else.
#[derive(Debug, Clone, Default)]
pub struct ShortcutRegistry {
    bindings: Vec<Binding>,
}

impl ShortcutRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Alt+1..Alt+4 bound to the four panels in tab-bar order.
    pub fn standard() -> Self {
        let mut registry = Self::new();
        for (digit, panel) in ('1'..='4').zip(PanelId::ALL) {
            registry.bind(KeyChord::alt(digit), Action::Activate(panel));
        }
        registry
    }

    /// Bind `chord`, replacing any previous binding of the same chord.
    pub fn bind(&mut self, chord: KeyChord, action: Action) {
        if let Some(existing) = self.bindings.iter_mut().find(|b| b.chord == chord) {
            existing.action = action;
        } else {
            self.bindings.push(Binding { chord, action });
        }
    }

    /// The action bound to `chord`.
    pub fn lookup(&self, chord: &KeyChord) -> Option<Action> {
        self.bindings
            .iter()
            .find(|b| b.chord == *chord)
            .map(|b| b.action)
    }

    /// Bindings in the order they were made.
    pub fn entries(&self) -> &[Binding] {
        &self.bindings
    }

    /// Human-readable listing, one shortcut per line.
    ///
    /// `label` names the panel behind an [`Action::Activate`].
    pub fn describe(&self, label: impl Fn(PanelId) -> String) -> Vec<String> {
        let mut lines: Vec<String> = self
            .bindings
            .iter()
            .map(|b| match b.action {
                Action::Activate(panel) => format!("{}: {}", b.chord, label(panel)),
            })
            .collect();
        lines.push(format!(
            "{}: roll the die (on the {} tab)",
            KeyChord::plain(Key::Char(' ')),
            label(PanelId::Dice)
        ));
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_bindings() {
        let r = ShortcutRegistry::standard();
        assert_eq!(r.entries().len(), 4);
        assert_eq!(
            r.lookup(&KeyChord::alt('2')),
            Some(Action::Activate(PanelId::Dice))
        );
        assert_eq!(
            r.lookup(&KeyChord::alt('4')),
            Some(Action::Activate(PanelId::Downloads))
        );
    }

    #[test]
    fn unbound_chords() {
        let r = ShortcutRegistry::standard();
        assert_eq!(r.lookup(&KeyChord::alt('5')), None);
        assert_eq!(r.lookup(&KeyChord::alt('0')), None);
        assert_eq!(r.lookup(&KeyChord::plain(Key::Char('2'))), None);
        assert_eq!(r.lookup(&KeyChord::ctrl('2')), None);
    }

    #[test]
    fn rebinding_replaces() {
        let mut r = ShortcutRegistry::standard();
        r.bind(KeyChord::alt('1'), Action::Activate(PanelId::Dice));
        assert_eq!(r.entries().len(), 4);
        assert_eq!(
            r.lookup(&KeyChord::alt('1')),
            Some(Action::Activate(PanelId::Dice))
        );
    }

    #[test]
    fn chord_display() {
        assert_eq!(KeyChord::alt('3').to_string(), "Alt+3");
        assert_eq!(KeyChord::plain(Key::Char(' ')).to_string(), "Space");
        assert_eq!(KeyChord::ctrl('c').to_string(), "Ctrl+c");
    }

    #[test]
    fn describe_listing() {
        let r = ShortcutRegistry::standard();
        let listing = r.describe(|p| p.name().to_string()).join("\n");
        insta::assert_snapshot!(listing, @r"
        Alt+1: home
        Alt+2: dice
        Alt+3: campaign
        Alt+4: downloads
        Space: roll the die (on the dice tab)
        ");
    }
}
