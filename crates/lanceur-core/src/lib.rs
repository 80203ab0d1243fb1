//! Core of Lanceur, an accessible d100 roller with tabbed navigation.
//!
//! Everything the user can see or trigger lives here, free of any terminal
//! code: the tab controller, the dice roller and its bounded history, the
//! live-region announcer, the global shortcut table, deferred timers, and
//! the optional speech and link-opening capabilities. [`Widget`] ties them
//! together and takes clicks, key chords, and clock ticks as input.

pub mod announce;
pub mod config;
pub mod dice;
pub mod error;
pub mod history;
pub mod open;
pub mod panel;
pub mod shortcut;
pub mod speech;
pub mod timer;
pub mod widget;

pub use announce::{Announcement, Announcer};
pub use config::WidgetConfig;
pub use dice::{DiceRoller, RollKind, RollResult, Verdict, WeaponClass};
pub use error::{LanceurError, LanceurResult};
pub use history::{BoundedHistory, HistoryEntry};
pub use open::{NoOpener, Opener, SystemOpener};
pub use panel::{Markup, PanelId, TabController};
pub use shortcut::{Action, Key, KeyChord, Modifiers, ShortcutRegistry};
pub use speech::{NoSpeech, Speaker, Utterance, detect_speaker};
pub use timer::{Timer, TimerQueue};
pub use widget::{ClickTarget, Focus, KeyOutcome, Widget};
