//! Integration scenarios for lanceur-core.

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use lanceur_core::history::HISTORY_CAPACITY;
use lanceur_core::{
    ClickTarget, Focus, Key, KeyChord, KeyOutcome, Markup, NoSpeech, PanelId, Speaker, Utterance,
    Widget, WidgetConfig,
};

/// Counts utterances; clones share the count.
#[derive(Clone, Default)]
struct CountingSpeaker(Rc<Cell<usize>>);

impl Speaker for CountingSpeaker {
    fn is_available(&self) -> bool {
        true
    }

    fn speak(&self, _utterance: &Utterance) {
        self.0.set(self.0.get() + 1);
    }
}

fn widget(seed: u64) -> Widget {
    Widget::new(
        &Markup::standard(),
        &WidgetConfig::default().with_seed(seed),
        Box::new(NoSpeech),
    )
    .unwrap()
}

fn is_clock_time(s: &str) -> bool {
    let parts: Vec<&str> = s.split(':').collect();
    parts.len() == 3
        && parts
            .iter()
            .all(|p| p.len() == 2 && p.chars().all(|c| c.is_ascii_digit()))
        && parts[0].parse::<u32>().unwrap() < 24
        && parts[1].parse::<u32>().unwrap() < 60
        && parts[2].parse::<u32>().unwrap() < 61
}

#[test]
fn alt_2_opens_dice_panel() {
    let mut w = widget(1);
    assert_eq!(w.active_panel(), PanelId::Home);
    assert!(!w.tabs().is_active(PanelId::Dice));

    assert_eq!(w.key(KeyChord::alt('2'), Instant::now()), KeyOutcome::Handled);

    assert_eq!(w.active_panel(), PanelId::Dice);
    assert!(w.tabs().button(PanelId::Dice).unwrap().active);
    assert_eq!(w.tabs().buttons().iter().filter(|b| b.active).count(), 1);
    assert_eq!(
        w.announcer().latest().map(|a| a.message.as_str()),
        Some("Tab Dice Roller activated.")
    );
}

#[test]
fn every_shortcut_activates_its_panel() {
    let mut w = widget(2);
    for (digit, panel) in ['1', '2', '3', '4'].into_iter().zip(PanelId::ALL) {
        w.key(KeyChord::alt(digit), Instant::now());
        assert_eq!(w.active_panel(), panel);
        assert_eq!(w.tabs().panels().iter().filter(|p| p.active).count(), 1);
    }
}

#[test]
fn unbound_alt_digit_does_nothing() {
    let mut w = widget(3);
    w.key(KeyChord::alt('3'), Instant::now());
    assert_eq!(w.key(KeyChord::alt('5'), Instant::now()), KeyOutcome::Ignored);
    assert_eq!(w.key(KeyChord::alt('9'), Instant::now()), KeyOutcome::Ignored);
    assert_eq!(w.active_panel(), PanelId::Campaign);
}

#[test]
fn space_on_body_prepends_one_entry() {
    let mut w = widget(4);
    let now = Instant::now();
    w.key(KeyChord::alt('2'), now);
    assert_eq!(w.focus(), Focus::Body);

    w.key(KeyChord::plain(Key::Char(' ')), now);

    assert_eq!(w.history().len(), 1);
    let entry = w.history().latest().unwrap();
    assert!((1..=100).contains(&entry.value.value()));
    assert!(is_clock_time(&entry.time), "bad time {:?}", entry.time);
    assert_eq!(w.roller().shown().map(|s| s.roll), Some(entry.value));
}

#[test]
fn eleven_rolls_keep_last_ten() {
    let mut w = widget(5);
    let now = Instant::now();
    w.activate("dice");
    let rolls: Vec<_> = (0..11).map(|_| w.roll(now)).collect();

    assert_eq!(w.history().len(), HISTORY_CAPACITY);
    let kept: Vec<_> = w.history().iter().map(|e| e.value).collect();
    let expected: Vec<_> = rolls[1..].iter().rev().copied().collect();
    assert_eq!(kept, expected);
}

#[test]
fn all_roll_paths_share_one_pipeline() {
    let speaker = CountingSpeaker::default();
    let mut w = Widget::new(
        &Markup::standard(),
        &WidgetConfig::default().with_seed(6),
        Box::new(speaker.clone()),
    )
    .unwrap();
    let now = Instant::now();
    w.activate("dice");

    w.click(ClickTarget::RollControl, now);
    w.set_focus(Focus::RollControl);
    w.key(KeyChord::plain(Key::Enter), now);
    w.key(KeyChord::plain(Key::Char(' ')), now);
    w.set_focus(Focus::Body);
    w.key(KeyChord::plain(Key::Char(' ')), now);

    assert_eq!(w.history().len(), 4);
    assert_eq!(speaker.0.get(), 4);
    assert_eq!(w.announcer().live().len(), 4);
}

#[test]
fn unknown_panel_leaves_state_alone() {
    let mut w = widget(7);
    w.activate("campaign");
    assert!(!w.activate("lobby"));
    assert_eq!(w.active_panel(), PanelId::Campaign);
    assert!(w.tabs().button(PanelId::Campaign).unwrap().active);
}

#[test]
fn announcements_disappear_after_a_second() {
    let mut w = widget(8);
    let t0 = Instant::now();
    w.key(KeyChord::alt('2'), t0);
    w.key(KeyChord::plain(Key::Char(' ')), t0 + Duration::from_millis(100));
    assert_eq!(w.announcer().live().len(), 2);

    w.tick(t0 + Duration::from_millis(1099));
    assert_eq!(w.announcer().live().len(), 1);

    w.tick(t0 + Duration::from_millis(1100));
    assert!(w.announcer().live().is_empty());
}

#[test]
fn ten_thousand_rolls_in_range() {
    let mut w = widget(9);
    let now = Instant::now();
    let mut seen = [false; 100];
    for _ in 0..10_000 {
        let v = w.roll(now).value();
        assert!((1..=100).contains(&v));
        seen[(v - 1) as usize] = true;
    }
    assert!(seen.iter().all(|s| *s));
}
