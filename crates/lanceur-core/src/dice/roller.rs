//! The dice panel's state and its roll pipeline.

use std::time::{Duration, Instant};

use chrono::Local;
use rand::SeedableRng;
use rand::rngs::StdRng;

use super::{RollKind, RollResult, SkillTest, WeaponClass};
use crate::announce::Announcer;
use crate::error::LanceurResult;
use crate::history::{BoundedHistory, HistoryEntry};
use crate::speech::{Speaker, Utterance};
use crate::timer::{PULSE_RESTART_DELAY, Timer, TimerQueue};

/// How long the result pulse stays visible once applied.
pub const PULSE_DURATION: Duration = Duration::from_millis(500);

/// Skill used by a fresh roller.
pub const DEFAULT_SKILL: i32 = 50;
/// Step for skill and modifier adjustments.
pub const ADJUST_STEP: i32 = 5;
/// Hardest difficulty modifier (heroic).
pub const MODIFIER_MIN: i32 = -40;
/// Easiest difficulty modifier (very easy).
pub const MODIFIER_MAX: i32 = 30;

/// Pulse animation of the result display.
///
/// A roll resets the pulse and a timer reapplies it shortly after, so every
/// roll restarts the animation even when the value repeats.
#[derive(Debug, Clone, Copy, Default)]
pub struct Pulse {
    started_at: Option<Instant>,
}

impl Pulse {
    /// Stop the animation.
    pub fn reset(&mut self) {
        self.started_at = None;
    }

    /// Start the animation at `now`.
    pub fn apply(&mut self, now: Instant) {
        self.started_at = Some(now);
    }

    /// Whether the highlight shows at `now`.
    pub fn is_visible(&self, now: Instant) -> bool {
        self.started_at
            .is_some_and(|t| now.saturating_duration_since(t) < PULSE_DURATION)
    }

    /// When the current animation ends.
    pub fn ends_at(&self) -> Option<Instant> {
        self.started_at.map(|t| t + PULSE_DURATION)
    }
}

/// Shared services a roll reports to.
pub struct RollContext<'a> {
    /// Event time.
    pub now: Instant,
    /// The live region.
    pub announcer: &'a mut Announcer,
    /// The event loop's timers.
    pub timers: &'a mut TimerQueue,
    /// Speech output, possibly a no-op.
    pub speaker: &'a dyn Speaker,
}

/// What the result display shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shown {
    /// The die value.
    pub roll: RollResult,
    /// Its interpretation.
    pub kind: RollKind,
}

/// Dice panel state: RNG, result display, history, and check settings.
#[derive(Debug)]
pub struct DiceRoller {
    rng: StdRng,
    shown: Option<Shown>,
    pulse: Pulse,
    history: BoundedHistory<HistoryEntry>,
    skill: i32,
    modifier: i32,
    weapon: WeaponClass,
}

impl DiceRoller {
    /// Create a roller; without a seed the RNG draws from the OS.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            rng,
            shown: None,
            pulse: Pulse::default(),
            history: BoundedHistory::default(),
            skill: DEFAULT_SKILL,
            modifier: 0,
            weapon: WeaponClass::default(),
        }
    }

    /// Roll a plain d100.
    pub fn roll(&mut self, cx: &mut RollContext<'_>) -> RollResult {
        self.perform(cx, |_| RollKind::Simple).0
    }

    /// Roll and add the current modifier.
    pub fn roll_with_modifier(&mut self, cx: &mut RollContext<'_>) -> (RollResult, RollKind) {
        let modifier = self.modifier;
        self.perform(cx, |roll| RollKind::modified(roll, modifier))
    }

    /// Test the current skill with the current modifier.
    pub fn skill_test(
        &mut self,
        cx: &mut RollContext<'_>,
    ) -> LanceurResult<(RollResult, RollKind)> {
        let test = SkillTest::new(self.skill, self.modifier)?;
        Ok(self.perform(cx, |roll| test.resolve(roll)))
    }

    /// Roll damage for the current weapon class.
    pub fn damage(&mut self, cx: &mut RollContext<'_>) -> (RollResult, RollKind) {
        let weapon = self.weapon;
        self.perform(cx, |roll| RollKind::damage(roll, weapon))
    }

    /// Draw a value and push it through display, pulse, history, live
    /// region, and speech, in that order.
    fn perform(
        &mut self,
        cx: &mut RollContext<'_>,
        interpret: impl FnOnce(RollResult) -> RollKind,
    ) -> (RollResult, RollKind) {
        let roll = RollResult::roll(&mut self.rng);
        let kind = interpret(roll);

        self.shown = Some(Shown { roll, kind });

        self.pulse.reset();
        cx.timers
            .schedule(cx.now + PULSE_RESTART_DELAY, Timer::ApplyPulse);

        if let Some(evicted) = self
            .history
            .push_front(HistoryEntry::new(Local::now(), roll, kind))
        {
            tracing::trace!(time = %evicted.time, "history entry evicted");
        }

        cx.announcer
            .announce(kind.announcement(roll), cx.now, cx.timers);

        if cx.speaker.is_available() {
            cx.speaker.speak(&Utterance::new(kind.utterance(roll)));
        }

        tracing::info!(roll = roll.value(), ?kind, "rolled");
        (roll, kind)
    }

    /// Result display contents.
    pub fn shown(&self) -> Option<Shown> {
        self.shown
    }

    /// The result pulse.
    pub fn pulse(&self) -> &Pulse {
        &self.pulse
    }

    /// Mutable access for the timer that reapplies the pulse.
    pub fn pulse_mut(&mut self) -> &mut Pulse {
        &mut self.pulse
    }

    /// Past rolls, most recent first.
    pub fn history(&self) -> &BoundedHistory<HistoryEntry> {
        &self.history
    }

    /// Skill used by skill tests.
    pub fn skill(&self) -> i32 {
        self.skill
    }

    /// Difficulty modifier for modified rolls and skill tests.
    pub fn modifier(&self) -> i32 {
        self.modifier
    }

    /// Weapon class for damage rolls.
    pub fn weapon(&self) -> WeaponClass {
        self.weapon
    }

    /// Move the skill by `delta`, staying in 0..=100.
    pub fn adjust_skill(&mut self, delta: i32) -> i32 {
        self.skill = (self.skill + delta).clamp(0, 100);
        self.skill
    }

    /// Move the modifier by `delta`, staying in the difficulty range.
    pub fn adjust_modifier(&mut self, delta: i32) -> i32 {
        self.modifier = (self.modifier + delta).clamp(MODIFIER_MIN, MODIFIER_MAX);
        self.modifier
    }

    /// Switch to the next weapon class.
    pub fn cycle_weapon(&mut self) -> WeaponClass {
        self.weapon = self.weapon.next();
        self.weapon
    }
}
