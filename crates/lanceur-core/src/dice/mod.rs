//! The d100 and the game-system checks built on top of it.
//!
//! Every operation draws from a single percentile die. A plain roll only
//! reports its value; the checks (modified roll, skill test, damage) reuse
//! the same draw and attach their own interpretation as a [`RollKind`].

pub mod check;
pub mod roller;

pub use check::{RollKind, SkillTest, Verdict, WeaponClass};
pub use roller::{DiceRoller, Pulse, RollContext, Shown};

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Lowest face of the percentile die.
pub const D100_MIN: u32 = 1;
/// Highest face of the percentile die.
pub const D100_MAX: u32 = 100;

/// A single d100 outcome, always in `D100_MIN..=D100_MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RollResult(u32);

impl RollResult {
    /// Roll the die.
    pub fn roll<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self(rng.random_range(D100_MIN..=D100_MAX))
    }

    /// Wrap a known value, or `None` if it is not a face of the die.
    pub fn new(value: u32) -> Option<Self> {
        (D100_MIN..=D100_MAX).contains(&value).then_some(Self(value))
    }

    /// The rolled value.
    pub fn value(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for RollResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
