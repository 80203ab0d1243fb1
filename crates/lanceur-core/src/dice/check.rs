//! Percentile checks: modified rolls, skill tests, and damage.
//!
//! Skill tests are roll-under: 01-05 is always a critical success, a roll
//! at or under the threshold succeeds, 96-00 is always a critical failure.

use serde::{Deserialize, Serialize};

use super::RollResult;
use crate::error::{LanceurError, LanceurResult};

/// Highest roll that is always a critical success.
pub const CRITICAL_SUCCESS_MAX: u32 = 5;
/// Lowest roll that is always a critical failure.
pub const CRITICAL_FAILURE_MIN: u32 = 96;

/// Outcome of a skill test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    /// Rolled 01-05.
    CriticalSuccess,
    /// Rolled at or under the threshold.
    Success,
    /// Rolled 96-00 above the threshold.
    CriticalFailure,
    /// Rolled over the threshold.
    Failure,
}

impl Verdict {
    /// Resolve a roll against a threshold.
    pub fn resolve(roll: RollResult, threshold: i32) -> Self {
        let value = roll.value();
        if value <= CRITICAL_SUCCESS_MAX {
            Self::CriticalSuccess
        } else if i64::from(value) <= i64::from(threshold) {
            Self::Success
        } else if value >= CRITICAL_FAILURE_MIN {
            Self::CriticalFailure
        } else {
            Self::Failure
        }
    }

    /// Whether the test passed.
    pub fn is_success(self) -> bool {
        matches!(self, Self::CriticalSuccess | Self::Success)
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CriticalSuccess => write!(f, "Critical success!"),
            Self::Success => write!(f, "Success!"),
            Self::CriticalFailure => write!(f, "Critical failure."),
            Self::Failure => write!(f, "Failure."),
        }
    }
}

/// Weapon weight classes; heavier weapons divide the roll by less.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeaponClass {
    /// Knife, club.
    #[default]
    Light,
    /// Sword, pistol.
    Medium,
    /// Two-handed axe, rifle.
    Heavy,
    /// Rocket launcher.
    VeryHeavy,
}

impl WeaponClass {
    /// All classes from lightest to heaviest.
    pub const ALL: [WeaponClass; 4] = [
        WeaponClass::Light,
        WeaponClass::Medium,
        WeaponClass::Heavy,
        WeaponClass::VeryHeavy,
    ];

    /// The divisor applied to the roll.
    pub fn divisor(self) -> u32 {
        match self {
            Self::Light => 10,
            Self::Medium => 5,
            Self::Heavy => 3,
            Self::VeryHeavy => 2,
        }
    }

    /// Damage dealt for a roll.
    pub fn damage(self, roll: RollResult) -> u32 {
        roll.value() / self.divisor()
    }

    /// Human-readable name.
    pub fn label(self) -> &'static str {
        match self {
            Self::Light => "Light",
            Self::Medium => "Medium",
            Self::Heavy => "Heavy",
            Self::VeryHeavy => "Very heavy",
        }
    }

    /// The next heavier class, wrapping back to light.
    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|w| *w == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// Parse a class from its name.
    pub fn from_name(name: &str) -> LanceurResult<Self> {
        match name.trim().to_lowercase().replace(['-', '_', ' '], "").as_str() {
            "light" => Ok(Self::Light),
            "medium" => Ok(Self::Medium),
            "heavy" => Ok(Self::Heavy),
            "veryheavy" => Ok(Self::VeryHeavy),
            _ => Err(LanceurError::UnknownWeapon(name.to_string())),
        }
    }
}

impl std::fmt::Display for WeaponClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A validated skill test waiting for its roll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillTest {
    /// Skill plus difficulty modifier.
    pub threshold: i32,
}

impl SkillTest {
    /// Check the skill range and fold in the modifier.
    pub fn new(skill: i32, modifier: i32) -> LanceurResult<Self> {
        if !(0..=100).contains(&skill) {
            return Err(LanceurError::InvalidSkill(skill));
        }
        Ok(Self {
            threshold: skill.saturating_add(modifier),
        })
    }

    /// Resolve the test.
    pub fn resolve(self, roll: RollResult) -> RollKind {
        RollKind::SkillTest {
            threshold: self.threshold,
            verdict: Verdict::resolve(roll, self.threshold),
        }
    }
}

/// What a recorded roll was used for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RollKind {
    /// A plain d100.
    Simple,
    /// A d100 plus a flat modifier.
    Modified {
        /// The modifier added to the roll.
        modifier: i32,
        /// Roll plus modifier.
        total: i32,
    },
    /// A roll-under skill test.
    SkillTest {
        /// Skill plus difficulty modifier.
        threshold: i32,
        /// The resolved outcome.
        verdict: Verdict,
    },
    /// A damage roll.
    Damage {
        /// The weapon used.
        weapon: WeaponClass,
        /// Damage dealt.
        damage: u32,
    },
}

impl RollKind {
    /// Interpret a roll with a flat modifier.
    pub fn modified(roll: RollResult, modifier: i32) -> Self {
        Self::Modified {
            modifier,
            total: (roll.value() as i32).saturating_add(modifier),
        }
    }

    /// Interpret a roll as a skill test.
    pub fn skill_test(roll: RollResult, skill: i32, modifier: i32) -> LanceurResult<Self> {
        SkillTest::new(skill, modifier).map(|test| test.resolve(roll))
    }

    /// Interpret a roll as weapon damage.
    pub fn damage(roll: RollResult, weapon: WeaponClass) -> Self {
        Self::Damage {
            weapon,
            damage: weapon.damage(roll),
        }
    }

    /// Sentence announced after the roll.
    pub fn announcement(&self, roll: RollResult) -> String {
        match self {
            Self::Simple => format!("Die rolled. Result: {roll}."),
            Self::Modified { modifier, total } => {
                let op = if *modifier >= 0 { "plus" } else { "minus" };
                format!(
                    "Die rolled. Result: {roll} {op} {} equals {total}.",
                    modifier.unsigned_abs()
                )
            }
            Self::SkillTest { threshold, verdict } => {
                format!("Skill test: rolled {roll} against {threshold}. {verdict}")
            }
            Self::Damage { weapon, damage } => format!(
                "{weapon} weapon: rolled {roll} divided by {} equals {damage} damage.",
                weapon.divisor()
            ),
        }
    }

    /// Sentence spoken after the roll.
    pub fn utterance(&self, roll: RollResult) -> String {
        match self {
            Self::Simple => format!("Result: {roll}"),
            _ => self.announcement(roll),
        }
    }

    /// Short annotation shown next to a history entry, if any.
    pub fn detail(&self) -> Option<String> {
        match self {
            Self::Simple => None,
            Self::Modified { modifier, total } => Some(format!("mod {modifier:+}, total {total}")),
            Self::SkillTest { threshold, verdict } => {
                Some(format!("threshold {threshold}, {verdict}"))
            }
            Self::Damage { weapon, damage } => Some(format!("{weapon}: {damage} damage")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roll(v: u32) -> RollResult {
        RollResult::new(v).unwrap()
    }

    #[test]
    fn verdict_boundaries() {
        assert_eq!(Verdict::resolve(roll(5), 0), Verdict::CriticalSuccess);
        assert_eq!(Verdict::resolve(roll(6), 6), Verdict::Success);
        assert_eq!(Verdict::resolve(roll(7), 6), Verdict::Failure);
        assert_eq!(Verdict::resolve(roll(95), 50), Verdict::Failure);
        assert_eq!(Verdict::resolve(roll(96), 50), Verdict::CriticalFailure);
    }

    #[test]
    fn high_threshold_beats_critical_failure() {
        // At or under the threshold wins over the 96-00 band.
        assert_eq!(Verdict::resolve(roll(97), 110), Verdict::Success);
        assert_eq!(Verdict::resolve(roll(100), 100), Verdict::Success);
    }

    #[test]
    fn critical_success_ignores_negative_threshold() {
        assert_eq!(Verdict::resolve(roll(1), -20), Verdict::CriticalSuccess);
        assert!(Verdict::resolve(roll(3), -20).is_success());
    }

    #[test]
    fn skill_range_checked() {
        assert!(matches!(
            RollKind::skill_test(roll(10), 101, 0),
            Err(LanceurError::InvalidSkill(101))
        ));
        assert!(matches!(
            RollKind::skill_test(roll(10), -1, 0),
            Err(LanceurError::InvalidSkill(-1))
        ));
        let kind = RollKind::skill_test(roll(40), 50, -10).unwrap();
        assert_eq!(
            kind,
            RollKind::SkillTest {
                threshold: 40,
                verdict: Verdict::Success
            }
        );
    }

    #[test]
    fn extreme_modifiers_saturate() {
        assert_eq!(
            RollKind::modified(roll(50), i32::MAX),
            RollKind::Modified {
                modifier: i32::MAX,
                total: i32::MAX
            }
        );
        assert_eq!(
            RollKind::modified(roll(50), i32::MIN),
            RollKind::Modified {
                modifier: i32::MIN,
                total: i32::MIN + 50
            }
        );
        assert_eq!(
            RollKind::skill_test(roll(99), 100, i32::MAX).unwrap(),
            RollKind::SkillTest {
                threshold: i32::MAX,
                verdict: Verdict::Success
            }
        );
        assert_eq!(
            RollKind::skill_test(roll(3), 0, i32::MIN).unwrap(),
            RollKind::SkillTest {
                threshold: i32::MIN,
                verdict: Verdict::CriticalSuccess
            }
        );
        let text = RollKind::modified(roll(50), i32::MIN).announcement(roll(50));
        assert!(text.contains("minus 2147483648"));
    }

    #[test]
    fn damage_divisors() {
        assert_eq!(WeaponClass::Light.damage(roll(99)), 9);
        assert_eq!(WeaponClass::Medium.damage(roll(99)), 19);
        assert_eq!(WeaponClass::Heavy.damage(roll(99)), 33);
        assert_eq!(WeaponClass::VeryHeavy.damage(roll(99)), 49);
        assert_eq!(WeaponClass::Light.damage(roll(9)), 0);
    }

    #[test]
    fn weapon_cycle_and_parse() {
        assert_eq!(WeaponClass::Light.next(), WeaponClass::Medium);
        assert_eq!(WeaponClass::VeryHeavy.next(), WeaponClass::Light);
        assert_eq!(
            WeaponClass::from_name("very-heavy").unwrap(),
            WeaponClass::VeryHeavy
        );
        assert!(WeaponClass::from_name("spoon").is_err());
    }

    #[test]
    fn announcements() {
        assert_eq!(
            RollKind::Simple.announcement(roll(42)),
            "Die rolled. Result: 42."
        );
        assert_eq!(RollKind::Simple.utterance(roll(42)), "Result: 42");
        assert_eq!(
            RollKind::modified(roll(42), -5).announcement(roll(42)),
            "Die rolled. Result: 42 minus 5 equals 37."
        );
        assert_eq!(
            RollKind::modified(roll(42), 10).announcement(roll(42)),
            "Die rolled. Result: 42 plus 10 equals 52."
        );
        assert_eq!(
            RollKind::damage(roll(30), WeaponClass::Heavy).announcement(roll(30)),
            "Heavy weapon: rolled 30 divided by 3 equals 10 damage."
        );
    }

    #[test]
    fn details() {
        assert_eq!(RollKind::Simple.detail(), None);
        assert_eq!(
            RollKind::modified(roll(42), 10).detail().as_deref(),
            Some("mod +10, total 52")
        );
    }
}
