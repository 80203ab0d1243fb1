//! Configuration for a widget session.

use std::time::Duration;

use crate::announce::ANNOUNCEMENT_TTL;
use crate::panel::PanelId;

/// Configuration for a widget session.
#[derive(Debug, Clone)]
pub struct WidgetConfig {
    /// RNG seed for reproducible rolls; `None` draws from the OS.
    pub seed: Option<u64>,
    /// Panel to show instead of the markup's default.
    pub start_panel: Option<PanelId>,
    /// Whether to look for a speech engine.
    pub speech: bool,
    /// How long announcements stay live.
    pub announcement_ttl: Duration,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            seed: None,
            start_panel: None,
            speech: true,
            announcement_ttl: ANNOUNCEMENT_TTL,
        }
    }
}

impl WidgetConfig {
    /// Fix the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Start on a specific panel.
    pub fn with_start_panel(mut self, panel: PanelId) -> Self {
        self.start_panel = Some(panel);
        self
    }

    /// Enable or disable speech.
    pub fn with_speech(mut self, speech: bool) -> Self {
        self.speech = speech;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let cfg = WidgetConfig::default();
        assert_eq!(cfg.seed, None);
        assert_eq!(cfg.start_panel, None);
        assert!(cfg.speech);
        assert_eq!(cfg.announcement_ttl, Duration::from_millis(1000));
    }

    #[test]
    fn builder_methods() {
        let cfg = WidgetConfig::default()
            .with_seed(9)
            .with_start_panel(PanelId::Dice)
            .with_speech(false);
        assert_eq!(cfg.seed, Some(9));
        assert_eq!(cfg.start_panel, Some(PanelId::Dice));
        assert!(!cfg.speech);
    }
}
