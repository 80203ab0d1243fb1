//! Panels, nav buttons, and the controller keeping them in step.

use serde::{Deserialize, Serialize};

use crate::error::{LanceurError, LanceurResult};

/// The panels the application knows how to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PanelId {
    /// Welcome page and shortcut summary.
    Home,
    /// The d100 roller.
    Dice,
    /// Campaign notes.
    Campaign,
    /// Downloadable material.
    Downloads,
}

impl PanelId {
    /// All panels in tab-bar order.
    pub const ALL: [PanelId; 4] = [
        PanelId::Home,
        PanelId::Dice,
        PanelId::Campaign,
        PanelId::Downloads,
    ];

    /// Name used to address the panel.
    pub fn name(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Dice => "dice",
            Self::Campaign => "campaign",
            Self::Downloads => "downloads",
        }
    }

    /// Parse a panel name. The French names of the first release still work.
    pub fn from_name(name: &str) -> Option<PanelId> {
        match name.trim().to_lowercase().as_str() {
            "home" | "accueil" => Some(Self::Home),
            "dice" | "lanceur" => Some(Self::Dice),
            "campaign" | "campagne" => Some(Self::Campaign),
            "downloads" | "telechargements" => Some(Self::Downloads),
            _ => None,
        }
    }

    /// Index of this panel in [`PanelId::ALL`].
    pub fn index(self) -> usize {
        PanelId::ALL.iter().position(|p| *p == self).unwrap_or(0)
    }
}

impl std::fmt::Display for PanelId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Static description of the screen, read once at startup.
#[derive(Debug, Clone)]
pub struct Markup {
    /// Nav buttons in display order: label and target panel name.
    pub nav_buttons: Vec<(String, String)>,
    /// Panel names, in display order.
    pub panels: Vec<String>,
    /// The panel shown first.
    pub default_panel: String,
    /// Links per panel name: label and target.
    pub links: Vec<(String, String, String)>,
}

impl Markup {
    /// The application's screen.
    pub fn standard() -> Self {
        let nav = [
            ("Home", PanelId::Home),
            ("Dice Roller", PanelId::Dice),
            ("Campaign", PanelId::Campaign),
            ("Downloads", PanelId::Downloads),
        ];
        Self {
            nav_buttons: nav
                .iter()
                .map(|(label, p)| ((*label).to_string(), p.name().to_string()))
                .collect(),
            panels: PanelId::ALL.iter().map(|p| p.name().to_string()).collect(),
            default_panel: PanelId::Home.name().to_string(),
            links: vec![
                link(PanelId::Dice, "d100 rules summary", "rules/d100.md"),
                link(PanelId::Campaign, "Session log", "campaign/log.md"),
                link(PanelId::Downloads, "Character sheet (PDF)", "downloads/sheet.pdf"),
                link(PanelId::Downloads, "Quick rules (PDF)", "downloads/rules.pdf"),
            ],
        }
    }
}

fn link(panel: PanelId, label: &str, target: &str) -> (String, String, String) {
    (panel.name().to_string(), label.to_string(), target.to_string())
}

/// A content panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Panel {
    /// Which panel.
    pub id: PanelId,
    /// Whether it is visible.
    pub active: bool,
}

/// A tab-bar button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavButton {
    /// Visible text.
    pub label: String,
    /// Panel it shows.
    pub target: PanelId,
    /// Whether it is marked selected.
    pub active: bool,
}

/// A focusable link inside a panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    /// Panel containing the link.
    pub panel: PanelId,
    /// Visible text.
    pub label: String,
    /// Where it points.
    pub target: String,
}

/// Keeps exactly one panel and its nav button active.
#[derive(Debug, Clone)]
pub struct TabController {
    panels: Vec<Panel>,
    buttons: Vec<NavButton>,
}

impl TabController {
    /// Build the controller from markup, checking its contract.
    pub fn from_markup(markup: &Markup) -> LanceurResult<Self> {
        let mut panels = Vec::with_capacity(markup.panels.len());
        for name in &markup.panels {
            let id = PanelId::from_name(name)
                .ok_or_else(|| LanceurError::Markup(format!("unknown panel '{name}'")))?;
            if panels.iter().any(|p: &Panel| p.id == id) {
                return Err(LanceurError::Markup(format!("duplicate panel '{name}'")));
            }
            panels.push(Panel { id, active: false });
        }

        let mut buttons = Vec::with_capacity(markup.nav_buttons.len());
        for (label, target) in &markup.nav_buttons {
            let target = PanelId::from_name(target)
                .filter(|id| panels.iter().any(|p| p.id == *id))
                .ok_or_else(|| {
                    let msg = format!("button '{label}' targets missing panel '{target}'");
                    LanceurError::Markup(msg)
                })?;
            buttons.push(NavButton {
                label: label.clone(),
                target,
                active: false,
            });
        }

        let mut controller = Self { panels, buttons };
        controller.activate(&markup.default_panel).map_err(|_| {
            LanceurError::Markup(format!(
                "default panel '{}' is not declared",
                markup.default_panel
            ))
        })?;
        Ok(controller)
    }

    /// Show the panel named `name` and hide all others.
    ///
    /// An unknown name leaves every panel and button untouched.
    pub fn activate(&mut self, name: &str) -> LanceurResult<PanelId> {
        let id = PanelId::from_name(name)
            .filter(|id| self.panels.iter().any(|p| p.id == *id))
            .ok_or_else(|| LanceurError::UnknownPanel(name.to_string()))?;
        for panel in &mut self.panels {
            panel.active = panel.id == id;
        }
        for button in &mut self.buttons {
            button.active = button.target == id;
        }
        tracing::debug!(panel = %id, "panel activated");
        Ok(id)
    }

    /// The visible panel.
    pub fn active(&self) -> PanelId {
        self.panels
            .iter()
            .find(|p| p.active)
            .map(|p| p.id)
            .unwrap_or(PanelId::Home)
    }

    /// Whether `id` is the visible panel.
    pub fn is_active(&self, id: PanelId) -> bool {
        self.active() == id
    }

    /// All panels with their visibility.
    pub fn panels(&self) -> &[Panel] {
        &self.panels
    }

    /// All nav buttons with their selected state.
    pub fn buttons(&self) -> &[NavButton] {
        &self.buttons
    }

    /// The nav button targeting `id`.
    pub fn button(&self, id: PanelId) -> Option<&NavButton> {
        self.buttons.iter().find(|b| b.target == id)
    }

    /// The panel after the visible one, wrapping.
    pub fn next(&self) -> PanelId {
        let idx = self.position();
        self.panels[(idx + 1) % self.panels.len()].id
    }

    /// The panel before the visible one, wrapping.
    pub fn prev(&self) -> PanelId {
        let idx = self.position();
        let len = self.panels.len();
        self.panels[(idx + len - 1) % len].id
    }

    fn position(&self) -> usize {
        self.panels.iter().position(|p| p.active).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller() -> TabController {
        TabController::from_markup(&Markup::standard()).unwrap()
    }

    fn active_counts(c: &TabController) -> (usize, usize) {
        (
            c.panels().iter().filter(|p| p.active).count(),
            c.buttons().iter().filter(|b| b.active).count(),
        )
    }

    #[test]
    fn home_is_default() {
        let c = controller();
        assert_eq!(c.active(), PanelId::Home);
        assert_eq!(active_counts(&c), (1, 1));
        assert!(c.button(PanelId::Home).unwrap().active);
    }

    #[test]
    fn activate_every_panel() {
        let mut c = controller();
        for id in PanelId::ALL {
            assert_eq!(c.activate(id.name()).unwrap(), id);
            assert_eq!(active_counts(&c), (1, 1));
            assert_eq!(c.active(), id);
            assert!(c.button(id).unwrap().active);
        }
    }

    #[test]
    fn unknown_panel_changes_nothing() {
        let mut c = controller();
        c.activate("dice").unwrap();
        let err = c.activate("nowhere").unwrap_err();
        assert!(matches!(err, LanceurError::UnknownPanel(ref n) if n == "nowhere"));
        assert_eq!(c.active(), PanelId::Dice);
        assert_eq!(active_counts(&c), (1, 1));
    }

    #[test]
    fn legacy_names() {
        assert_eq!(PanelId::from_name("lanceur"), Some(PanelId::Dice));
        assert_eq!(PanelId::from_name("Telechargements"), Some(PanelId::Downloads));
    }

    #[test]
    fn next_and_prev_wrap() {
        let mut c = controller();
        assert_eq!(c.prev(), PanelId::Downloads);
        assert_eq!(c.next(), PanelId::Dice);
        c.activate("downloads").unwrap();
        assert_eq!(c.next(), PanelId::Home);
    }

    #[test]
    fn markup_button_must_target_declared_panel() {
        let mut markup = Markup::standard();
        markup.panels.retain(|p| p != "campaign");
        let err = TabController::from_markup(&markup).unwrap_err();
        assert!(matches!(err, LanceurError::Markup(_)));
    }

    #[test]
    fn markup_default_must_exist() {
        let mut markup = Markup::standard();
        markup.default_panel = "lobby".into();
        assert!(TabController::from_markup(&markup).is_err());
    }
}
