//! Terminal front end for Lanceur.
//!
//! Renders the widget from `lanceur-core` with ratatui: a tab bar, the
//! active panel, a one-line live region for announcements, and a status
//! bar. Keys and mouse clicks are translated and handed to the widget.

pub mod app;
pub mod error;
pub mod input;
pub mod logging;
pub mod shared;
pub mod tabs;
pub mod terminal;
