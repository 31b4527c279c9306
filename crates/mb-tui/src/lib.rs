//! mb-tui: terminal UI layer using ratatui
//!
//! Provides the terminal interface for the mband client: the session
//! shell (server pick, account name and password) and the birth screens.

pub mod app;
pub mod input;
pub mod session;
pub mod theme;
pub mod widgets;

pub use app::{App, UiMode};
pub use theme::Theme;
