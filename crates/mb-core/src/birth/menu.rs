//! Generic cursor-driven list selector
//!
//! Holds the state behind one rendered menu: item labels in display order,
//! a question hint, the cursor, and whether `*` random selection is
//! allowed. The model knows nothing about birth semantics; callers
//! interpret the selected index. Rendering lives in the terminal layer.

use super::BirthEvent;
use crate::GameRng;

/// Terminal outcome of feeding events to a menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOutcome {
    /// The item at this index was chosen (cursor select, letter select
    /// and `*` random pick all commit through here)
    Selected(usize),
    /// Escape or the left arrow: step back
    Escaped,
    /// A passthrough key the caller wants surfaced rather than consumed
    Raw(BirthEvent),
}

/// State behind one rendered menu
#[derive(Debug, Clone)]
pub struct MenuModel {
    items: Vec<String>,
    hint: &'static str,
    cursor: usize,
    allow_random: bool,
}

impl MenuModel {
    /// Build a menu. Callers never construct empty menus; the choice
    /// tables always offer at least one entry.
    pub fn new(items: Vec<String>, hint: &'static str, initial: usize, allow_random: bool) -> Self {
        debug_assert!(!items.is_empty());
        let cursor = if initial < items.len() { initial } else { 0 };
        Self {
            items,
            hint,
            cursor,
            allow_random,
        }
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn hint(&self) -> &'static str {
        self.hint
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn allow_random(&self) -> bool {
        self.allow_random
    }

    /// Feed one event to the menu.
    ///
    /// Returns `None` while the menu is still waiting for a terminal
    /// event; cursor movement redraws happen on the caller's side after
    /// every call.
    pub fn handle(&mut self, event: BirthEvent, rng: &mut GameRng) -> Option<MenuOutcome> {
        let n = self.items.len();
        match event {
            BirthEvent::Up => {
                self.cursor = (self.cursor + n - 1) % n;
                None
            }
            BirthEvent::Down => {
                self.cursor = (self.cursor + 1) % n;
                None
            }
            BirthEvent::Select | BirthEvent::Right => Some(MenuOutcome::Selected(self.cursor)),
            BirthEvent::Letter(c) if c.is_ascii_lowercase() => {
                let idx = (c as u8 - b'a') as usize;
                if idx < n {
                    self.cursor = idx;
                    Some(MenuOutcome::Selected(idx))
                } else {
                    None
                }
            }
            BirthEvent::Random if self.allow_random => {
                let idx = rng.rn2(n as u32) as usize;
                self.cursor = idx;
                Some(MenuOutcome::Selected(idx))
            }
            BirthEvent::Escape | BirthEvent::Left => Some(MenuOutcome::Escaped),
            BirthEvent::Options | BirthEvent::Quit => Some(MenuOutcome::Raw(event)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn menu(n: usize, allow_random: bool) -> MenuModel {
        let items = (0..n).map(|i| format!("item {i}")).collect();
        MenuModel::new(items, "pick one", 0, allow_random)
    }

    #[test]
    fn test_cursor_wraps_both_ways() {
        let mut rng = GameRng::new(1);
        let mut m = menu(3, true);
        assert!(m.handle(BirthEvent::Up, &mut rng).is_none());
        assert_eq!(m.cursor(), 2);
        m.handle(BirthEvent::Down, &mut rng);
        assert_eq!(m.cursor(), 0);
    }

    #[test]
    fn test_enter_selects_cursor_item() {
        let mut rng = GameRng::new(1);
        let mut m = menu(4, true);
        m.handle(BirthEvent::Down, &mut rng);
        assert_eq!(
            m.handle(BirthEvent::Select, &mut rng),
            Some(MenuOutcome::Selected(1))
        );
    }

    #[test]
    fn test_letter_select_in_and_out_of_range() {
        let mut rng = GameRng::new(1);
        let mut m = menu(3, true);
        assert_eq!(
            m.handle(BirthEvent::Letter('c'), &mut rng),
            Some(MenuOutcome::Selected(2))
        );
        assert_eq!(m.handle(BirthEvent::Letter('z'), &mut rng), None);
    }

    #[test]
    fn test_random_respects_allow_flag() {
        let mut rng = GameRng::new(5);
        let mut m = menu(5, false);
        assert_eq!(m.handle(BirthEvent::Random, &mut rng), None);
        let mut m = menu(5, true);
        match m.handle(BirthEvent::Random, &mut rng) {
            Some(MenuOutcome::Selected(i)) => {
                assert!(i < 5);
                assert_eq!(m.cursor(), i);
            }
            other => panic!("unexpected outcome {other:?}"),
        }
    }

    #[test]
    fn test_escape_and_passthrough() {
        let mut rng = GameRng::new(1);
        let mut m = menu(2, true);
        assert_eq!(
            m.handle(BirthEvent::Escape, &mut rng),
            Some(MenuOutcome::Escaped)
        );
        assert_eq!(
            m.handle(BirthEvent::Options, &mut rng),
            Some(MenuOutcome::Raw(BirthEvent::Options))
        );
        assert_eq!(
            m.handle(BirthEvent::Quit, &mut rng),
            Some(MenuOutcome::Raw(BirthEvent::Quit))
        );
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let mut rng = GameRng::new(1);
        let mut m = menu(2, true);
        assert_eq!(m.handle(BirthEvent::Other, &mut rng), None);
        assert_eq!(m.handle(BirthEvent::Letter('A'), &mut rng), None);
    }
}
