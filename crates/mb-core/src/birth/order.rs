//! Stat priority ordering for the standard roller
//!
//! The player assigns a strict priority order over the six attributes by
//! picking, one slot at a time, an attribute that has not been placed
//! yet. Letters index the full attribute table; picks of already-placed
//! attributes are ignored and the prompt re-reads.

use super::BirthEvent;
use crate::STAT_MAX;
use crate::data::Stat;

/// Terminal outcome of the ordering screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatOrderOutcome {
    /// All six slots assigned, highest priority first
    Committed([Stat; STAT_MAX]),
    /// Escape on the very first slot: back to the roller choice
    Back,
    /// Escape on a later slot: restart the whole ordering
    Restart,
    Quit,
}

/// A permutation in progress
#[derive(Debug, Clone)]
pub struct StatOrder {
    slots: [Option<Stat>; STAT_MAX],
    avail: [bool; STAT_MAX],
    filled: usize,
}

impl Default for StatOrder {
    fn default() -> Self {
        Self::new()
    }
}

impl StatOrder {
    pub fn new() -> Self {
        Self {
            slots: [None; STAT_MAX],
            avail: [true; STAT_MAX],
            filled: 0,
        }
    }

    pub fn slots(&self) -> &[Option<Stat>; STAT_MAX] {
        &self.slots
    }

    /// Attributes not yet placed, with their selection letters
    pub fn available(&self) -> impl Iterator<Item = (char, Stat)> + '_ {
        Stat::ALL
            .iter()
            .enumerate()
            .filter(|&(i, _)| self.avail[i])
            .map(|(i, &s)| ((b'a' + i as u8) as char, s))
    }

    pub fn filled(&self) -> usize {
        self.filled
    }

    /// Feed one event to the screen
    pub fn handle(&mut self, event: BirthEvent) -> Option<StatOrderOutcome> {
        match event {
            BirthEvent::Quit => Some(StatOrderOutcome::Quit),
            BirthEvent::Escape => Some(if self.filled == 0 {
                StatOrderOutcome::Back
            } else {
                StatOrderOutcome::Restart
            }),
            BirthEvent::Letter(c) if c.is_ascii_lowercase() => {
                let idx = (c as u8 - b'a') as usize;
                if idx >= STAT_MAX || !self.avail[idx] {
                    return None;
                }
                self.avail[idx] = false;
                self.slots[self.filled] = Stat::from_index(idx);
                self.filled += 1;
                if self.filled == STAT_MAX {
                    let mut order = [Stat::Strength; STAT_MAX];
                    for (slot, stat) in self.slots.iter().enumerate() {
                        order[slot] = stat.unwrap_or(Stat::Strength);
                    }
                    Some(StatOrderOutcome::Committed(order))
                } else {
                    None
                }
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_full_ordering_is_a_permutation() {
        let mut so = StatOrder::new();
        let mut out = None;
        for c in ['f', 'a', 'c', 'b', 'e', 'd'] {
            out = so.handle(BirthEvent::Letter(c));
        }
        match out {
            Some(StatOrderOutcome::Committed(order)) => {
                assert_eq!(order[0], Stat::Charisma);
                assert_eq!(order[1], Stat::Strength);
                let mut seen = [false; STAT_MAX];
                for s in order {
                    assert!(!seen[s.index()], "{s:?} placed twice");
                    seen[s.index()] = true;
                }
            }
            other => panic!("unexpected outcome {other:?}"),
        }
    }

    #[test]
    fn test_repeated_pick_is_ignored() {
        let mut so = StatOrder::new();
        assert!(so.handle(BirthEvent::Letter('a')).is_none());
        assert!(so.handle(BirthEvent::Letter('a')).is_none());
        assert_eq!(so.filled(), 1);
        assert!(so.available().all(|(c, _)| c != 'a'));
    }

    #[test]
    fn test_out_of_range_letter_ignored() {
        let mut so = StatOrder::new();
        assert!(so.handle(BirthEvent::Letter('g')).is_none());
        assert_eq!(so.filled(), 0);
    }

    #[test]
    fn test_escape_first_slot_goes_back_later_restarts() {
        let mut so = StatOrder::new();
        assert_eq!(
            so.handle(BirthEvent::Escape),
            Some(StatOrderOutcome::Back)
        );
        so.handle(BirthEvent::Letter('b'));
        assert_eq!(
            so.handle(BirthEvent::Escape),
            Some(StatOrderOutcome::Restart)
        );
    }

    proptest! {
        /// Any letter sequence that completes the screen yields a
        /// duplicate-free permutation of all six attributes.
        #[test]
        fn prop_committed_order_is_always_a_permutation(
            letters in proptest::collection::vec(proptest::char::range('a', 'z'), 6..80)
        ) {
            let mut so = StatOrder::new();
            for c in letters {
                if let Some(StatOrderOutcome::Committed(order)) =
                    so.handle(BirthEvent::Letter(c))
                {
                    let mut seen = [false; STAT_MAX];
                    for s in order {
                        prop_assert!(!seen[s.index()]);
                        seen[s.index()] = true;
                    }
                    prop_assert!(seen.iter().all(|&b| b));
                    return Ok(());
                }
            }
        }
    }
}
