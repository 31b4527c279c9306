//! Point-based stat allocation
//!
//! Each attribute starts at the baseline and may be raised towards the
//! ceiling, paying into a shared pool. After every input event the total
//! cost is recomputed; an over- or under-spend is repaired by stepping the
//! attribute under the cursor before the next redraw, so every observable
//! state satisfies `0 <= total cost <= MAX_BIRTH_POINTS`.

use super::BirthEvent;
use crate::STAT_MAX;

/// Cost of holding a stat at baseline+i. Monotonically increasing.
pub const BIRTH_STAT_COSTS: [i16; 9] = [0, 1, 2, 3, 4, 5, 6, 8, 12];

/// Pool of available points
pub const MAX_BIRTH_POINTS: i16 = 20;

/// Lowest / highest raw value a stat can be bought at
pub const STAT_FLOOR: i16 = 10;
pub const STAT_CEILING: i16 = 18;

/// Terminal outcome of the point-buy screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointBuyOutcome {
    /// Enter: accept the current values
    Committed([i16; STAT_MAX]),
    /// Escape before any interaction: back to the roller choice
    Back,
    /// Escape after interacting: re-enter this screen fresh
    Restart,
    Quit,
}

/// Interactive state of the point-buy screen
#[derive(Debug, Clone)]
pub struct PointBuy {
    values: [i16; STAT_MAX],
    cursor: usize,
    touched: bool,
}

impl Default for PointBuy {
    fn default() -> Self {
        Self::new()
    }
}

impl PointBuy {
    pub fn new() -> Self {
        Self {
            values: [STAT_FLOOR; STAT_MAX],
            cursor: 0,
            touched: false,
        }
    }

    pub fn values(&self) -> &[i16; STAT_MAX] {
        &self.values
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Cost of the i-th attribute at its current value
    pub fn cost_of(&self, i: usize) -> i16 {
        BIRTH_STAT_COSTS[(self.values[i] - STAT_FLOOR) as usize]
    }

    /// Total cost across all attributes
    pub fn total_cost(&self) -> i16 {
        (0..STAT_MAX).map(|i| self.cost_of(i)).sum()
    }

    /// Repair a transient over- or under-spend by stepping the most
    /// recently modified attribute (the one under the cursor) until the
    /// pool constraint holds again.
    fn repair(&mut self) {
        loop {
            let cost = self.total_cost();
            if cost > MAX_BIRTH_POINTS {
                self.values[self.cursor] -= 1;
            } else if cost < 0 {
                self.values[self.cursor] += 1;
            } else {
                break;
            }
        }
    }

    /// Feed one event to the screen. Returns `None` while still
    /// interacting; the caller redraws after every call, by which time
    /// the pool invariant has been re-established.
    pub fn handle(&mut self, event: BirthEvent) -> Option<PointBuyOutcome> {
        match event {
            BirthEvent::Quit => return Some(PointBuyOutcome::Quit),
            BirthEvent::Escape => {
                return Some(if self.touched {
                    PointBuyOutcome::Restart
                } else {
                    PointBuyOutcome::Back
                });
            }
            _ => {}
        }
        self.touched = true;

        match event {
            BirthEvent::Select => return Some(PointBuyOutcome::Committed(self.values)),
            BirthEvent::Up => self.cursor = (self.cursor + STAT_MAX - 1) % STAT_MAX,
            BirthEvent::Down => self.cursor = (self.cursor + 1) % STAT_MAX,
            BirthEvent::Left => {
                if self.values[self.cursor] > STAT_FLOOR {
                    self.values[self.cursor] -= 1;
                }
            }
            BirthEvent::Right => {
                if self.values[self.cursor] < STAT_CEILING {
                    self.values[self.cursor] += 1;
                }
            }
            _ => {}
        }

        self.repair();
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn raise(pb: &mut PointBuy, times: usize) {
        for _ in 0..times {
            pb.handle(BirthEvent::Right);
        }
    }

    #[test]
    fn test_cost_table_is_monotonic() {
        assert!(BIRTH_STAT_COSTS.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_floor_and_ceiling_clamped() {
        let mut pb = PointBuy::new();
        pb.handle(BirthEvent::Left);
        assert_eq!(pb.values()[0], STAT_FLOOR);
        raise(&mut pb, 12);
        // 18 costs 12 points, within the pool, but the ceiling stops it
        assert_eq!(pb.values()[0], STAT_CEILING);
    }

    #[test]
    fn test_one_stat_at_18_costs_12() {
        let mut pb = PointBuy::new();
        raise(&mut pb, 8);
        assert_eq!(pb.values()[0], 18);
        assert_eq!(pb.total_cost(), 12);
        match pb.handle(BirthEvent::Select) {
            Some(PointBuyOutcome::Committed(vals)) => {
                assert_eq!(vals, [18, 10, 10, 10, 10, 10]);
            }
            other => panic!("unexpected outcome {other:?}"),
        }
    }

    #[test]
    fn test_overspend_snaps_back() {
        let mut pb = PointBuy::new();
        raise(&mut pb, 8); // STR 18, 12 points
        pb.handle(BirthEvent::Down);
        raise(&mut pb, 6); // INT 16, 6 points; total 18
        pb.handle(BirthEvent::Down);
        raise(&mut pb, 3); // WIS would cost 3, total 21 > 20
        assert!(pb.total_cost() <= MAX_BIRTH_POINTS);
        assert_eq!(pb.values()[2], 12); // snapped back one step
    }

    #[test]
    fn test_escape_before_and_after_interaction() {
        let mut pb = PointBuy::new();
        assert_eq!(pb.handle(BirthEvent::Escape), Some(PointBuyOutcome::Back));
        let mut pb = PointBuy::new();
        pb.handle(BirthEvent::Down);
        assert_eq!(
            pb.handle(BirthEvent::Escape),
            Some(PointBuyOutcome::Restart)
        );
    }

    #[test]
    fn test_quit_always_available() {
        let mut pb = PointBuy::new();
        raise(&mut pb, 4);
        assert_eq!(pb.handle(BirthEvent::Quit), Some(PointBuyOutcome::Quit));
    }

    fn arb_event() -> impl Strategy<Value = BirthEvent> {
        prop_oneof![
            Just(BirthEvent::Up),
            Just(BirthEvent::Down),
            Just(BirthEvent::Left),
            Just(BirthEvent::Right),
            Just(BirthEvent::Other),
        ]
    }

    proptest! {
        /// The pool invariant holds after every event, and no stat ever
        /// leaves its legal range.
        #[test]
        fn prop_pool_invariant_never_observably_violated(
            events in proptest::collection::vec(arb_event(), 0..200)
        ) {
            let mut pb = PointBuy::new();
            for ev in events {
                let out = pb.handle(ev);
                prop_assert!(out.is_none());
                let cost = pb.total_cost();
                prop_assert!((0..=MAX_BIRTH_POINTS).contains(&cost));
                for &v in pb.values() {
                    prop_assert!((STAT_FLOOR..=STAT_CEILING).contains(&v));
                }
            }
        }
    }
}
