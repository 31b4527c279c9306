//! Dice for the standard roller
//!
//! Values are generated only after the priority ordering has been chosen:
//! six raw values are rolled, sorted descending and assigned by priority.
//! Rolls are retried until the first three slots meet their escalating
//! minima; the retry count is capped so a bad threshold table cannot
//! spin forever, after which the top slots are lifted to their minima.

use crate::data::Stat;
use crate::{GameRng, STAT_MAX};

/// Minimum value required at the first, second and third priority slot
pub const ORDER_MINIMA: [i16; 3] = [17, 16, 15];

/// Retry cap for the threshold loop
const MAX_ROLL_TRIES: u32 = 1000;

/// Roll one raw stat: 5 + 1d3 + 1d4 + 1d5, giving 8..=17
fn roll_one(rng: &mut GameRng) -> i16 {
    5 + rng.rnd(3) as i16 + rng.rnd(4) as i16 + rng.rnd(5) as i16
}

fn meets_minima(sorted: &[i16; STAT_MAX]) -> bool {
    ORDER_MINIMA
        .iter()
        .zip(sorted.iter())
        .all(|(min, v)| v >= min)
}

/// Produce the six stat values for a chosen priority order, indexed by
/// attribute (not by slot).
pub fn roll_stats(order: &[Stat; STAT_MAX], rng: &mut GameRng) -> [i16; STAT_MAX] {
    let mut rolls = [0i16; STAT_MAX];
    for _ in 0..MAX_ROLL_TRIES {
        for v in rolls.iter_mut() {
            *v = roll_one(rng);
        }
        rolls.sort_unstable_by(|a, b| b.cmp(a));
        if meets_minima(&rolls) {
            return assign(order, &rolls);
        }
    }

    // Cap exhausted: keep the last roll but lift the top slots to their
    // minima so the contract still holds.
    for (v, min) in rolls.iter_mut().zip(ORDER_MINIMA.iter()) {
        if *v < *min {
            *v = *min;
        }
    }
    assign(order, &rolls)
}

fn assign(order: &[Stat; STAT_MAX], sorted: &[i16; STAT_MAX]) -> [i16; STAT_MAX] {
    let mut stats = [0i16; STAT_MAX];
    for (slot, stat) in order.iter().enumerate() {
        stats[stat.index()] = sorted[slot];
    }
    stats
}

#[cfg(test)]
mod tests {
    use super::*;

    const ORDER: [Stat; STAT_MAX] = [
        Stat::Wisdom,
        Stat::Constitution,
        Stat::Strength,
        Stat::Dexterity,
        Stat::Intelligence,
        Stat::Charisma,
    ];

    #[test]
    fn test_minima_hold_for_many_seeds() {
        for seed in 0..50 {
            let mut rng = GameRng::new(seed);
            let stats = roll_stats(&ORDER, &mut rng);
            assert!(stats[Stat::Wisdom.index()] >= 17, "seed {seed}");
            assert!(stats[Stat::Constitution.index()] >= 16, "seed {seed}");
            assert!(stats[Stat::Strength.index()] >= 15, "seed {seed}");
        }
    }

    #[test]
    fn test_priority_order_is_respected() {
        let mut rng = GameRng::new(3);
        let stats = roll_stats(&ORDER, &mut rng);
        let by_slot: Vec<i16> = ORDER.iter().map(|s| stats[s.index()]).collect();
        assert!(by_slot.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn test_values_stay_in_roll_range() {
        let mut rng = GameRng::new(11);
        let stats = roll_stats(&ORDER, &mut rng);
        for v in stats {
            assert!((8..=17).contains(&v), "value {v} out of range");
        }
    }
}
