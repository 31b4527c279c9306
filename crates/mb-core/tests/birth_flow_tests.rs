//! End-to-end exercises of the birth flow through its public API

use mb_core::GameRng;
use mb_core::birth::{BirthEvent, BirthFlow, BirthStage, FlowStatus, RollerMethod};
use proptest::prelude::*;

fn drive(flow: &mut BirthFlow, events: &[BirthEvent]) -> FlowStatus {
    let mut status = FlowStatus::Running;
    for &ev in events {
        status = flow.step(ev);
        if !matches!(status, FlowStatus::Running | FlowStatus::OpenOptions) {
            break;
        }
    }
    status
}

#[test]
fn walkthrough_with_cursor_navigation_only() {
    // Never touch letter keys: arrows plus Enter all the way through.
    let mut flow = BirthFlow::new(GameRng::new(7), None);
    let events = [
        BirthEvent::Down,
        BirthEvent::Select, // sex: second entry
        BirthEvent::Down,
        BirthEvent::Down,
        BirthEvent::Select, // race: third entry
        BirthEvent::Select, // class: first entry
        BirthEvent::Select, // roller: point-based
        BirthEvent::Right,
        BirthEvent::Right,  // nudge a stat
        BirthEvent::Select, // commit stats
        BirthEvent::Select, // confirm
    ];
    match drive(&mut flow, &events) {
        FlowStatus::Complete(sheet) => {
            assert_eq!(sheet.race.name, "Elf");
            assert_eq!(sheet.class.name, "Warrior");
            assert_eq!(sheet.method, RollerMethod::PointBased);
            assert_eq!(sheet.stats[0], 12);
        }
        other => panic!("unexpected status {other:?}"),
    }
}

#[test]
fn deep_back_navigation_then_redo_matches_straight_run() {
    let picks = ['b', 'f', 'd', 'a'];

    let mut straight = BirthFlow::new(GameRng::new(9), None);
    for c in picks {
        straight.step(BirthEvent::Letter(c));
    }

    // Same picks, but bounce all the way back from the roller choice
    // first and re-supply them.
    let mut wandering = BirthFlow::new(GameRng::new(9), None);
    for c in picks {
        wandering.step(BirthEvent::Letter(c));
    }
    for _ in 0..4 {
        wandering.step(BirthEvent::Escape);
    }
    assert_eq!(wandering.stage(), BirthStage::SexChoice);
    for c in picks {
        wandering.step(BirthEvent::Letter(c));
    }

    assert_eq!(straight.draft(), wandering.draft());
    assert_eq!(straight.stage(), wandering.stage());
}

#[test]
fn quit_mid_flow_produces_no_draft() {
    let mut flow = BirthFlow::new(GameRng::new(3), None);
    flow.step(BirthEvent::Letter('a'));
    flow.step(BirthEvent::Letter('b'));
    assert_eq!(flow.step(BirthEvent::Quit), FlowStatus::Quit);
    // Whatever was collected so far never leaves the flow as a sheet.
    assert!(flow.draft().sheet().is_none());
}

fn arb_event() -> impl Strategy<Value = BirthEvent> {
    prop_oneof![
        Just(BirthEvent::Up),
        Just(BirthEvent::Down),
        Just(BirthEvent::Left),
        Just(BirthEvent::Right),
        Just(BirthEvent::Select),
        Just(BirthEvent::Escape),
        Just(BirthEvent::Random),
        Just(BirthEvent::Other),
        proptest::char::range('a', 'z').prop_map(BirthEvent::Letter),
    ]
}

proptest! {
    /// However the player mashes the keyboard, the flow never produces a
    /// partially filled sheet: completion implies every field was chosen.
    #[test]
    fn prop_any_completion_is_fully_populated(
        seed in 0u64..1000,
        events in proptest::collection::vec(arb_event(), 0..400),
    ) {
        let mut flow = BirthFlow::new(GameRng::new(seed), None);
        for ev in events {
            match flow.step(ev) {
                FlowStatus::Complete(sheet) => {
                    // Constructing the sheet proves all fields; spot-check
                    // the stats are sane for either engine.
                    for v in sheet.stats {
                        prop_assert!((8..=18).contains(&v));
                    }
                    return Ok(());
                }
                FlowStatus::Quit => return Ok(()),
                FlowStatus::Running | FlowStatus::OpenOptions => {}
            }
        }
    }
}
