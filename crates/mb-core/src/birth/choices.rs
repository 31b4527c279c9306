//! Binds the generic menu model to the four birth choice sets
//!
//! For each discrete choice stage this builds the item list from the
//! static tables, applies the filtering rules, and commits a selected
//! index back into the draft. The `*` random pick in the menu commits
//! through exactly the same path as a manual selection.

use super::draft::{CharacterDraft, RollerMethod};
use super::menu::MenuModel;
use super::stage::BirthStage;
use crate::data::{self, ClassDef, Sex};

/// The four menu-driven choice stages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChoiceKind {
    Sex,
    Race,
    Class,
    Roller,
}

impl ChoiceKind {
    /// The stage this choice belongs to
    pub fn stage(self) -> BirthStage {
        match self {
            ChoiceKind::Sex => BirthStage::SexChoice,
            ChoiceKind::Race => BirthStage::RaceChoice,
            ChoiceKind::Class => BirthStage::ClassChoice,
            ChoiceKind::Roller => BirthStage::RollerChoice,
        }
    }

    /// The choice belonging to a stage, if that stage is menu-driven
    pub fn for_stage(stage: BirthStage) -> Option<ChoiceKind> {
        match stage {
            BirthStage::SexChoice => Some(ChoiceKind::Sex),
            BirthStage::RaceChoice => Some(ChoiceKind::Race),
            BirthStage::ClassChoice => Some(ChoiceKind::Class),
            BirthStage::RollerChoice => Some(ChoiceKind::Roller),
            _ => None,
        }
    }
}

/// Classes offered for the given draft, in menu order.
///
/// The ghost placeholder is never offered; races carrying the restricted
/// trait additionally lose the last two classes of the table. Race
/// dependence means the class menu must be rebuilt whenever the race
/// changes.
pub fn class_choices(draft: &CharacterDraft) -> Vec<&'static ClassDef> {
    let mut classes: Vec<&'static ClassDef> =
        data::CLASSES.iter().filter(|c| c.playable).collect();
    if draft.race.is_some_and(|r| r.restricted()) {
        classes.truncate(classes.len().saturating_sub(2));
    }
    classes
}

/// Item labels for one choice menu, given the current draft
pub fn labels(kind: ChoiceKind, draft: &CharacterDraft) -> Vec<String> {
    match kind {
        ChoiceKind::Sex => Sex::ALL.iter().map(|s| s.title().to_string()).collect(),
        ChoiceKind::Race => data::RACES.iter().map(|r| r.name.to_string()).collect(),
        ChoiceKind::Class => class_choices(draft)
            .iter()
            .map(|c| c.name.to_string())
            .collect(),
        ChoiceKind::Roller => RollerMethod::CHOICES
            .iter()
            .map(|m| m.title().to_string())
            .collect(),
    }
}

/// Index of the draft's current selection in this menu, if any
pub fn chosen(kind: ChoiceKind, draft: &CharacterDraft) -> Option<usize> {
    match kind {
        ChoiceKind::Sex => draft.sex.map(|s| s.index()),
        ChoiceKind::Race => draft.race.map(|r| r.idx),
        ChoiceKind::Class => {
            let cls = draft.class?;
            class_choices(draft).iter().position(|c| c.idx == cls.idx)
        }
        ChoiceKind::Roller => {
            let m = draft.method?;
            RollerMethod::CHOICES.iter().position(|&c| c == m)
        }
    }
}

/// Build the menu model for a choice stage, cursor on the draft's current
/// selection where one exists
pub fn build(kind: ChoiceKind, draft: &CharacterDraft) -> MenuModel {
    let initial = chosen(kind, draft).unwrap_or(0);
    let (hint, allow_random) = match kind {
        ChoiceKind::Sex => ("Sex does not have any significant gameplay effects.", true),
        ChoiceKind::Race => (
            "Race affects stats and skills, and may confer resistances and abilities.",
            true,
        ),
        ChoiceKind::Class => (
            "Class affects stats, skills, and other character traits.",
            true,
        ),
        // The roller must be a deliberate choice.
        ChoiceKind::Roller => (
            "Choose how to generate your intrinsic stats. Point-based is recommended.",
            false,
        ),
    };
    MenuModel::new(labels(kind, draft), hint, initial, allow_random)
}

/// Commit a selected menu index into the draft.
///
/// A class change invalidated by a later race change is the caller's
/// concern: the controller re-enters the class stage after any race edit.
pub fn commit(kind: ChoiceKind, index: usize, draft: &mut CharacterDraft) {
    match kind {
        ChoiceKind::Sex => draft.sex = Sex::from_index(index),
        ChoiceKind::Race => draft.race = data::race(index),
        ChoiceKind::Class => draft.class = class_choices(draft).get(index).copied(),
        ChoiceKind::Roller => draft.method = RollerMethod::CHOICES.get(index).copied(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GameRng;
    use crate::birth::BirthEvent;
    use crate::birth::menu::MenuOutcome;
    use crate::data::RACES;

    fn draft_with_race(name: &str) -> CharacterDraft {
        let mut draft = CharacterDraft::new();
        draft.race = RACES.iter().find(|r| r.name == name);
        assert!(draft.race.is_some(), "no such race {name}");
        draft
    }

    #[test]
    fn test_all_races_offered_unfiltered() {
        let draft = CharacterDraft::new();
        assert_eq!(labels(ChoiceKind::Race, &draft).len(), RACES.len());
    }

    #[test]
    fn test_ghost_class_never_offered() {
        let draft = draft_with_race("Human");
        let names = labels(ChoiceKind::Class, &draft);
        assert!(!names.iter().any(|n| n == "Ghost"));
        assert_eq!(names.len(), data::CLASSES.len() - 1);
    }

    #[test]
    fn test_restricted_race_loses_two_tail_classes() {
        let unrestricted = labels(ChoiceKind::Class, &draft_with_race("Human"));
        let restricted = labels(ChoiceKind::Class, &draft_with_race("Dragon"));
        assert_eq!(restricted.len(), unrestricted.len() - 2);
        assert_eq!(restricted[..], unrestricted[..restricted.len()]);
        assert!(!restricted.contains(&"Monk".to_string()));
        assert!(!restricted.contains(&"Shapechanger".to_string()));
    }

    #[test]
    fn test_random_never_picks_a_removed_class() {
        // The random pick indexes the filtered menu, so a removed class
        // is unreachable no matter what the RNG produces.
        let draft = draft_with_race("Dragon");
        let mut menu = build(ChoiceKind::Class, &draft);
        let n = menu.items().len();
        let mut rng = GameRng::new(99);
        for _ in 0..200 {
            match menu.handle(BirthEvent::Random, &mut rng) {
                Some(MenuOutcome::Selected(i)) => {
                    assert!(i < n);
                    let mut d = draft.clone();
                    commit(ChoiceKind::Class, i, &mut d);
                    let cls = d.class.unwrap();
                    assert!(cls.playable);
                    assert_ne!(cls.name, "Monk");
                    assert_ne!(cls.name, "Shapechanger");
                }
                other => panic!("unexpected outcome {other:?}"),
            }
        }
    }

    #[test]
    fn test_roller_menu_has_two_fixed_choices_no_random() {
        let draft = CharacterDraft::new();
        let menu = build(ChoiceKind::Roller, &draft);
        assert_eq!(menu.items(), ["Point-based", "Standard roller"]);
        assert!(!menu.allow_random());
    }

    #[test]
    fn test_commit_round_trips_through_chosen() {
        let mut draft = CharacterDraft::new();
        commit(ChoiceKind::Sex, 1, &mut draft);
        commit(ChoiceKind::Race, 5, &mut draft);
        commit(ChoiceKind::Class, 3, &mut draft);
        commit(ChoiceKind::Roller, 1, &mut draft);
        assert_eq!(chosen(ChoiceKind::Sex, &draft), Some(1));
        assert_eq!(chosen(ChoiceKind::Race, &draft), Some(5));
        assert_eq!(chosen(ChoiceKind::Class, &draft), Some(3));
        assert_eq!(chosen(ChoiceKind::Roller, &draft), Some(1));
        assert_eq!(draft.method, Some(RollerMethod::Standard));
    }

    #[test]
    fn test_out_of_range_commit_leaves_field_unset() {
        let mut draft = CharacterDraft::new();
        commit(ChoiceKind::Race, RACES.len(), &mut draft);
        assert!(draft.race.is_none());
    }
}
