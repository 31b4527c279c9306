//! The birth stage controller
//!
//! A finite-state machine sequencing the choice menus, the stat engines
//! and the final confirmation, handling backward navigation, restart and
//! quit. All session state lives in this context object so several flows
//! can run side by side without aliasing.

use super::choices::{self, ChoiceKind};
use super::draft::{CharacterDraft, CharacterSheet, RollerMethod};
use super::menu::{MenuModel, MenuOutcome};
use super::order::{StatOrder, StatOrderOutcome};
use super::points::{PointBuy, PointBuyOutcome};
use super::stage::BirthStage;
use super::{BirthEvent, roll};
use crate::GameRng;
use crate::quickstart::QuickStart;

/// What the flow is currently showing
#[derive(Debug, Clone)]
pub enum Screen {
    /// "Quick-start character based on previous one (y/n)?"
    QuickAsk,
    /// Accept / start over / quit confirmation for quick-start
    QuickConfirm,
    Choice(ChoiceKind, MenuModel),
    PointBuy(PointBuy),
    StatOrder(StatOrder),
    FinalConfirm,
}

/// Result of feeding one event to the flow
#[derive(Debug, Clone, PartialEq)]
pub enum FlowStatus {
    /// Still awaiting further events
    Running,
    /// `=` pressed: the caller should show the birth options sub-screen
    /// and resume afterwards; the flow state is untouched
    OpenOptions,
    /// Flow finished, the finalized sheet is handed off
    Complete(CharacterSheet),
    /// Session teardown requested; no draft is produced
    Quit,
}

// Screen handler results, collected before any state is replaced so the
// borrow of the active screen has ended.
enum StepOutcome {
    Menu(ChoiceKind, Option<MenuOutcome>),
    Points(Option<PointBuyOutcome>),
    Order(Option<StatOrderOutcome>),
    QuickAsk(BirthEvent),
    QuickConfirm(BirthEvent),
    Confirm(BirthEvent),
}

/// One interactive birth session
#[derive(Debug)]
pub struct BirthFlow {
    stage: BirthStage,
    screen: Screen,
    draft: CharacterDraft,
    rng: GameRng,
    quick: Option<QuickStart>,
}

impl BirthFlow {
    /// Start a new flow. With a quick-start record present the flow
    /// opens on the reuse prompt, otherwise on the sex choice.
    pub fn new(rng: GameRng, quick: Option<QuickStart>) -> Self {
        let mut flow = Self {
            stage: BirthStage::SexChoice,
            screen: Screen::FinalConfirm, // replaced below
            draft: CharacterDraft::new(),
            rng,
            quick,
        };
        if flow.quick.is_some() {
            flow.screen = Screen::QuickAsk;
        } else {
            flow.enter(BirthStage::SexChoice);
        }
        flow
    }

    pub fn stage(&self) -> BirthStage {
        self.stage
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn draft(&self) -> &CharacterDraft {
        &self.draft
    }

    /// Move to a stage and build its screen. Menus are created fresh on
    /// every (re-)entry so race-dependent filtering is always current.
    fn enter(&mut self, stage: BirthStage) {
        self.stage = stage;
        self.screen = match stage {
            BirthStage::Roller => match self.draft.method {
                Some(RollerMethod::Standard) => Screen::StatOrder(StatOrder::new()),
                _ => Screen::PointBuy(PointBuy::new()),
            },
            BirthStage::FinalConfirm | BirthStage::Complete => Screen::FinalConfirm,
            _ => match ChoiceKind::for_stage(stage) {
                Some(kind) => Screen::Choice(kind, choices::build(kind, &self.draft)),
                None => Screen::FinalConfirm,
            },
        };
    }

    /// Feed one input event to whatever screen is active.
    ///
    /// This is the single suspension point of the whole flow: the caller
    /// blocks on its input source, hands the event here, redraws, and
    /// repeats until a terminal status comes back.
    pub fn step(&mut self, event: BirthEvent) -> FlowStatus {
        let outcome = match &mut self.screen {
            Screen::QuickAsk => StepOutcome::QuickAsk(event),
            Screen::QuickConfirm => StepOutcome::QuickConfirm(event),
            Screen::Choice(kind, menu) => {
                let kind = *kind;
                StepOutcome::Menu(kind, menu.handle(event, &mut self.rng))
            }
            Screen::PointBuy(pb) => StepOutcome::Points(pb.handle(event)),
            Screen::StatOrder(so) => StepOutcome::Order(so.handle(event)),
            Screen::FinalConfirm => StepOutcome::Confirm(event),
        };

        match outcome {
            StepOutcome::QuickAsk(ev) => match ev {
                BirthEvent::Quit => FlowStatus::Quit,
                BirthEvent::Letter('y' | 'Y') => {
                    self.screen = Screen::QuickConfirm;
                    FlowStatus::Running
                }
                BirthEvent::Letter('n' | 'N') | BirthEvent::Escape | BirthEvent::Select => {
                    self.enter(BirthStage::SexChoice);
                    FlowStatus::Running
                }
                _ => FlowStatus::Running,
            },

            StepOutcome::QuickConfirm(ev) => match ev {
                BirthEvent::Quit => FlowStatus::Quit,
                BirthEvent::Escape => {
                    self.enter(BirthStage::SexChoice);
                    FlowStatus::Running
                }
                _ => match self.quick.as_ref().and_then(|q| q.sheet()) {
                    Some(sheet) => self.complete(sheet),
                    // Stale record: fall back to the normal flow.
                    None => {
                        self.enter(BirthStage::SexChoice);
                        FlowStatus::Running
                    }
                },
            },

            StepOutcome::Menu(kind, out) => match out {
                Some(MenuOutcome::Selected(index)) => {
                    choices::commit(kind, index, &mut self.draft);
                    self.enter(kind.stage().next());
                    FlowStatus::Running
                }
                Some(MenuOutcome::Escaped) => match kind.stage().back() {
                    Some(prev) => {
                        self.enter(prev);
                        FlowStatus::Running
                    }
                    // Backing out of the first stage abandons the flow.
                    None => FlowStatus::Quit,
                },
                Some(MenuOutcome::Raw(BirthEvent::Options)) => FlowStatus::OpenOptions,
                Some(MenuOutcome::Raw(BirthEvent::Quit)) => FlowStatus::Quit,
                Some(MenuOutcome::Raw(_)) | None => FlowStatus::Running,
            },

            StepOutcome::Points(out) => match out {
                Some(PointBuyOutcome::Committed(values)) => {
                    self.draft.method = Some(RollerMethod::PointBased);
                    self.draft.stats = Some(values);
                    self.enter(BirthStage::FinalConfirm);
                    FlowStatus::Running
                }
                Some(PointBuyOutcome::Back) => {
                    self.enter(BirthStage::RollerChoice);
                    FlowStatus::Running
                }
                Some(PointBuyOutcome::Restart) => {
                    self.enter(BirthStage::Roller);
                    FlowStatus::Running
                }
                Some(PointBuyOutcome::Quit) => FlowStatus::Quit,
                None => FlowStatus::Running,
            },

            StepOutcome::Order(out) => match out {
                Some(StatOrderOutcome::Committed(order)) => {
                    let stats = roll::roll_stats(&order, &mut self.rng);
                    self.draft.method = Some(RollerMethod::Standard);
                    self.draft.stats = Some(stats);
                    self.enter(BirthStage::FinalConfirm);
                    FlowStatus::Running
                }
                Some(StatOrderOutcome::Back) => {
                    self.enter(BirthStage::RollerChoice);
                    FlowStatus::Running
                }
                Some(StatOrderOutcome::Restart) => {
                    self.enter(BirthStage::Roller);
                    FlowStatus::Running
                }
                Some(StatOrderOutcome::Quit) => FlowStatus::Quit,
                None => FlowStatus::Running,
            },

            StepOutcome::Confirm(ev) => match ev {
                BirthEvent::Quit => FlowStatus::Quit,
                BirthEvent::Escape => {
                    self.enter(BirthStage::Roller);
                    FlowStatus::Running
                }
                BirthEvent::Letter('s' | 'S') => {
                    self.draft.reset();
                    self.enter(BirthStage::SexChoice);
                    FlowStatus::Running
                }
                _ => match self.draft.sheet() {
                    Some(sheet) => self.complete(sheet),
                    // Cannot be reached through the stage machine; treat
                    // a hollow draft as a restart.
                    None => {
                        self.draft.reset();
                        self.enter(BirthStage::SexChoice);
                        FlowStatus::Running
                    }
                },
            },
        }
    }

    fn complete(&mut self, sheet: CharacterSheet) -> FlowStatus {
        self.stage = BirthStage::Complete;
        FlowStatus::Complete(sheet)
    }
}
