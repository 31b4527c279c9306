//! The birth process: an ordered sequence of choices with back-navigation
//!
//! Birth is modeled as a series of steps which must be carried out in a
//! specified order, with the option of stepping backwards to revisit past
//! choices. Every screen is a resumable step function: it consumes exactly
//! one input event and either stays put, transitions, or finishes. The
//! blocking read loop lives in the binary, not here.

pub mod choices;
pub mod draft;
pub mod flow;
pub mod menu;
pub mod order;
pub mod points;
pub mod roll;
pub mod stage;

pub use choices::ChoiceKind;
pub use draft::{CharacterDraft, CharacterSheet, RollerMethod};
pub use flow::{BirthFlow, FlowStatus, Screen};
pub use menu::{MenuModel, MenuOutcome};
pub use order::StatOrder;
pub use points::{MAX_BIRTH_POINTS, PointBuy};
pub use stage::BirthStage;

/// One decoded input event, as handed to the birth screens.
///
/// The terminal layer maps raw key events onto these; anything a screen
/// does not recognize is simply ignored and the read loop re-reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BirthEvent {
    Up,
    Down,
    Left,
    Right,
    /// Enter: select the current item / commit the current screen
    Select,
    /// A plain letter key
    Letter(char),
    /// `*`: pick a menu item at random
    Random,
    /// `=`: open the birth options sub-screen
    Options,
    Escape,
    /// Ctrl-X, the session quit combination
    Quit,
    /// Any key with no meaning of its own ("press any key" prompts)
    Other,
}
