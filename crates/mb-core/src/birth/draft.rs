//! The character record being assembled during birth

use serde::{Deserialize, Serialize};
use strum::Display;

use crate::STAT_MAX;
use crate::data::{ClassDef, RaceDef, Sex};

/// How the six stat values were produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum RollerMethod {
    PointBased,
    Standard,
    /// Reused from the previous character via quick-start; never offered
    /// in the roller menu.
    Quick,
}

impl RollerMethod {
    pub const fn title(&self) -> &'static str {
        match self {
            RollerMethod::PointBased => "Point-based",
            RollerMethod::Standard => "Standard roller",
            RollerMethod::Quick => "Quick-start",
        }
    }

    /// The methods offered in the roller menu, in display order
    pub const CHOICES: [RollerMethod; 2] = [RollerMethod::PointBased, RollerMethod::Standard];
}

/// The mutable record built up by the birth flow.
///
/// Race and class are non-owning references into the static data tables.
/// Owned exclusively by the controller; reset discards every field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CharacterDraft {
    pub sex: Option<Sex>,
    pub race: Option<&'static RaceDef>,
    pub class: Option<&'static ClassDef>,
    pub method: Option<RollerMethod>,
    pub stats: Option<[i16; STAT_MAX]>,
}

impl CharacterDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Discard all selections, as for the "start over" key
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Finalize into a complete sheet; `None` while any field is unchosen
    pub fn sheet(&self) -> Option<CharacterSheet> {
        Some(CharacterSheet {
            sex: self.sex?,
            race: self.race?,
            class: self.class?,
            method: self.method?,
            stats: self.stats?,
        })
    }
}

/// The finalized character handed to session instantiation on completion
#[derive(Debug, Clone, PartialEq)]
pub struct CharacterSheet {
    pub sex: Sex,
    pub race: &'static RaceDef,
    pub class: &'static ClassDef,
    pub method: RollerMethod,
    pub stats: [i16; STAT_MAX],
}
