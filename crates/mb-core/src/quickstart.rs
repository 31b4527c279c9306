//! Quick-start record: reuse the previous character's choices
//!
//! When a character dies or retires, the client saves this record; the
//! next birth then opens with an offer to reuse it wholesale, skipping
//! every stage.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::STAT_MAX;
use crate::birth::{CharacterSheet, RollerMethod};
use crate::data::{self, Sex};

#[derive(Debug, Error)]
pub enum QuickStartError {
    #[error("could not read quick-start file: {0}")]
    Io(#[from] std::io::Error),
    #[error("quick-start file is malformed: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// The previous character, as persisted between sessions.
///
/// Race and class are stored as table indices; a record that no longer
/// resolves against the current tables is silently discarded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuickStart {
    pub sex: Sex,
    pub race: usize,
    pub class: usize,
    pub stats: [i16; STAT_MAX],
    pub method: RollerMethod,
}

impl QuickStart {
    pub fn from_sheet(sheet: &CharacterSheet) -> Self {
        Self {
            sex: sheet.sex,
            race: sheet.race.idx,
            class: sheet.class.idx,
            stats: sheet.stats,
            method: sheet.method,
        }
    }

    /// Resolve into a complete sheet, tagged as quick-started
    pub fn sheet(&self) -> Option<CharacterSheet> {
        Some(CharacterSheet {
            sex: self.sex,
            race: data::race(self.race)?,
            class: data::class(self.class)?,
            method: RollerMethod::Quick,
            stats: self.stats,
        })
    }

    pub fn load(path: &Path) -> Result<QuickStart, QuickStartError> {
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    pub fn save(&self, path: &Path) -> Result<(), QuickStartError> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }
}

/// Default location of the quick-start record
pub fn default_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("mband")
        .join("quickstart.json")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> QuickStart {
        QuickStart {
            sex: Sex::Female,
            race: 2,
            class: 1,
            stats: [12, 17, 10, 14, 13, 11],
            method: RollerMethod::PointBased,
        }
    }

    #[test]
    fn test_sheet_is_tagged_quick() {
        let sheet = record().sheet().unwrap();
        assert_eq!(sheet.method, RollerMethod::Quick);
        assert_eq!(sheet.race.name, "Elf");
        assert_eq!(sheet.class.name, "Mage");
    }

    #[test]
    fn test_stale_indices_resolve_to_none() {
        let mut rec = record();
        rec.race = 999;
        assert!(rec.sheet().is_none());
    }

    #[test]
    fn test_save_load_round_trip() {
        let dir = std::env::temp_dir().join("mb-quickstart-test");
        let path = dir.join("quickstart.json");
        let rec = record();
        rec.save(&path).unwrap();
        let loaded = QuickStart::load(&path).unwrap();
        assert_eq!(loaded, rec);
        let _ = fs::remove_dir_all(&dir);
    }
}
