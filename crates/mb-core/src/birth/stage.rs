//! Birth stages and the transition tables between them

/// Program counter for the birth flow.
///
/// `Back`, `Reset` and `Quit` requests are expressed as return values of
/// the step functions, never stored as the current stage, so this holds
/// only the stages a session can actually sit in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BirthStage {
    SexChoice,
    RaceChoice,
    ClassChoice,
    RollerChoice,
    /// Running the selected stat allocation engine
    Roller,
    FinalConfirm,
    Complete,
}

impl BirthStage {
    /// Forward transition on a successful selection
    pub fn next(self) -> BirthStage {
        match self {
            BirthStage::SexChoice => BirthStage::RaceChoice,
            BirthStage::RaceChoice => BirthStage::ClassChoice,
            BirthStage::ClassChoice => BirthStage::RollerChoice,
            BirthStage::RollerChoice => BirthStage::Roller,
            BirthStage::Roller => BirthStage::FinalConfirm,
            BirthStage::FinalConfirm => BirthStage::Complete,
            BirthStage::Complete => BirthStage::Complete,
        }
    }

    /// Backward transition on escape; `None` from the first stage means
    /// the whole flow is abandoned.
    pub fn back(self) -> Option<BirthStage> {
        match self {
            BirthStage::SexChoice => None,
            BirthStage::RaceChoice => Some(BirthStage::SexChoice),
            BirthStage::ClassChoice => Some(BirthStage::RaceChoice),
            BirthStage::RollerChoice => Some(BirthStage::ClassChoice),
            BirthStage::Roller => Some(BirthStage::RollerChoice),
            BirthStage::FinalConfirm => Some(BirthStage::Roller),
            BirthStage::Complete => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forward_chain_reaches_complete() {
        let mut stage = BirthStage::SexChoice;
        for _ in 0..6 {
            stage = stage.next();
        }
        assert_eq!(stage, BirthStage::Complete);
    }

    #[test]
    fn test_back_inverts_next() {
        for stage in [
            BirthStage::SexChoice,
            BirthStage::RaceChoice,
            BirthStage::ClassChoice,
            BirthStage::RollerChoice,
            BirthStage::Roller,
        ] {
            assert_eq!(stage.next().back(), Some(stage));
        }
    }

    #[test]
    fn test_first_stage_has_no_back() {
        assert_eq!(BirthStage::SexChoice.back(), None);
    }
}
