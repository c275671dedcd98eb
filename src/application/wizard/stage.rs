use crate::domain::entities::EntryStatus;
use std::fmt;

/// Ordered steps of the add/edit flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum WizardStage {
    Lookup,
    Details,
    Tagging,
    Review,
}

static STAGES: [WizardStage; 4] = [
    WizardStage::Lookup,
    WizardStage::Details,
    WizardStage::Tagging,
    WizardStage::Review,
];

impl WizardStage {
    pub const fn index(self) -> usize {
        match self {
            Self::Lookup => 0,
            Self::Details => 1,
            Self::Tagging => 2,
            Self::Review => 3,
        }
    }

    pub fn next(self) -> Option<Self> {
        STAGES.get(self.index() + 1).copied()
    }

    pub fn prev(self) -> Option<Self> {
        self.index().checked_sub(1).map(|i| STAGES[i])
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Lookup => "Repository search",
            Self::Details => "Details",
            Self::Tagging => "Tags & analogs",
            Self::Review => "Review",
        }
    }
}

impl fmt::Display for WizardStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Whether the wizard creates a new entry or edits a stored one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardMode {
    Create,
    Edit { entry_id: u64, status: EntryStatus },
}

impl WizardMode {
    pub fn is_edit(&self) -> bool {
        matches!(self, WizardMode::Edit { .. })
    }

    /// Editing skips the repository search.
    pub fn first_stage(&self) -> WizardStage {
        match self {
            WizardMode::Create => WizardStage::Lookup,
            WizardMode::Edit { .. } => WizardStage::Details,
        }
    }

    pub fn stages(&self) -> &'static [WizardStage] {
        &STAGES[self.first_stage().index()..]
    }
}
