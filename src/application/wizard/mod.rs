//! Add/edit flow for catalog entries.
//!
//! The wizard is a plain state machine driven by discrete user actions. The
//! two suspending operations (package lookup and submit) are split into a
//! `begin`/`apply` pair so a UI can run the I/O elsewhere and feed the result
//! back; the `async` helpers chain both halves for callers that can await.

mod application_wizard;
pub mod lookup;
pub mod multi_select;
pub mod stage;
pub mod state;
pub mod submission;

pub use application_wizard::{ApplicationWizard, CancelOutcome, Retreat, WizardContext};
pub use lookup::{LookupRequest, LookupResponse, LookupState};
pub use multi_select::{SetEditor, SetKind};
pub use stage::{WizardMode, WizardStage};
pub use state::{FieldErrors, TouchedFields};
pub use submission::{SubmitTarget, Submission};
