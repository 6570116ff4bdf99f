//! Inline form validation.
//!
//! Fields are re-validated every time they lose focus. Each evaluation
//! replaces the feedback under the field, so repeated evaluations never
//! stack messages.

mod binding;
mod field;
mod surface;
mod terminal;

pub use binding::{
    FormBinding, SubmitGuard, SubmitOutcome, FILL_ALL_FIELDS, FIX_HIGHLIGHTED_FIELDS,
    LOGIN_FORM_ID, REGISTER_FORM_ID,
};
pub use field::{FieldRule, FieldState};
pub use surface::{Feedback, FieldNode, FormSurface, MemorySurface, Tone};
pub use terminal::TerminalSurface;
