//! Binds field rules to form events (blur and submit).

use std::collections::HashMap;

use domain::{FIELD_CONFIRM_PASSWORD, FIELD_ID, FIELD_IDENTIFIER, FIELD_PASSWORD};
use tracing::debug;

use super::field::{FieldRule, FieldState};
use super::surface::{Feedback, FormSurface, Tone};
use crate::prompt::UserPrompt;

pub const REGISTER_FORM_ID: &str = "register-form";
pub const LOGIN_FORM_ID: &str = "login-form";

/// Alert shown when the login form is submitted with empty fields
pub const FILL_ALL_FIELDS: &str = "Please fill in all fields";

/// Alert shown when the register form is submitted with invalid fields
pub const FIX_HIGHLIGHTED_FIELDS: &str = "Please correct the highlighted fields";

#[derive(Debug, Clone, Copy)]
struct BoundField {
    name: &'static str,
    rule: Option<FieldRule>,
}

/// What a submit attempt checks before letting the form through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitGuard {
    /// Every field must be non-empty
    RequireFilled,
    /// Every rule must pass
    ValidateAll,
}

/// Result of a submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Field values, unmodified, in form order
    Proceed(Vec<(String, String)>),
    /// Submission stopped; holds the alert shown
    Blocked(String),
}

/// Event wiring for one form.
#[derive(Debug, Clone)]
pub struct FormBinding {
    form_id: &'static str,
    action_path: &'static str,
    fields: Vec<BoundField>,
    guard: SubmitGuard,
    states: HashMap<&'static str, FieldState>,
}

impl FormBinding {
    /// `#register-form`: DNI, password and live-checked confirmation.
    pub fn register() -> Self {
        Self {
            form_id: REGISTER_FORM_ID,
            action_path: "/register",
            fields: vec![
                BoundField {
                    name: FIELD_ID,
                    rule: Some(FieldRule::Dni),
                },
                BoundField {
                    name: FIELD_PASSWORD,
                    rule: Some(FieldRule::Password),
                },
                BoundField {
                    name: FIELD_CONFIRM_PASSWORD,
                    rule: Some(FieldRule::Confirms(FIELD_PASSWORD)),
                },
            ],
            guard: SubmitGuard::ValidateAll,
            states: HashMap::new(),
        }
    }

    /// `#login-form`: only a submit-time emptiness guard.
    pub fn login() -> Self {
        Self {
            form_id: LOGIN_FORM_ID,
            action_path: "/login",
            fields: vec![
                BoundField {
                    name: FIELD_IDENTIFIER,
                    rule: None,
                },
                BoundField {
                    name: FIELD_PASSWORD,
                    rule: None,
                },
            ],
            guard: SubmitGuard::RequireFilled,
            states: HashMap::new(),
        }
    }

    pub fn form_id(&self) -> &'static str {
        self.form_id
    }

    /// Path the form posts to
    pub fn action_path(&self) -> &'static str {
        self.action_path
    }

    /// Field names in form order
    pub fn field_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(|f| f.name)
    }

    /// Current state of a field
    pub fn state(&self, field: &str) -> FieldState {
        self.states.get(field).cloned().unwrap_or_default()
    }

    /// Re-evaluate a field after it loses focus and redraw its feedback.
    ///
    /// Returns `None` for fields without a rule.
    pub fn on_blur<S: FormSurface + ?Sized>(
        &mut self,
        surface: &mut S,
        field: &str,
    ) -> Option<FieldState> {
        let bound = self.fields.iter().find(|f| f.name == field).copied()?;
        let rule = bound.rule?;

        let value = surface.value(bound.name).unwrap_or_default();
        let result = rule.evaluate(&value, &*surface);
        let tone = if result.is_valid {
            Tone::Success
        } else {
            Tone::Error
        };

        surface.clear_feedback(bound.name);
        surface.append_feedback(
            bound.name,
            Feedback {
                tone,
                message: result.message.clone(),
            },
        );
        surface.set_border(bound.name, tone);

        let state = FieldState::from(&result);
        debug!(
            "{}#{} validated: {}",
            self.form_id, bound.name, result.is_valid
        );
        self.states.insert(bound.name, state.clone());
        Some(state)
    }

    /// Run the submit guard. Blocking shows exactly one alert.
    pub fn on_submit<S: FormSurface + ?Sized>(
        &mut self,
        surface: &mut S,
        prompt: &dyn UserPrompt,
    ) -> SubmitOutcome {
        let blocked = match self.guard {
            SubmitGuard::RequireFilled => self
                .fields
                .iter()
                .any(|f| surface.value(f.name).unwrap_or_default().is_empty())
                .then_some(FILL_ALL_FIELDS),
            SubmitGuard::ValidateAll => {
                let names: Vec<&'static str> = self.field_names().collect();
                let mut all_valid = true;
                for name in names {
                    if let Some(state) = self.on_blur(surface, name) {
                        all_valid &= state.is_valid();
                    }
                }
                (!all_valid).then_some(FIX_HIGHLIGHTED_FIELDS)
            }
        };

        if let Some(message) = blocked {
            debug!("{} submission blocked", self.form_id);
            prompt.alert(message);
            return SubmitOutcome::Blocked(message.to_string());
        }

        SubmitOutcome::Proceed(
            self.fields
                .iter()
                .map(|f| (f.name.to_string(), surface.value(f.name).unwrap_or_default()))
                .collect(),
        )
    }
}
