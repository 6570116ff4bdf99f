//! Form wiring through the public API.

mod support;

use admin_panel_lib::forms::{FormBinding, MemorySurface, SubmitOutcome, Tone, FILL_ALL_FIELDS};
use admin_panel_lib::validation::{passwords_match, validate_dni, validate_password};
use domain::{FIELD_CONFIRM_PASSWORD, FIELD_ID, FIELD_IDENTIFIER, FIELD_PASSWORD};
use support::ScriptedPrompt;

#[test]
fn test_documented_examples() {
    assert!(!validate_dni("12345").is_valid);
    assert!(validate_dni("1234567").is_valid);
    assert!(!validate_password("Short1!").is_valid);
    assert!(!validate_password("NoSymbol12").is_valid);
    assert!(validate_password("Valid123!").is_valid);
    assert!(passwords_match("Abc12345!", "Abc12345!"));
    assert!(!passwords_match("Abc12345!", "abc12345!"));
}

#[test]
fn test_register_form_walkthrough() {
    let mut form = FormBinding::register();
    let mut surface = MemorySurface::new()
        .with_field(FIELD_ID, "3012345a")
        .with_field(FIELD_PASSWORD, "")
        .with_field(FIELD_CONFIRM_PASSWORD, "");

    form.on_blur(&mut surface, FIELD_ID);
    assert_eq!(
        surface.feedback(FIELD_ID)[0].message,
        "DNI must contain only numbers"
    );

    surface.set_value(FIELD_ID, "30123456");
    surface.set_value(FIELD_PASSWORD, "Valid123!");
    surface.set_value(FIELD_CONFIRM_PASSWORD, "Valid123!");
    for field in [FIELD_ID, FIELD_PASSWORD, FIELD_CONFIRM_PASSWORD] {
        form.on_blur(&mut surface, field);
        assert_eq!(surface.feedback(field).len(), 1);
        assert_eq!(surface.field(field).unwrap().border, Some(Tone::Success));
    }

    let prompt = ScriptedPrompt::default();
    let outcome = form.on_submit(&mut surface, &prompt);
    assert!(matches!(outcome, SubmitOutcome::Proceed(_)));
    assert!(prompt.alerts().is_empty());
}

#[test]
fn test_login_guard_shows_single_alert() {
    let mut form = FormBinding::login();
    let mut surface = MemorySurface::new()
        .with_field(FIELD_IDENTIFIER, "")
        .with_field(FIELD_PASSWORD, "");

    let prompt = ScriptedPrompt::default();
    let outcome = form.on_submit(&mut surface, &prompt);

    assert_eq!(outcome, SubmitOutcome::Blocked(FILL_ALL_FIELDS.to_string()));
    assert_eq!(prompt.alerts(), vec![FILL_ALL_FIELDS.to_string()]);
}

#[test]
fn test_login_guard_treats_missing_field_as_empty() {
    let mut form = FormBinding::login();
    let mut surface = MemorySurface::new().with_field(FIELD_IDENTIFIER, "30123456");

    let prompt = ScriptedPrompt::default();
    assert!(matches!(
        form.on_submit(&mut surface, &prompt),
        SubmitOutcome::Blocked(_)
    ));
}
