use super::*;
use crate::form::{FieldError, SubmitOutcome, SubmitState, simulated_submit};
use futures::executor::block_on;
use std::time::Duration;

fn quick() -> crate::form::SimulatedSubmit {
    simulated_submit(Duration::from_millis(2))
}

#[test]
fn faq_defaults_are_fresh_per_call() {
    let mut first = FaqPreset::default();
    first.items.clear();
    let second = FaqPreset::default();
    assert_eq!(second.items.len(), 4);
    assert_eq!(second.mode, DisclosureMode::Single);
}

#[test]
fn faq_disclosure_can_open_first_item() {
    let preset = FaqPreset {
        open_first: true,
        ..FaqPreset::default()
    };
    let mut group = preset.disclosure();
    assert!(group.is_open(&preset.items[0].id));

    group.toggle(preset.items[2].id.clone());
    assert!(!group.is_open(&preset.items[0].id));
    assert!(group.is_open(&preset.items[2].id));
}

#[test]
fn faq_without_items_starts_collapsed() {
    let preset = FaqPreset {
        open_first: true,
        items: Vec::new(),
        ..FaqPreset::default()
    };
    assert!(preset.disclosure().open_set().is_empty());
}

#[test]
fn footer_sections_expand_independently() {
    let preset = FooterPreset::default();
    let mut group = preset.disclosure();
    for section in &preset.sections {
        group.toggle(&section.id);
    }
    assert_eq!(group.open_set().len(), preset.sections.len());
}

#[test]
fn feature_icons_resolve_through_table() {
    let assets = FeaturePreset::default()
        .features
        .iter()
        .map(|feature| feature.icon.asset())
        .collect::<Vec<_>>();
    assert_eq!(assets, vec!["bolt", "shield-check", "credit-card", "users"]);
}

#[test]
fn contact_form_requires_long_enough_message() {
    let form = contact_form(quick()).expect("contact form");
    form.set_field(NAME_FIELD, "Ada").expect("name");
    form.set_field(EMAIL_FIELD, "ada@example.com").expect("email");
    form.set_field(MESSAGE_FIELD, "hi").expect("message");

    let outcome = block_on(form.request_submit()).expect("submit");
    assert!(matches!(outcome, SubmitOutcome::Invalid));
    assert_eq!(
        form.field_error(MESSAGE_FIELD).expect("error"),
        Some(FieldError::TooShort { min: 10 })
    );
    assert_eq!(form.field_error(SUBJECT_FIELD).expect("error"), None);

    form.set_field(MESSAGE_FIELD, "I would like a demo please")
        .expect("message");
    assert!(block_on(form.request_submit()).expect("submit").is_succeeded());
}

#[test]
fn newsletter_form_reports_required_before_format() {
    let form = newsletter_form(quick()).expect("newsletter form");
    block_on(form.request_submit()).expect("submit");
    assert_eq!(
        form.field_error(EMAIL_FIELD).expect("error"),
        Some(FieldError::Required)
    );

    form.set_field(EMAIL_FIELD, "reader@news").expect("email");
    block_on(form.request_submit()).expect("submit");
    assert_eq!(
        form.field_error(EMAIL_FIELD).expect("error"),
        Some(FieldError::InvalidFormat)
    );
    assert_eq!(form.submit_state().expect("state"), SubmitState::Idle);
}

#[test]
fn sign_in_form_succeeds_with_credentials() {
    let form = sign_in_form(quick()).expect("sign in form");
    form.set_field(EMAIL_FIELD, "user@example.com").expect("email");
    form.set_field(PASSWORD_FIELD, "hunter2").expect("password");
    assert!(block_on(form.request_submit()).expect("submit").is_succeeded());
    assert_eq!(form.submit_state().expect("state"), SubmitState::Succeeded);
}
