use futures::executor::block_on;
use std::time::Duration;

fn assert_send_sync<T: Send + Sync>() {}
fn assert_clone<T: Clone>() {}

#[test]
fn controllers_are_shareable_handles() {
    assert_send_sync::<crate::form::FormController>();
    assert_send_sync::<crate::form::SubmitError>();
    assert_clone::<crate::form::FormController>();
    assert_clone::<crate::disclosure::DisclosureGroup>();
}

#[test]
fn prelude_smoke_covers_both_controllers() {
    use crate::prelude::*;

    let mut faq = DisclosureGroup::new(DisclosureMode::Multiple);
    faq.toggle("a");
    faq.toggle(PanelId::new("b"));
    assert_eq!(faq.open_set().len(), 2);

    let form = FormController::new(
        [FieldKey::new("email")],
        SimulatedSubmit::new(Duration::from_millis(1)),
        FormOptions::default(),
    )
    .expect("form");
    form.register_field_validator(FieldKey::new("email"), Required)
        .expect("required");
    form.register_field_validator(FieldKey::new("email"), Email)
        .expect("email");
    form.register_field_validator(FieldKey::new("email"), MinLength(3))
        .expect("min length");
    form.set_field(FieldKey::new("email"), "me@x.io")
        .expect("set");

    let outcome = block_on(form.request_submit()).expect("submit");
    assert!(matches!(outcome, SubmitOutcome::Succeeded));
    assert_eq!(form.submit_state().expect("state"), SubmitState::Succeeded);
    assert_eq!(BlockIcon::Mail.accent(), AccentColor::Violet);
}

#[test]
fn simulated_submit_has_fixed_default_delay() {
    assert_eq!(
        crate::form::SimulatedSubmit::default().delay(),
        Duration::from_millis(1500)
    );
}
