use blockui::form::{FieldKey, FieldValues, FormFields, SharedString};

#[derive(Clone, blockui::form::FormFields)]
struct SignupForm {
    email: SharedString,
    company: SharedString,
}

fn main() {
    assert_eq!(
        SignupForm::KEYS,
        &[FieldKey::new("email"), FieldKey::new("company")]
    );

    let values = FieldValues::from_entries([(FieldKey::new("email"), SharedString::from("a@b.c"))]);
    let form = SignupForm::from_values(&values);
    assert_eq!(form.email, "a@b.c");
    assert!(form.company.is_empty());

    let round = form.to_values();
    assert_eq!(
        round.get(FieldKey::new("email")).map(ToString::to_string),
        Some("a@b.c".to_string())
    );
}
