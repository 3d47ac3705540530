//! Default content and form wiring for the showcase blocks.
//!
//! Every preset is a plain config object: `Default` builds fresh sample
//! content on each call and callers override fields as needed.

use gpui::SharedString;

use crate::disclosure::{DisclosureGroup, DisclosureMode, PanelId};
use crate::form::rules::{self, MESSAGE_MIN_LENGTH};
use crate::form::{FieldKey, FormController, FormOptions, FormResult, SubmitEffect};
use crate::icon::BlockIcon;

#[cfg(test)]
mod tests;

pub const NAME_FIELD: FieldKey = FieldKey::new("name");
pub const EMAIL_FIELD: FieldKey = FieldKey::new("email");
pub const SUBJECT_FIELD: FieldKey = FieldKey::new("subject");
pub const MESSAGE_FIELD: FieldKey = FieldKey::new("message");
pub const PASSWORD_FIELD: FieldKey = FieldKey::new("password");

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FaqItem {
    pub id: PanelId,
    pub question: SharedString,
    pub answer: SharedString,
}

impl FaqItem {
    pub fn new(
        id: impl Into<PanelId>,
        question: impl Into<SharedString>,
        answer: impl Into<SharedString>,
    ) -> Self {
        Self {
            id: id.into(),
            question: question.into(),
            answer: answer.into(),
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FaqPreset {
    pub title: SharedString,
    pub mode: DisclosureMode,
    pub open_first: bool,
    pub items: Vec<FaqItem>,
}

impl Default for FaqPreset {
    fn default() -> Self {
        Self {
            title: "Frequently asked questions".into(),
            mode: DisclosureMode::Single,
            open_first: false,
            items: vec![
                FaqItem::new(
                    "pricing",
                    "How does pricing work?",
                    "Every plan is billed monthly and can be cancelled at any time.",
                ),
                FaqItem::new(
                    "trial",
                    "Is there a free trial?",
                    "Yes, all plans start with a 14 day trial. No card required.",
                ),
                FaqItem::new(
                    "support",
                    "What support do you offer?",
                    "Email support on every plan and a dedicated channel on Enterprise.",
                ),
                FaqItem::new(
                    "data",
                    "Can I export my data?",
                    "You can export everything as CSV or JSON from the settings page.",
                ),
            ],
        }
    }
}

impl FaqPreset {
    /// The disclosure group driving this FAQ list.
    pub fn disclosure(&self) -> DisclosureGroup {
        let group = DisclosureGroup::new(self.mode);
        match self.items.first() {
            Some(first) if self.open_first => group.with_initially_open([first.id.clone()]),
            _ => group,
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FooterSection {
    pub id: PanelId,
    pub title: SharedString,
    pub links: Vec<SharedString>,
}

/// Link columns of the compact footer. On narrow layouts each column is an
/// independently collapsible panel.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FooterPreset {
    pub sections: Vec<FooterSection>,
}

impl Default for FooterPreset {
    fn default() -> Self {
        let section = |id: &'static str, title: &'static str, links: &[&'static str]| {
            FooterSection {
                id: id.into(),
                title: title.into(),
                links: links.iter().copied().map(SharedString::from).collect(),
            }
        };
        Self {
            sections: vec![
                section("product", "Product", &["Features", "Pricing", "Changelog"]),
                section("company", "Company", &["About", "Careers", "Press"]),
                section("resources", "Resources", &["Docs", "Guides", "Status"]),
                section("legal", "Legal", &["Privacy", "Terms"]),
            ],
        }
    }
}

impl FooterPreset {
    pub fn disclosure(&self) -> DisclosureGroup {
        DisclosureGroup::new(DisclosureMode::Multiple)
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Feature {
    pub icon: BlockIcon,
    pub title: SharedString,
    pub description: SharedString,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FeaturePreset {
    pub features: Vec<Feature>,
}

impl Default for FeaturePreset {
    fn default() -> Self {
        let feature = |icon, title: &'static str, description: &'static str| Feature {
            icon,
            title: title.into(),
            description: description.into(),
        };
        Self {
            features: vec![
                feature(
                    BlockIcon::Zap,
                    "Fast by default",
                    "Pages render in milliseconds.",
                ),
                feature(
                    BlockIcon::Shield,
                    "Secure",
                    "Encrypted at rest and in transit.",
                ),
                feature(
                    BlockIcon::CreditCard,
                    "Simple billing",
                    "One invoice for the whole team.",
                ),
                feature(
                    BlockIcon::Users,
                    "Built for teams",
                    "Invite collaborators in one click.",
                ),
            ],
        }
    }
}

/// Name, email and message with the checks every contact variant applies.
pub fn contact_form(effect: impl SubmitEffect) -> FormResult<FormController> {
    let form = FormController::new(
        [NAME_FIELD, EMAIL_FIELD, SUBJECT_FIELD, MESSAGE_FIELD],
        effect,
        FormOptions::default(),
    )?;
    form.register_field_validator(NAME_FIELD, rules::required())?;
    form.register_field_validator(EMAIL_FIELD, rules::required())?;
    form.register_field_validator(EMAIL_FIELD, rules::email())?;
    form.register_field_validator(MESSAGE_FIELD, rules::required())?;
    form.register_field_validator(MESSAGE_FIELD, rules::min_length(MESSAGE_MIN_LENGTH))?;
    Ok(form)
}

/// Single email field used by newsletter signups.
pub fn newsletter_form(effect: impl SubmitEffect) -> FormResult<FormController> {
    let form = FormController::new([EMAIL_FIELD], effect, FormOptions::default())?;
    form.register_field_validator(EMAIL_FIELD, rules::required())?;
    form.register_field_validator(EMAIL_FIELD, rules::email())?;
    Ok(form)
}

/// Email and password used by the auth pages.
pub fn sign_in_form(effect: impl SubmitEffect) -> FormResult<FormController> {
    let form = FormController::new([EMAIL_FIELD, PASSWORD_FIELD], effect, FormOptions::default())?;
    form.register_field_validator(EMAIL_FIELD, rules::required())?;
    form.register_field_validator(EMAIL_FIELD, rules::email())?;
    form.register_field_validator(PASSWORD_FIELD, rules::required())?;
    Ok(form)
}
