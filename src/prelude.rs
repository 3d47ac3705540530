pub use crate::disclosure::{DisclosureGroup, DisclosureMode, OpenSet, PanelId};
pub use crate::form::rules::{Email, MinLength, Required};
pub use crate::form::{
    FieldError, FieldKey, FieldValidator, FieldValues, FormController, FormError, FormFields,
    FormOptions, FormResult, FormSnapshot, SharedString, SimulatedSubmit, SubmitEffect,
    SubmitError, SubmitOutcome, SubmitState, ValidationMode,
};
pub use crate::icon::{AccentColor, BlockIcon};
pub use crate::presets::{FaqPreset, FeaturePreset, FooterPreset};
