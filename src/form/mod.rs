mod controller;
mod effect;
pub mod rules;
mod validation;


pub use blockui_form_derive::FormFields;
pub use controller::{
    FieldKey, FieldValues, FormController, FormError, FormId, FormOptions, FormResult,
    FormSnapshot, SubmitOutcome, SubmitState, ValidationMode,
};
pub use effect::{BoxedSubmitFuture, SimulatedSubmit, SubmitEffect, SubmitError, simulated_submit};
pub use gpui::SharedString;
pub use validation::{FieldError, FieldValidator, FormFields};
