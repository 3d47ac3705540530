use std::collections::BTreeMap;
use std::sync::Arc;

use gpui::SharedString;
use tracing::trace;

use super::controller::{
    FieldKey, FieldValidatorFn, FieldValues, FormController, FormError, FormResult,
    ValidationMode, read_lock, write_lock,
};

#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum FieldError {
    #[error("This field is required")]
    Required,
    #[error("Please enter a valid email address")]
    InvalidFormat,
    #[error("Must be at least {min} characters")]
    TooShort { min: usize },
    #[error("{0}")]
    Custom(SharedString),
}

impl FieldError {
    pub fn custom(message: impl Into<SharedString>) -> Self {
        Self::Custom(message.into())
    }

    pub fn message(&self) -> SharedString {
        match self {
            FieldError::Custom(message) => message.clone(),
            other => other.to_string().into(),
        }
    }
}

pub trait FieldValidator: Send + Sync {
    fn validate(&self, value: &str) -> Result<(), FieldError>;
}

impl<F> FieldValidator for F
where
    F: Fn(&str) -> Result<(), FieldError> + Send + Sync,
{
    fn validate(&self, value: &str) -> Result<(), FieldError> {
        (self)(value)
    }
}

/// A typed view over a form's string fields, usually derived with
/// `#[derive(FormFields)]`.
pub trait FormFields: Sized {
    const KEYS: &'static [FieldKey];

    fn from_values(values: &FieldValues) -> Self;
    fn to_values(&self) -> FieldValues;
}

impl FormController {
    /// Adds a validator to `key`. Validators of one field run in registration
    /// order and the first failure becomes the field's error.
    pub fn register_field_validator<V>(&self, key: FieldKey, validator: V) -> FormResult<()>
    where
        V: FieldValidator + 'static,
    {
        self.ensure_field(key)?;
        let wrapped: FieldValidatorFn = Arc::new(validator);
        let mut validators = write_lock(&self.validators, "registering field validator")?;
        validators.entry(key).or_default().push(wrapped);
        Ok(())
    }

    pub fn register_field_validators<V>(
        &self,
        key: FieldKey,
        validators: impl IntoIterator<Item = V>,
    ) -> FormResult<()>
    where
        V: FieldValidator + 'static,
    {
        for validator in validators {
            self.register_field_validator(key, validator)?;
        }
        Ok(())
    }

    /// Marks a field as visited. In [`ValidationMode::OnBlur`] this also
    /// validates it.
    pub fn touch(&self, key: FieldKey) -> FormResult<()> {
        self.ensure_field(key)?;
        {
            let mut state = write_lock(&self.state, "touching field")?;
            state.touched.insert(key);
        }
        if self.options.validate_mode == ValidationMode::OnBlur {
            let _ = self.validate_field(key)?;
        }
        Ok(())
    }

    pub fn validate_field(&self, key: FieldKey) -> FormResult<bool> {
        let validators = read_lock(&self.validators, "reading field validators")?
            .get(&key)
            .cloned()
            .unwrap_or_default();
        let (value, generation) = {
            let state = read_lock(&self.state, "reading field for validation")?;
            let value = state
                .values
                .get(key)
                .cloned()
                .ok_or(FormError::UnknownField(key))?;
            (value, state.generation)
        };

        let failure = first_failure(&validators, &value);

        let mut state = write_lock(&self.state, "writing field validation result")?;
        if state.generation != generation || state.values.get(key) != Some(&value) {
            return Ok(failure.is_none());
        }
        match failure {
            Some(error) => {
                trace!(form = state.id.0, field = %key, %error, "field invalid");
                state.errors.insert(key, error);
                Ok(false)
            }
            None => {
                state.errors.remove(&key);
                Ok(true)
            }
        }
    }

    pub fn validate_form(&self) -> FormResult<bool> {
        let validators = read_lock(&self.validators, "reading validators for form")?.clone();
        let (values, generation) = {
            let state = read_lock(&self.state, "reading form for validation")?;
            (state.values.clone(), state.generation)
        };

        let errors = collect_errors(&validators, &values);
        let is_valid = errors.is_empty();

        let mut state = write_lock(&self.state, "applying form validation result")?;
        if state.generation == generation && state.values == values {
            state.errors = errors;
        }
        Ok(is_valid)
    }

    /// The message to render under a field. Errors stay hidden until the
    /// field was touched or a submit was attempted.
    pub fn field_error_for_display(&self, key: FieldKey) -> FormResult<Option<SharedString>> {
        let state = read_lock(&self.state, "reading display error message")?;
        let Some(error) = state.errors.get(&key) else {
            return Ok(None);
        };
        if !state.touched.contains(&key) && state.submit_count == 0 {
            return Ok(None);
        }
        Ok(Some(error.message()))
    }
}

fn first_failure(validators: &[FieldValidatorFn], value: &str) -> Option<FieldError> {
    validators
        .iter()
        .find_map(|validator| validator.validate(value).err())
}

pub(super) fn collect_errors(
    validators: &BTreeMap<FieldKey, Vec<FieldValidatorFn>>,
    values: &FieldValues,
) -> BTreeMap<FieldKey, FieldError> {
    values
        .iter()
        .filter_map(|(key, value)| {
            let field_validators = validators.get(&key)?;
            first_failure(field_validators, value).map(|error| (key, error))
        })
        .collect()
}
