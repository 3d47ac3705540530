use std::collections::{BTreeMap, BTreeSet};
use std::fmt::{Display, Formatter};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::time::Duration;

use futures_timer::Delay;
use gpui::{SharedString, Window};
use tracing::{debug, warn};

use super::effect::{SubmitEffect, SubmitError};
use super::validation::{FieldError, FieldValidator, FormFields, collect_errors};

static FORM_ID_ALLOCATOR: AtomicU64 = AtomicU64::new(1);

#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct FormId(pub u64);

impl FormId {
    pub fn next() -> Self {
        Self(FORM_ID_ALLOCATOR.fetch_add(1, Ordering::SeqCst))
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct FieldKey(&'static str);

impl FieldKey {
    pub const fn new(value: &'static str) -> Self {
        Self(value)
    }

    pub const fn as_str(self) -> &'static str {
        self.0
    }
}

impl Display for FieldKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0)
    }
}

impl From<&'static str> for FieldKey {
    fn from(value: &'static str) -> Self {
        Self(value)
    }
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct FieldValues {
    entries: Vec<(FieldKey, SharedString)>,
}

impl FieldValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds values from `(key, value)` pairs. A repeated key keeps its first
    /// position and its last value.
    pub fn from_entries(entries: impl IntoIterator<Item = (FieldKey, SharedString)>) -> Self {
        let mut values = Self::new();
        for (key, value) in entries {
            values.insert(key, value);
        }
        values
    }

    pub fn get(&self, key: FieldKey) -> Option<&SharedString> {
        self.entries
            .iter()
            .find_map(|(entry_key, value)| (*entry_key == key).then_some(value))
    }

    pub fn contains(&self, key: FieldKey) -> bool {
        self.get(key).is_some()
    }

    pub fn keys(&self) -> impl Iterator<Item = FieldKey> + '_ {
        self.entries.iter().map(|(key, _)| *key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldKey, &SharedString)> + '_ {
        self.entries.iter().map(|(key, value)| (*key, value))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(super) fn insert(&mut self, key: FieldKey, value: SharedString) {
        match self.entries.iter_mut().find(|(entry_key, _)| *entry_key == key) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((key, value)),
        }
    }

    pub(super) fn replace(&mut self, key: FieldKey, value: SharedString) -> bool {
        match self.entries.iter_mut().find(|(entry_key, _)| *entry_key == key) {
            Some((_, slot)) => {
                *slot = value;
                true
            }
            None => false,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SubmitState {
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

impl SubmitState {
    pub const fn accepts_submit(self) -> bool {
        matches!(self, SubmitState::Idle | SubmitState::Failed)
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ValidationMode {
    OnSubmit,
    OnBlur,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FormOptions {
    pub validate_mode: ValidationMode,
    pub focus_first_error_on_submit: bool,
}

impl Default for FormOptions {
    fn default() -> Self {
        Self {
            validate_mode: ValidationMode::OnSubmit,
            focus_first_error_on_submit: true,
        }
    }
}

/// What a single `request_submit` call ended with.
#[derive(Clone, Debug)]
pub enum SubmitOutcome {
    Succeeded,
    Failed(SubmitError),
    Invalid,
    Ignored(SubmitState),
    /// The form was reset or disposed while the effect was in flight.
    Discarded,
}

impl SubmitOutcome {
    pub fn is_succeeded(&self) -> bool {
        matches!(self, SubmitOutcome::Succeeded)
    }
}

#[derive(Clone, Debug)]
pub struct FormSnapshot {
    pub id: FormId,
    pub values: FieldValues,
    pub errors: BTreeMap<FieldKey, FieldError>,
    pub submit_state: SubmitState,
    pub submit_count: u32,
    pub last_error: Option<SubmitError>,
    pub is_dirty: bool,
    pub is_valid: bool,
}

#[derive(Debug, Clone, Eq, PartialEq, thiserror::Error)]
pub enum FormError {
    #[error("form state lock poisoned while {0}")]
    StatePoisoned(&'static str),
    #[error("invalid submit state transition: {from:?} -> {to:?}")]
    InvalidStateTransition { from: SubmitState, to: SubmitState },
    #[error("unknown form field `{0}`")]
    UnknownField(FieldKey),
    #[error("form field `{0}` declared more than once")]
    DuplicateField(FieldKey),
}

pub type FormResult<T> = Result<T, FormError>;

pub(super) type FieldValidatorFn = Arc<dyn FieldValidator>;
pub(super) type FocusHandler = Arc<dyn Fn(&mut Window, &mut gpui::App) + Send + Sync>;

pub(super) struct FormState {
    pub(super) id: FormId,
    pub(super) defaults: FieldValues,
    pub(super) values: FieldValues,
    pub(super) errors: BTreeMap<FieldKey, FieldError>,
    pub(super) touched: BTreeSet<FieldKey>,
    pub(super) submit_state: SubmitState,
    pub(super) submit_count: u32,
    pub(super) last_error: Option<SubmitError>,
    pub(super) generation: u64,
    pub(super) disposed: bool,
}

impl FormState {
    pub(super) fn first_error(&self) -> Option<FieldKey> {
        self.values.keys().find(|key| self.errors.contains_key(key))
    }

    fn restore_defaults(&mut self) {
        self.values = self.defaults.clone();
        self.errors.clear();
        self.touched.clear();
        self.submit_state = SubmitState::Idle;
        self.submit_count = 0;
        self.last_error = None;
        self.generation = self.generation.wrapping_add(1);
    }
}

/// Clones share the same state.
#[derive(Clone)]
pub struct FormController {
    pub(super) options: FormOptions,
    pub(super) state: Arc<RwLock<FormState>>,
    pub(super) validators: Arc<RwLock<BTreeMap<FieldKey, Vec<FieldValidatorFn>>>>,
    pub(super) focus_handlers: Arc<RwLock<BTreeMap<FieldKey, FocusHandler>>>,
    effect: Arc<dyn SubmitEffect>,
}

impl FormController {
    pub fn new(
        fields: impl IntoIterator<Item = FieldKey>,
        effect: impl SubmitEffect,
        options: FormOptions,
    ) -> FormResult<Self> {
        let mut defaults = FieldValues::new();
        for key in fields {
            if defaults.contains(key) {
                return Err(FormError::DuplicateField(key));
            }
            defaults.insert(key, SharedString::default());
        }
        Ok(Self::with_defaults(defaults, effect, options))
    }

    /// Creates a form seeded with `defaults`; `reset` returns to them.
    pub fn with_defaults(
        defaults: FieldValues,
        effect: impl SubmitEffect,
        options: FormOptions,
    ) -> Self {
        let id = FormId::next();
        debug!(form = id.0, fields = defaults.len(), "form created");
        Self {
            options,
            state: Arc::new(RwLock::new(FormState {
                id,
                values: defaults.clone(),
                defaults,
                errors: BTreeMap::new(),
                touched: BTreeSet::new(),
                submit_state: SubmitState::Idle,
                submit_count: 0,
                last_error: None,
                generation: 0,
                disposed: false,
            })),
            validators: Arc::new(RwLock::new(BTreeMap::new())),
            focus_handlers: Arc::new(RwLock::new(BTreeMap::new())),
            effect: Arc::new(effect),
        }
    }

    pub fn for_model<M: FormFields>(
        effect: impl SubmitEffect,
        options: FormOptions,
    ) -> FormResult<Self> {
        Self::new(M::KEYS.iter().copied(), effect, options)
    }

    pub fn from_model<M: FormFields>(
        model: &M,
        effect: impl SubmitEffect,
        options: FormOptions,
    ) -> Self {
        Self::with_defaults(model.to_values(), effect, options)
    }

    pub fn form_id(&self) -> FormResult<FormId> {
        Ok(read_lock(&self.state, "reading form id")?.id)
    }

    pub fn options(&self) -> FormOptions {
        self.options
    }

    pub fn set_field(&self, key: FieldKey, value: impl Into<SharedString>) -> FormResult<()> {
        let mut state = write_lock(&self.state, "writing field value")?;
        if !state.values.replace(key, value.into()) {
            return Err(FormError::UnknownField(key));
        }
        state.errors.remove(&key);
        Ok(())
    }

    pub fn value(&self, key: FieldKey) -> FormResult<SharedString> {
        read_lock(&self.state, "reading field value")?
            .values
            .get(key)
            .cloned()
            .ok_or(FormError::UnknownField(key))
    }

    pub fn values(&self) -> FormResult<FieldValues> {
        Ok(read_lock(&self.state, "reading field values")?.values.clone())
    }

    pub fn errors(&self) -> FormResult<BTreeMap<FieldKey, FieldError>> {
        Ok(read_lock(&self.state, "reading field errors")?.errors.clone())
    }

    pub fn field_error(&self, key: FieldKey) -> FormResult<Option<FieldError>> {
        Ok(read_lock(&self.state, "reading field error")?
            .errors
            .get(&key)
            .cloned())
    }

    pub fn submit_state(&self) -> FormResult<SubmitState> {
        Ok(read_lock(&self.state, "reading submit state")?.submit_state)
    }

    pub fn last_error(&self) -> FormResult<Option<SubmitError>> {
        Ok(read_lock(&self.state, "reading last submit error")?
            .last_error
            .clone())
    }

    /// Dropping the returned future before it completes puts the form back in
    /// the state it was submitted from.
    pub async fn request_submit(&self) -> FormResult<SubmitOutcome> {
        let validators = read_lock(&self.validators, "reading validators for submit")?.clone();

        let (id, values, mut guard) = {
            let mut state = write_lock(&self.state, "preparing submit")?;
            if state.disposed {
                return Ok(SubmitOutcome::Discarded);
            }
            if !state.submit_state.accepts_submit() {
                debug!(
                    form = state.id.0,
                    state = ?state.submit_state,
                    "submit request ignored"
                );
                return Ok(SubmitOutcome::Ignored(state.submit_state));
            }
            state.submit_count = state.submit_count.saturating_add(1);
            let previous = state.submit_state;
            transition_submit_state(&mut state, SubmitState::Submitting)?;
            let guard = PendingSubmit {
                state: self.state.clone(),
                generation: state.generation,
                previous,
                previous_error: state.last_error.clone(),
                armed: true,
            };
            (state.id, state.values.clone(), guard)
        };

        let errors = collect_errors(&validators, &values);

        {
            let mut state = write_lock(&self.state, "applying submit validation")?;
            if guard.is_stale(&state) {
                guard.disarm();
                return Ok(SubmitOutcome::Discarded);
            }
            if !errors.is_empty() {
                debug!(
                    form = id.0,
                    invalid_fields = errors.len(),
                    "submit rejected by validation"
                );
                guard.disarm();
                state.errors = errors;
                transition_submit_state(&mut state, guard.previous)?;
                return Ok(SubmitOutcome::Invalid);
            }
            state.errors.clear();
            state.last_error = None;
        }

        let result = self.effect.submit(values).await;

        let mut state = write_lock(&self.state, "completing submit")?;
        if guard.is_stale(&state) {
            guard.disarm();
            debug!(form = id.0, "discarding submit result for a reset or disposed form");
            return Ok(SubmitOutcome::Discarded);
        }
        guard.disarm();
        match result {
            Ok(()) => {
                transition_submit_state(&mut state, SubmitState::Succeeded)?;
                Ok(SubmitOutcome::Succeeded)
            }
            Err(error) => {
                warn!(form = id.0, %error, "form submission failed");
                transition_submit_state(&mut state, SubmitState::Failed)?;
                state.last_error = Some(error.clone());
                Ok(SubmitOutcome::Failed(error))
            }
        }
    }

    pub async fn request_submit_in(
        &self,
        window: &mut Window,
        cx: &mut gpui::App,
    ) -> FormResult<SubmitOutcome> {
        let outcome = self.request_submit().await?;
        if matches!(outcome, SubmitOutcome::Invalid) && self.options.focus_first_error_on_submit {
            let _ = self.focus_first_error(window, cx)?;
        }
        Ok(outcome)
    }

    /// Returns to `Idle` with default values and no errors. A submission still
    /// in flight is discarded when it resolves.
    pub fn reset(&self) -> FormResult<()> {
        let mut state = write_lock(&self.state, "resetting form")?;
        debug!(form = state.id.0, from = ?state.submit_state, "form reset");
        state.restore_defaults();
        Ok(())
    }

    /// Waits `delay`, then resets the form if it is still showing the same
    /// successful submission. Returns whether the reset happened.
    pub async fn reset_after(&self, delay: Duration) -> FormResult<bool> {
        let generation = {
            let state = read_lock(&self.state, "scheduling reset")?;
            if state.submit_state != SubmitState::Succeeded || state.disposed {
                return Ok(false);
            }
            state.generation
        };

        Delay::new(delay).await;

        let mut state = write_lock(&self.state, "running scheduled reset")?;
        if state.disposed
            || state.generation != generation
            || state.submit_state != SubmitState::Succeeded
        {
            return Ok(false);
        }
        state.restore_defaults();
        Ok(true)
    }

    /// Marks the form as torn down. Later submissions are not started and a
    /// pending one does not write its result.
    pub fn dispose(&self) -> FormResult<()> {
        let mut state = write_lock(&self.state, "disposing form")?;
        state.disposed = true;
        state.generation = state.generation.wrapping_add(1);
        Ok(())
    }

    pub fn is_disposed(&self) -> FormResult<bool> {
        Ok(read_lock(&self.state, "reading disposed flag")?.disposed)
    }

    pub fn register_focus_handler(
        &self,
        key: FieldKey,
        handler: impl Fn(&mut Window, &mut gpui::App) + Send + Sync + 'static,
    ) -> FormResult<()> {
        self.ensure_field(key)?;
        let mut handlers = write_lock(&self.focus_handlers, "registering focus handler")?;
        handlers.insert(key, Arc::new(handler));
        Ok(())
    }

    pub fn focus_first_error(&self, window: &mut Window, cx: &mut gpui::App) -> FormResult<bool> {
        let first_error = read_lock(&self.state, "reading first error key")?.first_error();
        let Some(key) = first_error else {
            return Ok(false);
        };
        let handler = read_lock(&self.focus_handlers, "reading focus handlers")?
            .get(&key)
            .cloned();
        if let Some(handler) = handler {
            handler(window, cx);
            Ok(true)
        } else {
            Ok(false)
        }
    }

    pub fn first_error(&self) -> FormResult<Option<FieldKey>> {
        Ok(read_lock(&self.state, "reading first error key")?.first_error())
    }

    pub fn snapshot(&self) -> FormResult<FormSnapshot> {
        let state = read_lock(&self.state, "creating form snapshot")?;
        Ok(FormSnapshot {
            id: state.id,
            values: state.values.clone(),
            errors: state.errors.clone(),
            submit_state: state.submit_state,
            submit_count: state.submit_count,
            last_error: state.last_error.clone(),
            is_dirty: state.values != state.defaults,
            is_valid: state.errors.is_empty(),
        })
    }

    pub(super) fn ensure_field(&self, key: FieldKey) -> FormResult<()> {
        if read_lock(&self.state, "checking field key")?
            .values
            .contains(key)
        {
            Ok(())
        } else {
            Err(FormError::UnknownField(key))
        }
    }
}

/// Marks a submission between the move to `Submitting` and its result.
/// Dropped while armed, it returns the form to the state the submission
/// started from.
struct PendingSubmit {
    state: Arc<RwLock<FormState>>,
    generation: u64,
    previous: SubmitState,
    previous_error: Option<SubmitError>,
    armed: bool,
}

impl PendingSubmit {
    fn is_stale(&self, state: &FormState) -> bool {
        state.disposed || state.generation != self.generation
    }

    fn disarm(&mut self) {
        self.armed = false;
    }
}

impl Drop for PendingSubmit {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        let Ok(mut state) = self.state.write() else {
            return;
        };
        if self.is_stale(&state) || state.submit_state != SubmitState::Submitting {
            return;
        }
        debug!(form = state.id.0, to = ?self.previous, "submit abandoned before completion");
        state.submit_state = self.previous;
        state.last_error = self.previous_error.take();
    }
}

pub(super) fn transition_submit_state(state: &mut FormState, next: SubmitState) -> FormResult<()> {
    let current = state.submit_state;
    if current == next {
        return Ok(());
    }

    let allowed = matches!(
        (current, next),
        (SubmitState::Idle, SubmitState::Submitting)
            | (SubmitState::Failed, SubmitState::Submitting)
            | (SubmitState::Submitting, SubmitState::Succeeded)
            | (SubmitState::Submitting, SubmitState::Failed)
            | (_, SubmitState::Idle)
    );
    if !allowed {
        return Err(FormError::InvalidStateTransition {
            from: current,
            to: next,
        });
    }
    debug!(form = state.id.0, from = ?current, to = ?next, "submit state transition");
    state.submit_state = next;
    Ok(())
}

pub(super) fn read_lock<'a, T>(
    lock: &'a RwLock<T>,
    context: &'static str,
) -> FormResult<RwLockReadGuard<'a, T>> {
    lock.read().map_err(|_| FormError::StatePoisoned(context))
}

pub(super) fn write_lock<'a, T>(
    lock: &'a RwLock<T>,
    context: &'static str,
) -> FormResult<RwLockWriteGuard<'a, T>> {
    lock.write().map_err(|_| FormError::StatePoisoned(context))
}
