use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use futures::future::BoxFuture;
use futures_timer::Delay;
use gpui::SharedString;

use super::controller::FieldValues;

/// Why a submission failed. The form stores it for display and never
/// inspects it.
#[derive(Clone, Debug, thiserror::Error)]
pub enum SubmitError {
    #[error("network error: {0}")]
    Network(SharedString),
    #[error("submission rejected: {0}")]
    Rejected(SharedString),
    #[error(transparent)]
    Other(Arc<dyn std::error::Error + Send + Sync>),
}

impl SubmitError {
    pub fn network(message: impl Into<SharedString>) -> Self {
        Self::Network(message.into())
    }

    pub fn rejected(message: impl Into<SharedString>) -> Self {
        Self::Rejected(message.into())
    }

    pub fn other(error: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Other(Arc::new(error))
    }

    /// Message suitable for a form-level banner.
    pub fn message(&self) -> SharedString {
        match self {
            SubmitError::Network(message) | SubmitError::Rejected(message) => message.clone(),
            SubmitError::Other(error) => error.to_string().into(),
        }
    }
}

pub type BoxedSubmitFuture = BoxFuture<'static, Result<(), SubmitError>>;

/// The asynchronous operation a form runs once validation passes.
pub trait SubmitEffect: Send + Sync + 'static {
    fn submit(&self, values: FieldValues) -> BoxedSubmitFuture;
}

impl<F, Fut> SubmitEffect for F
where
    F: Fn(FieldValues) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<(), SubmitError>> + Send + 'static,
{
    fn submit(&self, values: FieldValues) -> BoxedSubmitFuture {
        Box::pin((self)(values))
    }
}

/// Fixed-delay stand-in for a network call that always succeeds.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SimulatedSubmit {
    delay: Duration,
}

impl SimulatedSubmit {
    pub const fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub const fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for SimulatedSubmit {
    fn default() -> Self {
        Self::new(Duration::from_millis(1500))
    }
}

impl SubmitEffect for SimulatedSubmit {
    fn submit(&self, values: FieldValues) -> BoxedSubmitFuture {
        let delay = self.delay;
        Box::pin(async move {
            Delay::new(delay).await;
            tracing::trace!(fields = values.len(), "simulated submission finished");
            Ok(())
        })
    }
}

pub fn simulated_submit(delay: Duration) -> SimulatedSubmit {
    SimulatedSubmit::new(delay)
}
