use std::ops::Deref;
use std::rc::Rc;

use futures::future::{FutureExt, LocalBoxFuture};
use gloo_timers::future::TimeoutFuture;
use thiserror::Error;

use crate::config::SIMULATED_DELAY_MS;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("waitlist submission failed: {reason}")]
pub struct SubmissionFailure {
    pub reason: String,
}

impl SubmissionFailure {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// Records an email on the waitlist. Supplied by the host so a real
/// service can replace the simulated one without touching the form.
pub trait SubmissionBackend {
    fn submit<'a>(&'a self, email: &'a str) -> LocalBoxFuture<'a, Result<(), SubmissionFailure>>;
}

/// Waits a fixed delay and then accepts every email.
#[derive(Clone, Debug)]
pub struct SimulatedBackend {
    pub delay_ms: u32,
}

impl Default for SimulatedBackend {
    fn default() -> Self {
        Self {
            delay_ms: SIMULATED_DELAY_MS,
        }
    }
}

impl SubmissionBackend for SimulatedBackend {
    fn submit<'a>(&'a self, email: &'a str) -> LocalBoxFuture<'a, Result<(), SubmissionFailure>> {
        async move {
            TimeoutFuture::new(self.delay_ms).await;
            log::debug!("simulated backend accepted {} byte email", email.len());
            Ok(())
        }
        .boxed_local()
    }
}

/// Shared handle to the backend, passed down through Yew context.
#[derive(Clone)]
pub struct BackendHandle(Rc<dyn SubmissionBackend>);

impl BackendHandle {
    pub fn new(backend: impl SubmissionBackend + 'static) -> Self {
        Self(Rc::new(backend))
    }
}

impl Default for BackendHandle {
    fn default() -> Self {
        Self::new(SimulatedBackend::default())
    }
}

impl Deref for BackendHandle {
    type Target = dyn SubmissionBackend;

    fn deref(&self) -> &Self::Target {
        &*self.0
    }
}

impl PartialEq for BackendHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}
