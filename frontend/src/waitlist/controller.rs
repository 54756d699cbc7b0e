use crate::config::{FAILURE_MESSAGE, SUCCESS_MESSAGE};
use crate::waitlist::backend::SubmissionBackend;
use crate::waitlist::form::{FormAction, SubmitOutcome, WaitlistForm};

#[cfg(test)]
use mockall::automock;

/// Transient user-facing messages. Implementations must not block.
#[cfg_attr(test, automock)]
pub trait Notifier {
    fn notify_success(&self, message: &str);
    fn notify_failure(&self, message: &str);
}

/// Runs one waitlist submission against `form` as it is right now.
///
/// Returns `None` without dispatching anything when the email is empty or a
/// submission is already in flight. Otherwise dispatches `SubmitStarted`,
/// waits for the backend, dispatches `SubmitSettled` and only then notifies,
/// so the form always leaves the submitting phase.
pub async fn submit_waitlist<D>(
    form: &WaitlistForm,
    backend: &dyn SubmissionBackend,
    notifier: &dyn Notifier,
    dispatch: D,
) -> Option<SubmitOutcome>
where
    D: Fn(FormAction),
{
    let email = form.pending_email()?.to_owned();

    dispatch(FormAction::SubmitStarted);
    log::debug!("waitlist submission started");

    let outcome = match backend.submit(&email).await {
        Ok(()) => SubmitOutcome::Joined,
        Err(_) => SubmitOutcome::Failed,
    };

    dispatch(FormAction::SubmitSettled(outcome));
    log::debug!("waitlist submission settled: {:?}", outcome);

    match outcome {
        SubmitOutcome::Joined => notifier.notify_success(SUCCESS_MESSAGE),
        SubmitOutcome::Failed => notifier.notify_failure(FAILURE_MESSAGE),
    }
    Some(outcome)
}
