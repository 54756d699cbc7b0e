use std::rc::Rc;
use yew::Reducible;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    Submitting,
}

/// How a submission settled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Joined,
    Failed,
}

#[derive(Clone, Debug, PartialEq)]
pub enum FormAction {
    EmailChanged(String),
    SubmitStarted,
    SubmitSettled(SubmitOutcome),
}

/// State behind the waitlist form: the typed email and whether a
/// submission is in flight.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WaitlistForm {
    email: String,
    phase: Phase,
}

impl WaitlistForm {
    pub fn with_email(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            phase: Phase::Idle,
        }
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == Phase::Submitting
    }

    /// The submit button is disabled exactly while a submission is in flight.
    pub fn is_submit_disabled(&self) -> bool {
        self.is_submitting()
    }

    /// Email to send if a submission may start now. Only emptiness is
    /// checked; whitespace counts as input.
    pub fn pending_email(&self) -> Option<&str> {
        if self.email.is_empty() || self.is_submitting() {
            None
        } else {
            Some(&self.email)
        }
    }
}

impl Reducible for WaitlistForm {
    type Action = FormAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            FormAction::EmailChanged(email) => Rc::new(Self {
                email,
                phase: self.phase,
            }),
            FormAction::SubmitStarted => {
                if self.pending_email().is_none() {
                    return self;
                }
                Rc::new(Self {
                    email: self.email.clone(),
                    phase: Phase::Submitting,
                })
            }
            FormAction::SubmitSettled(outcome) => {
                if !self.is_submitting() {
                    return self;
                }
                let email = match outcome {
                    SubmitOutcome::Joined => String::new(),
                    SubmitOutcome::Failed => self.email.clone(),
                };
                Rc::new(Self {
                    email,
                    phase: Phase::Idle,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(form: WaitlistForm, actions: Vec<FormAction>) -> Rc<WaitlistForm> {
        actions
            .into_iter()
            .fold(Rc::new(form), |state, action| state.reduce(action))
    }

    #[test]
    fn starts_idle_and_empty() {
        let form = WaitlistForm::default();
        assert_eq!(form.email(), "");
        assert_eq!(form.phase(), Phase::Idle);
        assert!(!form.is_submit_disabled());
        assert_eq!(form.pending_email(), None);
    }

    #[test]
    fn email_change_overwrites_without_trimming() {
        let form = apply(
            WaitlistForm::default(),
            vec![
                FormAction::EmailChanged("a@b".into()),
                FormAction::EmailChanged("  a@b.com ".into()),
            ],
        );
        assert_eq!(form.email(), "  a@b.com ");
        assert_eq!(form.pending_email(), Some("  a@b.com "));
    }

    #[test]
    fn start_on_empty_email_is_ignored() {
        let before = Rc::new(WaitlistForm::default());
        let after = before.clone().reduce(FormAction::SubmitStarted);
        assert!(Rc::ptr_eq(&before, &after));
        assert!(!after.is_submitting());
    }

    #[test]
    fn whitespace_email_can_be_submitted() {
        let form = apply(WaitlistForm::with_email("   "), vec![FormAction::SubmitStarted]);
        assert!(form.is_submitting());
    }

    #[test]
    fn second_start_while_submitting_is_ignored() {
        let submitting = apply(WaitlistForm::with_email("a@b.com"), vec![FormAction::SubmitStarted]);
        let again = submitting.clone().reduce(FormAction::SubmitStarted);
        assert!(Rc::ptr_eq(&submitting, &again));
        assert_eq!(submitting.pending_email(), None);
    }

    #[test]
    fn joined_clears_email_and_returns_to_idle() {
        let form = apply(
            WaitlistForm::with_email("a@b.com"),
            vec![
                FormAction::SubmitStarted,
                FormAction::SubmitSettled(SubmitOutcome::Joined),
            ],
        );
        assert_eq!(form.email(), "");
        assert_eq!(form.phase(), Phase::Idle);
    }

    #[test]
    fn failed_keeps_email_and_returns_to_idle() {
        let form = apply(
            WaitlistForm::with_email("a@b.com"),
            vec![
                FormAction::SubmitStarted,
                FormAction::SubmitSettled(SubmitOutcome::Failed),
            ],
        );
        assert_eq!(form.email(), "a@b.com");
        assert_eq!(form.phase(), Phase::Idle);
    }

    #[test]
    fn settle_without_start_is_ignored() {
        let before = Rc::new(WaitlistForm::with_email("a@b.com"));
        let after = before.clone().reduce(FormAction::SubmitSettled(SubmitOutcome::Joined));
        assert_eq!(after.email(), "a@b.com");
        assert!(Rc::ptr_eq(&before, &after));
    }

    #[test]
    fn typing_while_submitting_keeps_phase() {
        let form = apply(
            WaitlistForm::with_email("a@b.com"),
            vec![
                FormAction::SubmitStarted,
                FormAction::EmailChanged("c@d.com".into()),
            ],
        );
        assert!(form.is_submitting());
        assert_eq!(form.email(), "c@d.com");
    }

    #[test]
    fn disabled_iff_submitting() {
        let idle = Rc::new(WaitlistForm::with_email("a@b.com"));
        assert_eq!(idle.is_submit_disabled(), idle.is_submitting());
        let busy = idle.reduce(FormAction::SubmitStarted);
        assert!(busy.is_submit_disabled());
        assert_eq!(busy.is_submit_disabled(), busy.is_submitting());
        let done = busy.reduce(FormAction::SubmitSettled(SubmitOutcome::Failed));
        assert!(!done.is_submit_disabled());
    }
}
