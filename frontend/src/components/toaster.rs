use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config::{MAX_VISIBLE_TOASTS, TOAST_DURATION_MS};
use crate::waitlist::controller::Notifier;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Failure,
}

impl ToastKind {
    fn class(self) -> &'static str {
        match self {
            ToastKind::Success => "toast toast-success",
            ToastKind::Failure => "toast toast-failure",
        }
    }

    fn icon(self) -> &'static str {
        match self {
            ToastKind::Success => "✓",
            ToastKind::Failure => "!",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub kind: ToastKind,
    pub message: String,
}

pub enum ToastAction {
    Push(ToastKind, String),
    Dismiss(u32),
}

/// Toasts currently on screen, oldest first.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastQueue {
    next_id: u32,
    toasts: Vec<Toast>,
}

impl ToastQueue {
    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }
}

impl Reducible for ToastQueue {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            ToastAction::Push(kind, message) => {
                let mut toasts = self.toasts.clone();
                toasts.push(Toast {
                    id: self.next_id,
                    kind,
                    message,
                });
                if toasts.len() > MAX_VISIBLE_TOASTS {
                    let overflow = toasts.len() - MAX_VISIBLE_TOASTS;
                    toasts.drain(..overflow);
                }
                Rc::new(Self {
                    next_id: self.next_id.wrapping_add(1),
                    toasts,
                })
            }
            ToastAction::Dismiss(id) => {
                if !self.toasts.iter().any(|t| t.id == id) {
                    return self;
                }
                Rc::new(Self {
                    next_id: self.next_id,
                    toasts: self.toasts.iter().filter(|t| t.id != id).cloned().collect(),
                })
            }
        }
    }
}

/// Context handle used to raise toasts from anywhere under `ToastProvider`.
#[derive(Clone, PartialEq)]
pub struct ToastHandle {
    dispatcher: UseReducerDispatcher<ToastQueue>,
}

impl ToastHandle {
    pub fn show(&self, kind: ToastKind, message: &str) {
        self.dispatcher
            .dispatch(ToastAction::Push(kind, message.to_string()));
    }
}

impl Notifier for ToastHandle {
    fn notify_success(&self, message: &str) {
        self.show(ToastKind::Success, message);
    }

    fn notify_failure(&self, message: &str) {
        self.show(ToastKind::Failure, message);
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component]
pub fn ToastProvider(props: &ToastProviderProps) -> Html {
    let queue = use_reducer(ToastQueue::default);
    let handle = ToastHandle {
        dispatcher: queue.dispatcher(),
    };
    let on_dismiss = {
        let dispatcher = queue.dispatcher();
        Callback::from(move |id: u32| dispatcher.dispatch(ToastAction::Dismiss(id)))
    };

    html! {
        <ContextProvider<ToastHandle> context={handle}>
            { for props.children.iter() }
            <div class="toaster" aria-live="polite">
                <style>{TOASTER_CSS}</style>
                { for queue.toasts().iter().map(|toast| html! {
                    <ToastItem
                        key={toast.id}
                        toast={toast.clone()}
                        on_dismiss={on_dismiss.clone()}
                    />
                }) }
            </div>
        </ContextProvider<ToastHandle>>
    }
}

#[derive(Properties, PartialEq)]
struct ToastItemProps {
    toast: Toast,
    on_dismiss: Callback<u32>,
}

#[function_component]
fn ToastItem(props: &ToastItemProps) -> Html {
    let id = props.toast.id;
    {
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with_deps(
            move |_| {
                let timeout = Timeout::new(TOAST_DURATION_MS, move || on_dismiss.emit(id));
                move || drop(timeout)
            },
            id,
        );
    }
    let onclick = {
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_: MouseEvent| on_dismiss.emit(id))
    };

    html! {
        <div class={props.toast.kind.class()} role="status" {onclick}>
            <span class="toast-icon">{props.toast.kind.icon()}</span>
            <span class="toast-message">{&props.toast.message}</span>
        </div>
    }
}

const TOASTER_CSS: &str = r#"
.toaster {
    position: fixed;
    top: 1.5rem;
    left: 50%;
    transform: translateX(-50%);
    z-index: 50;
    display: flex;
    flex-direction: column;
    gap: 0.5rem;
    width: min(90vw, 360px);
    pointer-events: none;
}
.toast {
    display: flex;
    align-items: center;
    gap: 0.75rem;
    padding: 0.9rem 1rem;
    border-radius: 8px;
    background: rgba(0, 0, 0, 0.8);
    color: white;
    border: 1px solid rgba(255, 255, 255, 0.1);
    font-size: 0.9rem;
    box-shadow: 0 4px 12px rgba(0, 0, 0, 0.3);
    pointer-events: auto;
    cursor: pointer;
    animation: toast-in 0.2s ease-out;
}
.toast-success .toast-icon {
    color: #4ade80;
}
.toast-failure {
    border-color: rgba(248, 113, 113, 0.4);
}
.toast-failure .toast-icon {
    color: #f87171;
}
@keyframes toast-in {
    from { opacity: 0; transform: translateY(-8px); }
    to { opacity: 1; transform: translateY(0); }
}
"#;
