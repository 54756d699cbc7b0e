use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::toaster::ToastHandle;
use crate::config::PageConfig;
use crate::waitlist::backend::BackendHandle;
use crate::waitlist::controller::submit_waitlist;
use crate::waitlist::form::{FormAction, WaitlistForm};

#[derive(Properties, PartialEq)]
pub struct WaitlistFormProps {
    pub config: PageConfig,
}

#[function_component]
pub fn WaitlistFormView(props: &WaitlistFormProps) -> Html {
    let form = use_reducer(WaitlistForm::default);
    let hovered = use_state(|| false);
    let backend = use_context::<BackendHandle>().unwrap_or_default();
    let toasts = use_context::<ToastHandle>();

    let oninput = {
        let dispatcher = form.dispatcher();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target().and_then(|t| t.dyn_into::<HtmlInputElement>().ok()) {
                dispatcher.dispatch(FormAction::EmailChanged(input.value()));
            }
        })
    };

    let onsubmit = {
        let form = form.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(toasts) = toasts.clone() else {
                log::warn!("waitlist form rendered outside ToastProvider, ignoring submit");
                return;
            };
            let snapshot = (*form).clone();
            let dispatcher = form.dispatcher();
            let backend = backend.clone();
            spawn_local(async move {
                submit_waitlist(&snapshot, &*backend, &toasts, move |action| {
                    dispatcher.dispatch(action)
                })
                .await;
            });
        })
    };

    let onmouseenter = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(true))
    };
    let onmouseleave = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(false))
    };

    let config = &props.config;
    let button_background = if *hovered && !form.is_submit_disabled() {
        config.accent_hover
    } else {
        config.accent
    };
    let button_style = format!(
        "background: {}; color: {};",
        button_background, config.accent_text
    );

    html! {
        <form class="waitlist-form" {onsubmit}>
            <div class="waitlist-row">
                <input
                    class="waitlist-input"
                    type="email"
                    placeholder={config.placeholder}
                    value={form.email().to_string()}
                    {oninput}
                    required=true
                />
                <button
                    class="waitlist-button"
                    type="submit"
                    style={button_style}
                    disabled={form.is_submit_disabled()}
                    {onmouseenter}
                    {onmouseleave}
                >
                    { if form.is_submitting() { "Joining..." } else { "Join Waitlist" } }
                </button>
            </div>
        </form>
    }
}
