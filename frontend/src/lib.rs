use yew::prelude::*;
use yew_router::prelude::*;

pub mod config;
pub mod waitlist {
    pub mod backend;
    pub mod controller;
    pub mod form;
}
pub mod components {
    pub mod toaster;
    pub mod waitlist_form;
}
pub mod pages {
    pub mod coming_soon;
}

use components::toaster::ToastProvider;
use pages::coming_soon::ComingSoon;
use waitlist::backend::BackendHandle;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! { <ComingSoon /> },
        Route::NotFound => html! { <Redirect<Route> to={Route::Home} /> },
    }
}

#[function_component]
pub fn App() -> Html {
    // Swap in a networked backend here once the waitlist service exists.
    let backend = use_memo(|_| BackendHandle::default(), ());

    html! {
        <ContextProvider<BackendHandle> context={(*backend).clone()}>
            <ToastProvider>
                <BrowserRouter>
                    <Switch<Route> render={switch} />
                </BrowserRouter>
            </ToastProvider>
        </ContextProvider<BackendHandle>>
    }
}
