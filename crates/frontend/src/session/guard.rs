//! Route guard for protected pages.

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;
use crate::components::LoadingSpinner;
use crate::session;

#[derive(Properties, Clone, PartialEq)]
pub struct RequireAuthProps {
    pub children: Children,
}

/// Renders its children only for an authenticated user.
///
/// Runs the session check (including a possible silent token refresh) once
/// when the guarded page becomes active; shows a spinner while it is in
/// flight and redirects to the login page if it fails.
#[function_component(RequireAuth)]
pub fn require_auth(props: &RequireAuthProps) -> Html {
    let verified = use_state(|| false);
    let navigator = use_navigator().expect("RequireAuth must be rendered inside a router");

    {
        let verified = verified.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                if session::is_authenticated().await {
                    verified.set(true);
                } else {
                    navigator.push(&Route::Login);
                }
            });
            || ()
        });
    }

    if *verified {
        html! { <>{ props.children.clone() }</> }
    } else {
        html! { <LoadingSpinner text="Checking session..." /> }
    }
}
