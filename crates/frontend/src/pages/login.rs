//! Login page.

use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;
use crate::services::auth::{form_error_lines, AuthService};

#[function_component(Login)]
pub fn login() -> Html {
    let username = use_state(String::new);
    let password = use_state(String::new);
    let errors = use_state(Vec::<String>::new);
    let busy = use_state(|| false);
    let navigator = use_navigator().expect("Login must be rendered inside a router");

    let on_username = {
        let username = username.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            username.set(input.value());
        })
    };

    let on_password = {
        let password = password.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            password.set(input.value());
        })
    };

    let onsubmit = {
        let username = username.clone();
        let password = password.clone();
        let errors = errors.clone();
        let busy = busy.clone();
        let navigator = navigator.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let username = (*username).clone();
            let password = (*password).clone();
            let errors = errors.clone();
            let busy = busy.clone();
            let navigator = navigator.clone();

            busy.set(true);
            spawn_local(async move {
                match AuthService::new().login(&username, &password).await {
                    Ok(()) => navigator.push(&Route::Dashboard),
                    Err(err) => {
                        errors.set(form_error_lines(&err));
                        busy.set(false);
                    }
                }
            });
        })
    };

    html! {
        <div class="flex flex-col justify-center min-h-screen w-full px-6 py-12 bg-gray-900 lg:px-8">
            <div class="mx-auto w-full max-w-sm flex flex-col">
                <h2 class="mt-10 text-center text-2xl font-bold tracking-tight text-white">
                    {"Login to CabinConnect"}
                </h2>
            </div>

            <div class="mt-10 mx-auto w-full max-w-sm bg-gray-800 p-6 rounded-lg shadow-lg">
                if !errors.is_empty() {
                    <div class="bg-red-500 text-white text-sm p-2 mb-4 rounded">
                        { for errors.iter().map(|line| html! { <p>{line}</p> }) }
                    </div>
                }

                <form {onsubmit} class="space-y-6">
                    <div>
                        <label class="block text-sm font-medium text-white">{"Username"}</label>
                        <div class="mt-2">
                            <input
                                type="text"
                                value={(*username).clone()}
                                oninput={on_username}
                                required=true
                                class="block w-full rounded-md bg-gray-700 px-3 py-1.5 text-base text-white"
                            />
                        </div>
                    </div>

                    <div>
                        <label class="block text-sm font-medium text-white">{"Password"}</label>
                        <div class="mt-2">
                            <input
                                type="password"
                                value={(*password).clone()}
                                oninput={on_password}
                                required=true
                                class="block w-full rounded-md bg-gray-700 px-3 py-1.5 text-base text-white"
                            />
                        </div>
                    </div>

                    <button
                        type="submit"
                        disabled={*busy}
                        class="flex w-full justify-center rounded-md bg-indigo-600 px-3 py-1.5 text-sm font-semibold text-white hover:bg-indigo-500"
                    >
                        { if *busy { "Signing in..." } else { "Sign in" } }
                    </button>
                </form>

                <p class="mt-6 text-center text-sm text-gray-400">
                    {"Not a member yet? "}
                    <Link<Route> to={Route::Register} classes="text-blue-400 hover:underline">
                        {"Register your cabin"}
                    </Link<Route>>
                </p>
            </div>
        </div>
    }
}
