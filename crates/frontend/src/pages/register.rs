//! Resident registration page.

use cabin_http::types::{RegisterRequest, ResidentProfile};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;
use crate::services::auth::{form_error_lines, AuthService};

fn input_handler(state: UseStateHandle<String>) -> Callback<InputEvent> {
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        state.set(input.value());
    })
}

#[function_component(Register)]
pub fn register() -> Html {
    let first_name = use_state(String::new);
    let last_name = use_state(String::new);
    let username = use_state(String::new);
    let email = use_state(String::new);
    let password = use_state(String::new);
    let cabin_number = use_state(String::new);
    let errors = use_state(Vec::<String>::new);
    let busy = use_state(|| false);
    let navigator = use_navigator().expect("Register must be rendered inside a router");

    let onsubmit = {
        let first_name = first_name.clone();
        let last_name = last_name.clone();
        let username = username.clone();
        let email = email.clone();
        let password = password.clone();
        let cabin_number = cabin_number.clone();
        let errors = errors.clone();
        let busy = busy.clone();
        let navigator = navigator.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let Ok(cabin_number) = cabin_number.trim().parse::<u32>() else {
                errors.set(vec!["cabin_number: Enter a valid cabin number.".to_string()]);
                return;
            };

            let registration = RegisterRequest {
                first_name: (*first_name).clone(),
                last_name: (*last_name).clone(),
                username: (*username).clone(),
                email: (*email).clone(),
                password: (*password).clone(),
                resident: ResidentProfile { cabin_number },
            };
            let email = (*email).clone();
            let errors = errors.clone();
            let busy = busy.clone();
            let navigator = navigator.clone();

            busy.set(true);
            spawn_local(async move {
                match AuthService::new().register(&registration).await {
                    Ok(_) => navigator.push(&Route::Verify { email }),
                    Err(err) => {
                        errors.set(form_error_lines(&err));
                        busy.set(false);
                    }
                }
            });
        })
    };

    let text_field = |label: &str, kind: &str, state: &UseStateHandle<String>| {
        html! {
            <div>
                <label class="block text-sm font-medium text-white">{label}</label>
                <div class="mt-2">
                    <input
                        type={kind.to_string()}
                        value={(**state).clone()}
                        oninput={input_handler(state.clone())}
                        required=true
                        class="block w-full rounded-md bg-gray-700 px-3 py-1.5 text-base text-white"
                    />
                </div>
            </div>
        }
    };

    html! {
        <div class="flex flex-col justify-center min-h-screen w-full px-6 py-12 bg-gray-900 lg:px-8">
            <h2 class="text-center text-2xl font-bold tracking-tight text-white">
                {"Register your cabin"}
            </h2>

            <div class="mt-10 mx-auto w-full max-w-sm bg-gray-800 p-6 rounded-lg shadow-lg">
                if !errors.is_empty() {
                    <div class="bg-red-500 text-white text-sm p-2 mb-4 rounded">
                        { for errors.iter().map(|line| html! { <p>{line}</p> }) }
                    </div>
                }

                <form {onsubmit} class="space-y-4">
                    { text_field("First name", "text", &first_name) }
                    { text_field("Last name", "text", &last_name) }
                    { text_field("Username", "text", &username) }
                    { text_field("Email", "email", &email) }
                    { text_field("Password", "password", &password) }
                    { text_field("Cabin number", "number", &cabin_number) }

                    <button
                        type="submit"
                        disabled={*busy}
                        class="flex w-full justify-center rounded-md bg-indigo-600 px-3 py-1.5 text-sm font-semibold text-white hover:bg-indigo-500"
                    >
                        { if *busy { "Registering..." } else { "Register" } }
                    </button>
                </form>

                <p class="mt-6 text-center text-sm text-gray-400">
                    {"Already a member? "}
                    <Link<Route> to={Route::Login} classes="text-blue-400 hover:underline">
                        {"Log in"}
                    </Link<Route>>
                </p>
            </div>
        </div>
    }
}
