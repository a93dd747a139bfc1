//! Email verification page: six-digit code entry.

use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;
use crate::services::auth::AuthService;

const CODE_LEN: usize = 6;

#[derive(Properties, Clone, PartialEq)]
pub struct VerifyProps {
    pub email: String,
}

#[function_component(Verify)]
pub fn verify(props: &VerifyProps) -> Html {
    let code = use_state(|| vec![String::new(); CODE_LEN]);
    let status = use_state(|| Option::<String>::None);
    let inputs = use_state(|| {
        (0..CODE_LEN)
            .map(|_| NodeRef::default())
            .collect::<Vec<_>>()
    });
    let navigator = use_navigator().expect("Verify must be rendered inside a router");

    let submit = {
        let email = props.email.clone();
        let status = status.clone();
        let navigator = navigator.clone();
        move |full_code: String| {
            let email = email.clone();
            let status = status.clone();
            let navigator = navigator.clone();
            spawn_local(async move {
                match AuthService::new().verify(&email, &full_code).await {
                    Ok(_) => navigator.push(&Route::Login),
                    Err(err) => status.set(Some(err.to_string())),
                }
            });
        }
    };

    let on_digit = {
        let code = code.clone();
        let inputs = inputs.clone();
        let submit = submit.clone();
        Callback::from(move |(index, e): (usize, InputEvent)| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let value = input.value();

            // Accept a single digit or an emptied box; reject everything else
            if !(value.is_empty() || (value.len() == 1 && value.chars().all(|c| c.is_ascii_digit())))
            {
                input.set_value(&code[index]);
                return;
            }

            let mut next = (*code).clone();
            next[index] = value.clone();
            code.set(next.clone());

            if !value.is_empty() && index + 1 < CODE_LEN {
                if let Some(next_input) = inputs[index + 1].cast::<HtmlInputElement>() {
                    let _ = next_input.focus();
                }
            }

            if next.iter().all(|digit| !digit.is_empty()) {
                submit(next.concat());
            }
        })
    };

    let on_key = {
        let code = code.clone();
        let inputs = inputs.clone();
        Callback::from(move |(index, e): (usize, KeyboardEvent)| {
            if e.key() == "Backspace" && code[index].is_empty() && index > 0 {
                if let Some(prev_input) = inputs[index - 1].cast::<HtmlInputElement>() {
                    let _ = prev_input.focus();
                }
            }
        })
    };

    let on_resend = {
        let email = props.email.clone();
        let status = status.clone();
        Callback::from(move |_| {
            let email = email.clone();
            let status = status.clone();
            spawn_local(async move {
                match AuthService::new().resend_code(&email).await {
                    Ok(message) => status.set(Some(message.message)),
                    Err(err) => status.set(Some(err.to_string())),
                }
            });
        })
    };

    html! {
        <div class="min-h-screen bg-gradient-to-br from-gray-900 to-gray-800 flex flex-col items-center text-white pt-48">
            <h1 class="text-4xl font-bold mb-6">{"Verify your account"}</h1>
            <p class="text-lg mb-4">
                {"Enter the verification code sent to: "}
                <strong>{ props.email.clone() }</strong>
            </p>

            if let Some(message) = &*status {
                <p class="text-sm text-yellow-300 mb-4">{message}</p>
            }

            <div class="flex justify-center space-x-4 mb-4">
                {
                    for (0..CODE_LEN).map(|index| {
                        let oninput = on_digit.reform(move |e| (index, e));
                        let onkeydown = on_key.reform(move |e| (index, e));
                        html! {
                            <input
                                ref={inputs[index].clone()}
                                type="text"
                                inputmode="numeric"
                                maxlength="1"
                                value={code[index].clone()}
                                {oninput}
                                {onkeydown}
                                class="w-12 h-14 border-2 border-gray-300 rounded text-center text-xl font-semibold focus:outline-none focus:ring-2 focus:ring-blue-400 text-white bg-transparent"
                            />
                        }
                    })
                }
            </div>

            <p class="text-lg mb-4">
                {"Didn't receive a code? Check your spam folder, or "}
                <button onclick={on_resend} class="text-blue-400 hover:underline focus:outline-none">
                    {"resend code"}
                </button>
            </p>
        </div>
    }
}
