//! Snow-shoveling orders: list, create, cancel.

use cabin_http::types::SnowShovelingOrder;
use chrono::NaiveDate;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;
use crate::components::NavBar;
use crate::services::orders::OrderService;
use crate::session;

#[function_component(SnowShoveling)]
pub fn snow_shoveling() -> Html {
    let orders = use_state(Vec::<SnowShovelingOrder>::new);
    let loading = use_state(|| true);
    let show_form = use_state(|| false);
    let form_date = use_state(String::new);
    let form_note = use_state(String::new);
    let form_error = use_state(|| Option::<String>::None);
    let form_busy = use_state(|| false);
    let navigator = use_navigator().expect("SnowShoveling must be rendered inside a router");

    let fetch_orders = {
        let orders = orders.clone();
        let loading = loading.clone();
        let navigator = navigator.clone();
        move || {
            let orders = orders.clone();
            let loading = loading.clone();
            let navigator = navigator.clone();
            spawn_local(async move {
                if !session::is_authenticated().await {
                    navigator.push(&Route::Login);
                    return;
                }
                match OrderService::new().list().await {
                    Ok(list) => orders.set(list),
                    Err(e) => {
                        web_sys::console::error_1(&format!("Failed to fetch orders: {e}").into());
                    }
                }
                loading.set(false);
            });
        }
    };

    {
        let fetch_orders = fetch_orders.clone();
        use_effect_with((), move |_| {
            fetch_orders();
            || ()
        });
    }

    let on_new_order = {
        let show_form = show_form.clone();
        Callback::from(move |_| show_form.set(true))
    };

    let on_close_form = {
        let show_form = show_form.clone();
        Callback::from(move |_| show_form.set(false))
    };

    let on_date = {
        let form_date = form_date.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form_date.set(input.value());
        })
    };

    let on_note = {
        let form_note = form_note.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            form_note.set(input.value());
        })
    };

    let onsubmit = {
        let form_date = form_date.clone();
        let form_note = form_note.clone();
        let form_error = form_error.clone();
        let form_busy = form_busy.clone();
        let show_form = show_form.clone();
        let fetch_orders = fetch_orders.clone();
        let navigator = navigator.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            form_error.set(None);

            let Ok(date) = NaiveDate::parse_from_str(form_date.trim(), "%Y-%m-%d") else {
                form_error.set(Some("Date is required".to_string()));
                return;
            };
            let Some(date) = date.and_hms_opt(0, 0, 0) else {
                form_error.set(Some("Date is required".to_string()));
                return;
            };
            let date = date.and_utc();

            let note = {
                let raw = form_note.trim();
                (!raw.is_empty()).then(|| raw.to_string())
            };

            let form_date = form_date.clone();
            let form_note = form_note.clone();
            let form_error = form_error.clone();
            let form_busy = form_busy.clone();
            let show_form = show_form.clone();
            let fetch_orders = fetch_orders.clone();
            let navigator = navigator.clone();

            form_busy.set(true);
            spawn_local(async move {
                if !session::is_authenticated().await {
                    navigator.push(&Route::Login);
                    return;
                }
                match OrderService::new().create(date, note).await {
                    Ok(_) => {
                        form_date.set(String::new());
                        form_note.set(String::new());
                        show_form.set(false);
                        fetch_orders();
                    }
                    Err(e) => form_error.set(Some(e.to_string())),
                }
                form_busy.set(false);
            });
        })
    };

    let on_cancel_order = {
        let orders = orders.clone();
        let navigator = navigator.clone();
        Callback::from(move |order_id: i64| {
            let confirmed = web_sys::window()
                .and_then(|w| {
                    w.confirm_with_message("Are you sure that you want to cancel this order?")
                        .ok()
                })
                .unwrap_or(false);
            if !confirmed {
                return;
            }

            let orders = orders.clone();
            let navigator = navigator.clone();
            spawn_local(async move {
                if !session::is_authenticated().await {
                    navigator.push(&Route::Login);
                    return;
                }
                match OrderService::new().cancel(order_id).await {
                    Ok(()) => {
                        let remaining = orders
                            .iter()
                            .filter(|order| order.id != order_id)
                            .cloned()
                            .collect();
                        orders.set(remaining);
                    }
                    Err(e) => {
                        web_sys::console::error_1(
                            &format!("Failed to cancel order: {e}").into(),
                        );
                    }
                }
            });
        })
    };

    html! {
        <div class="min-h-screen flex flex-col bg-gray-900 text-white">
            <NavBar />
            <div class="p-6 rounded flex flex-col items-center">
                <h1 class="text-2xl font-bold mb-4 text-center">
                    {"Upcoming Snow Shoveling Orders"}
                </h1>

                {
                    if *loading {
                        html! { <p>{"Loading..."}</p> }
                    } else if orders.is_empty() {
                        html! { <p class="text-sm text-gray-400">{"No upcoming orders"}</p> }
                    } else {
                        html! {
                            <ul class="space-y-3">
                                {
                                    for orders.iter().map(|order| {
                                        view_order(order, &on_cancel_order)
                                    })
                                }
                            </ul>
                        }
                    }
                }

                <button
                    onclick={on_new_order}
                    class="bg-blue-500 hover:bg-blue-600 px-4 py-2 rounded mt-6"
                >
                    {"New Order"}
                </button>

                if *show_form {
                    <div class="fixed inset-0 bg-black bg-opacity-50 flex justify-center items-center">
                        <div class="bg-gray-800 rounded-lg w-96 p-6">
                            <h2 class="text-xl font-bold mb-4">{"Create Snow Shoveling Order"}</h2>

                            if let Some(error) = &*form_error {
                                <div class="bg-red-500 p-2 mb-3 rounded">{error}</div>
                            }

                            <form {onsubmit}>
                                <label class="block mb-2">
                                    {"Date:"}
                                    <input
                                        type="date"
                                        value={(*form_date).clone()}
                                        oninput={on_date}
                                        class="w-full mt-1 p-2 text-black rounded"
                                    />
                                </label>

                                <label class="block mb-3">
                                    {"Note (optional):"}
                                    <textarea
                                        value={(*form_note).clone()}
                                        oninput={on_note}
                                        class="w-full mt-1 p-2 text-black rounded"
                                    />
                                </label>

                                <div class="flex justify-end space-x-2">
                                    <button
                                        type="button"
                                        onclick={on_close_form}
                                        class="bg-gray-500 px-4 py-2 rounded"
                                    >
                                        {"Cancel"}
                                    </button>
                                    <button
                                        type="submit"
                                        disabled={*form_busy}
                                        class="bg-green-500 hover:bg-green-600 px-4 py-2 rounded"
                                    >
                                        { if *form_busy { "Submitting..." } else { "Submit" } }
                                    </button>
                                </div>
                            </form>
                        </div>
                    </div>
                }
            </div>
        </div>
    }
}

fn view_order(order: &SnowShovelingOrder, on_cancel: &Callback<i64>) -> Html {
    let order_id = order.id;
    let onclick = on_cancel.reform(move |_| order_id);

    html! {
        <li key={order.id} class="bg-gray-800 p-3 pt-8 rounded">
            <p class="text-sm text-gray-400 mt-1 mb-0">
                {"📅 Date scheduled: "}
                <span class="font-semibold text-white">
                    { order.date.format("%a, %d %b %Y").to_string() }
                </span>
            </p>
            if let Some(note) = &order.note {
                <p class="text-sm text-gray-300 mt-1">
                    { format!("📝 Note: {note}") }
                </p>
            }
            <button
                {onclick}
                class="bg-red-500 hover:bg-red-600 text-white px-2 py-1 rounded text-xs"
            >
                {"Cancel Order"}
            </button>
        </li>
    }
}
