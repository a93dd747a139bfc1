//! Landing page.

use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;

const SNOWFLAKE_COUNT: usize = 30;

#[function_component(Home)]
pub fn home() -> Html {
    let navigator = use_navigator().expect("Home must be rendered inside a router");

    let onclick = Callback::from(move |_| {
        navigator.push(&Route::Login);
    });

    let snowflakes = (0..SNOWFLAKE_COUNT).map(|_| {
        let size = js_sys::Math::random() * 4.0 + 2.0;
        let left = js_sys::Math::random() * 100.0;
        let delay = js_sys::Math::random() * 15.0;
        let duration = 10.0 + js_sys::Math::random() * 10.0;

        let style = format!(
            "position: absolute; top: -10px; left: {left:.1}%; width: {size:.1}px; \
             height: {size:.1}px; background-color: white; border-radius: 50%; \
             opacity: 0.8; animation: fall {duration:.1}s linear {delay:.1}s infinite; \
             pointer-events: none; filter: drop-shadow(0 0 2px white)"
        );
        html! { <div {style} /> }
    });

    html! {
        <>
            <style>
                {r#"
                @keyframes pulse {
                    0%, 100% { opacity: 0.5; transform: scale(1); }
                    50% { opacity: 1; transform: scale(1.05); }
                }
                @keyframes fall {
                    0% { transform: translateY(0); opacity: 0.8; }
                    90% { opacity: 0.8; }
                    100% { transform: translateY(110vh); opacity: 0; }
                }
                "#}
            </style>

            <div
                {onclick}
                tabindex="0"
                role="button"
                class="w-screen h-screen bg-gray-900 text-white text-center cursor-pointer relative overflow-hidden flex flex-col items-center"
                style="padding-top: 45vh"
            >
                { for snowflakes }

                <div class="text-5xl font-bold" style="text-shadow: 0 0 10px #000">
                    {"Cabin Connect"}
                </div>

                <div
                    class="absolute text-xl"
                    style="bottom: 1vh; opacity: 0.8; animation: pulse 2.5s infinite ease-in-out; text-shadow: 0 0 8px #000; user-select: none"
                >
                    {"Click to continue"}
                </div>
            </div>
        </>
    }
}
