use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="min-h-screen bg-gray-900 text-white flex flex-col items-center justify-center">
            <h1 class="text-4xl font-bold mb-4">{"404"}</h1>
            <p class="text-gray-400 mb-6">{"This page does not exist."}</p>
            <Link<Route> to={Route::Home} classes="text-blue-400 hover:underline">
                {"Back to the cabin"}
            </Link<Route>>
        </div>
    }
}
