//! Top navigation bar for authenticated pages.

use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;
use crate::session;

#[function_component(NavBar)]
pub fn nav_bar() -> Html {
    let navigator = use_navigator().expect("NavBar must be rendered inside a router");
    let current = use_route::<Route>();

    let link_class = |route: Route| {
        if current == Some(route) {
            "hover:text-blue-400 text-blue-400"
        } else {
            "hover:text-blue-400"
        }
    };

    let on_logout = Callback::from(move |_| {
        session::logout();
        navigator.push(&Route::Login);
    });

    html! {
        <nav class="bg-gradient-to-br from-gray-900 to-gray-800 py-4 shadow-md text-white">
            <div class="container mx-auto flex justify-between items-center px-4">
                <div class="flex items-center space-x-6">
                    <Link<Route> to={Route::Dashboard} classes="text-2xl font-bold">
                        {"CabinConnect"}
                    </Link<Route>>
                    <div class="flex space-x-4 items-center">
                        <Link<Route> to={Route::Dashboard} classes={link_class(Route::Dashboard)}>
                            {"Home"}
                        </Link<Route>>
                        <Link<Route> to={Route::SnowShoveling} classes={link_class(Route::SnowShoveling)}>
                            {"Snow Shoveling"}
                        </Link<Route>>
                        <Link<Route> to={Route::SkiCenter} classes={link_class(Route::SkiCenter)}>
                            {"Ski Center"}
                        </Link<Route>>
                    </div>
                </div>

                <button
                    class="flex items-center px-4 py-2 text-sm text-red-400 hover:bg-gray-700 rounded"
                    onclick={on_logout}
                >
                    <svg xmlns="http://www.w3.org/2000/svg" class="h-4 w-4 mr-2" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                        <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M17 16l4-4m0 0l-4-4m4 4H7m6 4v1a3 3 0 01-3 3H6a3 3 0 01-3-3V7a3 3 0 013-3h4a3 3 0 013 3v1" />
                    </svg>
                    {"Logout"}
                </button>
            </div>
        </nav>
    }
}
