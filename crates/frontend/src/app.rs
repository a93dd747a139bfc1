use yew::prelude::*;
use yew_router::prelude::*;

use crate::pages::{
    Dashboard, Home, Login, NotFound, Register, SkiCenter, SnowShoveling, Verify,
};
use crate::session::RequireAuth;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[at("/register")]
    Register,
    #[at("/verify/:email")]
    Verify { email: String },
    #[at("/dashboard")]
    Dashboard,
    #[at("/snow_shoveling")]
    SnowShoveling,
    #[at("/ski_center")]
    SkiCenter,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <Home /> },
        Route::Login => html! { <Login /> },
        Route::Register => html! { <Register /> },
        Route::Verify { email } => html! { <Verify {email} /> },
        Route::Dashboard => html! {
            <RequireAuth>
                <Dashboard />
            </RequireAuth>
        },
        Route::SnowShoveling => html! {
            <RequireAuth>
                <SnowShoveling />
            </RequireAuth>
        },
        Route::SkiCenter => html! {
            <RequireAuth>
                <SkiCenter />
            </RequireAuth>
        },
        Route::NotFound => html! { <NotFound /> },
    }
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}
