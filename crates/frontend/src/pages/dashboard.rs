//! Main dashboard: weather, forecast, and avalanche warnings.

use yew::prelude::*;

use crate::components::{AvalanchePanel, ForecastWidget, NavBar, WeatherWidget};

#[function_component(Dashboard)]
pub fn dashboard() -> Html {
    html! {
        <div class="min-h-screen flex flex-col bg-gray-900 text-white">
            <NavBar />
            <div class="p-4 flex flex-col gap-y-3">
                <div class="flex flex-row gap-4 items-start">
                    <WeatherWidget />
                    <ForecastWidget />
                </div>
                <div class="mt-6">
                    <AvalanchePanel />
                </div>
            </div>
        </div>
    }
}
