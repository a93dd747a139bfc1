//! Current-weather widget fed by MET Norway.

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::weather::{self, CurrentWeather};

pub enum Msg {
    Fetch,
    Received(Result<CurrentWeather, String>),
}

pub struct WeatherWidget {
    weather: Option<CurrentWeather>,
    error: Option<String>,
}

impl Component for WeatherWidget {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        ctx.link().send_message(Msg::Fetch);
        Self {
            weather: None,
            error: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Fetch => {
                let link = ctx.link().clone();
                spawn_local(async move {
                    link.send_message(Msg::Received(weather::fetch_current_weather().await));
                });
                false
            }
            Msg::Received(result) => {
                match result {
                    Ok(current) => {
                        self.weather = Some(current);
                        self.error = None;
                    }
                    Err(e) => {
                        web_sys::console::error_1(&format!("Weather fetch failed: {e}").into());
                        self.error = Some(e);
                    }
                }
                true
            }
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <div class="bg-gray-800 text-white p-4 rounded-lg shadow w-fit mt-4">
                <h2 class="text-lg font-semibold mb-2">{"Current weather"}</h2>
                {
                    if let Some(weather) = &self.weather {
                        self.view_weather(weather)
                    } else if let Some(error) = &self.error {
                        html! { <p class="text-red-400 text-sm">{error}</p> }
                    } else {
                        html! { <p>{"Loading..."}</p> }
                    }
                }
            </div>
        }
    }
}

impl WeatherWidget {
    fn view_weather(&self, weather: &CurrentWeather) -> Html {
        html! {
            <>
                <div class="flex items-center space-x-4">
                    if let Some(symbol) = &weather.symbol_code {
                        <img
                            src={weather::symbol_icon_url(symbol)}
                            alt={symbol.clone()}
                            class="w-10 h-10"
                        />
                    }
                    if let Some(temperature) = weather.temperature {
                        <span class="text-xl">{format!("{temperature}°C")}</span>
                    }
                </div>
                <div class="flex items-center space-x-2">
                    <span>
                        {
                            weather
                                .wind_speed
                                .map(|speed| format!("{speed} m/s"))
                                .unwrap_or_else(|| "N/A".to_string())
                        }
                    </span>
                    if let Some(direction) = weather.wind_direction {
                        <div
                            title={format!("{direction}°")}
                            class="w-6 h-6"
                            style={format!("transform: rotate({direction}deg)")}
                        >
                            // Arrow pointing up by default, rotated by wind direction
                            <svg
                                xmlns="http://www.w3.org/2000/svg"
                                viewBox="0 0 24 24"
                                fill="none"
                                stroke="currentColor"
                                stroke-width="2"
                                stroke-linecap="round"
                                stroke-linejoin="round"
                                class="w-6 h-6 text-white"
                            >
                                <line x1="12" y1="19" x2="12" y2="5" />
                                <polyline points="5 12 12 5 19 12" />
                            </svg>
                        </div>
                    }
                </div>
                if let Some(humidity) = weather.humidity {
                    <div class="flex items-center space-x-2 mb-1">
                        <svg class="w-5 h-5 text-blue-400" fill="none" stroke="currentColor" stroke-width="2" viewBox="0 0 24 24">
                            <path d="M12 2.5C12 2.5 7 9 7 13a5 5 0 0010 0c0-4-5-10.5-5-10.5z" />
                        </svg>
                        <span>{format!("{humidity}% humidity")}</span>
                    </div>
                }
                if let Some(uv_index) = weather.uv_index {
                    <div class="flex items-center space-x-2">
                        <svg class="w-5 h-5 text-yellow-300" fill="none" stroke="currentColor" stroke-width="2" viewBox="0 0 24 24">
                            <circle cx="12" cy="12" r="5" />
                            <line x1="12" y1="1" x2="12" y2="3" />
                            <line x1="12" y1="21" x2="12" y2="23" />
                            <line x1="4.22" y1="4.22" x2="5.64" y2="5.64" />
                            <line x1="18.36" y1="18.36" x2="19.78" y2="19.78" />
                            <line x1="1" y1="12" x2="3" y2="12" />
                            <line x1="21" y1="12" x2="23" y2="12" />
                            <line x1="4.22" y1="19.78" x2="5.64" y2="18.36" />
                            <line x1="18.36" y1="5.64" x2="19.78" y2="4.22" />
                        </svg>
                        <span>{format!("UV Index: {uv_index}")}</span>
                    </div>
                }
            </>
        }
    }
}
