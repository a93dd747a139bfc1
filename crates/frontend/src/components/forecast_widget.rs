//! Five-day forecast widget, sampled at 12:00 UTC.

use chrono::{DateTime, Utc};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::weather::{self, ForecastDay};

pub enum Msg {
    Fetch,
    Received(Result<Vec<ForecastDay>, String>),
}

pub struct ForecastWidget {
    forecast: Vec<ForecastDay>,
    error: Option<String>,
}

impl Component for ForecastWidget {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        ctx.link().send_message(Msg::Fetch);
        Self {
            forecast: vec![],
            error: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Fetch => {
                let link = ctx.link().clone();
                spawn_local(async move {
                    link.send_message(Msg::Received(weather::fetch_daily_forecast().await));
                });
                false
            }
            Msg::Received(result) => {
                match result {
                    Ok(days) => {
                        self.forecast = days;
                        self.error = None;
                    }
                    Err(e) => {
                        web_sys::console::error_1(&format!("Forecast fetch failed: {e}").into());
                        self.error = Some(e);
                    }
                }
                true
            }
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <div class="bg-gray-800 text-white p-4 rounded-lg shadow w-full mt-4">
                <h2 class="text-lg font-semibold mb-2">{"Long-Term Forecast"}</h2>
                <p class="text-sm text-gray-400 mb-3">{"Daily forecast snapshot at 12.00"}</p>

                if let Some(error) = &self.error {
                    <p class="text-red-400 text-sm">{error}</p>
                }

                <div class="grid grid-cols-1 sm:grid-cols-5 gap-3 flex-1">
                    { for self.forecast.iter().map(view_day) }
                </div>

                <p class="text-xs text-gray-400 mt-2 flex items-center space-x-2">
                    <span>
                        {"Weather data and icons from "}
                        <a href="https://www.yr.no" class="underline hover:text-white" target="_blank" rel="noopener noreferrer">
                            {"MET Norway (yr.no)"}
                        </a>
                    </span>
                </p>
            </div>
        }
    }
}

fn view_day(day: &ForecastDay) -> Html {
    let (weekday, day_month) = match day.date.parse::<DateTime<Utc>>() {
        Ok(date) => (
            date.format("%a").to_string(),
            date.format("%b %-d").to_string(),
        ),
        Err(_) => (day.date.clone(), String::new()),
    };

    html! {
        <div class="flex flex-col items-center justify-center bg-gray-700 p-4 rounded-lg shadow">
            <span class="text-sm font-medium">{weekday}</span>
            <span class="text-sm text-gray-400 mb-1">{day_month}</span>
            if !day.symbol_code.is_empty() {
                <img
                    src={weather::symbol_icon_url(&day.symbol_code)}
                    alt={day.symbol_code.clone()}
                    class="w-8 h-8"
                />
            }
            if let Some(temperature) = day.temperature {
                <span class="text-base font-semibold">{format!("{temperature}°C")}</span>
            }
        </div>
    }
}
