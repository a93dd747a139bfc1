//! Regional avalanche warnings from NVE.

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::WindRose;
use crate::services::avalanche::{
    self, AvalancheProblem, AvalancheWarning,
};

pub enum Msg {
    Fetch,
    Received(Result<Vec<AvalancheWarning>, String>),
    Select(usize),
}

pub struct AvalanchePanel {
    warnings: Vec<AvalancheWarning>,
    active: Option<usize>,
    error: Option<String>,
}

impl Component for AvalanchePanel {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        ctx.link().send_message(Msg::Fetch);
        Self {
            warnings: vec![],
            active: None,
            error: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Fetch => {
                let link = ctx.link().clone();
                spawn_local(async move {
                    link.send_message(Msg::Received(avalanche::fetch_warnings().await));
                });
                false
            }
            Msg::Received(result) => {
                match result {
                    Ok(warnings) => {
                        self.warnings = warnings;
                        self.error = None;
                    }
                    Err(e) => {
                        web_sys::console::error_1(
                            &format!("Avalanche fetch failed: {e}").into(),
                        );
                        self.error = Some(e);
                    }
                }
                true
            }
            Msg::Select(idx) => {
                self.active = Some(idx);
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div>
                <h2 class="text-xl font-bold mb-2 text-center">
                    {"Avalanche Warnings - Jotunheimen"}
                </h2>

                {
                    if self.warnings.is_empty() {
                        html! { <p>{"No warnings found for the past 24 hours."}</p> }
                    } else {
                        html! {
                            <div>
                                { self.view_selectors(ctx) }
                                {
                                    if let Some(idx) = self.active {
                                        self.view_warning(&self.warnings[idx])
                                    } else {
                                        html! {}
                                    }
                                }
                            </div>
                        }
                    }
                }

                <div class="text-center text-xs text-gray-400 mt-8">
                    {"Avalanche warnings provided by"}
                    <a
                        href="https://nve.no"
                        target="_blank"
                        rel="noopener noreferrer"
                        class="underline hover:text-gray-300 ml-1"
                    >
                        {"NVE (Norges vassdrags- og energidirektorat)"}
                    </a>
                </div>
            </div>
        }
    }
}

impl AvalanchePanel {
    fn view_selectors(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="flex justify-center gap-4 mb-6">
                {
                    for self.warnings.iter().enumerate().map(|(idx, warning)| {
                        let ring = if self.active == Some(idx) { " ring-4 ring-white" } else { "" };
                        let classes = format!(
                            "w-16 h-16 rounded-lg shadow-md flex items-center justify-center font-bold text-white {}{}",
                            avalanche::danger_level_color(warning.danger_level),
                            ring,
                        );
                        let onclick = ctx.link().callback(move |_| Msg::Select(idx));
                        html! {
                            <button key={warning.reg_id} class={classes} {onclick}>
                                { warning.danger_level.to_string() }
                            </button>
                        }
                    })
                }
            </div>
        }
    }

    fn view_warning(&self, warning: &AvalancheWarning) -> Html {
        let level_color = avalanche::danger_level_color(warning.danger_level);

        html! {
            <div class="mb-6">
                <div class="flex justify-center gap-6 mb-4">
                    // Danger level banner
                    <div class="flex flex-row h-36 shadow bg-gray-700 w-96">
                        <div class={format!("{level_color} flex items-center justify-center w-28 h-36")}>
                            <span class="text-5xl font-bold text-white drop-shadow">
                                { warning.danger_level.to_string() }
                            </span>
                        </div>

                        // Danger scale, highest on top
                        <div class="w-4 h-36 flex flex-col mr-4">
                            <div class="flex-1 bg-black"></div>
                            <div class="flex-1 bg-red-600"></div>
                            <div class="flex-1 bg-orange-500"></div>
                            <div class="flex-1 bg-yellow-400"></div>
                            <div class="flex-1 bg-lime-300"></div>
                        </div>

                        <div class="flex flex-col flex-1 justify-center ml-4">
                            <h3 class="text-lg font-semibold">
                                {format!(
                                    "Faregrad {} - {} snøskredfare",
                                    warning.danger_level,
                                    avalanche::danger_level_text(warning.danger_level),
                                )}
                            </h3>
                            <span class="text-sm text-gray-400 mt-1">
                                {format!(
                                    "Publisert: {}",
                                    avalanche::format_publish_time(&warning.publish_time),
                                )}
                            </span>
                        </div>
                    </div>

                    // Main text
                    <div class="flex flex-row h-36 shadow bg-gray-700 w-96">
                        <div class={format!("{level_color} w-2 h-full mr-4")} />
                        <div class="flex-1 text-sm text-white flex items-center overflow-y-auto">
                            { warning.main_text.clone().unwrap_or_default() }
                        </div>
                    </div>

                    <div class="text-center max-w-3xl">
                        <h3 class="text-lg font-semibold mb-2">{"Skredfarevurdering"}</h3>
                        <p class="text-sm text-white">
                            { warning.avalanche_danger.clone().unwrap_or_default() }
                        </p>
                    </div>
                </div>

                <div class="text-center max-w-3xl mx-auto mb-2">
                    <h3 class="text-lg font-semibold mb-4">{"Skredproblemer"}</h3>
                    <div class="flex flex-row justify-center items-center gap-4">
                        { for warning.avalanche_problems.iter().map(view_problem) }
                    </div>

                    { self.view_history_and_weather(warning) }
                </div>

                { view_advice(warning) }
            </div>
        }
    }

    fn view_history_and_weather(&self, warning: &AvalancheWarning) -> Html {
        html! {
            <div class="w-full mt-6">
                <h2 class="text-lg font-semibold text-white mb-3">
                    {"Snødekkehistorikk og fjellvær"}
                </h2>
                <div class="flex flex-row gap-4 mt-6 w-full justify-center">
                    <div class="bg-gray-700 shadow w-96 h-64 p-4 text-white overflow-y-auto">
                        <h3 class="text-2xl font-semibold mb-2">{"Snødekkehistorikk"}</h3>
                        <p class="text-sm text-white font-bold">
                            { avalanche::format_long_date(&warning.publish_time) }
                        </p>
                        <p class="text-sm text-gray-300">
                            { warning.snow_surface.clone().unwrap_or_default() }
                            <br /><br />
                            { warning.current_weak_layers.clone().unwrap_or_default() }
                            <br /><br />
                            { warning.latest_observations.clone().unwrap_or_default() }
                        </p>
                    </div>

                    <div class="bg-gray-700 shadow w-96 p-4 text-white">
                        <h3 class="text-2xl font-semibold mb-2">{"Fjellvær"}</h3>
                        {
                            if let Some(mountain_weather) = &warning.mountain_weather {
                                html! {
                                    <>
                                        if let Some(saved) = &mountain_weather.last_saved_time {
                                            <p class="text-sm text-white font-bold">
                                                { avalanche::format_long_date(saved) }
                                            </p>
                                        }
                                        {
                                            for mountain_weather.measurement_texts.iter().map(|mt| html! {
                                                <p class="text-sm text-gray-300">
                                                    { mt.text.clone().unwrap_or_default() }
                                                </p>
                                            })
                                        }
                                    </>
                                }
                            } else {
                                html! {}
                            }
                        }
                    </div>
                </div>
            </div>
        }
    }
}

fn view_problem(problem: &AvalancheProblem) -> Html {
    let line_color = problem
        .danger_level_name
        .as_deref()
        .and_then(danger_name_color)
        .unwrap_or("bg-gray-500");

    html! {
        <div class="flex flex-row bg-gray-700 shadow w-96 h-56 text-left text-white">
            <div class={format!("{line_color} w-2 h-full mr-4")} />

            <div class="flex-1 flex flex-col items-center pt-2">
                <h4 class="text-md font-semibold mb-2">
                    { problem.problem_type_name.clone().unwrap_or_default() }
                </h4>

                <p class="text-sm text-white text-center">
                    { problem.sensitivity_text.clone().unwrap_or_default() }
                </p>

                <p class="text-sm text-white italic text-center mt-3">
                    { problem.cause_name.clone().unwrap_or_default() }
                </p>

                <div class="flex flex-row items-center gap-3 mt-2">
                    <div class="relative inline-block mt-3">
                        <WindRose bit_string={problem.valid_expositions.clone()} size={50} />
                        <div class="absolute w-3 h-3 bg-white rounded-full flex items-center justify-center text-[0.55rem] font-bold text-black" style="top: -7px; left: 19px">
                            {"N"}
                        </div>
                        <div class="absolute w-3 h-3 bg-white rounded-full flex items-center justify-center text-[0.55rem] font-bold text-black" style="top: 47px; left: 19px">
                            {"S"}
                        </div>
                        <div class="absolute w-3 h-3 bg-white rounded-full flex items-center justify-center text-[0.55rem] font-bold text-black" style="top: 20px; left: -7px">
                            {"W"}
                        </div>
                        <div class="absolute w-3 h-3 bg-white rounded-full flex items-center justify-center text-[0.55rem] font-bold text-black" style="top: 20px; left: 46px">
                            {"E"}
                        </div>
                    </div>

                    if let Some(heights) = avalanche::exposed_height_text(problem) {
                        <span class="text-sm text-gray-300">{heights}</span>
                    }
                </div>
            </div>
        </div>
    }
}

fn view_advice(warning: &AvalancheWarning) -> Html {
    html! {
        <div class="mt-6 text-center">
            <h2 class="text-lg font-semibold text-white mb-3">{"Råd"}</h2>
            <div class="flex flex-wrap justify-center items-start gap-10">
                {
                    for warning.avalanche_advices.iter().map(|advice| html! {
                        <div class="bg-gray-700 text-white shadow-md min-w-[200px] max-w-sm">
                            if let Some(image_url) = &advice.image_url {
                                <img src={image_url.clone()} alt="Advice" class="w-full mb-3" />
                            }
                            <p class="text-sm text-gray-300">
                                { advice.text.clone().unwrap_or_default() }
                            </p>
                        </div>
                    })
                }
            </div>
        </div>
    }
}

/// The API names levels like "2 Moderat"; map the leading digit to a color.
fn danger_name_color(name: &str) -> Option<&'static str> {
    let level: u8 = name.split_whitespace().next()?.parse().ok()?;
    Some(avalanche::danger_level_color(level))
}
