//! Ski-center page fed by the Fnugg resort API.

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::NavBar;
use crate::services::resort::{self, SkiCategory, SkiResort};

#[function_component(SkiCenter)]
pub fn ski_center() -> Html {
    let resort = use_state(|| Option::<SkiResort>::None);
    let error = use_state(|| Option::<String>::None);

    {
        let resort = resort.clone();
        let error = error.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match resort::fetch_resort().await {
                    Ok(data) => resort.set(Some(data)),
                    Err(e) => {
                        web_sys::console::error_1(
                            &format!("Ski center fetch failed: {e}").into(),
                        );
                        error.set(Some(e));
                    }
                }
            });
            || ()
        });
    }

    html! {
        <div class="min-h-screen flex flex-col bg-gray-900 text-white p-4 gap-y-3">
            <NavBar />

            {
                if let Some(resort) = &*resort {
                    view_resort(resort)
                } else if let Some(error) = &*error {
                    html! { <p class="text-red-400">{error}</p> }
                } else {
                    html! { <p>{"Loading ski center data..."}</p> }
                }
            }

            <p class="text-s text-gray-400 mt-2 flex items-center space-x-2 justify-center">
                <span>{"Ski resort data provided by "}</span>
                <a
                    href="https://www.fnugg.no"
                    target="_blank"
                    rel="noopener noreferrer"
                    class="underline hover:text-white"
                >
                    {"Fnugg"}
                </a>
            </p>
        </div>
    }
}

fn view_resort(resort: &SkiResort) -> Html {
    html! {
        <>
            if let Some(image_url) = &resort.image_url {
                <img
                    src={image_url.clone()}
                    alt={resort.name.clone()}
                    class="w-full max-h-[500px] object-cover rounded-xl mb-5 shadow-lg"
                />
            }

            <h1 class="text-center text-4xl font-bold mb-2">{ resort.name.clone() }</h1>
            <p class="text-center text-sm italic text-gray-400 mb-3">
                {format!(
                    "Sist oppdatert: {}",
                    resort
                        .last_updated
                        .as_deref()
                        .map(resort::format_date)
                        .unwrap_or_else(|| "ukjent".to_string()),
                )}
            </p>
            <hr class="border-gray-700 w-full mb-5" />

            // About + park description
            <div class="flex justify-center items-stretch gap-5 mt-5 flex-wrap">
                if let Some(about) = &resort.about {
                    <div class="flex-1 bg-white/5 rounded-xl p-5 min-w-[300px] shadow-lg">
                        <h2 class="text-center text-2xl font-bold mb-4">{"Kort om anlegget"}</h2>
                        <p class="text-lg leading-relaxed text-center whitespace-pre-line">
                            { about.clone() }
                        </p>
                    </div>
                }
                if let Some(park_description) = &resort.park_description {
                    <div class="flex-1 bg-white/5 rounded-xl p-5 min-w-[300px] shadow-lg">
                        <h2 class="text-center text-2xl font-bold mb-4">{"Parkbeskrivelse"}</h2>
                        <p class="text-lg leading-relaxed text-center whitespace-pre-line">
                            { park_description.clone() }
                        </p>
                    </div>
                }
            </div>

            <div class="flex gap-5 w-full items-stretch mt-5">
                // Lifts and slopes
                <div class="flex-[2] bg-white/5 rounded-xl p-5 min-w-[400px] shadow-lg">
                    if let Some(lifts) = &resort.lifts {
                        { view_category("Heiser", lifts, false) }
                    }
                    if let Some(slopes) = &resort.slopes {
                        { view_category("Løyper", slopes, true) }
                    }
                </div>

                <div class="flex flex-col gap-5 flex-1 min-w-[200px]">
                    // Difficulty legend
                    <div class="bg-white/5 rounded-xl p-4 shadow-lg">
                        <h3 class="text-center mb-2">{"Vanskelighetsgrad"}</h3>
                        <ul class="list-none p-0 m-0">
                            <li>{"🟩 Enkel"}</li>
                            <li>{"🟦 Middels"}</li>
                            <li>{"♦️ Vanskelig"}</li>
                            <li>{"⬛️ Ekspert"}</li>
                        </ul>
                    </div>

                    if let Some(slope_map_url) = &resort.slope_map_url {
                        <div class="bg-white/5 rounded-xl p-4 shadow-lg text-center">
                            <a
                                href={slope_map_url.clone()}
                                target="_blank"
                                rel="noopener noreferrer"
                                class="block w-full py-2 bg-blue-500 hover:bg-blue-600 rounded-lg font-bold"
                            >
                                {"Se løypekart"}
                            </a>
                        </div>
                    }

                    // Opening hours
                    <div class="bg-white/5 rounded-xl p-4 shadow-lg text-center">
                        <h3 class="mb-2">{"Åpningstider"}</h3>
                        <p class="mb-2">
                            <strong>{"Idag: "}</strong>
                            { if resort.open_today { "ÅPENT" } else { "STENGT" } }
                        </p>
                        <p class="mb-2">
                            {"Skisenteret er åpent fra "}<strong>{"10:00"}</strong>
                            {" til "}<strong>{"16:30"}</strong>{" hver dag"}
                        </p>
                        if let Some(opening_hours_url) = &resort.opening_hours_url {
                            <p>
                                <a
                                    href={opening_hours_url.clone()}
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="text-blue-400 font-bold underline hover:no-underline"
                                >
                                    {"Se alle åpningstider"}
                                </a>
                            </p>
                        }
                    </div>

                    { view_prices(resort) }
                    { view_contact(resort) }
                </div>
            </div>

            { view_links(resort) }
        </>
    }
}

fn view_category(title: &str, category: &SkiCategory, show_difficulty: bool) -> Html {
    html! {
        <>
            <h2 class="text-center text-2xl font-bold">{title}</h2>
            <p class="text-center mb-2 text-gray-300">
                {format!(
                    "Totalt: {} | Stengt: {} | Åpne: {}",
                    category.count,
                    category.closed,
                    category.count.saturating_sub(category.closed),
                )}
            </p>
            <ul class="list-none p-0 m-0 mb-5">
                {
                    for category.list.iter().map(|item| html! {
                        <li class="px-3 py-2 border-b border-white/10">
                            <div class="flex justify-between items-center">
                                <span class="font-bold">{ item.name.clone() }</span>
                                <span>
                                    { if item.is_open() { "🟢 Åpen" } else { "🔴 Stengt" } }
                                </span>
                            </div>
                            if show_difficulty {
                                if let Some(difficulty) = &item.slope_difficulty {
                                    <div class="mt-1">
                                        {format!(
                                            "Vanskelighetsgrad: {}",
                                            resort::difficulty_marker(difficulty),
                                        )}
                                    </div>
                                }
                            }
                        </li>
                    })
                }
            </ul>
        </>
    }
}

fn view_prices(resort: &SkiResort) -> Html {
    if resort.lift_ticket_prices.is_empty() {
        return html! {};
    }

    let price = |value: Option<f64>| {
        value
            .filter(|p| *p > 0.0)
            .map(|p| format!("{p},-"))
            .unwrap_or_else(|| "-".to_string())
    };

    html! {
        <div class="mt-5 bg-white/5 rounded-xl p-5 shadow-lg w-full overflow-x-auto">
            <h2 class="text-center text-2xl font-bold mb-4">{"Heiskortpriser"}</h2>
            <table class="w-full border-collapse">
                <thead>
                    <tr class="bg-white/10">
                        <th class="p-2 text-left">{"Heiskort"}</th>
                        <th class="p-2 text-left">{"Voksen"}</th>
                        <th class="p-2 text-left">{"Ungdom"}</th>
                    </tr>
                </thead>
                <tbody>
                    {
                        for resort.lift_ticket_prices.iter().map(|ticket| html! {
                            <tr class="border-b border-white/10">
                                <td class="p-2">{ ticket.card_name.clone() }</td>
                                <td class="p-2 text-center">{ price(ticket.price_adult) }</td>
                                <td class="p-2 text-center">{ price(ticket.price_youth) }</td>
                            </tr>
                        })
                    }
                </tbody>
            </table>
            if let Some(prices_url) = &resort.lift_ticket_prices_url {
                <p class="mt-3">
                    <a
                        href={prices_url.clone()}
                        target="_blank"
                        rel="noopener noreferrer"
                        class="text-blue-400 font-bold underline hover:no-underline"
                    >
                        {"Se alle heiskortpriser"}
                    </a>
                </p>
            }
            <p class="mt-3 italic text-sm text-gray-400">
                {"Priser kan i noen tilfeller ikke være helt oppdatert"}
            </p>
        </div>
    }
}

fn view_contact(resort: &SkiResort) -> Html {
    let Some(contact) = &resort.contact else {
        return html! {};
    };

    html! {
        <div class="bg-white/5 rounded-xl p-4 shadow-lg flex flex-col gap-4">
            <h3 class="text-center mb-2">{"Kontaktinformasjon"}</h3>

            <div class="border-b border-white/20 pb-2">
                <h4 class="my-1 font-semibold">{"Telefon"}</h4>
                <p class="m-0">{ contact.call_number.clone().unwrap_or_default() }</p>
            </div>

            <div class="border-b border-white/20 pb-2">
                <h4 class="my-1 font-semibold">{"Adresse"}</h4>
                <p class="m-0">{ contact.address.clone().unwrap_or_default() }</p>
                <p class="m-0">
                    {format!(
                        "{} {}",
                        contact.zip_code.clone().unwrap_or_default(),
                        contact.city.clone().unwrap_or_default(),
                    )}
                </p>
            </div>

            <div class="pt-2">
                <h4 class="my-1 font-semibold">{"Telefon Skipatrulje"}</h4>
                <p class="m-0">{ contact.phone_skipatrol.clone().unwrap_or_default() }</p>
            </div>
        </div>
    }
}

fn view_links(resort: &SkiResort) -> Html {
    html! {
        <div class="flex justify-between gap-5 mt-5 flex-wrap">
            if let Some(social_media) = &resort.social_media {
                <div class="flex-1 min-w-[300px] p-5 rounded-xl bg-white/5">
                    <h2 class="mb-4 text-center text-2xl font-bold">
                        {"Finn oss på sosiale medier"}
                    </h2>
                    if let Some(instagram) = &social_media.instagram {
                        <div class="flex items-center mb-3">
                            <span class="mr-2">{"📸"}</span>
                            <span>{ instagram.clone() }</span>
                        </div>
                    }
                    if let Some(twitter) = &social_media.twitter {
                        <div class="flex items-center">
                            <span class="mr-2">{"🐦"}</span>
                            <span>{ twitter.clone() }</span>
                        </div>
                    }
                </div>
            }

            <div class="flex-1 min-w-[300px] p-5 rounded-xl bg-white/5 flex flex-col gap-3">
                if let Some(homepage_url) = &resort.homepage_url {
                    <div class="bg-slate-700 p-3 rounded-lg">
                        <a
                            href={homepage_url.clone()}
                            target="_blank"
                            rel="noopener noreferrer"
                            class="flex items-center"
                        >
                            <span class="mr-2">{"🌍"}</span>{"Hjemmeside"}
                        </a>
                    </div>
                }
                if let Some(web_camera_url) = &resort.web_camera_url {
                    <div class="bg-slate-700 p-3 rounded-lg">
                        <a
                            href={web_camera_url.clone()}
                            target="_blank"
                            rel="noopener noreferrer"
                            class="flex items-center"
                        >
                            <span class="mr-2">{"📷"}</span>{"Webkamera"}
                        </a>
                    </div>
                }
                if let Some(booking_url) = &resort.booking_url {
                    <div class="bg-slate-700 p-3 rounded-lg">
                        <a
                            href={booking_url.clone()}
                            target="_blank"
                            rel="noopener noreferrer"
                            class="flex items-center"
                        >
                            <span class="mr-2">{"📅"}</span>{"Booking Tyin Filefjell"}
                        </a>
                    </div>
                }
            </div>
        </div>
    }
}
