//! Fnugg ski resort data fetching and shaping.

use gloo_net::http::Request;
use serde::{Deserialize, Deserializer};

use crate::config::AppConfig;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SearchResponse {
    pub hits: SearchHits,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SearchHits {
    pub hits: Vec<SearchHit>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SearchHit {
    #[serde(rename = "_source")]
    pub source: ResortSource,
}

/// The `_source` document for a resort.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ResortSource {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub park_description: Option<String>,
    #[serde(default)]
    pub images: Option<ResortImages>,
    #[serde(default)]
    pub slope_map: Option<ResortImages>,
    #[serde(default)]
    pub lifts: Option<SkiCategory>,
    #[serde(default)]
    pub slopes: Option<SkiCategory>,
    #[serde(default)]
    pub urls: Option<ResortUrls>,
    /// External links; index 0 is booking, index 1 the web camera.
    #[serde(default)]
    pub booking: Vec<BookingLink>,
    #[serde(default)]
    pub resort_open: bool,
    #[serde(default)]
    pub lift_ticket_prices: Vec<LiftTicketPrice>,
    #[serde(default)]
    pub contact: Option<ResortContact>,
    #[serde(default)]
    pub social_media: Option<SocialMedia>,
    #[serde(default)]
    pub last_updated: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ResortImages {
    #[serde(default)]
    pub image_full: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SkiCategory {
    pub count: u32,
    pub closed: u32,
    #[serde(default)]
    pub list: Vec<SkiItem>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SkiItem {
    pub name: String,
    /// "0" means closed, anything else open.
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub slope_difficulty: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ResortUrls {
    #[serde(default)]
    pub opening_hours: Option<String>,
    #[serde(default)]
    pub lift_ticket_prices: Option<String>,
    #[serde(default)]
    pub homepage: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BookingLink {
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LiftTicketPrice {
    pub card_name: String,
    #[serde(default)]
    pub price_adult: Option<f64>,
    #[serde(default)]
    pub price_youth: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ResortContact {
    #[serde(default, deserialize_with = "opt_stringly")]
    pub call_number: Option<String>,
    #[serde(default, deserialize_with = "opt_stringly")]
    pub zip_code: Option<String>,
    #[serde(default, deserialize_with = "opt_stringly")]
    pub phone_skipatrol: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SocialMedia {
    #[serde(default)]
    pub instagram: Option<String>,
    #[serde(default)]
    pub twitter: Option<String>,
}

/// View model for the ski-center page.
#[derive(Debug, Clone, PartialEq)]
pub struct SkiResort {
    pub name: String,
    pub image_url: Option<String>,
    pub slope_map_url: Option<String>,
    pub about: Option<String>,
    pub park_description: Option<String>,
    pub lifts: Option<SkiCategory>,
    pub slopes: Option<SkiCategory>,
    pub opening_hours_url: Option<String>,
    pub lift_ticket_prices_url: Option<String>,
    pub homepage_url: Option<String>,
    pub booking_url: Option<String>,
    pub web_camera_url: Option<String>,
    pub open_today: bool,
    pub lift_ticket_prices: Vec<LiftTicketPrice>,
    pub contact: Option<ResortContact>,
    pub social_media: Option<SocialMedia>,
    pub last_updated: Option<String>,
}

fn opt_stringly<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(i64),
        Text(String),
    }

    Ok(Option::<Raw>::deserialize(deserializer)?.map(|raw| match raw {
        Raw::Number(n) => n.to_string(),
        Raw::Text(s) => s,
    }))
}

/// Fetch the pinned resort's document.
pub async fn fetch_resort() -> Result<SkiResort, String> {
    let response = Request::get(AppConfig::FNUGG_SEARCH_URL)
        .send()
        .await
        .map_err(|e| format!("Failed to fetch ski center data: {e}"))?;

    if !response.ok() {
        return Err(format!("Fnugg API returned status {}", response.status()));
    }

    let search: SearchResponse = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse ski center data: {e}"))?;

    search
        .hits
        .hits
        .into_iter()
        .next()
        .map(|hit| shape_resort(hit.source))
        .ok_or_else(|| "No resort found".to_string())
}

pub fn shape_resort(source: ResortSource) -> SkiResort {
    let mut booking = source.booking.into_iter();
    let booking_url = booking.next().map(|l| l.url);
    let web_camera_url = booking.next().map(|l| l.url);

    SkiResort {
        name: source.name,
        image_url: source.images.and_then(|i| i.image_full),
        slope_map_url: source.slope_map.and_then(|i| i.image_full),
        about: source.description,
        park_description: source.park_description,
        lifts: source.lifts,
        slopes: source.slopes,
        opening_hours_url: source.urls.as_ref().and_then(|u| u.opening_hours.clone()),
        lift_ticket_prices_url: source
            .urls
            .as_ref()
            .and_then(|u| u.lift_ticket_prices.clone()),
        homepage_url: source.urls.as_ref().and_then(|u| u.homepage.clone()),
        booking_url,
        web_camera_url,
        open_today: source.resort_open,
        lift_ticket_prices: source.lift_ticket_prices,
        contact: source.contact,
        social_media: source.social_media,
        last_updated: source.last_updated,
    }
}

impl SkiItem {
    pub fn is_open(&self) -> bool {
        self.status != "0"
    }
}

/// Marker emoji for a slope difficulty.
pub fn difficulty_marker(difficulty: &str) -> &'static str {
    match difficulty.to_lowercase().as_str() {
        "green" => "🟩",
        "blue" => "🟦",
        "red" => "♦️",
        "black" => "⬛️",
        _ => "❓",
    }
}

/// `dd.mm.yyyy` for the last-updated stamp.
pub fn format_date(raw: &str) -> String {
    raw.parse::<chrono::DateTime<chrono::Utc>>()
        .map(|dt| dt.format("%d.%m.%Y").to_string())
        .unwrap_or_else(|_| raw.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn shapes_booking_links_in_order() {
        let source: ResortSource = serde_json::from_value(json!({
            "name": "Tyin Filefjell",
            "booking": [
                { "url": "https://booking.example" },
                { "url": "https://camera.example" }
            ],
            "resort_open": true
        }))
        .unwrap();

        let resort = shape_resort(source);
        assert_eq!(resort.booking_url.as_deref(), Some("https://booking.example"));
        assert_eq!(resort.web_camera_url.as_deref(), Some("https://camera.example"));
        assert!(resort.open_today);
    }

    #[test]
    fn contact_numbers_accept_both_forms() {
        let contact: ResortContact = serde_json::from_value(json!({
            "call_number": 61367000,
            "zip_code": "2985",
            "phone_skipatrol": 91000000,
            "address": "Tyinvegen",
            "city": "Tyinkrysset"
        }))
        .unwrap();

        assert_eq!(contact.call_number.as_deref(), Some("61367000"));
        assert_eq!(contact.zip_code.as_deref(), Some("2985"));
        assert_eq!(contact.phone_skipatrol.as_deref(), Some("91000000"));
    }

    #[test]
    fn item_status_zero_means_closed() {
        let closed: SkiItem = serde_json::from_value(json!({
            "name": "Heis 1", "status": "0"
        }))
        .unwrap();
        let open: SkiItem = serde_json::from_value(json!({
            "name": "Heis 2", "status": "1"
        }))
        .unwrap();

        assert!(!closed.is_open());
        assert!(open.is_open());
    }

    #[test]
    fn difficulty_markers() {
        assert_eq!(difficulty_marker("Green"), "🟩");
        assert_eq!(difficulty_marker("black"), "⬛️");
        assert_eq!(difficulty_marker("purple"), "❓");
    }
}
