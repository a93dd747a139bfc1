//! NVE avalanche warning fetching and presentation helpers.

use chrono::{Duration, NaiveDateTime, Utc};
use gloo_net::http::Request;
use serde::{Deserialize, Deserializer};

use crate::config::AppConfig;

/// A detailed regional warning. Field names follow the NVE API (PascalCase),
/// including its misspelled sensitivity-text field.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AvalancheWarning {
    #[serde(rename = "RegId")]
    pub reg_id: i64,
    #[serde(rename = "DangerLevel", deserialize_with = "danger_level")]
    pub danger_level: u8,
    #[serde(rename = "DangerLevelName", default)]
    pub danger_level_name: Option<String>,
    #[serde(rename = "PublishTime")]
    pub publish_time: String,
    #[serde(rename = "MainText", default)]
    pub main_text: Option<String>,
    #[serde(rename = "AvalancheDanger", default)]
    pub avalanche_danger: Option<String>,
    #[serde(rename = "SnowSurface", default)]
    pub snow_surface: Option<String>,
    #[serde(rename = "CurrentWeaklayers", default)]
    pub current_weak_layers: Option<String>,
    #[serde(rename = "LatestObservations", default)]
    pub latest_observations: Option<String>,
    #[serde(rename = "AvalancheProblems", default)]
    pub avalanche_problems: Vec<AvalancheProblem>,
    #[serde(rename = "MountainWeather", default)]
    pub mountain_weather: Option<MountainWeather>,
    #[serde(rename = "AvalancheAdvices", default)]
    pub avalanche_advices: Vec<AvalancheAdvice>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AvalancheProblem {
    #[serde(rename = "AvalancheProblemTypeId", default)]
    pub problem_type_id: i64,
    #[serde(rename = "AvalancheProblemTypeName", default)]
    pub problem_type_name: Option<String>,
    #[serde(rename = "TriggerSenitivityPropagationDestuctiveSizeText", default)]
    pub sensitivity_text: Option<String>,
    #[serde(rename = "AvalCauseName", default)]
    pub cause_name: Option<String>,
    /// Eight characters, one per compass sector starting at north; '1' marks
    /// an exposed sector.
    #[serde(rename = "ValidExpositions", default)]
    pub valid_expositions: String,
    #[serde(rename = "ExposedHeight1", default)]
    pub exposed_height_1: i64,
    #[serde(rename = "ExposedHeight2", default)]
    pub exposed_height_2: i64,
    /// 1 = above height 1, 2 = below height 1, 4 = a band between the two.
    #[serde(rename = "ExposedHeightFill", default)]
    pub exposed_height_fill: i64,
    #[serde(rename = "DangerLevelName", default)]
    pub danger_level_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MountainWeather {
    #[serde(rename = "LastSavedTime", default)]
    pub last_saved_time: Option<String>,
    #[serde(rename = "MeasurementTexts", default)]
    pub measurement_texts: Vec<MeasurementText>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MeasurementText {
    #[serde(rename = "Text", default)]
    pub text: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AvalancheAdvice {
    #[serde(rename = "ImageUrl", default)]
    pub image_url: Option<String>,
    #[serde(rename = "Text", default)]
    pub text: Option<String>,
}

fn danger_level<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(u8),
        Text(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Number(n) => Ok(n),
        Raw::Text(s) => s.trim().parse().map_err(serde::de::Error::custom),
    }
}

/// Fetch the detailed warnings covering yesterday and today for the
/// configured region. Placeholder entries (`RegId == 0`) are dropped.
pub async fn fetch_warnings() -> Result<Vec<AvalancheWarning>, String> {
    let today = Utc::now().date_naive();
    let yesterday = today - Duration::days(1);

    let url = format!(
        "{}/Warning/Region/{}/{}/{}/{}",
        AppConfig::AVALANCHE_API_BASE,
        AppConfig::AVALANCHE_REGION_ID,
        AppConfig::AVALANCHE_LANG,
        yesterday.format("%Y-%m-%d"),
        today.format("%Y-%m-%d"),
    );

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Failed to fetch avalanche warnings: {e}"))?;

    if !response.ok() {
        return Err(format!(
            "Avalanche API returned status {}",
            response.status()
        ));
    }

    let warnings: Vec<AvalancheWarning> = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse avalanche warnings: {e}"))?;

    Ok(warnings.into_iter().filter(|w| w.reg_id != 0).collect())
}

/// Background class for a danger level, matching the Varsom palette.
pub fn danger_level_color(level: u8) -> &'static str {
    match level {
        1 => "bg-lime-300",
        2 => "bg-yellow-400",
        3 => "bg-orange-500",
        4 => "bg-red-600",
        5 => "bg-black",
        _ => "bg-gray-500",
    }
}

/// Norwegian danger level name.
pub fn danger_level_text(level: u8) -> &'static str {
    match level {
        1 => "Liten",
        2 => "Moderat",
        3 => "Betydelig",
        4 => "Stor",
        5 => "Meget stor",
        _ => "Ukjent",
    }
}

/// Human-readable exposed-elevation band for a problem.
pub fn exposed_height_text(problem: &AvalancheProblem) -> Option<String> {
    match problem.exposed_height_fill {
        1 => Some(format!("Over {} m", problem.exposed_height_1)),
        2 => Some(format!("Under {} m", problem.exposed_height_1)),
        4 => Some(format!(
            "Mellom {} og {} m",
            problem.exposed_height_2, problem.exposed_height_1
        )),
        _ => None,
    }
}

/// `dd.mm.yyyy HH:MM` for the publish-time stamp.
pub fn format_publish_time(raw: &str) -> String {
    parse_naive(raw)
        .map(|dt| dt.format("%d.%m.%Y %H:%M").to_string())
        .unwrap_or_else(|| raw.to_string())
}

/// Long Norwegian date, e.g. `Lørdag 4. januar 2025`.
pub fn format_long_date(raw: &str) -> String {
    const WEEKDAYS: [&str; 7] = [
        "Mandag", "Tirsdag", "Onsdag", "Torsdag", "Fredag", "Lørdag", "Søndag",
    ];
    const MONTHS: [&str; 12] = [
        "januar", "februar", "mars", "april", "mai", "juni", "juli", "august", "september",
        "oktober", "november", "desember",
    ];

    match parse_naive(raw) {
        Some(dt) => {
            use chrono::Datelike;
            let weekday = WEEKDAYS[dt.weekday().num_days_from_monday() as usize];
            let month = MONTHS[dt.month0() as usize];
            format!("{} {}. {} {}", weekday, dt.day(), month, dt.year())
        }
        None => raw.to_string(),
    }
}

fn parse_naive(raw: &str) -> Option<NaiveDateTime> {
    // NVE timestamps come without a zone designator, sometimes with
    // fractional seconds.
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f"))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn danger_level_accepts_string_and_number() {
        let from_string: AvalancheWarning = serde_json::from_str(
            r#"{"RegId": 1, "DangerLevel": "3", "PublishTime": "2025-01-04T08:00:00"}"#,
        )
        .unwrap();
        assert_eq!(from_string.danger_level, 3);

        let from_number: AvalancheWarning = serde_json::from_str(
            r#"{"RegId": 1, "DangerLevel": 2, "PublishTime": "2025-01-04T08:00:00"}"#,
        )
        .unwrap();
        assert_eq!(from_number.danger_level, 2);
    }

    #[test]
    fn exposed_height_bands() {
        let mut problem = AvalancheProblem {
            problem_type_id: 10,
            problem_type_name: None,
            sensitivity_text: None,
            cause_name: None,
            valid_expositions: "10000000".into(),
            exposed_height_1: 1100,
            exposed_height_2: 0,
            exposed_height_fill: 1,
            danger_level_name: None,
        };
        assert_eq!(exposed_height_text(&problem).as_deref(), Some("Over 1100 m"));

        problem.exposed_height_fill = 2;
        assert_eq!(
            exposed_height_text(&problem).as_deref(),
            Some("Under 1100 m")
        );

        problem.exposed_height_fill = 4;
        problem.exposed_height_2 = 600;
        assert_eq!(
            exposed_height_text(&problem).as_deref(),
            Some("Mellom 600 og 1100 m")
        );

        problem.exposed_height_fill = 0;
        assert_eq!(exposed_height_text(&problem), None);
    }

    #[test]
    fn publish_time_formatting() {
        assert_eq!(
            format_publish_time("2025-01-04T08:30:00"),
            "04.01.2025 08:30"
        );
        // Unparsable stamps pass through untouched
        assert_eq!(format_publish_time("soon"), "soon");
    }

    #[test]
    fn long_date_formatting() {
        assert_eq!(
            format_long_date("2025-01-04T08:30:00"),
            "Lørdag 4. januar 2025"
        );
    }

    #[test]
    fn level_helpers_cover_the_scale() {
        assert_eq!(danger_level_color(3), "bg-orange-500");
        assert_eq!(danger_level_color(9), "bg-gray-500");
        assert_eq!(danger_level_text(5), "Meget stor");
    }
}
