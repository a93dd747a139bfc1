//! MET Norway locationforecast fetching and shaping.

use gloo_net::http::Request;
use serde::Deserialize;

use crate::config::AppConfig;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LocationForecast {
    pub properties: ForecastProperties,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ForecastProperties {
    pub timeseries: Vec<TimeseriesEntry>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TimeseriesEntry {
    pub time: String,
    pub data: TimeseriesData,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TimeseriesData {
    pub instant: InstantData,
    #[serde(default)]
    pub next_1_hours: Option<PeriodData>,
    #[serde(default)]
    pub next_6_hours: Option<PeriodData>,
    #[serde(default)]
    pub next_12_hours: Option<PeriodData>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct InstantData {
    pub details: InstantDetails,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct InstantDetails {
    #[serde(default)]
    pub air_temperature: Option<f64>,
    #[serde(default)]
    pub wind_speed: Option<f64>,
    #[serde(default)]
    pub wind_from_direction: Option<f64>,
    #[serde(default)]
    pub relative_humidity: Option<f64>,
    #[serde(default)]
    pub ultraviolet_index_clear_sky: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PeriodData {
    #[serde(default)]
    pub summary: Option<PeriodSummary>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PeriodSummary {
    pub symbol_code: String,
}

/// Conditions right now, shaped for the current-weather widget.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CurrentWeather {
    pub temperature: Option<f64>,
    pub symbol_code: Option<String>,
    pub wind_speed: Option<f64>,
    pub wind_direction: Option<f64>,
    pub humidity: Option<f64>,
    pub uv_index: Option<f64>,
}

/// One day of the five-day forecast, sampled at 12:00 UTC.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastDay {
    pub date: String,
    pub symbol_code: String,
    pub temperature: Option<f64>,
}

pub async fn fetch_current_weather() -> Result<CurrentWeather, String> {
    let forecast = fetch_forecast(AppConfig::WEATHER_COMPLETE_URL).await?;
    shape_current(&forecast).ok_or_else(|| "Empty forecast timeseries".to_string())
}

pub async fn fetch_daily_forecast() -> Result<Vec<ForecastDay>, String> {
    let forecast = fetch_forecast(AppConfig::WEATHER_COMPACT_URL).await?;
    Ok(shape_daily(&forecast))
}

async fn fetch_forecast(url: &str) -> Result<LocationForecast, String> {
    let response = Request::get(url)
        .header("User-Agent", AppConfig::WEATHER_USER_AGENT)
        .send()
        .await
        .map_err(|e| format!("Failed to fetch weather data: {e}"))?;

    if !response.ok() {
        return Err(format!("Weather API returned status {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse weather data: {e}"))
}

/// The first timeseries entry describes conditions now.
pub fn shape_current(forecast: &LocationForecast) -> Option<CurrentWeather> {
    let entry = forecast.properties.timeseries.first()?;
    let details = &entry.data.instant.details;
    Some(CurrentWeather {
        temperature: details.air_temperature,
        symbol_code: entry
            .data
            .next_1_hours
            .as_ref()
            .and_then(|p| p.summary.as_ref())
            .map(|s| s.symbol_code.clone()),
        wind_speed: details.wind_speed,
        wind_direction: details.wind_from_direction,
        humidity: details.relative_humidity,
        uv_index: details.ultraviolet_index_clear_sky,
    })
}

/// Take the next five entries sampled at 12:00 UTC as the daily forecast,
/// preferring the shortest summary period that has a symbol.
pub fn shape_daily(forecast: &LocationForecast) -> Vec<ForecastDay> {
    forecast
        .properties
        .timeseries
        .iter()
        .filter(|entry| entry.time.contains("T12:00:00Z"))
        .take(5)
        .map(|entry| ForecastDay {
            date: entry.time.clone(),
            symbol_code: symbol_of(&entry.data).unwrap_or_default(),
            temperature: entry.data.instant.details.air_temperature,
        })
        .collect()
}

fn symbol_of(data: &TimeseriesData) -> Option<String> {
    [&data.next_1_hours, &data.next_6_hours, &data.next_12_hours]
        .into_iter()
        .flatten()
        .find_map(|period| period.summary.as_ref().map(|s| s.symbol_code.clone()))
}

/// URL of the MET symbol icon for a symbol code.
pub fn symbol_icon_url(symbol_code: &str) -> String {
    format!("{}/{}.svg", AppConfig::WEATHER_ICON_BASE, symbol_code)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(time: &str, temp: f64, symbols: [Option<&str>; 3]) -> TimeseriesEntry {
        let period = |code: Option<&str>| {
            code.map(|c| PeriodData {
                summary: Some(PeriodSummary {
                    symbol_code: c.to_string(),
                }),
            })
        };
        TimeseriesEntry {
            time: time.to_string(),
            data: TimeseriesData {
                instant: InstantData {
                    details: InstantDetails {
                        air_temperature: Some(temp),
                        ..Default::default()
                    },
                },
                next_1_hours: period(symbols[0]),
                next_6_hours: period(symbols[1]),
                next_12_hours: period(symbols[2]),
            },
        }
    }

    fn forecast(entries: Vec<TimeseriesEntry>) -> LocationForecast {
        LocationForecast {
            properties: ForecastProperties {
                timeseries: entries,
            },
        }
    }

    #[test]
    fn daily_forecast_samples_noon_and_caps_at_five() {
        let mut entries = Vec::new();
        for day in 1..=8 {
            entries.push(entry(
                &format!("2025-01-0{day}T06:00:00Z"),
                -3.0,
                [Some("cloudy"), None, None],
            ));
            entries.push(entry(
                &format!("2025-01-0{day}T12:00:00Z"),
                -1.0,
                [Some("clearsky_day"), None, None],
            ));
        }

        let daily = shape_daily(&forecast(entries));
        assert_eq!(daily.len(), 5);
        assert!(daily.iter().all(|d| d.date.contains("T12:00:00Z")));
        assert_eq!(daily[0].symbol_code, "clearsky_day");
    }

    #[test]
    fn daily_symbol_falls_back_to_longer_periods() {
        let entries = vec![
            entry("2025-01-01T12:00:00Z", -1.0, [None, Some("snow"), None]),
            entry("2025-01-02T12:00:00Z", -2.0, [None, None, Some("fog")]),
            entry("2025-01-03T12:00:00Z", -3.0, [None, None, None]),
        ];

        let daily = shape_daily(&forecast(entries));
        assert_eq!(daily[0].symbol_code, "snow");
        assert_eq!(daily[1].symbol_code, "fog");
        assert_eq!(daily[2].symbol_code, "");
    }

    #[test]
    fn current_weather_uses_first_entry() {
        let entries = vec![
            entry("2025-01-01T06:00:00Z", -4.5, [Some("snow"), None, None]),
            entry("2025-01-01T07:00:00Z", -2.0, [Some("cloudy"), None, None]),
        ];

        let current = shape_current(&forecast(entries)).unwrap();
        assert_eq!(current.temperature, Some(-4.5));
        assert_eq!(current.symbol_code.as_deref(), Some("snow"));
    }
}
