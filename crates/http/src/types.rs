//! Wire types for the backend API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// `POST /token/` request body.
#[derive(Debug, Clone, Serialize)]
pub struct TokenRequest {
    pub username: String,
    pub password: String,
}

/// `POST /token/` and `POST /token/refresh/` response body.
///
/// Lifetimes are in seconds. The backend has been observed sending them both
/// as JSON numbers and as numeric strings, so both forms are accepted.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access: String,
    pub refresh: String,
    /// User id; present on login, absent on refresh.
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub id: Option<String>,
    #[serde(deserialize_with = "seconds")]
    pub token_expiration: f64,
    #[serde(deserialize_with = "seconds")]
    pub token_refresh_expiration: f64,
}

/// `POST /token/refresh/` request body.
#[derive(Debug, Clone, Serialize)]
pub struct RefreshRequest {
    pub refresh: String,
}

/// `POST /resident/register/` request body.
#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    #[serde(rename = "firstName")]
    pub first_name: String,
    #[serde(rename = "lastName")]
    pub last_name: String,
    pub username: String,
    pub email: String,
    pub password: String,
    pub resident: ResidentProfile,
}

#[derive(Debug, Clone, Serialize)]
pub struct ResidentProfile {
    pub cabin_number: u32,
}

/// `POST /resident/verify/{email}/` request body.
#[derive(Debug, Clone, Serialize)]
pub struct VerifyRequest {
    pub code: String,
    pub email: String,
}

/// Generic `{"message": ...}` response.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiMessage {
    pub message: String,
}

/// A snow-shoveling order as returned by `GET /snow_shoveling/orders/`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SnowShovelingOrder {
    pub id: i64,
    pub date: DateTime<Utc>,
    #[serde(default)]
    pub note: Option<String>,
    pub person_ordered: i64,
    pub cabin_number: i64,
}

/// `POST /order/snow_shoveling/` request body.
#[derive(Debug, Clone, Serialize)]
pub struct CreateOrderRequest {
    pub date: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Number(f64),
    Text(String),
}

fn seconds<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match NumberOrText::deserialize(deserializer)? {
        NumberOrText::Number(n) => Ok(n),
        NumberOrText::Text(s) => s.trim().parse().map_err(serde::de::Error::custom),
    }
}

fn opt_string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<NumberOrText>::deserialize(deserializer)?;
    Ok(value.map(|v| match v {
        // Integral ids come back without a trailing ".0"
        NumberOrText::Number(n) if n.fract() == 0.0 => format!("{}", n as i64),
        NumberOrText::Number(n) => n.to_string(),
        NumberOrText::Text(s) => s,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_response_with_numeric_lifetimes() {
        let body = r#"{
            "access": "A", "refresh": "R", "id": 7,
            "token_expiration": 900, "token_refresh_expiration": 604800
        }"#;
        let parsed: TokenResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.id.as_deref(), Some("7"));
        assert_eq!(parsed.token_expiration, 900.0);
        assert_eq!(parsed.token_refresh_expiration, 604_800.0);
    }

    #[test]
    fn token_response_with_string_lifetimes() {
        let body = r#"{
            "access": "A", "refresh": "R",
            "token_expiration": "900", "token_refresh_expiration": "604800"
        }"#;
        let parsed: TokenResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.id, None);
        assert_eq!(parsed.token_expiration, 900.0);
        assert_eq!(parsed.token_refresh_expiration, 604_800.0);
    }

    #[test]
    fn token_response_rejects_non_numeric_lifetime() {
        let body = r#"{
            "access": "A", "refresh": "R",
            "token_expiration": "soon", "token_refresh_expiration": "604800"
        }"#;
        assert!(serde_json::from_str::<TokenResponse>(body).is_err());
    }

    #[test]
    fn order_without_note() {
        let body = r#"{
            "id": 3, "date": "2025-01-04T10:00:00Z",
            "person_ordered": 7, "cabin_number": 12
        }"#;
        let parsed: SnowShovelingOrder = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.note, None);
        assert_eq!(parsed.cabin_number, 12);
    }

    #[test]
    fn create_order_omits_empty_note() {
        let req = CreateOrderRequest {
            date: "2025-01-04T10:00:00Z".parse().unwrap(),
            note: None,
        };
        let json = serde_json::to_value(&req).unwrap();
        assert!(json.get("note").is_none());
    }
}
