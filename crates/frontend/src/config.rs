//! Application configuration.

/// Static configuration for backend and third-party endpoints.
pub struct AppConfig;

impl AppConfig {
    /// Backend API base URL. Empty means "use the window origin".
    pub const BACKEND_URL: &'static str = "http://127.0.0.1:8000";

    /// MET Norway locationforecast endpoints for the cabin area (Tyin).
    pub const WEATHER_COMPLETE_URL: &'static str =
        "https://api.met.no/weatherapi/locationforecast/2.0/complete?lat=61.2026&lon=8.2357";
    pub const WEATHER_COMPACT_URL: &'static str =
        "https://api.met.no/weatherapi/locationforecast/2.0/compact?lat=61.2026&lon=8.2357";
    /// MET requires an identifying User-Agent on every request.
    pub const WEATHER_USER_AGENT: &'static str = "CabinConnect/1.0 cabinconnect.example";
    pub const WEATHER_ICON_BASE: &'static str = "https://api.met.no/images/weathericons/svg";

    /// NVE avalanche forecast API.
    pub const AVALANCHE_API_BASE: &'static str =
        "https://api01.nve.no/hydrology/forecast/avalanche/v6.3.0/api";
    /// Jotunheimen forecast region.
    pub const AVALANCHE_REGION_ID: u32 = 3028;
    /// 1 = Norwegian.
    pub const AVALANCHE_LANG: u32 = 1;

    /// Fnugg ski resort search, pinned to the local resort.
    pub const FNUGG_SEARCH_URL: &'static str = "https://api.fnugg.no/search?q=tyin";
}
