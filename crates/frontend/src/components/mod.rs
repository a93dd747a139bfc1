mod avalanche_panel;
mod forecast_widget;
mod nav_bar;
mod spinner;
mod weather_widget;
mod wind_rose;

pub use avalanche_panel::AvalanchePanel;
pub use forecast_widget::ForecastWidget;
pub use nav_bar::NavBar;
pub use spinner::LoadingSpinner;
pub use weather_widget::WeatherWidget;
pub use wind_rose::WindRose;
