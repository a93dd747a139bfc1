mod dashboard;
mod home;
mod login;
mod not_found;
mod register;
mod ski_center;
mod snow_shoveling;
mod verify;

pub use dashboard::Dashboard;
pub use home::Home;
pub use login::Login;
pub use not_found::NotFound;
pub use register::Register;
pub use ski_center::SkiCenter;
pub use snow_shoveling::SnowShoveling;
pub use verify::Verify;
