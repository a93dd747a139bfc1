pub mod auth;
pub mod avalanche;
pub mod orders;
pub mod resort;
pub mod weather;
