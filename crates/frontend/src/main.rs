mod app;
mod client;
mod components;
mod config;
mod pages;
mod services;
mod session;

use app::App;

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    yew::Renderer::<App>::new().render();
}
