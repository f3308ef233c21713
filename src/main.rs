use log::info;
use yew::prelude::*;

mod config;
mod content;
mod seo;
mod state;
mod components {
    pub mod about;
    pub mod cta;
    pub mod footer;
    pub mod hero;
    pub mod icons;
    pub mod navbar;
    pub mod programs;
    pub mod reveal;
    pub mod testimonials;
    pub mod why_us;
}
mod pages {
    pub mod landing;
}

use pages::landing::Landing;

#[function_component]
fn App() -> Html {
    html! {
        <Landing />
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting {} landing page", config::BRAND_NAME);
    yew::Renderer::<App>::new().render();
}
