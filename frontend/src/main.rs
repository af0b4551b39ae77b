use yew::prelude::*;
use log::info;

mod config;
mod pages {
    pub mod landing;
}
mod interactions {
    pub mod frame;
    pub mod aos;
    pub mod signup;
    pub mod anchors;
    pub mod parallax;
    pub mod indicator;
    pub mod reveal;
    pub mod blend;
    pub mod page;
}

use pages::landing::Landing;


#[function_component]
fn App() -> Html {
    info!("Rendering Landing page");
    html! {
        <Landing />
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
