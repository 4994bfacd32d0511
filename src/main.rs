use log::info;
use yew::prelude::*;

mod catalog;
mod config;
mod carousel {
    pub mod autoplay;
    pub mod mode;
    pub mod navigator;
    pub mod slider;
    pub mod swipe;
}
mod page {
    pub mod music;
    pub mod nav;
    pub mod player;
    pub mod reveal;
    pub mod scroll_top;
    pub mod sections;
    pub mod smooth_scroll;
    pub mod theme;
}

use page::{
    music::MusicSection,
    nav::Nav,
    reveal::use_scroll_reveal,
    scroll_top::ScrollToTop,
    sections::{About, Contact, Hero},
};

#[function_component]
fn App() -> Html {
    use_scroll_reveal();

    html! {
        <>
            <Nav />
            <Hero />
            <MusicSection />
            <About />
            <Contact />
            <ScrollToTop />
        </>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    if console_log::init_with_level(config::log_level()).is_err() {
        web_sys::console::warn_1(&"logger was already initialized".into());
    }

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
