use yew::prelude::*;
use log::info;

mod browser;
mod config;
mod content;
mod scheduler;
mod state {
    pub mod form;
    pub mod page;
    pub mod ui;
}
mod components {
    pub mod about;
    pub mod contact;
    pub mod faq;
    pub mod footer;
    pub mod hero;
    pub mod nav;
    pub mod services;
}
mod pages {
    pub mod home;
}

use pages::home::Home;

#[function_component]
fn App() -> Html {
    html! {
        <Home />
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting {}", config::SITE_TITLE);
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use crate::config;
    use crate::state::ui::Section;

    const INDEX_HTML: &str = include_str!("../index.html");

    #[test]
    fn index_html_carries_site_metadata() {
        assert!(INDEX_HTML.contains(&format!("<title>{}</title>", config::SITE_TITLE)));
        assert!(INDEX_HTML.contains(config::SITE_DESCRIPTION));
        assert!(INDEX_HTML.contains(config::SITE_KEYWORDS));
    }

    #[test]
    fn highlight_window_is_three_seconds() {
        assert_eq!(config::HIGHLIGHT_DURATION_MS, 3_000);
        assert_eq!(Section::ALL.len(), 4);
    }
}
