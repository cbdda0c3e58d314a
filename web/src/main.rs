use dioxus::logger::tracing::Level;
use dioxus::prelude::*;
use edusaas_core::LandingConfig;

use views::Home;

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Home {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    if let Err(e) = dioxus::logger::init(Level::INFO) {
        eprintln!("Failed to initialise logging: {}", e);
    }

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // Resolved once for the whole page; components read it from context
    use_context_provider(|| LandingConfig::global().clone());

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        Router::<Route> {}
    }
}
