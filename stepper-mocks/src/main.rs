//! stepper mocks - Web demo for the unit stepper widgets
//!
//! Renders the toggle + stepper panel as the original app lays it out, plus a
//! playground seeded from URL state.

mod pages;
mod presets;
mod url_state;

use dioxus::prelude::*;
use pages::{Panel, Playground};

pub const MAIN_CSS: Asset = asset!("/assets/main.css");

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    Panel {},
    #[route("/playground?:state")]
    Playground { state: Option<String> },
}

#[component]
pub fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        div { class: "min-h-screen", Router::<Route> {} }
    }
}

fn main() {
    dioxus::logger::init(tracing::Level::DEBUG).expect("Failed to initialize logger");
    dioxus::launch(App);
}
