use crate::Route;
use dioxus::prelude::*;
use stepper_ui::StepperPanel;

/// The toggle + stepper panel centered on the page, unit defaulting to `%`.
#[component]
pub fn Panel() -> Element {
    rsx! {
        div { class: "flex flex-col items-center justify-center gap-4 w-screen h-screen bg-neutral-950 text-neutral-100",
            StepperPanel {}
            Link {
                to: Route::Playground { state: None },
                class: "text-sm text-gray-400 hover:text-white",
                "Playground"
            }
        }
    }
}
