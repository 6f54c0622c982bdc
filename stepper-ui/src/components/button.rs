//! Unstyled button shared by the toggle and the stepper

use dioxus::prelude::*;

/// Chromeless button - accessibility and click gating without visual styling.
///
/// A disabled button only sets `aria-disabled` and swallows clicks; it keeps
/// receiving pointer events so a wrapper can still react to hover.
#[component]
pub fn ChromelessButton(
    #[props(default)] disabled: bool,
    #[props(default)] class: Option<String>,
    #[props(default)] aria_label: Option<String>,
    #[props(default)] aria_pressed: Option<bool>,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    rsx! {
        button {
            r#type: "button",
            class: class.as_deref(),
            aria_label: aria_label.as_deref(),
            aria_pressed: aria_pressed.map(|p| if p { "true" } else { "false" }),
            aria_disabled: if disabled { Some("true") } else { None },
            onclick: move |e| {
                if !disabled {
                    onclick.call(e);
                }
            },
            {children}
        }
    }
}
