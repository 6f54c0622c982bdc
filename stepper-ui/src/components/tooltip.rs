//! Hover tooltip shown above a stepper button

use dioxus::prelude::*;

fn tooltip_bubble_class() -> &'static str {
    "relative px-2 py-[3px] text-xs text-white bg-black rounded-md shadow-md whitespace-nowrap"
}

/// Tooltip anchored above its positioned parent.
///
/// Renders nothing unless `visible` is set and `message` is non-empty.
#[component]
pub fn Tooltip(message: String, visible: bool) -> Element {
    if !visible || message.is_empty() {
        return rsx! {};
    }

    rsx! {
        div { class: "absolute z-50 -top-8 left-1/2 tooltip-animation",
            TooltipBubble { text: message }
        }
    }
}

/// Static tooltip bubble with a downward arrow.
#[component]
fn TooltipBubble(text: String) -> Element {
    rsx! {
        div { class: tooltip_bubble_class(), role: "tooltip",
            "{text}"
            div { class: "absolute top-full left-1/2 -translate-x-1/2 w-0 h-0 border-l-4 border-r-4 border-t-4 border-transparent border-t-black" }
        }
    }
}
