//! Unit toggle - a segmented control where exactly one unit is selected

use crate::components::button::ChromelessButton;
use dioxus::prelude::*;
use stepper_common::{Indicator, Unit};

/// A row of unit buttons with a highlight sliding behind the selected one.
///
/// Holds no state: clicking any option, including the selected one, reports
/// it through `on_select`.
#[component]
pub fn UnitToggle(
    selected: Unit,
    on_select: EventHandler<Unit>,
    #[props(default = Unit::ALL.to_vec())] options: Vec<Unit>,
) -> Element {
    let indicator_style = Indicator::locate(&options, selected).style();

    rsx! {
        div { class: "relative flex gap-0.5 h-8 w-[140px] p-0.5 bg-gray-800 rounded-lg",
            for unit in options.iter().copied() {
                ChromelessButton {
                    key: "{unit}",
                    class: Some(option_class(unit == selected).to_string()),
                    aria_pressed: Some(unit == selected),
                    onclick: move |_| on_select.call(unit),
                    "{unit}"
                }
            }
            span {
                class: "absolute z-10 bg-gray-600 rounded-lg transition-all duration-300",
                style: "{indicator_style}",
            }
        }
    }
}

fn option_class(is_selected: bool) -> &'static str {
    if is_selected {
        "relative z-20 flex-1 text-sm text-white"
    } else {
        "relative z-20 flex-1 text-sm text-gray-400 hover:text-white"
    }
}
