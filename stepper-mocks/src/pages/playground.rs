//! Playground: a panel seeded from URL state, with preset links

use crate::presets::{presets, Preset};
use crate::url_state::{build_state, parse_state};
use crate::Route;
use dioxus::prelude::*;
use stepper_common::{format_value, PanelConfig};
use stepper_ui::StepperPanel;
use tracing::info;

#[component]
pub fn Playground(state: Option<String>) -> Element {
    let config = state
        .as_deref()
        .and_then(parse_state)
        .unwrap_or_default();
    // Remount the panel when the URL switches presets so it re-seeds.
    let panel_key = state.clone().unwrap_or_default();
    let mut last_committed = use_signal(|| None::<f64>);
    let last_text = match last_committed() {
        Some(value) => format!("Last committed: {}", format_value(value)),
        None => "Nothing committed yet".to_string(),
    };

    rsx! {
        div { class: "min-h-screen bg-gray-900 text-white p-8",
            h1 { class: "text-2xl font-bold mb-6", "Stepper Playground" }

            div { class: "flex gap-8",
                div { class: "w-56 space-y-2",
                    h2 { class: "text-sm text-gray-400 mb-3", "Presets" }
                    for preset in presets() {
                        PresetLink { key: "{preset.name}", preset: preset.clone(), current: config.clone() }
                    }
                }

                div { class: "space-y-4",
                    StepperPanel {
                        key: "{panel_key}",
                        config: config.clone(),
                        on_change: Some(EventHandler::new(move |value: f64| {
                            info!("Committed {value}");
                            last_committed.set(Some(value));
                        })),
                    }
                    ConfigSummary { config: config.clone() }
                    p { class: "text-sm text-gray-400", "{last_text}" }
                }
            }
        }
    }
}

#[component]
fn PresetLink(preset: Preset, current: PanelConfig) -> Element {
    let class = if preset.config == current {
        "block px-3 py-1.5 text-sm rounded-lg bg-gray-700 text-white"
    } else {
        "block px-3 py-1.5 text-sm rounded-lg text-gray-400 hover:text-white hover:bg-gray-800"
    };

    rsx! {
        Link {
            to: Route::Playground {
                state: Some(build_state(&preset.config)),
            },
            class: "{class}",
            "{preset.name}"
        }
    }
}

#[component]
fn ConfigSummary(config: PanelConfig) -> Element {
    let range = config.stepper.range(config.unit);
    let bounds = if range.is_clamped() {
        format!(
            "{} to {}",
            format_value(range.min()),
            format_value(range.max())
        )
    } else {
        "unbounded".to_string()
    };
    let step = format_value(config.stepper.step);

    rsx! {
        dl { class: "grid grid-cols-2 gap-x-4 gap-y-1 text-xs text-gray-500",
            dt { "Initial unit" }
            dd { "{config.unit}" }
            dt { "Range" }
            dd { "{bounds}" }
            dt { "Step" }
            dd { "{step}" }
        }
    }
}
