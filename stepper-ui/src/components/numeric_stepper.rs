//! Numeric stepper - a text field between decrement and increment buttons

use std::sync::atomic::{AtomicUsize, Ordering};

use crate::components::button::ChromelessButton;
use crate::components::tooltip::Tooltip;
use dioxus::prelude::*;
use stepper_common::stepper::{self, StepperEvent, StepperState};
use stepper_common::{format_value, StepDirection, StepperConfig, Unit, ValueRange};
use tracing::warn;

static NEXT_INPUT_ID: AtomicUsize = AtomicUsize::new(0);

fn next_input_id() -> String {
    format!(
        "numeric-stepper-{}",
        NEXT_INPUT_ID.fetch_add(1, Ordering::Relaxed)
    )
}

/// Apply `event`, store the new state and report committed values to the host.
///
/// Returns the state after the event.
fn dispatch(
    mut state: Signal<StepperState>,
    on_change: Option<EventHandler<f64>>,
    range: &ValueRange,
    amount: f64,
    event: StepperEvent,
) -> StepperState {
    let current = state.peek().clone();
    let transition = stepper::apply_event(current.clone(), range, amount, event);
    if transition.state != current {
        state.set(transition.state.clone());
    }
    if let (Some(value), Some(handler)) = (transition.committed, on_change) {
        handler.call(value);
    }
    transition.state
}

/// Put `text` back into the DOM field after a rejected keystroke.
///
/// A rejected keystroke leaves the state unchanged, so the diff never patches
/// the field and the typed character would stay visible. The caret stays where
/// it was before the rejected characters were inserted.
fn restore_field_text(input_id: &str, raw: &str, text: &str) {
    let _ = document::eval(&restore_script(input_id, raw, text));
}

fn restore_script(input_id: &str, raw: &str, text: &str) -> String {
    let (Ok(id), Ok(js_text)) = (serde_json::to_string(input_id), serde_json::to_string(text))
    else {
        warn!("Could not encode field text for {input_id}");
        return String::new();
    };
    let rejected = raw.chars().count().saturating_sub(text.chars().count());
    format!(
        "const el = document.getElementById({id}); \
         if (el) {{ \
         const pos = Math.max(0, (el.selectionStart ?? 0) - {rejected}); \
         el.value = {js_text}; \
         el.setSelectionRange(pos, pos); \
         }}"
    )
}

/// Numeric input with +/- buttons.
///
/// In `%` mode the value is clamped into `[min, max]` (defaults 0 and 100) and
/// the buttons disable at the bounds; in any other unit the value is unbounded
/// and `min`/`max` are ignored. `on_change` fires after each committed change
/// (button, arrow key, blur), never per keystroke.
#[component]
pub fn NumericStepper(
    unit: Unit,
    #[props(default)] initial_value: f64,
    #[props(default)] min: Option<f64>,
    #[props(default)] max: Option<f64>,
    #[props(default = 1.0)] step: f64,
    #[props(default)] on_change: Option<EventHandler<f64>>,
) -> Element {
    let config = StepperConfig {
        initial_value,
        min,
        max,
        step,
    };
    let range = config.range(unit);

    let mut state = use_signal(|| config.initial_state(unit));
    let mut is_hovered = use_signal(|| false);
    let mut is_focused = use_signal(|| false);
    let input_id = use_hook(next_input_id);

    // Pull the value back into range whenever the unit or bounds change.
    use_effect(use_reactive!(|range| {
        let current = state.peek().clone();
        let next = stepper::apply_unit_change(current.clone(), &range);
        if next != current {
            state.set(next);
        }
    }));

    let on_step = move |direction: StepDirection| {
        dispatch(state, on_change, &range, step, StepperEvent::Step(direction));
    };

    let current = state.read().clone();
    let decrement_disabled = range.is_blocked(current.value, StepDirection::Decrement);
    let increment_disabled = range.is_blocked(current.value, StepDirection::Increment);

    let container_class = if is_focused() {
        "flex gap-2 h-9 w-[140px] rounded-lg bg-gray-900 ring-2 ring-blue-500/70 transition-all duration-300"
    } else if is_hovered() {
        "flex gap-2 h-9 w-[140px] rounded-lg bg-gray-700 transition-all duration-300"
    } else {
        "flex gap-2 h-9 w-[140px] rounded-lg bg-gray-900 transition-all duration-300"
    };

    let (aria_min, aria_max) = aria_bounds(&range);
    let value_now = format_value(current.value);
    let text = current.text;

    rsx! {
        div { class: "relative mt-4",
            div { class: "{container_class}",
                StepButton {
                    direction: StepDirection::Decrement,
                    disabled: decrement_disabled,
                    tooltip: range.limit_message(StepDirection::Decrement),
                    onclick: move |_| on_step(StepDirection::Decrement),
                }

                div { class: "relative flex items-center flex-1",
                    input {
                        r#type: "text",
                        id: "{input_id}",
                        class: "box-border w-full h-full min-w-0 p-0 text-center bg-transparent border-none outline-none appearance-none",
                        role: "spinbutton",
                        aria_valuemin: aria_min,
                        aria_valuemax: aria_max,
                        aria_valuenow: "{value_now}",
                        value: "{text}",
                        oninput: {
                            let input_id = input_id.clone();
                            move |evt: FormEvent| {
                                let raw = evt.value();
                                let next = dispatch(
                                    state,
                                    on_change,
                                    &range,
                                    step,
                                    StepperEvent::Keystroke(raw.clone()),
                                );
                                if next.text != raw {
                                    restore_field_text(&input_id, &raw, &next.text);
                                }
                            }
                        },
                        onkeydown: move |evt: KeyboardEvent| match evt.key() {
                            Key::ArrowUp => {
                                evt.prevent_default();
                                on_step(StepDirection::Increment);
                            }
                            Key::ArrowDown => {
                                evt.prevent_default();
                                on_step(StepDirection::Decrement);
                            }
                            _ => {}
                        },
                        onmouseenter: move |_| is_hovered.set(true),
                        onmouseleave: move |_| is_hovered.set(false),
                        onfocus: move |_| is_focused.set(true),
                        onblur: move |_| {
                            is_focused.set(false);
                            dispatch(state, on_change, &range, step, StepperEvent::Commit);
                        },
                    }
                }

                StepButton {
                    direction: StepDirection::Increment,
                    disabled: increment_disabled,
                    tooltip: range.limit_message(StepDirection::Increment),
                    onclick: move |_| on_step(StepDirection::Increment),
                }
            }
        }
    }
}

fn aria_bounds(range: &ValueRange) -> (Option<String>, Option<String>) {
    if range.is_clamped() {
        (
            Some(format_value(range.min())),
            Some(format_value(range.max())),
        )
    } else {
        (None, None)
    }
}

/// One of the +/- buttons, with a tooltip explaining why it is disabled.
#[component]
fn StepButton(
    direction: StepDirection,
    disabled: bool,
    tooltip: String,
    onclick: EventHandler<MouseEvent>,
) -> Element {
    let mut is_hovered = use_signal(|| false);

    let (icon, label, rounded) = match direction {
        StepDirection::Decrement => ("-", "Decrease value", "rounded-l-lg"),
        StepDirection::Increment => ("+", "Increase value", "rounded-r-lg"),
    };
    let hover_class = if disabled {
        ""
    } else {
        "hover:bg-gray-700 cursor-pointer"
    };
    let icon_class = if disabled { "mb-0.5 opacity-30" } else { "mb-0.5" };

    rsx! {
        div {
            class: "relative h-full",
            onmouseenter: move |_| is_hovered.set(true),
            onmouseleave: move |_| is_hovered.set(false),
            ChromelessButton {
                class: Some(format!(
                    "z-10 flex items-center justify-center h-full w-9 text-xl leading-none {rounded} transition-all duration-300 {hover_class}",
                )),
                aria_label: Some(label.to_string()),
                disabled,
                onclick,
                span { class: icon_class, "{icon}" }
            }
            Tooltip { message: tooltip, visible: is_hovered() && disabled }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aria_bounds_only_in_percent() {
        let pct = ValueRange::new(Unit::Percent, Some(5.0), None);
        assert_eq!(
            aria_bounds(&pct),
            (Some("5".to_string()), Some("100".to_string()))
        );
        let px = ValueRange::new(Unit::Pixel, Some(5.0), Some(10.0));
        assert_eq!(aria_bounds(&px), (None, None));
    }

    #[test]
    fn test_restore_moves_caret_back_over_rejected_input() {
        let script = restore_script("numeric-stepper-3", "12x3", "123");
        assert!(script.contains(r#"getElementById("numeric-stepper-3")"#));
        assert!(script.contains(r#"el.value = "123";"#));
        assert!(script.contains("(el.selectionStart ?? 0) - 1)"));
        assert!(script.contains("el.setSelectionRange(pos, pos)"));
    }

    #[test]
    fn test_restore_escapes_text() {
        let script = restore_script("id", "\"", "");
        assert!(script.contains(r#"el.value = "";"#));
        assert!(script.contains("(el.selectionStart ?? 0) - 1)"));
    }

    #[test]
    fn test_input_ids_are_unique() {
        assert_ne!(next_input_id(), next_input_id());
    }
}
