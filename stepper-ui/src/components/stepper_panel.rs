//! Root container owning the unit shared by the toggle and the stepper

use crate::components::numeric_stepper::NumericStepper;
use crate::components::unit_toggle::UnitToggle;
use dioxus::prelude::*;
use stepper_common::{PanelConfig, Unit};
use tracing::debug;

#[component]
pub fn StepperPanel(
    #[props(default)] config: PanelConfig,
    #[props(default)] on_change: Option<EventHandler<f64>>,
) -> Element {
    let mut unit = use_signal(|| config.unit);
    let stepper = config.stepper;

    rsx! {
        div { class: "p-4 rounded-lg w-96 bg-gray-800",
            UnitToggle {
                selected: unit(),
                on_select: move |selected: Unit| {
                    if selected != *unit.peek() {
                        debug!("Unit changed to {selected}");
                    }
                    unit.set(selected);
                },
            }
            NumericStepper {
                unit: unit(),
                initial_value: stepper.initial_value,
                min: stepper.min,
                max: stepper.max,
                step: stepper.step,
                on_change,
            }
        }
    }
}
