pub mod button;
pub mod numeric_stepper;
pub mod stepper_panel;
pub mod tooltip;
pub mod unit_toggle;

pub use button::ChromelessButton;
pub use numeric_stepper::NumericStepper;
pub use stepper_panel::StepperPanel;
pub use tooltip::Tooltip;
pub use unit_toggle::UnitToggle;
