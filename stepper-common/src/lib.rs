//! stepper-common - Framework-free state for the unit stepper widgets
//!
//! Everything here is a pure function over plain data so the clamping and
//! input rules can be tested without a renderer.

pub mod config;
pub mod format;
pub mod input;
pub mod range;
pub mod stepper;
pub mod toggle;
pub mod unit;

pub use config::{PanelConfig, StepperConfig};
pub use format::format_value;
pub use input::{InputError, PartialInput};
pub use range::{StepDirection, ValueRange};
pub use stepper::{StepperEvent, StepperState, Transition};
pub use toggle::Indicator;
pub use unit::{Unit, UnitParseError};
