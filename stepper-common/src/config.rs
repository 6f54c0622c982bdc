use serde::{Deserialize, Serialize};

use crate::range::ValueRange;
use crate::stepper::{apply_unit_change, StepperState};
use crate::unit::Unit;

fn default_step() -> f64 {
    1.0
}

/// Numeric configuration for a stepper.
///
/// Missing bounds resolve per unit, see [`ValueRange::new`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StepperConfig {
    pub initial_value: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(default = "default_step")]
    pub step: f64,
}

impl Default for StepperConfig {
    fn default() -> Self {
        Self {
            initial_value: 0.0,
            min: None,
            max: None,
            step: default_step(),
        }
    }
}

impl StepperConfig {
    pub fn range(&self, unit: Unit) -> ValueRange {
        ValueRange::new(unit, self.min, self.max)
    }

    /// State at mount, already reconciled with the unit's range.
    pub fn initial_state(&self, unit: Unit) -> StepperState {
        apply_unit_change(StepperState::new(self.initial_value), &self.range(unit))
    }
}

/// Root configuration: the selected unit plus the stepper's settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelConfig {
    pub unit: Unit,
    pub stepper: StepperConfig,
}
