//! Canned playground configurations

use stepper_common::{PanelConfig, StepperConfig, Unit};

/// A named panel configuration linked from the playground
#[derive(Clone, PartialEq)]
pub struct Preset {
    pub name: &'static str,
    pub config: PanelConfig,
}

impl Preset {
    fn new(name: &'static str, unit: Unit, stepper: StepperConfig) -> Self {
        Self {
            name,
            config: PanelConfig { unit, stepper },
        }
    }
}

pub fn presets() -> Vec<Preset> {
    vec![
        Preset::new("Default", Unit::Percent, StepperConfig::default()),
        Preset::new(
            "Percent at max",
            Unit::Percent,
            StepperConfig {
                initial_value: 100.0,
                ..Default::default()
            },
        ),
        Preset::new(
            "Pixels unbounded",
            Unit::Pixel,
            StepperConfig {
                initial_value: 5.0,
                ..Default::default()
            },
        ),
        Preset::new(
            "Pixels over 100",
            Unit::Pixel,
            StepperConfig {
                initial_value: 150.0,
                ..Default::default()
            },
        ),
        Preset::new(
            "Custom bounds",
            Unit::Percent,
            StepperConfig {
                initial_value: 25.0,
                min: Some(10.0),
                max: Some(50.0),
                step: 5.0,
            },
        ),
        Preset::new(
            "Half steps",
            Unit::Percent,
            StepperConfig {
                initial_value: 0.5,
                step: 0.5,
                ..Default::default()
            },
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_names_unique() {
        let presets = presets();
        for (i, a) in presets.iter().enumerate() {
            assert!(presets[i + 1..].iter().all(|b| b.name != a.name), "{}", a.name);
        }
    }

    #[test]
    fn test_percent_presets_start_in_range() {
        for preset in presets() {
            let unit = preset.config.unit;
            let stepper = &preset.config.stepper;
            let range = stepper.range(unit);
            assert!(range.contains(stepper.initial_value), "{}", preset.name);
        }
    }
}
