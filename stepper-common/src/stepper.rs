use tracing::{debug, trace};

use crate::format::format_value;
use crate::input::{classify, parse_number, PartialInput};
use crate::range::{StepDirection, ValueRange};

/// Numeric value plus the text shown in the field.
///
/// `text` may diverge from `value` while the field is being edited. Every
/// committing transition (`step`, `commit`, `apply_unit_change`) leaves
/// `text == format_value(value)`.
#[derive(Debug, Clone, PartialEq)]
pub struct StepperState {
    pub value: f64,
    pub text: String,
}

impl StepperState {
    pub fn new(value: f64) -> Self {
        Self {
            value,
            text: format_value(value),
        }
    }
}

impl Default for StepperState {
    fn default() -> Self {
        Self::new(0.0)
    }
}

/// Move the value one step in `direction`.
/// Returns `None` when that direction is blocked by the range.
pub fn try_step(
    state: &StepperState,
    range: &ValueRange,
    amount: f64,
    direction: StepDirection,
) -> Option<StepperState> {
    if range.is_blocked(state.value, direction) {
        trace!("{direction:?} blocked at {}", state.value);
        return None;
    }
    let candidate = match direction {
        StepDirection::Increment => state.value + amount,
        StepDirection::Decrement => state.value - amount,
    };
    let value = range.clamp(candidate);
    debug!("{direction:?}: {} -> {value}", state.value);
    Some(StepperState::new(value))
}

/// Like [`try_step`], but a blocked step returns the state unchanged.
pub fn step(
    state: StepperState,
    range: &ValueRange,
    amount: f64,
    direction: StepDirection,
) -> StepperState {
    try_step(&state, range, amount, direction).unwrap_or(state)
}

pub fn increment(state: StepperState, range: &ValueRange, amount: f64) -> StepperState {
    step(state, range, amount, StepDirection::Increment)
}

pub fn decrement(state: StepperState, range: &ValueRange, amount: f64) -> StepperState {
    step(state, range, amount, StepDirection::Decrement)
}

/// Apply the field's new text after a keystroke.
///
/// Text outside the partial-number pattern is ignored. Accepted text replaces
/// the field contents; when it parses, the value tracks it without clamping.
pub fn apply_keystroke(state: StepperState, raw: &str) -> StepperState {
    match classify(raw) {
        Ok(PartialInput::Empty) => StepperState {
            value: 0.0,
            text: String::new(),
        },
        Ok(PartialInput::Number(value)) => StepperState {
            value,
            text: raw.to_string(),
        },
        Ok(PartialInput::Incomplete) => StepperState {
            value: state.value,
            text: raw.to_string(),
        },
        Err(e) => {
            trace!("Ignoring keystroke: {e}");
            state
        }
    }
}

/// Finalize the field text when it loses focus.
pub fn commit(state: StepperState, range: &ValueRange) -> StepperState {
    let value = match state.text.as_str() {
        "" | "." => 0.0,
        text => match parse_number(text) {
            Ok(parsed) => parsed,
            Err(e) => {
                debug!("Reverting to {}: {e}", state.value);
                state.value
            }
        },
    };
    let clamped = range.clamp(value);
    if clamped != value {
        debug!("Clamped committed value {value} to {clamped}");
    }
    StepperState::new(clamped)
}

/// Reconcile the state with a new unit or new bounds.
///
/// Only percentage ranges pull an out-of-range value back in; otherwise the
/// state is returned untouched, including any in-progress text.
pub fn apply_unit_change(state: StepperState, range: &ValueRange) -> StepperState {
    if range.contains(state.value) {
        return state;
    }
    let clamped = range.clamp(state.value);
    debug!(
        "{} out of range for {}, clamped to {clamped}",
        state.value,
        range.unit()
    );
    StepperState::new(clamped)
}

/// A user action on the stepper
#[derive(Debug, Clone, PartialEq)]
pub enum StepperEvent {
    /// Button press or arrow key
    Step(StepDirection),
    /// New field text after a keystroke
    Keystroke(String),
    /// Field lost focus
    Commit,
}

/// Next state after an event, plus the value to report to the host when
/// the event committed a change.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub state: StepperState,
    pub committed: Option<f64>,
}

/// Apply one user event.
///
/// Steps and commits report their value; keystrokes and blocked steps never
/// do.
pub fn apply_event(
    state: StepperState,
    range: &ValueRange,
    amount: f64,
    event: StepperEvent,
) -> Transition {
    match event {
        StepperEvent::Step(direction) => match try_step(&state, range, amount, direction) {
            Some(next) => Transition {
                committed: Some(next.value),
                state: next,
            },
            None => Transition {
                state,
                committed: None,
            },
        },
        StepperEvent::Keystroke(raw) => Transition {
            state: apply_keystroke(state, &raw),
            committed: None,
        },
        StepperEvent::Commit => {
            let next = commit(state, range);
            Transition {
                committed: Some(next.value),
                state: next,
            }
        }
    }
}
