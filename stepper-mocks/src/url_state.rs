//! URL state persistence for the playground
//!
//! Serializes the panel configuration as base64-encoded JSON in the query
//! string, keeping URLs opaque and avoiding conflicts with query parameter names.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use stepper_common::PanelConfig;
use tracing::warn;

#[derive(Debug, thiserror::Error)]
pub enum StateError {
    #[error("invalid base64url encoding")]
    InvalidBase64,
    #[error("invalid panel config: {0}")]
    InvalidConfig(String),
}

/// Decode a state string into a panel configuration.
pub fn decode_state(encoded: &str) -> Result<PanelConfig, StateError> {
    let json_bytes = URL_SAFE_NO_PAD
        .decode(encoded.trim())
        .map_err(|_| StateError::InvalidBase64)?;
    serde_json::from_slice(&json_bytes).map_err(|e| StateError::InvalidConfig(e.to_string()))
}

/// Decode a state string from a URL query parameter.
/// Returns `None` for an empty or malformed string.
pub fn parse_state(encoded: &str) -> Option<PanelConfig> {
    if encoded.is_empty() {
        return None;
    }

    match decode_state(encoded) {
        Ok(config) => Some(config),
        Err(e) => {
            warn!("Ignoring URL state: {e}");
            None
        }
    }
}

/// Encode a configuration into a base64 state string for the URL.
pub fn build_state(config: &PanelConfig) -> String {
    let json = serde_json::to_string(config).expect("panel config is always serializable");
    URL_SAFE_NO_PAD.encode(json.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use stepper_common::{StepperConfig, Unit};

    #[test]
    fn test_state_survives_url() {
        let config = PanelConfig {
            unit: Unit::Pixel,
            stepper: StepperConfig {
                initial_value: -12.5,
                max: Some(40.0),
                ..Default::default()
            },
        };
        assert_eq!(parse_state(&build_state(&config)), Some(config));
    }

    #[test]
    fn test_empty_and_garbage_state() {
        assert_eq!(parse_state(""), None);
        assert_eq!(parse_state("not base64!"), None);
        assert_eq!(parse_state(&URL_SAFE_NO_PAD.encode(b"\"hello\"")), None);
    }

    #[test]
    fn test_unknown_unit_reports_parse_error() {
        let encoded = URL_SAFE_NO_PAD.encode(br#"{"unit":"em"}"#);
        match decode_state(&encoded) {
            Err(StateError::InvalidConfig(msg)) => {
                assert!(msg.contains("unknown unit: \"em\""), "unexpected error: {msg}");
            }
            other => panic!("expected InvalidConfig, got {other:?}"),
        }
        assert_eq!(parse_state(&encoded), None);
    }

    #[test]
    fn test_partial_state_fills_defaults() {
        let encoded = URL_SAFE_NO_PAD.encode(br#"{"unit":"px"}"#);
        let config = parse_state(&encoded).unwrap();
        assert_eq!(config.unit, Unit::Pixel);
        assert_eq!(config.stepper, StepperConfig::default());
    }
}
