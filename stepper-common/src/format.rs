/// Canonical text for a committed value.
///
/// Whole numbers print without a fractional part and negative zero prints
/// as `0`, so `format_value(100.0) == "100"`.
pub fn format_value(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value == f64::INFINITY {
        "Infinity".to_string()
    } else if value == f64::NEG_INFINITY {
        "-Infinity".to_string()
    } else if value == 0.0 {
        "0".to_string()
    } else {
        value.to_string()
    }
}
