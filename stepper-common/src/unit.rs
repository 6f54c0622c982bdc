use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Measurement unit for a stepper value.
///
/// Serialized as its symbol; deserialization goes through [`FromStr`], so an
/// unknown symbol in config reports a [`UnitParseError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Unit {
    /// Percentage of a fixed range, clamped into `[min, max]`
    #[default]
    Percent,
    /// Absolute pixels, unbounded
    Pixel,
}

impl Unit {
    /// Options offered by the unit toggle, in display order
    pub const ALL: [Unit; 2] = [Unit::Percent, Unit::Pixel];

    pub fn symbol(self) -> &'static str {
        match self {
            Unit::Percent => "%",
            Unit::Pixel => "px",
        }
    }

    /// Whether values in this unit are clamped into their range.
    pub fn is_clamped(self) -> bool {
        self == Unit::Percent
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown unit: {0:?}")]
pub struct UnitParseError(pub String);

impl FromStr for Unit {
    type Err = UnitParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "%" => Ok(Unit::Percent),
            "px" => Ok(Unit::Pixel),
            other => Err(UnitParseError(other.to_string())),
        }
    }
}

impl TryFrom<String> for Unit {
    type Error = UnitParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Unit> for String {
    fn from(unit: Unit) -> Self {
        unit.symbol().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_symbols() {
        assert_eq!("%".parse::<Unit>(), Ok(Unit::Percent));
        assert_eq!(" px ".parse::<Unit>(), Ok(Unit::Pixel));
    }

    #[test]
    fn test_parse_unknown() {
        let err = "em".parse::<Unit>().unwrap_err();
        assert_eq!(err, UnitParseError("em".into()));
        assert_eq!(err.to_string(), "unknown unit: \"em\"");
    }

    #[test]
    fn test_only_percent_clamps() {
        assert!(Unit::Percent.is_clamped());
        assert!(!Unit::Pixel.is_clamped());
    }

    #[test]
    fn test_serde_uses_symbol() {
        assert_eq!(serde_json::to_string(&Unit::Percent).unwrap(), "\"%\"");
        let unit: Unit = serde_json::from_str("\"px\"").unwrap();
        assert_eq!(unit, Unit::Pixel);
    }

    #[test]
    fn test_serde_reports_parse_error() {
        let err = serde_json::from_str::<Unit>("\"em\"").unwrap_err();
        assert!(
            err.to_string().contains("unknown unit: \"em\""),
            "unexpected error: {err}"
        );
    }
}
