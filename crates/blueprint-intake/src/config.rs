//! Intake configuration.

use serde::{Deserialize, Serialize};

use crate::filter::AcceptFilter;

/// Acknowledgment shown after a file is accepted.
pub const DEFAULT_SUCCESS_MESSAGE: &str = "Blueprint uploaded successfully!";

/// How long the acknowledgment stays on screen.
pub const DEFAULT_TOAST_DURATION_MS: u32 = 4000;

/// Configuration for the drop-zone.
///
/// Missing fields fall back to their defaults when deserializing, so a
/// partial JSON object is a valid configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntakeConfig {
    /// File-picker filter. Advisory; drops are not checked against it.
    pub accept: AcceptFilter,

    /// Message passed to the notifier on every accept.
    pub success_message: String,

    /// Milliseconds before the acknowledgment is dismissed.
    pub toast_duration_ms: u32,
}

impl Default for IntakeConfig {
    fn default() -> Self {
        Self {
            accept: AcceptFilter::drawings(),
            success_message: DEFAULT_SUCCESS_MESSAGE.to_owned(),
            toast_duration_ms: DEFAULT_TOAST_DURATION_MS,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_landing_page() {
        let config = IntakeConfig::default();
        assert_eq!(config.accept.to_string(), "image/*,.pdf,.dwg,.dxf");
        assert_eq!(config.success_message, "Blueprint uploaded successfully!");
        assert_eq!(config.toast_duration_ms, 4000);
    }

    #[test]
    fn accept_serializes_as_attribute_string() {
        let json = serde_json::to_value(IntakeConfig::default()).unwrap();
        assert_eq!(json["accept"], "image/*,.pdf,.dwg,.dxf");
    }

    #[test]
    fn partial_json_uses_defaults() {
        let config: IntakeConfig = serde_json::from_str(r#"{"accept": ".pdf"}"#).unwrap();
        assert_eq!(config.accept.to_string(), ".pdf");
        assert_eq!(config.success_message, DEFAULT_SUCCESS_MESSAGE);
        assert_eq!(config.toast_duration_ms, DEFAULT_TOAST_DURATION_MS);
    }

    #[test]
    fn malformed_accept_is_a_deserialize_error() {
        let err = serde_json::from_str::<IntakeConfig>(r#"{"accept": "pdf"}"#).unwrap_err();
        assert!(
            err.to_string().contains("unrecognized accept filter entry"),
            "unexpected error: {err}"
        );
    }

    #[test]
    fn survives_json_round_trip() {
        let config = IntakeConfig {
            accept: ".dxf,image/png".parse().unwrap(),
            success_message: "Got it".into(),
            toast_duration_ms: 1500,
        };
        let json = serde_json::to_string(&config).unwrap();
        let back: IntakeConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
