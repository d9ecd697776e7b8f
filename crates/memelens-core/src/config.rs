//! Widget configuration.

use serde::{Deserialize, Serialize};

/// Default classification endpoint, relative to the page origin.
pub const DEFAULT_ENDPOINT: &str = "/predict";

/// Declared content types must start with this to be accepted.
pub const DEFAULT_ACCEPTED_TYPE_PREFIX: &str = "image/";

/// The label that selects the political badge style.
pub const DEFAULT_POLITICAL_LABEL: &str = "Political";

/// Alert shown when a non-image file is chosen.
pub const DEFAULT_INVALID_TYPE_MESSAGE: &str = "Please upload an image file (JPG, PNG).";

/// Alert shown when a submission fails for any reason.
pub const DEFAULT_FAILURE_MESSAGE: &str = "An error occurred during classification.";

/// What to do when a file is accepted while another submission is in flight.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OverlapPolicy {
    /// Start the new submission; completions of older ones are discarded.
    #[default]
    LatestWins,
    /// Refuse new files until the in-flight submission completes.
    RejectWhileLoading,
}

/// Configuration for the upload widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    /// Classification endpoint. Relative paths resolve against the page origin.
    pub endpoint: String,
    /// Required prefix of the declared MIME type.
    pub accepted_type_prefix: String,
    /// Exact label that selects the political badge style.
    pub political_label: String,
    pub invalid_type_message: String,
    pub failure_message: String,
    pub overlap: OverlapPolicy,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_owned(),
            accepted_type_prefix: DEFAULT_ACCEPTED_TYPE_PREFIX.to_owned(),
            political_label: DEFAULT_POLITICAL_LABEL.to_owned(),
            invalid_type_message: DEFAULT_INVALID_TYPE_MESSAGE.to_owned(),
            failure_message: DEFAULT_FAILURE_MESSAGE.to_owned(),
            overlap: OverlapPolicy::default(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = WidgetConfig::default();
        assert_eq!(config.endpoint, "/predict");
        assert_eq!(config.accepted_type_prefix, "image/");
        assert_eq!(config.political_label, "Political");
        assert_eq!(config.overlap, OverlapPolicy::LatestWins);
    }

    #[test]
    fn partial_json_fills_defaults() {
        let config: WidgetConfig =
            serde_json::from_str(r#"{"endpoint":"http://localhost:8000/predict","overlap":"reject-while-loading"}"#)
                .unwrap();
        assert_eq!(config.endpoint, "http://localhost:8000/predict");
        assert_eq!(config.overlap, OverlapPolicy::RejectWhileLoading);
        assert_eq!(config.failure_message, DEFAULT_FAILURE_MESSAGE);
    }

    #[test]
    fn config_serde_roundtrip() {
        let config = WidgetConfig {
            political_label: "Politik".into(),
            ..WidgetConfig::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        let back: WidgetConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }
}
