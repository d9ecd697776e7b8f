//! Shared types for the memelens upload widget.

use serde::{Deserialize, Serialize};

/// A user-chosen file held for the duration of one upload cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    name: String,
    content_type: String,
    bytes: Vec<u8>,
}

impl SelectedFile {
    /// Create a selected file from its name, declared MIME type, and bytes.
    #[must_use]
    pub fn new(name: impl Into<String>, content_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            content_type: content_type.into(),
            bytes,
        }
    }

    /// File name as reported by the picker or drop event.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared MIME type (may be empty when the browser could not tell).
    #[must_use]
    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    /// Raw file contents.
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Consumes the file and returns its contents.
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

/// The label returned by the classification service.
///
/// Any string is a valid prediction; only exact equality with the
/// configured political label selects the political badge style.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prediction {
    /// The label text, e.g. `"Political"` or `"NonPolitical"`.
    pub prediction: String,
}

impl Prediction {
    /// Create a prediction from a label.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            prediction: label.into(),
        }
    }

    /// The label text.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.prediction
    }
}

/// Visual style of the result badge. Exactly one applies at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BadgeStyle {
    Political,
    NonPolitical,
}

impl BadgeStyle {
    /// CSS class applied alongside the base `badge` class.
    #[must_use]
    pub const fn class(self) -> &'static str {
        match self {
            Self::Political => "political",
            Self::NonPolitical => "non-political",
        }
    }
}

/// A rendered prediction: the label text plus its style.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Badge {
    pub text: String,
    pub style: BadgeStyle,
}

impl Badge {
    /// Build the badge for `prediction`.
    ///
    /// The style is [`BadgeStyle::Political`] only when the label equals
    /// `political_label` exactly (case-sensitive, no trimming).
    #[must_use]
    pub fn from_prediction(prediction: &Prediction, political_label: &str) -> Self {
        let style = if prediction.label() == political_label {
            BadgeStyle::Political
        } else {
            BadgeStyle::NonPolitical
        };
        Self {
            text: prediction.prediction.clone(),
            style,
        }
    }

    /// Full class attribute for the badge element, e.g. `"badge political"`.
    #[must_use]
    pub fn class_name(&self) -> String {
        format!("badge {}", self.style.class())
    }
}

/// Errors raised when the widget refuses a file.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WidgetError {
    /// The declared content type is not an image.
    #[error("unsupported file type {content_type:?} for {name}")]
    InvalidFileType { name: String, content_type: String },

    /// A submission is still in flight and the overlap policy refuses new files.
    #[error("a classification is already in progress")]
    Busy,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn badge_political_exact_match() {
        let badge = Badge::from_prediction(&Prediction::new("Political"), "Political");
        assert_eq!(badge.style, BadgeStyle::Political);
        assert_eq!(badge.text, "Political");
        assert_eq!(badge.class_name(), "badge political");
    }

    #[test]
    fn badge_non_political_for_other_labels() {
        for label in ["NonPolitical", "Not Political", "political", " Political", ""] {
            let badge = Badge::from_prediction(&Prediction::new(label), "Political");
            assert_eq!(badge.style, BadgeStyle::NonPolitical, "label {label:?}");
            assert_eq!(badge.class_name(), "badge non-political");
        }
    }

    #[test]
    fn prediction_deserializes_from_service_json() {
        let p: Prediction = serde_json::from_str(r#"{"prediction":"Political"}"#).unwrap();
        assert_eq!(p.label(), "Political");
    }

    #[test]
    fn prediction_ignores_extra_fields() {
        let p: Prediction =
            serde_json::from_str(r#"{"prediction":"NonPolitical","score":0.9}"#).unwrap();
        assert_eq!(p.label(), "NonPolitical");
    }

    #[test]
    fn prediction_requires_string_label() {
        assert!(serde_json::from_str::<Prediction>(r#"{"prediction":1}"#).is_err());
        assert!(serde_json::from_str::<Prediction>(r#"{"label":"Political"}"#).is_err());
    }
}
