//! Non-fatal construction diagnostics.
//!
//! Diagnostics are advisory: they are handed to a sink supplied by the caller
//! and never become part of the constructed `Laptop`.

use serde::{Deserialize, Serialize};

use std::fmt;

use crate::attribute::Attribute;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    /// A known attribute carried a value outside its domain. The entry was
    /// skipped and the previous value kept.
    InvalidAttributeValue { attribute: Attribute, value: String },
    /// The requested base model is not registered.
    UnknownPreset { name: String },
    /// The request named no base model at all.
    MissingPresetKey { key: String },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::InvalidAttributeValue { attribute, value } => {
                write!(f, "Invalid value '{value}' for {attribute}, keeping previous value")
            }
            Diagnostic::UnknownPreset { name } => write!(f, "Unexpected base model '{name}'"),
            Diagnostic::MissingPresetKey { key } => write!(f, "No '{key}' given"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostic_display() {
        let diag = Diagnostic::InvalidAttributeValue {
            attribute: Attribute::Processor,
            value: "i11".to_string(),
        };
        assert_eq!(
            diag.to_string(),
            "Invalid value 'i11' for processor, keeping previous value"
        );
        let diag = Diagnostic::UnknownPreset {
            name: "gaming".to_string(),
        };
        assert_eq!(diag.to_string(), "Unexpected base model 'gaming'");
    }

    #[test]
    fn test_diagnostic_serializes_tagged() {
        let diag = Diagnostic::MissingPresetKey {
            key: "base_model".to_string(),
        };
        let json = serde_json::to_value(&diag).unwrap();
        assert_eq!(json["kind"], "missing_preset_key");
        assert_eq!(json["key"], "base_model");
    }
}
