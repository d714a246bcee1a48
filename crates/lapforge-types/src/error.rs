use thiserror::Error;

use crate::attribute::Attribute;

/// Errors raised while parsing a raw attribute value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AttributeError {
    #[error("invalid value '{value}' for attribute '{attribute}'")]
    InvalidAttributeValue { attribute: Attribute, value: String },
}

/// Errors related to preset resolution.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PresetError {
    #[error("unknown preset: '{0}'")]
    UnknownPreset(String),

    #[error("configuration has no '{0}' key")]
    MissingPresetKey(String),
}

/// Errors that abort a whole construction request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConstructionError {
    #[error("construction aborted: {0}")]
    ConstructionAborted(#[from] PresetError),
}

/// Errors from loading request files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {message}")]
    Parse { path: String, message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attribute_error_display() {
        let err = AttributeError::InvalidAttributeValue {
            attribute: Attribute::Processor,
            value: "i11".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid value 'i11' for attribute 'processor'"
        );
    }

    #[test]
    fn test_construction_error_wraps_preset_error() {
        let err: ConstructionError = PresetError::UnknownPreset("gaming".to_string()).into();
        assert_eq!(
            err.to_string(),
            "construction aborted: unknown preset: 'gaming'"
        );
    }

    #[test]
    fn test_missing_preset_key_display() {
        let err = PresetError::MissingPresetKey("base_model".to_string());
        assert_eq!(err.to_string(), "configuration has no 'base_model' key");
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Parse {
            path: "requests.toml".to_string(),
            message: "expected `=`".to_string(),
        };
        assert!(err.to_string().contains("requests.toml"));
        assert!(err.to_string().contains("expected `=`"));
    }
}
