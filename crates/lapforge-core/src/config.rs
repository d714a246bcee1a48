//! Request file loader.
//!
//! Reads a TOML file of `[[request]]` tables and returns one `Configuration`
//! per table, in file order.

use std::path::Path;

use lapforge_types::config::{Configuration, RequestFile};
use lapforge_types::error::ConfigError;

/// Load construction requests from `path`.
///
/// - If the file does not exist, returns an empty list.
/// - If the file cannot be read, returns [`ConfigError::Io`].
/// - If the file is not a valid request file, returns [`ConfigError::Parse`].
pub fn load_requests(path: &Path) -> Result<Vec<Configuration>, ConfigError> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No request file at {}, nothing to build", path.display());
            return Ok(Vec::new());
        }
        Err(source) => {
            return Err(ConfigError::Io {
                path: path.display().to_string(),
                source,
            });
        }
    };

    let file = toml::from_str::<RequestFile>(&content).map_err(|err| ConfigError::Parse {
        path: path.display().to_string(),
        message: err.to_string(),
    })?;

    tracing::debug!(count = file.requests.len(), "loaded requests from {}", path.display());
    Ok(file.requests)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    use lapforge_types::attribute::Size;
    use lapforge_types::diagnostic::Diagnostic;

    use crate::director::Director;

    #[test]
    fn load_requests_missing_file_returns_empty() {
        let tmp = TempDir::new().unwrap();
        let requests = load_requests(&tmp.path().join("requests.toml")).unwrap();
        assert!(requests.is_empty());
    }

    #[test]
    fn load_requests_valid_toml_returns_parsed() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("requests.toml");
        std::fs::write(
            &path,
            r#"
[[request]]
base_model = "budget"

[[request]]
base_model = "office"
size = "13-inch"
"#,
        )
        .unwrap();

        let requests = load_requests(&path).unwrap();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0]["base_model"], "budget");
        assert_eq!(requests[1]["size"], "13-inch");
    }

    #[test]
    fn load_requests_invalid_toml_returns_parse_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("requests.toml");
        std::fs::write(&path, "this is not { valid toml !!!").unwrap();

        let err = load_requests(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn load_requests_directory_returns_io_error() {
        let tmp = TempDir::new().unwrap();
        let err = load_requests(tmp.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn loaded_requests_feed_the_director() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("requests.toml");
        std::fs::write(
            &path,
            r#"
[[request]]
base_model = "office"
size = "13-inch"

[[request]]
base_model = "unknown-model"
"#,
        )
        .unwrap();

        let requests = load_requests(&path).unwrap();
        let outcomes = Director::new().construct_all(&requests);
        assert_eq!(outcomes[0].result.as_ref().unwrap().size(), Size::ThirteenInch);
        assert!(outcomes[0].diagnostics.is_empty());
        assert!(outcomes[1].result.is_err());
        assert_eq!(
            outcomes[1].diagnostics,
            vec![Diagnostic::UnknownPreset {
                name: "unknown-model".to_string()
            }]
        );
    }
}
