//! Construction request types.
//!
//! A `Configuration` is the untyped input of one construction request. A
//! `RequestFile` is a TOML document carrying any number of them:
//!
//! ```toml
//! [[request]]
//! base_model = "office"
//! size = "13-inch"
//! ```

use serde::{Deserialize, Serialize};

use std::collections::BTreeMap;

/// Reserved configuration key selecting the preset.
pub const BASE_MODEL_KEY: &str = "base_model";

/// Attribute name to raw value, plus the reserved `base_model` key.
///
/// Ordered so that diagnostics come out in a stable order; the built laptop
/// does not depend on it.
pub type Configuration = BTreeMap<String, String>;

/// Batch of construction requests loaded from a TOML file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestFile {
    #[serde(default, rename = "request")]
    pub requests: Vec<Configuration>,
}
