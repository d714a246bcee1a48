//! Attribute catalog -- validates raw configuration strings.
//!
//! Each attribute domain accepts a closed set of raw strings. Parsing never
//! mutates anything; callers decide what to do with a rejected value.

use lapforge_types::attribute::{Attribute, AttributeValue, Graphics, Processor, Size};
use lapforge_types::error::AttributeError;

/// Stateless parser over the closed attribute domains.
pub struct AttributeCatalog;

impl AttributeCatalog {
    /// Parse one configuration entry.
    ///
    /// - unknown attribute name -> `Ok(None)`, the entry is not ours to judge
    /// - known name, accepted value -> `Ok(Some(value))`
    /// - known name, unknown value -> `Err(InvalidAttributeValue)`
    pub fn parse(name: &str, raw: &str) -> Result<Option<AttributeValue>, AttributeError> {
        let Some(attribute) = Attribute::from_key(name) else {
            return Ok(None);
        };
        Self::parse_value(attribute, raw).map(Some)
    }

    /// Parse a raw value for an attribute that is already known.
    pub fn parse_value(attribute: Attribute, raw: &str) -> Result<AttributeValue, AttributeError> {
        let parsed = match attribute {
            Attribute::Size => raw.parse::<Size>().map(AttributeValue::Size),
            Attribute::Processor => raw.parse::<Processor>().map(AttributeValue::Processor),
            Attribute::Graphics => raw.parse::<Graphics>().map(AttributeValue::Graphics),
        };
        parsed.map_err(|_| AttributeError::InvalidAttributeValue {
            attribute,
            value: raw.to_string(),
        })
    }

    /// The raw strings accepted for `attribute`.
    pub fn accepted_values(attribute: Attribute) -> Vec<&'static str> {
        match attribute {
            Attribute::Size => Size::ALL.iter().map(|v| v.as_str()).collect(),
            Attribute::Processor => Processor::ALL.iter().map(|v| v.as_str()).collect(),
            Attribute::Graphics => Graphics::ALL.iter().map(|v| v.as_str()).collect(),
        }
    }
}
