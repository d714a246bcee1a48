//! Configurable laptop attributes and their closed value domains.
//!
//! Every typed value has two renderings:
//! - `as_str()` -- the raw configuration key accepted on input (`"i7"`)
//! - `Display` -- the product label shown to people (`"Intel Core i7"`)
//!
//! `FromStr` accepts only the raw configuration keys, matched exactly.

use serde::{Deserialize, Serialize};

use std::fmt;
use std::str::FromStr;

/// The configurable attribute domains, named by their configuration key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Attribute {
    Size,
    Processor,
    Graphics,
}

impl Attribute {
    /// Every attribute domain, in rendering order.
    pub const ALL: [Attribute; 3] = [Attribute::Size, Attribute::Processor, Attribute::Graphics];

    /// The configuration key naming this attribute.
    pub fn key(self) -> &'static str {
        match self {
            Attribute::Size => "size",
            Attribute::Processor => "processor",
            Attribute::Graphics => "graphics",
        }
    }

    /// Look up an attribute by configuration key. Unknown keys yield `None`.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|attribute| attribute.key() == key)
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Display size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Size {
    #[serde(rename = "13-inch")]
    ThirteenInch,
    #[serde(rename = "15-inch")]
    FifteenInch,
}

impl Size {
    pub const ALL: [Size; 2] = [Size::ThirteenInch, Size::FifteenInch];

    pub fn as_str(self) -> &'static str {
        match self {
            Size::ThirteenInch => "13-inch",
            Size::FifteenInch => "15-inch",
        }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Size {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "13-inch" => Ok(Size::ThirteenInch),
            "15-inch" => Ok(Size::FifteenInch),
            other => Err(format!("invalid size: '{other}'")),
        }
    }
}

/// CPU model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Processor {
    I5,
    I7,
    I9,
}

impl Processor {
    pub const ALL: [Processor; 3] = [Processor::I5, Processor::I7, Processor::I9];

    pub fn as_str(self) -> &'static str {
        match self {
            Processor::I5 => "i5",
            Processor::I7 => "i7",
            Processor::I9 => "i9",
        }
    }
}

impl fmt::Display for Processor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Processor::I5 => write!(f, "Intel Core i5"),
            Processor::I7 => write!(f, "Intel Core i7"),
            Processor::I9 => write!(f, "Intel Core i9"),
        }
    }
}

impl FromStr for Processor {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "i5" => Ok(Processor::I5),
            "i7" => Ok(Processor::I7),
            "i9" => Ok(Processor::I9),
            other => Err(format!("invalid processor: '{other}'")),
        }
    }
}

/// GPU model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Graphics {
    #[serde(rename = "intel-uhd-graphics-617")]
    IntelUhd617,
    #[serde(rename = "intel-iris-plus-graphics-645")]
    IntelIrisPlus645,
    #[serde(rename = "radeon-pro-vega-20")]
    RadeonProVega20,
}

impl Graphics {
    pub const ALL: [Graphics; 3] = [
        Graphics::IntelUhd617,
        Graphics::IntelIrisPlus645,
        Graphics::RadeonProVega20,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Graphics::IntelUhd617 => "intel-uhd-graphics-617",
            Graphics::IntelIrisPlus645 => "intel-iris-plus-graphics-645",
            Graphics::RadeonProVega20 => "radeon-pro-vega-20",
        }
    }
}

impl fmt::Display for Graphics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Graphics::IntelUhd617 => write!(f, "Intel UHD Graphics 617"),
            Graphics::IntelIrisPlus645 => write!(f, "Intel Iris Plus Graphics 645"),
            Graphics::RadeonProVega20 => write!(f, "Radeon Pro Vega 20"),
        }
    }
}

impl FromStr for Graphics {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "intel-uhd-graphics-617" => Ok(Graphics::IntelUhd617),
            "intel-iris-plus-graphics-645" => Ok(Graphics::IntelIrisPlus645),
            "radeon-pro-vega-20" => Ok(Graphics::RadeonProVega20),
            other => Err(format!("invalid graphics: '{other}'")),
        }
    }
}

/// A typed value tagged with the attribute it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeValue {
    Size(Size),
    Processor(Processor),
    Graphics(Graphics),
}

impl AttributeValue {
    /// The attribute domain this value belongs to.
    pub fn attribute(&self) -> Attribute {
        match self {
            AttributeValue::Size(_) => Attribute::Size,
            AttributeValue::Processor(_) => Attribute::Processor,
            AttributeValue::Graphics(_) => Attribute::Graphics,
        }
    }
}

/// One typed value per attribute.
///
/// Used both as a preset's default assignment and as the mutable state held
/// by a builder between construction and finalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeSet {
    pub size: Size,
    pub processor: Processor,
    pub graphics: Graphics,
}

impl AttributeSet {
    /// Overwrite the slot matching `value`'s attribute.
    pub fn set(&mut self, value: AttributeValue) {
        match value {
            AttributeValue::Size(size) => self.size = size,
            AttributeValue::Processor(processor) => self.processor = processor,
            AttributeValue::Graphics(graphics) => self.graphics = graphics,
        }
    }

    /// Read the value currently held for `attribute`.
    pub fn get(&self, attribute: Attribute) -> AttributeValue {
        match attribute {
            Attribute::Size => AttributeValue::Size(self.size),
            Attribute::Processor => AttributeValue::Processor(self.processor),
            Attribute::Graphics => AttributeValue::Graphics(self.graphics),
        }
    }
}
