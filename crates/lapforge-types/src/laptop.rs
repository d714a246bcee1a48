//! The finished product of a construction request.

use serde::{Deserialize, Serialize};

use std::fmt;

use crate::attribute::{AttributeSet, Graphics, Processor, Size};

/// A fully specified laptop.
///
/// Produced by a builder at finalization and never mutated afterwards: the
/// fields are private and there are no setters. Callers get their own copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Laptop {
    size: Size,
    processor: Processor,
    graphics: Graphics,
}

impl Laptop {
    /// Snapshot an attribute set into a finished laptop.
    pub fn from_attributes(attributes: AttributeSet) -> Self {
        Self {
            size: attributes.size,
            processor: attributes.processor,
            graphics: attributes.graphics,
        }
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn processor(&self) -> Processor {
        self.processor
    }

    pub fn graphics(&self) -> Graphics {
        self.graphics
    }

    /// The attribute values this laptop was built from.
    pub fn attributes(&self) -> AttributeSet {
        AttributeSet {
            size: self.size,
            processor: self.processor,
            graphics: self.graphics,
        }
    }
}

impl fmt::Display for Laptop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "\t{} laptop\n\tProcessor {}\n\tGraphics {}",
            self.size, self.processor, self.graphics
        )
    }
}
