//! `LaptopBuilder` -- the builder strategy shared by every preset.

use lapforge_types::attribute::AttributeSet;
use lapforge_types::config::Configuration;
use lapforge_types::diagnostic::Diagnostic;
use lapforge_types::error::AttributeError;
use lapforge_types::laptop::Laptop;
use lapforge_types::preset::Preset;

use crate::catalog::AttributeCatalog;
use crate::diagnostics::DiagnosticSink;

use super::defaults::preset_defaults;

/// Mutable holder of one value per attribute, seeded from a preset.
///
/// The only way to change the held values is `apply_configuration`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaptopBuilder {
    preset: Preset,
    attributes: AttributeSet,
}

impl LaptopBuilder {
    /// Create a builder seeded with `preset`'s defaults.
    pub fn new(preset: Preset) -> Self {
        Self {
            preset,
            attributes: preset_defaults(preset),
        }
    }

    pub fn budget() -> Self {
        Self::new(Preset::Budget)
    }

    pub fn office() -> Self {
        Self::new(Preset::Office)
    }

    pub fn high_end() -> Self {
        Self::new(Preset::HighEnd)
    }

    /// The preset this builder was seeded from.
    pub fn preset(&self) -> Preset {
        self.preset
    }

    /// The values currently held.
    pub fn attributes(&self) -> &AttributeSet {
        &self.attributes
    }

    /// Apply every entry of `config` on top of the held values.
    ///
    /// Accepted values overwrite the held value. Rejected values are reported
    /// to `sink` and leave the held value untouched. Keys that name no
    /// attribute (including `base_model`) are skipped.
    pub fn apply_configuration<S>(&mut self, config: &Configuration, sink: &mut S)
    where
        S: DiagnosticSink + ?Sized,
    {
        for (name, raw) in config {
            match AttributeCatalog::parse(name, raw) {
                Ok(Some(value)) => self.attributes.set(value),
                Ok(None) => {
                    tracing::debug!(key = %name, "skipping non-attribute configuration key");
                }
                Err(AttributeError::InvalidAttributeValue { attribute, value }) => {
                    sink.report(Diagnostic::InvalidAttributeValue { attribute, value });
                }
            }
        }
    }

    /// Snapshot the held values into a finished laptop.
    pub fn finalize(&self) -> Laptop {
        Laptop::from_attributes(self.attributes)
    }
}
