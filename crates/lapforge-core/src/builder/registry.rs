//! Preset registry for runtime builder lookup.
//!
//! A closed, name-indexed table of builder factories. The set of presets is
//! fixed when the registry is built and cannot change afterwards.

use std::collections::HashMap;
use std::sync::OnceLock;

use lapforge_types::error::PresetError;
use lapforge_types::preset::Preset;

use super::strategy::LaptopBuilder;

/// Produces a freshly seeded builder.
pub type BuilderFactory = fn() -> LaptopBuilder;

static GLOBAL_REGISTRY: OnceLock<PresetRegistry> = OnceLock::new();

/// Registry of preset factories, indexed by preset name.
pub struct PresetRegistry {
    factories: HashMap<&'static str, BuilderFactory>,
}

impl PresetRegistry {
    /// Build the registry holding every standard preset.
    pub fn standard() -> Self {
        let mut registry = Self {
            factories: HashMap::new(),
        };
        registry.register(Preset::Budget, LaptopBuilder::budget);
        registry.register(Preset::Office, LaptopBuilder::office);
        registry.register(Preset::HighEnd, LaptopBuilder::high_end);
        registry
    }

    /// The process-wide registry, built on first use.
    pub fn global() -> &'static PresetRegistry {
        GLOBAL_REGISTRY.get_or_init(Self::standard)
    }

    fn register(&mut self, preset: Preset, factory: BuilderFactory) {
        self.factories.insert(preset.as_str(), factory);
    }

    /// Create a new builder for the named preset.
    ///
    /// Every call returns an independent builder; nothing is cached.
    pub fn resolve(&self, name: &str) -> Result<LaptopBuilder, PresetError> {
        let factory = self
            .factories
            .get(name)
            .ok_or_else(|| PresetError::UnknownPreset(name.to_string()))?;
        tracing::debug!(preset = name, "resolved preset");
        Ok(factory())
    }

    /// Whether `name` is a registered preset.
    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    /// Registered preset names, sorted.
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.factories.keys().copied().collect();
        names.sort_unstable();
        names
    }
}

impl Default for PresetRegistry {
    fn default() -> Self {
        Self::standard()
    }
}
