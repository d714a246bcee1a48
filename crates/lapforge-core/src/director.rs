//! Director -- drives one construction request end to end.
//!
//! The director has two states:
//!
//! - **Idle**: no builder bound. This is the `Director` value itself, which
//!   holds nothing but a reference to the read-only preset registry.
//! - **Bound**: a builder resolved from the request's `base_model`, together
//!   with that request's configuration. This is a `BoundDirector`, consumed by
//!   `finish`, so a bound builder can never outlive or change its request.
//!
//! Failing to resolve the preset leaves the director Idle and aborts the
//! request. Invalid attribute values never abort; they go to the sink passed
//! with the request, so diagnostics never mix across requests.

use lapforge_types::config::{BASE_MODEL_KEY, Configuration};
use lapforge_types::diagnostic::Diagnostic;
use lapforge_types::error::{ConstructionError, PresetError};
use lapforge_types::laptop::Laptop;
use lapforge_types::preset::Preset;

use crate::builder::{LaptopBuilder, PresetRegistry};
use crate::diagnostics::DiagnosticSink;

/// Result of one request in a batch, with the diagnostics it raised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestOutcome {
    pub result: Result<Laptop, ConstructionError>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Orchestrates preset resolution, configuration and finalization.
#[derive(Clone, Copy)]
pub struct Director<'r> {
    registry: &'r PresetRegistry,
}

impl Director<'static> {
    /// Director over the global registry.
    pub fn new() -> Self {
        Self::with_registry(PresetRegistry::global())
    }
}

impl Default for Director<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'r> Director<'r> {
    pub fn with_registry(registry: &'r PresetRegistry) -> Self {
        Self { registry }
    }

    /// Idle -> Bound: resolve the builder named by `config["base_model"]`.
    ///
    /// On failure a diagnostic is reported to `sink`, the director stays Idle
    /// and the request is aborted.
    pub fn bind<'c, S>(
        &self,
        config: &'c Configuration,
        sink: &mut S,
    ) -> Result<BoundDirector<'c>, ConstructionError>
    where
        S: DiagnosticSink + ?Sized,
    {
        let Some(name) = config.get(BASE_MODEL_KEY) else {
            sink.report(Diagnostic::MissingPresetKey {
                key: BASE_MODEL_KEY.to_string(),
            });
            return Err(PresetError::MissingPresetKey(BASE_MODEL_KEY.to_string()).into());
        };

        let builder = match self.registry.resolve(name) {
            Ok(builder) => builder,
            Err(err) => {
                sink.report(Diagnostic::UnknownPreset { name: name.clone() });
                return Err(err.into());
            }
        };

        tracing::debug!(preset = %builder.preset(), "director bound");
        Ok(BoundDirector { config, builder })
    }

    /// Build one laptop from `config`, reporting its diagnostics to `sink`.
    ///
    /// The whole configuration, `base_model` included, is applied to the bound
    /// builder; `base_model` names no attribute and is skipped there.
    pub fn construct<S>(
        &self,
        config: &Configuration,
        sink: &mut S,
    ) -> Result<Laptop, ConstructionError>
    where
        S: DiagnosticSink + ?Sized,
    {
        Ok(self.bind(config, sink)?.finish(sink))
    }

    /// Build every request in order. Each request stands alone: a failed one
    /// does not stop the rest, and each outcome carries only its own
    /// diagnostics.
    pub fn construct_all(&self, requests: &[Configuration]) -> Vec<RequestOutcome> {
        requests
            .iter()
            .map(|config| {
                let mut diagnostics: Vec<Diagnostic> = Vec::new();
                let result = self.construct(config, &mut diagnostics);
                RequestOutcome {
                    result,
                    diagnostics,
                }
            })
            .collect()
    }
}

/// A builder bound to the request it was resolved for.
#[derive(Debug)]
pub struct BoundDirector<'c> {
    config: &'c Configuration,
    builder: LaptopBuilder,
}

impl BoundDirector<'_> {
    /// The preset the bound builder was seeded from.
    pub fn preset(&self) -> Preset {
        self.builder.preset()
    }

    /// Bound -> Idle: apply the bound configuration, finalize, and release
    /// the builder.
    pub fn finish<S>(mut self, sink: &mut S) -> Laptop
    where
        S: DiagnosticSink + ?Sized,
    {
        self.builder.apply_configuration(self.config, sink);
        let laptop = self.builder.finalize();
        tracing::debug!(preset = %self.builder.preset(), "director idle");
        laptop
    }
}
