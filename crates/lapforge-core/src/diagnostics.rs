//! Sinks for non-fatal construction diagnostics.

use lapforge_types::diagnostic::Diagnostic;

use crate::catalog::AttributeCatalog;

/// Receiver for diagnostics raised while constructing a laptop.
pub trait DiagnosticSink {
    fn report(&mut self, diagnostic: Diagnostic);
}

/// Writes every diagnostic to the `tracing` log at WARN level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn report(&mut self, diagnostic: Diagnostic) {
        match &diagnostic {
            Diagnostic::InvalidAttributeValue { attribute, value } => {
                let accepted = AttributeCatalog::accepted_values(*attribute);
                tracing::warn!(%attribute, %value, ?accepted, "{diagnostic}");
            }
            Diagnostic::UnknownPreset { name } => {
                tracing::warn!(preset = %name, "{diagnostic}");
            }
            Diagnostic::MissingPresetKey { key } => {
                tracing::warn!(%key, "{diagnostic}");
            }
        }
    }
}

/// Collects diagnostics for later inspection.
impl DiagnosticSink for Vec<Diagnostic> {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for &mut S {
    fn report(&mut self, diagnostic: Diagnostic) {
        (**self).report(diagnostic);
    }
}
