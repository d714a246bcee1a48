//! Builder strategies and the presets that seed them.
//!
//! A single `LaptopBuilder` type carries the apply/finalize logic; presets
//! differ only in the default `AttributeSet` injected at construction. The
//! `PresetRegistry` hands out a fresh builder per request.

pub mod defaults;
pub mod registry;
pub mod strategy;

pub use registry::PresetRegistry;
pub use strategy::LaptopBuilder;
