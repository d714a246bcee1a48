//! Construction pipeline for lapforge.
//!
//! Turns an untyped `Configuration` into a validated `Laptop`:
//! the `Director` resolves the requested base model through the
//! `PresetRegistry`, the resulting `LaptopBuilder` applies the remaining keys
//! through the `AttributeCatalog`, and finalization snapshots the result.
//! Depends only on `lapforge-types` plus logging and TOML parsing.

pub mod builder;
pub mod catalog;
pub mod config;
pub mod diagnostics;
pub mod director;
