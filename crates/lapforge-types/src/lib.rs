//! Shared domain types for lapforge.
//!
//! This crate contains the core domain types used across the workspace:
//! the configurable attributes and their typed values, the finished `Laptop`,
//! named presets, diagnostics, and the associated error types.
//!
//! Zero infrastructure dependencies -- only serde and thiserror.

pub mod attribute;
pub mod config;
pub mod diagnostic;
pub mod error;
pub mod laptop;
pub mod preset;
