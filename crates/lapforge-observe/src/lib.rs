//! Logging setup for lapforge.

pub mod tracing_setup;
