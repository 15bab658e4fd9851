//! Command implementations for biztime CLI

pub mod serve;

pub use serve::run_serve;
