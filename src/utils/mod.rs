//! Utility modules
//!
//! - **logging**: tracing subscriber setup for binaries and demos

pub mod logging;

pub use logging::init_tracing;
