//! API routes, relative to the configured base URL

/// Text completions
pub const COMPLETIONS: &str = "completions";
