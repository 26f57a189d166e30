//! Utility modules.

/// Address masking for logged URLs, bodies and transport errors.
pub mod log_sanitizer;
