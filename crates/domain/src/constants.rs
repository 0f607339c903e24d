//! Application constants
//!
//! Centralized location for domain-level constants used throughout the
//! application.

/// Icon stored for a skill when the caller supplies none.
///
/// The front end renders icons as Font Awesome classes; this is the generic
/// code glyph used by the seed data.
pub const DEFAULT_SKILL_ICON: &str = "fas fa-code";

/// Upper bound on request bodies, sized for base64 data-URI images.
pub const MAX_BODY_BYTES: usize = 50 * 1024 * 1024;
