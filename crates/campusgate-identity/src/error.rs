//! Error types for the identity layer.

/// A string did not name a known role.
///
/// Carries the offending input so callers can log what they actually
/// received (often a corrupt persisted record).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown role: {0:?}")]
pub struct RoleParseError(pub String);
