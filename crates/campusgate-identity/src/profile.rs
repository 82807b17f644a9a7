//! The session profile: the record describing a signed-in identity.

use serde::{Deserialize, Serialize};

use crate::Role;

/// A fully-populated identity, created at login time.
///
/// A profile only exists for an authenticated session — there is no
/// "empty" or "half-filled" profile. The session layer holds
/// `Option<Profile>`-shaped state instead, so every field here is always
/// set:
///
/// - `role` drives which views are gated open.
/// - `name` and `avatar` come from the role's fixed
///   [`RoleIdentity`](crate::RoleIdentity) row (credentials login) or are
///   synthesized (simulated OAuth login). Once set they do not change
///   until the next login.
/// - `email` is whatever the user typed, or a synthesized address on the
///   OAuth path.
///
/// This is also the exact record serialized into the persisted store, so
/// the serde derives define the on-disk format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub role: Role,
    pub name: String,
    pub avatar: String,
    pub email: String,
}

impl Profile {
    /// Builds the profile a credentials login produces: identity fields
    /// from the role table, email as supplied.
    pub fn for_role(role: Role, email: impl Into<String>) -> Self {
        let identity = role.identity();
        Self {
            role,
            name: identity.name.to_owned(),
            avatar: identity.avatar.to_owned(),
            email: email.into(),
        }
    }
}
