//! Account roles and the fixed role → identity lookup table.
//!
//! The demo environment has no user directory: who you "are" is derived
//! entirely from which role you log in as. That mapping lives here as a
//! static table so it can be tested in isolation and never drifts between
//! call sites.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::RoleParseError;

// ---------------------------------------------------------------------------
// Role
// ---------------------------------------------------------------------------

/// The kind of account signed into the dashboard.
///
/// Serialized in lowercase (`"student"`, `"teacher"`, `"admin"`) so the
/// persisted session record stays compatible with what the views expect.
///
/// Note there is no `Anonymous` variant here: an anonymous session has no
/// role at all. The session layer models that as the absence of a
/// [`Profile`](crate::Profile), which keeps "partially signed in" states
/// unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Teacher,
    Admin,
}

impl Role {
    /// Every role, in a fixed order.
    ///
    /// The simulated OAuth login picks uniformly from this slice, and tests
    /// iterate it to cover the whole lookup table.
    pub const ALL: [Role; 3] = [Role::Student, Role::Teacher, Role::Admin];

    /// Returns the fixed demo identity for this role.
    ///
    /// This is the static mapping table the credentials login uses to
    /// populate the session: the same role always yields the same name and
    /// avatar, which is what makes the demo deterministic.
    pub const fn identity(self) -> RoleIdentity {
        match self {
            Role::Student => RoleIdentity {
                name: "Amit Kumar",
                avatar: "https://i.pravatar.cc/150?u=student",
                title: "Student",
            },
            Role::Teacher => RoleIdentity {
                name: "Prof. Anjali Patel",
                avatar: "https://i.pravatar.cc/150?u=teacher",
                title: "Professor",
            },
            Role::Admin => RoleIdentity {
                name: "Dr. Rajesh Mishra",
                avatar: "https://i.pravatar.cc/150?u=admin",
                title: "Administrator",
            },
        }
    }

    /// The lowercase wire/storage name of this role.
    pub const fn as_str(self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Teacher => "teacher",
            Role::Admin => "admin",
        }
    }
}

/// Display prints the lowercase name, matching the serialized form.
/// `tracing::info!(role = %role, ...)` logs "student", not "Student".
impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = RoleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "student" => Ok(Role::Student),
            "teacher" => Ok(Role::Teacher),
            "admin" => Ok(Role::Admin),
            other => Err(RoleParseError(other.to_owned())),
        }
    }
}

// ---------------------------------------------------------------------------
// RoleIdentity
// ---------------------------------------------------------------------------

/// One row of the role → identity table.
///
/// All fields are `&'static str` because the table is baked into the
/// binary — there is nothing to allocate or look up at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleIdentity {
    /// Display name shown in the navigation chrome.
    pub name: &'static str,

    /// Avatar image URL.
    pub avatar: &'static str,

    /// Honorific used in the login welcome message
    /// ("Welcome back, Administrator!").
    pub title: &'static str,
}

// =========================================================================
// Tests
// =========================================================================
