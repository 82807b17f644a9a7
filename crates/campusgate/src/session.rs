//! Session state: the two-state machine the manager owns.

use campusgate_identity::{Profile, Role};

// ---------------------------------------------------------------------------
// SessionState
// ---------------------------------------------------------------------------

/// The current session.
///
/// This is a state machine with exactly two states:
///
/// ```text
///   Anonymous ──(login / oauth login / rehydrate)──→ Authenticated
///       ↑                                                 │
///       └────────(logout / missing or corrupt record)─────┘
/// ```
///
/// The authenticated state carries the whole [`Profile`] by value, so a
/// "half signed-in" session (role set but no name, etc.) cannot be
/// constructed at all — the invariant lives in the type, not in checks.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SessionState {
    /// Nobody is signed in. All identity fields read as unset.
    #[default]
    Anonymous,

    /// A fully-populated identity is signed in.
    Authenticated(Profile),
}

impl SessionState {
    /// Whether a profile is currently signed in.
    pub fn is_authenticated(&self) -> bool {
        matches!(self, SessionState::Authenticated(_))
    }

    /// The read-only view handed to consumers.
    pub fn snapshot(&self) -> Snapshot {
        match self {
            SessionState::Anonymous => Snapshot::default(),
            SessionState::Authenticated(profile) => Snapshot {
                role: Some(profile.role),
                is_authenticated: true,
                name: Some(profile.name.clone()),
                avatar: Some(profile.avatar.clone()),
                email: Some(profile.email.clone()),
            },
        }
    }
}

// ---------------------------------------------------------------------------
// Snapshot
// ---------------------------------------------------------------------------

/// A point-in-time, read-only copy of the session.
///
/// This is what the view layer consumes to decide what to render. It is a
/// plain value — holding one does not keep the session alive or let
/// anyone mutate it. The fields mirror the persisted record plus the
/// derived `is_authenticated` flag; either all the `Option`s are `Some`
/// (authenticated) or all are `None` (anonymous).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Snapshot {
    pub role: Option<Role>,
    pub is_authenticated: bool,
    pub name: Option<String>,
    pub avatar: Option<String>,
    pub email: Option<String>,
}
