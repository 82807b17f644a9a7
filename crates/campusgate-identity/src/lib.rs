//! Identity types for Campusgate.
//!
//! This crate defines the vocabulary the rest of the stack speaks:
//!
//! 1. **Roles** — which kind of account is signed in ([`Role`])
//! 2. **Identity lookup** — the fixed role → name/avatar mapping the demo
//!    environment uses instead of a real user directory ([`RoleIdentity`])
//! 3. **Profiles** — the fully-populated record describing a signed-in
//!    identity ([`Profile`])
//!
//! # How it fits in the stack
//!
//! ```text
//! Session Layer (above)  ← owns the state machine; stores a Profile when authenticated
//!     ↕
//! Identity Layer (this crate)  ← defines what a Profile IS and how roles map to one
//!     ↕
//! Store Layer (below)  ← persists the serialized Profile, knows nothing of its shape
//! ```

mod error;
mod profile;
mod role;

pub use error::RoleParseError;
pub use profile::Profile;
pub use role::{Role, RoleIdentity};
