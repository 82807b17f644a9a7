//! Session management for Campusgate.
//!
//! This crate is the one stateful piece of the stack: it owns the
//! authenticated-or-anonymous session and funnels every mutation through a
//! fixed set of transition operations:
//!
//! 1. **Credentials login** — deterministic demo identities per role
//! 2. **Simulated OAuth login** — always succeeds with a synthesized identity
//! 3. **Logout** — clears state and the persisted record
//! 4. **Password-reset side flow** — async no-ops that never touch the session
//!
//! Authentication here is mock by contract: nothing is verified beyond
//! basic input shape, and every "network call" is a fixed local delay.
//! What IS real is the lifecycle — persistence with expiry, rehydration on
//! startup, one notification per transition, and navigation side effects.
//!
//! # How it fits in the stack
//!
//! ```text
//! View Layer (above)  ← reads Snapshots to gate pages; out of scope here
//!     ↕
//! Session Layer (this crate)  ← owns state, runs transitions, emits notifications
//!     ↕
//! Store Layer (below)  ← cookie-equivalent persistence (campusgate-store)
//! ```

mod config;
mod error;
mod manager;
mod ports;
mod session;

pub use config::{AuthConfig, LoginPolicy};
pub use error::AuthError;
pub use manager::{AuthManager, DEMO_RESET_CODE};
pub use ports::{Navigator, Notification, NotificationVariant, Notifier};
pub use session::{SessionState, Snapshot};
