//! Session manager configuration.

use std::time::Duration;

// ---------------------------------------------------------------------------
// AuthConfig
// ---------------------------------------------------------------------------

/// Configuration for the session manager.
///
/// Defaults match the original demo environment: a 2-second simulated
/// network latency, a 7-day session cookie, and unguarded concurrent
/// logins.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// How long every simulated network call suspends before committing.
    ///
    /// All side effects of an operation happen strictly AFTER this delay,
    /// which is what makes dropping an in-flight operation a clean cancel.
    /// Tests run under a paused clock, so the default costs nothing there.
    pub network_delay: Duration,

    /// Expiry written with every persisted session record.
    ///
    /// Default: 7 days, the demo's cookie lifetime.
    pub session_ttl: Duration,

    /// Key the session record is stored under.
    ///
    /// Default: `"userData"`. Kept configurable so two managers can share
    /// one store in tests without colliding.
    pub storage_key: String,

    /// What happens when login-family operations overlap. See
    /// [`LoginPolicy`].
    pub login_policy: LoginPolicy,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            network_delay: Duration::from_secs(2),
            session_ttl: Duration::from_secs(7 * 24 * 60 * 60),
            storage_key: "userData".to_owned(),
            login_policy: LoginPolicy::LastWriteWins,
        }
    }
}

// ---------------------------------------------------------------------------
// LoginPolicy
// ---------------------------------------------------------------------------

/// Concurrency policy for overlapping login-family operations
/// (credentials login and simulated OAuth login).
///
/// Under last-write-wins, two racing logins both run to completion:
/// whichever timer fires last owns the final state, and each still emits
/// its own notification and persistence effects. That is the default so
/// the race is an explicit, documented choice instead of an accident;
/// single-flight is the serialized alternative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginPolicy {
    /// Overlapping logins all run; the last one to finish wins the state.
    #[default]
    LastWriteWins,

    /// While one login is in flight, further login calls return
    /// immediately with no side effects.
    SingleFlight,
}
