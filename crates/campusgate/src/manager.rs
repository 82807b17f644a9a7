//! The session manager: owns the session and runs its transitions.
//!
//! This is the central piece of the crate. It is responsible for:
//! - Rehydrating the session from the persisted store at startup
//! - Running the login / OAuth-login / logout transitions
//! - Running the password-reset side flow (which never touches the session)
//! - Persisting every authenticated state with the configured expiry
//! - Emitting exactly one notification per operation
//!
//! # Concurrency note
//!
//! The manager is shared (`&self` operations) but effectively
//! single-threaded: callers are UI event handlers on one runtime. The
//! state sits behind a plain `std::sync::Mutex` held only for short
//! synchronous sections — never across an await. Overlapping logins are
//! governed by [`LoginPolicy`]: unguarded last-write-wins by default, or
//! an explicit single-flight guard.
//!
//! # Cancellation
//!
//! Every operation performs ALL of its side effects strictly after its
//! simulated network delay. Dropping the future before the delay elapses
//! therefore cancels the whole transition: no state change, no
//! notification, no persistence.

use std::sync::{Mutex, MutexGuard, PoisonError};

use campusgate_identity::{Profile, Role};
use campusgate_store::SessionStore;
use rand::Rng;

use crate::{
    AuthConfig, AuthError, LoginPolicy, Navigator, Notification, Notifier, SessionState, Snapshot,
};

/// The only reset code the demo accepts.
///
/// Verification is a literal comparison against this constant — strict
/// and deterministic, no "any code passes" mode.
pub const DEMO_RESET_CODE: &str = "123456";

/// Minimum password length accepted by the credentials login.
const MIN_PASSWORD_LEN: usize = 8;

/// Path every successful login and logout navigates to.
const ROOT_PATH: &str = "/";

/// Owns the session and exposes the transition operations.
///
/// ## Lifecycle
///
/// ```text
/// new() ──rehydrate──→ [Anonymous | Authenticated]
///
/// login() / login_with_google() ──→ [Authenticated] + persist + notify + navigate
/// logout()                      ──→ [Anonymous]     + clear   + notify + navigate
/// request_password_reset()
/// verify_password_reset_code()  ──→ session untouched, notification only
/// reset_password()
/// ```
///
/// The store, notifier, and navigator are injected; the manager holds no
/// ambient globals. Consumers read the session through [`snapshot`]
/// (a value copy) and can never mutate it directly.
///
/// [`snapshot`]: AuthManager::snapshot
pub struct AuthManager<S, N, V>
where
    S: SessionStore,
    N: Notifier,
    V: Navigator,
{
    state: Mutex<SessionState>,
    store: S,
    notifier: N,
    navigator: V,
    config: AuthConfig,

    /// Guard for the single-flight login policy. Unused (never locked)
    /// under last-write-wins.
    login_guard: tokio::sync::Mutex<()>,
}

impl<S, N, V> AuthManager<S, N, V>
where
    S: SessionStore,
    N: Notifier,
    V: Navigator,
{
    /// Creates a manager, rehydrating the session from the store.
    ///
    /// A missing, expired, or malformed persisted record all start the
    /// session `Anonymous`; malformed records and store failures are
    /// logged and otherwise ignored. Construction never fails.
    pub fn new(store: S, notifier: N, navigator: V, config: AuthConfig) -> Self {
        let state = match restore_profile(&store, &config.storage_key) {
            Ok(Some(profile)) => {
                tracing::info!(role = %profile.role, "session rehydrated from store");
                SessionState::Authenticated(profile)
            }
            Ok(None) => SessionState::Anonymous,
            Err(err) => {
                tracing::warn!(error = %err, "could not restore session, starting anonymous");
                SessionState::Anonymous
            }
        };

        Self {
            state: Mutex::new(state),
            store,
            notifier,
            navigator,
            config,
            login_guard: tokio::sync::Mutex::new(()),
        }
    }

    /// A read-only copy of the current session.
    pub fn snapshot(&self) -> Snapshot {
        self.state().snapshot()
    }

    /// Whether a profile is currently signed in.
    pub fn is_authenticated(&self) -> bool {
        self.state().is_authenticated()
    }

    // -- Transition operations --------------------------------------------

    /// Credentials login.
    ///
    /// Succeeds for any non-empty email and password of at least 8
    /// characters — there is no real verification. On success the profile
    /// comes from the fixed role table, gets persisted, and the view is
    /// sent back to the root path. On failure the session is left exactly
    /// as it was and a destructive notification describes why.
    ///
    /// Never returns an error; the notification IS the outcome channel.
    pub async fn login(&self, email: &str, password: &str, role: Role) {
        let Some(_slot) = self.acquire_login_slot() else {
            return;
        };

        self.simulate_network().await;

        match validate_credentials(email, password) {
            Ok(()) => {
                let profile = Profile::for_role(role, email);
                let title = role.identity().title;
                tracing::info!(role = %role, "login succeeded");
                self.commit_login(
                    profile,
                    Notification::success("Login successful", format!("Welcome back, {title}!")),
                );
            }
            Err(rejection) => {
                tracing::info!(reason = ?rejection, "login rejected");
                self.notifier.notify(rejection.notification());
            }
        }
    }

    /// Simulated Google OAuth login. Always succeeds.
    ///
    /// Picks a random role and synthesizes a matching identity; there is
    /// no actual OAuth exchange anywhere.
    pub async fn login_with_google(&self) {
        let Some(_slot) = self.acquire_login_slot() else {
            return;
        };

        self.simulate_network().await;

        let profile = synthesize_google_profile(&mut rand::rng());
        let name = profile.name.clone();
        tracing::info!(role = %profile.role, "google sign-in succeeded");
        self.commit_login(
            profile,
            Notification::success("Google Sign-in Successful", format!("Welcome, {name}!")),
        );
    }

    /// Signs out: clears the session and the persisted record.
    ///
    /// Idempotent — logging out while anonymous is a no-op on state but
    /// still notifies and navigates, matching the original behavior.
    pub fn logout(&self) {
        *self.state() = SessionState::Anonymous;

        if let Err(err) = self.store.remove(&self.config.storage_key) {
            tracing::warn!(error = %err, "failed to clear persisted session");
        }

        tracing::info!("logged out");
        self.notifier.notify(Notification::success(
            "Logged out",
            "You have been successfully logged out.",
        ));
        self.navigator.navigate(ROOT_PATH);
    }

    // -- Password-reset side flow -----------------------------------------
    //
    // None of these touch the session. They exist so the login page can
    // walk a realistic three-step flow against the same mock-latency
    // contract as everything else.

    /// Pretends to email a reset code. Always resolves `true`.
    pub async fn request_password_reset(&self, email: &str) -> bool {
        self.simulate_network().await;

        tracing::info!(email, "password reset requested");
        self.notifier.notify(Notification::success(
            "Password Reset Requested",
            format!("If an account exists with {email}, you will receive a reset code."),
        ));
        true
    }

    /// Checks a reset code against the literal demo code.
    ///
    /// `true` only for [`DEMO_RESET_CODE`]; any other code emits a
    /// destructive notification and resolves `false`. Either way the call
    /// resolves — it never errors.
    pub async fn verify_password_reset_code(&self, email: &str, code: &str) -> bool {
        self.simulate_network().await;

        if code == DEMO_RESET_CODE {
            tracing::info!(email, "password reset code verified");
            true
        } else {
            tracing::info!(email, "password reset code rejected");
            self.notifier.notify(Notification::failure(
                "Invalid Code",
                format!("That code is not valid. For demo purposes, use code {DEMO_RESET_CODE}."),
            ));
            false
        }
    }

    /// Pretends to update the password. Always resolves `true`.
    ///
    /// Does not touch the active session: credentials live out-of-band in
    /// this mock, so an authenticated user stays signed in.
    pub async fn reset_password(&self, email: &str, _new_password: &str) -> bool {
        self.simulate_network().await;

        tracing::info!(email, "password reset completed");
        self.notifier.notify(Notification::success(
            "Password Reset Successful",
            "Your password has been updated. You can now log in with your new password.",
        ));
        true
    }

    // -- Internals ---------------------------------------------------------

    /// Locks the state. A poisoned lock still holds a consistent value
    /// (writes are single assignments), so recover it.
    fn state(&self) -> MutexGuard<'_, SessionState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// The shared suspension point of every mock operation. All side
    /// effects happen after this returns.
    async fn simulate_network(&self) {
        tokio::time::sleep(self.config.network_delay).await;
    }

    /// Claims a login slot according to the configured policy.
    ///
    /// `None` means the call should be dropped (single-flight, another
    /// login already in flight). The returned slot must stay alive across
    /// the operation's delay — it IS the guard.
    fn acquire_login_slot(&self) -> Option<LoginSlot<'_>> {
        match self.config.login_policy {
            LoginPolicy::LastWriteWins => Some(LoginSlot::Unguarded),
            LoginPolicy::SingleFlight => match self.login_guard.try_lock() {
                Ok(guard) => Some(LoginSlot::Exclusive(guard)),
                Err(_) => {
                    tracing::debug!("login already in flight, dropping request");
                    None
                }
            },
        }
    }

    /// Commits an authenticated profile: persistence, then state, then the
    /// notification and navigation effects.
    fn commit_login(&self, profile: Profile, notification: Notification) {
        if let Err(err) = self.persist_profile(&profile) {
            // The in-memory transition still commits: a broken store must
            // not lock the user out of the demo.
            tracing::warn!(error = %err, "failed to persist session");
        }

        *self.state() = SessionState::Authenticated(profile);
        self.notifier.notify(notification);
        self.navigator.navigate(ROOT_PATH);
    }

    /// Serializes the profile into the store with the configured ttl.
    fn persist_profile(&self, profile: &Profile) -> Result<(), AuthError> {
        let record = serde_json::to_string(profile).map_err(AuthError::MalformedRecord)?;
        self.store
            .set(&self.config.storage_key, &record, self.config.session_ttl)?;
        Ok(())
    }
}

/// Holds (or deliberately doesn't hold) the single-flight guard for the
/// duration of a login-family operation.
enum LoginSlot<'a> {
    /// Last-write-wins: nothing to hold.
    Unguarded,
    /// Single-flight: exclusive access until this drops.
    Exclusive(#[allow(dead_code)] tokio::sync::MutexGuard<'a, ()>),
}

/// Reads and parses the persisted record. `Ok(None)` covers both "never
/// stored" and "expired"; a record that fails to parse is an error the
/// caller downgrades to a warning.
fn restore_profile<S: SessionStore>(
    store: &S,
    storage_key: &str,
) -> Result<Option<Profile>, AuthError> {
    let Some(record) = store.get(storage_key)? else {
        return Ok(None);
    };
    let profile = serde_json::from_str(&record).map_err(AuthError::MalformedRecord)?;
    Ok(Some(profile))
}

// ---------------------------------------------------------------------------
// Credential validation
// ---------------------------------------------------------------------------

/// Why a credentials login was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LoginRejection {
    /// Email or password was empty.
    MissingCredentials,
    /// Password shorter than [`MIN_PASSWORD_LEN`] characters.
    PasswordTooShort,
}

impl LoginRejection {
    /// The destructive notification shown for this rejection.
    fn notification(self) -> Notification {
        match self {
            LoginRejection::MissingCredentials => Notification::failure(
                "Login failed",
                "Please check your credentials and try again.",
            ),
            LoginRejection::PasswordTooShort => Notification::failure(
                "Invalid Password",
                "Password must be at least 8 characters long.",
            ),
        }
    }
}

/// The only validation the mock performs: non-empty fields and a minimum
/// password length, counted in characters rather than bytes.
fn validate_credentials(email: &str, password: &str) -> Result<(), LoginRejection> {
    if email.is_empty() || password.is_empty() {
        return Err(LoginRejection::MissingCredentials);
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(LoginRejection::PasswordTooShort);
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Simulated OAuth identity
// ---------------------------------------------------------------------------

/// Builds the profile a simulated Google sign-in produces: a uniformly
/// random role and a numeric suffix shared by name, avatar, and email.
///
/// Takes the rng as a parameter so tests can seed it.
fn synthesize_google_profile<R: Rng>(rng: &mut R) -> Profile {
    let role = Role::ALL[rng.random_range(0..Role::ALL.len())];
    let id: u32 = rng.random_range(0..1000);

    Profile {
        role,
        name: format!("Google User {id}"),
        avatar: format!("https://i.pravatar.cc/150?u=google{id}"),
        email: format!("user{id}@gmail.com"),
    }
}

// =========================================================================
// Tests
// =========================================================================
