//! Walks the full session lifecycle against a file-backed store.
//!
//! Run it twice: the second run rehydrates the session the first run
//! persisted (unless the walkthrough ended signed out).

use std::time::Duration;

use campusgate::{AuthConfig, AuthManager, DEMO_RESET_CODE, Navigator, Notification, Notifier};
use campusgate_identity::Role;
use campusgate_store::FileStore;

// ---------------------------------------------------------------------------
// Port implementations: toasts and navigation as log lines
// ---------------------------------------------------------------------------

struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, notification: Notification) {
        tracing::info!(variant = ?notification.variant, "toast: {notification}");
    }
}

struct LogNavigator;

impl Navigator for LogNavigator {
    fn navigate(&self, path: &str) {
        tracing::info!(path, "navigating");
    }
}

// ---------------------------------------------------------------------------
// Walkthrough
// ---------------------------------------------------------------------------

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let store_path = std::env::temp_dir().join("campusgate-demo.json");
    tracing::info!(path = %store_path.display(), "using file store");

    let config = AuthConfig {
        // Keep the walkthrough snappy; the default 2s is for realism.
        network_delay: Duration::from_millis(300),
        ..AuthConfig::default()
    };
    let manager = AuthManager::new(FileStore::new(&store_path), LogNotifier, LogNavigator, config);

    let restored = manager.snapshot();
    if restored.is_authenticated {
        tracing::info!(
            name = restored.name.as_deref().unwrap_or_default(),
            "session rehydrated from a previous run, signing out first"
        );
        manager.logout();
    }

    // A login that gets refused: password too short.
    manager.login("student@asbm.ac.in", "short", Role::Student).await;

    // The real thing.
    manager.login("student@asbm.ac.in", "password123", Role::Student).await;
    let snapshot = manager.snapshot();
    tracing::info!(
        role = ?snapshot.role,
        name = snapshot.name.as_deref().unwrap_or_default(),
        "signed in"
    );

    // The password-reset side flow; the session stays signed in throughout.
    manager.request_password_reset("student@asbm.ac.in").await;
    let verified = manager
        .verify_password_reset_code("student@asbm.ac.in", DEMO_RESET_CODE)
        .await;
    tracing::info!(verified, "reset code checked");
    manager.reset_password("student@asbm.ac.in", "password456").await;

    manager.logout();

    // And the one-click path: a synthesized Google identity.
    manager.login_with_google().await;
    let snapshot = manager.snapshot();
    tracing::info!(
        role = ?snapshot.role,
        email = snapshot.email.as_deref().unwrap_or_default(),
        "signed in via google; run again to see this session rehydrate"
    );
}
