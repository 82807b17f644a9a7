//! Outbound ports: the collaborators the session manager drives.
//!
//! The manager never talks to a toast widget or a router directly — it
//! talks to these two traits. Production wires them to the real UI
//! services; tests wire them to recording fakes. Same pattern as
//! swapping authenticators behind a trait seam: the framework code never
//! changes.

use std::fmt;
use std::sync::Arc;

// ---------------------------------------------------------------------------
// Notification
// ---------------------------------------------------------------------------

/// A user-facing toast message.
///
/// Every transition operation emits exactly one of these describing its
/// outcome (success or failure); the presentation layer decides what a
/// "destructive" toast looks like.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub variant: NotificationVariant,
}

impl Notification {
    /// A normal (success) notification.
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: NotificationVariant::Default,
        }
    }

    /// A destructive (failure) notification.
    pub fn failure(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: NotificationVariant::Destructive,
        }
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.title, self.description)
    }
}

/// Visual style of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationVariant {
    /// The ordinary toast style.
    Default,
    /// The red "something went wrong" style.
    Destructive,
}

// ---------------------------------------------------------------------------
// Ports
// ---------------------------------------------------------------------------

/// Presents notifications to the user.
pub trait Notifier: Send + Sync + 'static {
    fn notify(&self, notification: Notification);
}

/// Redirects the active view to a path.
pub trait Navigator: Send + Sync + 'static {
    fn navigate(&self, path: &str);
}

/// Shared handles to ports are themselves ports, so tests can keep a
/// reference to a recording fake after handing it to the manager.
impl<N: Notifier> Notifier for Arc<N> {
    fn notify(&self, notification: Notification) {
        (**self).notify(notification);
    }
}

impl<V: Navigator> Navigator for Arc<V> {
    fn navigate(&self, path: &str) {
        (**self).navigate(path);
    }
}
