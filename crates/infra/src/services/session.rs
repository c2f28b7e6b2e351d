use practice_alarm_domain::{NotificationPermission, Session};
use std::sync::RwLock;

/// Holds the session of the signed in `User`, if any
#[async_trait::async_trait]
pub trait ISessionStore: Send + Sync {
    async fn current(&self) -> Option<Session>;
    async fn set(&self, session: Session);
    /// Removes and returns the current session
    async fn clear(&self) -> Option<Session>;
}

#[derive(Default)]
pub struct InMemorySessionStore {
    session: RwLock<Option<Session>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl ISessionStore for InMemorySessionStore {
    async fn current(&self) -> Option<Session> {
        self.session.read().unwrap().clone()
    }

    async fn set(&self, session: Session) {
        *self.session.write().unwrap() = Some(session);
    }

    async fn clear(&self) -> Option<Session> {
        self.session.write().unwrap().take()
    }
}

/// Notification permission as answered by the user
pub trait INotificationPermission: Send + Sync {
    fn permission(&self) -> NotificationPermission;
    fn set_permission(&self, permission: NotificationPermission);
}

pub struct InMemoryNotificationPermission {
    permission: RwLock<NotificationPermission>,
}

impl InMemoryNotificationPermission {
    pub fn new(permission: NotificationPermission) -> Self {
        Self {
            permission: RwLock::new(permission),
        }
    }
}

impl INotificationPermission for InMemoryNotificationPermission {
    fn permission(&self) -> NotificationPermission {
        *self.permission.read().unwrap()
    }

    fn set_permission(&self, permission: NotificationPermission) {
        *self.permission.write().unwrap() = permission;
    }
}
