//! Signed-in role and its persisted flag

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::StoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Staff,
    Admin,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Student, Role::Staff, Role::Admin];

    /// Value written under the role storage key
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Staff => "staff",
            Role::Admin => "admin",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Role::Student => "Student",
            Role::Staff => "Staff",
            Role::Admin => "Admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "student" => Ok(Role::Student),
            "staff" => Ok(Role::Staff),
            "admin" => Ok(Role::Admin),
            other => Err(StoreError::InvalidRole(other.to_string())),
        }
    }
}

/// Where the role flag lives between runs (a file, browser storage, memory)
pub trait RoleStore {
    fn load(&self) -> Result<Option<Role>, StoreError>;

    fn save(&mut self, role: Role) -> Result<(), StoreError>;

    fn clear(&mut self) -> Result<(), StoreError>;
}

/// Non-persistent store, used by tests and as a fallback
#[derive(Debug, Clone, Default)]
pub struct MemoryRoleStore {
    role: Option<Role>,
}

impl MemoryRoleStore {
    pub fn new(role: Option<Role>) -> Self {
        Self { role }
    }
}

impl RoleStore for MemoryRoleStore {
    fn load(&self) -> Result<Option<Role>, StoreError> {
        Ok(self.role)
    }

    fn save(&mut self, role: Role) -> Result<(), StoreError> {
        self.role = Some(role);
        Ok(())
    }

    fn clear(&mut self) -> Result<(), StoreError> {
        self.role = None;
        Ok(())
    }
}

/// The authenticated session handed to the portal.
///
/// Store failures are logged and never block sign-in: the in-memory role
/// stays authoritative for the lifetime of the session.
pub struct Session {
    role: Option<Role>,
    store: Box<dyn RoleStore>,
}

impl Session {
    /// Restore the session from the persisted role flag
    pub fn init(store: Box<dyn RoleStore>) -> Self {
        let role = match store.load() {
            Ok(role) => role,
            Err(e) => {
                tracing::warn!(error = %e, "ignoring unreadable role flag");
                None
            }
        };
        if let Some(role) = role {
            tracing::info!(%role, "restored session");
        }
        Self { role, store }
    }

    pub fn role(&self) -> Option<Role> {
        self.role
    }

    pub fn is_authenticated(&self) -> bool {
        self.role.is_some()
    }

    pub fn login(&mut self, role: Role) {
        self.role = Some(role);
        if let Err(e) = self.store.save(role) {
            tracing::warn!(error = %e, "failed to persist role flag");
        }
        tracing::info!(%role, "logged in");
    }

    pub fn logout(&mut self) {
        self.role = None;
        if let Err(e) = self.store.clear() {
            tracing::warn!(error = %e, "failed to clear role flag");
        }
        tracing::info!("logged out");
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session").field("role", &self.role).finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Store whose contents stay observable after being boxed into a session
    #[derive(Clone, Default)]
    struct SharedStore(Rc<RefCell<Option<Role>>>);

    impl RoleStore for SharedStore {
        fn load(&self) -> Result<Option<Role>, StoreError> {
            Ok(*self.0.borrow())
        }

        fn save(&mut self, role: Role) -> Result<(), StoreError> {
            *self.0.borrow_mut() = Some(role);
            Ok(())
        }

        fn clear(&mut self) -> Result<(), StoreError> {
            *self.0.borrow_mut() = None;
            Ok(())
        }
    }

    struct BrokenStore;

    impl RoleStore for BrokenStore {
        fn load(&self) -> Result<Option<Role>, StoreError> {
            Err(StoreError::Unavailable("no storage".to_string()))
        }

        fn save(&mut self, _role: Role) -> Result<(), StoreError> {
            Err(StoreError::Unavailable("no storage".to_string()))
        }

        fn clear(&mut self) -> Result<(), StoreError> {
            Err(StoreError::Unavailable("no storage".to_string()))
        }
    }

    #[test]
    fn test_role_round_trips_through_str() {
        for role in Role::ALL {
            assert_eq!(role.as_str().parse::<Role>().ok(), Some(role));
        }
        assert!("principal".parse::<Role>().is_err());
    }

    #[test]
    fn test_init_reads_persisted_flag() {
        let session = Session::init(Box::new(MemoryRoleStore::new(Some(Role::Staff))));
        assert_eq!(session.role(), Some(Role::Staff));
        assert!(session.is_authenticated());
    }

    #[test]
    fn test_login_persists_and_logout_clears() {
        let store = SharedStore::default();
        let mut session = Session::init(Box::new(store.clone()));
        assert!(!session.is_authenticated());

        session.login(Role::Admin);
        assert_eq!(*store.0.borrow(), Some(Role::Admin));

        session.logout();
        assert_eq!(*store.0.borrow(), None);
        assert_eq!(session.role(), None);
    }

    #[test]
    fn test_broken_store_is_not_fatal() {
        let mut session = Session::init(Box::new(BrokenStore));
        assert!(!session.is_authenticated());
        session.login(Role::Student);
        assert_eq!(session.role(), Some(Role::Student));
        session.logout();
        assert!(!session.is_authenticated());
    }
}
