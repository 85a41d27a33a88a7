use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    Admin,
    User,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SessionStatus {
    Loading,
    Authenticated,
    Unauthenticated,
}

/// What the session layer currently knows about the principal.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Session {
    pub status: SessionStatus,
    pub role: Option<Role>,
}

impl Session {
    pub const fn loading() -> Self {
        Self {
            status: SessionStatus::Loading,
            role: None,
        }
    }

    pub const fn anonymous() -> Self {
        Self {
            status: SessionStatus::Unauthenticated,
            role: None,
        }
    }

    pub const fn authenticated(role: Role) -> Self {
        Self {
            status: SessionStatus::Authenticated,
            role: Some(role),
        }
    }

    pub fn is_loading(&self) -> bool {
        self.status == SessionStatus::Loading
    }

    /// Only an authenticated administrator counts, whatever `role` says otherwise.
    pub fn is_admin(&self) -> bool {
        self.status == SessionStatus::Authenticated && self.role == Some(Role::Admin)
    }
}
