//! Authenticated principals.

use crate::domain::users::records::{Department, Role, UserRecord, UserUuid};

/// The user a request acts on behalf of.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Principal {
    pub uuid: UserUuid,
    pub role: Role,
    pub department: Department,
}

impl From<&UserRecord> for Principal {
    fn from(user: &UserRecord) -> Self {
        Self {
            uuid: user.uuid,
            role: user.role,
            department: user.department,
        }
    }
}
