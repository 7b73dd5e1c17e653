//! User Handlers
//!
//! Users are created through the admin CLI, which is the only place a bearer
//! token is ever shown.

pub(crate) mod delete;
pub(crate) mod get;
pub(crate) mod index;
pub(crate) mod options;
pub(crate) mod update;

#[cfg(test)]
mod tests {
    use jiff::Timestamp;

    use fleet_app::domain::users::records::{Department, Role, UserRecord, UserUuid};

    pub(super) fn make_user(uuid: UserUuid, email: &str) -> UserRecord {
        UserRecord {
            uuid,
            email: email.to_string(),
            name: "Dana".to_string(),
            role: Role::Driver,
            department: Department::Operations,
            is_active: true,
            created_at: Timestamp::UNIX_EPOCH,
            updated_at: Timestamp::UNIX_EPOCH,
        }
    }
}
