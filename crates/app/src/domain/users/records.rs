//! User Records

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

use crate::{
    domain::{
        lifecycle::{Resource, ResourceOption},
        users::data::{NewUser, UserUpdate},
    },
    uuids::TypedUuid,
};

/// User UUID
pub type UserUuid = TypedUuid<UserRecord>;

/// User dropdown option, labelled by e-mail.
pub type UserOption = ResourceOption<UserRecord>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Role {
    Admin,
    FleetManager,
    Mechanic,
    Driver,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Department {
    Administration,
    Operations,
    Maintenance,
}

/// User Record
///
/// The token digest stays in the `users` table and is never loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct UserRecord {
    pub uuid: UserUuid,
    pub email: String,
    pub name: String,
    pub role: Role,
    pub department: Department,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Resource for UserRecord {
    const NAME: &'static str = "user";
    const KEY_FIELD: Option<&'static str> = Some("email");

    type New = NewUser;
    type Patch = UserUpdate;

    fn uuid(&self) -> UserUuid {
        self.uuid
    }

    fn is_active(&self) -> bool {
        self.is_active
    }

    fn natural_key(&self) -> Option<&str> {
        Some(&self.email)
    }

    fn new_key(new: &NewUser) -> Option<&str> {
        Some(&new.email)
    }

    fn patch_key(patch: &UserUpdate) -> Option<&str> {
        patch.email.as_deref()
    }

    fn patch_activation(patch: &UserUpdate) -> Option<bool> {
        patch.is_active
    }

    fn deactivation() -> UserUpdate {
        UserUpdate {
            is_active: Some(false),
            ..UserUpdate::default()
        }
    }
}
