//! Role and department based access policy.

use std::fmt;

use crate::{
    auth::Principal,
    domain::users::records::{Department, Role},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    RentalCompanies,
    Cars,
    Parts,
    MaintenanceRequests,
    CarRequests,
    Users,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Read,
    Create,
    Update,
    Delete,
}

impl Action {
    const fn is_read(self) -> bool {
        matches!(self, Self::Read)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Read => "read",
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
        })
    }
}

/// What a request wants to do, and to which kind of resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ResourceScope {
    pub resource: ResourceKind,
    pub action: Action,
}

impl ResourceScope {
    #[must_use]
    pub const fn new(resource: ResourceKind, action: Action) -> Self {
        Self { resource, action }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    Allow,
    Deny { reason: &'static str },
}

impl Decision {
    #[must_use]
    pub const fn is_allowed(&self) -> bool {
        matches!(self, Self::Allow)
    }
}

/// Decide whether `principal` may perform `scope`.
#[must_use]
pub fn authorize(principal: &Principal, scope: ResourceScope) -> Decision {
    use Action::{Create, Update};
    use ResourceKind::{CarRequests, Cars, MaintenanceRequests, Parts, RentalCompanies, Users};

    let ResourceScope { resource, action } = scope;

    match principal.role {
        Role::Admin => Decision::Allow,

        Role::FleetManager => match resource {
            _ if action.is_read() => Decision::Allow,
            Cars | MaintenanceRequests | CarRequests => Decision::Allow,
            RentalCompanies => require_department(principal, Department::Administration),
            Parts => require_department(principal, Department::Maintenance),
            Users => Decision::Deny {
                reason: "fleet managers cannot change users",
            },
        },

        Role::Mechanic => match (resource, action) {
            (Users, _) => Decision::Deny {
                reason: "mechanics cannot access users",
            },
            (_, Action::Read) => Decision::Allow,
            (MaintenanceRequests, Create | Update) => Decision::Allow,
            (Parts, Create | Update) => require_department(principal, Department::Maintenance),
            _ => Decision::Deny {
                reason: "mechanics cannot perform this action",
            },
        },

        Role::Driver => match (resource, action) {
            (Cars | MaintenanceRequests | CarRequests, Action::Read)
            | (MaintenanceRequests | CarRequests, Create) => Decision::Allow,
            _ => Decision::Deny {
                reason: "drivers cannot perform this action",
            },
        },
    }
}

fn require_department(principal: &Principal, department: Department) -> Decision {
    if principal.department == department {
        return Decision::Allow;
    }

    Decision::Deny {
        reason: match department {
            Department::Administration => "only the administration department may do this",
            Department::Operations => "only the operations department may do this",
            Department::Maintenance => "only the maintenance department may do this",
        },
    }
}
