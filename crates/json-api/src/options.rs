//! Dropdown option responses.

use fleet_app::domain::lifecycle::ResourceOption;
use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A selectable `(uuid, label)` pair.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OptionResponse {
    pub uuid: Uuid,
    pub label: String,
}

impl<R> From<ResourceOption<R>> for OptionResponse {
    fn from(option: ResourceOption<R>) -> Self {
        OptionResponse {
            uuid: option.uuid.into(),
            label: option.label,
        }
    }
}

/// Active records of one resource, ordered by label.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OptionsResponse {
    pub options: Vec<OptionResponse>,
}

impl<R> FromIterator<ResourceOption<R>> for OptionsResponse {
    fn from_iter<I: IntoIterator<Item = ResourceOption<R>>>(iter: I) -> Self {
        OptionsResponse {
            options: iter.into_iter().map(Into::into).collect(),
        }
    }
}
