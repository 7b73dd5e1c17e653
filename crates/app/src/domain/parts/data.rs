//! Part Data

use validator::Validate;

use crate::validation::not_blank;

/// New Part Data
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct NewPart {
    #[validate(
        length(max = 50, message = "must be at most 50 characters"),
        custom(function = "not_blank")
    )]
    pub part_number: String,

    #[validate(
        length(max = 100, message = "must be at most 100 characters"),
        custom(function = "not_blank")
    )]
    pub name: String,

    pub quantity: u32,

    /// Price in minor currency units.
    #[validate(range(max = 9_223_372_036_854_775_807_u64, message = "is too large"))]
    pub unit_price: u64,

    pub is_active: bool,
}

/// Part Update Data
#[derive(Debug, Clone, Default, PartialEq, Eq, Validate)]
pub struct PartUpdate {
    #[validate(
        length(max = 50, message = "must be at most 50 characters"),
        custom(function = "not_blank")
    )]
    pub part_number: Option<String>,

    #[validate(
        length(max = 100, message = "must be at most 100 characters"),
        custom(function = "not_blank")
    )]
    pub name: Option<String>,

    pub quantity: Option<u32>,

    #[validate(range(max = 9_223_372_036_854_775_807_u64, message = "is too large"))]
    pub unit_price: Option<u64>,

    pub is_active: Option<bool>,
}
