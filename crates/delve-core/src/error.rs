//! Error types for the item engine
//!
//! None of these reach the player. They are either contract violations
//! caught by tests and assertions, or negative answers the caller checks.

use thiserror::Error;

use crate::object::{ItemCategory, ItemId, TemplateId};

/// Failures of item lookup and lifecycle operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ItemError {
    #[error("template {0} is outside the loaded catalog")]
    NotFound(TemplateId),

    #[error("cannot create an item from unknown template {0}")]
    UnknownTemplate(TemplateId),

    #[error("items {left} and {right} cannot share a stack")]
    Incompatible { left: ItemId, right: ItemId },

    #[error("cannot split {requested} from a stack of {available}")]
    InsufficientQuantity { requested: u16, available: u16 },

    #[error("an item quantity must be at least one")]
    ZeroQuantity,

    #[error("a stack of {total} would exceed the stack limit")]
    StackFull { total: u32 },
}

/// Failures while loading the object catalog
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("object catalog is empty")]
    Empty,

    #[error("object catalog has {0} entries, more than template ids can address")]
    TooManyTemplates(usize),

    #[error(
        "{category} stack code {stack_code} names both '{first}' and '{second}'"
    )]
    ConflictingStackCode {
        category: ItemCategory,
        stack_code: u8,
        first: &'static str,
        second: &'static str,
    },
}
