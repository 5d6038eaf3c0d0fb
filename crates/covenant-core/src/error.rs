use thiserror::Error;
use uuid::Uuid;

use crate::models::{ContractStatus, FieldType};

/// Rejections raised while saving a blueprint or binding values into a contract.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("name is required")]
    EmptyName,

    #[error("add at least one field")]
    NoFields,

    /// A value was supplied for a field with the wrong shape.
    #[error("field {field_id} expects a {expected} value")]
    ValueTypeMismatch { field_id: Uuid, expected: FieldType },

    #[error("date must be YYYY-MM-DD, got {value:?}")]
    InvalidDate { value: String },
}

/// A status change that the transition table does not allow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("cannot move contract from {from} to {to}")]
pub struct IllegalTransition {
    pub from: ContractStatus,
    pub to: ContractStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown contract status {0:?}")]
pub struct UnknownStatus(pub String);
