use covenant_core::{IllegalTransition, ValidationError};
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WorkspaceError {
    #[error("blueprint not found: {0}")]
    BlueprintNotFound(Uuid),

    #[error("contract not found: {0}")]
    ContractNotFound(Uuid),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Transition(#[from] IllegalTransition),
}
