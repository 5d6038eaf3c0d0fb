pub mod blueprint;
pub mod environment;
pub mod error;
pub mod lifecycle;
pub mod models;
pub mod render;

pub use blueprint::validate_for_save;
pub use environment::{Clock, FixedClock, IdGenerator, RandomIds, SequentialIds, SystemClock};
pub use error::{IllegalTransition, UnknownStatus, ValidationError};
pub use lifecycle::{TRANSITION_TABLE, available_transitions, can_transition, instantiate, transition};
pub use models::{
    Blueprint, Contract, ContractStatus, FieldDeclaration, FieldType, FieldValue, SignatureRef,
};
pub use render::{NOT_PROVIDED, render_field_value, status_action_label, terminal_notice};
