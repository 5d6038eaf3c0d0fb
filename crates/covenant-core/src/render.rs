use crate::models::{ContractStatus, FieldDeclaration, FieldType, FieldValue};

pub const NOT_PROVIDED: &str = "(Not provided)";

/// Display text for a bound value. A missing value, or one whose shape does
/// not match the field, renders as the field's empty text.
pub fn render_field_value(field: &FieldDeclaration, value: Option<&FieldValue>) -> String {
    let value = value.filter(|value| value.field_type() == field.field_type);

    match (field.field_type, value) {
        (FieldType::Checkbox, Some(FieldValue::Checkbox(true))) => "Checked".to_string(),
        (FieldType::Checkbox, _) => "Unchecked".to_string(),
        (_, Some(FieldValue::Signature(Some(file)))) => file.file_name.clone(),
        (_, Some(FieldValue::Text(text))) if !text.is_empty() => text.clone(),
        (_, Some(FieldValue::Date(Some(date)))) => date.format("%Y-%m-%d").to_string(),
        _ => NOT_PROVIDED.to_string(),
    }
}

/// Button text offered for moving a contract into `status`.
pub fn status_action_label(status: ContractStatus) -> String {
    match status {
        ContractStatus::Revoked => "Revoke Contract".to_string(),
        other => format!("Mark as {other}"),
    }
}

pub fn terminal_notice(status: ContractStatus) -> Option<&'static str> {
    match status {
        ContractStatus::Locked => Some("This contract is locked and cannot be edited"),
        ContractStatus::Revoked => {
            Some("This contract has been revoked and cannot proceed further")
        }
        _ => None,
    }
}
