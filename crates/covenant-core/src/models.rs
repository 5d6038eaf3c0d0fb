use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{UnknownStatus, ValidationError};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum FieldType {
    Text,
    Date,
    Signature,
    Checkbox,
}

impl FieldType {
    pub const ALL: [FieldType; 4] = [
        FieldType::Text,
        FieldType::Date,
        FieldType::Signature,
        FieldType::Checkbox,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::Text => "Text",
            FieldType::Date => "Date",
            FieldType::Signature => "Signature",
            FieldType::Checkbox => "Checkbox",
        }
    }

    /// Label given to a freshly created field, e.g. "Text Field".
    pub fn default_label(&self) -> String {
        format!("{} Field", self.as_str())
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FieldDeclaration {
    pub id: Uuid,
    pub field_type: FieldType,
    pub label: String,
    pub position: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Blueprint {
    pub id: Uuid,
    pub name: String,
    pub fields: Vec<FieldDeclaration>,
}

/// Uploaded signature file. The core never looks inside `content`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SignatureRef {
    pub file_name: String,
    pub content: Vec<u8>,
}

impl SignatureRef {
    pub fn new(file_name: impl Into<String>, content: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            content,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "value")]
pub enum FieldValue {
    Text(String),
    Date(Option<NaiveDate>),
    Signature(Option<SignatureRef>),
    Checkbox(bool),
}

impl FieldValue {
    /// Value recorded for a field the caller left unfilled.
    pub fn absent(field_type: FieldType) -> Self {
        match field_type {
            FieldType::Text => FieldValue::Text(String::new()),
            FieldType::Date => FieldValue::Date(None),
            FieldType::Signature => FieldValue::Signature(None),
            FieldType::Checkbox => FieldValue::Checkbox(false),
        }
    }

    pub fn text(value: impl Into<String>) -> Self {
        FieldValue::Text(value.into())
    }

    /// Parses an ISO calendar date. A blank input means the date was left empty.
    pub fn date_from_iso(value: &str) -> Result<Self, ValidationError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Ok(FieldValue::Date(None));
        }

        NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
            .map(|date| FieldValue::Date(Some(date)))
            .map_err(|_| ValidationError::InvalidDate {
                value: value.to_string(),
            })
    }

    pub fn field_type(&self) -> FieldType {
        match self {
            FieldValue::Text(_) => FieldType::Text,
            FieldValue::Date(_) => FieldType::Date,
            FieldValue::Signature(_) => FieldType::Signature,
            FieldValue::Checkbox(_) => FieldType::Checkbox,
        }
    }

    pub fn is_provided(&self) -> bool {
        match self {
            FieldValue::Text(text) => !text.is_empty(),
            FieldValue::Date(date) => date.is_some(),
            FieldValue::Signature(file) => file.is_some(),
            FieldValue::Checkbox(_) => true,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ContractStatus {
    Created,
    Approved,
    Sent,
    Signed,
    Locked,
    Revoked,
}

impl ContractStatus {
    pub const ALL: [ContractStatus; 6] = [
        ContractStatus::Created,
        ContractStatus::Approved,
        ContractStatus::Sent,
        ContractStatus::Signed,
        ContractStatus::Locked,
        ContractStatus::Revoked,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContractStatus::Created => "Created",
            ContractStatus::Approved => "Approved",
            ContractStatus::Sent => "Sent",
            ContractStatus::Signed => "Signed",
            ContractStatus::Locked => "Locked",
            ContractStatus::Revoked => "Revoked",
        }
    }

    pub fn is_terminal(&self) -> bool {
        crate::lifecycle::available_transitions(*self).is_empty()
    }
}

impl fmt::Display for ContractStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContractStatus {
    type Err = UnknownStatus;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim();
        ContractStatus::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(normalized))
            .ok_or_else(|| UnknownStatus(value.to_string()))
    }
}

/// A blueprint instantiation. Owns a snapshot of the blueprint's fields and
/// keeps only the blueprint id and name as a back-reference.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Contract {
    pub id: Uuid,
    pub name: String,
    pub blueprint_id: Uuid,
    pub blueprint_name: String,
    pub status: ContractStatus,
    pub created_at: DateTime<Utc>,
    pub fields: Vec<FieldDeclaration>,
    pub field_values: BTreeMap<Uuid, FieldValue>,
}

impl Contract {
    pub fn value(&self, field_id: Uuid) -> Option<&FieldValue> {
        self.field_values.get(&field_id)
    }

    /// Fields in blueprint order, each paired with its bound value.
    pub fn bound_fields(&self) -> impl Iterator<Item = (&FieldDeclaration, Option<&FieldValue>)> {
        self.fields
            .iter()
            .map(|field| (field, self.field_values.get(&field.id)))
    }
}
