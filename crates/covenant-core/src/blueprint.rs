use uuid::Uuid;

use crate::environment::IdGenerator;
use crate::error::ValidationError;
use crate::models::{Blueprint, FieldDeclaration, FieldType};

impl Blueprint {
    /// Starts an empty draft. Drafts are not checked until they are saved.
    pub fn new(name: impl Into<String>, ids: &dyn IdGenerator) -> Self {
        Self {
            id: ids.next_id(),
            name: name.into(),
            fields: Vec::new(),
        }
    }

    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn field(&self, field_id: Uuid) -> Option<&FieldDeclaration> {
        self.fields.iter().find(|field| field.id == field_id)
    }

    /// Appends a field with the default label for its type.
    pub fn create_field(&mut self, field_type: FieldType, ids: &dyn IdGenerator) -> FieldDeclaration {
        let field = FieldDeclaration {
            id: ids.next_id(),
            field_type,
            label: field_type.default_label(),
            position: self.fields.len(),
        };
        self.fields.push(field.clone());
        field
    }

    /// Unknown ids are ignored.
    pub fn update_field_label(&mut self, field_id: Uuid, label: impl Into<String>) {
        if let Some(field) = self.fields.iter_mut().find(|field| field.id == field_id) {
            field.label = label.into();
        }
    }

    /// Unknown ids are ignored. Positions of the remaining fields are
    /// renumbered so they stay equal to their index.
    pub fn remove_field(&mut self, field_id: Uuid) {
        let before = self.fields.len();
        self.fields.retain(|field| field.id != field_id);
        if self.fields.len() == before {
            return;
        }

        for (index, field) in self.fields.iter_mut().enumerate() {
            field.position = index;
        }
    }

    pub fn validate_for_save(&self) -> Result<(), ValidationError> {
        validate_for_save(self)
    }
}

pub fn validate_for_save(blueprint: &Blueprint) -> Result<(), ValidationError> {
    if blueprint.name.trim().is_empty() {
        return Err(ValidationError::EmptyName);
    }
    if blueprint.fields.is_empty() {
        return Err(ValidationError::NoFields);
    }
    Ok(())
}
