//! Contract instantiation and the status workflow.
//!
//! Every status change goes through [`TRANSITION_TABLE`]. `Locked` and
//! `Revoked` have no outgoing edges; every other status can reach `Revoked`.

use std::collections::BTreeMap;

use uuid::Uuid;

use crate::environment::{Clock, IdGenerator};
use crate::error::{IllegalTransition, ValidationError};
use crate::models::{Blueprint, Contract, ContractStatus, FieldValue};

use crate::models::ContractStatus::{Approved, Created, Locked, Revoked, Sent, Signed};

pub const TRANSITION_TABLE: [(ContractStatus, &[ContractStatus]); 6] = [
    (Created, &[Approved, Revoked]),
    (Approved, &[Sent, Revoked]),
    (Sent, &[Signed, Revoked]),
    (Signed, &[Locked, Revoked]),
    (Locked, &[]),
    (Revoked, &[]),
];

/// Statuses reachable from `status` in one step, forward step first.
pub fn available_transitions(status: ContractStatus) -> &'static [ContractStatus] {
    TRANSITION_TABLE
        .iter()
        .find(|(from, _)| *from == status)
        .map(|(_, next)| *next)
        .unwrap_or(&[])
}

pub fn can_transition(from: ContractStatus, to: ContractStatus) -> bool {
    available_transitions(from).contains(&to)
}

/// Binds `values` to a snapshot of the blueprint's fields.
///
/// Fields without a value get [`FieldValue::absent`]. Values keyed by ids the
/// blueprint does not declare are dropped. Missing values never fail: with
/// well-typed values only a blank `name` is rejected. The one other failure,
/// [`ValidationError::ValueTypeMismatch`], needs a supplied value whose
/// variant does not match its field's type.
pub fn instantiate(
    blueprint: &Blueprint,
    name: &str,
    mut values: BTreeMap<Uuid, FieldValue>,
    ids: &dyn IdGenerator,
    clock: &dyn Clock,
) -> Result<Contract, ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::EmptyName);
    }

    let mut field_values = BTreeMap::new();
    for field in &blueprint.fields {
        let value = match values.remove(&field.id) {
            Some(value) if value.field_type() != field.field_type => {
                return Err(ValidationError::ValueTypeMismatch {
                    field_id: field.id,
                    expected: field.field_type,
                });
            }
            Some(value) => value,
            None => FieldValue::absent(field.field_type),
        };
        field_values.insert(field.id, value);
    }

    Ok(Contract {
        id: ids.next_id(),
        name: name.to_string(),
        blueprint_id: blueprint.id,
        blueprint_name: blueprint.name.clone(),
        status: Created,
        created_at: clock.now(),
        fields: blueprint.fields.clone(),
        field_values,
    })
}

/// Returns a copy of `contract` in status `target`. The input is never touched.
pub fn transition(
    contract: &Contract,
    target: ContractStatus,
) -> Result<Contract, IllegalTransition> {
    if !can_transition(contract.status, target) {
        return Err(IllegalTransition {
            from: contract.status,
            to: target,
        });
    }

    Ok(Contract {
        status: target,
        ..contract.clone()
    })
}

impl Contract {
    pub fn available_transitions(&self) -> &'static [ContractStatus] {
        available_transitions(self.status)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::environment::{FixedClock, SequentialIds};
    use crate::models::{FieldType, SignatureRef};

    fn nda(ids: &SequentialIds) -> (Blueprint, Uuid) {
        let mut blueprint = Blueprint::new("NDA", ids);
        let party = blueprint.create_field(FieldType::Text, ids);
        blueprint.update_field_label(party.id, "Party");
        (blueprint, party.id)
    }

    fn clock() -> FixedClock {
        FixedClock(Utc.with_ymd_and_hms(2025, 3, 14, 9, 30, 0).unwrap())
    }

    fn contract_in(status: ContractStatus) -> Contract {
        let ids = SequentialIds::default();
        let (blueprint, _) = nda(&ids);
        let contract = instantiate(&blueprint, "Acme NDA", BTreeMap::new(), &ids, &clock()).unwrap();
        Contract { status, ..contract }
    }

    #[test]
    fn table_covers_every_status_once() {
        for status in ContractStatus::ALL {
            let rows = TRANSITION_TABLE.iter().filter(|(from, _)| *from == status).count();
            assert_eq!(rows, 1, "{status} should have exactly one row");
        }
    }

    #[test]
    fn terminal_statuses_have_no_exits() {
        assert!(available_transitions(Locked).is_empty());
        assert!(available_transitions(Revoked).is_empty());
        assert!(Locked.is_terminal());
        assert!(Revoked.is_terminal());
        assert!(!Signed.is_terminal());
    }

    #[test]
    fn instantiate_fills_missing_values_with_defaults() {
        let ids = SequentialIds::default();
        let (blueprint, party) = nda(&ids);

        let contract = instantiate(&blueprint, "Acme NDA", BTreeMap::new(), &ids, &clock()).unwrap();

        assert_eq!(contract.status, Created);
        assert_eq!(contract.name, "Acme NDA");
        assert_eq!(contract.blueprint_id, blueprint.id);
        assert_eq!(contract.blueprint_name, "NDA");
        assert_eq!(contract.created_at, clock().0);
        assert_eq!(contract.value(party), Some(&FieldValue::text("")));
        assert_eq!(contract.fields, blueprint.fields);
    }

    #[test]
    fn instantiate_rejects_blank_name() {
        let ids = SequentialIds::default();
        let (blueprint, _) = nda(&ids);

        let err = instantiate(&blueprint, " \t", BTreeMap::new(), &ids, &clock()).unwrap_err();
        assert_eq!(err, ValidationError::EmptyName);
    }

    #[test]
    fn instantiate_binds_each_type_and_drops_unknown_keys() {
        let ids = SequentialIds::default();
        let mut blueprint = Blueprint::new("Lease", &ids);
        let start = blueprint.create_field(FieldType::Date, &ids);
        let signature = blueprint.create_field(FieldType::Signature, &ids);
        let agreed = blueprint.create_field(FieldType::Checkbox, &ids);

        let file = SignatureRef::new("tenant.png", vec![0x89, 0x50]);
        let values = BTreeMap::from([
            (start.id, FieldValue::date_from_iso("2025-06-01").unwrap()),
            (signature.id, FieldValue::Signature(Some(file.clone()))),
            (Uuid::nil(), FieldValue::text("stray")),
        ]);

        let contract = instantiate(&blueprint, "Flat 4B", values, &ids, &clock()).unwrap();

        assert_eq!(contract.field_values.len(), 3);
        assert!(!contract.field_values.contains_key(&Uuid::nil()));
        assert_eq!(contract.value(signature.id), Some(&FieldValue::Signature(Some(file))));
        assert_eq!(contract.value(agreed.id), Some(&FieldValue::Checkbox(false)));
    }

    #[test]
    fn well_typed_values_only_fail_on_blank_name() {
        let ids = SequentialIds::default();
        let mut blueprint = Blueprint::new("Everything", &ids);
        let values: BTreeMap<Uuid, FieldValue> = FieldType::ALL
            .into_iter()
            .map(|field_type| {
                let field = blueprint.create_field(field_type, &ids);
                (field.id, FieldValue::absent(field_type))
            })
            .collect();

        assert!(instantiate(&blueprint, "Filled", values.clone(), &ids, &clock()).is_ok());
        assert_eq!(
            instantiate(&blueprint, "", values, &ids, &clock()),
            Err(ValidationError::EmptyName)
        );
    }

    #[test]
    fn instantiate_rejects_value_of_wrong_shape() {
        let ids = SequentialIds::default();
        let (blueprint, party) = nda(&ids);
        let values = BTreeMap::from([(party, FieldValue::Checkbox(true))]);

        let err = instantiate(&blueprint, "Acme NDA", values, &ids, &clock()).unwrap_err();
        assert_eq!(
            err,
            ValidationError::ValueTypeMismatch {
                field_id: party,
                expected: FieldType::Text,
            }
        );
    }

    #[test]
    fn contract_keeps_its_snapshot_after_blueprint_edits() {
        let ids = SequentialIds::default();
        let (mut blueprint, party) = nda(&ids);
        let contract = instantiate(&blueprint, "Acme NDA", BTreeMap::new(), &ids, &clock()).unwrap();

        blueprint.update_field_label(party, "Counterparty");
        blueprint.create_field(FieldType::Checkbox, &ids);
        blueprint.rename("Mutual NDA");

        assert_eq!(contract.fields.len(), 1);
        assert_eq!(contract.fields[0].label, "Party");
        assert_eq!(contract.blueprint_name, "NDA");
    }

    #[test]
    fn skipping_a_step_is_illegal() {
        let contract = contract_in(Created);

        let err = transition(&contract, Signed).unwrap_err();
        assert_eq!(err, IllegalTransition { from: Created, to: Signed });
        assert_eq!(contract.status, Created);

        let approved = transition(&contract, Approved).unwrap();
        assert_eq!(approved.status, Approved);
        assert_eq!(Contract { status: Created, ..approved }, contract);
    }

    #[test]
    fn locked_contract_cannot_be_revoked() {
        let contract = contract_in(Locked);
        assert_eq!(
            transition(&contract, Revoked),
            Err(IllegalTransition { from: Locked, to: Revoked })
        );
    }

    #[test]
    fn repeated_illegal_requests_yield_the_same_error() {
        let contract = contract_in(Sent);
        let first = transition(&contract, Approved);
        let second = transition(&contract, Approved);
        assert_eq!(first, second);
        assert!(first.is_err());
    }

    #[test]
    fn full_forward_path_reaches_locked() {
        let mut contract = contract_in(Created);
        for next in [Approved, Sent, Signed, Locked] {
            contract = transition(&contract, next).unwrap();
        }
        assert_eq!(contract.status, Locked);
        assert!(contract.available_transitions().is_empty());
    }
}
