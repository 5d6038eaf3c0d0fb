//! The in-memory collection of blueprints and contracts.
//!
//! All mutation goes through `&mut ContractWorkspace`, so callers get one
//! action at a time for free.

mod error;
mod filter;

use std::collections::BTreeMap;

use covenant_core::{
    Blueprint, Clock, Contract, ContractStatus, FieldValue, IdGenerator, RandomIds, SystemClock,
    instantiate, render_field_value, transition, validate_for_save,
};
use tracing::{debug, info, warn};
use uuid::Uuid;

pub use error::WorkspaceError;
pub use filter::{ContractFilter, DashboardStats};

pub struct ContractWorkspace {
    ids: Box<dyn IdGenerator>,
    clock: Box<dyn Clock>,
    blueprints: Vec<Blueprint>,
    contracts: Vec<Contract>,
}

impl Default for ContractWorkspace {
    fn default() -> Self {
        Self::new(Box::new(RandomIds), Box::new(SystemClock))
    }
}

impl ContractWorkspace {
    pub fn new(ids: Box<dyn IdGenerator>, clock: Box<dyn Clock>) -> Self {
        Self {
            ids,
            clock,
            blueprints: Vec::new(),
            contracts: Vec::new(),
        }
    }

    /// Id source shared with blueprint drafts edited outside the workspace.
    pub fn ids(&self) -> &dyn IdGenerator {
        self.ids.as_ref()
    }

    pub fn new_blueprint(&self, name: impl Into<String>) -> Blueprint {
        Blueprint::new(name, self.ids())
    }

    /// Stores a validated blueprint, replacing any stored blueprint with the
    /// same id in place.
    pub fn save_blueprint(&mut self, blueprint: Blueprint) -> Result<&Blueprint, WorkspaceError> {
        if let Err(err) = validate_for_save(&blueprint) {
            warn!(blueprint_id = %blueprint.id, %err, "blueprint save rejected");
            return Err(err.into());
        }

        let index = match self.blueprints.iter().position(|b| b.id == blueprint.id) {
            Some(index) => {
                info!(blueprint_id = %blueprint.id, name = %blueprint.name, "blueprint updated");
                self.blueprints[index] = blueprint;
                index
            }
            None => {
                info!(
                    blueprint_id = %blueprint.id,
                    name = %blueprint.name,
                    fields = blueprint.fields.len(),
                    "blueprint saved"
                );
                self.blueprints.push(blueprint);
                self.blueprints.len() - 1
            }
        };

        Ok(&self.blueprints[index])
    }

    /// Contracts created from the blueprint keep their own snapshot.
    pub fn delete_blueprint(&mut self, blueprint_id: Uuid) -> Option<Blueprint> {
        let index = self.blueprints.iter().position(|b| b.id == blueprint_id)?;
        let removed = self.blueprints.remove(index);
        info!(%blueprint_id, name = %removed.name, "blueprint deleted");
        Some(removed)
    }

    pub fn blueprint(&self, blueprint_id: Uuid) -> Option<&Blueprint> {
        self.blueprints.iter().find(|b| b.id == blueprint_id)
    }

    pub fn blueprints(&self) -> &[Blueprint] {
        &self.blueprints
    }

    pub fn create_contract(
        &mut self,
        blueprint_id: Uuid,
        name: &str,
        values: BTreeMap<Uuid, FieldValue>,
    ) -> Result<&Contract, WorkspaceError> {
        let blueprint = self
            .blueprint(blueprint_id)
            .ok_or(WorkspaceError::BlueprintNotFound(blueprint_id))?;

        let unknown = values
            .keys()
            .filter(|id| blueprint.field(**id).is_none())
            .count();
        if unknown > 0 {
            debug!(%blueprint_id, unknown, "ignoring values for undeclared fields");
        }

        let contract = instantiate(blueprint, name, values, self.ids.as_ref(), self.clock.as_ref())
            .inspect_err(|err| warn!(%blueprint_id, %err, "contract creation rejected"))?;

        info!(
            contract_id = %contract.id,
            %blueprint_id,
            name = %contract.name,
            "contract created"
        );
        self.contracts.push(contract);
        Ok(&self.contracts[self.contracts.len() - 1])
    }

    pub fn update_contract_status(
        &mut self,
        contract_id: Uuid,
        target: ContractStatus,
    ) -> Result<&Contract, WorkspaceError> {
        let index = self
            .contracts
            .iter()
            .position(|c| c.id == contract_id)
            .ok_or(WorkspaceError::ContractNotFound(contract_id))?;

        let current = &self.contracts[index];
        let next = transition(current, target)
            .inspect_err(|err| warn!(%contract_id, %err, "status change rejected"))?;

        info!(%contract_id, from = %current.status, to = %next.status, "contract status changed");
        self.contracts[index] = next;
        Ok(&self.contracts[index])
    }

    pub fn contract(&self, contract_id: Uuid) -> Option<&Contract> {
        self.contracts.iter().find(|c| c.id == contract_id)
    }

    pub fn contracts(&self, filter: ContractFilter) -> Vec<&Contract> {
        self.contracts
            .iter()
            .filter(|c| filter.matches(c.status))
            .collect()
    }

    /// `(label, display text)` for each field of the contract, in field order.
    pub fn rendered_fields(&self, contract_id: Uuid) -> Result<Vec<(String, String)>, WorkspaceError> {
        let contract = self
            .contract(contract_id)
            .ok_or(WorkspaceError::ContractNotFound(contract_id))?;

        Ok(contract
            .bound_fields()
            .map(|(field, value)| (field.label.clone(), render_field_value(field, value)))
            .collect())
    }

    pub fn stats(&self) -> DashboardStats {
        let count = |filter: ContractFilter| {
            self.contracts
                .iter()
                .filter(|c| filter.matches(c.status))
                .count()
        };

        DashboardStats {
            blueprints: self.blueprints.len(),
            contracts: self.contracts.len(),
            signed: count(ContractFilter::Signed),
            pending: count(ContractFilter::Pending),
            revoked: self
                .contracts
                .iter()
                .filter(|c| c.status == ContractStatus::Revoked)
                .count(),
        }
    }
}
