use std::collections::BTreeMap;

use anyhow::{Context, Result};
use covenant_core::{
    Contract, ContractStatus, FieldType, FieldValue, status_action_label, terminal_notice,
};
use covenant_platform::{WorkspaceConfig, init_tracing};
use covenant_workspace::{ContractFilter, ContractWorkspace};
use tracing::{info, warn};

fn main() -> Result<()> {
    let config = WorkspaceConfig::from_env()?;
    init_tracing(&config.log_directive);

    let mut workspace = config.workspace();
    let contract = walk_through_lifecycle(&mut workspace, &config.demo_contract_name)?;

    println!("{}", serde_json::to_string_pretty(&contract)?);
    Ok(())
}

/// Builds an NDA blueprint, creates one contract from it and drives the
/// contract to `Locked`.
fn walk_through_lifecycle(workspace: &mut ContractWorkspace, contract_name: &str) -> Result<Contract> {
    let mut blueprint = workspace.new_blueprint("NDA");
    let party = blueprint.create_field(FieldType::Text, workspace.ids());
    blueprint.update_field_label(party.id, "Party");
    let effective = blueprint.create_field(FieldType::Date, workspace.ids());
    blueprint.update_field_label(effective.id, "Effective date");
    blueprint.create_field(FieldType::Signature, workspace.ids());
    blueprint.create_field(FieldType::Checkbox, workspace.ids());
    let blueprint_id = workspace.save_blueprint(blueprint)?.id;

    let values = BTreeMap::from([
        (party.id, FieldValue::text("Acme Corp")),
        (effective.id, FieldValue::date_from_iso("2025-01-15")?),
    ]);
    let contract_id = workspace
        .create_contract(blueprint_id, contract_name, values)?
        .id;

    // Skipping ahead is refused and leaves the contract where it was.
    if let Err(err) = workspace.update_contract_status(contract_id, ContractStatus::Signed) {
        warn!("expected rejection: {err}");
    }

    for next in [
        ContractStatus::Approved,
        ContractStatus::Sent,
        ContractStatus::Signed,
        ContractStatus::Locked,
    ] {
        info!("{}", status_action_label(next));
        workspace.update_contract_status(contract_id, next)?;
    }

    let contract = workspace
        .contract(contract_id)
        .context("contract vanished from workspace")?;
    if let Some(notice) = terminal_notice(contract.status) {
        info!("{notice}");
    }
    for (label, shown) in workspace.rendered_fields(contract_id)? {
        info!("{label}: {shown}");
    }

    let stats = workspace.stats();
    info!(
        signed = stats.signed,
        pending = stats.pending,
        revoked = stats.revoked,
        active = workspace.contracts(ContractFilter::Active).len(),
        "dashboard"
    );

    Ok(contract.clone())
}
