use covenant_core::ContractStatus;
use serde::{Deserialize, Serialize};

/// Dashboard views over the contract list.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum ContractFilter {
    #[default]
    All,
    /// Anything not yet locked or revoked.
    Active,
    /// Waiting on approval, dispatch or signature.
    Pending,
    Signed,
}

impl ContractFilter {
    pub fn matches(&self, status: ContractStatus) -> bool {
        match self {
            ContractFilter::All => true,
            ContractFilter::Active => !status.is_terminal(),
            ContractFilter::Pending => matches!(
                status,
                ContractStatus::Created | ContractStatus::Approved | ContractStatus::Sent
            ),
            ContractFilter::Signed => {
                matches!(status, ContractStatus::Signed | ContractStatus::Locked)
            }
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DashboardStats {
    pub blueprints: usize,
    pub contracts: usize,
    pub signed: usize,
    pub pending: usize,
    pub revoked: usize,
}
