use anyhow::{Context, Result};
use covenant_core::{IdGenerator, RandomIds, SequentialIds, SystemClock};
use covenant_workspace::ContractWorkspace;

const DEFAULT_LOG_DIRECTIVE: &str = "covenant_workspace=info,covenant_demo=info";
const DEFAULT_DEMO_NAME: &str = "Acme NDA";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum IdStrategy {
    #[default]
    Random,
    Sequential,
}

impl IdStrategy {
    fn parse(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "random" => Ok(Self::Random),
            "sequential" => Ok(Self::Sequential),
            _ => anyhow::bail!("id strategy must be random or sequential"),
        }
    }
}

#[derive(Clone, Debug)]
pub struct WorkspaceConfig {
    pub id_strategy: IdStrategy,
    pub log_directive: String,
    pub demo_contract_name: String,
}

impl WorkspaceConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let id_strategy = match lookup("COVENANT_ID_STRATEGY") {
            Some(raw) => IdStrategy::parse(&raw).context("COVENANT_ID_STRATEGY is invalid")?,
            None => IdStrategy::default(),
        };
        let log_directive =
            lookup("COVENANT_LOG").unwrap_or_else(|| DEFAULT_LOG_DIRECTIVE.to_string());
        let demo_contract_name = lookup("COVENANT_DEMO_NAME")
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_DEMO_NAME.to_string());

        Ok(Self {
            id_strategy,
            log_directive,
            demo_contract_name,
        })
    }

    pub fn id_generator(&self) -> Box<dyn IdGenerator> {
        match self.id_strategy {
            IdStrategy::Random => Box::new(RandomIds),
            IdStrategy::Sequential => Box::new(SequentialIds::default()),
        }
    }

    pub fn workspace(&self) -> ContractWorkspace {
        ContractWorkspace::new(self.id_generator(), Box::new(SystemClock))
    }
}
