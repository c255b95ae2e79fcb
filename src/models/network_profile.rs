use serde::{Deserialize, Serialize};

/// One deployable target chain.
///
/// Field names on the wire follow the deploy-tool configuration format
/// (`url`, `chainId`, `accounts`, `live`, `saveDeployments`, ...).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NetworkProfile {
    pub name: String,
    #[serde(rename = "url")]
    pub rpc_url: String,
    /// `None` accepts whatever chain id the node reports.
    #[serde(default)]
    pub chain_id: Option<u64>,
    /// Name of the variable holding the signing key, never the key itself.
    #[serde(rename = "accounts", default)]
    pub accounts_source: Option<String>,
    #[serde(rename = "live", default)]
    pub is_live: bool,
    #[serde(rename = "saveDeployments", default)]
    pub persist_deployments: bool,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub gas_multiplier: Option<f64>,
    #[serde(default)]
    pub gas_price: Option<u64>,
}

impl NetworkProfile {
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

/// Gas overrides handed to the deploy tool as-is.
///
/// When both are set the tool decides which one wins.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct GasSettings {
    pub multiplier: Option<f64>,
    pub price: Option<u64>,
}

impl From<&NetworkProfile> for GasSettings {
    fn from(profile: &NetworkProfile) -> Self {
        Self {
            multiplier: profile.gas_multiplier,
            price: profile.gas_price,
        }
    }
}
