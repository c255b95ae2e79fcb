use serde::{Deserialize, Serialize};

/// Where the explorer API key comes from.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApiKeySource {
    /// Read from the credential provider under this name.
    Env(String),
    /// Used verbatim. Explorers that ignore keys still need a placeholder.
    Literal(String),
}

impl ApiKeySource {
    pub fn is_empty(&self) -> bool {
        match self {
            ApiKeySource::Env(name) => name.is_empty(),
            ApiKeySource::Literal(value) => value.is_empty(),
        }
    }
}

/// Explicit explorer URLs for a chain the verification service does not know.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CustomEndpoint {
    #[serde(default)]
    pub chain_id: Option<u64>,
    #[serde(rename = "apiURL")]
    pub api_url: String,
    #[serde(rename = "browserURL")]
    pub browser_url: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct VerificationRoute {
    pub network: String,
    pub api_key: ApiKeySource,
    #[serde(default)]
    pub custom_endpoint: Option<CustomEndpoint>,
}
