use serde::Serialize;
use thiserror::Error;

/// Non-fatal findings reported by `NetworkProfileResolver::validate_all`.
#[derive(Error, Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ConfigWarning {
    #[error("live network {network} has no credential available ({})", .variable.as_deref().unwrap_or("no reference"))]
    LiveWithoutCredential {
        network: String,
        variable: Option<String>,
    },

    #[error("verification route references unknown network {network}")]
    DanglingRoute { network: String },

    #[error("chain id {chain_id} is used by both {first} and {second} with different RPC URLs")]
    DuplicateChainId {
        chain_id: u64,
        first: String,
        second: String,
    },

    #[error("verification route for {network} has an empty API key")]
    EmptyApiKey { network: String },

    #[error("network {network} is not known to the verification service and has no custom endpoint")]
    MissingCustomEndpoint { network: String },

    #[error("verification service registers {network} as chain id {registered}, profile has {expected}")]
    BuiltinChainIdMismatch {
        network: String,
        expected: u64,
        registered: u64,
    },

    #[error("custom endpoint for {network} declares chain id {configured}, profile has {expected}")]
    CustomChainIdMismatch {
        network: String,
        expected: u64,
        configured: u64,
    },
}
