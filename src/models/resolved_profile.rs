use std::fmt;

use serde::{Serialize, Serializer};

use super::network_profile::GasSettings;

const REDACTED: &str = "[redacted]";

/// Secret material read from the credential provider.
///
/// `Debug` and `Serialize` never print the value; callers that hand it to a
/// signer or an explorer client go through [`Credential::expose`].
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Credential").field(&REDACTED).finish()
    }
}

impl Serialize for Credential {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.0.is_empty() {
            serializer.serialize_str("")
        } else {
            serializer.serialize_str(REDACTED)
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum VerificationEndpoint {
    /// Let the verification service pick URLs from its own registry.
    BuiltIn,
    Custom { api_url: String, browser_url: String },
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct VerificationDescriptor {
    pub api_key: Credential,
    pub endpoint: VerificationEndpoint,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ResolvedProfile {
    pub name: String,
    pub rpc_url: String,
    pub chain_id: Option<u64>,
    pub accounts: Option<Credential>,
    pub is_live: bool,
    pub persist_deployments: bool,
    pub tags: Vec<String>,
    pub gas: GasSettings,
    pub verification: Option<VerificationDescriptor>,
    pub sourcify_enabled: bool,
}
