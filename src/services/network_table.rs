use std::{collections::HashMap, fs, path::Path};

use serde::Deserialize;

use crate::{
    errors::CustomError,
    models::{network_profile::NetworkProfile, verification_route::VerificationRoute},
};

pub const DEFAULT_SOLIDITY_VERSION: &str = "0.8.16";

fn default_solidity() -> String {
    DEFAULT_SOLIDITY_VERSION.to_string()
}

fn default_sourcify() -> bool {
    true
}

/// On-disk shape of a network table.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct RawNetworkTable {
    #[serde(default = "default_solidity")]
    solidity: String,
    #[serde(default = "default_sourcify")]
    sourcify_enabled: bool,
    #[serde(default)]
    networks: Vec<NetworkProfile>,
    #[serde(default)]
    verification: Vec<VerificationRoute>,
}

/// Immutable set of network profiles and verification routes.
///
/// Profiles keep their declaration order for listing; lookups go through a
/// name index.
#[derive(Clone, Debug)]
pub struct NetworkTable {
    solidity: String,
    sourcify_enabled: bool,
    profiles: Vec<NetworkProfile>,
    profile_index: HashMap<String, usize>,
    routes: Vec<VerificationRoute>,
    route_index: HashMap<String, usize>,
}

impl NetworkTable {
    pub fn new(
        profiles: Vec<NetworkProfile>,
        routes: Vec<VerificationRoute>,
    ) -> Result<Self, CustomError> {
        Self::build(default_solidity(), default_sourcify(), profiles, routes)
    }

    fn build(
        solidity: String,
        sourcify_enabled: bool,
        profiles: Vec<NetworkProfile>,
        routes: Vec<VerificationRoute>,
    ) -> Result<Self, CustomError> {
        let mut profile_index = HashMap::with_capacity(profiles.len());
        for (i, profile) in profiles.iter().enumerate() {
            if profile.name.is_empty() {
                return Err(CustomError::InvalidConfig(
                    "network profile with empty name".to_string(),
                ));
            }
            if profile.chain_id == Some(0) {
                return Err(CustomError::InvalidConfig(format!(
                    "network {} has chain id 0",
                    profile.name
                )));
            }
            if profile_index.insert(profile.name.clone(), i).is_some() {
                return Err(CustomError::InvalidConfig(format!(
                    "network {} is declared more than once",
                    profile.name
                )));
            }
        }

        let mut route_index = HashMap::with_capacity(routes.len());
        for (i, route) in routes.iter().enumerate() {
            if route_index.insert(route.network.clone(), i).is_some() {
                return Err(CustomError::InvalidConfig(format!(
                    "verification route for {} is declared more than once",
                    route.network
                )));
            }
        }

        Ok(Self {
            solidity,
            sourcify_enabled,
            profiles,
            profile_index,
            routes,
            route_index,
        })
    }

    pub fn from_json_str(json: &str) -> Result<Self, CustomError> {
        let raw: RawNetworkTable = serde_json::from_str(json)?;
        Self::build(raw.solidity, raw.sourcify_enabled, raw.networks, raw.verification)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, CustomError> {
        let contents = fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    pub fn solidity(&self) -> &str {
        &self.solidity
    }

    pub fn sourcify_enabled(&self) -> bool {
        self.sourcify_enabled
    }

    pub fn profiles(&self) -> &[NetworkProfile] {
        &self.profiles
    }

    pub fn routes(&self) -> &[VerificationRoute] {
        &self.routes
    }

    pub fn profile(&self, name: &str) -> Option<&NetworkProfile> {
        self.profile_index.get(name).map(|&i| &self.profiles[i])
    }

    pub fn route(&self, network: &str) -> Option<&VerificationRoute> {
        self.route_index.get(network).map(|&i| &self.routes[i])
    }
}
