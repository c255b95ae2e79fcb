use std::{collections::HashMap, sync::Arc};

use chrono::{DateTime, Utc};
use log::{debug, warn};

use crate::{
    errors::CustomError,
    models::{
        config_warning::ConfigWarning,
        network_profile::{GasSettings, NetworkProfile},
        resolved_profile::{
            Credential, ResolvedProfile, VerificationDescriptor, VerificationEndpoint,
        },
        verification_route::{ApiKeySource, VerificationRoute},
    },
};

use super::{credentials::CredentialProvider, explorer_registry, network_table::NetworkTable};

/// Maps network names to deployable, verifiable profiles.
///
/// The table never changes after construction, so one resolver can be
/// shared across threads and `resolve` only varies with the credential
/// provider's contents.
#[derive(Clone)]
pub struct NetworkProfileResolver {
    table: Arc<NetworkTable>,
    credentials: Arc<dyn CredentialProvider>,
    loaded_at: DateTime<Utc>,
}

impl NetworkProfileResolver {
    pub fn new(table: NetworkTable, credentials: Arc<dyn CredentialProvider>) -> Self {
        Self {
            table: Arc::new(table),
            credentials,
            loaded_at: Utc::now(),
        }
    }

    pub fn table(&self) -> &NetworkTable {
        &self.table
    }

    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.table.profiles().iter().map(|p| p.name.as_str())
    }

    pub fn profiles_tagged<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a NetworkProfile> {
        self.table.profiles().iter().filter(move |p| p.has_tag(tag))
    }

    pub fn resolve(&self, name: &str) -> Result<ResolvedProfile, CustomError> {
        if name.is_empty() {
            return Err(CustomError::ValidationError(
                "network name must not be empty".to_string(),
            ));
        }

        let profile = self
            .table
            .profile(name)
            .ok_or_else(|| CustomError::UnknownNetwork(name.to_string()))?;

        let accounts = self.resolve_accounts(profile)?;
        let verification = self
            .table
            .route(name)
            .map(|route| self.resolve_verification(route));

        debug!(
            "resolved network {} (chain id {:?}, live: {}, verification: {})",
            name,
            profile.chain_id,
            profile.is_live,
            verification.is_some()
        );

        Ok(ResolvedProfile {
            name: profile.name.clone(),
            rpc_url: profile.rpc_url.clone(),
            chain_id: profile.chain_id,
            accounts,
            is_live: profile.is_live,
            persist_deployments: profile.persist_deployments,
            tags: profile.tags.clone(),
            gas: GasSettings::from(profile),
            verification,
            sourcify_enabled: self.table.sourcify_enabled(),
        })
    }

    fn resolve_accounts(&self, profile: &NetworkProfile) -> Result<Option<Credential>, CustomError> {
        let secret = profile
            .accounts_source
            .as_deref()
            .and_then(|var| self.credentials.get_secret(var));

        match secret {
            Some(value) => Ok(Some(Credential::new(value))),
            None if profile.is_live => Err(CustomError::MissingCredential {
                network: profile.name.clone(),
                variable: profile.accounts_source.clone(),
            }),
            // The deploy tool falls back to its own default signer.
            None => Ok(None),
        }
    }

    fn resolve_verification(&self, route: &VerificationRoute) -> VerificationDescriptor {
        let api_key = match &route.api_key {
            ApiKeySource::Literal(value) => Credential::new(value.clone()),
            ApiKeySource::Env(var) => match self.credentials.get_secret(var) {
                Some(value) => Credential::new(value),
                None => {
                    warn!(
                        "explorer API key {} for network {} is unset, verification requests will carry an empty key",
                        var, route.network
                    );
                    Credential::new(String::new())
                }
            },
        };

        let endpoint = match &route.custom_endpoint {
            Some(custom) => VerificationEndpoint::Custom {
                api_url: custom.api_url.clone(),
                browser_url: custom.browser_url.clone(),
            },
            None => VerificationEndpoint::BuiltIn,
        };

        VerificationDescriptor { api_key, endpoint }
    }

    /// Reports configuration problems without failing.
    pub fn validate_all(&self) -> Vec<ConfigWarning> {
        let mut warnings = Vec::new();

        for profile in self.table.profiles().iter().filter(|p| p.is_live) {
            let has_secret = profile
                .accounts_source
                .as_deref()
                .is_some_and(|var| self.credentials.get_secret(var).is_some());
            if !has_secret {
                warnings.push(ConfigWarning::LiveWithoutCredential {
                    network: profile.name.clone(),
                    variable: profile.accounts_source.clone(),
                });
            }
        }

        let mut seen_chain_ids: HashMap<u64, &NetworkProfile> = HashMap::new();
        for profile in self.table.profiles() {
            let Some(chain_id) = profile.chain_id else {
                continue;
            };
            match seen_chain_ids.get(&chain_id) {
                Some(first) if first.rpc_url != profile.rpc_url => {
                    warnings.push(ConfigWarning::DuplicateChainId {
                        chain_id,
                        first: first.name.clone(),
                        second: profile.name.clone(),
                    });
                }
                Some(_) => {}
                None => {
                    seen_chain_ids.insert(chain_id, profile);
                }
            }
        }

        for route in self.table.routes() {
            let profile = self.table.profile(&route.network);
            if profile.is_none() {
                warnings.push(ConfigWarning::DanglingRoute {
                    network: route.network.clone(),
                });
            }

            if route.api_key.is_empty() {
                warnings.push(ConfigWarning::EmptyApiKey {
                    network: route.network.clone(),
                });
            }

            // endpoint checks compare against the profile
            let Some(profile) = profile else {
                continue;
            };

            match &route.custom_endpoint {
                None => match explorer_registry::builtin_chain(&route.network) {
                    None => {
                        warnings.push(ConfigWarning::MissingCustomEndpoint {
                            network: route.network.clone(),
                        });
                    }
                    Some(builtin) => {
                        if let Some(expected) = profile.chain_id {
                            if expected != builtin.chain_id {
                                warnings.push(ConfigWarning::BuiltinChainIdMismatch {
                                    network: route.network.clone(),
                                    expected,
                                    registered: builtin.chain_id,
                                });
                            }
                        }
                    }
                },
                Some(custom) => {
                    if let (Some(expected), Some(configured)) = (profile.chain_id, custom.chain_id) {
                        if expected != configured {
                            warnings.push(ConfigWarning::CustomChainIdMismatch {
                                network: route.network.clone(),
                                expected,
                                configured,
                            });
                        }
                    }
                }
            }
        }

        warnings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        models::verification_route::CustomEndpoint,
        services::{
            credentials::StaticCredentialProvider,
            network_config::{default_table, ETHERSCAN_API_KEY_VAR, PRIVATE_KEY_VAR},
        },
    };

    fn with_keys() -> Arc<dyn CredentialProvider> {
        Arc::new(
            StaticCredentialProvider::new()
                .with(PRIVATE_KEY_VAR, "0x59c6995e998f97a5a0044966f0945389dc9e86dae88c7a8412f4603b6b78690d")
                .with(ETHERSCAN_API_KEY_VAR, "ETHERSCAN123"),
        )
    }

    fn default_resolver() -> NetworkProfileResolver {
        NetworkProfileResolver::new(default_table().unwrap(), with_keys())
    }

    fn profile(name: &str, rpc_url: &str, chain_id: u64, live: bool) -> NetworkProfile {
        NetworkProfile {
            name: name.to_string(),
            rpc_url: rpc_url.to_string(),
            chain_id: Some(chain_id),
            accounts_source: Some(PRIVATE_KEY_VAR.to_string()),
            is_live: live,
            persist_deployments: live,
            tags: Vec::new(),
            gas_multiplier: None,
            gas_price: None,
        }
    }

    fn custom_route(network: &str, chain_id: u64) -> VerificationRoute {
        VerificationRoute {
            network: network.to_string(),
            api_key: ApiKeySource::Literal(network.to_string()),
            custom_endpoint: Some(CustomEndpoint {
                chain_id: Some(chain_id),
                api_url: format!("https://api.example/{chain_id}"),
                browser_url: format!("https://explorer.example/{chain_id}"),
            }),
        }
    }

    #[test]
    fn resolves_configured_chain_ids() {
        let resolver = default_resolver();
        for (name, chain_id) in [
            ("bsc", 56),
            ("opbnb", 204),
            ("chiliz", 88888),
            ("chiliz_spicy", 88882),
            ("bscTestnet", 97),
        ] {
            assert_eq!(resolver.resolve(name).unwrap().chain_id, Some(chain_id), "{name}");
        }
    }

    #[test]
    fn unknown_network() {
        let err = default_resolver().resolve("does-not-exist").unwrap_err();
        assert!(matches!(err, CustomError::UnknownNetwork(ref n) if n == "does-not-exist"));
        assert!(err.to_string().contains("does-not-exist"));
    }

    #[test]
    fn name_match_is_exact() {
        assert!(matches!(
            default_resolver().resolve("BSC"),
            Err(CustomError::UnknownNetwork(_))
        ));
    }

    #[test]
    fn empty_name_is_rejected() {
        assert!(matches!(
            default_resolver().resolve(""),
            Err(CustomError::ValidationError(_))
        ));
    }

    #[test]
    fn live_network_without_credential_fails() {
        let resolver = NetworkProfileResolver::new(
            default_table().unwrap(),
            Arc::new(StaticCredentialProvider::new()),
        );
        let err = resolver.resolve("bsc").unwrap_err();
        match &err {
            CustomError::MissingCredential { network, variable } => {
                assert_eq!(network, "bsc");
                assert_eq!(variable.as_deref(), Some(PRIVATE_KEY_VAR));
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(err.to_string().contains(PRIVATE_KEY_VAR));
    }

    #[test]
    fn empty_credential_counts_as_missing() {
        let resolver = NetworkProfileResolver::new(
            default_table().unwrap(),
            Arc::new(StaticCredentialProvider::new().with(PRIVATE_KEY_VAR, "")),
        );
        assert!(matches!(
            resolver.resolve("opbnb"),
            Err(CustomError::MissingCredential { .. })
        ));
    }

    #[test]
    fn live_network_without_reference_fails() {
        let mut bsc = profile("bsc", "https://bsc", 56, true);
        bsc.accounts_source = None;
        let table = NetworkTable::new(vec![bsc], Vec::new()).unwrap();
        let resolver = NetworkProfileResolver::new(table, with_keys());
        assert!(matches!(
            resolver.resolve("bsc"),
            Err(CustomError::MissingCredential { variable: None, .. })
        ));
    }

    #[test]
    fn non_live_network_tolerates_missing_credential() {
        let resolver = NetworkProfileResolver::new(
            default_table().unwrap(),
            Arc::new(StaticCredentialProvider::new()),
        );
        let resolved = resolver.resolve("development").unwrap();
        assert_eq!(resolved.accounts, None);
        assert_eq!(resolved.rpc_url, "http://127.0.0.1:8545");
        assert!(!resolved.is_live);
        assert!(!resolved.persist_deployments);
    }

    #[test]
    fn credential_is_read_from_provider() {
        let resolved = default_resolver().resolve("bsc").unwrap();
        let accounts = resolved.accounts.unwrap();
        assert!(accounts.expose().starts_with("0x59c6"));
        assert!(resolved.is_live);
        assert!(resolved.persist_deployments);
    }

    #[test]
    fn custom_endpoints_are_used_verbatim() {
        let resolver = default_resolver();
        for (name, api_url, browser_url) in [
            (
                "chiliz",
                "https://api.routescan.io/v2/network/mainnet/evm/88888/etherscan",
                "https://chiliscan.com",
            ),
            (
                "chiliz_spicy",
                "https://api.routescan.io/v2/network/testnet/evm/88882/etherscan",
                "https://testnet.chiliscan.com",
            ),
            (
                "opbnb",
                "https://open-platform.nodereal.io/6779bcb4331f49d5955166c109711294/op-bnb-mainnet/contract",
                "https://opbnbscan.com/",
            ),
        ] {
            let verification = resolver.resolve(name).unwrap().verification.unwrap();
            assert_eq!(
                verification.endpoint,
                VerificationEndpoint::Custom {
                    api_url: api_url.to_string(),
                    browser_url: browser_url.to_string(),
                },
                "{name}"
            );
        }
    }

    #[test]
    fn custom_endpoint_wins_over_builtin_registry() {
        // bsc is a built-in integration, a custom route must still win
        let table = NetworkTable::new(
            vec![profile("bsc", "https://bsc", 56, false)],
            vec![custom_route("bsc", 56)],
        )
        .unwrap();
        let resolver = NetworkProfileResolver::new(table, with_keys());
        let verification = resolver.resolve("bsc").unwrap().verification.unwrap();
        assert_eq!(
            verification.endpoint,
            VerificationEndpoint::Custom {
                api_url: "https://api.example/56".to_string(),
                browser_url: "https://explorer.example/56".to_string(),
            }
        );
        assert_eq!(verification.api_key.expose(), "bsc");
    }

    #[test]
    fn builtin_route_carries_only_api_key() {
        let verification = default_resolver()
            .resolve("bscTestnet")
            .unwrap()
            .verification
            .unwrap();
        assert_eq!(verification.endpoint, VerificationEndpoint::BuiltIn);
        assert_eq!(verification.api_key.expose(), "ETHERSCAN123");
    }

    #[test]
    fn placeholder_api_keys_are_kept() {
        let verification = default_resolver()
            .resolve("chiliz_spicy")
            .unwrap()
            .verification
            .unwrap();
        assert_eq!(verification.api_key.expose(), "chiliz_spicy");
    }

    #[test]
    fn unset_api_key_variable_does_not_fail() {
        let resolver = NetworkProfileResolver::new(
            default_table().unwrap(),
            Arc::new(StaticCredentialProvider::new().with(PRIVATE_KEY_VAR, "0x01")),
        );
        let verification = resolver.resolve("bsc").unwrap().verification.unwrap();
        assert!(verification.api_key.is_empty());
    }

    #[test]
    fn network_without_route_has_no_verification() {
        let resolved = default_resolver().resolve("development").unwrap();
        assert_eq!(resolved.verification, None);
    }

    #[test]
    fn resolve_is_idempotent() {
        let resolver = default_resolver();
        assert_eq!(
            resolver.resolve("chiliz_spicy").unwrap(),
            resolver.resolve("chiliz_spicy").unwrap()
        );
    }

    #[test]
    fn gas_overrides_pass_through() {
        let resolved = default_resolver().resolve("bscTestnet").unwrap();
        assert_eq!(resolved.gas.multiplier, Some(2.0));
        assert_eq!(resolved.gas.price, Some(10_000_000_000));
        assert_eq!(resolved.tags, vec!["staging".to_string()]);
        assert!(resolved.sourcify_enabled);
    }

    #[test]
    fn tag_filter() {
        let resolver = default_resolver();
        let staging: Vec<_> = resolver.profiles_tagged("staging").map(|p| p.name.as_str()).collect();
        assert_eq!(staging, vec!["bscTestnet", "chiliz_spicy"]);
        assert_eq!(resolver.names().count(), 6);
    }

    #[test]
    fn default_table_is_clean_when_keys_are_set() {
        assert!(default_resolver().validate_all().is_empty());
    }

    #[test]
    fn dangling_route_is_reported_once() {
        let table = NetworkTable::new(
            vec![profile("chiliz", "https://rpc.ankr.com/chiliz", 88888, false)],
            vec![custom_route("chiliz", 88888), custom_route("ghost", 1234)],
        )
        .unwrap();
        let warnings = NetworkProfileResolver::new(table, with_keys()).validate_all();
        assert_eq!(
            warnings,
            vec![ConfigWarning::DanglingRoute {
                network: "ghost".to_string()
            }]
        );
    }

    #[test]
    fn dangling_route_with_empty_key_reports_both() {
        let table = NetworkTable::new(
            Vec::new(),
            vec![VerificationRoute {
                network: "ghost".to_string(),
                api_key: ApiKeySource::Literal(String::new()),
                custom_endpoint: None,
            }],
        )
        .unwrap();
        let warnings = NetworkProfileResolver::new(table, with_keys()).validate_all();
        assert_eq!(
            warnings,
            vec![
                ConfigWarning::DanglingRoute {
                    network: "ghost".to_string()
                },
                ConfigWarning::EmptyApiKey {
                    network: "ghost".to_string()
                },
            ]
        );
    }

    #[test]
    fn builtin_route_chain_id_mismatch_is_reported() {
        let table = NetworkTable::new(
            vec![profile("bsc", "https://data-seed-prebsc-1-s1.bnbchain.org:8545", 97, false)],
            vec![VerificationRoute {
                network: "bsc".to_string(),
                api_key: ApiKeySource::Env(ETHERSCAN_API_KEY_VAR.to_string()),
                custom_endpoint: None,
            }],
        )
        .unwrap();
        let warnings = NetworkProfileResolver::new(table, with_keys()).validate_all();
        assert_eq!(
            warnings,
            vec![ConfigWarning::BuiltinChainIdMismatch {
                network: "bsc".to_string(),
                expected: 97,
                registered: 56,
            }]
        );
    }

    #[test]
    fn live_networks_without_credentials_are_reported() {
        let resolver = NetworkProfileResolver::new(
            default_table().unwrap(),
            Arc::new(StaticCredentialProvider::new()),
        );
        let live_warnings = resolver
            .validate_all()
            .into_iter()
            .filter(|w| matches!(w, ConfigWarning::LiveWithoutCredential { .. }))
            .count();
        assert_eq!(live_warnings, 5);
    }

    #[test]
    fn duplicate_chain_id_with_different_rpc() {
        let table = NetworkTable::new(
            vec![
                profile("bsc", "https://bsc-dataseed.binance.org", 56, false),
                profile("bsc_nodereal", "https://bsc-mainnet.nodereal.io", 56, false),
                profile("bsc_mirror", "https://bsc-dataseed.binance.org", 56, false),
            ],
            Vec::new(),
        )
        .unwrap();
        let warnings = NetworkProfileResolver::new(table, with_keys()).validate_all();
        assert_eq!(
            warnings,
            vec![ConfigWarning::DuplicateChainId {
                chain_id: 56,
                first: "bsc".to_string(),
                second: "bsc_nodereal".to_string(),
            }]
        );
    }

    #[test]
    fn empty_api_key_is_reported() {
        let mut route = custom_route("chiliz", 88888);
        route.api_key = ApiKeySource::Literal(String::new());
        let table = NetworkTable::new(
            vec![profile("chiliz", "https://rpc.ankr.com/chiliz", 88888, false)],
            vec![route],
        )
        .unwrap();
        let warnings = NetworkProfileResolver::new(table, with_keys()).validate_all();
        assert_eq!(
            warnings,
            vec![ConfigWarning::EmptyApiKey {
                network: "chiliz".to_string()
            }]
        );
    }

    #[test]
    fn unknown_chain_without_custom_endpoint_is_reported() {
        let table = NetworkTable::new(
            vec![profile("opbnb", "https://opbnb", 204, false)],
            vec![VerificationRoute {
                network: "opbnb".to_string(),
                api_key: ApiKeySource::Literal("key".to_string()),
                custom_endpoint: None,
            }],
        )
        .unwrap();
        let warnings = NetworkProfileResolver::new(table, with_keys()).validate_all();
        assert_eq!(
            warnings,
            vec![ConfigWarning::MissingCustomEndpoint {
                network: "opbnb".to_string()
            }]
        );
    }

    #[test]
    fn custom_endpoint_chain_id_mismatch_is_reported() {
        let table = NetworkTable::new(
            vec![profile("opbnb", "https://opbnb", 204, false)],
            vec![custom_route("opbnb", 5611)],
        )
        .unwrap();
        let warnings = NetworkProfileResolver::new(table, with_keys()).validate_all();
        assert_eq!(
            warnings,
            vec![ConfigWarning::CustomChainIdMismatch {
                network: "opbnb".to_string(),
                expected: 204,
                configured: 5611,
            }]
        );
    }
}
