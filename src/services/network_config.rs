use crate::{
    errors::CustomError,
    models::{
        network_profile::NetworkProfile,
        verification_route::{ApiKeySource, CustomEndpoint, VerificationRoute},
    },
};

use super::network_table::NetworkTable;

pub const PRIVATE_KEY_VAR: &str = "PRIVATE_KEY";
pub const ETHERSCAN_API_KEY_VAR: &str = "ETHERSCAN_API_KEY";

fn live_network(name: &str, rpc_url: &str, chain_id: u64) -> NetworkProfile {
    NetworkProfile {
        name: name.to_string(),
        rpc_url: rpc_url.to_string(),
        chain_id: Some(chain_id),
        accounts_source: Some(PRIVATE_KEY_VAR.to_string()),
        is_live: true,
        persist_deployments: true,
        tags: Vec::new(),
        gas_multiplier: None,
        gas_price: None,
    }
}

fn staging(mut profile: NetworkProfile) -> NetworkProfile {
    profile.tags.push("staging".to_string());
    profile
}

/// Networks shipped with the binary
pub fn default_profiles() -> Vec<NetworkProfile> {
    let development = NetworkProfile {
        name: "development".to_string(),
        rpc_url: "http://127.0.0.1:8545".to_string(),
        chain_id: None,
        accounts_source: None,
        is_live: false,
        persist_deployments: false,
        tags: Vec::new(),
        gas_multiplier: None,
        gas_price: None,
    };

    let bsc_testnet = NetworkProfile {
        gas_multiplier: Some(2.0),
        gas_price: Some(10_000_000_000),
        ..staging(live_network(
            "bscTestnet",
            "https://data-seed-prebsc-1-s1.bnbchain.org:8545",
            97,
        ))
    };

    let chiliz_spicy = NetworkProfile {
        gas_multiplier: Some(2.0),
        ..staging(live_network(
            "chiliz_spicy",
            "https://88882.rpc.thirdweb.com",
            88882,
        ))
    };

    vec![
        development,
        live_network(
            "bsc",
            "https://bsc-mainnet.nodereal.io/v1/cc5edee862e544ad93e090f0550e4633",
            56,
        ),
        bsc_testnet,
        live_network(
            "opbnb",
            "https://opbnb-mainnet.nodereal.io/v1/6779bcb4331f49d5955166c109711294",
            204,
        ),
        live_network("chiliz", "https://rpc.ankr.com/chiliz", 88888),
        chiliz_spicy,
    ]
}

/// Explorer routes for the shipped networks
pub fn default_routes() -> Vec<VerificationRoute> {
    let etherscan = |network: &str| VerificationRoute {
        network: network.to_string(),
        api_key: ApiKeySource::Env(ETHERSCAN_API_KEY_VAR.to_string()),
        custom_endpoint: None,
    };

    vec![
        etherscan("bsc"),
        etherscan("bscTestnet"),
        VerificationRoute {
            network: "opbnb".to_string(),
            api_key: ApiKeySource::Literal("6779bcb4331f49d5955166c109711294".to_string()),
            custom_endpoint: Some(CustomEndpoint {
                chain_id: Some(204),
                api_url: "https://open-platform.nodereal.io/6779bcb4331f49d5955166c109711294/op-bnb-mainnet/contract".to_string(),
                browser_url: "https://opbnbscan.com/".to_string(),
            }),
        },
        // routescan accepts any key, the placeholder only has to be non-empty
        VerificationRoute {
            network: "chiliz".to_string(),
            api_key: ApiKeySource::Literal("chiliz".to_string()),
            custom_endpoint: Some(CustomEndpoint {
                chain_id: Some(88888),
                api_url: "https://api.routescan.io/v2/network/mainnet/evm/88888/etherscan"
                    .to_string(),
                browser_url: "https://chiliscan.com".to_string(),
            }),
        },
        VerificationRoute {
            network: "chiliz_spicy".to_string(),
            api_key: ApiKeySource::Literal("chiliz_spicy".to_string()),
            custom_endpoint: Some(CustomEndpoint {
                chain_id: Some(88882),
                api_url: "https://api.routescan.io/v2/network/testnet/evm/88882/etherscan"
                    .to_string(),
                browser_url: "https://testnet.chiliscan.com".to_string(),
            }),
        },
    ]
}

pub fn default_table() -> Result<NetworkTable, CustomError> {
    NetworkTable::new(default_profiles(), default_routes())
}
