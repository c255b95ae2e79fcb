//! Networks the contract verification service integrates natively.
//!
//! A verification route for any other network needs a custom endpoint.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BuiltinChain {
    pub network: &'static str,
    pub chain_id: u64,
}

const BUILTIN_CHAINS: &[BuiltinChain] = &[
    BuiltinChain {
        network: "mainnet",
        chain_id: 1,
    },
    BuiltinChain {
        network: "sepolia",
        chain_id: 11155111,
    },
    BuiltinChain {
        network: "holesky",
        chain_id: 17000,
    },
    BuiltinChain {
        network: "bsc",
        chain_id: 56,
    },
    BuiltinChain {
        network: "bscTestnet",
        chain_id: 97,
    },
    BuiltinChain {
        network: "polygon",
        chain_id: 137,
    },
    BuiltinChain {
        network: "arbitrumOne",
        chain_id: 42161,
    },
    BuiltinChain {
        network: "optimisticEthereum",
        chain_id: 10,
    },
    BuiltinChain {
        network: "base",
        chain_id: 8453,
    },
    BuiltinChain {
        network: "avalanche",
        chain_id: 43114,
    },
    BuiltinChain {
        network: "gnosis",
        chain_id: 100,
    },
];

/// Exact, case-sensitive lookup by network name.
pub fn builtin_chain(network: &str) -> Option<&'static BuiltinChain> {
    BUILTIN_CHAINS.iter().find(|chain| chain.network == network)
}
