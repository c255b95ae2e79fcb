pub mod credentials;
pub mod explorer_registry;
pub mod network_config;
pub mod network_table;
pub mod resolver;
