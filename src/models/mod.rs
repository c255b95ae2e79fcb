pub mod api_response;
pub mod config_warning;
pub mod network_profile;
pub mod resolved_profile;
pub mod verification_route;
