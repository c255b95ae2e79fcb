use actix_web::{get, web, HttpResponse};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    errors::CustomError,
    models::{api_response::success_response, network_profile::NetworkProfile},
    services::resolver::NetworkProfileResolver,
};

#[derive(Deserialize)]
pub struct ListQuery {
    tag: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct NetworkSummary {
    name: String,
    chain_id: Option<u64>,
    live: bool,
    tags: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct TableSummary {
    solidity: String,
    sourcify_enabled: bool,
    loaded_at: DateTime<Utc>,
    networks: Vec<NetworkSummary>,
}

#[get("/networks")]
pub async fn list_networks(
    resolver: web::Data<NetworkProfileResolver>,
    query: web::Query<ListQuery>,
) -> Result<HttpResponse, CustomError> {
    let table = resolver.table();
    let profiles: Vec<&NetworkProfile> = match query.tag.as_deref() {
        Some(tag) => resolver.profiles_tagged(tag).collect(),
        None => table.profiles().iter().collect(),
    };
    let networks = profiles
        .into_iter()
        .map(|p| NetworkSummary {
            name: p.name.clone(),
            chain_id: p.chain_id,
            live: p.is_live,
            tags: p.tags.clone(),
        })
        .collect();

    Ok(success_response(TableSummary {
        solidity: table.solidity().to_string(),
        sourcify_enabled: table.sourcify_enabled(),
        loaded_at: resolver.loaded_at(),
        networks,
    }))
}

#[get("/networks/{name}")]
pub async fn get_network(
    resolver: web::Data<NetworkProfileResolver>,
    name: web::Path<String>,
) -> Result<HttpResponse, CustomError> {
    let profile = resolver.resolve(&name)?;
    Ok(success_response(profile))
}

#[get("/warnings")]
pub async fn get_warnings(
    resolver: web::Data<NetworkProfileResolver>,
) -> Result<HttpResponse, CustomError> {
    Ok(success_response(resolver.validate_all()))
}
