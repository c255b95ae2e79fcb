use std::sync::Arc;

use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{web, App, HttpServer};
use dotenv::dotenv;
use log::{info, warn};

use network_profiles::{
    api,
    config::Config,
    errors::CustomError,
    services::{
        credentials::EnvCredentialProvider, network_config, network_table::NetworkTable,
        resolver::NetworkProfileResolver,
    },
};

fn load_resolver(config: &Config) -> Result<NetworkProfileResolver, CustomError> {
    let table = match &config.networks_file {
        Some(path) => {
            info!("loading network table from {}", path.display());
            NetworkTable::from_file(path)?
        }
        None => network_config::default_table()?,
    };
    Ok(NetworkProfileResolver::new(table, Arc::new(EnvCredentialProvider)))
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init();

    let (config, resolver) = match Config::from_env().and_then(|config| {
        let resolver = load_resolver(&config)?;
        Ok((config, resolver))
    }) {
        Ok(loaded) => loaded,
        Err(e) => {
            log::error!("{e}");
            return Err(std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()));
        }
    };

    let warnings = resolver.validate_all();
    for warning in &warnings {
        warn!("{warning}");
    }
    info!(
        "loaded {} networks ({} warnings)",
        resolver.names().count(),
        warnings.len()
    );

    let resolver = web::Data::new(resolver);

    HttpServer::new(move || {
        let cors = Cors::default()
            .allowed_origin("http://localhost:8080")
            .allowed_origin("http://localhost:5173")
            .allowed_methods(vec!["GET"])
            .allowed_headers(vec![header::CONTENT_TYPE, header::ACCEPT]);
        App::new()
            .app_data(resolver.clone())
            .configure(api::config)
            .wrap(cors)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
