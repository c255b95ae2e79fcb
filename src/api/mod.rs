use actix_web::web;
mod handlers;

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .service(handlers::list_networks)
            .service(handlers::get_network)
            .service(handlers::get_warnings),
    );
}
