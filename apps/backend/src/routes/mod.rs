use actix_web::web;

use crate::middleware::JwtExtract;

pub mod auth;
pub mod games;
pub mod health;

/// Mount every route. The binary and the integration tests share this so
/// both see the same auth wrapping.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/health").configure(health::configure_routes));
    cfg.service(web::scope("/api/auth").configure(auth::configure_routes));
    cfg.service(
        web::scope("/api/games")
            .wrap(JwtExtract)
            .configure(games::configure_routes),
    );
}
