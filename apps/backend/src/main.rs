use actix_web::{web, App, HttpServer};
use crossline_backend::config::db::{DbKind, DbProfile};
use crossline_backend::config::game::GameSettings;
use crossline_backend::infra::state::build_state;
use crossline_backend::middleware::{cors_middleware, RequestTrace, StructuredLogger, TraceSpan};
use crossline_backend::routes;
use crossline_backend::state::security_config::{SecurityConfig, DEFAULT_PASSWORD_HASH_COST};
use tracing::{error, info};

mod telemetry;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    let host = std::env::var("BACKEND_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = match std::env::var("BACKEND_PORT")
        .unwrap_or_else(|_| "3001".to_string())
        .parse::<u16>()
    {
        Ok(port) => port,
        Err(_) => {
            error!("BACKEND_PORT must be a valid port number");
            std::process::exit(1);
        }
    };

    let jwt = match std::env::var("BACKEND_JWT_SECRET") {
        Ok(jwt) if !jwt.is_empty() => jwt,
        _ => {
            error!("BACKEND_JWT_SECRET must be set");
            std::process::exit(1);
        }
    };

    let hash_cost = match std::env::var("BACKEND_BCRYPT_COST") {
        Err(_) => DEFAULT_PASSWORD_HASH_COST,
        Ok(raw) => match raw.parse::<u32>() {
            Ok(cost) if (4..=31).contains(&cost) => cost,
            _ => {
                error!("BACKEND_BCRYPT_COST must be an integer in 4..=31");
                std::process::exit(1);
            }
        },
    };

    let (db_kind, game_settings) = match DbKind::from_env().and_then(|kind| {
        GameSettings::from_env().map(|settings| (kind, settings))
    }) {
        Ok(cfg) => cfg,
        Err(e) => {
            error!(error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };

    let app_state = match build_state()
        .with_db(db_kind, DbProfile::Prod)
        .with_security(SecurityConfig::new(jwt.as_bytes()).with_password_hash_cost(hash_cost))
        .with_game_settings(game_settings)
        .build()
        .await
    {
        Ok(state) => state,
        Err(e) => {
            error!(error = %e, "failed to build application state");
            std::process::exit(1);
        }
    };

    info!(host = %host, port, db_kind = ?db_kind, "crossline backend starting");

    let data = web::Data::new(app_state);

    HttpServer::new(move || {
        App::new()
            .wrap(TraceSpan)
            .wrap(RequestTrace)
            .wrap(StructuredLogger)
            .wrap(cors_middleware())
            .app_data(data.clone())
            .configure(routes::configure)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
