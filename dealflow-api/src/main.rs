use actix_cors::Cors;
use actix_web::{get, web, App, HttpResponse, HttpServer, Responder};
use clap::Parser;
use std::sync::Arc;
use tracing_subscriber::prelude::*;

mod config;
mod database;
mod handlers;
mod helpers;
mod integrations;

#[get("/")]
async fn hello() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "message": "dealflow API"
    }))
}

#[get("/health")]
async fn health(db: web::Data<Arc<database::Database>>) -> impl Responder {
    // Test database connection
    match db.connection.lock() {
        Ok(_) => HttpResponse::Ok().json(serde_json::json!({
            "status": "healthy",
            "database": "connected"
        })),
        Err(_) => HttpResponse::InternalServerError().json(serde_json::json!({
            "status": "unhealthy",
            "database": "disconnected"
        })),
    }
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(long)]
    log_file_path: Option<String>,
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    if let Some(log_path) = args.log_file_path {
        let log_path = std::path::Path::new(&log_path);
        let file_appender = tracing_appender::rolling::never(
            log_path.parent().unwrap_or(std::path::Path::new(".")),
            log_path
                .file_name()
                .unwrap_or(std::ffi::OsStr::new("dealflow-api.log")),
        );
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
        std::mem::forget(guard);

        tracing_subscriber::registry()
            .with(env_filter.clone())
            .with(
                tracing_subscriber::fmt::layer()
                    .with_ansi(true)
                    .with_writer(std::io::stdout),
            )
            .with(
                tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .with_writer(non_blocking),
            )
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }

    // Initialize database
    let db = helpers::database::initialize_database().expect("Failed to initialize database");

    tracing::info!(
        "Database initialized at: {:?}",
        helpers::database::get_db_path().unwrap()
    );

    // Load config
    let (config, config_path) = config::ApiConfig::load().expect("Failed to load config");
    tracing::info!("Loaded config from {:?}", config_path);

    // Get server config or use defaults
    let (host, port) = if let Some(server_config) = &config.server {
        (server_config.host.clone(), server_config.port)
    } else {
        ("127.0.0.1".to_string(), 8000)
    };

    tracing::info!("Server will listen on {}:{}", host, port);

    // Initialize the AI provider client; the key may also come from the
    // environment so the config file never has to hold it
    let api_key = config
        .api_keys
        .as_ref()
        .and_then(|keys| keys.openai_api_key.clone())
        .or_else(|| std::env::var("OPENAI_API_KEY").ok());
    if api_key.is_none() {
        tracing::warn!("No OpenAI API key configured; process-interaction will be unavailable");
    }

    let openai_config = config.openai.clone().unwrap_or_default();
    let provider = Arc::new(integrations::openai::OpenAiClient::new(
        &openai_config,
        api_key,
    ));

    let server = HttpServer::new(move || {
        // Configure CORS
        let cors = if let Some(cors_config) = &config.cors {
            let mut cors_builder = Cors::default();
            for origin in &cors_config.allowed_origins {
                cors_builder = cors_builder.allowed_origin(origin);
            }
            cors_builder
                .allowed_methods(vec!["GET", "POST", "OPTIONS"])
                .allowed_headers(vec!["Authorization", "Accept", "Content-Type"])
                .max_age(3600)
        } else {
            Cors::default()
                .allow_any_origin()
                .allowed_methods(vec!["GET", "POST", "OPTIONS"])
                .allowed_headers(vec!["Authorization", "Accept", "Content-Type"])
                .max_age(3600)
        };

        App::new()
            .wrap(cors)
            .app_data(web::Data::new(db.clone()))
            .app_data(web::Data::new(provider.clone()))
            .service(hello)
            .service(health)
            .route(
                "/api/process-interaction",
                web::post().to(handlers::interactions::process_interaction),
            )
            .route("/api/companies", web::post().to(handlers::companies::create_company))
            .route("/api/companies", web::get().to(handlers::companies::list_companies))
            .route(
                "/api/companies/search",
                web::get().to(handlers::companies::search_companies),
            )
            .route("/api/contacts", web::post().to(handlers::contacts::create_contact))
            .route("/api/contacts", web::get().to(handlers::contacts::list_contacts))
            .route("/api/deals", web::post().to(handlers::deals::create_deal))
            .route("/api/deals", web::get().to(handlers::deals::list_deals))
            .route(
                "/api/interactions",
                web::get().to(handlers::interactions::list_interactions),
            )
            .route("/api/insights", web::get().to(handlers::insights::list_insights))
    })
    .bind((host.as_str(), port))?
    .run();

    server.await
}
