use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use blog_service::{db, handlers};
use std::io;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        let mut terminate =
            signal(SignalKind::terminate()).expect("Failed to install SIGTERM handler");

        tokio::select! {
            _ = tokio::signal::ctrl_c() => {},
            _ = terminate.recv() => {},
        }
    }

    #[cfg(not(unix))]
    {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    }
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=debug,sqlx=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = match blog_service::Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::error!("Configuration loading failed: {}", e);
            eprintln!("ERROR: Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    tracing::info!("Starting blog-service v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Environment: {}", config.app.env);

    // Initialize database connection pool
    let db_pool = match db::create_pool(&config.database.url, config.database.max_connections).await
    {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!("Database pool creation failed: {}", e);
            eprintln!("ERROR: Failed to create database pool: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = db::run_migrations(&db_pool).await {
        tracing::error!("Database migration failed: {}", e);
        eprintln!("ERROR: Failed to run migrations: {}", e);
        std::process::exit(1);
    }

    tracing::info!("Connected to database");

    let bind_address = format!("{}:{}", config.app.host, config.app.port);
    tracing::info!("Starting HTTP server at {}", bind_address);

    // Create HTTP server
    let server = HttpServer::new(move || {
        // Build CORS configuration
        let cors_builder = Cors::default();
        let mut cors = cors_builder;
        for origin in config.cors.allowed_origins.split(',') {
            let origin = origin.trim();
            if origin == "*" {
                cors = cors.allow_any_origin();
            } else {
                cors = cors.allowed_origin(origin);
            }
        }
        cors = cors.allow_any_method().allow_any_header().max_age(3600);

        App::new()
            .app_data(web::Data::new(db_pool.clone()))
            .wrap(cors)
            .wrap(Logger::default())
            .wrap(tracing_actix_web::TracingLogger::default())
            .configure(handlers::configure)
    })
    .bind(&bind_address)?
    .workers(4)
    .disable_signals()
    .run();

    let server_handle = server.handle();
    tokio::pin!(server);

    let shutdown = shutdown_signal();
    tokio::pin!(shutdown);

    tokio::select! {
        result = &mut server => result,
        _ = &mut shutdown => {
            tracing::info!("Shutdown signal received");
            server_handle.stop(true).await;
            tracing::info!("Blog-service shutting down");
            Ok(())
        }
    }
}
