use anyhow::Result;
use ifsc_directory::application::{
    ports::{ClockPort, SlugGeneratorPort},
    queries::sitemap::SitemapSettings,
    services::ApplicationServices,
};
use ifsc_directory::config::AppConfig;
use ifsc_directory::domain::branch::BranchCatalog;
use ifsc_directory::infrastructure::{
    database,
    repositories::{CachedBranchCatalog, PostgresBranchCatalog},
    time::SystemClock,
    util::DefaultSlugGenerator,
};
use ifsc_directory::presentation::http::{
    routes::build_router_with_rate_limiter, state::HttpState,
};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let pool = database::init_pool(
        config.database_url(),
        config.database_max_connections(),
        config.database_acquire_timeout(),
    )?;
    match database::ping(&pool).await {
        Ok(()) => tracing::info!("catalog database reachable"),
        Err(err) => tracing::warn!(error = %err, "catalog database not reachable yet"),
    }

    let mut catalog: Arc<dyn BranchCatalog> = Arc::new(PostgresBranchCatalog::new(pool.clone()));
    if !config.name_cache_ttl().is_zero() {
        catalog = Arc::new(CachedBranchCatalog::new(catalog, config.name_cache_ttl()));
    }

    let clock: Arc<ClockPort> = Arc::new(SystemClock);
    let slugger: Arc<SlugGeneratorPort> = Arc::new(DefaultSlugGenerator);

    let services = Arc::new(ApplicationServices::new(
        catalog,
        clock,
        slugger,
        SitemapSettings {
            base_url: config.site_base_url().to_string(),
            page_size: config.sitemap_page_size(),
        },
    ));

    let state = HttpState {
        services,
        site_base_url: Arc::from(config.site_base_url()),
    };

    let app = build_router_with_rate_limiter(state, config.rate_limit_enabled());
    let service = app.into_make_service_with_connect_info::<SocketAddr>();

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(listener, service)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    Ok(())
}

const DEFAULT_LOG_FILTER: &str = "info,ifsc_directory=debug,tower_http=info,sqlx=warn";

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let installed = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .try_init();

    if installed.is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install CTRL+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install terminate handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    let source = tokio::select! {
        () = ctrl_c => "ctrl-c",
        () = terminate => "sigterm",
    };
    tracing::info!(source, "shutting down; draining in-flight requests");
}
