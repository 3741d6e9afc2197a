use starbase::server::{config::Config, error::Error, model::app::AppState, router, startup};
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = run(config).await {
        tracing::error!("Server failed: {}", e);
        std::process::exit(1);
    }
}

async fn run(config: Config) -> Result<(), Error> {
    let session = startup::connect_to_session(&config).await?;
    let db = startup::connect_to_database(&config).await?;

    startup::seed_commander(&config, &db).await?;
    startup::seed_missions(&config, &db).await?;

    tracing::info!("Starting server");

    let app = router::routes()
        .with_state(AppState::from(db))
        .layer(session);

    startup::serve(config.listen_addr, app).await
}
