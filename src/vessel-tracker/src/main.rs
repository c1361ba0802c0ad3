use tracing::error;
use tracing_subscriber::EnvFilter;
use vessel_tracker::{settings::Settings, startup::App};

#[tokio::main]
async fn main() {
    let settings = Settings::new().unwrap();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(settings.log_level.as_ref()));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let app = App::build(&settings).await.unwrap();

    if let Err(e) = app.run().await {
        error!("vessel tracker exited with an error: {e:?}");
    }
}
