use afcon_api::{app, AppState};
use afcon_booking::{spawn_expiry_sweeper, SimulatedSubmitter};
use afcon_core::submission::BookingSubmitter;
use afcon_store::app_config::SubmissionMode;
use afcon_store::{Config, HotelBookingClient, HttpCatalogClient};
use anyhow::Context;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "afcon_api=debug,afcon_booking=debug,tower_http=debug".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load().context("Failed to load config")?;
    tracing::info!("Starting AFCON booking API on port {}", config.server.port);

    let catalog = HttpCatalogClient::new(&config.api).context("Failed to build catalog client")?;

    let submitter: Arc<dyn BookingSubmitter> = match config.submission.mode {
        SubmissionMode::Simulated => {
            tracing::info!(
                "Using simulated submission ({:?} delay)",
                config.submission.simulated_delay()
            );
            Arc::new(SimulatedSubmitter::new(config.submission.simulated_delay()))
        }
        SubmissionMode::Remote => {
            tracing::info!("Submitting bookings to {}", config.api.hotel_base_url);
            Arc::new(
                HotelBookingClient::new(&config.api)
                    .context("Failed to build hotel booking client")?,
            )
        }
    };

    let state = AppState::new(Arc::new(catalog), submitter);
    spawn_expiry_sweeper(
        state.flows.clone(),
        config.flows.idle_ttl(),
        config.flows.sweep_interval(),
    );
    tracing::info!(
        "Idle booking flows expire after {:?}",
        config.flows.idle_ttl()
    );

    let app = app(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
