use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use checkout::infrastructure::AppState;
use checkout::{config, seed};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "checkout=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Load configuration
    dotenvy::dotenv().ok();

    // Check for --profile CLI argument
    let args: Vec<String> = std::env::args().collect();
    let profile = args
        .iter()
        .position(|arg| arg == "--profile")
        .and_then(|pos| args.get(pos + 1).cloned());

    let config = config::Config::load(profile);
    tracing::info!(profile = %config.profile, "Opening {}", config.database_url);

    let state = AppState::connect(&config.database_url).await?;

    if config.seed_demo {
        tracing::info!("Seeding demo data...");
        if let Err(e) = seed::seed_demo_data(&state).await {
            tracing::error!("Failed to seed data: {}", e);
        } else {
            tracing::info!("Demo data seeded successfully.");
        }
    }

    let orders = state.order_repo.find_all().await?;
    tracing::info!("{} orders stored", orders.len());
    println!("{}", serde_json::to_string_pretty(&orders)?);

    state.shutdown().await?;

    Ok(())
}
