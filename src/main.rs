use anyhow::{Context, Result};
use hotel_booking::{AppConfig, Console, FrontDesk, HotelState};
use tokio::io::BufReader;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    // Logs go to stderr so they never mix with the prompts on stdout
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let config = AppConfig::from_env().context("failed to load configuration")?;
    tracing::info!(
        export_path = %config.export_path.display(),
        export_format = %config.export_format,
        export_on_exit = config.export_on_exit,
        "configuration loaded"
    );

    let verifier = config.credential_verifier();
    let mut desk = FrontDesk::new(HotelState::seeded(), config, verifier);
    let mut console = Console::new(BufReader::new(tokio::io::stdin()), tokio::io::stdout());

    desk.run(&mut console)
        .await
        .context("front desk stopped unexpectedly")?;

    Ok(())
}
