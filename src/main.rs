use bizzpulse::configuration::get_configuration;
use bizzpulse::startup::Application;
use bizzpulse::telemetry;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = telemetry::get_subscriber(
        "bizzpulse".to_string(),
        "info".to_string(),
        std::io::stdout,
    );
    telemetry::init_subscriber(subscriber);

    let configuration = get_configuration().expect("Failed to read configuration.");
    let application = Application::build(&configuration).await?;
    tracing::info!(port = application.port(), "Starting the BizzPulse server");
    application.run_until_stopped().await?;

    Ok(())
}
