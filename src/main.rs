use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use b12_apply::{Result, SubmissionPayload, SubmitClient, SubmitConfig, generate_timestamp};

#[tokio::main]
async fn main() -> ExitCode {
    // Logs go to stderr so stdout carries exactly the receipt.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    match run().await {
        Ok(receipt) => {
            println!("{receipt}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<String> {
    let config = SubmitConfig::from_env()?;

    let timestamp = generate_timestamp();
    tracing::info!(endpoint = %config.endpoint, %timestamp, "submitting application");

    let payload = SubmissionPayload::new(&config.applicant, timestamp);
    let client = SubmitClient::from_config(&config)?;

    client.submit(&payload).await
}
