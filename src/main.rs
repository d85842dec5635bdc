//! `vibe` 바이너리 진입점.

use vibe::domain::error::ExitCode;
use vibe::interface::cli::{AppComposition, Cli, run_action};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let action = match Cli::parse_action() {
        Ok(action) => action,
        Err(msg) => {
            eprintln!("error: {msg}");
            std::process::exit(ExitCode::InvalidArgument.code());
        }
    };

    let composition = AppComposition::default();

    match run_action(&composition, action).await {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("error: {err:#}");
            std::process::exit(ExitCode::from_error(&err).code());
        }
    }
}
