mod app;
mod modules;
mod types;
mod utils;

#[cfg(test)]
mod test_utils;

use crate::{
    app::App,
    types::{AppEnvironment, Config},
};
use std::process::ExitCode;
use tracing_subscriber::prelude::*;

fn init_tracing(environment: &AppEnvironment) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(environment.default_log_filter()));

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(filter)
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            init_tracing(&AppEnvironment::Development);
            tracing::error!("Invalid configuration: {}", err);
            return ExitCode::FAILURE;
        }
    };

    init_tracing(&config.app.environment);

    let app = match App::new(config).await {
        Ok(app) => app,
        Err(err) => {
            tracing::error!("Failed to initialise app: {}", err);
            return ExitCode::FAILURE;
        }
    };

    if let Err(err) = app.serve().await {
        tracing::error!("Server error: {}", err);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
