mod app_system;
mod clients;
mod domain;
mod error;

#[cfg(test)]
mod mock_framework;

use std::process::ExitCode;
use tracing::info;
use crate::app_system::{setup_tracing, Config, ProductLoader};

#[tokio::main]
async fn main() -> ExitCode {
    setup_tracing();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::from(2);
        }
    };

    info!(
        base_url = %config.base_url,
        product_id = %config.product_id,
        mode = ?config.mode,
        on_error = ?config.on_error,
        "Starting product loader"
    );

    let loader = ProductLoader::new(config);
    match loader.load_timed().await {
        Ok(report) => {
            print!("{}", report);
            ExitCode::SUCCESS
        }
        // Only reachable with the `propagate` policy; `exit` terminates inside the loader.
        Err(e) => {
            println!("{}", e);
            ExitCode::FAILURE
        }
    }
}
