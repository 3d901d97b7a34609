mod commands;
pub mod config;
pub mod llm;
pub mod preprocessing;
pub mod telemetry;

use crate::commands::*;
use crate::config::{Config, ConfigError};
use crate::llm::{CompletionClient, CompletionError};
use thiserror::Error;
use tracing::{error, info};

#[derive(Error, Debug)]
pub enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Client(#[from] CompletionError),
}

/// Resolves configuration and builds the completion client. Runs before any
/// window or command handler exists, so a missing credential stops here.
pub fn bootstrap(config: Result<Config, ConfigError>) -> Result<CompletionClient, StartupError> {
    let config = config?;
    let client = CompletionClient::new(&config)?;
    info!(model = client.model_name(), "Completion client ready");
    Ok(client)
}

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    telemetry::init_logging();

    let client = match bootstrap(Config::from_env()) {
        Ok(client) => client,
        Err(e) => {
            error!(error = %e, "Startup aborted");
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    tauri::Builder::default()
        .plugin(tauri_plugin_opener::init())
        .manage(client)
        .invoke_handler(tauri::generate_handler![
            identify_specimen,
            explain_category,
            list_categories
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_credential_fails_before_client_exists() {
        let result = bootstrap(Config::from_lookup(|_| None));
        match result {
            Err(StartupError::Config(ConfigError::MissingVar(var))) => {
                assert_eq!(var, "OPENAI_API_KEY")
            }
            Err(other) => panic!("unexpected error: {}", other),
            Ok(_) => panic!("startup should have failed"),
        }
    }

    #[test]
    fn credential_present_yields_client() {
        let config = Config::from_lookup(|_| Some("sk-test".to_string()));
        let client = bootstrap(config).unwrap();
        assert_eq!(client.model_name(), "gpt-3.5-turbo");
    }
}
