//! Credential Gate CLI
//!
//! Startup gate that validates a secret credential against a remote endpoint
//! before the surrounding process is allowed to proceed.

use anyhow::Result;
use clap::{Parser, Subcommand};
use credential_gate::{CredentialValidator, ValidatorConfig};
use secrecy::SecretString;
use std::process;
use std::time::Duration;

/// Startup credential validation gate
#[derive(Parser)]
#[command(name = "credential-gate")]
#[command(version = "0.1.0")]
#[command(about = "Validates a secret credential against a remote endpoint", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate the credential once and exit 0 on success, 1 on failure
    Check {
        /// Environment variable holding the credential
        #[arg(long, default_value = "CREDENTIAL_GATE_KEY")]
        env_var: String,

        /// Override the validation endpoint URL
        #[arg(long)]
        endpoint: Option<String>,

        /// Wait budget in milliseconds
        #[arg(long, default_value = "10000")]
        timeout_ms: u64,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let exit_code = match cli.command {
        Commands::Check {
            env_var,
            endpoint,
            timeout_ms,
        } => check_command(env_var, endpoint, timeout_ms).await?,
    };

    process::exit(exit_code);
}

async fn check_command(
    env_var: String,
    endpoint: Option<String>,
    timeout_ms: u64,
) -> Result<i32> {
    println!("\n🔐 credential-gate\n");

    let Ok(value) = std::env::var(&env_var) else {
        eprintln!("❌ Environment variable {} is not set", env_var);
        eprintln!("  - .envまたはシェル環境に認証情報を設定してください");
        return Ok(1);
    };
    let credential = SecretString::new(value.into());

    let mut config = ValidatorConfig::default().with_timeout(Duration::from_millis(timeout_ms));
    if let Some(endpoint) = endpoint {
        config = config.with_endpoint(endpoint);
    }

    let validator = CredentialValidator::with_config(config);

    match validator.validate(&credential).await {
        Ok(_) => {
            println!("\n✅ Credential accepted");
            Ok(0)
        }
        Err(e) => {
            eprintln!("\n❌ {}", e);
            for action in e.suggested_actions() {
                eprintln!("  - {}", action);
            }
            Ok(1)
        }
    }
}
