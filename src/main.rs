//! dag-sdk: inspect type definitions through an engine session.
//!
//! ## Example Usage
//!
//! ```bash
//! # Describe a function argument
//! dag-sdk function-arg fnarg-123
//!
//! # Describe a type definition against an explicit endpoint
//! dag-sdk --endpoint http://127.0.0.1:8080/query type-def td-42
//! ```
//!
//! Without `--endpoint`, the session is configured from `DAGGER_SESSION_*`
//! environment variables. Logs go to stderr; set `RUST_LOG` to tune them.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde_json::{json, Value};
use tracing_subscriber::EnvFilter;

use dag_sdk::{Client, FunctionArgId, SessionConfig, TypeDef, TypeDefId};
use dag_transport::decode;

#[derive(Parser)]
#[command(
    name = "dag-sdk",
    author,
    version,
    about = "Inspect engine type definitions"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Session endpoint URL (default: from DAGGER_SESSION_* env)
    #[arg(long, global = true)]
    endpoint: Option<String>,

    /// Session token (default: DAGGER_SESSION_TOKEN)
    #[arg(long, global = true)]
    token: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Describe a function argument by ID
    FunctionArg {
        /// FunctionArg ID
        id: String,
    },
    /// Describe a type definition by ID
    TypeDef {
        /// TypeDef ID
        id: String,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let client = Client::with_config(session_config(&cli));

    let output = match &cli.command {
        Commands::FunctionArg { id } => describe_function_arg(&client, id)?,
        Commands::TypeDef { id } => describe_type_def_by_id(&client, id)?,
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn session_config(cli: &Cli) -> SessionConfig {
    let mut config = SessionConfig::from_env();
    if let Some(endpoint) = &cli.endpoint {
        config.endpoint = endpoint.clone();
    }
    if let Some(token) = &cli.token {
        config.token = Some(token.clone());
    }
    config
}

fn describe_function_arg(client: &Client, id: &str) -> Result<Value> {
    let arg = client.load_function_arg_from_id(&FunctionArgId::new(id));
    let context = || format!("failed to load FunctionArg {}", id);

    let default_value = arg.default_value().with_context(context)?;
    let default_value = decode::parse_json(&default_value).with_context(context)?;

    Ok(json!({
        "id": arg.id().with_context(context)?.to_string(),
        "name": arg.name().with_context(context)?,
        "description": arg.description().with_context(context)?,
        "defaultValue": default_value,
        "typeDef": describe_type_def(&arg.type_def()).with_context(context)?,
    }))
}

fn describe_type_def_by_id(client: &Client, id: &str) -> Result<Value> {
    let type_def = client.load_type_def_from_id(&TypeDefId::new(id));
    let context = || format!("failed to load TypeDef {}", id);

    let mut output = describe_type_def(&type_def).with_context(context)?;
    output["id"] = json!(type_def.id().with_context(context)?.to_string());
    Ok(output)
}

fn describe_type_def(type_def: &TypeDef) -> Result<Value> {
    Ok(json!({
        "kind": type_def.kind()?.as_str(),
        "optional": type_def.optional()?,
    }))
}
