//! Utilities for the deploy scripts.

use std::{fs, io, path::Path, str::FromStr};

use alloy::{
    primitives::Address,
    providers::{DynProvider, Provider, ProviderBuilder},
    signers::local::PrivateKeySigner,
    transports::http::reqwest::Url,
};
use serde::Serialize;
use serde_json::{ser::PrettyFormatter, Map, Serializer, Value};
use tracing::{info, Level};
use tracing_subscriber::{fmt::writer::MakeWriterExt, EnvFilter};

use crate::{constants::DEPLOYMENTS_FILE_INDENT, errors::ScriptError};

/// Sets up the logger, writing warnings and errors to stderr and everything
/// else to stdout. The filter is read from `RUST_LOG`, defaulting to `info`.
pub fn setup_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let writer = io::stderr.with_max_level(Level::WARN).or_else(io::stdout);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_target(false)
        .init();
}

/// Sets up the signing client with which to deploy the contracts,
/// checking that the node is reachable before returning it
pub async fn setup_client(priv_key: &str, rpc_url: &str) -> Result<DynProvider, ScriptError> {
    let signer = PrivateKeySigner::from_str(priv_key)
        .map_err(|e| ScriptError::ClientInitialization(e.to_string()))?;
    let url = Url::parse(rpc_url).map_err(|e| ScriptError::ClientInitialization(e.to_string()))?;

    let deployer = signer.address();
    let provider = ProviderBuilder::new().wallet(signer).connect_http(url);

    let chain_id = provider
        .get_chain_id()
        .await
        .map_err(|e| ScriptError::ClientInitialization(format!("{rpc_url}: {e}")))?;
    info!("Deploying from {deployer:#x} to chain {chain_id} at {rpc_url}");

    Ok(DynProvider::new(provider))
}

/// Records a deployed address in the deployments file under the given key,
/// creating the file if it doesn't exist and keeping any other entries
pub fn write_deployed_address(
    file_path: &Path,
    contract_key: &str,
    address: Address,
) -> Result<(), ScriptError> {
    let mut deployments = if file_path.exists() {
        read_deployments(file_path)?
    } else {
        Map::new()
    };

    deployments.insert(contract_key.to_string(), Value::String(format!("{address:#x}")));

    let mut contents = Vec::new();
    let formatter = PrettyFormatter::with_indent(DEPLOYMENTS_FILE_INDENT);
    let mut serializer = Serializer::with_formatter(&mut contents, formatter);
    deployments
        .serialize(&mut serializer)
        .map_err(|e| ScriptError::WriteDeployments(e.to_string()))?;
    contents.push(b'\n');

    fs::write(file_path, contents).map_err(|e| ScriptError::WriteDeployments(e.to_string()))
}

/// Reads the deployments file, which must hold a JSON object
pub fn read_deployments(file_path: &Path) -> Result<Map<String, Value>, ScriptError> {
    let contents =
        fs::read_to_string(file_path).map_err(|e| ScriptError::ReadDeployments(e.to_string()))?;

    match serde_json::from_str(&contents) {
        Ok(Value::Object(deployments)) => Ok(deployments),
        Ok(_) => Err(ScriptError::ReadDeployments(format!(
            "{} does not hold a JSON object",
            file_path.display()
        ))),
        Err(e) => Err(ScriptError::ReadDeployments(e.to_string())),
    }
}
