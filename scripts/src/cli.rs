//! Definitions of CLI arguments for the deploy script

use std::path::PathBuf;

use clap::Parser;

use crate::{
    artifacts::ArtifactStore,
    commands::deploy_governance_stack,
    constants::{DEFAULT_ARTIFACTS_DIR, DEFAULT_PKEY, DEFAULT_RPC_URL, FAILURE_EXIT_CODE},
    deployer::RpcDeployer,
    errors::ScriptError,
    types::GovernanceDeployments,
    utils::setup_client,
};

/// Deploy the identity registry, ZKP verifier, and privacy-preserving
/// governance contracts to an EVM chain
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Network RPC URL
    #[arg(short, long, env = "RPC_URL", default_value = DEFAULT_RPC_URL)]
    pub rpc_url: String,

    /// Private key of the deployer, defaults to the first dev node account
    #[arg(long = "pkey", env = "PKEY", default_value = DEFAULT_PKEY, hide_default_value = true)]
    pub priv_key: String,

    /// Directory containing the compiled contract artifacts
    #[arg(short, long, env = "ARTIFACTS_DIR", default_value = DEFAULT_ARTIFACTS_DIR)]
    pub artifacts: PathBuf,

    /// Path to a JSON file in which to record the deployed addresses
    #[arg(short, long)]
    pub deployments: Option<PathBuf>,
}

impl Cli {
    /// Connect to the network and deploy the governance stack
    pub async fn run(self) -> Result<GovernanceDeployments, ScriptError> {
        let client = setup_client(&self.priv_key, &self.rpc_url).await?;
        let deployer = RpcDeployer::new(client, ArtifactStore::new(self.artifacts));

        deploy_governance_stack(&deployer, self.deployments.as_deref()).await
    }
}

/// The exit code for a failure to parse the arguments, or `None` when clap
/// should exit on its own path, as it does after printing help or version
pub fn parse_error_exit_code(err: &clap::Error) -> Option<u8> {
    err.use_stderr().then_some(FAILURE_EXIT_CODE)
}
