//! The contract factory used by the deploy scripts: deploys a compiled
//! contract by name with the given constructor arguments.

use alloy::{
    dyn_abi::DynSolValue,
    network::TransactionBuilder,
    primitives::Address,
    providers::{DynProvider, Provider},
    rpc::types::{TransactionReceipt, TransactionRequest},
};
use tracing::debug;

use crate::{
    artifacts::{ArtifactStore, ContractArtifact},
    constants::NUM_DEPLOY_CONFIRMATIONS,
    errors::ScriptError,
};

/// A capability to deploy a contract by name
#[allow(async_fn_in_trait)]
pub trait ContractDeployer {
    /// Deploy the named contract with the given constructor arguments,
    /// returning its address once the deployment is confirmed
    async fn deploy(
        &self,
        contract_name: &str,
        constructor_args: &[DynSolValue],
    ) -> Result<Address, ScriptError>;
}

/// Deploys contracts from their compiled artifacts over an RPC connection
pub struct RpcDeployer {
    /// The signing client used to send deployment transactions
    client: DynProvider,
    /// The compiled contract artifacts
    artifacts: ArtifactStore,
}

impl RpcDeployer {
    /// Create a deployer sending transactions through the given client
    pub fn new(client: DynProvider, artifacts: ArtifactStore) -> Self {
        Self { client, artifacts }
    }
}

impl ContractDeployer for RpcDeployer {
    async fn deploy(
        &self,
        contract_name: &str,
        constructor_args: &[DynSolValue],
    ) -> Result<Address, ScriptError> {
        let artifact = self.artifacts.load(contract_name)?;
        let tx = deploy_request(&artifact, constructor_args)?;

        let pending_tx = self
            .client
            .send_transaction(tx)
            .await
            .map_err(|e| ScriptError::ContractDeployment(format!("{contract_name}: {e}")))?;
        debug!(tx_hash = %pending_tx.tx_hash(), "sent {contract_name} deployment");

        let receipt = pending_tx
            .with_required_confirmations(NUM_DEPLOY_CONFIRMATIONS)
            .get_receipt()
            .await
            .map_err(|e| ScriptError::ContractDeployment(format!("{contract_name}: {e}")))?;

        deployed_address(contract_name, &receipt)
    }
}

/// Build the contract creation transaction for an artifact
pub fn deploy_request(
    artifact: &ContractArtifact,
    constructor_args: &[DynSolValue],
) -> Result<TransactionRequest, ScriptError> {
    let deploy_code = artifact.deploy_code(constructor_args)?;
    Ok(TransactionRequest::default().with_deploy_code(deploy_code))
}

/// Extract the address of a deployed contract from its creation receipt,
/// failing if the constructor reverted
pub fn deployed_address(
    contract_name: &str,
    receipt: &TransactionReceipt,
) -> Result<Address, ScriptError> {
    if !receipt.status() {
        return Err(ScriptError::ContractDeployment(format!(
            "{} constructor reverted in tx {:#x}",
            contract_name, receipt.transaction_hash
        )));
    }

    receipt.contract_address.ok_or_else(|| {
        ScriptError::ContractDeployment(format!(
            "no contract address in receipt of tx {:#x}",
            receipt.transaction_hash
        ))
    })
}
