//! Implementation of the governance deploy script

use std::path::Path;

use alloy::{dyn_abi::DynSolValue, primitives::Address};
use tracing::info;

use crate::{
    constants::{FAILURE_EXIT_CODE, SUCCESS_EXIT_CODE},
    deployer::ContractDeployer,
    errors::ScriptError,
    types::{GovernanceContract, GovernanceDeployments},
    utils::write_deployed_address,
};

/// Deploy the identity registry, the ZKP verifier, and the governance
/// contract, in that order.
///
/// The governance contract is constructed with the addresses of the first
/// two. Each deployment is confirmed before the next one is sent, and the
/// first failure aborts the sequence; contracts deployed before the failure
/// are left in place.
///
/// If a deployments file is given, each address is recorded in it as soon as
/// its deployment is confirmed.
pub async fn deploy_governance_stack(
    deployer: &impl ContractDeployer,
    deployments_path: Option<&Path>,
) -> Result<GovernanceDeployments, ScriptError> {
    let identity =
        deploy_contract(deployer, GovernanceContract::Identity, &[], deployments_path).await?;

    let zkp_verifier =
        deploy_contract(deployer, GovernanceContract::ZkpVerifier, &[], deployments_path).await?;

    let governance_args = [
        DynSolValue::Address(identity),
        DynSolValue::Address(zkp_verifier),
    ];
    let governance = deploy_contract(
        deployer,
        GovernanceContract::Governance,
        &governance_args,
        deployments_path,
    )
    .await?;

    Ok(GovernanceDeployments {
        identity,
        zkp_verifier,
        governance,
    })
}

/// Deploy a single contract, logging and optionally recording its address
async fn deploy_contract(
    deployer: &impl ContractDeployer,
    contract: GovernanceContract,
    constructor_args: &[DynSolValue],
    deployments_path: Option<&Path>,
) -> Result<Address, ScriptError> {
    let address = deployer.deploy(contract.name(), constructor_args).await?;
    info!("{}", deployed_message(contract, address));

    if let Some(path) = deployments_path {
        write_deployed_address(path, contract.name(), address)?;
    }

    Ok(address)
}

/// The line logged for a deployed contract, with its checksummed address
fn deployed_message(contract: GovernanceContract, address: Address) -> String {
    format!("{} deployed to: {}", contract.label(), address)
}

/// The process exit code for the outcome of a script
pub fn exit_code<T>(result: &Result<T, ScriptError>) -> u8 {
    match result {
        Ok(_) => SUCCESS_EXIT_CODE,
        Err(_) => FAILURE_EXIT_CODE,
    }
}
