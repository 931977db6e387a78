//! Tests of the deploy sequence against a scripted contract factory

use std::{collections::HashMap, sync::Mutex};

use alloy::{
    dyn_abi::DynSolValue,
    primitives::{address, Address},
};
use eyre::Result;
use scripts::{
    commands::{deploy_governance_stack, exit_code},
    constants::{
        FAILURE_EXIT_CODE, GOVERNANCE_CONTRACT_NAME, IDENTITY_CONTRACT_NAME, SUCCESS_EXIT_CODE,
        ZKP_VERIFIER_CONTRACT_NAME,
    },
    deployer::ContractDeployer,
    errors::ScriptError,
};

/// The address the identity contract is deployed to
const IDENTITY_ADDRESS: Address = address!("0x5FbDB2315678afecb367f032d93F642f64180aa3");
/// The address the verifier contract is deployed to
const VERIFIER_ADDRESS: Address = address!("0xe7f1725E7734CE288F8367e1Bb143E90bb3F0512");
/// The address the governance contract is deployed to
const GOVERNANCE_ADDRESS: Address = address!("0x9fE46736679d2D9a65F0992F2272dE9f3c7fa6e0");

/// A contract factory with a fixed outcome per contract name
struct ScriptedDeployer {
    /// The outcome of deploying each contract
    outcomes: HashMap<&'static str, Result<Address, ScriptError>>,
    /// The deployments requested so far, in order
    calls: Mutex<Vec<(String, Vec<DynSolValue>)>>,
}

impl ScriptedDeployer {
    /// A factory under which every deployment succeeds
    fn new() -> Self {
        let outcomes = HashMap::from([
            (IDENTITY_CONTRACT_NAME, Ok(IDENTITY_ADDRESS)),
            (ZKP_VERIFIER_CONTRACT_NAME, Ok(VERIFIER_ADDRESS)),
            (GOVERNANCE_CONTRACT_NAME, Ok(GOVERNANCE_ADDRESS)),
        ]);

        Self { outcomes, calls: Mutex::new(Vec::new()) }
    }

    /// Make the deployment of the given contract fail
    fn failing(mut self, contract_name: &'static str, err: ScriptError) -> Self {
        self.outcomes.insert(contract_name, Err(err));
        self
    }

    /// The contracts deployed so far, in order
    fn deployed_names(&self) -> Vec<String> {
        self.calls.lock().unwrap().iter().map(|(name, _)| name.clone()).collect()
    }

    /// The constructor arguments the given contract was deployed with
    fn args_for(&self, contract_name: &str) -> Option<Vec<DynSolValue>> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .find(|(name, _)| name == contract_name)
            .map(|(_, args)| args.clone())
    }
}

impl ContractDeployer for ScriptedDeployer {
    async fn deploy(
        &self,
        contract_name: &str,
        constructor_args: &[DynSolValue],
    ) -> Result<Address, ScriptError> {
        self.calls.lock().unwrap().push((contract_name.to_string(), constructor_args.to_vec()));

        self.outcomes
            .get(contract_name)
            .cloned()
            .unwrap_or_else(|| Err(ScriptError::ArtifactNotFound(contract_name.to_string())))
    }
}

#[tokio::test]
async fn test_governance_receives_prior_addresses() -> Result<()> {
    let deployer = ScriptedDeployer::new();
    let res = deploy_governance_stack(&deployer, None).await;
    assert_eq!(exit_code(&res), SUCCESS_EXIT_CODE);

    let deployments = res?;
    assert_eq!(deployments.identity, IDENTITY_ADDRESS);
    assert_eq!(deployments.zkp_verifier, VERIFIER_ADDRESS);
    assert_eq!(deployments.governance, GOVERNANCE_ADDRESS);

    assert_eq!(deployer.args_for(IDENTITY_CONTRACT_NAME), Some(vec![]));
    assert_eq!(deployer.args_for(ZKP_VERIFIER_CONTRACT_NAME), Some(vec![]));
    assert_eq!(
        deployer.args_for(GOVERNANCE_CONTRACT_NAME),
        Some(vec![
            DynSolValue::Address(IDENTITY_ADDRESS),
            DynSolValue::Address(VERIFIER_ADDRESS),
        ])
    );

    Ok(())
}

#[tokio::test]
async fn test_verifier_failure_skips_governance() -> Result<()> {
    let deployer = ScriptedDeployer::new().failing(
        ZKP_VERIFIER_CONTRACT_NAME,
        ScriptError::ContractDeployment("nonce too low".to_string()),
    );

    let res = deploy_governance_stack(&deployer, None).await;
    assert_eq!(exit_code(&res), FAILURE_EXIT_CODE);
    assert_eq!(
        res.unwrap_err(),
        ScriptError::ContractDeployment("nonce too low".to_string())
    );

    assert_eq!(
        deployer.deployed_names(),
        [IDENTITY_CONTRACT_NAME, ZKP_VERIFIER_CONTRACT_NAME]
    );
    assert!(deployer.args_for(GOVERNANCE_CONTRACT_NAME).is_none());

    Ok(())
}

#[tokio::test]
async fn test_missing_contract_aborts() -> Result<()> {
    let deployer = ScriptedDeployer::new().failing(
        IDENTITY_CONTRACT_NAME,
        ScriptError::ArtifactNotFound(IDENTITY_CONTRACT_NAME.to_string()),
    );

    let res = deploy_governance_stack(&deployer, None).await;
    assert_eq!(exit_code(&res), FAILURE_EXIT_CODE);
    assert_eq!(deployer.deployed_names(), [IDENTITY_CONTRACT_NAME]);

    Ok(())
}
