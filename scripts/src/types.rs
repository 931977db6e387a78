//! Type definitions used throughout the scripts

use alloy::primitives::Address;

use crate::constants::{
    GOVERNANCE_CONTRACT_NAME, IDENTITY_CONTRACT_NAME, ZKP_VERIFIER_CONTRACT_NAME,
};

/// The contracts deployed by the scripts, in deployment order
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum GovernanceContract {
    /// The identity registry contract
    Identity,
    /// The zero-knowledge-proof verifier contract
    ZkpVerifier,
    /// The governance contract, constructed with the addresses of the other two
    Governance,
}

impl GovernanceContract {
    /// The name of the contract, as used to look up its compiled artifact
    pub fn name(&self) -> &'static str {
        match self {
            GovernanceContract::Identity => IDENTITY_CONTRACT_NAME,
            GovernanceContract::ZkpVerifier => ZKP_VERIFIER_CONTRACT_NAME,
            GovernanceContract::Governance => GOVERNANCE_CONTRACT_NAME,
        }
    }

    /// The label under which the deployed address is logged
    pub fn label(&self) -> &'static str {
        match self {
            GovernanceContract::Identity => "Identity Contract",
            GovernanceContract::ZkpVerifier => "ZKP Verifier",
            GovernanceContract::Governance => "Governance Contract",
        }
    }
}

/// The addresses of a fully deployed governance stack
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct GovernanceDeployments {
    /// The identity registry contract
    pub identity: Address,
    /// The zero-knowledge-proof verifier contract
    pub zkp_verifier: Address,
    /// The governance contract
    pub governance: Address,
}
