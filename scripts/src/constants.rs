//! Constants used in the deploy scripts

/// The default RPC URL, that of a local Hardhat or Anvil node
pub const DEFAULT_RPC_URL: &str = "http://localhost:8545";

/// The default private key, the first default account of a local Hardhat or Anvil node
pub const DEFAULT_PKEY: &str =
    "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

/// The default directory containing the compiled contract artifacts
pub const DEFAULT_ARTIFACTS_DIR: &str = "artifacts";

/// The number of confirmations to wait for the contract deployment transaction
pub const NUM_DEPLOY_CONFIRMATIONS: u64 = 1;

/// The extension of a compiled contract artifact
pub const ARTIFACT_EXTENSION: &str = "json";

/// The name of the identity registry contract
pub const IDENTITY_CONTRACT_NAME: &str = "Identity";

/// The name of the zero-knowledge-proof verifier contract
pub const ZKP_VERIFIER_CONTRACT_NAME: &str = "ZKPVerifier";

/// The name of the governance contract
pub const GOVERNANCE_CONTRACT_NAME: &str = "PrivacyPreservingGovernance";

/// The indentation used when pretty-printing the deployments file
pub const DEPLOYMENTS_FILE_INDENT: &[u8] = b"    ";

/// The process exit code on full success
pub const SUCCESS_EXIT_CODE: u8 = 0;

/// The process exit code on any failure
pub const FAILURE_EXIT_CODE: u8 = 1;
