//! Loading of compiled contract artifacts.
//!
//! Artifacts are read in the layout Hardhat emits them in, i.e.
//! `<artifacts dir>/contracts/<Source>.sol/<ContractName>.json`, each holding
//! the contract's ABI and creation bytecode.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use alloy::{
    dyn_abi::{DynSolValue, JsonAbiExt},
    json_abi::JsonAbi,
    primitives::Bytes,
};
use serde::Deserialize;

use crate::{constants::ARTIFACT_EXTENSION, errors::ScriptError};

/// A compiled contract, as read from its artifact file
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractArtifact {
    /// The name of the contract
    pub contract_name: String,
    /// The contract's JSON ABI
    pub abi: JsonAbi,
    /// The contract's creation bytecode
    pub bytecode: Bytes,
}

impl ContractArtifact {
    /// Parse an artifact from its JSON representation
    pub fn from_json(json: &str) -> Result<Self, ScriptError> {
        serde_json::from_str(json).map_err(|e| ScriptError::ArtifactParsing(e.to_string()))
    }

    /// Build the code of a contract creation transaction, i.e. the creation
    /// bytecode followed by the ABI-encoded constructor arguments.
    ///
    /// The arguments are type-checked against the constructor in the ABI.
    pub fn deploy_code(&self, constructor_args: &[DynSolValue]) -> Result<Bytes, ScriptError> {
        if self.bytecode.is_empty() {
            return Err(ScriptError::ArtifactParsing(format!(
                "{} has no creation bytecode, is it abstract?",
                self.contract_name
            )));
        }

        let encoded_args = match self.abi.constructor() {
            Some(constructor) => constructor
                .abi_encode_input(constructor_args)
                .map_err(|e| {
                    ScriptError::CalldataConstruction(format!("{}: {}", self.contract_name, e))
                })?,
            None if constructor_args.is_empty() => Vec::new(),
            None => {
                return Err(ScriptError::CalldataConstruction(format!(
                    "{} has no constructor, but {} arguments were given",
                    self.contract_name,
                    constructor_args.len()
                )))
            }
        };

        let mut code = self.bytecode.to_vec();
        code.extend_from_slice(&encoded_args);
        Ok(code.into())
    }
}

/// A directory of compiled contract artifacts, keyed by contract name
#[derive(Debug, Clone)]
pub struct ArtifactStore {
    /// The root of the artifacts directory
    root: PathBuf,
}

impl ArtifactStore {
    /// Create a store rooted at the given directory
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Find the artifact file for the given contract.
    ///
    /// The name must be unambiguous: if more than one source in the
    /// artifacts directory, dependencies included, defines a contract by
    /// that name, the lookup fails rather than picking one of them.
    pub fn find(&self, contract_name: &str) -> Result<PathBuf, ScriptError> {
        if !self.root.is_dir() {
            return Err(ScriptError::ArtifactNotFound(format!(
                "artifacts directory {} does not exist, have the contracts been compiled?",
                self.root.display()
            )));
        }

        let file_name = format!("{contract_name}.{ARTIFACT_EXTENSION}");
        let mut matches = Vec::new();
        collect_files(&self.root, &file_name, &mut matches)
            .map_err(|e| ScriptError::ArtifactParsing(e.to_string()))?;

        match matches.len() {
            0 => Err(ScriptError::ArtifactNotFound(format!(
                "{} in {}",
                contract_name,
                self.root.display()
            ))),
            1 => Ok(matches.remove(0)),
            _ => {
                let paths = matches
                    .iter()
                    .map(|path| path.display().to_string())
                    .collect::<Vec<_>>()
                    .join(", ");
                Err(ScriptError::ArtifactParsing(format!(
                    "multiple artifacts for {contract_name}: {paths}"
                )))
            }
        }
    }

    /// Load and parse the artifact for the given contract
    pub fn load(&self, contract_name: &str) -> Result<ContractArtifact, ScriptError> {
        let path = self.find(contract_name)?;
        let json = fs::read_to_string(&path)
            .map_err(|e| ScriptError::ArtifactParsing(format!("{}: {}", path.display(), e)))?;

        let artifact = ContractArtifact::from_json(&json)?;
        if artifact.contract_name != contract_name {
            return Err(ScriptError::ArtifactParsing(format!(
                "{} holds contract {}, expected {}",
                path.display(),
                artifact.contract_name,
                contract_name
            )));
        }

        Ok(artifact)
    }
}

/// Collect every file with the given name under `dir`, visiting directory
/// entries in sorted order
fn collect_files(dir: &Path, file_name: &str, found: &mut Vec<PathBuf>) -> io::Result<()> {
    let mut entries = fs::read_dir(dir)?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<io::Result<Vec<_>>>()?;
    entries.sort();

    for path in entries {
        if path.is_dir() {
            collect_files(&path, file_name, found)?;
        } else if path.file_name().and_then(|n| n.to_str()) == Some(file_name) {
            found.push(path);
        }
    }

    Ok(())
}
