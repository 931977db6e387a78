//! Scripts for deploying the privacy-preserving governance contracts.

#![deny(missing_docs)]

pub mod artifacts;
pub mod cli;
pub mod commands;
pub mod constants;
pub mod deployer;
pub mod errors;
pub mod types;
pub mod utils;
