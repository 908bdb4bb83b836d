use std::env;

use solana_sdk::{
    commitment_config::{CommitmentConfig, CommitmentLevel},
    signature::{read_keypair_file, Keypair},
};

use crate::error::InvokeError;

pub const DEFAULT_RPC_URL: &str = "https://api.devnet.solana.com";
const DEFAULT_KEYPAIR: &str = ".config/solana/id.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub rpc_url: String,
    pub keypair_path: String,
    pub commitment: CommitmentConfig,
}

impl Config {
    /// Reads `RPC`, `KEYPAIR` and `COMMITMENT`.
    pub fn from_env() -> Result<Self, InvokeError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, InvokeError> {
        let rpc_url = lookup("RPC").unwrap_or_else(|| DEFAULT_RPC_URL.to_string());

        let keypair_path = match lookup("KEYPAIR") {
            Some(path) => path,
            None => {
                let home = lookup("HOME").ok_or_else(|| {
                    InvokeError::Config("KEYPAIR is unset and HOME is unknown".to_string())
                })?;
                format!("{}/{DEFAULT_KEYPAIR}", home.trim_end_matches('/'))
            }
        };

        let commitment = match lookup("COMMITMENT") {
            Some(level) => parse_commitment(&level)?,
            None => CommitmentConfig::confirmed(),
        };

        Ok(Config {
            rpc_url,
            keypair_path,
            commitment,
        })
    }

    pub fn load_payer(&self) -> Result<Keypair, InvokeError> {
        read_keypair_file(&self.keypair_path).map_err(|err| InvokeError::Keypair {
            path: self.keypair_path.clone(),
            message: err.to_string(),
        })
    }
}

fn parse_commitment(level: &str) -> Result<CommitmentConfig, InvokeError> {
    let commitment = match level.trim().to_ascii_lowercase().as_str() {
        "processed" => CommitmentLevel::Processed,
        "confirmed" => CommitmentLevel::Confirmed,
        "finalized" => CommitmentLevel::Finalized,
        other => {
            return Err(InvokeError::Config(format!(
                "unknown commitment level `{other}`"
            )))
        }
    };
    Ok(CommitmentConfig { commitment })
}
