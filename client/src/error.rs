use std::{error::Error, io};

use thiserror::Error;

pub type BoxError = Box<dyn Error + Send + Sync + 'static>;

#[derive(Error, Debug)]
pub enum InvokeError {
    #[error("No off-curve vault address found for the payer")]
    AddressDerivation,
    #[error("Instruction payload does not fit the scratch buffer")]
    Encoding(#[source] io::Error),
    #[error("Transaction submission failed")]
    Submission(#[source] BoxError),
    #[error("Failed to write the explorer link")]
    Report(#[source] io::Error),
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("Failed to read payer keypair from {path}: {message}")]
    Keypair { path: String, message: String },
}

impl InvokeError {
    pub fn submission(err: impl Into<BoxError>) -> Self {
        InvokeError::Submission(err.into())
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error;

    use super::*;

    #[test]
    fn wrapped_errors_are_reported_once_through_source() {
        let err = InvokeError::submission(io::Error::other("blockhash not found"));

        assert_eq!(err.to_string(), "Transaction submission failed");
        assert_eq!(
            err.source().map(|source| source.to_string()),
            Some("blockhash not found".to_string())
        );
    }
}
