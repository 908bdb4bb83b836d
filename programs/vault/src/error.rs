use solana_program::program_error::ProgramError;
use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum VaultError {
    #[error("Vault bump is not the canonical bump")]
    NonCanonicalBump,
    #[error("Vault account already exists")]
    VaultAlreadyExists,
    #[error("Requested vault space exceeds the permitted account size")]
    SpaceTooLarge,
}

impl From<VaultError> for ProgramError {
    fn from(value: VaultError) -> Self {
        ProgramError::Custom(value as u32)
    }
}
