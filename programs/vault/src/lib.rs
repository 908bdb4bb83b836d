use solana_program::declare_id;

declare_id!("AxhGGBeAQc1SumsczWjgUxbbhhZR7FsTAtfoc5Ay6oaw");

pub mod error;
pub mod instruction;
pub mod processor;

pub use error::VaultError;
pub use instruction::CreateVault;
pub use processor::process_instruction;

/// Seed prefix for every vault PDA: `[VAULT_SEED, payer]`.
pub const VAULT_SEED: &[u8] = b"vault";

#[cfg(not(feature = "no-entrypoint"))]
solana_program::entrypoint!(process_instruction);
