use solana_sdk::{
    instruction::{AccountMeta, Instruction},
    pubkey::Pubkey,
};
use solana_system_interface::program as system_program;
use vault_program::CreateVault;

use crate::error::InvokeError;

/// Bytes requested for every vault.
pub const VAULT_SPACE: u64 = 10;

/// Scratch buffer handed to the encoder before trimming.
pub const SCRATCH_LEN: usize = 1000;

/// Encode `(bump, VAULT_SPACE)` into `scratch` and return the encoded span.
pub fn encode_payload_into(scratch: &mut [u8], bump: u8) -> Result<&[u8], InvokeError> {
    let ix = CreateVault {
        bump,
        space: VAULT_SPACE,
    };
    let len = ix.pack_into(scratch).map_err(InvokeError::Encoding)?;
    Ok(&scratch[..len])
}

pub fn encode_payload(bump: u8) -> Result<Vec<u8>, InvokeError> {
    let mut scratch = vec![0u8; SCRATCH_LEN];
    let len = encode_payload_into(&mut scratch, bump)?.len();
    scratch.truncate(len);
    Ok(scratch)
}

/// Accounts, in order:
/// 0. `[writable, signer]` payer
/// 1. `[writable]` vault PDA
/// 2. `[]` system program
pub fn create_vault_instruction(payer: &Pubkey, vault: &Pubkey, data: Vec<u8>) -> Instruction {
    Instruction {
        program_id: vault_program::ID,
        accounts: vec![
            AccountMeta::new(*payer, true),
            AccountMeta::new(*vault, false),
            AccountMeta::new_readonly(system_program::id(), false),
        ],
        data,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_is_bump_then_space() {
        let data = encode_payload(253).unwrap();
        assert_eq!(data, vec![253, 10, 0, 0, 0, 0, 0, 0, 0]);
        assert_eq!(data.len(), CreateVault::LEN);
    }

    #[test]
    fn payload_decodes_back_with_fixed_space() {
        for bump in [0u8, 1, 128, 255] {
            let decoded = CreateVault::unpack(&encode_payload(bump).unwrap()).unwrap();
            assert_eq!(decoded.bump, bump);
            assert_eq!(decoded.space, VAULT_SPACE);
        }
    }

    #[test]
    fn small_scratch_buffer_is_an_encoding_error() {
        let mut scratch = [0u8; 4];
        let err = encode_payload_into(&mut scratch, 255).unwrap_err();
        assert!(matches!(err, InvokeError::Encoding(_)));
    }

    #[test]
    fn exact_scratch_buffer_is_enough() {
        let mut scratch = [0u8; CreateVault::LEN];
        let span = encode_payload_into(&mut scratch, 9).unwrap();
        assert_eq!(span, &[9, 10, 0, 0, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn instruction_lists_payer_vault_system_program() {
        let payer = Pubkey::new_unique();
        let vault = Pubkey::new_unique();
        let ix = create_vault_instruction(&payer, &vault, encode_payload(1).unwrap());

        assert_eq!(ix.program_id, vault_program::ID);
        assert_eq!(ix.accounts.len(), 3);

        let flags: Vec<_> = ix
            .accounts
            .iter()
            .map(|meta| (meta.pubkey, meta.is_signer, meta.is_writable))
            .collect();
        assert_eq!(
            flags,
            vec![
                (payer, true, true),
                (vault, false, true),
                (system_program::id(), false, false),
            ]
        );
    }
}
