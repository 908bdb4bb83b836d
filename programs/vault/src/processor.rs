use solana_program::{
    account_info::AccountInfo,
    entrypoint::ProgramResult,
    msg,
    program::invoke_signed,
    program_error::ProgramError,
    pubkey::Pubkey,
    rent::Rent,
    system_instruction::{self, MAX_PERMITTED_DATA_LENGTH},
    sysvar::Sysvar,
};
use solana_system_interface::program as system_program;

use crate::{error::VaultError, instruction::CreateVault, VAULT_SEED};

pub fn process_instruction(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    instruction_data: &[u8],
) -> ProgramResult {
    let CreateVault { bump, space } = CreateVault::unpack(instruction_data)?;
    create_vault(program_id, accounts, bump, space)
}

/// Create the payer's vault PDA with `space` bytes of program-owned data.
///
/// Expected accounts:
/// 0. `[writable, signer]` payer
/// 1. `[writable]` vault PDA, seeds = [b"vault", payer]
/// 2. `[]` system program
fn create_vault(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    bump: u8,
    space: u64,
) -> ProgramResult {
    let [payer_info, vault_info, system_program_info] = accounts else {
        return Err(ProgramError::NotEnoughAccountKeys);
    };

    if !payer_info.is_signer {
        return Err(ProgramError::MissingRequiredSignature);
    }

    if !system_program::check_id(system_program_info.key) {
        return Err(ProgramError::IncorrectProgramId);
    }

    let (expected_vault, canonical_bump) =
        Pubkey::find_program_address(&[VAULT_SEED, payer_info.key.as_ref()], program_id);

    if vault_info.key != &expected_vault {
        return Err(ProgramError::InvalidSeeds);
    }

    // One vault per payer: only the canonical bump is accepted.
    if bump != canonical_bump {
        return Err(VaultError::NonCanonicalBump.into());
    }

    if vault_info.lamports() > 0 {
        return Err(VaultError::VaultAlreadyExists.into());
    }

    if space > MAX_PERMITTED_DATA_LENGTH {
        return Err(VaultError::SpaceTooLarge.into());
    }
    let data_len = usize::try_from(space).map_err(|_| VaultError::SpaceTooLarge)?;

    let rent = Rent::get()?;
    let lamports = rent.minimum_balance(data_len);

    invoke_signed(
        &system_instruction::create_account(
            payer_info.key,
            vault_info.key,
            lamports,
            space,
            program_id,
        ),
        &[payer_info.clone(), vault_info.clone(), system_program_info.clone()],
        &[&[VAULT_SEED, payer_info.key.as_ref(), &[bump]]],
    )?;

    msg!("Vault created for payer: {}", payer_info.key);
    msg!("Vault {} holds {} bytes, bump {}", vault_info.key, space, bump);

    Ok(())
}
