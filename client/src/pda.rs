use solana_sdk::pubkey::Pubkey;
use vault_program::VAULT_SEED;

use crate::error::InvokeError;

/// Find the payer's vault PDA and its canonical bump.
///
/// Seeds: `[b"vault", payer]`, salted with the vault program id.
pub fn derive_vault_address(payer: &Pubkey) -> Result<(Pubkey, u8), InvokeError> {
    Pubkey::try_find_program_address(&[VAULT_SEED, payer.as_ref()], &vault_program::ID)
        .ok_or(InvokeError::AddressDerivation)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derivation_is_deterministic() {
        let payer = Pubkey::new_unique();
        let first = derive_vault_address(&payer).unwrap();
        let second = derive_vault_address(&payer).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn derived_vault_recomputes_from_seeds_and_bump() {
        let payer = Pubkey::new_unique();
        let (vault, bump) = derive_vault_address(&payer).unwrap();

        let recomputed = Pubkey::create_program_address(
            &[b"vault", payer.as_ref(), &[bump]],
            &vault_program::ID,
        )
        .unwrap();

        assert_eq!(recomputed, vault);
    }

    #[test]
    fn different_payers_get_different_vaults() {
        let (a, _) = derive_vault_address(&Pubkey::new_unique()).unwrap();
        let (b, _) = derive_vault_address(&Pubkey::new_unique()).unwrap();
        assert_ne!(a, b);
    }
}
