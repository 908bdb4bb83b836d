use std::io;

use borsh::{BorshDeserialize, BorshSerialize};
use solana_program::program_error::ProgramError;

/// Instruction payload for creating a vault.
///
/// Layout (no discriminator, no padding):
/// [0]    = bump seed (u8)
/// [1..9] = space in bytes (u64 little-endian)
#[derive(BorshSerialize, BorshDeserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct CreateVault {
    pub bump: u8,
    pub space: u64,
}

impl CreateVault {
    pub const LEN: usize = 1 + 8; // 9 bytes

    /// Encodes into `buf` and returns the number of bytes written.
    ///
    /// Fails with `WriteZero` when `buf` cannot hold the full layout.
    pub fn pack_into(&self, buf: &mut [u8]) -> io::Result<usize> {
        let capacity = buf.len();
        let mut remaining = buf;
        self.serialize(&mut remaining)?;
        Ok(capacity - remaining.len())
    }

    pub fn unpack(input: &[u8]) -> Result<Self, ProgramError> {
        Self::try_from_slice(input).map_err(|_| ProgramError::InvalidInstructionData)
    }
}
