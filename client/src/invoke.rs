use std::io::{self, Write};

use log::{debug, info};
use solana_sdk::{
    signature::{Keypair, Signature, Signer},
    transaction::Transaction,
};

use crate::{
    connection::Connection,
    error::InvokeError,
    instruction::{create_vault_instruction, encode_payload},
    pda::derive_vault_address,
};

pub const EXPLORER_URL: &str = "https://explorer.solana.com";
pub const EXPLORER_CLUSTER: &str = "devnet";

pub fn explorer_url(signature: &Signature) -> String {
    format!("{EXPLORER_URL}/tx/{signature}?cluster={EXPLORER_CLUSTER}")
}

/// Create the payer's vault and print the explorer link to stdout.
pub async fn invoke<C: Connection>(
    connection: &mut C,
    payer: &Keypair,
) -> Result<Signature, InvokeError> {
    invoke_with_report(connection, payer, &mut io::stdout()).await
}

/// Create the payer's vault through the vault program.
///
/// Derives the vault PDA, encodes `(bump, space)`, submits a single
/// payer-signed transaction and writes the explorer link to `report` once the
/// cluster confirms it. Nothing is retried; a failed submission writes nothing.
pub async fn invoke_with_report<C: Connection, W: Write>(
    connection: &mut C,
    payer: &Keypair,
    report: &mut W,
) -> Result<Signature, InvokeError> {
    let payer_key = payer.pubkey();

    let (vault, bump) = derive_vault_address(&payer_key)?;
    debug!("vault {vault} bump {bump} for payer {payer_key}");

    let data = encode_payload(bump)?;
    let instruction = create_vault_instruction(&payer_key, &vault, data);

    let recent_blockhash = connection.latest_blockhash().await?;
    let transaction = Transaction::new_signed_with_payer(
        &[instruction],
        Some(&payer_key),
        &[payer],
        recent_blockhash,
    );

    let signature = connection.send_and_confirm(&transaction).await?;
    info!("confirmed {signature}");

    writeln!(report, "{}", explorer_url(&signature)).map_err(InvokeError::Report)?;
    Ok(signature)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explorer_url_points_at_devnet_transaction() {
        let signature = Signature::from([7u8; 64]);
        let url = explorer_url(&signature);
        assert_eq!(
            url,
            format!("https://explorer.solana.com/tx/{signature}?cluster=devnet")
        );
    }
}
