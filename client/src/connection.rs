use solana_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::{hash::Hash, signature::Signature, transaction::Transaction};

use crate::error::InvokeError;

/// The two network operations the invoker needs from a cluster connection.
#[allow(async_fn_in_trait)]
pub trait Connection {
    async fn latest_blockhash(&mut self) -> Result<Hash, InvokeError>;

    /// Submit a signed transaction and wait until the cluster confirms it.
    async fn send_and_confirm(
        &mut self,
        transaction: &Transaction,
    ) -> Result<Signature, InvokeError>;
}

impl Connection for RpcClient {
    async fn latest_blockhash(&mut self) -> Result<Hash, InvokeError> {
        self.get_latest_blockhash()
            .await
            .map_err(InvokeError::submission)
    }

    async fn send_and_confirm(
        &mut self,
        transaction: &Transaction,
    ) -> Result<Signature, InvokeError> {
        self.send_and_confirm_transaction(transaction)
            .await
            .map_err(InvokeError::submission)
    }
}
