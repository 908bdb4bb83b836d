use std::{error::Error, process::ExitCode};

use log::{error, info};
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::signature::Signer;
use vault_invoker::{invoke, Config, InvokeError};

async fn run() -> Result<(), InvokeError> {
    let config = Config::from_env()?;
    let payer = config.load_payer()?;
    info!("payer {} on {}", payer.pubkey(), config.rpc_url);

    let mut connection = RpcClient::new_with_commitment(config.rpc_url.clone(), config.commitment);
    invoke(&mut connection, &payer).await?;

    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            let mut source = err.source();
            while let Some(cause) = source {
                error!("  caused by: {cause}");
                source = cause.source();
            }
            ExitCode::FAILURE
        }
    }
}
