pub mod config;
pub mod connection;
pub mod error;
pub mod instruction;
pub mod invoke;
pub mod pda;

pub use config::Config;
pub use connection::Connection;
pub use error::InvokeError;
pub use instruction::{create_vault_instruction, encode_payload, VAULT_SPACE};
pub use invoke::{explorer_url, invoke, invoke_with_report};
pub use pda::derive_vault_address;
