use solana_sdk::pubkey::{ParsePubkeyError, Pubkey};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MetadataError {
    #[error("Invalid token address: {0}")]
    InvalidAddress(#[from] ParsePubkeyError),

    #[error("No metadata account at {0}")]
    AccountNotFound(Pubkey),

    #[error("RPC error: {0}")]
    Connection(String),

    #[error("Metadata decode error: {0}")]
    Decode(String),

    #[error("URI fetch error: {0}")]
    Network(String),

    #[error("Malformed off-chain document: {0}")]
    MalformedDocument(String),
}

pub type MetadataResult<T> = Result<T, MetadataError>;
