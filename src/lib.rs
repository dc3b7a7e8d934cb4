//! Token metadata client for Solana.
//!
//! Resolves display metadata for an SPL token mint: derives the token
//! metadata program address, fetches and decodes the on-chain record, then
//! follows the record's off-chain URI to a logo image. Provides:
//! - Metadata address derivation
//! - A lightweight JSON-RPC account reader
//! - A borsh decoder for the metadata account
//! - An off-chain document resolver
//! - A view-state flow controller with a notification policy

pub mod core;
pub mod flow;
pub mod metadata;
pub mod offchain;
pub mod pda;
pub mod prelude;
pub mod rpc;

pub use crate::core::{metadata_program_id, MetadataError, MetadataResult};
pub use crate::flow::{
    resolve_token, FlowState, MetadataFlow, NotificationKind, NotificationSink, ResolvedToken,
    TracingNotifier,
};
pub use crate::metadata::{decode_metadata, TokenMetadata};
pub use crate::offchain::{resolve_image, HttpUriFetcher, UriFetcher};
pub use crate::pda::{
    derive_metadata_address, derive_metadata_address_for_program, parse_token_address,
    METADATA_SEED,
};
pub use crate::rpc::{fetch_metadata_account, AccountReader, RpcConnection};
