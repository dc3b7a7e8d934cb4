//! Prelude module for common imports

pub use solana_sdk::pubkey::Pubkey;

pub use crate::core::{MetadataError, MetadataResult};
pub use crate::flow::{FlowState, MetadataFlow, TracingNotifier};
pub use crate::offchain::HttpUriFetcher;
pub use crate::rpc::RpcConnection;
