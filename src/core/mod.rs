pub mod error;

pub use error::{MetadataError, MetadataResult};

use solana_sdk::pubkey::Pubkey;

/// Program that owns token metadata accounts.
pub fn metadata_program_id() -> Pubkey {
    mpl_token_metadata::ID
}
