//! Metadata account decoding.
//!
//! The account layout is owned by the token metadata program; this crate only
//! reads the prefix it displays. Trailing fields (creators, collection, uses,
//! ...) are left undecoded.

use borsh::BorshDeserialize;
use solana_sdk::pubkey::Pubkey;

use crate::core::{MetadataError, MetadataResult};

/// Account discriminant for a v1 metadata record.
const METADATA_V1: u8 = 4;

/// Decoded on-chain token metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenMetadata {
    pub update_authority: Pubkey,
    pub mint: Pubkey,
    pub name: String,
    pub symbol: String,
    pub uri: String,
}

// Prefix of the on-chain account, in serialization order.
#[derive(BorshDeserialize)]
struct RawMetadata {
    key: u8,
    update_authority: [u8; 32],
    mint: [u8; 32],
    name: String,
    symbol: String,
    uri: String,
}

/// Decode a raw metadata account.
///
/// The metadata program stores name/symbol/uri as fixed-width, null-padded
/// strings; the padding is trimmed here. Any truncation, bad discriminant, or
/// malformed string is a `Decode` error, never a panic.
pub fn decode_metadata(data: &[u8]) -> MetadataResult<TokenMetadata> {
    match data.first() {
        Some(&METADATA_V1) => {}
        Some(&other) => {
            return Err(MetadataError::Decode(format!(
                "unexpected account discriminant {}",
                other
            )))
        }
        None => return Err(MetadataError::Decode("empty account data".to_string())),
    }

    let mut slice = data;
    let raw = RawMetadata::deserialize(&mut slice)
        .map_err(|e| MetadataError::Decode(e.to_string()))?;

    Ok(TokenMetadata {
        update_authority: Pubkey::new_from_array(raw.update_authority),
        mint: Pubkey::new_from_array(raw.mint),
        name: trim_padding(raw.name),
        symbol: trim_padding(raw.symbol),
        uri: trim_padding(raw.uri),
    })
}

fn trim_padding(field: String) -> String {
    field.trim_end_matches('\0').to_string()
}
