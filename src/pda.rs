//! Metadata account address derivation.

use std::str::FromStr;

use solana_sdk::pubkey::Pubkey;

use crate::core::{metadata_program_id, MetadataResult};

/// Seed literal for metadata account addresses.
pub const METADATA_SEED: &[u8] = b"metadata";

/// Parse a user-supplied token mint address.
pub fn parse_token_address(input: &str) -> MetadataResult<Pubkey> {
    Ok(Pubkey::from_str(input)?)
}

/// Derive the metadata account address for a mint.
///
/// Seeds are the literal `"metadata"`, the owning program id, and the mint,
/// scoped to the owning program. The bump seed is returned alongside the
/// address; this crate's read path does not use it.
pub fn derive_metadata_address(mint: &Pubkey) -> (Pubkey, u8) {
    derive_metadata_address_for_program(&metadata_program_id(), mint)
}

/// Same derivation against an explicit owning program.
pub fn derive_metadata_address_for_program(program_id: &Pubkey, mint: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[METADATA_SEED, program_id.as_ref(), mint.as_ref()],
        program_id,
    )
}
