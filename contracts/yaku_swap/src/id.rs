use cosmwasm_std::{Addr, HexBinary, Uint128};
use sha2::{Digest, Sha256};

use crate::asset::Asset;

const SWAP_ID_DOMAIN: &[u8] = b"yaku_swap/swap_id/v1";

/// Derives the identifier of a swap from every parameter that defines it.
///
/// Nothing but the resulting id is kept on chain, so completing or cancelling
/// a swap means presenting the same tuple again and landing on the same id.
pub fn derive_swap_id(
    asset: &Asset,
    depositor: &Addr,
    beneficiary: &Addr,
    amount: Uint128,
    secret_hash: &HexBinary,
    creation_height: u64,
) -> HexBinary {
    let mut hasher = Sha256::new();
    write_field(&mut hasher, SWAP_ID_DOMAIN);
    hasher.update([asset.discriminant()]);
    write_field(&mut hasher, asset.reference().as_bytes());
    write_field(&mut hasher, depositor.as_bytes());
    write_field(&mut hasher, beneficiary.as_bytes());
    hasher.update(amount.u128().to_be_bytes());
    write_field(&mut hasher, secret_hash.as_slice());
    hasher.update(creation_height.to_be_bytes());
    HexBinary::from(hasher.finalize().to_vec())
}

pub fn hash_secret(secret: &[u8]) -> HexBinary {
    HexBinary::from(Sha256::digest(secret).to_vec())
}

// length prefix keeps adjacent variable-size fields from sliding into each other
fn write_field(hasher: &mut Sha256, bytes: &[u8]) {
    hasher.update((bytes.len() as u32).to_be_bytes());
    hasher.update(bytes);
}
