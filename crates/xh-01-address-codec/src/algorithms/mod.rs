//! # Algorithms Module
//!
//! Pure address transforms: native text encoding, mirror checksums, the
//! native/mirror mapping, and synthetic owner addresses for nesting.

pub mod checksum;
pub mod mirror;
pub mod native;
pub mod nesting;

pub use checksum::{checksum_mirror, lowercase_mirror, parse_mirror, to_checksum_address};
pub use mirror::{mirror_to_native, mirror_to_native_key, native_to_mirror};
pub use native::{
    decode_account, decode_native, encode_native, encode_with_prefix, is_valid_native,
    normalize_native, ALLOWED_KEY_LENGTHS,
};
pub use nesting::{
    collection_id_from_address, collection_id_to_address, token_address_bytes,
    token_id_from_address, token_id_to_address, COLLECTION_ADDRESS_TAG, TOKEN_ADDRESS_TAG,
};
