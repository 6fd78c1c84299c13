// Rust guideline compliant 2026-10-19

//! Hash-based flashcard identifiers.
//!
//! IDs have the form `card-XXXXXXXX`: the prefix followed by the first eight
//! hex digits of a SHA-256 digest over the card text, the creation instant
//! and a nonce. The nonce lets callers retry on the rare collision.

use sha2::{Digest, Sha256};

/// Prefix shared by every generated flashcard ID.
pub const ID_PREFIX: &str = "card-";

const HASH_LEN: usize = 8;

/// Generates a flashcard ID from its content, creation time and a nonce.
///
/// # Arguments
///
/// * `front` - Prompt text
/// * `back` - Answer text
/// * `timestamp_nanos` - Creation instant in nanoseconds since the epoch
/// * `nonce` - Disambiguator, incremented by callers on collision
///
/// # Returns
///
/// A deterministic ID for the given inputs.
pub fn generate_id(front: &str, back: &str, timestamp_nanos: i64, nonce: u32) -> String {
    let mut hasher = Sha256::new();
    hasher.update(front.as_bytes());
    hasher.update([0u8]);
    hasher.update(back.as_bytes());
    hasher.update(timestamp_nanos.to_le_bytes());
    hasher.update(nonce.to_le_bytes());

    let hex = format!("{:x}", hasher.finalize());
    format!("{}{}", ID_PREFIX, &hex[..HASH_LEN])
}

/// Returns true if `id` looks like an ID produced by [`generate_id`].
///
/// Imported collections may carry IDs minted elsewhere, so the store only
/// uses this for diagnostics, never to reject a card.
pub fn is_generated_id(id: &str) -> bool {
    id.strip_prefix(ID_PREFIX)
        .map(|hash| hash.len() == HASH_LEN && hash.chars().all(|c| c.is_ascii_hexdigit()))
        .unwrap_or(false)
}
