// Rust guideline compliant 2026-10-19

//! Property-based tests for flashcard ID generation.

use leitner_core::identity::{generate_id, is_generated_id, ID_PREFIX};
use proptest::prelude::*;

proptest! {
    /// Every generated ID has the `card-` prefix followed by eight hex digits.
    #[test]
    fn test_id_format_consistency(
        front in ".{1,80}",
        back in ".{1,80}",
        timestamp in any::<i64>(),
        nonce in any::<u32>(),
    ) {
        let id = generate_id(&front, &back, timestamp, nonce);

        prop_assert!(id.starts_with(ID_PREFIX));
        let hash_part = &id[ID_PREFIX.len()..];
        prop_assert_eq!(hash_part.len(), 8);
        prop_assert!(hash_part.chars().all(|c| c.is_ascii_hexdigit()));
        prop_assert!(is_generated_id(&id));
    }

    /// Generation is deterministic for identical inputs.
    #[test]
    fn test_id_generation_determinism(
        front in ".{1,80}",
        back in ".{1,80}",
        timestamp in any::<i64>(),
        nonce in any::<u32>(),
    ) {
        prop_assert_eq!(
            generate_id(&front, &back, timestamp, nonce),
            generate_id(&front, &back, timestamp, nonce)
        );
    }
}
