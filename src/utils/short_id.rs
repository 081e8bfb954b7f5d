//! Short id generation.

use base64::Engine as _;

/// Length of random bytes before base64 encoding; 6 bytes encode to 8
/// URL-safe characters.
const SHORT_ID_BYTES: usize = 6;

/// Generates a random short id: 6 bytes of OS entropy as unpadded
/// URL-safe base64, 8 characters total.
///
/// Collisions are possible at this length; callers retry with a fresh id
/// when the insert hits the unique constraint.
///
/// # Panics
///
/// Panics if the system random number generator fails (extremely rare).
pub fn generate_short_id() -> String {
    let mut buffer = [0u8; SHORT_ID_BYTES];

    getrandom::fill(&mut buffer).expect("Failed to generate random bytes");

    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generate_short_id_has_correct_length() {
        assert_eq!(generate_short_id().len(), 8);
    }

    #[test]
    fn test_generate_short_id_url_safe_characters() {
        let id = generate_short_id();
        assert!(
            id.chars()
                .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
        );
    }

    #[test]
    fn test_generate_short_id_no_padding() {
        assert!(!generate_short_id().contains('='));
    }

    #[test]
    fn test_generate_short_id_produces_unique_ids() {
        let mut ids = HashSet::new();

        for _ in 0..1000 {
            ids.insert(generate_short_id());
        }

        assert_eq!(ids.len(), 1000);
    }
}
