//! Event id generation.

use rand::Rng;

const ID_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Default event id length.
pub const DEFAULT_ID_LEN: usize = 10;

/// Generate a random event id: [`DEFAULT_ID_LEN`] characters drawn uniformly
/// from the 62-symbol alphanumeric alphabet.
///
/// No collision check is made against ids already in a store; at widget
/// scale the collision probability is negligible. Callers that need stronger
/// guarantees can swap in a UUID behind the same call site.
pub fn generate_event_id() -> String {
    generate_event_id_with_len(DEFAULT_ID_LEN)
}

/// Generate a random alphanumeric id of the given length.
pub fn generate_event_id_with_len(len: usize) -> String {
    let mut rng = rand::rng();
    (0..len)
        .map(|_| ID_ALPHABET[rng.random_range(0..ID_ALPHABET.len())] as char)
        .collect()
}
