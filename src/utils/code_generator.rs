//! Short code generation.
//!
//! Produces random Base62 codes with a cryptographically secure RNG.

use rand::Rng;

/// Fixed 62-character alphabet: lowercase, uppercase, digits. No separators.
const BASE62_CHARS: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Minimum generated code length, inclusive.
pub const MIN_CODE_LENGTH: usize = 6;

/// Maximum generated code length, inclusive.
pub const MAX_CODE_LENGTH: usize = 8;

/// Generates a random short code.
///
/// The length is chosen uniformly in `[MIN_CODE_LENGTH, MAX_CODE_LENGTH]` and
/// each character is drawn uniformly from the Base62 alphabet. Uses
/// [`rand::rng`], a cryptographically secure generator. Stateless; every call
/// is independent.
pub fn generate_code() -> String {
    let mut rng = rand::rng();
    let length = rng.random_range(MIN_CODE_LENGTH..=MAX_CODE_LENGTH);

    (0..length)
        .map(|_| BASE62_CHARS[rng.random_range(0..BASE62_CHARS.len())] as char)
        .collect()
}
