pub mod password;
pub mod validators;

use base64::Engine;

const SLUG_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Random alphanumeric slug of the given length
pub fn generate_random_slug(length: usize) -> String {
    std::iter::repeat_with(|| SLUG_ALPHABET[rand::random_range(0..SLUG_ALPHABET.len())] as char)
        .take(length)
        .collect()
}

/// URL-safe random token (`bytes` bytes of entropy, Base64 encoded)
pub fn generate_secure_token(bytes: usize) -> String {
    let raw: Vec<u8> = std::iter::repeat_with(rand::random::<u8>)
        .take(bytes)
        .collect();
    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(raw)
}
