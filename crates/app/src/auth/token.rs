//! Bearer token generation and hashing.

use std::fmt;

use rand::{RngCore, rngs::OsRng};
use sha2::{Digest, Sha256};
use zeroize::Zeroize;

/// Bearer token prefix.
pub const BEARER_TOKEN_PREFIX: &str = "fl_";

/// Number of random bytes encoded in a token.
pub const BEARER_TOKEN_SECRET_BYTES: usize = 32;

const BEARER_TOKEN_SECRET_HEX_CHARS: usize = BEARER_TOKEN_SECRET_BYTES * 2;

/// A raw bearer token. Only ever shown once, right after it is issued.
#[derive(Clone, PartialEq, Eq)]
pub struct BearerToken(String);

impl BearerToken {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Lowercase hex SHA-256 digest stored in place of the token.
    #[must_use]
    pub fn hash(&self) -> String {
        hash_bearer_token(&self.0)
    }
}

impl fmt::Debug for BearerToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("BearerToken(**redacted**)")
    }
}

impl Drop for BearerToken {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}

#[must_use]
pub fn generate_bearer_token() -> BearerToken {
    let mut secret = [0_u8; BEARER_TOKEN_SECRET_BYTES];

    OsRng.fill_bytes(&mut secret);

    let token = format!("{BEARER_TOKEN_PREFIX}{}", encode_hex(&secret));

    secret.zeroize();

    BearerToken(token)
}

/// Hash a presented bearer token for lookup.
#[must_use]
pub fn hash_bearer_token(token: &str) -> String {
    encode_hex(&Sha256::digest(token.as_bytes()))
}

/// Cheap shape check before a token is hashed and looked up.
#[must_use]
pub fn is_well_formed_bearer_token(token: &str) -> bool {
    token.strip_prefix(BEARER_TOKEN_PREFIX).is_some_and(|secret| {
        secret.len() == BEARER_TOKEN_SECRET_HEX_CHARS
            && secret.bytes().all(|byte| matches!(byte, b'0'..=b'9' | b'a'..=b'f'))
    })
}

fn encode_hex(bytes: &[u8]) -> String {
    const HEX: &[u8; 16] = b"0123456789abcdef";

    let mut encoded = String::with_capacity(bytes.len() * 2);

    for byte in bytes {
        encoded.push(HEX[(byte >> 4) as usize] as char);
        encoded.push(HEX[(byte & 0x0f) as usize] as char);
    }

    encoded
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_tokens_are_well_formed_and_distinct() {
        let first = generate_bearer_token();
        let second = generate_bearer_token();

        assert!(is_well_formed_bearer_token(first.as_str()));
        assert!(is_well_formed_bearer_token(second.as_str()));
        assert_ne!(first, second);
    }

    #[test]
    fn hash_is_lowercase_sha256_hex() {
        assert_eq!(
            hash_bearer_token("abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn token_hash_matches_presented_hash() {
        let token = generate_bearer_token();

        assert_eq!(token.hash(), hash_bearer_token(token.as_str()));
        assert_eq!(token.hash().len(), 64);
    }

    #[test]
    fn rejects_malformed_tokens() {
        assert!(!is_well_formed_bearer_token(""));
        assert!(!is_well_formed_bearer_token("fl_short"));
        assert!(!is_well_formed_bearer_token(&format!("lt_{}", "a".repeat(64))));
        assert!(!is_well_formed_bearer_token(&format!("fl_{}", "A".repeat(64))));
    }

    #[test]
    fn debug_output_is_redacted() {
        let token = generate_bearer_token();

        assert_eq!(format!("{token:?}"), "BearerToken(**redacted**)");
    }
}
