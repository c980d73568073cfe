//! Opaque bearer session tokens. The client holds 256 random bits encoded
//! URL-safe base64; the database stores only the SHA-256 digest, so a leaked
//! sessions table cannot be replayed.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use chrono::Duration;
use rand::RngCore;
use sha2::{Digest, Sha256};

pub const SESSION_TTL_DAYS: i64 = 30;

pub fn session_ttl() -> Duration {
    Duration::days(SESSION_TTL_DAYS)
}

/// Returns (token, digest). The token goes to the client once; the digest is
/// what gets persisted and looked up.
pub fn generate_token() -> (String, String) {
    let mut bytes = [0u8; 32];
    rand::thread_rng().fill_bytes(&mut bytes);
    let token = URL_SAFE_NO_PAD.encode(bytes);
    let digest = digest_token(&token);
    (token, digest)
}

pub fn digest_token(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    URL_SAFE_NO_PAD.encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_are_unique() {
        let (a, _) = generate_token();
        let (b, _) = generate_token();
        assert_ne!(a, b);
    }

    #[test]
    fn test_digest_matches_generated_pair() {
        let (token, digest) = generate_token();
        assert_eq!(digest_token(&token), digest);
    }

    #[test]
    fn test_digest_is_stable_and_urlsafe() {
        let d1 = digest_token("fixed-token");
        let d2 = digest_token("fixed-token");
        assert_eq!(d1, d2);
        assert!(!d1.contains('+') && !d1.contains('/') && !d1.contains('='));
    }
}
