//! Session Token Signing
//!
//! The cookie token is `<session-uuid>.<base64url HMAC-SHA256 signature>`.
//! Verifying the signature before touching the database means forged or
//! corrupted tokens cost nothing.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use hmac::{Hmac, Mac};
use sha2::Sha256;
use uuid::Uuid;

type HmacSha256 = Hmac<Sha256>;

/// Sign a session id into a cookie token
pub fn sign(session_id: Uuid, secret: &[u8; 32]) -> String {
    let session_id = session_id.to_string();

    let mut mac =
        HmacSha256::new_from_slice(secret).expect("HMAC can take key of any size");
    mac.update(session_id.as_bytes());
    let signature = mac.finalize().into_bytes();

    format!("{}.{}", session_id, URL_SAFE_NO_PAD.encode(signature))
}

/// Verify a cookie token and extract the session id
///
/// Returns `None` for any malformed, unsigned, or tampered token.
pub fn verify(token: &str, secret: &[u8; 32]) -> Option<Uuid> {
    let (session_id_str, signature_b64) = token.split_once('.')?;

    let mut mac =
        HmacSha256::new_from_slice(secret).expect("HMAC can take key of any size");
    mac.update(session_id_str.as_bytes());

    let signature = URL_SAFE_NO_PAD.decode(signature_b64).ok()?;
    mac.verify_slice(&signature).ok()?;

    session_id_str.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: [u8; 32] = [7u8; 32];

    #[test]
    fn test_sign_verify_roundtrip() {
        let session_id = Uuid::new_v4();
        let token = sign(session_id, &SECRET);
        assert_eq!(verify(&token, &SECRET), Some(session_id));
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let token = sign(Uuid::new_v4(), &SECRET);
        let other_secret = [8u8; 32];
        assert_eq!(verify(&token, &other_secret), None);
    }

    #[test]
    fn test_tampered_session_id_rejected() {
        let token = sign(Uuid::new_v4(), &SECRET);
        let (_, signature) = token.split_once('.').unwrap();
        let forged = format!("{}.{}", Uuid::new_v4(), signature);
        assert_eq!(verify(&forged, &SECRET), None);
    }

    #[test]
    fn test_malformed_tokens_rejected() {
        assert_eq!(verify("", &SECRET), None);
        assert_eq!(verify("no-dot-here", &SECRET), None);
        assert_eq!(verify("a.b.c", &SECRET), None);
        assert_eq!(verify("not-a-uuid.!!!", &SECRET), None);
    }
}
