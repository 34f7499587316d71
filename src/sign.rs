//! HMAC-SHA256 signing over canonical payload bytes.

use hmac::{Hmac, Mac as _};
use secrecy::{ExposeSecret as _, SecretString};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Request header carrying the payload signature.
pub const SIGNATURE_HEADER: &str = "X-Signature-256";

/// HMAC-SHA256 digest of a canonical payload.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Signature {
    bytes: [u8; 32],
}

impl Signature {
    /// Hex rendering of the raw digest.
    #[must_use]
    pub fn to_hex(&self) -> String {
        hex::encode(self.bytes)
    }

    /// Value for the [`SIGNATURE_HEADER`] request header.
    #[must_use]
    pub fn header_value(&self) -> String {
        format!("sha256={}", self.to_hex())
    }
}

/// Computes HMAC-SHA256 over `data` with the shared secret.
#[must_use]
pub fn sign(secret: &SecretString, data: &[u8]) -> Signature {
    let mut mac = HmacSha256::new_from_slice(secret.expose_secret().as_bytes())
        .expect("HMAC accepts any key length");
    mac.update(data);
    Signature {
        bytes: mac.finalize().into_bytes().into(),
    }
}

/// Constant-time check that `signature` matches `data` under `secret`.
#[must_use]
pub fn verify(secret: &SecretString, data: &[u8], signature: &[u8]) -> bool {
    let mut mac = HmacSha256::new_from_slice(secret.expose_secret().as_bytes())
        .expect("HMAC accepts any key length");
    mac.update(data);
    mac.verify_slice(signature).is_ok()
}
