use rsa::pkcs1::DecodeRsaPublicKey;
use rsa::pkcs8::DecodePublicKey;
use rsa::traits::PublicKeyParts;
use rsa::{BigUint, RsaPublicKey};

use crate::error::{SignatureError, SignatureResult};

const PKCS1_PEM_LABEL: &str = "-----BEGIN RSA PUBLIC KEY-----";
const PEM_BOUNDARY: &[u8] = b"-----BEGIN";

/**
    RSA public key used for signature verification.

    Decoding is delegated to the `rsa` crate. Both X.509 SubjectPublicKeyInfo
    (`PUBLIC KEY`) and PKCS#1 (`RSA PUBLIC KEY`) encodings are accepted, in
    PEM or DER form.
*/
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicKey {
    inner: RsaPublicKey,
}

impl PublicKey {
    /**
        Parse a PEM-encoded public key.
    */
    pub fn from_pem(pem: &str) -> SignatureResult<Self> {
        let pem = pem.trim();
        let inner = if pem.starts_with(PKCS1_PEM_LABEL) {
            RsaPublicKey::from_pkcs1_pem(pem).map_err(|e| SignatureError::KeyParse(e.to_string()))
        } else {
            RsaPublicKey::from_public_key_pem(pem)
                .map_err(|e| SignatureError::KeyParse(e.to_string()))
        }?;
        Ok(Self { inner })
    }

    /**
        Parse a DER-encoded public key, SubjectPublicKeyInfo first, then PKCS#1.
    */
    pub fn from_der(der: &[u8]) -> SignatureResult<Self> {
        if let Ok(inner) = RsaPublicKey::from_public_key_der(der) {
            return Ok(Self { inner });
        }
        RsaPublicKey::from_pkcs1_der(der)
            .map(|inner| Self { inner })
            .map_err(|e| SignatureError::KeyParse(e.to_string()))
    }

    /**
        Parse key file contents, detecting PEM by its boundary line.
    */
    pub fn from_bytes(data: impl AsRef<[u8]>) -> SignatureResult<Self> {
        let data = data.as_ref();
        if data.trim_ascii_start().starts_with(PEM_BOUNDARY) {
            let pem = std::str::from_utf8(data)
                .map_err(|e| SignatureError::KeyParse(format!("PEM is not UTF-8: {e}")))?;
            Self::from_pem(pem)
        } else {
            Self::from_der(data)
        }
    }

    /**
        Build a key from big-endian modulus and public exponent bytes.
    */
    pub fn from_components(modulus: &[u8], exponent: &[u8]) -> SignatureResult<Self> {
        let inner = RsaPublicKey::new(
            BigUint::from_bytes_be(modulus),
            BigUint::from_bytes_be(exponent),
        )
        .map_err(|e| SignatureError::KeyParse(e.to_string()))?;
        Ok(Self { inner })
    }

    /**
        Modulus length in bytes (`k` in RFC 8017). Signatures and encoded
        blocks are exactly this long.
    */
    pub fn modulus_len(&self) -> usize {
        self.inner.size()
    }

    pub fn modulus_bits(&self) -> usize {
        self.inner.n().bits()
    }

    pub fn modulus(&self) -> Vec<u8> {
        self.inner.n().to_bytes_be()
    }

    pub fn exponent(&self) -> Vec<u8> {
        self.inner.e().to_bytes_be()
    }

    pub fn as_rsa(&self) -> &RsaPublicKey {
        &self.inner
    }

    /**
        Apply the public-key operation to a signature (RSAVP1).

        Returns `s^e mod n` as a `modulus_len()`-byte block, or `None` when the
        signature is not a valid representative: wrong length, or an integer
        not less than the modulus.
    */
    pub(crate) fn recover(&self, signature: &[u8]) -> Option<Vec<u8>> {
        let k = self.modulus_len();
        if signature.len() != k {
            return None;
        }

        let n = self.inner.n();
        let s = BigUint::from_bytes_be(signature);
        if &s >= n {
            return None;
        }

        let m = s.modpow(self.inner.e(), n).to_bytes_be();
        if m.len() > k {
            return None;
        }

        let mut block = vec![0u8; k];
        block[k - m.len()..].copy_from_slice(&m);
        Some(block)
    }
}

impl From<RsaPublicKey> for PublicKey {
    fn from(inner: RsaPublicKey) -> Self {
        Self { inner }
    }
}
