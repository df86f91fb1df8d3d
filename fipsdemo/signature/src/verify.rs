use fipsdemo_core::{ComplianceMode, ct_eq};

use crate::algorithm::DigestAlgorithm;
use crate::constants::FIPS_MIN_MODULUS_BITS;
use crate::error::{SignatureError, SignatureResult};
use crate::hasher;
use crate::key::PublicKey;
use crate::pkcs1;

/**
    Verify an RSA PKCS#1 v1.5 `signature` over an already computed `digest`.

    Returns `Ok(false)` for any signature that does not match, including one
    of the wrong length or one whose integer value is not below the modulus.
    Errors are reserved for inputs that cannot be checked at all: a digest of
    the wrong length, or a digest too long for the key.
*/
pub fn verify(
    key: &PublicKey,
    algorithm: DigestAlgorithm,
    digest: &[u8],
    signature: &[u8],
) -> SignatureResult<bool> {
    let expected = pkcs1::encode(algorithm, digest, key.modulus_len())?;
    let Some(recovered) = key.recover(signature) else {
        return Ok(false);
    };
    Ok(ct_eq(&recovered, &expected))
}

/**
    [`verify`] with the digest algorithm selected by name.
*/
pub fn verify_by_name(
    key: &PublicKey,
    algorithm: &str,
    digest: &[u8],
    signature: &[u8],
) -> SignatureResult<bool> {
    let algorithm = DigestAlgorithm::from_name(algorithm.as_bytes())
        .ok_or_else(|| SignatureError::UnknownAlgorithm(algorithm.trim().to_owned()))?;
    verify(key, algorithm, digest, signature)
}

/**
    [`verify`], but a mismatch is [`SignatureError::VerificationFailed`].
*/
pub fn verify_strict(
    key: &PublicKey,
    algorithm: DigestAlgorithm,
    digest: &[u8],
    signature: &[u8],
) -> SignatureResult<()> {
    if verify(key, algorithm, digest, signature)? {
        Ok(())
    } else {
        Err(SignatureError::VerificationFailed)
    }
}

/**
    Digest-then-verify pipeline under a [`ComplianceMode`].

    In [`ComplianceMode::Fips`] the verifier refuses digest algorithms that
    are not approved for signatures and keys with a modulus shorter than
    [`FIPS_MIN_MODULUS_BITS`]. In [`ComplianceMode::Standard`] it behaves
    exactly like the free functions.
*/
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DigestVerifier {
    compliance: ComplianceMode,
}

impl DigestVerifier {
    pub const fn new(compliance: ComplianceMode) -> Self {
        Self { compliance }
    }

    pub const fn compliance(&self) -> ComplianceMode {
        self.compliance
    }

    /**
        Check that `algorithm` may be used under the configured mode.
    */
    pub fn check_algorithm(&self, algorithm: DigestAlgorithm) -> SignatureResult<()> {
        if self.compliance.is_fips() && !algorithm.is_fips_approved() {
            return Err(SignatureError::NotApproved(algorithm));
        }
        Ok(())
    }

    /**
        Check that `key` is strong enough for the configured mode.
    */
    pub fn check_key(&self, key: &PublicKey) -> SignatureResult<()> {
        let bits = key.modulus_bits();
        if self.compliance.is_fips() && bits < FIPS_MIN_MODULUS_BITS {
            return Err(SignatureError::KeyTooSmall {
                bits,
                minimum: FIPS_MIN_MODULUS_BITS,
            });
        }
        Ok(())
    }

    /**
        Digest `message`, subject to the algorithm policy.
    */
    pub fn digest(&self, algorithm: DigestAlgorithm, message: &[u8]) -> SignatureResult<Vec<u8>> {
        self.check_algorithm(algorithm)?;
        Ok(hasher::digest(algorithm, message))
    }

    pub fn verify(
        &self,
        key: &PublicKey,
        algorithm: DigestAlgorithm,
        digest: &[u8],
        signature: &[u8],
    ) -> SignatureResult<bool> {
        self.check_algorithm(algorithm)?;
        self.check_key(key)?;
        verify(key, algorithm, digest, signature)
    }

    /**
        Digest `message` and verify `signature` over the result.
    */
    pub fn verify_message(
        &self,
        key: &PublicKey,
        algorithm: DigestAlgorithm,
        message: &[u8],
        signature: &[u8],
    ) -> SignatureResult<bool> {
        self.check_algorithm(algorithm)?;
        self.check_key(key)?;
        let digest = hasher::digest(algorithm, message);
        verify(key, algorithm, &digest, signature)
    }

    pub fn verify_strict(
        &self,
        key: &PublicKey,
        algorithm: DigestAlgorithm,
        digest: &[u8],
        signature: &[u8],
    ) -> SignatureResult<()> {
        if self.verify(key, algorithm, digest, signature)? {
            Ok(())
        } else {
            Err(SignatureError::VerificationFailed)
        }
    }
}
