/*!
    EMSA-PKCS1-v1_5 encoding (RFC 8017 §9.2).

      T  = DigestInfo(algorithm) || digest        (just `digest` for nohash)
      PS = 0xff repeated k - len(T) - 3 times, at least 8 bytes
      EM = 0x00 || 0x01 || PS || 0x00 || T        (exactly k bytes)

    Verification re-encodes the expected block and compares all k bytes of it
    against the block recovered from the signature. The recovered block is
    never parsed.
*/

use crate::algorithm::DigestAlgorithm;
use crate::error::{SignatureError, SignatureResult};

/**
    Minimum number of 0xff padding bytes.
*/
pub const MIN_PADDING_LEN: usize = 8;

/**
    Fixed overhead of the encoding: two header bytes, the minimum padding
    and the zero separator.
*/
pub const OVERHEAD: usize = 3 + MIN_PADDING_LEN;

/**
    Check that `digest` has the length `algorithm` produces.
    Any length is accepted for the passthrough variant.
*/
pub fn check_digest_len(algorithm: DigestAlgorithm, digest: &[u8]) -> SignatureResult<()> {
    if let Some(expected) = algorithm.output_len()
        && digest.len() != expected
    {
        return Err(SignatureError::InvalidDigestLength {
            algorithm,
            expected,
            actual: digest.len(),
        });
    }
    Ok(())
}

/**
    Encode `digest` into a `k`-byte EMSA-PKCS1-v1_5 block.
*/
pub fn encode(algorithm: DigestAlgorithm, digest: &[u8], k: usize) -> SignatureResult<Vec<u8>> {
    check_digest_len(algorithm, digest)?;

    let prefix = algorithm.digest_info_prefix();
    let t_len = prefix.len() + digest.len();
    if k < t_len + OVERHEAD {
        return Err(SignatureError::MessageTooLong {
            required: t_len + OVERHEAD,
            modulus_len: k,
        });
    }

    let mut em = vec![0xffu8; k];
    let t_start = k - t_len;
    em[0] = 0x00;
    em[1] = 0x01;
    em[t_start - 1] = 0x00;
    em[t_start..t_start + prefix.len()].copy_from_slice(prefix);
    em[t_start + prefix.len()..].copy_from_slice(digest);

    Ok(em)
}
