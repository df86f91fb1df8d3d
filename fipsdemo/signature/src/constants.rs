/*!
    DER-encoded `DigestInfo` prefixes for EMSA-PKCS1-v1_5 (RFC 8017 §9.2, note 1).

    Each prefix is the encoding of
      SEQUENCE { SEQUENCE { OID, NULL }, OCTET STRING (digest_len) }
    up to, but not including, the digest bytes themselves.
*/

use hex_literal::hex;

pub const MD5_PREFIX: [u8; 18] = hex!(
    "3020300c"
    "06082a864886f70d0205"
    "0500"
    "0410"
);

pub const SHA1_PREFIX: [u8; 15] = hex!(
    "3021300906"
    "052b0e03021a"
    "0500"
    "0414"
);

pub const SHA224_PREFIX: [u8; 19] = hex!(
    "302d300d"
    "0609608648016503040204"
    "0500"
    "041c"
);

pub const SHA256_PREFIX: [u8; 19] = hex!(
    "3031300d"
    "0609608648016503040201"
    "0500"
    "0420"
);

pub const SHA384_PREFIX: [u8; 19] = hex!(
    "3041300d"
    "0609608648016503040202"
    "0500"
    "0430"
);

pub const SHA512_PREFIX: [u8; 19] = hex!(
    "3051300d"
    "0609608648016503040203"
    "0500"
    "0440"
);

/**
    Smallest RSA modulus accepted for verification in FIPS mode.
*/
pub const FIPS_MIN_MODULUS_BITS: usize = 1024;
