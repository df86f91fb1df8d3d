/*!
    Cipher block chaining over any [`BlockTransform`].

    Encrypt: C[i] = E(K, P[i] XOR C[i-1]),  C[-1] = IV
    Decrypt: P[i] = D(K, C[i]) XOR C[i-1],  C[-1] = IV

    No padding is added or removed. Input must already be a whole number of
    blocks; the empty input is zero blocks and produces empty output.
    Every length is checked before the key schedule is built, and on any
    error the partially processed buffer is dropped, never returned.
*/

use crate::block::BlockTransform;
use crate::error::{CipherResult, LengthError};

/**
    Encrypt block-aligned `plaintext` under `key` with CBC chaining from `iv`.
*/
pub fn encrypt_cbc<T: BlockTransform>(
    plaintext: &[u8],
    key: &[u8],
    iv: &[u8],
) -> CipherResult<Vec<u8>> {
    check_lengths::<T>(plaintext, key, iv)?;

    let cipher = T::new(key)?;
    let mut out = plaintext.to_vec();
    let mut chain = iv.to_vec();

    for block in out.chunks_exact_mut(T::BLOCK_SIZE) {
        xor_in_place(block, &chain);
        cipher.encrypt_block(block)?;
        chain.copy_from_slice(block);
    }

    Ok(out)
}

/**
    Decrypt block-aligned `ciphertext` under `key` with CBC chaining from `iv`.
*/
pub fn decrypt_cbc<T: BlockTransform>(
    ciphertext: &[u8],
    key: &[u8],
    iv: &[u8],
) -> CipherResult<Vec<u8>> {
    check_lengths::<T>(ciphertext, key, iv)?;

    let cipher = T::new(key)?;
    let mut out = ciphertext.to_vec();
    let mut chain = iv.to_vec();
    let mut saved = vec![0u8; T::BLOCK_SIZE];

    for block in out.chunks_exact_mut(T::BLOCK_SIZE) {
        saved.copy_from_slice(block);
        cipher.decrypt_block(block)?;
        xor_in_place(block, &chain);
        core::mem::swap(&mut chain, &mut saved);
    }

    Ok(out)
}

/**
    Validate key, IV and input lengths, in that order.
*/
pub(crate) fn check_lengths<T: BlockTransform>(
    input: &[u8],
    key: &[u8],
    iv: &[u8],
) -> CipherResult<()> {
    if key.len() != T::KEY_LEN {
        return Err(LengthError::Key {
            expected: T::KEY_LEN,
            actual: key.len(),
        }
        .into());
    }
    if iv.len() != T::BLOCK_SIZE {
        return Err(LengthError::Iv {
            expected: T::BLOCK_SIZE,
            actual: iv.len(),
        }
        .into());
    }
    if !input.len().is_multiple_of(T::BLOCK_SIZE) {
        return Err(LengthError::Unaligned {
            block_size: T::BLOCK_SIZE,
            actual: input.len(),
        }
        .into());
    }
    Ok(())
}

fn xor_in_place(block: &mut [u8], mask: &[u8]) {
    for (b, m) in block.iter_mut().zip(mask) {
        *b ^= m;
    }
}

#[cfg(test)]
mod tests {
    use hex_literal::hex;
    use proptest::prelude::*;

    use super::*;
    use crate::CipherError;
    use crate::transforms::{Aes128, Aes256, TdesEde3};

    const TDES_KEY: [u8; 24] = hex!("0123456789abcdeffedcba987654321089abcdef01234567");
    const TDES_IV: [u8; 8] = hex!("0011223344556677");
    const PLAINTEXT: &[u8; 32] = b"exampleplaintextexampleplaintext";

    /**
        Test transform: XOR with the key byte. Decrypting a block that starts
        with 0xff reports corruption.
    */
    struct XorTransform(u8);

    impl BlockTransform for XorTransform {
        const BLOCK_SIZE: usize = 4;
        const KEY_LEN: usize = 1;

        fn new(key: &[u8]) -> CipherResult<Self> {
            Ok(Self(key[0]))
        }

        fn encrypt_block(&self, block: &mut [u8]) -> CipherResult<()> {
            block.iter_mut().for_each(|b| *b ^= self.0);
            Ok(())
        }

        fn decrypt_block(&self, block: &mut [u8]) -> CipherResult<()> {
            if block[0] == 0xff {
                return Err(CipherError::DecryptionFailed("corrupt block".into()));
            }
            block.iter_mut().for_each(|b| *b ^= self.0);
            Ok(())
        }
    }

    #[test]
    fn tdes_known_answer() {
        let ciphertext = encrypt_cbc::<TdesEde3>(PLAINTEXT, &TDES_KEY, &TDES_IV).unwrap();
        assert_eq!(ciphertext.len(), 32);
        assert_eq!(
            ciphertext,
            hex!(
                "e4f42483efd63821"
                "3edf3cf7b3d52024"
                "a132ab16510f19dd"
                "665014a4128ea6ab"
            )
        );
        let decrypted = decrypt_cbc::<TdesEde3>(&ciphertext, &TDES_KEY, &TDES_IV).unwrap();
        assert_eq!(decrypted, PLAINTEXT);
    }

    #[test]
    fn aes128_sp800_38a() {
        // NIST SP 800-38A F.2.1, first two blocks
        let key = hex!("2b7e151628aed2a6abf7158809cf4f3c");
        let iv = hex!("000102030405060708090a0b0c0d0e0f");
        let plaintext = hex!(
            "6bc1bee22e409f96e93d7e117393172a"
            "ae2d8a571e03ac9c9eb76fac45af8e51"
        );
        let ciphertext = encrypt_cbc::<Aes128>(&plaintext, &key, &iv).unwrap();
        assert_eq!(
            ciphertext,
            hex!(
                "7649abac8119b246cee98e9b12e9197d"
                "5086cb9b507219ee95db113a917678b2"
            )
        );
        assert_eq!(decrypt_cbc::<Aes128>(&ciphertext, &key, &iv).unwrap(), plaintext);
    }

    #[test]
    fn aes256_sp800_38a() {
        // NIST SP 800-38A F.2.5, first block
        let key = hex!("603deb1015ca71be2b73aef0857d77811f352c073b6108d72d9810a30914dff4");
        let iv = hex!("000102030405060708090a0b0c0d0e0f");
        let plaintext = hex!("6bc1bee22e409f96e93d7e117393172a");
        let ciphertext = encrypt_cbc::<Aes256>(&plaintext, &key, &iv).unwrap();
        assert_eq!(ciphertext, hex!("f58c4c04d6e5f1ba779eabfb5f7bfbd6"));
    }

    #[test]
    fn empty_input_is_zero_blocks() {
        assert!(encrypt_cbc::<TdesEde3>(&[], &TDES_KEY, &TDES_IV).unwrap().is_empty());
        assert!(decrypt_cbc::<TdesEde3>(&[], &TDES_KEY, &TDES_IV).unwrap().is_empty());
    }

    #[test]
    fn first_block_is_chained_with_iv() {
        // With an all-zero IV, block 0 of CBC equals the raw block transform.
        let zero_iv = [0u8; 8];
        let cbc = encrypt_cbc::<TdesEde3>(&PLAINTEXT[..8], &TDES_KEY, &zero_iv).unwrap();
        let cipher = <TdesEde3 as BlockTransform>::new(&TDES_KEY).unwrap();
        let mut raw = PLAINTEXT[..8].to_vec();
        BlockTransform::encrypt_block(&cipher, &mut raw).unwrap();
        assert_eq!(cbc, raw);

        let other = encrypt_cbc::<TdesEde3>(&PLAINTEXT[..8], &TDES_KEY, &TDES_IV).unwrap();
        assert_ne!(cbc, other);
    }

    #[test]
    fn identical_blocks_encrypt_differently() {
        let plaintext = [0x41u8; 16];
        let ciphertext = encrypt_cbc::<TdesEde3>(&plaintext, &TDES_KEY, &TDES_IV).unwrap();
        assert_ne!(ciphertext[..8], ciphertext[8..]);
    }

    #[test]
    fn bad_key_length() {
        for len in [0, 8, 16, 23, 25, 32] {
            let key = vec![0x11u8; len];
            let err = encrypt_cbc::<TdesEde3>(PLAINTEXT, &key, &TDES_IV).unwrap_err();
            assert_eq!(
                err,
                CipherError::InvalidLength(LengthError::Key {
                    expected: 24,
                    actual: len
                })
            );
            let err = decrypt_cbc::<TdesEde3>(PLAINTEXT, &key, &TDES_IV).unwrap_err();
            assert!(matches!(err, CipherError::InvalidLength(LengthError::Key { .. })));
        }
    }

    #[test]
    fn bad_iv_length() {
        for len in [0, 7, 9, 16] {
            let iv = vec![0u8; len];
            let err = encrypt_cbc::<TdesEde3>(PLAINTEXT, &TDES_KEY, &iv).unwrap_err();
            assert_eq!(
                err,
                CipherError::InvalidLength(LengthError::Iv {
                    expected: 8,
                    actual: len
                })
            );
            let err = decrypt_cbc::<TdesEde3>(PLAINTEXT, &TDES_KEY, &iv).unwrap_err();
            assert!(matches!(err, CipherError::InvalidLength(LengthError::Iv { .. })));
        }
    }

    #[test]
    fn unaligned_input() {
        for len in [1, 7, 9, 31, 33] {
            let data = vec![0u8; len];
            let err = encrypt_cbc::<TdesEde3>(&data, &TDES_KEY, &TDES_IV).unwrap_err();
            assert_eq!(
                err,
                CipherError::InvalidLength(LengthError::Unaligned {
                    block_size: 8,
                    actual: len
                })
            );
            let err = decrypt_cbc::<TdesEde3>(&data, &TDES_KEY, &TDES_IV).unwrap_err();
            assert!(matches!(
                err,
                CipherError::InvalidLength(LengthError::Unaligned { .. })
            ));
        }
    }

    #[test]
    fn key_checked_before_iv_and_alignment() {
        let err = encrypt_cbc::<TdesEde3>(&[0u8; 3], &[0u8; 5], &[0u8; 2]).unwrap_err();
        assert!(matches!(err, CipherError::InvalidLength(LengthError::Key { .. })));
    }

    #[test]
    fn primitive_failure_is_propagated() {
        let key = [0x0f];
        let iv = [0u8; 4];
        // Second block of ciphertext trips the transform's corruption check.
        let ciphertext = [0x00, 0x01, 0x02, 0x03, 0xff, 0x00, 0x00, 0x00];
        let err = decrypt_cbc::<XorTransform>(&ciphertext, &key, &iv).unwrap_err();
        assert_eq!(err, CipherError::DecryptionFailed("corrupt block".into()));
    }

    #[test]
    fn custom_transform_round_trip() {
        let key = [0x5a];
        let iv = [1, 2, 3, 4];
        let plaintext = *b"abcdefgh";
        let ciphertext = encrypt_cbc::<XorTransform>(&plaintext, &key, &iv).unwrap();
        // C0 = (P0 ^ IV) ^ K
        assert_eq!(ciphertext[0], b'a' ^ 1 ^ 0x5a);
        assert_eq!(decrypt_cbc::<XorTransform>(&ciphertext, &key, &iv).unwrap(), plaintext);
    }

    fn aligned_tdes_input() -> impl Strategy<Value = Vec<u8>> {
        (0usize..8).prop_flat_map(|blocks| prop::collection::vec(any::<u8>(), blocks * 8))
    }

    proptest! {
        #[test]
        fn tdes_round_trip(
            plaintext in aligned_tdes_input(),
            key in prop::array::uniform24(any::<u8>()),
            iv in prop::array::uniform8(any::<u8>()),
        ) {
            let ciphertext = encrypt_cbc::<TdesEde3>(&plaintext, &key, &iv).unwrap();
            prop_assert_eq!(ciphertext.len(), plaintext.len());
            let decrypted = decrypt_cbc::<TdesEde3>(&ciphertext, &key, &iv).unwrap();
            prop_assert_eq!(decrypted, plaintext);
        }

        #[test]
        fn aes128_round_trip(
            blocks in 0usize..4,
            seed in any::<u8>(),
            key in prop::array::uniform16(any::<u8>()),
            iv in prop::array::uniform16(any::<u8>()),
        ) {
            let plaintext: Vec<u8> = (0..blocks * 16)
                .map(|i| (i as u8).wrapping_mul(31) ^ seed)
                .collect();
            let ciphertext = encrypt_cbc::<Aes128>(&plaintext, &key, &iv).unwrap();
            let decrypted = decrypt_cbc::<Aes128>(&ciphertext, &key, &iv).unwrap();
            prop_assert_eq!(decrypted, plaintext);
        }

        #[test]
        fn bit_flip_propagates_to_next_block_only(
            block in 0usize..4,
            bit in 0usize..64,
        ) {
            let ciphertext = encrypt_cbc::<TdesEde3>(PLAINTEXT, &TDES_KEY, &TDES_IV).unwrap();
            let mut tampered = ciphertext.clone();
            tampered[block * 8 + bit / 8] ^= 1 << (bit % 8);

            let decrypted = decrypt_cbc::<TdesEde3>(&tampered, &TDES_KEY, &TDES_IV).unwrap();

            for i in 0..4 {
                let got = &decrypted[i * 8..(i + 1) * 8];
                let want = &PLAINTEXT[i * 8..(i + 1) * 8];
                if i < block || i > block + 1 {
                    prop_assert_eq!(got, want);
                } else if i == block {
                    prop_assert_ne!(got, want);
                } else {
                    // The flipped ciphertext bit is XORed straight into the next block.
                    let mut expected = want.to_vec();
                    expected[bit / 8] ^= 1 << (bit % 8);
                    prop_assert_eq!(got, expected.as_slice());
                }
            }
        }
    }
}
