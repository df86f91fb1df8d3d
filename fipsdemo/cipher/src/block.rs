use aes::{Aes128, Aes256};
use des::TdesEde3;
use des::cipher::{BlockDecrypt, BlockEncrypt, KeyInit, generic_array::GenericArray};

use crate::error::{CipherResult, LengthError};

/**
    A keyed single-block cipher primitive.

    This is the only capability the CBC chaining code needs from a block
    cipher: transform exactly one block in place, in either direction.
    A transform is created per call from the caller's key and dropped when
    the call returns, on success and on error alike.

    Implementations report a corrupt block with
    [`CipherError::DecryptionFailed`](crate::CipherError::DecryptionFailed)
    and the chaining code propagates it unchanged.
*/
pub trait BlockTransform: Sized {
    /// Block size in bytes.
    const BLOCK_SIZE: usize;
    /// Required key length in bytes.
    const KEY_LEN: usize;

    fn new(key: &[u8]) -> CipherResult<Self>;

    fn encrypt_block(&self, block: &mut [u8]) -> CipherResult<()>;

    fn decrypt_block(&self, block: &mut [u8]) -> CipherResult<()>;
}

fn check_block(block: &[u8], block_size: usize) -> CipherResult<()> {
    if block.len() != block_size {
        return Err(LengthError::Unaligned {
            block_size,
            actual: block.len(),
        }
        .into());
    }
    Ok(())
}

macro_rules! impl_block_transform {
    ($ty:ty, block = $block:literal, key = $key:literal) => {
        impl BlockTransform for $ty {
            const BLOCK_SIZE: usize = $block;
            const KEY_LEN: usize = $key;

            fn new(key: &[u8]) -> CipherResult<Self> {
                <$ty as KeyInit>::new_from_slice(key).map_err(|_| {
                    LengthError::Key {
                        expected: Self::KEY_LEN,
                        actual: key.len(),
                    }
                    .into()
                })
            }

            fn encrypt_block(&self, block: &mut [u8]) -> CipherResult<()> {
                check_block(block, Self::BLOCK_SIZE)?;
                BlockEncrypt::encrypt_block(self, GenericArray::from_mut_slice(block));
                Ok(())
            }

            fn decrypt_block(&self, block: &mut [u8]) -> CipherResult<()> {
                check_block(block, Self::BLOCK_SIZE)?;
                BlockDecrypt::decrypt_block(self, GenericArray::from_mut_slice(block));
                Ok(())
            }
        }
    };
}

impl_block_transform!(TdesEde3, block = 8, key = 24);
impl_block_transform!(Aes128, block = 16, key = 16);
impl_block_transform!(Aes256, block = 16, key = 32);
