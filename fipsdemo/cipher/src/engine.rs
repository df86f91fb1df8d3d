use fipsdemo_core::{ComplianceMode, ct_eq};

use crate::cbc;
use crate::error::{CipherError, CipherResult};
use crate::transforms::{Aes128, Aes256, TdesEde3};
use crate::types::{CipherAlgorithm, CipherMode};

/**
    CBC encryption engine for a fixed cipher algorithm.

    Holds configuration only. Each call builds its own key schedule and
    chaining state and discards both on return, so one engine can be shared
    freely between threads.

    Construction is where the mode is validated: requesting anything other
    than CBC fails with [`CipherError::UnsupportedMode`] before any key or
    data is looked at.
*/
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CipherEngine {
    algorithm: CipherAlgorithm,
    compliance: ComplianceMode,
}

impl CipherEngine {
    /**
        Create an engine for `algorithm` in `mode`.
    */
    pub fn new(
        algorithm: CipherAlgorithm,
        mode: CipherMode,
        compliance: ComplianceMode,
    ) -> CipherResult<Self> {
        if mode != CipherMode::Cbc {
            return Err(CipherError::UnsupportedMode(mode.to_name().to_owned()));
        }
        Ok(Self {
            algorithm,
            compliance,
        })
    }

    /**
        Create an engine from user-supplied algorithm and mode names.

        An unrecognized mode name is reported as unsupported, the same as a
        recognized non-CBC mode.
    */
    pub fn from_names(
        algorithm: &str,
        mode: &str,
        compliance: ComplianceMode,
    ) -> CipherResult<Self> {
        let mode = CipherMode::from_name(mode.as_bytes())
            .ok_or_else(|| CipherError::UnsupportedMode(mode.trim().to_owned()))?;
        let algorithm = CipherAlgorithm::from_name(algorithm.as_bytes())
            .ok_or_else(|| CipherError::UnknownAlgorithm(algorithm.trim().to_owned()))?;
        Self::new(algorithm, mode, compliance)
    }

    /**
        Three-key DES-EDE3 in CBC mode.
    */
    pub const fn triple_des_cbc(compliance: ComplianceMode) -> Self {
        Self {
            algorithm: CipherAlgorithm::TripleDes,
            compliance,
        }
    }

    pub const fn algorithm(&self) -> CipherAlgorithm {
        self.algorithm
    }

    pub const fn mode(&self) -> CipherMode {
        CipherMode::Cbc
    }

    pub const fn compliance(&self) -> ComplianceMode {
        self.compliance
    }

    pub const fn block_size(&self) -> usize {
        self.algorithm.block_size()
    }

    pub const fn key_len(&self) -> usize {
        self.algorithm.key_len()
    }

    /**
        Encrypt block-aligned `plaintext`. See [`cbc::encrypt_cbc`].
    */
    pub fn encrypt_cbc(&self, plaintext: &[u8], key: &[u8], iv: &[u8]) -> CipherResult<Vec<u8>> {
        self.check_lengths(plaintext, key, iv)?;
        self.check_key_policy(key)?;
        match self.algorithm {
            CipherAlgorithm::TripleDes => cbc::encrypt_cbc::<TdesEde3>(plaintext, key, iv),
            CipherAlgorithm::Aes128 => cbc::encrypt_cbc::<Aes128>(plaintext, key, iv),
            CipherAlgorithm::Aes256 => cbc::encrypt_cbc::<Aes256>(plaintext, key, iv),
        }
    }

    /**
        Decrypt block-aligned `ciphertext`. See [`cbc::decrypt_cbc`].
    */
    pub fn decrypt_cbc(&self, ciphertext: &[u8], key: &[u8], iv: &[u8]) -> CipherResult<Vec<u8>> {
        self.check_lengths(ciphertext, key, iv)?;
        self.check_key_policy(key)?;
        match self.algorithm {
            CipherAlgorithm::TripleDes => cbc::decrypt_cbc::<TdesEde3>(ciphertext, key, iv),
            CipherAlgorithm::Aes128 => cbc::decrypt_cbc::<Aes128>(ciphertext, key, iv),
            CipherAlgorithm::Aes256 => cbc::decrypt_cbc::<Aes256>(ciphertext, key, iv),
        }
    }

    fn check_lengths(&self, input: &[u8], key: &[u8], iv: &[u8]) -> CipherResult<()> {
        match self.algorithm {
            CipherAlgorithm::TripleDes => cbc::check_lengths::<TdesEde3>(input, key, iv),
            CipherAlgorithm::Aes128 => cbc::check_lengths::<Aes128>(input, key, iv),
            CipherAlgorithm::Aes256 => cbc::check_lengths::<Aes256>(input, key, iv),
        }
    }

    /**
        Reject DES-EDE3 keys that collapse to single DES.

        K1 == K2 makes the first two stages cancel, and K2 == K3 the last two.
        Only enforced in FIPS mode, after all lengths have been validated.
    */
    fn check_key_policy(&self, key: &[u8]) -> CipherResult<()> {
        if !self.compliance.is_fips()
            || self.algorithm != CipherAlgorithm::TripleDes
            || key.len() != self.key_len()
        {
            return Ok(());
        }

        let (k1, rest) = key.split_at(8);
        let (k2, k3) = rest.split_at(8);
        if ct_eq(k1, k2) {
            return Err(CipherError::WeakKey("DES-EDE3 subkeys K1 and K2 are equal"));
        }
        if ct_eq(k2, k3) {
            return Err(CipherError::WeakKey("DES-EDE3 subkeys K2 and K3 are equal"));
        }
        Ok(())
    }
}
