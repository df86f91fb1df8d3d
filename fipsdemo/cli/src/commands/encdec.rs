use anyhow::{Context, Result, bail};
use clap::Args;
use tracing::{debug, info};

use fipsdemo_cipher::CipherEngine;
use fipsdemo_core::ComplianceMode;

use super::HexBytes;

const DEFAULT_PLAINTEXT: &str = "exampleplaintextexampleplaintext";

/**
    Encrypt a plaintext and decrypt the result again.

    Prints the plaintext, key, IV and ciphertext, then the recovered text.
    Fails if the round trip does not reproduce the plaintext.
*/
#[derive(Args)]
pub struct EncDecCommand {
    /// Key as hex (24 bytes for DES-EDE3).
    #[arg(short, long)]
    key: HexBytes,

    /// Initialization vector as hex, one cipher block long.
    #[arg(long)]
    iv: HexBytes,

    /// Block cipher: tdes, aes128 or aes256.
    #[arg(short, long, default_value = "tdes")]
    cipher: String,

    /// Cipher mode. Only CBC is supported.
    #[arg(short, long, default_value = "cbc")]
    mode: String,

    /// Text to encrypt. Its length must be a multiple of the block size.
    #[arg(default_value = DEFAULT_PLAINTEXT)]
    plaintext: String,
}

impl EncDecCommand {
    pub fn run(self, compliance: ComplianceMode) -> Result<()> {
        let engine = CipherEngine::from_names(&self.cipher, &self.mode, compliance)
            .context("failed to set up cipher")?;
        info!(algorithm = %engine.algorithm(), mode = %engine.mode(), "cipher ready");

        let plaintext = self.plaintext.as_bytes();
        let ciphertext = engine
            .encrypt_cbc(plaintext, &self.key, &self.iv)
            .context("encryption failed")?;
        debug!(len = ciphertext.len(), "encrypted");

        println!("Encryption:");
        println!("Plaintext:  {}", self.plaintext);
        println!("Key:        {}", hex::encode(&*self.key));
        println!("IV:         {}", hex::encode(&*self.iv));
        println!("Ciphertext: {}", hex::encode(&ciphertext));

        let decrypted = engine
            .decrypt_cbc(&ciphertext, &self.key, &self.iv)
            .context("decryption failed")?;
        if decrypted != plaintext {
            bail!("decrypted text does not match the plaintext");
        }

        println!();
        println!("Decryption:");
        println!("Decrypted:  {}", String::from_utf8_lossy(&decrypted));

        Ok(())
    }
}
