use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use tracing::{debug, info};

use fipsdemo_cipher::{CipherAlgorithm, CipherEngine, CipherMode};
use fipsdemo_core::ComplianceMode;

use super::HexBytes;

#[derive(Clone, Copy)]
enum Direction {
    Encrypt,
    Decrypt,
}

/**
    Arguments shared by `encrypt` and `decrypt`.
*/
#[derive(Args)]
struct CryptArgs {
    /// Key as hex.
    #[arg(short, long)]
    key: HexBytes,

    /// Initialization vector as hex, one cipher block long.
    #[arg(long)]
    iv: HexBytes,

    /// Block cipher.
    #[arg(short, long, default_value_t)]
    cipher: CipherAlgorithm,

    /// Input file. Its length must be a multiple of the block size.
    #[arg(short, long)]
    input: PathBuf,

    /// Output file for the raw result. Hex goes to stdout if omitted.
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl CryptArgs {
    fn run(self, direction: Direction, compliance: ComplianceMode) -> Result<()> {
        let engine = CipherEngine::new(self.cipher, CipherMode::Cbc, compliance)
            .context("failed to set up cipher")?;

        let input = fipsdemo_core::read_file(&self.input)
            .with_context(|| format!("failed to read {}", self.input.display()))?;
        info!(
            algorithm = %engine.algorithm(),
            len = input.len(),
            "processing {}",
            self.input.display()
        );

        let output = match direction {
            Direction::Encrypt => engine
                .encrypt_cbc(&input, &self.key, &self.iv)
                .context("encryption failed")?,
            Direction::Decrypt => engine
                .decrypt_cbc(&input, &self.key, &self.iv)
                .context("decryption failed")?,
        };

        match &self.output {
            Some(path) => {
                std::fs::write(path, &output)
                    .with_context(|| format!("failed to write {}", path.display()))?;
                debug!(len = output.len(), "wrote {}", path.display());
            }
            None => println!("{}", hex::encode(&output)),
        }

        Ok(())
    }
}

/**
    Encrypt a file in CBC mode, without padding.
*/
#[derive(Args)]
pub struct EncryptCommand {
    #[command(flatten)]
    args: CryptArgs,
}

impl EncryptCommand {
    pub fn run(self, compliance: ComplianceMode) -> Result<()> {
        self.args.run(Direction::Encrypt, compliance)
    }
}

/**
    Decrypt a file in CBC mode, without padding.
*/
#[derive(Args)]
pub struct DecryptCommand {
    #[command(flatten)]
    args: CryptArgs,
}

impl DecryptCommand {
    pub fn run(self, compliance: ComplianceMode) -> Result<()> {
        self.args.run(Direction::Decrypt, compliance)
    }
}
