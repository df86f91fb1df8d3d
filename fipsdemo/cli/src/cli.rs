use std::process::ExitCode;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use tracing::info;

use fipsdemo_core::ComplianceMode;

use crate::commands::{
    DecryptCommand, DigestCommand, EncDecCommand, EncryptCommand, VerifyCommand,
};
use crate::logging;

/**
    Triple-DES CBC and RSA PKCS#1 v1.5 demonstration tool.
*/
#[derive(Parser)]
#[command(name = "fipsdemo", version)]
pub struct Cli {
    /// Compliance mode: `standard` or `fips`.
    #[arg(long, global = true, env = "FIPSDEMO_COMPLIANCE", default_value_t)]
    compliance: ComplianceMode,

    /// More log output (-v debug, -vv trace). Overrides FIPSDEMO_LOG.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Encrypt a plaintext, print the ciphertext, and decrypt it again.
    #[command(name = "encdec")]
    EncDec(EncDecCommand),
    /// Encrypt a file.
    Encrypt(EncryptCommand),
    /// Decrypt a file.
    Decrypt(DecryptCommand),
    /// Print the digest of a file.
    Digest(DigestCommand),
    /// Verify an RSA PKCS#1 v1.5 signature over a file.
    Verify(VerifyCommand),
}

impl Cli {
    pub fn run(self) -> Result<ExitCode> {
        logging::init(self.verbose);
        info!(compliance = %self.compliance, "compliance mode set");

        let compliance = self.compliance;
        match self.command {
            Command::EncDec(cmd) => cmd.run(compliance)?,
            Command::Encrypt(cmd) => cmd.run(compliance)?,
            Command::Decrypt(cmd) => cmd.run(compliance)?,
            Command::Digest(cmd) => cmd.run(compliance)?,
            Command::Verify(cmd) => return cmd.run(compliance),
        }
        Ok(ExitCode::SUCCESS)
    }
}
