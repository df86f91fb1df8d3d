use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Args;
use tracing::{debug, info, warn};

use fipsdemo_core::ComplianceMode;
use fipsdemo_signature::{DigestAlgorithm, DigestVerifier, PublicKey};

/**
    Verify an RSA PKCS#1 v1.5 signature over a file.

    Prints `Verification success!` or `Verification failed.`; a failed
    verification exits with status 1.
*/
#[derive(Args)]
pub struct VerifyCommand {
    /// Digest algorithm the signature was made with.
    #[arg(long, default_value_t)]
    md: DigestAlgorithm,

    /// RSA public key (PEM or DER, SubjectPublicKeyInfo or PKCS#1).
    #[arg(short, long, default_value = "rsa-public.pem")]
    key: PathBuf,

    /// Signed message.
    #[arg(short, long, default_value = "data.bin")]
    data: PathBuf,

    /// Raw signature, exactly as long as the modulus.
    #[arg(short, long, default_value = "signature.bin")]
    signature: PathBuf,
}

impl VerifyCommand {
    pub fn run(self, compliance: ComplianceMode) -> Result<ExitCode> {
        let key = fipsdemo_core::read_file(&self.key)
            .with_context(|| format!("failed to read public key {}", self.key.display()))?;
        let key = PublicKey::from_bytes(&key).context("failed to parse public key")?;
        debug!(bits = key.modulus_bits(), "loaded public key");

        info!("loading message from {}", self.data.display());
        let data = fipsdemo_core::read_file(&self.data)
            .with_context(|| format!("failed to read message {}", self.data.display()))?;

        let signature = fipsdemo_core::read_file(&self.signature)
            .with_context(|| format!("failed to read signature {}", self.signature.display()))?;

        let verified = DigestVerifier::new(compliance)
            .verify_message(&key, self.md, &data, &signature)
            .context("signature could not be checked")?;

        if verified {
            println!("Verification success!");
            Ok(ExitCode::SUCCESS)
        } else {
            warn!(md = %self.md, "signature does not match");
            println!("Verification failed.");
            Ok(ExitCode::FAILURE)
        }
    }
}
