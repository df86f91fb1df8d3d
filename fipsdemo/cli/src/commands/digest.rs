use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use tracing::debug;

use fipsdemo_core::ComplianceMode;
use fipsdemo_signature::{DigestAlgorithm, DigestVerifier};

/**
    Print the digest of a file.
*/
#[derive(Args)]
pub struct DigestCommand {
    /// Digest algorithm: md5, sha1, sha224, sha256, sha384, sha512 or nohash.
    #[arg(long, default_value_t)]
    md: DigestAlgorithm,

    /// File to digest.
    path: PathBuf,
}

impl DigestCommand {
    pub fn run(self, compliance: ComplianceMode) -> Result<()> {
        let data = fipsdemo_core::read_file(&self.path)
            .with_context(|| format!("failed to read {}", self.path.display()))?;
        debug!(len = data.len(), md = %self.md, "digesting {}", self.path.display());

        let digest = DigestVerifier::new(compliance)
            .digest(self.md, &data)
            .context("digest failed")?;

        println!("{}  {}", hex::encode(digest), self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command(md: DigestAlgorithm) -> DigestCommand {
        DigestCommand {
            md,
            path: PathBuf::from(concat!(
                env!("CARGO_MANIFEST_DIR"),
                "/../signature/testfiles/data.bin"
            )),
        }
    }

    #[test]
    fn digests_fixture() {
        assert!(command(DigestAlgorithm::Sha256).run(ComplianceMode::Fips).is_ok());
        assert!(command(DigestAlgorithm::NoHash).run(ComplianceMode::Standard).is_ok());
    }

    #[test]
    fn fips_refuses_md5() {
        assert!(command(DigestAlgorithm::Md5).run(ComplianceMode::Fips).is_err());
        assert!(command(DigestAlgorithm::Md5).run(ComplianceMode::Standard).is_ok());
    }
}
