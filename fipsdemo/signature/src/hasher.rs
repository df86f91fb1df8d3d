use std::io;

use md5::Md5;
use sha1::Sha1;
use sha2::digest::DynDigest;
use sha2::{Sha224, Sha256, Sha384, Sha512};

use crate::algorithm::DigestAlgorithm;
use crate::error::{SignatureError, SignatureResult};

enum State {
    Hash(Box<dyn DynDigest + Send + Sync>),
    Passthrough(Vec<u8>),
}

/**
    Streaming digest context for a [`DigestAlgorithm`].

    Owns the hash state for one computation. `finalize` consumes it, and a
    context that is dropped early simply releases its state.
    Implements [`io::Write`] so input can be fed with [`io::copy`].
*/
pub struct Hasher {
    algorithm: DigestAlgorithm,
    state: State,
}

impl Hasher {
    pub fn new(algorithm: DigestAlgorithm) -> Self {
        let state = match algorithm {
            DigestAlgorithm::Md5 => State::Hash(Box::new(Md5::default())),
            DigestAlgorithm::Sha1 => State::Hash(Box::new(Sha1::default())),
            DigestAlgorithm::Sha224 => State::Hash(Box::new(Sha224::default())),
            DigestAlgorithm::Sha256 => State::Hash(Box::new(Sha256::default())),
            DigestAlgorithm::Sha384 => State::Hash(Box::new(Sha384::default())),
            DigestAlgorithm::Sha512 => State::Hash(Box::new(Sha512::default())),
            DigestAlgorithm::NoHash => State::Passthrough(Vec::new()),
        };
        Self { algorithm, state }
    }

    pub fn algorithm(&self) -> DigestAlgorithm {
        self.algorithm
    }

    pub fn update(&mut self, data: &[u8]) {
        match &mut self.state {
            State::Hash(hash) => hash.update(data),
            State::Passthrough(buf) => buf.extend_from_slice(data),
        }
    }

    /**
        Finish the computation. The output length is always
        `algorithm.output_len()` for hashing algorithms.
    */
    pub fn finalize(self) -> Vec<u8> {
        match self.state {
            State::Hash(hash) => hash.finalize().into_vec(),
            State::Passthrough(buf) => buf,
        }
    }
}

impl io::Write for Hasher {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.update(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl DigestAlgorithm {
    /**
        Start a streaming digest with this algorithm.
    */
    pub fn hasher(self) -> Hasher {
        Hasher::new(self)
    }
}

/**
    Digest `message` in one call.
*/
pub fn digest(algorithm: DigestAlgorithm, message: &[u8]) -> Vec<u8> {
    let mut hasher = Hasher::new(algorithm);
    hasher.update(message);
    hasher.finalize()
}

/**
    Digest `message` with an algorithm selected by name.
*/
pub fn digest_by_name(name: &str, message: &[u8]) -> SignatureResult<Vec<u8>> {
    let algorithm = DigestAlgorithm::from_name(name.as_bytes())
        .ok_or_else(|| SignatureError::UnknownAlgorithm(name.trim().to_owned()))?;
    Ok(digest(algorithm, message))
}
