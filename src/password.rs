use rand::rand_core::UnwrapErr;
use rand::rngs::{OsRng, ThreadRng};
use rand::{CryptoRng, Rng, TryRngCore};
use tracing::debug;

use crate::charset::CharacterPool;
use crate::config::GenerationConfig;
use crate::errors::ConfigurationError;

/// Draws random strings from a character pool.
///
/// Each output position is an independent, uniform draw over the pool, so
/// nothing guarantees that every enabled class shows up in a given string.
/// The random source is pluggable but must be a CSPRNG.
#[derive(Debug)]
pub struct Generator<R = ThreadRng> {
    rng: R,
}

impl Generator<ThreadRng> {
    /// Generator backed by the thread-local, OS-seeded CSPRNG.
    pub fn new() -> Self {
        Self::with_rng(rand::rng())
    }
}

impl Default for Generator<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl Generator<UnwrapErr<OsRng>> {
    /// Generator that reads every draw straight from the operating system.
    pub fn os() -> Self {
        Self::with_rng(OsRng.unwrap_err())
    }
}

impl<R> Generator<R>
where
    R: Rng + CryptoRng,
{
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Validates `config` and returns a string of exactly `config.length`
    /// characters. An empty selection is rejected even when the requested
    /// length is zero.
    pub fn generate(&mut self, config: &GenerationConfig) -> Result<String, ConfigurationError> {
        let pool = config.pool()?;
        Ok(self.sample(&pool, config.length))
    }

    pub fn sample(&mut self, pool: &CharacterPool, length: usize) -> String {
        debug!(length, pool_size = pool.len(), "generating random string");

        let chars = pool.as_slice();
        (0..length)
            .map(|_| chars[self.rng.random_range(0..chars.len())])
            .collect()
    }

    pub fn into_inner(self) -> R {
        self.rng
    }
}

/// Generates one string with a fresh thread-local generator.
pub fn generate(config: &GenerationConfig) -> Result<String, ConfigurationError> {
    Generator::new().generate(config)
}
