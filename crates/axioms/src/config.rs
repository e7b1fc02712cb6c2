//! Verifier configuration

use gfcheck_api::{validate, Error, Result};
use serde::{Deserialize, Serialize};

/// Settings for [`FieldVerifier`](crate::FieldVerifier)
///
/// Every key is optional when loaded from TOML:
///
/// ```toml
/// moduli = [2, 3, 5, 7, 11, 13]
/// exhaustive_limit = 31
/// samples = 4096
/// seed = 1734766641
/// check_division = true
/// max_modulus = 4096
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct VerifyConfig {
    /// Moduli checked by [`FieldVerifier::verify_configured`](crate::FieldVerifier::verify_configured)
    pub moduli: Vec<i64>,
    /// Largest modulus checked exhaustively; larger ones are sampled
    pub exhaustive_limit: u64,
    /// Random triples per sampled law
    pub samples: usize,
    /// Base seed for the sampling RNG
    pub seed: u64,
    /// Also check `(a*b)/b == a`
    pub check_division: bool,
    /// Largest modulus accepted at all; the O(n²) scans stay exhaustive
    pub max_modulus: u64,
}

impl Default for VerifyConfig {
    fn default() -> Self {
        Self {
            moduli: vec![2, 3, 5, 7, 11, 13],
            exhaustive_limit: 31,
            samples: 4096,
            seed: 0x6766_7031,
            check_division: true,
            max_modulus: 4096,
        }
    }
}

// Builder methods for easy customization
impl VerifyConfig {
    /// Replace the configured moduli
    pub fn with_moduli(mut self, moduli: impl Into<Vec<i64>>) -> Self {
        self.moduli = moduli.into();
        self
    }

    /// Set the exhaustive/sampled cut-over
    pub fn with_exhaustive_limit(mut self, limit: u64) -> Self {
        self.exhaustive_limit = limit;
        self
    }

    /// Set the number of samples per sampled law
    pub fn with_samples(mut self, samples: usize) -> Self {
        self.samples = samples;
        self
    }

    /// Set the base RNG seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Enable or disable the division round-trip check
    pub fn with_division_check(mut self, enabled: bool) -> Self {
        self.check_division = enabled;
        self
    }

    /// Set the largest accepted modulus
    pub fn with_max_modulus(mut self, max: u64) -> Self {
        self.max_modulus = max;
        self
    }

    /// Reject settings the verifier cannot run with
    pub fn validate(&self) -> Result<()> {
        validate::parameter(self.samples > 0, "VerifyConfig", "samples must be positive")?;
        validate::parameter(
            self.exhaustive_limit <= self.max_modulus,
            "VerifyConfig",
            "exhaustive_limit must not exceed max_modulus",
        )?;
        // TOML integers are signed 64-bit
        validate::parameter(
            i64::try_from(self.seed).is_ok(),
            "VerifyConfig",
            "seed must not exceed i64::MAX",
        )?;
        Ok(())
    }

    /// Parse and validate a TOML document
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Self = toml::from_str(source).map_err(|e| Error::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Render as TOML
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string(self).map_err(|e| Error::Config(e.to_string()))
    }
}
