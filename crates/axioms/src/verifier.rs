//! Whole-field verification driver

use core::fmt;

use gfcheck_api::{validate, Error, Result, ResultExt};
use gfcheck_field::{FieldAddition, FieldElement, FieldMultiplication, PrimeField};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use tracing::{debug, info};

use crate::config::VerifyConfig;
use crate::distributivity::{check_distributivity, DistributivityResult};
use crate::group::{check_group_axioms, AxiomCheckResult};
use crate::sampled::{check_group_axioms_sampled, sample_distributivity};

/// How the cubic laws were evaluated
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
pub enum CheckMode {
    /// Every triple
    Exhaustive,
    /// Random triples
    Sampled {
        /// Triples drawn per law
        samples: usize,
    },
}

/// Everything [`FieldVerifier::verify`] learned about one modulus
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
pub struct FieldReport {
    /// The modulus examined
    pub modulus: u64,
    /// Result of the trial-division primality test
    pub modulus_is_prime: bool,
    /// Exhaustive or sampled evaluation of associativity and distributivity
    pub mode: CheckMode,
    /// All residues under `+`
    pub additive: AxiomCheckResult<FieldElement>,
    /// Nonzero residues under `*`
    pub multiplicative: AxiomCheckResult<FieldElement>,
    /// `*` over `+`
    pub distributivity: DistributivityResult,
    /// `(a*b)/b == a` for nonzero `b`; `None` when disabled
    pub division_round_trip: Option<bool>,
}

impl FieldReport {
    /// True if every field axiom checked out
    pub fn is_field(&self) -> bool {
        self.additive.is_abelian_group()
            && self.additive.identity.is_some_and(|e| e.is_zero())
            && self.multiplicative.is_abelian_group()
            && self.multiplicative.identity.is_some_and(|e| e.is_one())
            && self.distributivity.holds()
            && self.division_round_trip != Some(false)
    }
}

fn mark(ok: bool) -> &'static str {
    if ok {
        "ok"
    } else {
        "FAIL"
    }
}

fn write_group<T: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    name: &str,
    r: &AxiomCheckResult<T>,
) -> fmt::Result {
    write!(
        f,
        "  {name}: closure {} | associativity {} | identity ",
        mark(r.closure),
        mark(r.associativity),
    )?;
    match &r.identity {
        Some(e) => write!(f, "{e}")?,
        None => write!(f, "none")?,
    }
    writeln!(
        f,
        " | inverses {} | commutativity {}",
        mark(r.inverses),
        mark(r.commutativity)
    )
}

impl fmt::Display for FieldReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mode = match self.mode {
            CheckMode::Exhaustive => "exhaustive".to_string(),
            CheckMode::Sampled { samples } => format!("sampled, {samples} triples"),
        };
        writeln!(
            f,
            "GF({}): {} ({mode}{})",
            self.modulus,
            if self.is_field() { "field" } else { "not a field" },
            if self.modulus_is_prime { "" } else { ", composite modulus" },
        )?;
        write_group(f, "additive", &self.additive)?;
        write_group(f, "multiplicative", &self.multiplicative)?;
        write!(
            f,
            "  distributivity: left {} | right {}",
            mark(self.distributivity.left),
            mark(self.distributivity.right)
        )?;
        if let Some(ok) = self.division_round_trip {
            write!(f, "\n  division round trip: {}", mark(ok))?;
        }
        Ok(())
    }
}

/// Runs the full battery of field checks for a modulus
#[derive(Clone, Debug, Default)]
pub struct FieldVerifier {
    config: VerifyConfig,
}

impl FieldVerifier {
    /// Build a verifier; fails if `config` does not validate
    pub fn new(config: VerifyConfig) -> Result<Self> {
        config.validate().with_context("FieldVerifier")?;
        Ok(Self { config })
    }

    /// The active configuration
    pub fn config(&self) -> &VerifyConfig {
        &self.config
    }

    /// Check whether the residues modulo `modulus` form a field
    pub fn verify(&self, modulus: i64) -> Result<FieldReport> {
        let field = PrimeField::new(modulus)?;
        validate::parameter(
            field.order() <= self.config.max_modulus,
            "FieldVerifier",
            "modulus exceeds max_modulus",
        )?;

        let elements = field.elements();
        let nonzero = field.nonzero_elements();

        let report = if field.order() <= self.config.exhaustive_limit {
            FieldReport {
                modulus: field.modulus(),
                modulus_is_prime: field.is_prime(),
                mode: CheckMode::Exhaustive,
                additive: check_group_axioms(&elements, &FieldAddition)?,
                multiplicative: check_group_axioms(&nonzero, &FieldMultiplication)?,
                distributivity: check_distributivity(
                    &elements,
                    &FieldAddition,
                    &FieldMultiplication,
                )?,
                division_round_trip: self.division_exhaustive(&elements, &nonzero)?,
            }
        } else {
            let samples = self.config.samples;
            let mut rng = ChaCha20Rng::seed_from_u64(self.config.seed ^ field.modulus());
            debug!(modulus = field.modulus(), samples, "sampling cubic laws");
            FieldReport {
                modulus: field.modulus(),
                modulus_is_prime: field.is_prime(),
                mode: CheckMode::Sampled { samples },
                additive: check_group_axioms_sampled(&elements, &FieldAddition, samples, &mut rng)?,
                multiplicative: check_group_axioms_sampled(
                    &nonzero,
                    &FieldMultiplication,
                    samples,
                    &mut rng,
                )?,
                distributivity: sample_distributivity(
                    &elements,
                    &FieldAddition,
                    &FieldMultiplication,
                    samples,
                    &mut rng,
                )?,
                division_round_trip: self.division_sampled(&field, &mut rng)?,
            }
        };

        info!(
            modulus = report.modulus,
            prime = report.modulus_is_prime,
            field = report.is_field(),
            mode = ?report.mode,
            "verified GF(p)"
        );
        Ok(report)
    }

    /// [`verify`](Self::verify) each modulus in turn
    pub fn verify_all(&self, moduli: &[i64]) -> Result<Vec<FieldReport>> {
        moduli.iter().map(|&m| self.verify(m)).collect()
    }

    /// [`verify_all`](Self::verify_all) over the configured moduli
    pub fn verify_configured(&self) -> Result<Vec<FieldReport>> {
        self.verify_all(&self.config.moduli)
    }

    fn division_exhaustive(
        &self,
        elements: &[FieldElement],
        nonzero: &[FieldElement],
    ) -> Result<Option<bool>> {
        if !self.config.check_division {
            return Ok(None);
        }
        for a in elements {
            for b in nonzero {
                if !round_trips(a, b)? {
                    return Ok(Some(false));
                }
            }
        }
        Ok(Some(true))
    }

    fn division_sampled<R: Rng>(&self, field: &PrimeField, rng: &mut R) -> Result<Option<bool>> {
        if !self.config.check_division {
            return Ok(None);
        }
        for _ in 0..self.config.samples {
            let a = field.random(rng);
            let b = field.random_nonzero(rng);
            if !round_trips(&a, &b)? {
                return Ok(Some(false));
            }
        }
        Ok(Some(true))
    }
}

/// `(a*b)/b == a`; a non-invertible `b` counts as a failed round trip
fn round_trips(a: &FieldElement, b: &FieldElement) -> Result<bool> {
    match a.mul(b)?.div(b) {
        Ok(back) if back == *a => Ok(true),
        Ok(_) | Err(Error::NoInverse { .. }) => {
            debug!(a = a.value(), b = b.value(), modulus = a.modulus(), "division round trip failed");
            Ok(false)
        }
        Err(e) => Err(e),
    }
}
