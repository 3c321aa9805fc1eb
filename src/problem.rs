///! turns a CLI request (a literal number, or a random-number search) into
///! a `FactoringInstance` plus the provenance needed to label its output.

use num_bigint::{BigUint, RandBigInt};
use rand::{rngs::StdRng, RngCore, SeedableRng};

use crate::error::FactorSatError;
use crate::factoring::{self, FactoringInstance};
use crate::multiply::Algorithm;
use crate::primality;

/// tri-state filter on whether the drawn number should be prime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimeRequirement {
  Either,
  Prime,
  Composite,
}

/// how a random draw's primality was established, carried into the
/// DIMACS comment block so a reader knows how much to trust the label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
  DeterministicPrime,
  ProbabilisticPrime,
  DeterministicComposite,
  ProbabilisticComposite,
  Unknown,
}

impl Classification {
  /// the slug used in default output filenames.
  pub fn tag(&self) -> &'static str {
    match self {
      Classification::DeterministicPrime => "prime",
      Classification::ProbabilisticPrime => "prob-prime",
      Classification::DeterministicComposite | Classification::ProbabilisticComposite => "composite",
      Classification::Unknown => "random",
    }
  }
}

#[derive(Debug, Clone)]
pub struct Provenance {
  pub seed: u64,
  pub min_value: BigUint,
  pub max_value: BigUint,
  pub classification: Classification,
}

#[derive(Debug, Clone)]
pub struct RandomParams {
  pub min_value: BigUint,
  pub max_value: BigUint,
  pub seed: Option<u64>,
  pub prime: PrimeRequirement,
  pub error: f64,
  pub max_tries: u32,
}

/// the result of a random draw: the compiled instance plus how it was found.
pub struct RandomInstance {
  pub instance: FactoringInstance,
  pub provenance: Provenance,
}

pub fn factorize_number(number: &BigUint, algorithm: Algorithm) -> FactoringInstance {
  factoring::factorize(number, algorithm)
}

fn classify(n: &BigUint, error: f64, rng: &mut StdRng) -> (bool, Classification) {
  if error <= 0.0 {
    let is_p = primality::is_prime(n, rng);
    (is_p, if is_p { Classification::DeterministicPrime } else { Classification::DeterministicComposite })
  } else {
    let is_p = primality::is_probably_prime(n, error, rng);
    (is_p, if is_p { Classification::ProbabilisticPrime } else { Classification::ProbabilisticComposite })
  }
}

fn accept(candidate: &BigUint, requirement: PrimeRequirement, error: f64, rng: &mut StdRng) -> Option<Classification> {
  match requirement {
    PrimeRequirement::Either => Some(Classification::Unknown),
    PrimeRequirement::Prime => {
      let (is_p, c) = classify(candidate, error, rng);
      is_p.then_some(c)
    }
    PrimeRequirement::Composite => {
      let (is_p, c) = classify(candidate, error, rng);
      (!is_p).then_some(c)
    }
  }
}

/// draw candidates from `[min_value, max_value]` until one satisfies
/// `prime`, or give up after `max_tries` attempts. every draw, and every
/// primality witness consulted along the way, comes from the same
/// seeded RNG, so the whole search is reproducible given the seed alone.
pub fn factorize_random(params: &RandomParams, algorithm: Algorithm) -> Result<RandomInstance, FactorSatError> {
  let seed = params.seed.unwrap_or_else(|| rand::thread_rng().next_u64());
  let mut rng = StdRng::seed_from_u64(seed);
  let upper = &params.max_value + 1u32;

  for attempt in 0..params.max_tries {
    let candidate = rng.gen_biguint_range(&params.min_value, &upper);
    if let Some(classification) = accept(&candidate, params.prime, params.error, &mut rng) {
      log::info!("accepted candidate {candidate} after {} attempt(s) (seed {seed})", attempt + 1);
      let instance = factoring::factorize(&candidate, algorithm);
      let provenance = Provenance {
        seed,
        min_value: params.min_value.clone(),
        max_value: params.max_value.clone(),
        classification,
      };
      return Ok(RandomInstance { instance, provenance });
    }
  }
  log::warn!("gave up after {} tries (seed {seed})", params.max_tries);
  Err(FactorSatError::PredicateUnsatisfiable { tries: params.max_tries, seed })
}
