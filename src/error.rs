///! the library's error type. kept small and specific, the way callers
///! expect from a `thiserror` enum rather than a string grab-bag.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FactorSatError {
  #[error("no number in range met the requested predicate after {tries} tries (seed {seed})")]
  PredicateUnsatisfiable { tries: u32, seed: u64 },

  #[error("invalid DIMACS input: {0}")]
  InvalidDimacs(String),

  #[error(transparent)]
  Io(#[from] std::io::Error),
}
