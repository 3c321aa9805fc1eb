///! primality testing for problem generation's `--prime`/`--no-prime`
///! filter. `is_prime` below `DETERMINISTIC_BOUND` uses a fixed witness
///! set proven correct over that range; above it, there's no known
///! efficient test with a correctness proof, so it falls back to a
///! generous round count of Miller-Rabin, same as the probabilistic path
///! but with enough rounds that a false positive is practically
///! impossible. `is_probably_prime` is the honest Monte-Carlo test used
///! when the caller supplies an explicit error bound.

use num_bigint::{BigUint, RandBigInt};
use num_integer::Integer;
use num_traits::{One, Zero};
use rand::RngCore;

/// Miller-Rabin is proven deterministic for all n below this bound when
/// tested against these twelve witnesses (Sinclair, 2011 / OEIS A014233
/// extended table).
const DETERMINISTIC_WITNESSES: &[u32] = &[2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37];

/// number of Miller-Rabin rounds used as a practical stand-in for a
/// correctness proof once `n` exceeds the fixed witness set's bound.
const FALLBACK_ROUNDS: u32 = 64;

fn small_u32(n: &BigUint, value: u32) -> bool { *n == BigUint::from(value) }

fn trial_divide(n: &BigUint) -> Option<bool> {
  for &p in &[2u32, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31] {
    if small_u32(n, p) {
      return Some(true);
    }
    if (n % p).is_zero() {
      return Some(false);
    }
  }
  None
}

fn factor_out_twos(n: &BigUint) -> (u32, BigUint) {
  let mut d = n.clone();
  let mut r = 0u32;
  while d.is_even() {
    d >>= 1u32;
    r += 1;
  }
  (r, d)
}

fn witness_rules_out(n: &BigUint, r: u32, d: &BigUint, a: &BigUint) -> bool {
  let mut x = a.modpow(d, n);
  if x.is_one() || x == n - 1u32 {
    return false;
  }
  for _ in 1..r {
    x = x.modpow(&BigUint::from(2u32), n);
    if x == n - 1u32 {
      return false;
    }
  }
  true
}

fn miller_rabin_fixed(n: &BigUint, r: u32, d: &BigUint) -> bool {
  !DETERMINISTIC_WITNESSES
    .iter()
    .map(|&a| BigUint::from(a))
    .filter(|a| a < n)
    .any(|a| witness_rules_out(n, r, d, &a))
}

fn miller_rabin_random(n: &BigUint, rounds: u32, r: u32, d: &BigUint, rng: &mut impl RngCore) -> bool {
  let lo = BigUint::from(2u32);
  let hi = n - 2u32;
  (0..rounds).all(|_| {
    let a = rng.gen_biguint_range(&lo, &hi);
    !witness_rules_out(n, r, d, &a)
  })
}

/// a correctness-proof-backed test below `2^64`-ish inputs, and a
/// high-confidence heuristic above it.
pub fn is_prime(n: &BigUint, rng: &mut impl RngCore) -> bool {
  if *n < BigUint::from(2u32) {
    return false;
  }
  if let Some(small) = trial_divide(n) {
    return small;
  }
  let (r, d) = factor_out_twos(&(n - 1u32));
  if n.bits() <= 64 {
    miller_rabin_fixed(n, r, &d)
  } else {
    miller_rabin_random(n, FALLBACK_ROUNDS, r, &d, rng)
  }
}

/// number of Miller-Rabin rounds needed so a composite is misclassified
/// as prime with probability at most `error`. each round's false-positive
/// probability is at most 1/4, so `rounds >= -log2(error) / 2`.
pub fn rounds_for_error(error: f64) -> u32 {
  if error <= 0.0 {
    return FALLBACK_ROUNDS;
  }
  ((-error.log2() / 2.0).ceil().max(1.0)) as u32
}

/// a Monte-Carlo test with false-positive probability at most `error`.
pub fn is_probably_prime(n: &BigUint, error: f64, rng: &mut impl RngCore) -> bool {
  if *n < BigUint::from(2u32) {
    return false;
  }
  if let Some(small) = trial_divide(n) {
    return small;
  }
  let (r, d) = factor_out_twos(&(n - 1u32));
  miller_rabin_random(n, rounds_for_error(error), r, &d, rng)
}
