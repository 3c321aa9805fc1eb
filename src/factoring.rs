///! assembles the multiplier and n-bit equality circuits into a complete
///! factoring instance: allocate two factor bit-vectors, multiply them,
///! and assert the product equals the target number's bits.

use num_bigint::BigUint;
use num_traits::Zero;

use crate::cnf::{Cnf, CnfBuilder};
use crate::circuit::nbit::n_bit_equality;
use crate::gate::{GateStrategy, TseitinGate};
use crate::multiply::{self, Algorithm};
use crate::symbol::{BitVector, Symbol, Variable};

/// the two widths assigned to the unknown factors for a target of
/// `number_length` bits (its full binary representation, leading 1
/// included). `factor_length_1 = ceil(number_length / 2)`,
/// `factor_length_2 = number_length - 1`: together they can represent
/// any pair whose product has `number_length` bits, and no fewer. for a
/// single-bit target (`number_length == 1`, i.e. N is 0 or 1) the second
/// factor is empty — `multiply` treats an empty operand as the constant
/// zero, so such a target is only satisfiable when N itself is 0.
pub fn factor_lengths(number_length: usize) -> (usize, usize) {
  assert!(number_length >= 1, "a number's bit length is never zero");
  ((number_length + 1) / 2, number_length - 1)
}

/// most-significant-bit-first constant bits of `n`. always at least one
/// bit long (zero is represented as a single `ZERO` bit).
pub fn bits_of(n: &BigUint) -> BitVector {
  if n.is_zero() {
    return vec![Symbol::ZERO];
  }
  n.to_str_radix(2).bytes().map(|b| Symbol::Constant(b == b'1')).collect()
}

#[derive(Debug, Clone)]
pub struct FactoringInstance {
  pub number: BigUint,
  pub factor_1: Vec<Variable>,
  pub factor_2: Vec<Variable>,
  pub cnf: Cnf,
}

/// compile "does some `factor_1 * factor_2 == number` hold" into CNF.
pub fn factorize(number: &BigUint, algorithm: Algorithm) -> FactoringInstance {
  let mut builder = CnfBuilder::new();
  let number_bits = bits_of(number);
  let (width_1, width_2) = factor_lengths(number_bits.len());
  log::info!(
    "factoring a {}-bit target into factors of {width_1} and {width_2} bits",
    number_bits.len()
  );

  let factor_1_vars = builder.next_variables(width_1);
  let factor_2_vars = builder.next_variables(width_2);
  let factor_1: BitVector = factor_1_vars.iter().map(|&v| Symbol::Variable(v)).collect();
  let factor_2: BitVector = factor_2_vars.iter().map(|&v| Symbol::Variable(v)).collect();

  let gate = TseitinGate;
  let product = multiply::multiply(algorithm, &gate, &mut builder, &factor_1, &factor_2);
  let equal = n_bit_equality(&gate, &mut builder, &product, &number_bits);
  gate.assume(equal, true, &mut builder);

  let cnf = builder.finalize();
  FactoringInstance { number: number.clone(), factor_1: factor_1_vars, factor_2: factor_2_vars, cnf }
}
