mod common;

use num_bigint::BigUint;
use proptest::prelude::*;

use gen_factor_sat::cnf::CnfBuilder;
use gen_factor_sat::factoring::{bits_of, factorize};
use gen_factor_sat::gate::{EvalGate, TseitinGate};
use gen_factor_sat::multiply::{self, Algorithm};
use gen_factor_sat::symbol::Symbol;

fn eval_bits(value: u64, width: usize) -> Vec<Symbol> {
  (0..width).rev().map(|i| Symbol::Constant((value >> i) & 1 == 1)).collect()
}

fn to_u128(bits: &[Symbol]) -> u128 {
  bits.iter().fold(0u128, |acc, b| (acc << 1) | b.as_constant().unwrap() as u128)
}

fn min_width(value: u64) -> usize {
  if value == 0 {
    1
  } else {
    64 - value.leading_zeros() as usize
  }
}

proptest! {
  // property 1: eval multiplication matches integer multiplication.
  #[test]
  fn multiplication_correctness_eval(x in 0u64..1_000_000, y in 0u64..1_000_000) {
    let gate = EvalGate;
    let mut writer = ();
    let xs = eval_bits(x, min_width(x));
    let ys = eval_bits(y, min_width(y));
    let wallace = multiply::multiply(Algorithm::Wallace, &gate, &mut writer, &xs, &ys);
    let karatsuba = multiply::multiply(Algorithm::Karatsuba, &gate, &mut writer, &xs, &ys);
    prop_assert_eq!(to_u128(&wallace), (x as u128) * (y as u128));
    // property 3: cross-multiplier equivalence under eval.
    prop_assert_eq!(to_u128(&wallace), to_u128(&karatsuba));
  }

  // property 2: Tseitin multiplication, checked via unit propagation on
  // the emitted clauses after fixing the input variables to x's and y's bits.
  #[test]
  fn multiplication_correctness_tseitin(x in 0u64..100, y in 0u64..100) {
    let gate = TseitinGate;
    let mut writer = CnfBuilder::new();
    let width_x = min_width(x).max(1);
    let width_y = min_width(y).max(1);
    let x_vars = writer.next_variables(width_x);
    let y_vars = writer.next_variables(width_y);
    let xs: Vec<Symbol> = x_vars.iter().map(|&v| Symbol::Variable(v)).collect();
    let ys: Vec<Symbol> = y_vars.iter().map(|&v| Symbol::Variable(v)).collect();
    let product = multiply::multiply(Algorithm::Karatsuba, &gate, &mut writer, &xs, &ys);
    let product_vars: Vec<i64> = product.iter().map(|s| s.as_variable().unwrap()).collect();
    let cnf = writer.finalize();

    let clauses: Vec<_> = cnf.clauses.into_iter().collect();
    let vars: Vec<i64> = x_vars.iter().chain(y_vars.iter()).copied().collect();
    let bits: Vec<bool> = common::bits_of_width(x, width_x).into_iter().chain(common::bits_of_width(y, width_y)).collect();
    let assignment = common::is_consistent_with(&clauses, &vars, &bits).expect("propagation must not conflict");

    let expected = x * y;
    let decoded = product_vars.iter().rev().enumerate().fold(0u128, |acc, (i, v)| {
      let bit = *assignment.get(v).expect("every product bit must be forced by propagation");
      acc | ((bit as u128) << i)
    });
    prop_assert_eq!(decoded, expected as u128);
  }
}

/// upper bound for the BigUint-scale sampling below: 10^20, matching
/// spec.md §8 property 1's own example range; products of two such
/// operands reach 10^40, which `to_u128` above cannot represent.
const MAX_SAMPLE: u128 = 100_000_000_000_000_000_000;

fn biguint_strategy() -> impl Strategy<Value = BigUint> {
  (0u128..MAX_SAMPLE).prop_map(BigUint::from)
}

fn to_biguint(bits: &[Symbol]) -> BigUint {
  let digits: Vec<u8> = bits.iter().map(|b| b.as_constant().unwrap() as u8).collect();
  BigUint::from_radix_be(&digits, 2).expect("circuit bits are always 0 or 1")
}

proptest! {
  // property 1 at the scale spec.md actually asks for: operands up to
  // 10^20, products up to 10^40, decoded against BigUint rather than
  // u128 (too narrow to hold a 10^40-scale product). also re-checks
  // property 3 (cross-multiplier agreement) at this scale.
  #[test]
  fn multiplication_correctness_eval_biguint_scale(x in biguint_strategy(), y in biguint_strategy()) {
    let gate = EvalGate;
    let mut writer = ();
    let xs = bits_of(&x);
    let ys = bits_of(&y);
    let wallace = multiply::multiply(Algorithm::Wallace, &gate, &mut writer, &xs, &ys);
    let karatsuba = multiply::multiply(Algorithm::Karatsuba, &gate, &mut writer, &xs, &ys);
    prop_assert_eq!(to_biguint(&wallace), &x * &y);
    prop_assert_eq!(to_biguint(&wallace), to_biguint(&karatsuba));
  }
}

#[test]
fn no_finalized_clause_is_a_tautology() {
  for n in [15u32, 21, 143, 997] {
    let instance = factorize(&BigUint::from(n), Algorithm::Karatsuba);
    for clause in &instance.cnf.clauses {
      assert!(
        !clause.iter().any(|&lit| clause.contains(&-lit)),
        "clause {clause:?} in the N={n} instance is a tautology"
      );
    }
  }
}

#[test]
fn every_literal_is_within_the_declared_variable_range() {
  for n in [15u32, 21, 255] {
    let instance = factorize(&BigUint::from(n), Algorithm::Wallace);
    let max_var = instance.cnf.number_of_variables as i64;
    for clause in &instance.cnf.clauses {
      for &lit in clause {
        assert!(lit.abs() >= 1 && lit.abs() <= max_var, "literal {lit} outside 1..={max_var}");
      }
    }
    for &v in instance.factor_1.iter().chain(instance.factor_2.iter()) {
      assert!(v >= 1 && v <= max_var);
    }
  }
}

#[test]
fn dimacs_round_trips_for_every_instance() {
  for n in [2u32, 15, 17, 255] {
    let instance = factorize(&BigUint::from(n), Algorithm::Karatsuba);
    let text = gen_factor_sat::dimacs::write(&instance.cnf, &[format!("N = {n}")]);
    let (num_vars, clauses) = gen_factor_sat::dimacs::parse(&text).unwrap();
    assert_eq!(num_vars, instance.cnf.number_of_variables);
    assert_eq!(clauses, instance.cnf.clauses);
  }
}
