///! bit-vector circuits built out of `circuit::simple`'s one-bit gates.
///! every `BitVector` here is most-significant-bit first; operands of
///! differing width are zero-padded on the left (the MSB side) up to the
///! wider operand's width before any gate runs.

use crate::circuit::simple::{equality, full_adder, half_adder};
use crate::gate::GateStrategy;
use crate::symbol::{BitVector, Symbol};

fn pad_msb(xs: &[Symbol], width: usize) -> BitVector {
  if xs.len() >= width {
    xs.to_vec()
  } else {
    let mut padded = vec![Symbol::ZERO; width - xs.len()];
    padded.extend_from_slice(xs);
    padded
  }
}

/// `xs + ys + carry_in`, result width `max(xs.len(), ys.len()) + 1`
/// (the extra bit is the final carry-out, prepended as the new MSB).
pub fn n_bit_adder<G: GateStrategy>(
  g: &G,
  w: &mut G::Writer,
  xs: &[Symbol],
  ys: &[Symbol],
  carry_in: Symbol,
) -> BitVector {
  let width = xs.len().max(ys.len());
  let xs = pad_msb(xs, width);
  let ys = pad_msb(ys, width);
  let mut carry = carry_in;
  let mut result = std::collections::VecDeque::with_capacity(width + 1);
  for i in (0..width).rev() {
    let (sum, next_carry) = full_adder(g, w, xs[i], ys[i], carry);
    carry = next_carry;
    result.push_front(sum);
  }
  result.push_front(carry);
  result.into_iter().collect()
}

/// `xs - ys` via two's complement (bitwise-not `ys`, add with `carry_in =
/// 1`, discard the overflow bit); result width `max(xs.len(), ys.len())`.
pub fn subtract<G: GateStrategy>(g: &G, w: &mut G::Writer, xs: &[Symbol], ys: &[Symbol]) -> BitVector {
  let width = xs.len().max(ys.len());
  let xs = pad_msb(xs, width);
  let ys = pad_msb(ys, width);
  let negated_ys: BitVector = ys.iter().map(|&b| g.not(b, w)).collect();
  let summed = n_bit_adder(g, w, &xs, &negated_ys, Symbol::ONE);
  summed[1..].to_vec()
}

/// left shift by `amount` bits (appends zero bits at the LSB end).
pub fn shift(xs: &[Symbol], amount: usize) -> BitVector {
  let mut result = xs.to_vec();
  result.extend(std::iter::repeat(Symbol::ZERO).take(amount));
  result
}

/// bitwise equality, AND-reduced across the (zero-padded) width.
pub fn n_bit_equality<G: GateStrategy>(g: &G, w: &mut G::Writer, xs: &[Symbol], ys: &[Symbol]) -> Symbol {
  let width = xs.len().max(ys.len());
  let xs = pad_msb(xs, width);
  let ys = pad_msb(ys, width);
  let mut acc = Symbol::ONE;
  for i in 0..width {
    let bit_eq = equality(g, w, xs[i], ys[i]);
    acc = g.and(acc, bit_eq, w);
  }
  acc
}
