///! Wallace-tree multiplication: build every partial product `x_i & y_j`,
///! bucket them by binary weight, and repeatedly collapse each bucket
///! down to at most two bits with half/full adders until every bucket
///! fits in a final ripple-carry pass. the base multiplier delegated to
///! by `multiply::karatsuba` once an operand gets small.

use std::collections::BTreeMap;

use crate::circuit::simple::{full_adder, half_adder};
use crate::gate::GateStrategy;
use crate::symbol::{BitVector, Symbol};

fn weighted_partial_products<G: GateStrategy>(
  g: &G,
  w: &mut G::Writer,
  xs: &[Symbol],
  ys: &[Symbol],
) -> Vec<(usize, Symbol)> {
  let mut products = Vec::with_capacity(xs.len() * ys.len());
  for (i, &x) in xs.iter().enumerate() {
    let weight_x = xs.len() - i;
    for (j, &y) in ys.iter().enumerate() {
      let weight_y = ys.len() - j;
      products.push((weight_x + weight_y, g.and(x, y, w)));
    }
  }
  products
}

fn group_by_weight(items: Vec<(usize, Symbol)>) -> BTreeMap<usize, Vec<Symbol>> {
  let mut columns: BTreeMap<usize, Vec<Symbol>> = BTreeMap::new();
  for (weight, bit) in items {
    columns.entry(weight).or_default().push(bit);
  }
  columns
}

/// collapse one column of bits one adder-layer deep, possibly spilling
/// bits into the next-higher-weight column (the carry output).
fn reduce_layer<G: GateStrategy>(g: &G, w: &mut G::Writer, weight: usize, bits: Vec<Symbol>) -> Vec<(usize, Symbol)> {
  match bits.len() {
    0 => vec![],
    1 => vec![(weight, bits[0])],
    2 => {
      let (sum, carry) = half_adder(g, w, bits[0], bits[1]);
      vec![(weight, sum), (weight + 1, carry)]
    }
    _ => {
      let (sum, carry) = full_adder(g, w, bits[0], bits[1], bits[2]);
      let mut out = vec![(weight, sum), (weight + 1, carry)];
      out.extend(bits[3..].iter().map(|&b| (weight, b)));
      out
    }
  }
}

pub fn multiply<G: GateStrategy>(g: &G, w: &mut G::Writer, xs: &[Symbol], ys: &[Symbol]) -> BitVector {
  let mut columns = group_by_weight(weighted_partial_products(g, w, xs, ys));
  while columns.values().any(|bits| bits.len() > 2) {
    let mut next = Vec::new();
    for (weight, bits) in columns {
      next.extend(reduce_layer(g, w, weight, bits));
    }
    columns = group_by_weight(next);
  }

  // every column now holds at most two bits: ripple them together from
  // lowest weight to highest, carrying into the next column.
  let mut carry = Symbol::ZERO;
  let mut result = std::collections::VecDeque::new();
  for (_, bits) in columns {
    let (sum, next_carry) = match bits.len() {
      0 => (Symbol::ZERO, Symbol::ZERO),
      1 => half_adder(g, w, bits[0], carry),
      2 => full_adder(g, w, bits[0], bits[1], carry),
      _ => unreachable!("wallace column should hold at most two bits after reduction"),
    };
    carry = next_carry;
    result.push_front(sum);
  }
  result.push_front(carry);
  result.into_iter().collect()
}
