///! two interchangeable realizations of the same boolean gate algebra.
///! `EvalGate` works on fully-known constants and panics the moment it
///! meets a live variable; `TseitinGate` is the inverse — it folds
///! constants for free and only touches the `CnfBuilder` when a gate's
///! inputs include a real variable.

use crate::cnf::CnfBuilder;
use crate::symbol::{Symbol, Variable};
use crate::tseitin::{and_equality, or_equality, xor_equality};

/// fold `x OP y` down to a constant when possible; `None` means at least
/// one operand is a live variable and the caller must realize the gate.
pub fn fold_and(x: Symbol, y: Symbol) -> Option<Symbol> {
  match (x, y) {
    (Symbol::Constant(false), _) | (_, Symbol::Constant(false)) => Some(Symbol::ZERO),
    (Symbol::Constant(true), other) | (other, Symbol::Constant(true)) => Some(other),
    _ => None,
  }
}

pub fn fold_or(x: Symbol, y: Symbol) -> Option<Symbol> {
  match (x, y) {
    (Symbol::Constant(true), _) | (_, Symbol::Constant(true)) => Some(Symbol::ONE),
    (Symbol::Constant(false), other) | (other, Symbol::Constant(false)) => Some(other),
    _ => None,
  }
}

pub fn fold_xor(x: Symbol, y: Symbol) -> Option<Symbol> {
  match (x, y) {
    (Symbol::Constant(a), Symbol::Constant(b)) => Some(Symbol::Constant(a ^ b)),
    (Symbol::Constant(false), other) | (other, Symbol::Constant(false)) => Some(other),
    (Symbol::Constant(true), other) | (other, Symbol::Constant(true)) => Some(other.negate()),
    _ => None,
  }
}

/// negation is always free: it never needs a writer.
pub fn fold_not(x: Symbol) -> Symbol { x.negate() }

pub trait GateStrategy {
  type Writer;

  fn and(&self, x: Symbol, y: Symbol, writer: &mut Self::Writer) -> Symbol;
  fn or(&self, x: Symbol, y: Symbol, writer: &mut Self::Writer) -> Symbol;
  fn xor(&self, x: Symbol, y: Symbol, writer: &mut Self::Writer) -> Symbol;

  /// assert that `x` equals the given boolean value.
  fn assume(&self, x: Symbol, value: bool, writer: &mut Self::Writer);

  fn not(&self, x: Symbol, _writer: &mut Self::Writer) -> Symbol { fold_not(x) }
}

/// gates over fully-constant operands. used for property-based testing a
/// circuit against a reference boolean evaluation (spec §8, property 1).
#[derive(Debug, Default, Clone, Copy)]
pub struct EvalGate;

impl GateStrategy for EvalGate {
  type Writer = ();

  fn and(&self, x: Symbol, y: Symbol, _writer: &mut ()) -> Symbol {
    fold_and(x, y).unwrap_or_else(|| panic!("EvalGate::and given a live variable: {x:?}, {y:?}"))
  }
  fn or(&self, x: Symbol, y: Symbol, _writer: &mut ()) -> Symbol {
    fold_or(x, y).unwrap_or_else(|| panic!("EvalGate::or given a live variable: {x:?}, {y:?}"))
  }
  fn xor(&self, x: Symbol, y: Symbol, _writer: &mut ()) -> Symbol {
    fold_xor(x, y).unwrap_or_else(|| panic!("EvalGate::xor given a live variable: {x:?}, {y:?}"))
  }
  fn assume(&self, x: Symbol, value: bool, _writer: &mut ()) {
    match x.as_constant() {
      Some(b) if b == value => (),
      _ => panic!("EvalGate::assume violated: {x:?} is not {value}"),
    }
  }
}

/// gates that fold constants eagerly and otherwise defer to Tseitin
/// clauses, so the builder only ever sees variables that must exist.
#[derive(Debug, Default, Clone, Copy)]
pub struct TseitinGate;

impl TseitinGate {
  fn realize(
    &self,
    x: Symbol,
    y: Symbol,
    writer: &mut CnfBuilder,
    encode: impl Fn(Variable, Variable, Variable) -> std::collections::HashSet<crate::tseitin::Clause>,
  ) -> Symbol {
    let xv = x.as_variable().expect("realize called with a constant operand");
    let yv = y.as_variable().expect("realize called with a constant operand");
    Symbol::Variable(writer.from_tseitin(encode, xv, yv))
  }
}

impl GateStrategy for TseitinGate {
  type Writer = CnfBuilder;

  fn and(&self, x: Symbol, y: Symbol, writer: &mut CnfBuilder) -> Symbol {
    fold_and(x, y).unwrap_or_else(|| self.realize(x, y, writer, and_equality))
  }
  fn or(&self, x: Symbol, y: Symbol, writer: &mut CnfBuilder) -> Symbol {
    fold_or(x, y).unwrap_or_else(|| self.realize(x, y, writer, or_equality))
  }
  fn xor(&self, x: Symbol, y: Symbol, writer: &mut CnfBuilder) -> Symbol {
    fold_xor(x, y).unwrap_or_else(|| self.realize(x, y, writer, xor_equality))
  }

  fn assume(&self, x: Symbol, value: bool, writer: &mut CnfBuilder) {
    match x {
      Symbol::Constant(b) if b == value => (),
      Symbol::Constant(b) => {
        log::warn!("assume() given a constant contradiction ({b} != {value}); cnf is now unsatisfiable");
        writer.append([crate::tseitin::empty_clause()]);
      }
      Symbol::Variable(v) => {
        let lit = if value { v } else { -v };
        writer.append([crate::tseitin::unit_clause(lit)]);
      }
    }
  }
}
