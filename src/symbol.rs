///! the wire type carried through every gate and circuit in this crate.
///!
///! a `Symbol` is either a known boolean `Constant`, or a reference to a
///! CNF `Variable` whose value isn't known until a SAT solver assigns it.
///! circuits fold constants away eagerly (see `gate::fold_and` et al) so a
///! `Tseitin` clause is only ever emitted when two live variables meet.

/// a 1-indexed DIMACS variable id. negative values denote the negated
/// literal of the same variable, matching DIMACS literal convention.
pub type Variable = i64;

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
  Constant(bool),
  Variable(Variable),
}

impl Symbol {
  pub const ZERO: Symbol = Symbol::Constant(false);
  pub const ONE: Symbol = Symbol::Constant(true);

  pub fn constant(value: bool) -> Symbol { Symbol::Constant(value) }
  pub fn variable(v: Variable) -> Symbol { Symbol::Variable(v) }

  pub fn is_constant(&self) -> bool { matches!(self, Symbol::Constant(_)) }
  pub fn is_variable(&self) -> bool { matches!(self, Symbol::Variable(_)) }

  pub fn as_constant(&self) -> Option<bool> {
    match self { Symbol::Constant(b) => Some(*b), Symbol::Variable(_) => None }
  }

  pub fn as_variable(&self) -> Option<Variable> {
    match self { Symbol::Variable(v) => Some(*v), Symbol::Constant(_) => None }
  }

  /// logical negation. always total: flips the constant, or negates the
  /// literal's sign (never allocates a clause).
  pub fn negate(self) -> Symbol {
    match self {
      Symbol::Constant(b) => Symbol::Constant(!b),
      Symbol::Variable(v) => Symbol::Variable(-v),
    }
  }
}

impl std::fmt::Debug for Symbol {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Symbol::Constant(b) => write!(f, "{}", if *b { 1 } else { 0 }),
      Symbol::Variable(v) => write!(f, "x{v}"),
    }
  }
}

/// a most-significant-bit-first sequence of wires, used for every
/// multi-bit quantity in this crate (factors, the target number, sums).
pub type BitVector = Vec<Symbol>;
