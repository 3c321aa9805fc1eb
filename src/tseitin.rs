///! Tseitin equality clause sets for the binary AND/OR/XOR gates.
///!
///! each `*_equality` function returns the clauses asserting that a fresh
///! output variable is logically equivalent to `op(x, y)`. a `BTreeSet` is
///! used for the clause itself (rather than e.g. a `Vec`) purely so that
///! two syntactically-equal clauses always iterate in the same order —
///! that's what lets `HashSet<Clause>` in `cnf::CnfBuilder` dedup clauses
///! that were derived independently but happen to coincide.

use std::collections::HashSet;
use crate::symbol::Variable;

pub type Clause = std::collections::BTreeSet<Variable>;

pub fn clause(literals: impl IntoIterator<Item = Variable>) -> Clause {
  literals.into_iter().collect()
}

pub fn empty_clause() -> Clause { Clause::new() }

pub fn unit_clause(literal: Variable) -> Clause { clause([literal]) }

/// true if the clause contains both a variable and its negation, i.e. it's
/// trivially satisfied and can be dropped without changing satisfiability.
pub fn is_tautology(c: &Clause) -> bool {
  c.iter().any(|&lit| c.contains(&-lit))
}

/// clauses asserting `out <-> (x & y)`.
pub fn and_equality(out: Variable, x: Variable, y: Variable) -> HashSet<Clause> {
  HashSet::from([
    clause([-out, x]),
    clause([-out, y]),
    clause([out, -x, -y]),
  ])
}

/// clauses asserting `out <-> (x | y)`.
pub fn or_equality(out: Variable, x: Variable, y: Variable) -> HashSet<Clause> {
  HashSet::from([
    clause([out, -x]),
    clause([out, -y]),
    clause([-out, x, y]),
  ])
}

/// clauses asserting `out <-> (x ^ y)`.
pub fn xor_equality(out: Variable, x: Variable, y: Variable) -> HashSet<Clause> {
  HashSet::from([
    clause([-out, -x, -y]),
    clause([-out, x, y]),
    clause([out, -x, y]),
    clause([out, x, -y]),
  ])
}
