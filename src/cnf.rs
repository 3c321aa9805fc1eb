///! incremental CNF construction: fresh variable allocation plus clause
///! accumulation, mirroring the teacher's `Base` arena (a counter plus a
///! growable node store) but specialized to clauses instead of AST nodes.

use std::collections::HashSet;
use crate::symbol::Variable;
use crate::tseitin::{is_tautology, Clause};

#[derive(Debug, Clone)]
pub struct Cnf {
  pub number_of_variables: usize,
  pub clauses: HashSet<Clause>,
}

pub struct CnfBuilder {
  num_vars: usize,
  clauses: HashSet<Clause>,
}

impl CnfBuilder {
  pub fn new() -> Self {
    CnfBuilder { num_vars: 0, clauses: HashSet::new() }
  }

  pub fn next_variable(&mut self) -> Variable {
    self.num_vars += 1;
    self.num_vars as Variable
  }

  pub fn next_variables(&mut self, amount: usize) -> Vec<Variable> {
    (0..amount).map(|_| self.next_variable()).collect()
  }

  pub fn append(&mut self, clauses: impl IntoIterator<Item = Clause>) {
    self.clauses.extend(clauses);
  }

  /// allocate a fresh output variable, derive its defining clauses from
  /// `encode`, record them, and return the new variable. this is the one
  /// place a Tseitin gate touches the builder.
  pub fn from_tseitin(
    &mut self,
    encode: impl Fn(Variable, Variable, Variable) -> HashSet<Clause>,
    x: Variable,
    y: Variable,
  ) -> Variable {
    let out = self.next_variable();
    let clauses = encode(out, x, y);
    log::trace!("allocated tseitin variable x{out} from x{x}, x{y} ({} clauses)", clauses.len());
    self.append(clauses);
    out
  }

  pub fn finalize(self) -> Cnf {
    let clauses: HashSet<Clause> = self.clauses.into_iter().filter(|c| !is_tautology(c)).collect();
    log::debug!("finalized cnf: {} variables, {} clauses", self.num_vars, clauses.len());
    Cnf { number_of_variables: self.num_vars, clauses }
  }
}

impl Default for CnfBuilder {
  fn default() -> Self { Self::new() }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::tseitin::clause;

  #[test] fn fresh_variables_are_sequential() {
    let mut b = CnfBuilder::new();
    assert_eq!(b.next_variable(), 1);
    assert_eq!(b.next_variable(), 2);
    assert_eq!(b.next_variables(3), vec![3, 4, 5]);
  }

  #[test] fn append_accumulates_clauses() {
    let mut b = CnfBuilder::new();
    b.append([clause([1, 2]), clause([-1, 3])]);
    let cnf = b.finalize();
    assert_eq!(cnf.clauses.len(), 2);
  }

  #[test] fn finalize_drops_tautologies() {
    let mut b = CnfBuilder::new();
    b.append([clause([1, -1]), clause([2, 3])]);
    let cnf = b.finalize();
    assert_eq!(cnf.clauses.len(), 1);
    assert!(cnf.clauses.contains(&clause([2, 3])));
  }

  #[test] fn from_tseitin_allocates_and_records() {
    let mut b = CnfBuilder::new();
    let x = b.next_variable();
    let y = b.next_variable();
    let out = b.from_tseitin(crate::tseitin::and_equality, x, y);
    assert_eq!(out, 3);
    let cnf = b.finalize();
    assert_eq!(cnf.clauses.len(), 3);
  }
}
