///! DIMACS CNF text format: a `c`-prefixed comment block, one `p cnf
///! <vars> <clauses>` problem line, then one space-separated,
///! zero-terminated clause per line.

use crate::cnf::Cnf;
use crate::error::FactorSatError;
use crate::tseitin::Clause;
use std::collections::HashSet;

fn clause_to_line(clause: &Clause) -> String {
  let mut parts: Vec<String> = clause.iter().map(|lit| lit.to_string()).collect();
  parts.push("0".to_string());
  parts.join(" ")
}

/// render a CNF plus an arbitrary comment block as DIMACS text. clauses
/// are written in their canonical (sorted) order so the same `Cnf` always
/// serializes to the same bytes.
pub fn write(cnf: &Cnf, comments: &[String]) -> String {
  let mut lines: Vec<String> = comments.iter().map(|c| format!("c {c}")).collect();
  lines.push(format!("p cnf {} {}", cnf.number_of_variables, cnf.clauses.len()));
  let mut clauses: Vec<&Clause> = cnf.clauses.iter().collect();
  clauses.sort();
  lines.extend(clauses.into_iter().map(clause_to_line));
  lines.join("\n")
}

/// parse a DIMACS CNF document, ignoring comment lines, and returning the
/// declared variable count alongside the clause set.
pub fn parse(text: &str) -> Result<(usize, HashSet<Clause>), FactorSatError> {
  let mut lines = text.lines().filter(|l| !l.trim().is_empty());
  let problem_line = loop {
    match lines.next() {
      Some(line) if line.starts_with('c') => continue,
      Some(line) if line.starts_with("p cnf") => break line,
      Some(line) => return Err(FactorSatError::InvalidDimacs(format!("expected problem line, got: {line}"))),
      None => return Err(FactorSatError::InvalidDimacs("missing problem line".into())),
    }
  };

  let mut fields = problem_line.split_whitespace().skip(2);
  let number_of_variables: usize = fields
    .next()
    .ok_or_else(|| FactorSatError::InvalidDimacs("problem line missing variable count".into()))?
    .parse()
    .map_err(|_| FactorSatError::InvalidDimacs("problem line has a non-numeric variable count".into()))?;
  let number_of_clauses: usize = fields
    .next()
    .ok_or_else(|| FactorSatError::InvalidDimacs("problem line missing clause count".into()))?
    .parse()
    .map_err(|_| FactorSatError::InvalidDimacs("problem line has a non-numeric clause count".into()))?;

  let mut clauses = HashSet::new();
  for line in lines {
    let literals: Vec<i64> = line
      .split_whitespace()
      .map(|tok| tok.parse())
      .collect::<Result<_, _>>()
      .map_err(|_| FactorSatError::InvalidDimacs(format!("clause line has a non-numeric literal: {line}")))?;
    let (terminator, literals) = literals
      .split_last()
      .ok_or_else(|| FactorSatError::InvalidDimacs("empty clause line".into()))?;
    if *terminator != 0 {
      return Err(FactorSatError::InvalidDimacs(format!("clause line not terminated with 0: {line}")));
    }
    clauses.insert(literals.iter().copied().collect::<Clause>());
  }

  if clauses.len() != number_of_clauses {
    return Err(FactorSatError::InvalidDimacs(format!(
      "problem line declared {number_of_clauses} clauses, found {}",
      clauses.len()
    )));
  }

  Ok((number_of_variables, clauses))
}
