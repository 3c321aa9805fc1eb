//! Compiles the factorization of an integer into a boolean satisfiability
//! problem in DIMACS CNF format.
//!
//! The pipeline mirrors the data flow of the circuits it builds: a
//! [`problem`] request (a literal number, or a random draw) becomes a
//! [`factoring`] instance, which multiplies two fresh factor bit-vectors
//! with a [`multiply`] circuit built from [`circuit`] primitives, realized
//! through a [`gate`] strategy into [`tseitin`] clauses accumulated by a
//! [`cnf`] builder, and finally rendered as text by [`dimacs`].

#[macro_use] extern crate log;
extern crate simplelog;

/// The wire type (`Constant` or `Variable`) carried through every gate.
pub mod symbol;
/// Tseitin equality clause sets for AND/OR/XOR.
pub mod tseitin;
/// Incremental CNF construction: variable allocation and clause storage.
pub mod cnf;
/// The `GateStrategy` trait and its `Eval`/`Tseitin` realizations.
pub mod gate;
/// One-bit and n-bit circuits built from gates: adders, equality, shifts.
pub mod circuit;
/// Wallace-tree and Karatsuba multiplier circuits.
pub mod multiply;
/// Assembles a multiplier and equality circuit into a factoring instance.
pub mod factoring;
/// Primality testing used by the random-number problem generator.
pub mod primality;
/// Turns a CLI request into a compiled `FactoringInstance`.
pub mod problem;
/// The DIMACS CNF text format: writer and parser.
pub mod dimacs;
/// The library's error type.
pub mod error;
/// `clap` argument definitions for the `gen-factor-sat` binary.
pub mod cli;
