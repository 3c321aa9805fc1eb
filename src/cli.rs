///! clap argument definitions for the `gen-factor-sat` binary. kept
///! separate from `main` so the parsed structures can be exercised in
///! tests without spawning a process.

use clap::{CommandFactory, Parser, Subcommand};
use num_bigint::BigUint;

#[derive(Parser, Debug)]
#[command(
  name = "gen-factor-sat",
  version,
  about = "Compile the factorization of a number into a DIMACS CNF satisfiability problem."
)]
pub struct Cli {
  #[command(subcommand)]
  pub command: Command,

  /// repeat for more detail: warn, info, debug, trace.
  #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
  pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Command {
  /// factor a specific number.
  Number {
    value: BigUint,

    /// omit for stdout, pass with no value for a default filename, pass
    /// a path to write there (directories are created as needed).
    #[arg(short = 'o', long = "outfile", num_args = 0..=1, default_missing_value = "")]
    outfile: Option<String>,
  },

  /// factor a number drawn uniformly from a range.
  Random {
    max_value: BigUint,

    #[arg(short = 'm', long = "min-value", default_value = "2")]
    min_value: BigUint,

    #[arg(short = 's', long = "seed")]
    seed: Option<u64>,

    #[arg(long = "prime", conflicts_with = "no_prime")]
    prime: bool,

    #[arg(long = "no-prime")]
    no_prime: bool,

    /// allowed false-positive rate for the primality filter; 0 selects a
    /// deterministic test instead of a Monte-Carlo one.
    #[arg(short = 'e', long = "error", default_value_t = 0.0)]
    error: f64,

    #[arg(short = 't', long = "tries", default_value_t = 1000)]
    tries: u32,

    #[arg(short = 'o', long = "outfile", num_args = 0..=1, default_missing_value = "")]
    outfile: Option<String>,
  },
}

impl Cli {
  /// cross-field checks clap's own derive attributes can't express
  /// (`value_parser` only sees one argument at a time). Reported through
  /// clap's own error type so the caller can `.exit()` it exactly like a
  /// parse failure -- never reachable once the core takes over.
  pub fn validate(&self) -> Result<(), clap::Error> {
    if let Command::Random { min_value, max_value, error, .. } = &self.command {
      if min_value > max_value {
        return Err(Cli::command().error(
          clap::error::ErrorKind::ValueValidation,
          format!("min-value ({min_value}) must not exceed max_value ({max_value})"),
        ));
      }
      if !(0.0..1.0).contains(error) {
        return Err(Cli::command().error(
          clap::error::ErrorKind::ValueValidation,
          format!("error must lie in [0, 1), got {error}"),
        ));
      }
    }
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test] fn parses_number_subcommand() {
    let cli = Cli::parse_from(["gen-factor-sat", "number", "15"]);
    match cli.command {
      Command::Number { value, outfile } => {
        assert_eq!(value, BigUint::from(15u32));
        assert_eq!(outfile, None);
      }
      _ => panic!("expected Number"),
    }
  }

  #[test] fn outfile_with_no_value_is_empty_string() {
    let cli = Cli::parse_from(["gen-factor-sat", "number", "15", "-o"]);
    match cli.command {
      Command::Number { outfile, .. } => assert_eq!(outfile, Some(String::new())),
      _ => panic!("expected Number"),
    }
  }

  #[test] fn parses_random_subcommand_with_flags() {
    let cli = Cli::parse_from(["gen-factor-sat", "random", "100", "--seed", "10", "--no-prime"]);
    match cli.command {
      Command::Random { max_value, seed, no_prime, .. } => {
        assert_eq!(max_value, BigUint::from(100u32));
        assert_eq!(seed, Some(10));
        assert!(no_prime);
      }
      _ => panic!("expected Random"),
    }
  }

  #[test] fn prime_and_no_prime_conflict() {
    let result = Cli::try_parse_from(["gen-factor-sat", "random", "100", "--prime", "--no-prime"]);
    assert!(result.is_err());
  }

  #[test] fn validate_rejects_min_value_above_max_value() {
    let cli = Cli::parse_from(["gen-factor-sat", "random", "5", "-m", "10"]);
    assert!(cli.validate().is_err());
  }

  #[test] fn validate_rejects_error_outside_unit_interval() {
    let cli = Cli::parse_from(["gen-factor-sat", "random", "100", "-e", "1.0"]);
    assert!(cli.validate().is_err());
    let cli = Cli::parse_from(["gen-factor-sat", "random", "100", "--error=-0.1"]);
    assert!(cli.validate().is_err());
  }

  #[test] fn validate_accepts_well_formed_random_args() {
    let cli = Cli::parse_from(["gen-factor-sat", "random", "100", "-m", "2", "-e", "0.0"]);
    assert!(cli.validate().is_ok());
  }

  #[test] fn validate_is_a_no_op_for_number() {
    let cli = Cli::parse_from(["gen-factor-sat", "number", "15"]);
    assert!(cli.validate().is_ok());
  }
}
