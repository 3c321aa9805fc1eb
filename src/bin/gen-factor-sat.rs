///! CLI entry point: parse arguments, run the requested factorization,
///! and write the resulting DIMACS text to stdout, a default filename, or
///! a path the user chose.

use std::io::Write;
use std::path::{Path, PathBuf};

use clap::Parser;
use num_bigint::BigUint;
use simplelog::{Config, LevelFilter, SimpleLogger};

use gen_factor_sat::cli::{Cli, Command};
use gen_factor_sat::dimacs;
use gen_factor_sat::error::FactorSatError;
use gen_factor_sat::factoring::FactoringInstance;
use gen_factor_sat::multiply::Algorithm;
use gen_factor_sat::problem::{self, PrimeRequirement, Provenance, RandomParams};

fn init_logging(verbose: u8) {
  let level = match verbose {
    0 => LevelFilter::Warn,
    1 => LevelFilter::Info,
    2 => LevelFilter::Debug,
    _ => LevelFilter::Trace,
  };
  let _ = SimpleLogger::init(level, Config::default());
}

enum OutputTarget {
  Stdout,
  DefaultFilename,
  Path(String),
}

fn output_target(outfile: Option<String>) -> OutputTarget {
  match outfile.as_deref() {
    None => OutputTarget::Stdout,
    Some("") => OutputTarget::DefaultFilename,
    Some("-") => OutputTarget::Stdout,
    Some(path) => OutputTarget::Path(path.to_string()),
  }
}

fn resolve_path(raw: &str, default_name: &str) -> PathBuf {
  let path = Path::new(raw);
  if path.is_dir() {
    path.join(default_name)
  } else {
    path.to_path_buf()
  }
}

fn write_to_file(path: &Path, content: &str) -> Result<(), FactorSatError> {
  if let Some(parent) = path.parent() {
    if !parent.as_os_str().is_empty() {
      std::fs::create_dir_all(parent)?;
    }
  }
  std::fs::write(path, content)?;
  Ok(())
}

fn emit(text: &str, outfile: Option<String>, default_name: &str) -> anyhow::Result<()> {
  match output_target(outfile) {
    OutputTarget::Stdout => {
      let mut stdout = std::io::stdout();
      writeln!(stdout, "{text}")?;
      Ok(())
    }
    OutputTarget::DefaultFilename => Ok(write_to_file(Path::new(default_name), text)?),
    OutputTarget::Path(raw) => Ok(write_to_file(&resolve_path(&raw, default_name), text)?),
  }
}

fn number_comments(number: &BigUint, instance: &FactoringInstance) -> Vec<String> {
  vec![
    format!("Factorization of the number: {number}"),
    format!("Factor 1 is encoded in the variables: {:?}", instance.factor_1),
    format!("Factor 2 is encoded in the variables: {:?}", instance.factor_2),
  ]
}

fn random_comments(provenance: &Provenance, instance: &FactoringInstance) -> Vec<String> {
  let mut comments = vec![
    format!("Random number in range: {} - {}", provenance.min_value, provenance.max_value),
    format!("Seed: {}", provenance.seed),
    format!("Classification: {}", provenance.classification.tag()),
  ];
  comments.extend(number_comments(&instance.number, instance));
  comments
}

fn run_number(value: BigUint, outfile: Option<String>) -> anyhow::Result<()> {
  let instance = problem::factorize_number(&value, Algorithm::default());
  let comments = number_comments(&value, &instance);
  let text = dimacs::write(&instance.cnf, &comments);
  let default_name = format!("factor_number{value}.cnf");
  emit(&text, outfile, &default_name)
}

#[allow(clippy::too_many_arguments)]
fn run_random(
  max_value: BigUint,
  min_value: BigUint,
  seed: Option<u64>,
  prime: bool,
  no_prime: bool,
  error: f64,
  tries: u32,
  outfile: Option<String>,
) -> anyhow::Result<()> {
  let requirement = if prime {
    PrimeRequirement::Prime
  } else if no_prime {
    PrimeRequirement::Composite
  } else {
    PrimeRequirement::Either
  };
  let params = RandomParams { min_value, max_value, seed, prime: requirement, error, max_tries: tries };
  let result = problem::factorize_random(&params, Algorithm::default())?;
  let comments = random_comments(&result.provenance, &result.instance);
  let text = dimacs::write(&result.instance.cnf, &comments);
  let default_name = format!(
    "factor_seed{}_min{}_max{}_{}.cnf",
    result.provenance.seed,
    result.provenance.min_value,
    result.provenance.max_value,
    result.provenance.classification.tag()
  );
  emit(&text, outfile, &default_name)
}

fn main() -> anyhow::Result<()> {
  let cli = Cli::parse();
  if let Err(e) = cli.validate() {
    e.exit();
  }
  init_logging(cli.verbose);

  match cli.command {
    Command::Number { value, outfile } => run_number(value, outfile),
    Command::Random { max_value, min_value, seed, prime, no_prime, error, tries, outfile } => {
      run_random(max_value, min_value, seed, prime, no_prime, error, tries, outfile)
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test] fn no_outfile_flag_means_stdout() {
    assert!(matches!(output_target(None), OutputTarget::Stdout));
  }

  #[test] fn bare_dash_means_stdout() {
    assert!(matches!(output_target(Some("-".to_string())), OutputTarget::Stdout));
  }

  #[test] fn empty_value_means_default_filename() {
    assert!(matches!(output_target(Some(String::new())), OutputTarget::DefaultFilename));
  }

  #[test] fn any_other_value_is_a_path() {
    match output_target(Some("out.cnf".to_string())) {
      OutputTarget::Path(p) => assert_eq!(p, "out.cnf"),
      _ => panic!("expected Path"),
    }
  }

  #[test] fn write_to_file_wraps_io_errors_as_factorsaterror() {
    // a path under a file (not a directory) can never be created.
    let bogus = Path::new("/dev/null/unwritable/out.cnf");
    let err = write_to_file(bogus, "c 0\np cnf 0 0\n").unwrap_err();
    assert!(matches!(err, FactorSatError::Io(_)));
  }
}

