// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! d2n-homometry - report homometric pairs of D_2n subsets

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use dihedral_homometry::report::families::write_histogram;
use dihedral_homometry::report::{open_output, Families, TextSink};
use std::process;

use cli::Cli;

fn main() {
    // Parse command-line arguments
    let cli = Cli::parse();

    // Initialize logging
    cli.init_logging();

    process::exit(exit_code(run(cli)));
}

/// Report a failed run on stderr and map it to the process exit status.
fn exit_code(result: Result<()>) -> i32 {
    match result {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            1
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = cli.config().context("invalid search parameters")?;
    config.validate().context("invalid search parameters")?;

    let output = open_output(cli.output_path()).with_context(|| match cli.output_path() {
        Some(path) => format!("Error creating the output file {}", path.display()),
        None => "Error opening standard output".to_string(),
    })?;

    let mut sink = (TextSink::new(output), Families::new());
    dihedral_homometry::run(&config, &mut sink)?;

    if cli.summary {
        let (_, families) = &sink;
        let stderr = std::io::stderr();
        families.write_summary(stderr.lock(), config.action.title())?;

        if cli.shared {
            let other = config.clone().with_action(config.action.complement());
            let mut other_families = Families::new();
            dihedral_homometry::run(&other, &mut other_families)?;
            other_families.write_summary(stderr.lock(), other.action.title())?;

            let shared = families.shared_with(&other_families);
            write_histogram(stderr.lock(), "Left and Right homometric", &shared)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn parse(args: &[&str]) -> Cli {
        let mut argv = vec!["d2n-homometry"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_unwritable_output_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.txt");
        let path = path.to_str().unwrap();

        let err = run(parse(&["4", "4", "left", path, "-q"])).unwrap_err();
        let message = format!("{:#}", err);
        assert!(message.starts_with(&format!("Error creating the output file {}: ", path)));
        assert!(!dir.path().join("missing").exists());

        let result = run(parse(&["4", "4", "left", path, "-q"]));
        assert_eq!(exit_code(result), 1);
    }

    #[test]
    fn test_invalid_parameters_fail() {
        let err = run(parse(&["0", "4", "left", "-q"])).unwrap_err();
        assert!(format!("{:#}", err).starts_with("invalid search parameters: "));
        assert_eq!(exit_code(run(parse(&["3", "7", "right", "-q"]))), 1);
    }

    #[test]
    fn test_successful_run_writes_records() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("d8_4_left.txt");
        let result = run(parse(&["4", "4", "left", path.to_str().unwrap(), "-q"]));
        assert_eq!(exit_code(result), 0);

        let text = fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("===== 0 ======\n53-89\n"));
    }

    #[test]
    fn test_empty_cardinality_succeeds() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("d6_0_left.txt");
        let result = run(parse(&["3", "0", "left", path.to_str().unwrap(), "-q"]));
        assert_eq!(exit_code(result), 0);
        assert_eq!(fs::read_to_string(&path).unwrap(), "");
    }
}
