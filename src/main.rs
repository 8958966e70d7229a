#![deny(
    warnings,
    clippy::all,
    clippy::pedantic,
    clippy::nursery
)]

use anyhow::{Context, Result};
use clap::Parser;
use fitcalc::{cli, package, types::Training, utils};

#[macro_use]
extern crate fitcalc;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    utils::init_logging(cli.verbose, cli.quiet);

    let mut trainings: Vec<Training> = Vec::new();
    for p in &cli.packages {
        let training = package::parse_package(p).with_context(|| format!("package {p:?}"))?;
        trainings.push(training);
    }
    if let Some(input) = &cli.input {
        trainings.extend(utils::load_packages(input)?);
    }

    if cli.packages.is_empty() && cli.input.is_none() {
        dlog!("mode=samples packages={}", package::SAMPLE_PACKAGES.len());
        for p in package::SAMPLE_PACKAGES {
            trainings.push(package::parse_package(p)?);
        }
    }

    for training in &trainings {
        let report = training.report();
        if cli.json {
            println!("{}", serde_json::to_string(&report)?);
        } else {
            println!("{}", report.message());
        }
    }

    tracing::info!(reports = trainings.len(), "done");
    Ok(())
}
