use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use salary_engine::calculation::calculate_tax;
use salary_engine::fixtures::FixtureLoader;
use salary_engine::session::{
    breakdown_for_input, run_interactive, write_breakdown, write_tax_explanation,
};

/// Calculate EPF/ETF contributions, progressive tax and take-home pay.
///
/// Amounts accept thousands separators and the suffixes K (thousand),
/// L (lakh), M (million) and B (billion), e.g. `50K`, `5L`, `1.5M`.
#[derive(Parser, Debug)]
#[command(name = "salary-engine")]
#[command(version, about, long_about = None)]
struct Args {
    /// Log filter used when RUST_LOG is not set (e.g. "debug")
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Prompt for salaries until "exit" (the default)
    Interactive,

    /// Calculate the breakdown for a single salary
    Calc {
        /// The gross salary, e.g. "150000", "1,50,000" or "1.5L"
        input: String,

        /// Print the breakdown as JSON
        #[arg(long)]
        json: bool,

        /// Show how the tax was built up slab by slab
        #[arg(long)]
        explain: bool,
    },

    /// Check every case in a JSON or YAML fixture file
    Verify {
        /// Path to the fixture file
        file: PathBuf,
    },
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();
    init_tracing(&args.log_level);

    match args.command.unwrap_or(Command::Interactive) {
        Command::Interactive => interactive(),
        Command::Calc {
            input,
            json,
            explain,
        } => calc(&input, json, explain),
        Command::Verify { file } => verify(&file),
    }
}

fn init_tracing(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn interactive() -> Result<ExitCode> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    let summary = run_interactive(stdin.lock(), &mut stdout).context("Interactive session failed")?;
    debug!(?summary, "interactive session ended");

    Ok(ExitCode::SUCCESS)
}

fn calc(input: &str, json: bool, explain: bool) -> Result<ExitCode> {
    let breakdown = match breakdown_for_input(input) {
        Ok(breakdown) => breakdown,
        Err(err) => {
            warn!(input = %input, error = %err, "calculation rejected");
            eprintln!("Error: {}", err);
            return Ok(ExitCode::FAILURE);
        }
    };

    let mut stdout = io::stdout().lock();
    if json {
        let rendered =
            serde_json::to_string_pretty(&breakdown).context("Failed to serialize breakdown")?;
        writeln!(stdout, "{}", rendered)?;
    } else {
        write_breakdown(&mut stdout, &breakdown)?;
    }

    if explain {
        writeln!(stdout)?;
        write_tax_explanation(&mut stdout, &calculate_tax(breakdown.gross_salary))?;
    }

    Ok(ExitCode::SUCCESS)
}

fn verify(file: &Path) -> Result<ExitCode> {
    println!("Loading fixtures from: {}", file.display());

    let fixtures = FixtureLoader::load(file)
        .with_context(|| format!("Failed to load fixtures: {}", file.display()))?;
    let report = fixtures.verify();

    info!(
        cases = report.cases,
        failures = report.failures.len(),
        "fixture verification finished"
    );

    for failure in &report.failures {
        println!("FAIL {}", failure);
    }
    println!("{} of {} cases passed.", report.passed(), report.cases);

    Ok(if report.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
