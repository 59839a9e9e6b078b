#![warn(missing_docs)]
//! SortBench CLI
//!
//! Thin front end over the comparison harness: parses flags, provisions the
//! dataset (random size or input file), runs the trials, and prints the
//! rendered table (or JSON) to standard output. On any error it surfaces a
//! single diagnostic line and a non-zero exit through `main`.

mod executor;

pub use executor::{compare, compare_results};

use clap::Parser;
use sortbench_core::{
    Algorithm, AlgorithmSet, DEFAULT_INPUT_SIZE, DEFAULT_TEST_COUNT, Dataset, Error, SortValue,
    generate_files,
};
use sortbench_report::{OutputFormat, build_report, generate_json_report, render_table};

/// SortBench CLI arguments
#[derive(Parser, Debug)]
#[command(name = "sortbench")]
#[command(author, version, about = "Compare sorting algorithms over numeric datasets")]
pub struct Cli {
    /// Input size for random generation, or a path to a file of numbers
    pub input: Option<String>,

    /// Number of timed trials per algorithm
    #[arg(short = 't', long, default_value_t = DEFAULT_TEST_COUNT)]
    pub test_count: i64,

    /// Comma-separated algorithm subset (selection, bubble, quick, merge,
    /// insertion, heap); all six when omitted
    #[arg(short, long, value_delimiter = ',')]
    pub algorithms: Vec<String>,

    /// Generate N input files of random numbers instead of comparing
    #[arg(long, value_name = "N")]
    pub generate: Option<i64>,

    /// Values per generated file
    #[arg(long, value_name = "SIZE", default_value_t = DEFAULT_INPUT_SIZE)]
    pub generate_size: i64,

    /// Output format: human or json
    #[arg(long, default_value = "human")]
    pub format: String,

    /// Verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parse the `--algorithms` list into a selection set.
fn parse_selection(names: &[String]) -> Result<AlgorithmSet, Error> {
    if names.is_empty() {
        return Ok(AlgorithmSet::ALL);
    }
    names
        .iter()
        .map(|name| {
            Algorithm::from_name(name.trim()).ok_or_else(|| {
                Error::InvalidArgument(format!(
                    "unknown algorithm '{}'; expected one of: {}",
                    name,
                    Algorithm::ALL.map(Algorithm::name).join(", ")
                ))
            })
        })
        .collect()
}

/// Provision the dataset from the positional argument: a number means random
/// generation of that size, anything else is treated as a file path.
fn provision<T: SortValue>(input: Option<&str>) -> Result<Dataset<T>, Error> {
    match input {
        None => Dataset::generate(DEFAULT_INPUT_SIZE),
        Some(arg) => match arg.parse::<i64>() {
            Ok(size) => Dataset::generate(size),
            Err(_) => Dataset::load(arg),
        },
    }
}

/// Run the SortBench CLI with arguments from the environment.
pub fn run() -> anyhow::Result<()> {
    run_with_cli(Cli::parse())
}

/// Run the SortBench CLI with pre-parsed arguments.
pub fn run_with_cli(cli: Cli) -> anyhow::Result<()> {
    let filter = if cli.verbose {
        "sortbench=debug"
    } else {
        "sortbench=info"
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    if let Some(file_count) = cli.generate {
        generate_files::<i64>(
            ".",
            file_count,
            cli.generate_size,
            i64::RANGE_MIN,
            i64::RANGE_MAX,
        )?;
        println!(
            "generated {} files, each containing {} random inputs",
            file_count, cli.generate_size
        );
        return Ok(());
    }

    let format: OutputFormat = cli
        .format
        .parse()
        .map_err(|message: String| anyhow::anyhow!(message))?;
    let selection = parse_selection(&cli.algorithms)?;
    let dataset: Dataset<i64> = provision(cli.input.as_deref())?;
    tracing::info!(
        input_size = dataset.len(),
        test_count = cli.test_count,
        algorithms = selection.len(),
        "starting comparison"
    );

    let results = compare_results(&dataset, cli.test_count, selection)?;
    let output = match format {
        OutputFormat::Human => render_table(&results)?,
        OutputFormat::Json => {
            let mut json = generate_json_report(&build_report(results))?;
            json.push('\n');
            json
        }
    };
    print!("{output}");
    Ok(())
}
